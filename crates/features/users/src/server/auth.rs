//! Bearer-token extractors.
//!
//! Both re-read the account on every request, so deleting or disabling a user revokes
//! their outstanding tokens immediately.

use super::users;
use crate::domain::User;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lcomp_kernel::server::{ApiError, ApiState, bearer_token};

/// Any signed-in, active account.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<ApiState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &ApiState) -> Result<Self, Self::Rejection> {
        let users = users(state)?;
        let claims = users.tokens.verify(bearer_token(parts)?)?;

        let id = claims
            .sub
            .parse::<u64>()
            .map_err(|_| ApiError::unauthorized("Malformed token subject"))?;
        let user = users
            .service
            .find_user(id)
            .map_err(|_| ApiError::unauthorized("Account no longer exists"))?;

        if !user.can_authenticate() {
            return Err(ApiError::unauthorized("Account is not active"));
        }

        Ok(Self(user))
    }
}

/// A [`CurrentUser`] holding the `ADMIN` role; other roles get `403`.
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

impl FromRequestParts<ApiState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &ApiState) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        if !user.is_admin() {
            tracing::debug!(user_id = user.id, role = %user.role, "Admin route refused");
            return Err(ApiError::forbidden("Administrator role required"));
        }

        Ok(Self(user))
    }
}
