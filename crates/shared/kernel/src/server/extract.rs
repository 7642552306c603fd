use super::response::ApiError;
use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

const BEARER_PREFIX: &str = "Bearer ";

/// `Json<T>` that also runs `T`'s `validator` rules.
///
/// Malformed JSON, a wrong content type and failed rules all answer `400` with an
/// [`super::ErrorBody`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        value.validate().map_err(|errors| ApiError::bad_request(errors.to_string()))?;

        Ok(Self(value))
    }
}

/// Extracts the token from `Authorization: Bearer <token>`.
///
/// # Errors
/// Returns `401` when the header is missing, not ASCII, uses another scheme or is empty.
pub fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::unauthorized("Expected a Bearer token"))?;

    Ok(token)
}
