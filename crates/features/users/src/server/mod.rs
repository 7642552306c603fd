//! HTTP surface of the users slice.

pub mod auth;
mod handlers;
pub mod router;

pub use auth::{AdminUser, CurrentUser};
pub use router::router;

use crate::error::UserError;
use crate::Users;
use lcomp_kernel::security::SecurityError;
use lcomp_kernel::server::{ApiError, ApiState};

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound { .. } => Self::not_found(err.to_string()),
            UserError::Conflict { .. } | UserError::Validation { .. } => {
                Self::bad_request(err.to_string())
            },
            UserError::InvalidCredentials { .. } | UserError::Inactive { .. } => {
                Self::unauthorized(err.to_string())
            },
            UserError::Security { source: source @ SecurityError::Token { .. }, .. } => {
                source.into()
            },
            UserError::Security { .. } | UserError::Internal { .. } => Self::internal(err.to_string()),
        }
    }
}

pub(crate) fn users(state: &ApiState) -> Result<&Users, ApiError> {
    Ok(state.try_get_slice::<Users>()?)
}
