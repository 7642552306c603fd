//! Request and response bodies of the users API.

use super::User;
use chrono::{DateTime, Utc};
use lcomp_derive::api_model;
use lcomp_kernel::domain::account::Role;
use validator::{Validate, ValidateEmail, ValidationError};

#[api_model]
#[derive(Clone, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: String,
    #[validate(email(message = "Email should be valid"))]
    pub email: String,
    #[validate(length(min = 6, max = 100, message = "Password must be between 6 and 100 characters"))]
    pub password: String,
    #[serde(default)]
    #[validate(length(max = 50, message = "First name must not exceed 50 characters"))]
    pub first_name: Option<String>,
    #[serde(default)]
    #[validate(length(max = 50, message = "Last name must not exceed 50 characters"))]
    pub last_name: Option<String>,
}

/// Partial update; absent fields are left untouched. An empty `username` or `email`
/// counts as absent.
#[api_model]
#[derive(Clone, Default, Validate)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(custom(
        function = "blank_or_username",
        message = "Username must be between 3 and 50 characters"
    ))]
    pub username: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "blank_or_email", message = "Email should be valid"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(max = 50, message = "First name must not exceed 50 characters"))]
    pub first_name: Option<String>,
    #[serde(default)]
    #[validate(length(max = 50, message = "Last name must not exceed 50 characters"))]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_enabled: Option<bool>,
}

fn blank_or_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() || (3..=50).contains(&username.chars().count()) {
        Ok(())
    } else {
        Err(ValidationError::new("length"))
    }
}

fn blank_or_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// `USER`, `ADMIN` or `MODERATOR`.
    #[cfg_attr(feature = "server", schema(value_type = String, example = "USER"))]
    pub role: Role,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
            is_enabled: user.is_enabled(),
            created_at: user.created_at,
            updated_at: user.updated_at,
            last_login: user.last_login,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

#[api_model]
#[derive(Clone, Validate)]
pub struct LoginRequest {
    /// Username or e-mail address.
    #[validate(length(min = 1, message = "Identifier is required"))]
    pub identifier: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[api_model]
#[derive(Clone)]
pub struct LoginResponse {
    pub access_token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
    pub user: UserResponse,
}

/// Query string of `GET /api/users/search`.
#[api_model]
#[derive(Clone, Default)]
#[cfg_attr(feature = "server", derive(::utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct SearchQuery {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}
