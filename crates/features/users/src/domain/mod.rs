pub mod dto;

use chrono::{DateTime, Utc};
use lcomp_kernel::domain::account::{AccountStatus, Role};

/// A stored user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Role,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.status.is_enabled()
    }

    /// Enabled, unlocked, unexpired and with unexpired credentials.
    #[must_use]
    pub const fn can_authenticate(&self) -> bool {
        self.status.can_authenticate()
    }

    #[must_use]
    pub fn authorities(&self) -> Vec<String> {
        vec![self.role.authority()]
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A user before the store assigns its id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Role,
    pub status: AccountStatus,
}
