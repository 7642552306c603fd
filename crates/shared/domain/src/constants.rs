/// Product name shown in window titles and the navigation bar.
pub const APP_NAME: &str = "Login Components";

/// Entity name used in log fields and error contexts.
pub const USER: &str = "user";

/// OpenAPI tags.
pub const SYSTEM_TAG: &str = "System";
pub const USERS_TAG: &str = "Users";
pub const AUTH_TAG: &str = "Auth";

/// Prefix applied to a [`crate::account::Role`] to form a granted authority.
pub const AUTHORITY_PREFIX: &str = "ROLE_";

/// Prefix for environment overrides (`LCOMP__SERVER__PORT=8080`).
pub const ENV_PREFIX: &str = "LCOMP";
