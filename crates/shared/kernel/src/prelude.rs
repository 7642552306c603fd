pub use crate::domain::account::{AccountStatus, Role};
pub use crate::domain::config::ApiConfig;
pub use crate::domain::registry::{FeatureSlice, InitializedSlice};
pub use crate::security::SecurityError;
pub use crate::security::password::Passwords;
pub use crate::security::token::{Claims, TokenIssuer};

#[cfg(feature = "server")]
pub use crate::server::{ApiError, ApiState, ValidatedJson};
