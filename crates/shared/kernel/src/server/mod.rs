//! HTTP plumbing shared by every slice router.

pub mod extract;
mod health;
pub mod response;
pub mod router;
pub mod state;

pub use extract::{ValidatedJson, bearer_token};
pub use response::{ApiError, ErrorBody};
pub use state::{ApiState, ApiStateBuilder, ApiStateError};
