//! Kernel utilities shared across slices.
//!
//! * [`config`]: layered configuration loading (file + `LCOMP__*` environment).
//! * [`security`]: Argon2 password hashing and HS256 bearer tokens.
//! * `server` (feature `server`): API state, error responses, validated JSON and the
//!   system router.
//!
//! ```rust,ignore
//! use lcomp_kernel::config::load_config;
//! use lcomp_kernel::domain::config::ApiConfig;
//!
//! let config: ApiConfig = load_config(Some("apps/server/server"))?;
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod prelude;
pub mod security;
#[cfg(feature = "server")]
pub mod server;

pub use lcomp_domain as domain;
