//! Facade crate for Login Components features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `lcomp` with the desired feature flags (`server`/`ssr`).
//! - Call `lcomp::init` (server) to register feature slices.

pub use lcomp_domain as domain;
pub use lcomp_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use lcomp_kernel::server::router::system_router;
        pub use lcomp_users::server::router as users_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use lcomp_landing as landing;
    pub use lcomp_users as users;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "landing",
        "users",
        #[cfg(feature = "server")]
        "server",
        #[cfg(feature = "ssr")]
        "ssr",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
#[cfg(feature = "server")]
pub fn init(
    config: &domain::config::ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let mut slices = Vec::new();

    // Users & login
    slices.push(features::users::init(config)?);

    Ok(slices)
}
