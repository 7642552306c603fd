//! Users feature slice: account registration, lookup, administration and bearer-token login.
//!
//! The slice state ([`Users`]) bundles the [`service::UserService`] with the token issuer and
//! is registered in the API state by [`init`]. With the `server` feature the HTTP routes live
//! in [`server`].

pub mod domain;
mod error;
pub mod repository;
pub mod service;
#[cfg(feature = "server")]
pub mod server;

pub use crate::error::{UserError, UserErrorExt};

use crate::service::UserService;
use lcomp_kernel::domain::config::ApiConfig;
use lcomp_kernel::domain::registry::InitializedSlice;
use lcomp_kernel::security::token::TokenIssuer;

/// Users feature state.
#[lcomp_derive::lcomp_slice]
pub struct Users {
    pub service: UserService,
    pub tokens: TokenIssuer,
}

/// Builds the slice from configuration and seeds the administrator account when one is
/// configured.
///
/// # Errors
/// Fails on unusable JWT settings or when the administrator cannot be created.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, UserError> {
    let tokens = TokenIssuer::new(config.security.jwt.clone()).context("Invalid JWT settings")?;
    let service = UserService::in_memory();

    if let Some(admin) = &config.security.admin {
        service.seed_admin(admin).context("Failed to seed administrator")?;
    }

    tracing::info!("Users slice initialized");
    Ok(InitializedSlice::new(Users::new(UsersInner { service, tokens })))
}
