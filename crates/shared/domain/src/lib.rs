//! # Domain Models
//!
//! Plain data shared across the workspace: configuration, roles, account flags and the
//! slice registry. Depends only on `serde` and `bitflags`; no I/O lives here.

pub mod account;
pub mod config;
pub mod constants;
pub mod registry;
