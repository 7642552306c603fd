#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the workspace.
//!
//! * [`macro@lcomp_error`] turns an enum into a `thiserror` error with context support.
//! * [`macro@api_model`] and [`macro@api_handler`] keep DTOs and Axum handlers consistent
//!   and wire them into `utoipa` when the consumer enables its `server` feature.
//! * [`macro@lcomp_slice`] builds the `Arc` handle registered in the kernel slice registry.
//! * [`macro@main`] boots an `async fn main` on a pre-configured Tokio runtime
//!   (re-exported as `lcomp_runtime::main`).
//!
//! Examples are `ignore`d here since a proc-macro crate cannot use its own macros in doctests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the specialized Tokio runtime.
///
/// Turns an `async fn main` returning a `Result` into a plain `fn main` that builds
/// the runtime for the requested profile and blocks on the body.
///
/// # Arguments
///
/// * `high_performance` - Optimized for high-throughput server environments.
/// * `memory_efficient` - Optimized for low-footprint client or edge environments.
/// * `default` - Worker threads auto-detected from available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[lcomp_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Defines a request/response model of the HTTP API.
///
/// * **Derives**: adds `Debug`, `Serialize` and `Deserialize` when missing.
/// * **`OpenAPI`**: adds `utoipa::ToSchema` under the consumer's `server` feature.
/// * **Serde policy**: `rename_all = "camelCase"` and `deny_unknown_fields` unless overridden.
///
/// # Arguments
///
/// * `rename_all = "..."` - Overrides the Serde rename policy.
/// * `deny_unknown_fields = false` - Accepts unknown fields.
///
/// # Example
///
/// ```rust,ignore
/// #[lcomp_derive::api_model]
/// pub struct LoginRequest {
///     pub identifier: String,
///     pub password: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Bridges an Axum handler with its `OpenAPI` description.
///
/// Accepts the regular `utoipa::path` arguments (`get`, `path = "..."`, `params(...)`,
/// `responses(...)`, `tag = ...`). The `utoipa::path` attribute is only emitted when the
/// consumer's `server` feature is enabled.
///
/// # Example
///
/// ```rust,ignore
/// #[lcomp_derive::api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = SYSTEM_TAG,
/// )]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Declares an error enum for a crate of the workspace.
///
/// * Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * Generates a `<Name>Ext` trait adding `.context(...)` to `Result<T, Name>` and to
///   `Result<T, Source>` for every variant holding a `source` field.
/// * Implements `From<Source>` for those variants, so `?` works on upstream errors.
/// * Implements `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * Emits a private `format_context` helper for use in `#[error(...)]` strings.
///
/// Variants must use named fields; variants with a source must carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// #[lcomp_derive::lcomp_error]
/// pub enum StoreError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Vec<u8>, StoreError> {
///     std::fs::read("users.bin").context("Reading user snapshot")
/// }
/// ```
#[proc_macro_attribute]
pub fn lcomp_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a feature slice handle.
///
/// The annotated fields move into a generated `<Name>Inner` struct; `<Name>` becomes a
/// cheap-to-clone `Arc` wrapper that derefs to it and implements
/// `lcomp_kernel::domain::registry::FeatureSlice`.
///
/// # Example
/// ```rust,ignore
/// #[lcomp_derive::lcomp_slice]
/// pub struct Users {
///     pub service: UserService,
/// }
///
/// let slice = Users::new(UsersInner { service });
/// ```
#[proc_macro_attribute]
pub fn lcomp_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
