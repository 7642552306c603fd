//! The landing view.
//!
//! A static page made of a navigation bar and a centered hero panel. Every
//! component is a pure function of its props; nothing here holds state, spawns
//! work or handles events.
//!
//! With the `ssr` feature the view can also be rendered to an HTML string, which
//! is how the API server serves it at `/`.

pub mod components;
pub mod content;

#[cfg(feature = "ssr")]
mod ssr;

pub use components::{ActionButton, App, ButtonVariant, Hero, Navbar};

#[cfg(feature = "ssr")]
pub use ssr::{render_app, render_document};
