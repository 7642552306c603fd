mod app;
mod hero;
mod navbar;

pub use app::App;
pub use hero::{ActionButton, ButtonVariant, Hero};
pub use navbar::Navbar;
