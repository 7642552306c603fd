use crate::content::{self, class};
use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: class::NAV,
            div { class: class::NAV_INNER,
                span { class: class::BRAND, {content::BRAND} }
            }
        }
    }
}
