use super::{Hero, Navbar};
use crate::content::class;
use dioxus::prelude::*;

/// Root of the landing view.
#[component]
pub fn App() -> Element {
    rsx! {
        div { class: class::PAGE,
            Navbar {}
            main { class: class::MAIN,
                div { class: class::WRAPPER,
                    div { class: class::PANEL, Hero {} }
                }
            }
        }
    }
}
