use crate::content::{self, class};
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

impl ButtonVariant {
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Primary => class::PRIMARY,
            Self::Secondary => class::SECONDARY,
        }
    }
}

/// Heading, description and the two calls to action.
#[component]
pub fn Hero() -> Element {
    rsx! {
        div { class: class::HERO,
            h1 { class: class::HEADING, {content::HEADING} }
            p { class: class::DESCRIPTION, {content::DESCRIPTION} }
            div { class: class::ACTIONS,
                ActionButton { label: content::PRIMARY_LABEL, variant: ButtonVariant::Primary }
                ActionButton { label: content::SECONDARY_LABEL, variant: ButtonVariant::Secondary }
            }
        }
    }
}

/// A styled button with no handler attached.
#[component]
pub fn ActionButton(label: &'static str, variant: ButtonVariant) -> Element {
    let classes = format!("{} {}", variant.classes(), class::BUTTON);

    rsx! {
        button { r#type: "button", class: classes, {label} }
    }
}
