//! Small presentational pieces shared by both portals.

use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation};
use crate::Icon;

/// A dashboard stat card: big number, small label.
#[component]
pub fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "stat-card",
            p { class: "stat-card__label", "{label}" }
            p { class: "stat-card__value", "{value}" }
        }
    }
}

/// The single error-presentation convention: a banner at the top of the page.
#[component]
pub fn ErrorNotice(message: String) -> Element {
    rsx! {
        div {
            class: "notice notice--error",
            Icon { icon: FaCircleExclamation, width: 16, height: 16 }
            span { "{message}" }
        }
    }
}

/// Green banner for one-shot success messages.
#[component]
pub fn SuccessNotice(message: String) -> Element {
    rsx! {
        div {
            class: "notice notice--success",
            Icon { icon: FaCircleCheck, width: 16, height: 16 }
            span { "{message}" }
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "empty-state",
            p { "{message}" }
        }
    }
}
