use dioxus::prelude::*;

/// Colored pill for a lifecycle status string.
#[component]
pub fn StatusBadge(status: String) -> Element {
    let class = match status.as_str() {
        "approved" | "completed" => "badge badge--ok",
        "pending" => "badge badge--warn",
        "rejected" | "cancelled" => "badge badge--bad",
        _ => "badge",
    };
    let label = status.to_uppercase();

    rsx! {
        span { class: "{class}", "{label}" }
    }
}
