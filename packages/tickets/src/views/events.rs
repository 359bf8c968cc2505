//! Event listing with the filter bar. Filters go to the server verbatim;
//! changing any of them refetches, nothing is filtered locally.

use api::models::{parse_minor, EventFilters};
use api::tickets;
use dioxus::prelude::*;
use ui::{use_api, EmptyState, ErrorNotice, Spinner};

use super::home::EventCard;

/// An empty box clears the bound; anything else must be a price in the
/// same notation the event cards display, carried as minor units.
fn price_bound(text: &str) -> Result<Option<i64>, &'static str> {
    if text.trim().is_empty() {
        Ok(None)
    } else {
        parse_minor(text)
            .map(Some)
            .ok_or("Enter prices like 199.99")
    }
}

#[component]
pub fn Events() -> Element {
    let client = use_api();
    let mut filters = use_signal(EventFilters::default);
    let mut min_price_text = use_signal(String::new);
    let mut max_price_text = use_signal(String::new);
    let mut price_error = use_signal(|| None::<String>);

    // The resource reads `filters`, so every edit triggers a refetch.
    let events = use_resource(move || {
        let client = client.clone();
        let filters = filters();
        async move { tickets::list_events(&client, &filters).await }
    });

    let set_opt = |value: String| if value.is_empty() { None } else { Some(value) };

    rsx! {
        div { class: "page",
            header { class: "page__header",
                h1 { "All Events" }
            }
            div { class: "filter-bar",
                input {
                    placeholder: "Search events...",
                    value: filters().search.unwrap_or_default(),
                    oninput: move |evt| filters.write().search = set_opt(evt.value()),
                }
                input {
                    placeholder: "Location",
                    value: filters().location.unwrap_or_default(),
                    oninput: move |evt| filters.write().location = set_opt(evt.value()),
                }
                input {
                    placeholder: "Min price",
                    value: "{min_price_text()}",
                    oninput: move |evt| {
                        min_price_text.set(evt.value());
                        match price_bound(&evt.value()) {
                            Ok(bound) => {
                                price_error.set(None);
                                filters.write().min_price = bound;
                            }
                            Err(msg) => price_error.set(Some(msg.to_string())),
                        }
                    },
                }
                input {
                    placeholder: "Max price",
                    value: "{max_price_text()}",
                    oninput: move |evt| {
                        max_price_text.set(evt.value());
                        match price_bound(&evt.value()) {
                            Ok(bound) => {
                                price_error.set(None);
                                filters.write().max_price = bound;
                            }
                            Err(msg) => price_error.set(Some(msg.to_string())),
                        }
                    },
                }
                input {
                    r#type: "date",
                    value: filters().start_date.unwrap_or_default(),
                    oninput: move |evt| filters.write().start_date = set_opt(evt.value()),
                }
                input {
                    r#type: "date",
                    value: filters().end_date.unwrap_or_default(),
                    oninput: move |evt| filters.write().end_date = set_opt(evt.value()),
                }
                button {
                    class: "btn btn--ghost",
                    onclick: move |_| {
                        filters.set(EventFilters::default());
                        min_price_text.set(String::new());
                        max_price_text.set(String::new());
                        price_error.set(None);
                    },
                    "Clear"
                }
            }
            if let Some(msg) = price_error() {
                ErrorNotice { message: msg }
            }
            match events() {
                None => rsx! {
                    Spinner {}
                },
                Some(Err(err)) => rsx! {
                    ErrorNotice { message: err.user_message() }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    EmptyState { message: "No events match your filters." }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "card-grid",
                        for event in list {
                            EventCard { key: "{event.id}", event }
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::price_bound;
    use api::models::format_minor;

    #[test]
    fn test_price_filters_share_the_display_units() {
        // Typing a price exactly as a card shows it keeps the bound.
        assert_eq!(price_bound("199.99"), Ok(Some(19_999)));
        // A whole-rupee amount means rupees, not minor units.
        let bound = price_bound("200").unwrap().unwrap();
        assert_eq!(format_minor(bound), "₹200.00");
        // Empty clears the bound; garbage surfaces an error instead of
        // silently dropping the filter.
        assert_eq!(price_bound(""), Ok(None));
        assert_eq!(price_bound("   "), Ok(None));
        assert!(price_bound("abc").is_err());
    }
}
