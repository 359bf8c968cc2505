//! Landing page: featured and upcoming events, fetched concurrently.

use api::models::{format_minor, EventInfo};
use api::tickets;
use dioxus::prelude::*;
use ui::{use_api, EmptyState, Spinner};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let client = use_api();
    let featured_client = client.clone();
    let featured = use_resource(move || {
        let client = featured_client.clone();
        async move {
            tickets::featured_events(&client).await.unwrap_or_else(|err| {
                tracing::error!("featured events fetch failed: {err}");
                Vec::new()
            })
        }
    });
    let upcoming = use_resource(move || {
        let client = client.clone();
        async move {
            tickets::upcoming_events(&client).await.unwrap_or_else(|err| {
                tracing::error!("upcoming events fetch failed: {err}");
                Vec::new()
            })
        }
    });

    rsx! {
        div { class: "page",
            section { class: "hero",
                h1 { "Discover College Events" }
                p { "Book tickets for fests, workshops and shows across campus" }
                Link { to: Route::Events {}, class: "btn btn--primary", "Browse All Events" }
            }
            section {
                h2 { "Featured" }
                EventStrip { events: featured() }
            }
            section {
                h2 { "Upcoming" }
                EventStrip { events: upcoming() }
            }
        }
    }
}

#[component]
fn EventStrip(events: Option<Vec<EventInfo>>) -> Element {
    match events {
        None => rsx! {
            Spinner {}
        },
        Some(list) if list.is_empty() => rsx! {
            EmptyState { message: "Nothing here yet." }
        },
        Some(list) => rsx! {
            div { class: "card-grid",
                for event in list {
                    EventCard { key: "{event.id}", event }
                }
            }
        },
    }
}

#[component]
pub fn EventCard(event: EventInfo) -> Element {
    rsx! {
        Link { to: Route::EventDetail { id: event.id }, class: "card card--event",
            if let Some(image) = &event.image {
                img { class: "card__image", src: "{image}", alt: "{event.event_name}" }
            }
            div { class: "card__body",
                div { class: "card__head",
                    h3 { "{event.event_name}" }
                    if event.sold_out() {
                        span { class: "tag tag--bad", "Sold Out" }
                    }
                }
                p { class: "card__meta", "{event.date} · {event.time} · {event.location}" }
                p { class: "card__price", "{format_minor(event.price)}" }
            }
        }
    }
}
