//! Event detail page: info, booking entry point, ratings.
//!
//! The seats selector caps at the server-reported availability, and a second
//! rating of the same event surfaces the server's "already rated" rejection
//! with its own message instead of the generic banner.

use api::models::{format_minor, EventInfo, RatingInput};
use api::stats::RatingSummary;
use api::{tickets, TicketsRole};
use dioxus::prelude::*;
use ui::{use_api, use_session, EmptyState, ErrorNotice, Spinner, SuccessNotice};

use crate::views::surface_error;
use crate::Route;

#[component]
pub fn EventDetail(id: i64) -> Element {
    let client = use_api();
    let event = use_resource(move || {
        let client = client.clone();
        async move { tickets::get_event(&client, id).await }
    });

    rsx! {
        div { class: "page",
            match event() {
                None => rsx! {
                    Spinner {}
                },
                Some(Err(err)) => rsx! {
                    ErrorNotice { message: err.user_message() }
                },
                Some(Ok(event)) => rsx! {
                    EventBody { event }
                    Ratings { event_id: id }
                },
            }
        }
    }
}

#[component]
fn EventBody(event: EventInfo) -> Element {
    let state = use_session::<TicketsRole>();
    let nav = use_navigator();
    let id = event.id;
    let sold_out = event.sold_out();

    let handle_book = move |_| {
        if state().is_authenticated() {
            nav.push(Route::Booking { id });
        } else {
            nav.push(Route::Login {});
        }
    };

    rsx! {
        div { class: "event-detail",
            if let Some(image) = &event.image {
                img { class: "event-detail__image", src: "{image}", alt: "{event.event_name}" }
            }
            div { class: "event-detail__body",
                h1 { "{event.event_name}" }
                p { class: "card__meta", "{event.date} · {event.time} · {event.location}" }
                if let Some(organizer) = &event.organizer_name {
                    p { class: "card__meta", "Organized by {organizer}" }
                }
                p { "{event.description}" }
                div { class: "event-detail__footer",
                    span { class: "card__price", "{format_minor(event.price)}" }
                    span { class: "card__meta", "{event.available_seats} of {event.total_seats} seats left" }
                    button {
                        class: "btn btn--primary",
                        disabled: sold_out,
                        onclick: handle_book,
                        if sold_out { "Sold Out" } else { "Book Now" }
                    }
                }
            }
        }
    }
}

#[component]
fn Ratings(event_id: i64) -> Element {
    let client = use_api();
    let state = use_session::<TicketsRole>();
    let error = use_signal(|| None::<String>);
    let mut submitted = use_signal(|| false);
    let mut score = use_signal(|| 5u8);
    let mut review = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let list_client = client.clone();
    let mut ratings = use_resource(move || {
        let client = list_client.clone();
        async move {
            tickets::list_ratings(&client, event_id).await.unwrap_or_else(|err| {
                tracing::error!("ratings fetch failed: {err}");
                Vec::new()
            })
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let mut error = error;
        saving.set(true);
        spawn(async move {
            let input = RatingInput {
                event: event_id,
                rating: score(),
                review: review(),
            };
            let result = tickets::submit_rating(&client, &input).await;
            saving.set(false);
            match result {
                Ok(_) => {
                    submitted.set(true);
                    review.set(String::new());
                    ratings.restart();
                }
                Err(err) if err.is_already_rated() => {
                    error.set(Some("You have already rated this event.".to_string()));
                }
                Err(err) => surface_error(err, error, &client, state),
            }
        });
    };

    let list = ratings().unwrap_or_default();
    let summary = RatingSummary::collect(&list);
    let stars = summary.stars();

    rsx! {
        section { class: "ratings",
            h2 {
                "Ratings"
                if summary.count > 0 {
                    span { class: "ratings__summary",
                        " {summary.display()} ({summary.count})"
                    }
                }
            }
            if summary.count > 0 {
                p { class: "ratings__stars",
                    for i in 1..=5u8 {
                        if i <= stars { "★" } else { "☆" }
                    }
                }
            }

            if state().is_authenticated() {
                form { class: "panel", onsubmit: handle_submit,
                    h3 { "Leave a rating" }
                    if let Some(message) = error() {
                        ErrorNotice { message }
                    }
                    if submitted() {
                        SuccessNotice { message: "Thanks for your rating!" }
                    }
                    div { class: "form-row",
                        label { "Stars" }
                        select {
                            onchange: move |evt| score.set(evt.value().parse().unwrap_or(5)),
                            for value in (1..=5u8).rev() {
                                option { value: "{value}", selected: value == score(), "{value}" }
                            }
                        }
                    }
                    div { class: "form-row",
                        label { "Review" }
                        textarea {
                            value: review(),
                            oninput: move |evt| review.set(evt.value()),
                        }
                    }
                    button {
                        class: "btn btn--primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Submitting..." } else { "Submit Rating" }
                    }
                }
            }

            if list.is_empty() {
                EmptyState { message: "No ratings yet." }
            } else {
                div { class: "ratings__list",
                    for rating in list {
                        div { class: "card", key: "{rating.id}",
                            div { class: "card__head",
                                strong {
                                    {rating.user_name.clone().unwrap_or_else(|| "Anonymous".to_string())}
                                }
                                span { class: "ratings__score", "{rating.rating}/5" }
                            }
                            if !rating.review.is_empty() {
                                p { "{rating.review}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
