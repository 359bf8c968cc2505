//! Booking confirmation page: pick seats, see the exact total, confirm.
//!
//! Confirmation is the two-step create-then-complete-payment sequence; the
//! in-flight guard keeps a double click from creating two bookings.

use api::models::{format_minor, total_minor};
use api::{tickets, TicketsRole};
use dioxus::prelude::*;
use ui::{
    action_key, set_flash, use_api, use_flash, use_inflight, use_session, ErrorNotice, Spinner,
};

use crate::views::surface_error;
use crate::Route;

#[component]
pub fn Booking(id: i64) -> Element {
    let client = use_api();
    let state = use_session::<TicketsRole>();
    let flash = use_flash();
    let inflight = use_inflight();
    let nav = use_navigator();
    let error = use_signal(|| None::<String>);
    let mut seats = use_signal(|| 1u32);

    let load_client = client.clone();
    let event = use_resource(move || {
        let client = load_client.clone();
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
                Some(Ok(event)) => {
                    let max_seats = event.available_seats.max(1);
                    let total = total_minor(event.price, seats());
                    let key = action_key("booking", id, "confirm");
                    let key_active = key.clone();
                    let confirm_client = client.clone();
                    let handle_confirm = move |_| {
                        let client = confirm_client.clone();
                        let key = key.clone();
                        let mut inflight = inflight;
                        if !inflight.write().begin(&key) {
                            return;
                        }
                        let seats_booked = seats();
                        spawn(async move {
                            let result = tickets::confirm_booking(&client, id, seats_booked).await;
                            inflight.write().finish(&key);
                            match result {
                                Ok(booking) => {
                                    set_flash(
                                        flash,
                                        format!("Booking {} confirmed!", booking.booking_reference),
                                    );
                                    nav.push(Route::UserDashboard {});
                                }
                                Err(err) => surface_error(err, error, &client, state),
                            }
                        });
                    };

                    rsx! {
                        div { class: "panel",
                            h2 { "Confirm Booking" }
                            if let Some(message) = error() {
                                ErrorNotice { message }
                            }
                            h3 { "{event.event_name}" }
                            p { class: "card__meta",
                                "{event.date} · {event.time} · {event.location}"
                            }
                            if event.sold_out() {
                                ErrorNotice { message: "This event is sold out." }
                            } else {
                                div { class: "form-row",
                                    label { "Seats ({event.available_seats} available)" }
                                    input {
                                        r#type: "number",
                                        min: "1",
                                        max: "{max_seats}",
                                        value: "{seats()}",
                                        oninput: move |evt| {
                                            let requested = evt.value().parse().unwrap_or(1);
                                            seats.set(requested.clamp(1, max_seats));
                                        },
                                    }
                                }
                                div { class: "booking-total",
                                    span { "Ticket price" }
                                    span { "{format_minor(event.price)}" }
                                }
                                div { class: "booking-total booking-total--grand",
                                    span { "Total ({seats()} seats)" }
                                    span { "{format_minor(total)}" }
                                }
                                button {
                                    class: "btn btn--primary",
                                    disabled: inflight.read().active(&key_active),
                                    onclick: handle_confirm,
                                    if inflight.read().active(&key_active) {
                                        "Processing..."
                                    } else {
                                        "Confirm & Pay"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
