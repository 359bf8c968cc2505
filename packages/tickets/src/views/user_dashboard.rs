//! The ticket-holder's dashboard: own bookings, with cancel where the
//! observed lifecycle still allows it.

use api::models::{format_minor, TicketBooking};
use api::{tickets, BookingAction, TicketsRole};
use dioxus::prelude::*;
use ui::{
    action_key, take_flash, use_api, use_flash, use_inflight, use_session, EmptyState, ErrorNotice,
    Spinner, StatusBadge, SuccessNotice,
};

use crate::views::surface_error;
use crate::Route;

#[component]
pub fn UserDashboard() -> Element {
    let client = use_api();
    let state = use_session::<TicketsRole>();
    let flash = use_flash();
    let error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);

    // A message left by the booking page survives exactly one render here.
    use_hook(move || {
        if let Some(message) = take_flash(flash) {
            notice.set(Some(message));
        }
    });

    let mut bookings = use_resource(move || {
        let client = client.clone();
        async move { tickets::list_my_bookings(&client).await }
    });

    rsx! {
        div { class: "page",
            header { class: "page__header",
                h1 { "My Bookings" }
                span { class: "card__meta", "Welcome, {state().display_name()}" }
            }
            if let Some(message) = notice() {
                SuccessNotice { message }
            }
            if let Some(message) = error() {
                ErrorNotice { message }
            }
            match bookings() {
                None => rsx! {
                    Spinner {}
                },
                Some(Err(err)) => rsx! {
                    ErrorNotice { message: err.user_message() }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    EmptyState { message: "You have no bookings yet." }
                    Link { to: Route::Events {}, class: "btn btn--primary", "Browse Events" }
                },
                Some(Ok(list)) => rsx! {
                    table { class: "table",
                        thead {
                            tr {
                                th { "Reference" }
                                th { "Event" }
                                th { "When" }
                                th { "Seats" }
                                th { "Total" }
                                th { "Payment" }
                                th { "" }
                            }
                        }
                        tbody {
                            for booking in list {
                                BookingRow {
                                    key: "{booking.id}",
                                    booking: booking.clone(),
                                    on_changed: move |_| {
                                        notice.set(Some("Booking cancelled.".to_string()));
                                        bookings.restart();
                                    },
                                    error,
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn BookingRow(
    booking: TicketBooking,
    on_changed: EventHandler<()>,
    error: Signal<Option<String>>,
) -> Element {
    let client = use_api();
    let state = use_session::<TicketsRole>();
    let inflight = use_inflight();
    let id = booking.id;
    let key = action_key("booking", id, "cancel");
    let key_active = key.clone();

    let handle_cancel = move |_| {
        let client = client.clone();
        let key = key.clone();
        let mut inflight = inflight;
        if !inflight.write().begin(&key) {
            return;
        }
        spawn(async move {
            let result = tickets::booking_action(&client, id, BookingAction::Cancel).await;
            inflight.write().finish(&key);
            match result {
                Ok(()) => on_changed.call(()),
                Err(err) => surface_error(err, error, &client, state),
            }
        });
    };

    rsx! {
        tr {
            td { "{booking.booking_reference}" }
            td { "{booking.event_name}" }
            td { "{booking.event_date} {booking.event_time}" }
            td { "{booking.seats_booked}" }
            td { "{format_minor(booking.total_amount)}" }
            td {
                StatusBadge { status: booking.payment_status.as_str() }
            }
            td {
                // Cancel is only offered on completed bookings.
                if booking.payment_status.can_cancel() {
                    button {
                        class: "btn btn--ghost",
                        disabled: inflight.read().active(&key_active),
                        onclick: handle_cancel,
                        "Cancel"
                    }
                }
            }
        }
    }
}
