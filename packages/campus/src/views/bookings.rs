//! Booking list and request form. Staff see approve/reject controls on
//! pending rows; the in-flight guard keeps a double click from firing the
//! same transition twice. Every successful action refetches the list.

use api::models::{CampusBooking, CampusBookingRequest, Resource};
use api::{campus, BookingAction, CampusRole};
use dioxus::prelude::*;
use ui::{
    action_key, use_api, use_inflight, use_session, EmptyState, ErrorNotice, Spinner, StatusBadge,
};

use crate::can_review_bookings;
use crate::views::surface_error;

#[component]
pub fn Bookings() -> Element {
    let client = use_api();
    let state = use_session::<CampusRole>();
    let error = use_signal(|| None::<String>);
    let mut show_form = use_signal(|| false);

    let mut bookings = use_resource(move || {
        let client = client.clone();
        async move { campus::list_bookings(&client).await }
    });

    let review = state().role().is_some_and(can_review_bookings);

    rsx! {
        div { class: "page",
            header { class: "page__header",
                h1 { "Bookings" }
                button {
                    class: "btn btn--primary",
                    onclick: move |_| show_form.set(true),
                    "New Booking"
                }
            }
            if let Some(message) = error() {
                ErrorNotice { message }
            }
            if show_form() {
                BookingForm {
                    on_done: move |created| {
                        show_form.set(false);
                        if created {
                            bookings.restart();
                        }
                    },
                }
            }
            match bookings() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    EmptyState { message: "No bookings yet." }
                },
                Some(Ok(list)) => rsx! {
                    table { class: "table",
                        thead {
                            tr {
                                th { "Resource" }
                                th { "Booked By" }
                                th { "From" }
                                th { "To" }
                                th { "Status" }
                                if review {
                                    th { "Actions" }
                                }
                            }
                        }
                        tbody {
                            for booking in list {
                                BookingRow {
                                    key: "{booking.id}",
                                    booking: booking.clone(),
                                    review,
                                    on_changed: move |_| bookings.restart(),
                                    error,
                                }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    ErrorNotice { message: err.user_message() }
                },
                None => rsx! {
                    Spinner {}
                },
            }
        }
    }
}

#[component]
fn BookingRow(
    booking: CampusBooking,
    review: bool,
    on_changed: EventHandler<()>,
    error: Signal<Option<String>>,
) -> Element {
    let client = use_api();
    let state = use_session::<CampusRole>();
    let inflight = use_inflight();
    let id = booking.id;

    let run_action = use_callback(move |action: BookingAction| {
        let client = client.clone();
        let key = action_key("booking", id, action.label());
        let mut inflight = inflight;
        if !inflight.write().begin(&key) {
            return;
        }
        spawn(async move {
            let result = campus::booking_action(&client, id, action).await;
            inflight.write().finish(&key);
            match result {
                Ok(()) => on_changed.call(()),
                Err(err) => surface_error(err, error, &client, state),
            }
        });
    });

    rsx! {
        tr {
            td { "{booking.resource_name}" }
            td { "{booking.user_name}" }
            td { "{booking.start_date}" }
            td { "{booking.end_date}" }
            td {
                StatusBadge { status: booking.status.as_str() }
            }
            if review {
                td {
                    for action in booking.status.staff_actions() {
                        button {
                            class: "btn btn--ghost",
                            disabled: inflight.read().active(&action_key("booking", id, action.label())),
                            onclick: move |_| run_action.call(*action),
                            "{action.label()}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BookingForm(on_done: EventHandler<bool>) -> Element {
    let client = use_api();
    let state = use_session::<CampusRole>();
    let error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);
    let mut request = use_signal(CampusBookingRequest::default);

    let load_client = client.clone();
    let resources = use_resource(move || {
        let client = load_client.clone();
        async move {
            campus::list_resources(&client)
                .await
                .map(|list| {
                    list.into_iter()
                        .filter(|r| r.available)
                        .collect::<Vec<Resource>>()
                })
                .unwrap_or_else(|err| {
                    tracing::error!("resource list for booking form failed: {err}");
                    Vec::new()
                })
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        saving.set(true);
        spawn(async move {
            let body = request();
            let result = campus::create_booking(&client, &body).await;
            saving.set(false);
            match result {
                Ok(_) => on_done.call(true),
                Err(err) => surface_error(err, error, &client, state),
            }
        });
    };

    rsx! {
        form { class: "panel", onsubmit: handle_submit,
            h2 { "Request a Booking" }
            if let Some(message) = error() {
                ErrorNotice { message }
            }
            div { class: "form-row",
                label { "Resource" }
                select {
                    required: true,
                    onchange: move |evt| {
                        request.write().resource = evt.value().parse().unwrap_or_default();
                    },
                    option { value: "", "Select a resource" }
                    for resource in resources().unwrap_or_default() {
                        option { value: "{resource.id}", "{resource.name} ({resource.location})" }
                    }
                }
            }
            div { class: "form-row",
                label { "Start Date" }
                input {
                    r#type: "date",
                    required: true,
                    value: "{request().start_date}",
                    oninput: move |evt| request.write().start_date = evt.value(),
                }
            }
            div { class: "form-row",
                label { "End Date" }
                input {
                    r#type: "date",
                    required: true,
                    value: "{request().end_date}",
                    oninput: move |evt| request.write().end_date = evt.value(),
                }
            }
            div { class: "form-actions",
                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Submitting..." } else { "Submit Request" }
                }
                button {
                    class: "btn btn--ghost",
                    r#type: "button",
                    onclick: move |_| on_done.call(false),
                    "Cancel"
                }
            }
        }
    }
}
