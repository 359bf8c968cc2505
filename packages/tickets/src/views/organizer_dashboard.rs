//! Organizer dashboard: server-computed stats plus the organizer's own
//! events, with the create/edit/delete forms. Every mutation refetches the
//! whole dashboard payload.

use api::models::{format_minor, parse_minor, EventInfo, EventInput};
use api::{tickets, TicketsRole};
use dioxus::prelude::*;
use ui::{use_api, use_session, EmptyState, ErrorNotice, Spinner, StatCard, StatusBadge};

use crate::views::surface_error;

#[component]
pub fn OrganizerDashboard() -> Element {
    let client = use_api();
    let error = use_signal(|| None::<String>);
    // Some(None) = creating, Some(Some(e)) = editing e.
    let mut editing = use_signal(|| None::<Option<EventInfo>>);

    let mut dashboard = use_resource(move || {
        let client = client.clone();
        async move { tickets::organizer_dashboard(&client).await }
    });

    rsx! {
        div { class: "page",
            header { class: "page__header",
                h1 { "Organizer Dashboard" }
                button {
                    class: "btn btn--primary",
                    onclick: move |_| editing.set(Some(None)),
                    "Create Event"
                }
            }
            if let Some(message) = error() {
                ErrorNotice { message }
            }
            if let Some(form) = editing() {
                EventForm {
                    existing: form,
                    on_done: move |saved| {
                        editing.set(None);
                        if saved {
                            dashboard.restart();
                        }
                    },
                }
            }
            match dashboard() {
                None => rsx! {
                    Spinner {}
                },
                Some(Err(err)) => rsx! {
                    ErrorNotice { message: err.user_message() }
                },
                Some(Ok(stats)) => rsx! {
                    div { class: "stat-grid",
                        StatCard { label: "Total Events", value: stats.total_events.to_string() }
                        StatCard { label: "Approved Events", value: stats.approved_events.to_string() }
                        StatCard { label: "Total Bookings", value: stats.total_bookings.to_string() }
                        StatCard { label: "Revenue", value: format_minor(stats.total_revenue) }
                    }
                    h2 { "My Events" }
                    if stats.my_events.is_empty() {
                        EmptyState { message: "You have not created any events yet." }
                    } else {
                        table { class: "table",
                            thead {
                                tr {
                                    th { "Event" }
                                    th { "When" }
                                    th { "Price" }
                                    th { "Seats" }
                                    th { "Status" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for event in stats.my_events {
                                    EventRow {
                                        key: "{event.id}",
                                        event: event.clone(),
                                        on_edit: move |e| editing.set(Some(Some(e))),
                                        on_deleted: move |_| dashboard.restart(),
                                        error,
                                    }
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
fn EventRow(
    event: EventInfo,
    on_edit: EventHandler<EventInfo>,
    on_deleted: EventHandler<()>,
    error: Signal<Option<String>>,
) -> Element {
    let client = use_api();
    let state = use_session::<TicketsRole>();
    let id = event.id;
    let edit_copy = event.clone();

    let handle_delete = move |_| {
        let client = client.clone();
        spawn(async move {
            match tickets::delete_event(&client, id).await {
                Ok(()) => on_deleted.call(()),
                Err(err) => surface_error(err, error, &client, state),
            }
        });
    };

    rsx! {
        tr {
            td { "{event.event_name}" }
            td { "{event.date} {event.time}" }
            td { "{format_minor(event.price)}" }
            td { "{event.available_seats}/{event.total_seats}" }
            td {
                StatusBadge { status: event.status.as_str() }
            }
            td {
                button {
                    class: "btn btn--ghost",
                    onclick: move |_| on_edit.call(edit_copy.clone()),
                    "Edit"
                }
                button { class: "btn btn--ghost", onclick: handle_delete, "Delete" }
            }
        }
    }
}

#[component]
fn EventForm(existing: Option<EventInfo>, on_done: EventHandler<bool>) -> Element {
    let client = use_api();
    let state = use_session::<TicketsRole>();
    let error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let id = existing.as_ref().map(|e| e.id);
    let mut price_text = use_signal(|| {
        existing
            .as_ref()
            .map(|e| format!("{}.{:02}", e.price / 100, e.price % 100))
            .unwrap_or_default()
    });
    let mut input = use_signal(move || match existing {
        Some(e) => EventInput {
            event_name: e.event_name,
            description: e.description,
            date: e.date,
            time: e.time,
            location: e.location,
            price: e.price,
            total_seats: e.total_seats,
        },
        None => EventInput::default(),
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let mut error = error;
        let Some(price) = parse_minor(&price_text()) else {
            error.set(Some("Enter a valid price, e.g. 199.99".to_string()));
            return;
        };
        saving.set(true);
        spawn(async move {
            let mut body = input();
            body.price = price;
            let result = match id {
                Some(id) => tickets::update_event(&client, id, &body).await.map(|_| ()),
                None => tickets::create_event(&client, &body).await.map(|_| ()),
            };
            saving.set(false);
            match result {
                Ok(()) => on_done.call(true),
                Err(err) => surface_error(err, error, &client, state),
            }
        });
    };

    rsx! {
        form { class: "panel", onsubmit: handle_submit,
            h2 { if id.is_some() { "Edit Event" } else { "New Event" } }
            if let Some(message) = error() {
                ErrorNotice { message }
            }
            div { class: "form-row",
                label { "Name" }
                input {
                    value: "{input().event_name}",
                    required: true,
                    oninput: move |evt| input.write().event_name = evt.value(),
                }
            }
            div { class: "form-row",
                label { "Description" }
                textarea {
                    value: "{input().description}",
                    oninput: move |evt| input.write().description = evt.value(),
                }
            }
            div { class: "form-row",
                label { "Date" }
                input {
                    r#type: "date",
                    required: true,
                    value: "{input().date}",
                    oninput: move |evt| input.write().date = evt.value(),
                }
            }
            div { class: "form-row",
                label { "Time" }
                input {
                    r#type: "time",
                    required: true,
                    value: "{input().time}",
                    oninput: move |evt| input.write().time = evt.value(),
                }
            }
            div { class: "form-row",
                label { "Location" }
                input {
                    value: "{input().location}",
                    required: true,
                    oninput: move |evt| input.write().location = evt.value(),
                }
            }
            div { class: "form-row",
                label { "Ticket Price" }
                input {
                    placeholder: "199.99",
                    required: true,
                    value: "{price_text()}",
                    oninput: move |evt| price_text.set(evt.value()),
                }
            }
            div { class: "form-row",
                label { "Total Seats" }
                input {
                    r#type: "number",
                    min: "1",
                    required: true,
                    value: "{input().total_seats}",
                    oninput: move |evt| {
                        input.write().total_seats = evt.value().parse().unwrap_or(0);
                    },
                }
            }
            div { class: "form-actions",
                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save" }
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
