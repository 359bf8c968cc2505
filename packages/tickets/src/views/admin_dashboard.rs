//! Admin dashboard with overview / events / users tabs. Moderation and the
//! user toggle both refetch their tab's data after every mutation.

use api::models::{format_minor, DirectoryUser, EventInfo};
use api::{tickets, EventAction, TicketsRole};
use dioxus::prelude::*;
use ui::{
    action_key, use_api, use_inflight, use_session, EmptyState, ErrorNotice, Spinner, StatCard,
    StatusBadge,
};

use crate::views::surface_error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Overview,
    Events,
    Users,
}

#[component]
pub fn AdminDashboard() -> Element {
    let mut tab = use_signal(|| Tab::Overview);
    let error = use_signal(|| None::<String>);

    let tabs = [
        (Tab::Overview, "Overview"),
        (Tab::Events, "Events"),
        (Tab::Users, "Users"),
    ];

    rsx! {
        div { class: "page",
            header { class: "page__header",
                h1 { "Admin Dashboard" }
            }
            nav { class: "tabs",
                for (value, label) in tabs {
                    button {
                        class: if tab() == value { "tab tab--active" } else { "tab" },
                        onclick: move |_| tab.set(value),
                        "{label}"
                    }
                }
            }
            if let Some(message) = error() {
                ErrorNotice { message }
            }
            match tab() {
                Tab::Overview => rsx! {
                    Overview {}
                },
                Tab::Events => rsx! {
                    EventModeration { error }
                },
                Tab::Users => rsx! {
                    UserManagement { error }
                },
            }
        }
    }
}

#[component]
fn Overview() -> Element {
    let client = use_api();
    let stats = use_resource(move || {
        let client = client.clone();
        async move { tickets::admin_dashboard(&client).await }
    });

    rsx! {
        match stats() {
            None => rsx! {
                Spinner {}
            },
            Some(Err(err)) => rsx! {
                ErrorNotice { message: err.user_message() }
            },
            Some(Ok(stats)) => rsx! {
                div { class: "stat-grid",
                    StatCard { label: "Total Users", value: stats.total_users.to_string() }
                    StatCard { label: "Total Events", value: stats.total_events.to_string() }
                    StatCard { label: "Total Bookings", value: stats.total_bookings.to_string() }
                    StatCard { label: "Revenue", value: format_minor(stats.total_revenue) }
                }
                div { class: "stat-grid",
                    StatCard { label: "Pending Events", value: stats.pending_events.to_string() }
                    StatCard { label: "Approved Events", value: stats.approved_events.to_string() }
                }
                if !stats.recent_bookings.is_empty() {
                    h2 { "Recent Bookings" }
                    table { class: "table",
                        thead {
                            tr {
                                th { "Reference" }
                                th { "Event" }
                                th { "Seats" }
                                th { "Total" }
                                th { "Payment" }
                            }
                        }
                        tbody {
                            for booking in stats.recent_bookings {
                                tr { key: "{booking.id}",
                                    td { "{booking.booking_reference}" }
                                    td { "{booking.event_name}" }
                                    td { "{booking.seats_booked}" }
                                    td { "{format_minor(booking.total_amount)}" }
                                    td {
                                        StatusBadge { status: booking.payment_status.as_str() }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn EventModeration(error: Signal<Option<String>>) -> Element {
    let client = use_api();
    let mut events = use_resource(move || {
        let client = client.clone();
        async move { tickets::list_events(&client, &Default::default()).await }
    });

    rsx! {
        match events() {
            None => rsx! {
                Spinner {}
            },
            Some(Err(err)) => rsx! {
                ErrorNotice { message: err.user_message() }
            },
            Some(Ok(list)) if list.is_empty() => rsx! {
                EmptyState { message: "No events submitted." }
            },
            Some(Ok(list)) => rsx! {
                table { class: "table",
                    thead {
                        tr {
                            th { "Event" }
                            th { "Organizer" }
                            th { "When" }
                            th { "Status" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for event in list {
                            ModerationRow {
                                key: "{event.id}",
                                event: event.clone(),
                                on_changed: move |_| events.restart(),
                                error,
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn ModerationRow(
    event: EventInfo,
    on_changed: EventHandler<()>,
    error: Signal<Option<String>>,
) -> Element {
    let client = use_api();
    let state = use_session::<TicketsRole>();
    let inflight = use_inflight();
    let id = event.id;

    let run_action = use_callback(move |action: EventAction| {
        let client = client.clone();
        let key = action_key("event", id, action.label());
        let mut inflight = inflight;
        if !inflight.write().begin(&key) {
            return;
        }
        spawn(async move {
            let result = tickets::event_action(&client, id, action).await;
            inflight.write().finish(&key);
            match result {
                Ok(()) => on_changed.call(()),
                Err(err) => surface_error(err, error, &client, state),
            }
        });
    });

    let organizer = event.organizer_name.clone().unwrap_or_default();

    rsx! {
        tr {
            td { "{event.event_name}" }
            td { "{organizer}" }
            td { "{event.date} {event.time}" }
            td {
                StatusBadge { status: event.status.as_str() }
            }
            td {
                // Only pending events offer moderation buttons.
                for action in event.status.admin_actions() {
                    button {
                        class: "btn btn--ghost",
                        disabled: inflight.read().active(&action_key("event", id, action.label())),
                        onclick: move |_| run_action.call(*action),
                        "{action.label()}"
                    }
                }
            }
        }
    }
}

#[component]
fn UserManagement(error: Signal<Option<String>>) -> Element {
    let client = use_api();
    let mut users = use_resource(move || {
        let client = client.clone();
        async move { tickets::list_users(&client).await }
    });

    rsx! {
        match users() {
            None => rsx! {
                Spinner {}
            },
            Some(Err(err)) => rsx! {
                ErrorNotice { message: err.user_message() }
            },
            Some(Ok(list)) if list.is_empty() => rsx! {
                EmptyState { message: "No users registered." }
            },
            Some(Ok(list)) => rsx! {
                table { class: "table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Status" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for user in list {
                            UserRow {
                                key: "{user.id}",
                                user: user.clone(),
                                on_changed: move |_| users.restart(),
                                error,
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn UserRow(
    user: DirectoryUser<TicketsRole>,
    on_changed: EventHandler<()>,
    error: Signal<Option<String>>,
) -> Element {
    let client = use_api();
    let state = use_session::<TicketsRole>();
    let inflight = use_inflight();
    let id = user.id;
    let next_active = !user.is_active;
    let key = action_key("user", id, if next_active { "activate" } else { "deactivate" });
    let key_active = key.clone();

    let handle_toggle = move |_| {
        let client = client.clone();
        let key = key.clone();
        let mut inflight = inflight;
        if !inflight.write().begin(&key) {
            return;
        }
        spawn(async move {
            let result = tickets::set_user_active(&client, id, next_active).await;
            inflight.write().finish(&key);
            match result {
                Ok(()) => on_changed.call(()),
                Err(err) => surface_error(err, error, &client, state),
            }
        });
    };

    rsx! {
        tr {
            td { "{user.name}" }
            td { "{user.email}" }
            td { "{user.role.label()}" }
            td {
                span {
                    class: if user.is_active { "tag tag--ok" } else { "tag tag--bad" },
                    if user.is_active { "Active" } else { "Inactive" }
                }
            }
            td {
                button {
                    class: "btn btn--ghost",
                    disabled: inflight.read().active(&key_active),
                    onclick: handle_toggle,
                    if user.is_active { "Deactivate" } else { "Activate" }
                }
            }
        }
    }
}
