//! User directory for staff and admins. The only mutation is the
//! activate/deactivate toggle, guarded against double clicks and followed by
//! a refetch.

use api::models::DirectoryUser;
use api::{campus, CampusRole};
use dioxus::prelude::*;
use ui::{action_key, use_api, use_inflight, use_session, EmptyState, ErrorNotice, Spinner};

use crate::views::surface_error;

#[component]
pub fn Users() -> Element {
    let client = use_api();
    let error = use_signal(|| None::<String>);

    let mut users = use_resource(move || {
        let client = client.clone();
        async move { campus::list_users(&client).await }
    });

    rsx! {
        div { class: "page",
            header { class: "page__header",
                h1 { "Users" }
            }
            if let Some(message) = error() {
                ErrorNotice { message }
            }
            match users() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    EmptyState { message: "No users found." }
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
fn UserRow(
    user: DirectoryUser<CampusRole>,
    on_changed: EventHandler<()>,
    error: Signal<Option<String>>,
) -> Element {
    let client = use_api();
    let state = use_session::<CampusRole>();
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
            let result = campus::set_user_active(&client, id, next_active).await;
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
