//! Resource catalogue: everyone browses, staff and admins get the
//! create/edit/delete controls. Every mutation refetches the list.

use api::models::{Resource, ResourceInput};
use api::{campus, CampusRole};
use dioxus::prelude::*;
use ui::{use_api, use_session, EmptyState, ErrorNotice, Spinner};

use crate::can_manage_resources;
use crate::views::surface_error;

#[component]
pub fn Resources() -> Element {
    let client = use_api();
    let state = use_session::<CampusRole>();
    let error = use_signal(|| None::<String>);
    // Some(None) = creating, Some(Some(r)) = editing r.
    let mut editing = use_signal(|| None::<Option<Resource>>);

    let mut resources = use_resource(move || {
        let client = client.clone();
        async move { campus::list_resources(&client).await }
    });

    let manage = state().role().is_some_and(can_manage_resources);

    rsx! {
        div { class: "page",
            header { class: "page__header",
                h1 { "Resources" }
                if manage {
                    button {
                        class: "btn btn--primary",
                        onclick: move |_| editing.set(Some(None)),
                        "Add Resource"
                    }
                }
            }
            if let Some(message) = error() {
                ErrorNotice { message }
            }
            if let Some(form) = editing() {
                ResourceForm {
                    existing: form,
                    on_done: move |saved| {
                        editing.set(None);
                        if saved {
                            resources.restart();
                        }
                    },
                }
            }
            match resources() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    EmptyState { message: "No resources yet." }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "card-grid",
                        for resource in list {
                            ResourceCard {
                                key: "{resource.id}",
                                resource: resource.clone(),
                                manage,
                                on_edit: move |r| editing.set(Some(Some(r))),
                                on_deleted: move |_| resources.restart(),
                                error,
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
fn ResourceCard(
    resource: Resource,
    manage: bool,
    on_edit: EventHandler<Resource>,
    on_deleted: EventHandler<()>,
    error: Signal<Option<String>>,
) -> Element {
    let client = use_api();
    let state = use_session::<CampusRole>();
    let id = resource.id;
    let edit_copy = resource.clone();

    let handle_delete = move |_| {
        let client = client.clone();
        spawn(async move {
            match campus::delete_resource(&client, id).await {
                Ok(()) => on_deleted.call(()),
                Err(err) => surface_error(err, error, &client, state),
            }
        });
    };

    rsx! {
        div { class: "card",
            div { class: "card__head",
                h3 { "{resource.name}" }
                span {
                    class: if resource.available { "tag tag--ok" } else { "tag tag--bad" },
                    if resource.available { "Available" } else { "Unavailable" }
                }
            }
            p { class: "card__meta", "{resource.r#type} · {resource.location}" }
            p { "{resource.description}" }
            if manage {
                div { class: "card__actions",
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
}

#[component]
fn ResourceForm(existing: Option<Resource>, on_done: EventHandler<bool>) -> Element {
    let client = use_api();
    let state = use_session::<CampusRole>();
    let error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let id = existing.as_ref().map(|r| r.id);
    let mut input = use_signal(move || match existing {
        Some(r) => ResourceInput {
            name: r.name,
            description: r.description,
            r#type: r.r#type,
            location: r.location,
            available: r.available,
        },
        None => ResourceInput {
            available: true,
            ..Default::default()
        },
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        saving.set(true);
        spawn(async move {
            let body = input();
            let result = match id {
                Some(id) => campus::update_resource(&client, id, &body).await.map(|_| ()),
                None => campus::create_resource(&client, &body).await.map(|_| ()),
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
            h2 { if id.is_some() { "Edit Resource" } else { "New Resource" } }
            if let Some(message) = error() {
                ErrorNotice { message }
            }
            div { class: "form-row",
                label { "Name" }
                input {
                    value: "{input().name}",
                    required: true,
                    oninput: move |evt| input.write().name = evt.value(),
                }
            }
            div { class: "form-row",
                label { "Type" }
                input {
                    value: "{input().r#type}",
                    required: true,
                    oninput: move |evt| input.write().r#type = evt.value(),
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
                label { "Description" }
                textarea {
                    value: "{input().description}",
                    oninput: move |evt| input.write().description = evt.value(),
                }
            }
            div { class: "form-row form-row--inline",
                label { "Available" }
                input {
                    r#type: "checkbox",
                    checked: input().available,
                    onchange: move |evt| input.write().available = evt.checked(),
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
