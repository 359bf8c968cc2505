//! Registration page. New accounts always get the plain user role.

use api::auth::RegisterRequest;
use api::TicketsRole;
use dioxus::prelude::*;
use ui::{sign_in, use_api, use_session, ErrorNotice};

use crate::{landing, Route};

#[component]
pub fn Register() -> Element {
    let state = use_session::<TicketsRole>();
    let client = use_api();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if let Some(role) = state().role() {
        nav.replace(landing(role));
        return rsx! {};
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            let request = RegisterRequest {
                name: n,
                email: e,
                password: p,
            };
            match api::auth::register::<TicketsRole>(&client, &request).await {
                Ok(session) => {
                    let role = session.role();
                    sign_in(&client, state, session);
                    nav.push(landing(role));
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-card__header",
                    h1 { "Create an Account" }
                    p { "Book tickets in a few clicks" }
                }

                form { class: "login-form", onsubmit: handle_register,
                    if let Some(message) = error() {
                        ErrorNotice { message }
                    }

                    label { "Name"
                        input {
                            r#type: "text",
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }

                    label { "Email Address"
                        input {
                            r#type: "email",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    label { "Password"
                        input {
                            r#type: "password",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    label { "Confirm Password"
                        input {
                            r#type: "password",
                            value: confirm_password(),
                            oninput: move |evt| confirm_password.set(evt.value()),
                        }
                    }

                    button {
                        class: "btn btn--primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Register" }
                    }
                }

                p { class: "login-alt",
                    "Already registered? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
