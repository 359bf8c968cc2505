//! Login page. Where you land afterwards depends on your role.

use api::auth::DemoAccount;
use api::TicketsRole;
use dioxus::prelude::*;
use ui::{sign_in, use_api, use_session, ErrorNotice};

use crate::{landing, Route};

/// Fixed role-tagged demo accounts, one per role.
const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        label: "User",
        email: "user@college.edu",
        password: "user123",
    },
    DemoAccount {
        label: "Organizer",
        email: "organizer@college.edu",
        password: "organizer123",
    },
    DemoAccount {
        label: "Admin",
        email: "admin@college.edu",
        password: "admin123",
    },
];

#[component]
pub fn Login() -> Element {
    let state = use_session::<TicketsRole>();
    let client = use_api();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: go straight to the role's landing page.
    if let Some(role) = state().role() {
        nav.replace(landing(role));
        return rsx! {};
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match api::auth::login::<TicketsRole>(&client, &email(), &password()).await {
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
                    h1 { "College Events" }
                    p { "Sign in to book tickets" }
                }

                form { class: "login-form", onsubmit: handle_login,
                    if let Some(message) = error() {
                        ErrorNotice { message }
                    }

                    label { "Email Address"
                        input {
                            r#type: "email",
                            placeholder: "your.email@college.edu",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    label { "Password"
                        input {
                            r#type: "password",
                            placeholder: "••••••••",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    button {
                        class: "btn btn--primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                div { class: "login-demo",
                    p { "Quick login" }
                    div { class: "login-demo__buttons",
                        for account in DEMO_ACCOUNTS {
                            button {
                                class: "btn btn--ghost",
                                onclick: move |_| {
                                    email.set(account.email.to_string());
                                    password.set(account.password.to_string());
                                },
                                "{account.label}"
                            }
                        }
                    }
                }

                p { class: "login-alt",
                    "New here? "
                    Link { to: Route::Register {}, "Create an account" }
                }
            }
        }
    }
}
