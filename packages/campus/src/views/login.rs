//! Login page with demo quick-login buttons.

use api::auth::DemoAccount;
use api::CampusRole;
use dioxus::prelude::*;
use ui::{sign_in, use_api, use_session, ErrorNotice};

use crate::Route;

/// Fixed role-tagged demo accounts, one per role.
const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        label: "Student",
        email: "student@campus.edu",
        password: "student123",
    },
    DemoAccount {
        label: "Staff",
        email: "staff@campus.edu",
        password: "staff123",
    },
    DemoAccount {
        label: "Admin",
        email: "admin@campus.edu",
        password: "admin123",
    },
];

#[component]
pub fn Login() -> Element {
    let state = use_session::<CampusRole>();
    let client = use_api();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: nothing to do here.
    if state().is_authenticated() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match api::auth::login::<CampusRole>(&client, &email(), &password()).await {
                Ok(session) => {
                    sign_in(&client, state, session);
                    nav.push(Route::Dashboard {});
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
                    h1 { "Campus Resource" }
                    p { "Management System" }
                }

                form { class: "login-form", onsubmit: handle_login,
                    if let Some(message) = error() {
                        ErrorNotice { message }
                    }

                    label { "Email Address"
                        input {
                            r#type: "email",
                            placeholder: "your.email@campus.edu",
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
            }
        }
    }
}
