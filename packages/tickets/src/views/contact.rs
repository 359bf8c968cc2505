//! Static contact page. The form has no backend: submitting shows a
//! confirmation and resets the fields.

use dioxus::prelude::*;
use ui::SuccessNotice;

#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submitted.set(true);
        name.set(String::new());
        email.set(String::new());
        subject.set(String::new());
        message.set(String::new());
    };

    rsx! {
        div { class: "page",
            header { class: "page__header",
                h1 { "Contact Us" }
                p { "Have questions? We'd love to hear from you!" }
            }
            div { class: "card-grid",
                form { class: "panel", onsubmit: handle_submit,
                    h2 { "Send us a Message" }
                    if submitted() {
                        SuccessNotice {
                            message: "Message sent successfully! We'll get back to you soon.",
                        }
                    }
                    div { class: "form-row",
                        label { "Your Name" }
                        input {
                            required: true,
                            value: "{name()}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div { class: "form-row",
                        label { "Email Address" }
                        input {
                            r#type: "email",
                            required: true,
                            value: "{email()}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "form-row",
                        label { "Subject" }
                        input {
                            required: true,
                            value: "{subject()}",
                            oninput: move |evt| subject.set(evt.value()),
                        }
                    }
                    div { class: "form-row",
                        label { "Message" }
                        textarea {
                            required: true,
                            rows: "5",
                            value: "{message()}",
                            oninput: move |evt| message.set(evt.value()),
                        }
                    }
                    button { class: "btn btn--primary", r#type: "submit", "Send Message" }
                }
                div { class: "panel",
                    h2 { "Get in Touch" }
                    div { class: "form-row",
                        h3 { "Address" }
                        p {
                            "College Campus, Main Building, Ground Floor"
                            br {}
                            "Chennai, Tamil Nadu 600001"
                        }
                    }
                    div { class: "form-row",
                        h3 { "Phone" }
                        p { "+91 98765 43210" }
                    }
                    div { class: "form-row",
                        h3 { "Email" }
                        p { "events@college.edu" }
                        p { "support@college.edu" }
                    }
                    div { class: "form-row",
                        h3 { "Working Hours" }
                        p { "Monday - Friday: 9:00 AM - 6:00 PM" }
                        p { "Saturday: 9:00 AM - 2:00 PM" }
                        p { "Sunday: Closed" }
                    }
                }
            }
        }
    }
}
