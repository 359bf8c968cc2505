//! Static about page: history, mission and the event committee.

use dioxus::prelude::*;

struct Member {
    name: &'static str,
    role: &'static str,
    dept: &'static str,
}

const COMMITTEE: &[Member] = &[
    Member { name: "Dr. Rajesh Kumar", role: "Faculty Coordinator", dept: "CSE Department" },
    Member { name: "Priya Sharma", role: "Student President", dept: "Event Committee" },
    Member { name: "Arjun Patel", role: "Technical Head", dept: "IT Department" },
    Member { name: "Sneha Reddy", role: "Cultural Secretary", dept: "Arts Department" },
];

const ACHIEVEMENTS: &[(&str, &str, &str)] = &[
    ("2025", "Best College Event Management", "State Level Award"),
    ("2024", "Most Innovative Tech Fest", "University Recognition"),
    ("2023", "Outstanding Cultural Programs", "Regional Award"),
    ("2022", "Excellence in Sports Events", "District Championship"),
];

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "page",
            header { class: "page__header",
                h1 { "About Us" }
                p { "Empowering students through memorable events and experiences" }
            }
            section { class: "panel",
                h2 { "Our History" }
                p {
                    "Founded in 1985, our college has been a beacon of excellence in "
                    "education and extracurricular activities. With over 35 years of "
                    "legacy, we have consistently organized world-class events that "
                    "bring together students, faculty and industry professionals."
                }
                p {
                    "Today we proudly host over 50 events annually, with participation "
                    "from more than 5,000 students across departments."
                }
            }
            div { class: "card-grid",
                div { class: "panel",
                    h2 { "Our Mission" }
                    ul {
                        li { "Provide a platform for students to showcase their talents" }
                        li { "Foster creativity, innovation and leadership skills" }
                        li { "Create memorable experiences through quality events" }
                        li { "Bridge the gap between academics and practical skills" }
                    }
                }
                div { class: "panel",
                    h2 { "Our Vision" }
                    ul {
                        li { "Be the leading college in event management excellence" }
                        li { "Create a vibrant campus culture through diverse events" }
                        li { "Empower every student to participate and excel" }
                        li { "Set new standards in student engagement" }
                    }
                }
            }
            section { class: "panel",
                h2 { "Event Committee" }
                div { class: "card-grid",
                    for member in COMMITTEE {
                        div { class: "card",
                            h3 { "{member.name}" }
                            p { class: "card__meta", "{member.role}" }
                            p { class: "card__meta", "{member.dept}" }
                        }
                    }
                }
            }
            section { class: "panel",
                h2 { "Achievements" }
                table { class: "table",
                    thead {
                        tr {
                            th { "Year" }
                            th { "Title" }
                            th { "Award" }
                        }
                    }
                    tbody {
                        for (year, title, award) in ACHIEVEMENTS {
                            tr {
                                td { "{year}" }
                                td { "{title}" }
                                td { "{award}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
