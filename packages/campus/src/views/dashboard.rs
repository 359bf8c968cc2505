//! Role-dispatched dashboard.
//!
//! One exhaustive match on the role picks the variant; each variant fetches
//! its own aggregate counts. Stat fetch failures are logged and the cards keep
//! their zeros — the dashboard is the one place that deliberately swallows.

use api::stats::BookingStats;
use api::{campus, Api, CampusRole};
use dioxus::prelude::*;
use ui::{use_api, use_session, StatCard};

use crate::Route;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct DashboardStats {
    bookings: BookingStats,
    resources: usize,
    users: usize,
}

async fn fetch_stats(client: Api, include_users: bool) -> DashboardStats {
    let mut stats = DashboardStats::default();
    match campus::list_bookings(&client).await {
        Ok(bookings) => stats.bookings = BookingStats::collect(&bookings),
        Err(err) => tracing::error!("dashboard bookings fetch failed: {err}"),
    }
    match campus::list_resources(&client).await {
        Ok(resources) => stats.resources = resources.len(),
        Err(err) => tracing::error!("dashboard resources fetch failed: {err}"),
    }
    if include_users {
        match campus::list_users(&client).await {
            Ok(users) => stats.users = users.len(),
            Err(err) => tracing::error!("dashboard users fetch failed: {err}"),
        }
    }
    stats
}

#[component]
pub fn Dashboard() -> Element {
    let state = use_session::<CampusRole>();
    let Some(account) = state().account() else {
        return rsx! {};
    };

    // The single dispatch point from role to dashboard variant.
    match account.role {
        CampusRole::Student => rsx! { StudentWelcome { name: account.name } },
        CampusRole::Staff => rsx! { StaffWelcome { name: account.name } },
        CampusRole::Admin => rsx! { AdminWelcome { name: account.name } },
    }
}

#[component]
fn StudentWelcome(name: String) -> Element {
    let client = use_api();
    let stats = use_resource(move || {
        let client = client.clone();
        async move { fetch_stats(client, false).await }
    });
    let s = stats().unwrap_or_default();

    rsx! {
        div { class: "page",
            header { class: "page__header",
                h1 { "Welcome, {name}" }
                p { "Find and book campus resources" }
            }
            div { class: "stat-grid",
                StatCard { label: "My Bookings", value: s.bookings.total.to_string() }
                StatCard { label: "Pending", value: s.bookings.pending.to_string() }
                StatCard { label: "Approved", value: s.bookings.approved.to_string() }
                StatCard { label: "Resources", value: s.resources.to_string() }
            }
            div { class: "quick-links",
                Link { to: Route::Resources {}, class: "quick-link",
                    h3 { "Browse Resources" }
                    p { "Explore available rooms, labs and equipment" }
                }
                Link { to: Route::Bookings {}, class: "quick-link",
                    h3 { "View Bookings" }
                    p { "Track your booking requests" }
                }
            }
        }
    }
}

#[component]
fn StaffWelcome(name: String) -> Element {
    let client = use_api();
    let stats = use_resource(move || {
        let client = client.clone();
        async move { fetch_stats(client, true).await }
    });
    let s = stats().unwrap_or_default();

    rsx! {
        div { class: "page",
            header { class: "page__header",
                h1 { "Staff Control Panel" }
                p { "Welcome, {name}" }
            }
            div { class: "stat-grid",
                StatCard { label: "Pending Bookings", value: s.bookings.pending.to_string() }
                StatCard { label: "Approved Bookings", value: s.bookings.approved.to_string() }
                StatCard { label: "Total Bookings", value: s.bookings.total.to_string() }
                StatCard { label: "Resources", value: s.resources.to_string() }
            }
            div { class: "stat-grid",
                StatCard { label: "Registered Users", value: s.users.to_string() }
            }
            div { class: "quick-links",
                Link { to: Route::Bookings {}, class: "quick-link",
                    h3 { "Review Bookings" }
                    p { "Approve or reject pending requests" }
                }
                Link { to: Route::Users {}, class: "quick-link",
                    h3 { "Manage Users" }
                    p { "View and manage user accounts" }
                }
            }
        }
    }
}

#[component]
fn AdminWelcome(name: String) -> Element {
    let client = use_api();
    let stats = use_resource(move || {
        let client = client.clone();
        async move { fetch_stats(client, true).await }
    });
    let s = stats().unwrap_or_default();

    rsx! {
        div { class: "page",
            header { class: "page__header",
                h1 { "Admin Portal" }
                p { "Welcome, {name}" }
            }
            div { class: "stat-grid",
                StatCard { label: "Total Users", value: s.users.to_string() }
                StatCard { label: "Total Resources", value: s.resources.to_string() }
                StatCard { label: "Total Bookings", value: s.bookings.total.to_string() }
                StatCard { label: "Pending Bookings", value: s.bookings.pending.to_string() }
            }
            div { class: "quick-links",
                Link { to: Route::Users {}, class: "quick-link",
                    h3 { "User Management" }
                    p { "Full control over all users" }
                }
                Link { to: Route::Resources {}, class: "quick-link",
                    h3 { "Resource Control" }
                    p { "Manage all campus resources" }
                }
                Link { to: Route::Bookings {}, class: "quick-link",
                    h3 { "Booking Oversight" }
                    p { "Monitor all booking activity" }
                }
            }
        }
    }
}
