use api::CampusRole;
use dioxus::prelude::*;
use store::{gate, GateDecision, RoutePolicy};
use ui::{use_inflight_provider, use_session, use_session_provider};

use views::{Bookings, Dashboard, Login, Resources, Users};

mod views;

/// Base URL of the campus backend.
const API_BASE: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/resources")]
        Resources {},
        #[route("/bookings")]
        Bookings {},
        #[route("/users")]
        Users {},
    #[end_layout]
    #[route("/login")]
    Login {},
}

const ANY_ROLE: &[CampusRole] = &[CampusRole::Student, CampusRole::Staff, CampusRole::Admin];
const STAFF_UP: &[CampusRole] = &[CampusRole::Staff, CampusRole::Admin];

/// The route -> allowed-roles table. The router guard and the sidebar both
/// read this; no other role check decides what is reachable.
fn route_policy(route: &Route) -> RoutePolicy<CampusRole> {
    match route {
        Route::Login {} => RoutePolicy::Public,
        Route::Root {} | Route::Dashboard {} | Route::Resources {} | Route::Bookings {} => {
            RoutePolicy::Allowed(ANY_ROLE)
        }
        Route::Users {} => RoutePolicy::Allowed(STAFF_UP),
    }
}

/// Staff review bookings; staff and admins manage the resource catalogue.
pub(crate) fn can_review_bookings(role: CampusRole) -> bool {
    matches!(role, CampusRole::Staff)
}

pub(crate) fn can_manage_resources(role: CampusRole) -> bool {
    matches!(role, CampusRole::Staff | CampusRole::Admin)
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_session_provider::<CampusRole>(API_BASE);
    use_inflight_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Layout for every protected page: gate the route, then sidebar + content.
#[component]
fn Shell() -> Element {
    let state = use_session::<CampusRole>();
    let route = use_route::<Route>();
    let nav = use_navigator();

    match gate(route_policy(&route), state().role()) {
        GateDecision::ToLogin => {
            nav.replace(Route::Login {});
            return rsx! {};
        }
        GateDecision::ToHome => {
            nav.replace(Route::Dashboard {});
            return rsx! {};
        }
        GateDecision::Allow => {}
    }

    rsx! {
        div { class: "shell",
            Sidebar {}
            main { class: "shell__main", Outlet::<Route> {} }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let state = use_session::<CampusRole>();
    let api = ui::use_api();
    let current = use_route::<Route>();
    let role = state().role();

    let items = [
        (Route::Dashboard {}, "Dashboard"),
        (Route::Users {}, "Users"),
        (Route::Resources {}, "Resources"),
        (Route::Bookings {}, "Bookings"),
    ];
    // Menu visibility comes from the same table that guards the routes.
    let visible = items
        .into_iter()
        .filter(|(route, _)| gate(route_policy(route), role) == GateDecision::Allow);

    let logout = move |_| {
        let api = api.clone();
        spawn(async move {
            ui::sign_out(&api, state).await;
        });
    };

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar__brand",
                h1 { "Campus Resource" }
                p { "Management System" }
            }
            nav { class: "sidebar__nav",
                for (route, label) in visible {
                    Link {
                        to: route.clone(),
                        class: if route == current { "sidebar__link sidebar__link--active" } else { "sidebar__link" },
                        "{label}"
                    }
                }
            }
            div { class: "sidebar__footer",
                span { class: "sidebar__user", "{state().display_name()}" }
                button { class: "btn btn--ghost", onclick: logout, "Logout" }
            }
        }
    }
}

/// Redirect `/` to `/dashboard`.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_page_locked_to_staff_and_admin() {
        use GateDecision::*;

        let users = Route::Users {};
        assert_eq!(gate(route_policy(&users), None), ToLogin);
        assert_eq!(gate(route_policy(&users), Some(CampusRole::Student)), ToHome);
        assert_eq!(gate(route_policy(&users), Some(CampusRole::Staff)), Allow);
        assert_eq!(gate(route_policy(&users), Some(CampusRole::Admin)), Allow);
    }

    #[test]
    fn test_protected_pages_require_a_session() {
        for route in [Route::Dashboard {}, Route::Resources {}, Route::Bookings {}] {
            assert_eq!(gate(route_policy(&route), None), GateDecision::ToLogin);
            for role in CampusRole::ALL {
                assert_eq!(gate(route_policy(&route), Some(role)), GateDecision::Allow);
            }
        }
        assert_eq!(
            gate(route_policy(&Route::Login {}), None),
            GateDecision::Allow
        );
    }

    #[test]
    fn test_review_and_manage_splits() {
        // Staff review bookings; admins manage resources but do not review.
        assert!(can_review_bookings(CampusRole::Staff));
        assert!(!can_review_bookings(CampusRole::Admin));
        assert!(!can_review_bookings(CampusRole::Student));

        assert!(can_manage_resources(CampusRole::Staff));
        assert!(can_manage_resources(CampusRole::Admin));
        assert!(!can_manage_resources(CampusRole::Student));
    }
}
