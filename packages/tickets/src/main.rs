use api::TicketsRole;
use dioxus::prelude::*;
use store::{gate, GateDecision, RoutePolicy};
use ui::{use_flash_provider, use_inflight_provider, use_session, use_session_provider};

use views::{
    About, AdminDashboard, Booking, Contact, EventDetail, Events, Home, Login,
    OrganizerDashboard, Register, UserDashboard,
};

mod views;

/// Base URL of the ticketing backend.
const API_BASE: &str = "http://localhost:8001/api";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/events")]
        Events {},
        #[route("/events/:id")]
        EventDetail { id: i64 },
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/booking/:id")]
        Booking { id: i64 },
        #[route("/user/dashboard")]
        UserDashboard {},
        #[route("/organizer/dashboard")]
        OrganizerDashboard {},
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const USER_ONLY: &[TicketsRole] = &[TicketsRole::User];
const ORGANIZER_UP: &[TicketsRole] = &[TicketsRole::Organizer, TicketsRole::Admin];
const ADMIN_ONLY: &[TicketsRole] = &[TicketsRole::Admin];

/// The route -> allowed-roles table. Browsing is public; booking and the
/// dashboards are not. The router guard and the navbar both read this.
fn route_policy(route: &Route) -> RoutePolicy<TicketsRole> {
    match route {
        Route::Home {}
        | Route::Login {}
        | Route::Register {}
        | Route::Events {}
        | Route::EventDetail { .. }
        | Route::About {}
        | Route::Contact {}
        | Route::NotFound { .. } => RoutePolicy::Public,
        Route::Booking { .. } | Route::UserDashboard {} => RoutePolicy::Allowed(USER_ONLY),
        Route::OrganizerDashboard {} => RoutePolicy::Allowed(ORGANIZER_UP),
        Route::AdminDashboard {} => RoutePolicy::Allowed(ADMIN_ONLY),
    }
}

/// Where a fresh login lands, by role.
pub(crate) fn landing(role: TicketsRole) -> Route {
    match role {
        TicketsRole::User => Route::Home {},
        TicketsRole::Organizer => Route::OrganizerDashboard {},
        TicketsRole::Admin => Route::AdminDashboard {},
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_session_provider::<TicketsRole>(API_BASE);
    use_inflight_provider();
    use_flash_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Layout for every page: gate the route, then navbar + content.
#[component]
fn Shell() -> Element {
    let state = use_session::<TicketsRole>();
    let route = use_route::<Route>();
    let nav = use_navigator();

    match gate(route_policy(&route), state().role()) {
        GateDecision::ToLogin => {
            nav.replace(Route::Login {});
            return rsx! {};
        }
        GateDecision::ToHome => {
            nav.replace(Route::Home {});
            return rsx! {};
        }
        GateDecision::Allow => {}
    }

    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "app__main", Outlet::<Route> {} }
        }
    }
}

#[component]
fn Navbar() -> Element {
    let state = use_session::<TicketsRole>();
    let api = ui::use_api();
    let nav = use_navigator();
    let role = state().role();

    let items = [
        (Route::Home {}, "Home"),
        (Route::Events {}, "Events"),
        (Route::About {}, "About"),
        (Route::Contact {}, "Contact"),
        (Route::UserDashboard {}, "My Bookings"),
        (Route::OrganizerDashboard {}, "Organizer"),
        (Route::AdminDashboard {}, "Admin"),
    ];
    // Link visibility comes from the same table that guards the routes.
    let visible = items
        .into_iter()
        .filter(|(route, _)| gate(route_policy(route), role) == GateDecision::Allow);

    let logout = move |_| {
        let api = api.clone();
        spawn(async move {
            ui::sign_out(&api, state).await;
            nav.replace(Route::Home {});
        });
    };

    rsx! {
        header { class: "navbar",
            Link { to: Route::Home {}, class: "navbar__brand", "College Events" }
            nav { class: "navbar__links",
                for (route, label) in visible {
                    Link { to: route, class: "navbar__link", "{label}" }
                }
            }
            div { class: "navbar__session",
                if state().is_authenticated() {
                    span { class: "navbar__user", "{state().display_name()}" }
                    button { class: "btn btn--ghost", onclick: logout, "Logout" }
                } else {
                    Link { to: Route::Login {}, class: "btn btn--ghost", "Login" }
                    Link { to: Route::Register {}, class: "btn btn--primary", "Register" }
                }
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        div { class: "page",
            h1 { "Page not found" }
            Link { to: Route::Home {}, class: "btn btn--primary", "Back to Home" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_is_role_aware() {
        assert_eq!(landing(TicketsRole::User), Route::Home {});
        assert_eq!(landing(TicketsRole::Organizer), Route::OrganizerDashboard {});
        assert_eq!(landing(TicketsRole::Admin), Route::AdminDashboard {});
    }

    #[test]
    fn test_dashboards_locked_to_their_roles() {
        use GateDecision::*;

        let admin = Route::AdminDashboard {};
        assert_eq!(gate(route_policy(&admin), None), ToLogin);
        assert_eq!(gate(route_policy(&admin), Some(TicketsRole::User)), ToHome);
        assert_eq!(gate(route_policy(&admin), Some(TicketsRole::Organizer)), ToHome);
        assert_eq!(gate(route_policy(&admin), Some(TicketsRole::Admin)), Allow);

        let organizer = Route::OrganizerDashboard {};
        assert_eq!(gate(route_policy(&organizer), Some(TicketsRole::User)), ToHome);
        assert_eq!(gate(route_policy(&organizer), Some(TicketsRole::Organizer)), Allow);
        assert_eq!(gate(route_policy(&organizer), Some(TicketsRole::Admin)), Allow);

        // Booking is for plain users; organizers and admins are sent home.
        let booking = Route::Booking { id: 3 };
        assert_eq!(gate(route_policy(&booking), None), ToLogin);
        assert_eq!(gate(route_policy(&booking), Some(TicketsRole::User)), Allow);
        assert_eq!(gate(route_policy(&booking), Some(TicketsRole::Organizer)), ToHome);
    }

    #[test]
    fn test_browsing_is_public() {
        for role in [None, Some(TicketsRole::User), Some(TicketsRole::Admin)] {
            assert_eq!(
                gate(route_policy(&Route::Events {}), role),
                GateDecision::Allow
            );
            assert_eq!(
                gate(route_policy(&Route::EventDetail { id: 1 }), role),
                GateDecision::Allow
            );
            assert_eq!(
                gate(route_policy(&Route::About {}), role),
                GateDecision::Allow
            );
            assert_eq!(
                gate(route_policy(&Route::Contact {}), role),
                GateDecision::Allow
            );
        }
    }
}
