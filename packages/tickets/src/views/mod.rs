use api::{Api, ApiError, TicketsRole};
use dioxus::prelude::*;
use ui::SessionState;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod events;
pub use events::Events;

mod event_detail;
pub use event_detail::EventDetail;

mod booking;
pub use booking::Booking;

mod user_dashboard;
pub use user_dashboard::UserDashboard;

mod organizer_dashboard;
pub use organizer_dashboard::OrganizerDashboard;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboard;

mod about;
pub use about::About;

mod contact;
pub use contact::Contact;

/// The one way a page reports a failed call: 401 expires the session and
/// returns to login, everything else lands in the page's error banner.
pub(crate) fn surface_error(
    err: ApiError,
    mut error: Signal<Option<String>>,
    api: &Api,
    state: Signal<SessionState<TicketsRole>>,
) {
    if err.is_auth_failure() {
        ui::expire(api, state);
    } else {
        error.set(Some(err.user_message()));
    }
}
