use api::{Api, ApiError, CampusRole};
use dioxus::prelude::*;
use ui::SessionState;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod resources;
pub use resources::Resources;

mod bookings;
pub use bookings::Bookings;

mod users;
pub use users::Users;

/// The one way a page reports a failed call: 401 expires the session and
/// returns to login, everything else lands in the page's error banner.
pub(crate) fn surface_error(
    err: ApiError,
    mut error: Signal<Option<String>>,
    api: &Api,
    state: Signal<SessionState<CampusRole>>,
) {
    if err.is_auth_failure() {
        ui::expire(api, state);
    } else {
        error.set(Some(err.user_message()));
    }
}
