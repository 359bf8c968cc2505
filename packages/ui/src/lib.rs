//! This crate contains all shared UI for the two portals.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{
    expire, redirect, sign_in, sign_out, use_api, use_session, use_session_provider, SessionState,
};

mod inflight;
pub use inflight::{action_key, use_inflight, use_inflight_provider, InFlight};

mod flash;
pub use flash::{set_flash, take_flash, use_flash, use_flash_provider, Flash};

mod badge;
pub use badge::StatusBadge;

mod widgets;
pub use widgets::{EmptyState, ErrorNotice, Spinner, StatCard, SuccessNotice};
