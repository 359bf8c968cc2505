//! # API crate — REST client layer shared by both portals
//!
//! Everything the campus and tickets frontends know about their backends lives
//! here: typed endpoint wrappers, the bearer-token plumbing, the error
//! taxonomy, and the lifecycle dispatch tables the views use to decide which
//! action buttons to offer.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Api`]: base URL + `reqwest` client + shared bearer token |
//! | [`error`] | [`ApiError`] taxonomy and the unified presentation message |
//! | [`models`] | Wire types for both backends, role enums, filters, money |
//! | [`lifecycle`] | Action -> (method, path) dispatch and observed state machines |
//! | [`stats`] | Client-side derived aggregation (counts, averages, revenue) |
//! | [`auth`] | Login / logout, shaped identically for both backends |
//! | [`campus`] | Resources, bookings, users endpoints of the campus backend |
//! | [`tickets`] | Events, bookings, ratings, dashboards of the tickets backend |
//!
//! The client never patches local state after a mutation; views call the
//! matching `list` again and replace their copy with the server's snapshot.

pub mod auth;
pub mod campus;
pub mod client;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod stats;
pub mod tickets;

pub use client::Api;
pub use error::ApiError;
pub use lifecycle::{BookingAction, EventAction};
pub use models::{CampusRole, TicketsRole};
