//! # Wire types for both backends
//!
//! Everything here is a read-only snapshot of server-owned state. The client
//! holds the most recent successful fetch and nothing else; after a mutation
//! the view refetches rather than patching these structures.
//!
//! Roles are closed enumerations, one per portal: [`CampusRole`] for the
//! resource-booking portal and [`TicketsRole`] for the event portal. Adding a
//! role is a compile-time-checked change because every dispatch on them is an
//! exhaustive `match`.
//!
//! Money is carried in integer minor units (paise). A booking total is
//! `price * seats` exactly; [`format_minor`] is display-only.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lifecycle::{BookingStatus, EventStatus, PaymentStatus};

// ---------------------------------------------------------------------------
// Roles

/// Roles of the campus resource-booking portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampusRole {
    Student,
    Staff,
    Admin,
}

impl CampusRole {
    pub const ALL: [CampusRole; 3] = [CampusRole::Student, CampusRole::Staff, CampusRole::Admin];

    pub fn label(self) -> &'static str {
        match self {
            CampusRole::Student => "Student",
            CampusRole::Staff => "Staff",
            CampusRole::Admin => "Admin",
        }
    }
}

impl fmt::Display for CampusRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CampusRole::Student => "student",
            CampusRole::Staff => "staff",
            CampusRole::Admin => "admin",
        };
        f.write_str(s)
    }
}

impl FromStr for CampusRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(CampusRole::Student),
            "staff" => Ok(CampusRole::Staff),
            "admin" => Ok(CampusRole::Admin),
            _ => Err(()),
        }
    }
}

/// Roles of the event-ticketing portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketsRole {
    User,
    Organizer,
    Admin,
}

impl TicketsRole {
    pub const ALL: [TicketsRole; 3] =
        [TicketsRole::User, TicketsRole::Organizer, TicketsRole::Admin];

    pub fn label(self) -> &'static str {
        match self {
            TicketsRole::User => "User",
            TicketsRole::Organizer => "Organizer",
            TicketsRole::Admin => "Admin",
        }
    }
}

impl fmt::Display for TicketsRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TicketsRole::User => "user",
            TicketsRole::Organizer => "organizer",
            TicketsRole::Admin => "admin",
        };
        f.write_str(s)
    }
}

impl FromStr for TicketsRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(TicketsRole::User),
            "organizer" => Ok(TicketsRole::Organizer),
            "admin" => Ok(TicketsRole::Admin),
            _ => Err(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Campus portal

/// A bookable campus resource (room, lab, equipment).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub r#type: String,
    pub location: String,
    pub available: bool,
}

/// Fields the staff resource form submits. The server assigns everything else.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ResourceInput {
    pub name: String,
    pub description: String,
    pub r#type: String,
    pub location: String,
    pub available: bool,
}

/// A resource booking as listed by the campus backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampusBooking {
    pub id: i64,
    pub resource: i64,
    pub resource_name: String,
    pub user_name: String,
    pub start_date: String,
    pub end_date: String,
    pub status: BookingStatus,
}

/// Request body for `POST /bookings` on the campus backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CampusBookingRequest {
    pub resource: i64,
    pub start_date: String,
    pub end_date: String,
}

/// A row in the user-management tables of either portal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectoryUser<R> {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: R,
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// Tickets portal

/// An event as served by the tickets backend.
///
/// `price` is in minor units; `date`/`time` stay as the server's strings and
/// are forwarded and displayed verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventInfo {
    pub id: i64,
    pub event_name: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub price: i64,
    pub total_seats: u32,
    pub available_seats: u32,
    pub status: EventStatus,
    #[serde(default)]
    pub organizer_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl EventInfo {
    pub fn sold_out(&self) -> bool {
        self.available_seats == 0
    }
}

/// Fields of the organizer's create/edit event form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EventInput {
    pub event_name: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub price: i64,
    pub total_seats: u32,
}

/// A ticket booking, including the event fields the lists render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketBooking {
    pub id: i64,
    pub booking_reference: String,
    pub event: i64,
    pub event_name: String,
    pub event_date: String,
    pub event_time: String,
    pub event_location: String,
    pub seats_booked: u32,
    /// Server-derived `price * seats_booked`, minor units.
    pub total_amount: i64,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /bookings` on the tickets backend. The status is
/// always submitted as pending; payment completion is a separate call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TicketBookingRequest {
    pub event: i64,
    pub seats_booked: u32,
    pub payment_status: PaymentStatus,
}

impl TicketBookingRequest {
    pub fn pending(event: i64, seats_booked: u32) -> Self {
        Self {
            event,
            seats_booked,
            payment_status: PaymentStatus::Pending,
        }
    }
}

/// One rating of an event. The one-rating-per-(user, event) rule is enforced
/// server-side; the client only surfaces the resulting rejection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: i64,
    pub event: i64,
    #[serde(default)]
    pub user_name: Option<String>,
    /// 1 to 5 stars.
    pub rating: u8,
    #[serde(default)]
    pub review: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /ratings`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RatingInput {
    pub event: i64,
    pub rating: u8,
    pub review: String,
}

/// Filters on the events listing, forwarded verbatim as query parameters.
/// The client performs no local filtering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventFilters {
    pub search: Option<String>,
    pub location: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl EventFilters {
    /// Query pairs for the set fields only, in a fixed order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("min_price", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("max_price", max.to_string()));
        }
        if let Some(start) = &self.start_date {
            pairs.push(("start_date", start.clone()));
        }
        if let Some(end) = &self.end_date {
            pairs.push(("end_date", end.clone()));
        }
        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.to_pairs().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Money

/// `price * seats`, exact. Prices are minor units so there is nothing to round.
pub fn total_minor(price_minor: i64, seats: u32) -> i64 {
    price_minor * i64::from(seats)
}

/// Parse a user-typed amount like `"599.97"` or `"120"` into minor units.
/// String arithmetic only; no float ever touches a price.
pub fn parse_minor(input: &str) -> Option<i64> {
    let input = input.trim();
    if input.starts_with('-') {
        return None;
    }
    let (whole, frac) = match input.split_once('.') {
        Some((w, f)) => (w, f),
        None => (input, ""),
    };
    if whole.is_empty() || frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let units: i64 = whole.parse().ok()?;
    let cents: i64 = if frac.is_empty() {
        0
    } else if frac.len() == 1 {
        frac.parse::<i64>().ok()? * 10
    } else {
        frac.parse().ok()?
    };
    units.checked_mul(100)?.checked_add(cents)
}

/// Render minor units as `₹12.50`. Display only.
pub fn format_minor(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{sign}₹{}.{:02}", abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips() {
        for role in CampusRole::ALL {
            assert_eq!(role.to_string().parse::<CampusRole>(), Ok(role));
        }
        for role in TicketsRole::ALL {
            assert_eq!(role.to_string().parse::<TicketsRole>(), Ok(role));
        }
        assert!("superuser".parse::<CampusRole>().is_err());
    }

    #[test]
    fn test_role_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&TicketsRole::Organizer).unwrap(),
            "\"organizer\""
        );
        let role: CampusRole = serde_json::from_str("\"staff\"").unwrap();
        assert_eq!(role, CampusRole::Staff);
    }

    #[test]
    fn test_filters_emit_only_set_fields() {
        let empty = EventFilters::default();
        assert!(empty.is_empty());

        let filters = EventFilters {
            search: Some("music".into()),
            max_price: Some(50_000),
            ..Default::default()
        };
        assert_eq!(
            filters.to_pairs(),
            vec![("search", "music".to_string()), ("max_price", "50000".to_string())]
        );
    }

    #[test]
    fn test_totals_are_exact() {
        // 199.99 a seat, three seats.
        assert_eq!(total_minor(19_999, 3), 59_997);
        assert_eq!(total_minor(0, 10), 0);
        assert_eq!(total_minor(1, 0), 0);
        assert_eq!(format_minor(59_997), "₹599.97");
        assert_eq!(format_minor(500), "₹5.00");
    }

    #[test]
    fn test_parse_minor_never_goes_through_floats() {
        assert_eq!(parse_minor("599.97"), Some(59_997));
        assert_eq!(parse_minor("120"), Some(12_000));
        assert_eq!(parse_minor("0.5"), Some(50));
        assert_eq!(parse_minor(" 5.00 "), Some(500));
        assert_eq!(parse_minor(""), None);
        assert_eq!(parse_minor("1.999"), None);
        assert_eq!(parse_minor("-3"), None);
        assert_eq!(parse_minor("-0.5"), None);
        assert_eq!(parse_minor("abc"), None);
    }

    #[test]
    fn test_booking_request_is_always_pending() {
        let req = TicketBookingRequest::pending(12, 2);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["payment_status"], "pending");
        assert_eq!(json["event"], 12);
        assert_eq!(json["seats_booked"], 2);
    }
}
