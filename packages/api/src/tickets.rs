//! Endpoint wrappers for the event-ticketing backend.

use reqwest::Method;
use serde::Deserialize;

use crate::client::Api;
use crate::error::ApiError;
use crate::lifecycle::{BookingAction, EventAction};
use crate::models::{
    DirectoryUser, EventFilters, EventInfo, EventInput, Rating, RatingInput, TicketBooking,
    TicketBookingRequest, TicketsRole,
};

// Events -------------------------------------------------------------------

/// List events. Filters go out verbatim as query parameters; the server does
/// all filtering.
pub async fn list_events(api: &Api, filters: &EventFilters) -> Result<Vec<EventInfo>, ApiError> {
    let mut builder = api.request(Method::GET, "/events");
    if !filters.is_empty() {
        builder = builder.query(&filters.to_pairs());
    }
    api.execute(builder).await
}

pub async fn featured_events(api: &Api) -> Result<Vec<EventInfo>, ApiError> {
    api.execute(api.request(Method::GET, "/events/featured")).await
}

pub async fn upcoming_events(api: &Api) -> Result<Vec<EventInfo>, ApiError> {
    api.execute(api.request(Method::GET, "/events/upcoming")).await
}

pub async fn get_event(api: &Api, id: i64) -> Result<EventInfo, ApiError> {
    api.execute(api.request(Method::GET, &format!("/events/{id}")))
        .await
}

pub async fn create_event(api: &Api, input: &EventInput) -> Result<EventInfo, ApiError> {
    api.execute(api.request(Method::POST, "/events").json(input))
        .await
}

pub async fn update_event(api: &Api, id: i64, input: &EventInput) -> Result<EventInfo, ApiError> {
    api.execute(
        api.request(Method::PATCH, &format!("/events/{id}"))
            .json(input),
    )
    .await
}

pub async fn delete_event(api: &Api, id: i64) -> Result<(), ApiError> {
    api.execute_unit(api.request(Method::DELETE, &format!("/events/{id}")))
        .await
}

/// Request an event moderation transition (admin).
pub async fn event_action(api: &Api, id: i64, action: EventAction) -> Result<(), ApiError> {
    api.execute_unit(api.request(action.method(), &action.path(id)))
        .await
}

// Bookings -----------------------------------------------------------------

pub async fn list_my_bookings(api: &Api) -> Result<Vec<TicketBooking>, ApiError> {
    api.execute(api.request(Method::GET, "/bookings")).await
}

pub async fn create_booking(
    api: &Api,
    request: &TicketBookingRequest,
) -> Result<TicketBooking, ApiError> {
    api.execute(api.request(Method::POST, "/bookings").json(request))
        .await
}

pub async fn booking_action(api: &Api, id: i64, action: BookingAction) -> Result<(), ApiError> {
    api.execute_unit(api.request(action.method(), &action.path(id)))
        .await
}

/// The two-step confirmation: create the booking as pending, then immediately
/// mark payment complete (a simulated gateway, unconditional).
///
/// There is no compensating action if the second call fails: the booking is
/// left pending on the server and the error is surfaced as-is. Defining
/// recovery semantics belongs to the backend owner, not this client.
pub async fn confirm_booking(
    api: &Api,
    event: i64,
    seats_booked: u32,
) -> Result<TicketBooking, ApiError> {
    let booking = create_booking(api, &TicketBookingRequest::pending(event, seats_booked)).await?;
    booking_action(api, booking.id, BookingAction::CompletePayment).await?;
    Ok(booking)
}

// Ratings ------------------------------------------------------------------

pub async fn list_ratings(api: &Api, event: i64) -> Result<Vec<Rating>, ApiError> {
    api.execute(
        api.request(Method::GET, "/ratings")
            .query(&[("event", event)]),
    )
    .await
}

pub async fn submit_rating(api: &Api, input: &RatingInput) -> Result<Rating, ApiError> {
    api.execute(api.request(Method::POST, "/ratings").json(input))
        .await
}

// Users (admin) ------------------------------------------------------------

pub async fn list_users(api: &Api) -> Result<Vec<DirectoryUser<TicketsRole>>, ApiError> {
    api.execute(api.request(Method::GET, "/users")).await
}

#[derive(serde::Serialize)]
struct ActivePatch {
    is_active: bool,
}

pub async fn set_user_active(api: &Api, id: i64, is_active: bool) -> Result<(), ApiError> {
    api.execute_unit(
        api.request(Method::PATCH, &format!("/users/{id}"))
            .json(&ActivePatch { is_active }),
    )
    .await
}

// Dashboards ---------------------------------------------------------------

/// Server-computed organizer stats plus the organizer's own events.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OrganizerStats {
    pub total_events: u32,
    pub approved_events: u32,
    pub total_bookings: u32,
    /// Minor units.
    pub total_revenue: i64,
    pub my_events: Vec<EventInfo>,
}

/// Server-computed admin overview.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AdminStats {
    pub total_users: u32,
    pub total_events: u32,
    pub total_bookings: u32,
    /// Minor units.
    pub total_revenue: i64,
    pub pending_events: u32,
    pub approved_events: u32,
    #[serde(default)]
    pub recent_bookings: Vec<TicketBooking>,
}

pub async fn organizer_dashboard(api: &Api) -> Result<OrganizerStats, ApiError> {
    api.execute(api.request(Method::GET, "/dashboard/organizer"))
        .await
}

pub async fn admin_dashboard(api: &Api) -> Result<AdminStats, ApiError> {
    api.execute(api.request(Method::GET, "/dashboard/admin")).await
}
