//! Endpoint wrappers for the campus resource-booking backend.
//!
//! Pure CRUD plus the booking approve/reject transitions. Every mutation here
//! is followed by a `list_*` call at the view layer; none of these functions
//! return anything a view would merge into existing state.

use reqwest::Method;

use crate::client::Api;
use crate::error::ApiError;
use crate::lifecycle::BookingAction;
use crate::models::{
    CampusBooking, CampusBookingRequest, CampusRole, DirectoryUser, Resource, ResourceInput,
};

// Resources ----------------------------------------------------------------

pub async fn list_resources(api: &Api) -> Result<Vec<Resource>, ApiError> {
    api.execute(api.request(Method::GET, "/resources")).await
}

pub async fn create_resource(api: &Api, input: &ResourceInput) -> Result<Resource, ApiError> {
    api.execute(api.request(Method::POST, "/resources").json(input))
        .await
}

pub async fn update_resource(
    api: &Api,
    id: i64,
    input: &ResourceInput,
) -> Result<Resource, ApiError> {
    api.execute(
        api.request(Method::PUT, &format!("/resources/{id}"))
            .json(input),
    )
    .await
}

pub async fn delete_resource(api: &Api, id: i64) -> Result<(), ApiError> {
    api.execute_unit(api.request(Method::DELETE, &format!("/resources/{id}")))
        .await
}

// Bookings -----------------------------------------------------------------

pub async fn list_bookings(api: &Api) -> Result<Vec<CampusBooking>, ApiError> {
    api.execute(api.request(Method::GET, "/bookings")).await
}

pub async fn create_booking(
    api: &Api,
    request: &CampusBookingRequest,
) -> Result<CampusBooking, ApiError> {
    api.execute(api.request(Method::POST, "/bookings").json(request))
        .await
}

/// Request a booking transition via the action dispatch table.
pub async fn booking_action(api: &Api, id: i64, action: BookingAction) -> Result<(), ApiError> {
    api.execute_unit(api.request(action.method(), &action.path(id)))
        .await
}

// Users --------------------------------------------------------------------

pub async fn list_users(api: &Api) -> Result<Vec<DirectoryUser<CampusRole>>, ApiError> {
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
