//! Lifecycle dispatch tables.
//!
//! The client never transitions state itself: it requests a transition and
//! re-reads the server's snapshot. What it does own is (a) the mapping from an
//! action to the HTTP call that requests it, and (b) the *observed* state
//! machines, used only to decide which buttons a row offers.

use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Status of a campus resource booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
        }
    }

    /// Actions staff may request on a booking in this state.
    pub fn staff_actions(self) -> &'static [BookingAction] {
        match self {
            BookingStatus::Pending => &[BookingAction::Approve, BookingAction::Reject],
            BookingStatus::Approved | BookingStatus::Rejected => &[],
        }
    }
}

/// Payment status of a ticket booking.
///
/// Observed transitions: `pending -> {completed, cancelled}`,
/// `completed -> cancelled`, `cancelled` terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Cancelled,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Cancelled => "cancelled",
        }
    }

    pub fn allowed_actions(self) -> &'static [BookingAction] {
        match self {
            PaymentStatus::Pending => &[BookingAction::CompletePayment, BookingAction::Cancel],
            PaymentStatus::Completed => &[BookingAction::Cancel],
            PaymentStatus::Cancelled => &[],
        }
    }

    /// Whether the dashboard offers the cancel button. Only on completed
    /// bookings: a still-pending payment is waiting on completion, not
    /// cancellation.
    pub fn can_cancel(self) -> bool {
        matches!(self, PaymentStatus::Completed)
    }
}

/// Moderation status of an event submission. `pending -> {approved, rejected}`,
/// both terminal from the client's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Pending,
    Approved,
    Rejected,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Pending => "pending",
            EventStatus::Approved => "approved",
            EventStatus::Rejected => "rejected",
        }
    }

    pub fn admin_actions(self) -> &'static [EventAction] {
        match self {
            EventStatus::Pending => &[EventAction::Approve, EventAction::Reject],
            EventStatus::Approved | EventStatus::Rejected => &[],
        }
    }
}

/// A state-transition request on a booking, in either portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingAction {
    Approve,
    Reject,
    Cancel,
    CompletePayment,
}

impl BookingAction {
    pub fn method(self) -> Method {
        match self {
            BookingAction::Approve | BookingAction::Reject => Method::PATCH,
            BookingAction::Cancel | BookingAction::CompletePayment => Method::POST,
        }
    }

    pub fn path(self, id: i64) -> String {
        let suffix = match self {
            BookingAction::Approve => "approve",
            BookingAction::Reject => "reject",
            BookingAction::Cancel => "cancel",
            BookingAction::CompletePayment => "complete_payment",
        };
        format!("/bookings/{id}/{suffix}")
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingAction::Approve => "Approve",
            BookingAction::Reject => "Reject",
            BookingAction::Cancel => "Cancel Booking",
            BookingAction::CompletePayment => "Complete Payment",
        }
    }
}

/// A state-transition request on an event submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventAction {
    Approve,
    Reject,
}

impl EventAction {
    pub fn method(self) -> Method {
        Method::POST
    }

    pub fn path(self, id: i64) -> String {
        let suffix = match self {
            EventAction::Approve => "approve",
            EventAction::Reject => "reject",
        };
        format!("/events/{id}/{suffix}")
    }

    pub fn label(self) -> &'static str {
        match self {
            EventAction::Approve => "Approve",
            EventAction::Reject => "Reject",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_action_dispatch() {
        assert_eq!(BookingAction::Approve.method(), Method::PATCH);
        assert_eq!(BookingAction::Approve.path(3), "/bookings/3/approve");
        assert_eq!(BookingAction::Reject.method(), Method::PATCH);
        assert_eq!(BookingAction::Reject.path(3), "/bookings/3/reject");
        assert_eq!(BookingAction::Cancel.method(), Method::POST);
        assert_eq!(BookingAction::Cancel.path(9), "/bookings/9/cancel");
        assert_eq!(BookingAction::CompletePayment.method(), Method::POST);
        assert_eq!(
            BookingAction::CompletePayment.path(9),
            "/bookings/9/complete_payment"
        );
    }

    #[test]
    fn test_event_action_dispatch() {
        assert_eq!(EventAction::Approve.method(), Method::POST);
        assert_eq!(EventAction::Approve.path(1), "/events/1/approve");
        assert_eq!(EventAction::Reject.path(2), "/events/2/reject");
    }

    #[test]
    fn test_payment_transitions_match_observed_machine() {
        assert_eq!(
            PaymentStatus::Pending.allowed_actions(),
            &[BookingAction::CompletePayment, BookingAction::Cancel]
        );
        assert_eq!(
            PaymentStatus::Completed.allowed_actions(),
            &[BookingAction::Cancel]
        );
        // Cancelled is terminal: no actions offered.
        assert!(PaymentStatus::Cancelled.allowed_actions().is_empty());

        // The cancel button itself is only offered on completed bookings.
        assert!(PaymentStatus::Completed.can_cancel());
        assert!(!PaymentStatus::Pending.can_cancel());
        assert!(!PaymentStatus::Cancelled.can_cancel());
    }

    #[test]
    fn test_campus_booking_actions_only_on_pending() {
        assert_eq!(
            BookingStatus::Pending.staff_actions(),
            &[BookingAction::Approve, BookingAction::Reject]
        );
        assert!(BookingStatus::Approved.staff_actions().is_empty());
        assert!(BookingStatus::Rejected.staff_actions().is_empty());
    }

    #[test]
    fn test_event_moderation_terminal_states() {
        assert_eq!(
            EventStatus::Pending.admin_actions(),
            &[EventAction::Approve, EventAction::Reject]
        );
        assert!(EventStatus::Approved.admin_actions().is_empty());
        assert!(EventStatus::Rejected.admin_actions().is_empty());
    }

    #[test]
    fn test_status_serde_wire_values() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Completed).unwrap(),
            "\"completed\""
        );
        let status: EventStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, EventStatus::Pending);
        assert_eq!(status.as_str(), "pending");
    }
}
