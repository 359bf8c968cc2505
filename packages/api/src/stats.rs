//! Client-side derived aggregation for the dashboards.
//!
//! These are the only computations the frontends do over fetched collections:
//! counting bookings by status and averaging ratings. Everything heavier is
//! server-side (the dashboard endpoints of the tickets backend).

use crate::lifecycle::{BookingStatus, PaymentStatus};
use crate::models::{CampusBooking, Rating};

/// Booking counts the campus dashboard cards show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BookingStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
}

impl BookingStats {
    pub fn collect(bookings: &[CampusBooking]) -> Self {
        let mut stats = BookingStats {
            total: bookings.len(),
            ..Default::default()
        };
        for booking in bookings {
            match booking.status {
                BookingStatus::Pending => stats.pending += 1,
                BookingStatus::Approved => stats.approved += 1,
                BookingStatus::Rejected => {}
            }
        }
        stats
    }
}

/// Count and mean of an event's ratings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RatingSummary {
    pub count: usize,
    pub average: f64,
}

impl RatingSummary {
    pub fn collect(ratings: &[Rating]) -> Self {
        if ratings.is_empty() {
            return Self::default();
        }
        let sum: u32 = ratings.iter().map(|r| u32::from(r.rating)).sum();
        Self {
            count: ratings.len(),
            average: f64::from(sum) / ratings.len() as f64,
        }
    }

    /// "4.5" with one decimal, as the detail page displays it.
    pub fn display(&self) -> String {
        format!("{:.1}", self.average)
    }

    /// Rounded star count for the ★★★★☆ row.
    pub fn stars(&self) -> u8 {
        self.average.round().clamp(0.0, 5.0) as u8
    }
}

/// Revenue over completed ticket bookings, minor units. Cancelled and
/// still-pending bookings contribute nothing.
pub fn completed_revenue_minor<'a, I>(bookings: I) -> i64
where
    I: IntoIterator<Item = &'a crate::models::TicketBooking>,
{
    bookings
        .into_iter()
        .filter(|b| b.payment_status == PaymentStatus::Completed)
        .map(|b| b.total_amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::TicketBooking;

    fn booking(status: BookingStatus) -> CampusBooking {
        CampusBooking {
            id: 1,
            resource: 1,
            resource_name: "Lecture Hall A".into(),
            user_name: "Priya".into(),
            start_date: "2026-09-01T10:00".into(),
            end_date: "2026-09-01T12:00".into(),
            status,
        }
    }

    fn rating(score: u8) -> Rating {
        Rating {
            id: 0,
            event: 1,
            user_name: None,
            rating: score,
            review: String::new(),
            created_at: Utc::now(),
        }
    }

    fn ticket(status: PaymentStatus, total: i64) -> TicketBooking {
        TicketBooking {
            id: 0,
            booking_reference: "BK-1".into(),
            event: 1,
            event_name: "Tech Conference".into(),
            event_date: "2026-10-01".into(),
            event_time: "18:00".into(),
            event_location: "Auditorium".into(),
            seats_booked: 2,
            total_amount: total,
            payment_status: status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_booking_stats_counts_by_status() {
        let bookings = vec![
            booking(BookingStatus::Pending),
            booking(BookingStatus::Approved),
            booking(BookingStatus::Approved),
            booking(BookingStatus::Rejected),
        ];
        let stats = BookingStats::collect(&bookings);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.approved, 2);
    }

    #[test]
    fn test_rating_summary() {
        assert_eq!(RatingSummary::collect(&[]), RatingSummary::default());

        let summary = RatingSummary::collect(&[rating(5), rating(4)]);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.display(), "4.5");
        assert_eq!(summary.stars(), 5);

        let summary = RatingSummary::collect(&[rating(3), rating(4)]);
        assert_eq!(summary.display(), "3.5");
        assert_eq!(summary.stars(), 4);
    }

    #[test]
    fn test_revenue_counts_completed_only() {
        let bookings = vec![
            ticket(PaymentStatus::Completed, 10_000),
            ticket(PaymentStatus::Pending, 5_000),
            ticket(PaymentStatus::Cancelled, 7_500),
            ticket(PaymentStatus::Completed, 2_500),
        ];
        assert_eq!(completed_revenue_minor(&bookings), 12_500);
    }
}
