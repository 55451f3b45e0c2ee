//! Domain models for appointment operations.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

/// Parameters for booking a new appointment.
///
/// `date` and `start_time` are interpreted in the business's local timezone;
/// the booking service derives the absolute start/end instants.
#[derive(Debug, Clone)]
pub struct BookAppointmentParams {
    /// Service to book; must belong to the business and be active.
    pub service_id: Uuid,
    /// Authenticated customer placing the booking.
    pub customer_id: Uuid,
    /// Calendar date of the requested slot (business-local).
    pub date: NaiveDate,
    /// Requested start time of day (business-local).
    pub start_time: NaiveTime,
    /// Free-form note from the customer.
    pub notes: String,
}

/// Parameters for inserting an appointment row inside the booking
/// transaction. Times are absolute instants; `buffer_minutes` is the
/// service buffer snapshotted at booking time.
#[derive(Debug, Clone)]
pub struct InsertAppointmentParams {
    pub business_id: Uuid,
    pub service_id: Uuid,
    pub customer_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub buffer_minutes: i32,
    pub notes: String,
}

/// Time-relative filter for appointment listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFilter {
    /// Appointments starting now or later.
    Upcoming,
    /// Appointments that have already started.
    Past,
}

impl TimeFilter {
    /// Parses the `time` query parameter (`upcoming` | `past`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "upcoming" => Some(TimeFilter::Upcoming),
            "past" => Some(TimeFilter::Past),
            _ => None,
        }
    }
}

/// Filters applied to a customer's appointment listing.
#[derive(Debug, Clone, Default)]
pub struct AppointmentListFilter {
    pub status: Option<entity::appointment::Status>,
    pub time: Option<TimeFilter>,
}
