//! Domain models for business management operations.

use chrono::NaiveTime;

/// Parameters for creating or replacing a weekly opening-hours row.
#[derive(Debug, Clone)]
pub struct OpeningHourParams {
    /// Weekday index, 0 = Monday .. 6 = Sunday.
    pub day_of_week: i32,
    pub is_closed: bool,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
}

/// Parameters for creating a new bookable service.
#[derive(Debug, Clone)]
pub struct CreateServiceParams {
    pub name: String,
    pub description: String,
    pub duration_minutes: i32,
    pub buffer_minutes: i32,
    pub price_amount: Option<f64>,
    pub price_currency: String,
    pub is_active: bool,
    pub color: String,
}

/// Parameters for updating an existing service.
///
/// All fields are optional; only provided fields are updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateServiceParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub buffer_minutes: Option<i32>,
    pub price_amount: Option<Option<f64>>,
    pub price_currency: Option<String>,
    pub is_active: Option<bool>,
    pub color: Option<String>,
}

/// Aggregate appointment counts for the owner dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusinessStats {
    pub total: u64,
    /// Pending appointments starting in the future.
    pub upcoming: u64,
    pub confirmed: u64,
    /// Confirmed appointments whose start has passed.
    pub completed: u64,
    pub cancelled: u64,
    /// Appointments created within the last 30 days.
    pub last_30_days: u64,
}
