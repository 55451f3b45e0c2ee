use chrono::NaiveTime;

use crate::server::error::AppError;

/// Formats a local time-of-day as a zero-padded 24h `HH:MM` string.
pub fn format_hhmm(value: NaiveTime) -> String {
    value.format("%H:%M").to_string()
}

/// Formats an ordered slot list for the availability response.
pub fn format_time_list(values: &[NaiveTime]) -> Vec<String> {
    values.iter().copied().map(format_hhmm).collect()
}

/// Parses a `HH:MM` (or `HH:MM:SS`) time-of-day string.
///
/// # Returns
/// - `Ok(NaiveTime)` - Successfully parsed time
/// - `Err(AppError::BadRequest)` - Input is not a valid time of day
pub fn parse_hhmm(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| AppError::BadRequest(format!("Invalid time '{}', expected HH:MM", value)))
}

/// Display name for a 0=Monday .. 6=Sunday weekday index.
pub fn weekday_name(day_of_week: i32) -> &'static str {
    match day_of_week {
        0 => "Monday",
        1 => "Tuesday",
        2 => "Wednesday",
        3 => "Thursday",
        4 => "Friday",
        5 => "Saturday",
        6 => "Sunday",
        _ => "Unknown",
    }
}
