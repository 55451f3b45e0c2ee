use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::CalendarConfig,
    service::calendar::CalendarSync,
};

mod appointment;
mod availability;
mod booking;

fn warsaw() -> Tz {
    chrono_tz::Europe::Warsaw
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// The next Monday strictly after today; factory businesses are open
/// Monday-Saturday, so slots on this date are never filtered as past.
fn next_monday() -> NaiveDate {
    let today = Utc::now().date_naive();
    let days_ahead = 7 - i64::from(today.weekday().num_days_from_monday());
    today + Duration::days(days_ahead)
}

/// A business-local wall-clock instant on the given date, as stored UTC.
fn warsaw_instant(date: NaiveDate, hour: u32, minute: u32) -> chrono::DateTime<Utc> {
    use chrono::TimeZone;

    warsaw()
        .from_local_datetime(&date.and_time(hm(hour, minute)))
        .unwrap()
        .with_timezone(&Utc)
}

/// Calendar sync wired to a disabled configuration: post-commit hooks
/// short-circuit without any network traffic.
fn disabled_calendar(db: &DatabaseConnection) -> Arc<CalendarSync> {
    Arc::new(CalendarSync::new(
        db.clone(),
        reqwest::Client::new(),
        CalendarConfig {
            enabled: false,
            api_base_url: String::new(),
            default_calendar_id: None,
        },
    ))
}
