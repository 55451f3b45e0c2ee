//! Availability engine: timezone resolution, opening windows, conflict
//! ranges and the slot walk.
//!
//! The computation itself is pure; `AvailabilityService` only loads the
//! schedule and the day's active appointments and hands them to the pure
//! core. Bad configuration (unknown timezone, degenerate window) never
//! raises here: the engine logs and yields no slots.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{appointment::AppointmentRepository, opening_hour::OpeningHourRepository},
    error::AppError,
    model::named::Named,
};

/// Fallback zone when a business carries an unresolvable timezone name.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Warsaw;

/// Resolves a business's configured timezone name.
///
/// Unknown names fall back to [`DEFAULT_TIMEZONE`] with a warning; this
/// never fails, so a misconfigured business keeps serving availability in
/// the default zone instead of erroring out.
pub fn resolve_timezone(business: &entity::business::Model) -> Tz {
    match business.timezone.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            tracing::warn!(
                business = %business.display_name(),
                timezone = %business.timezone,
                "Unknown timezone, falling back to {}",
                DEFAULT_TIMEZONE
            );
            DEFAULT_TIMEZONE
        }
    }
}

/// Weekday index of a date using the 0 = Monday .. 6 = Sunday convention.
pub fn weekday_index(date: NaiveDate) -> i32 {
    date.weekday().num_days_from_monday() as i32
}

/// Resolves a local date + time-of-day in the given zone.
///
/// DST-ambiguous times resolve to the earlier instant; times that do not
/// exist (spring-forward gap) yield `None`.
pub fn local_datetime(date: NaiveDate, time: NaiveTime, tz: Tz) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_time(time)).earliest()
}

/// UTC bounds of a local calendar day, for querying stored appointments.
pub fn day_bounds_utc(date: NaiveDate, tz: Tz) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let day_start = local_datetime(date, NaiveTime::MIN, tz)?;
    let day_end = date
        .succ_opt()
        .and_then(|next| local_datetime(next, NaiveTime::MIN, tz))
        .unwrap_or(day_start + Duration::hours(24));

    Some((
        day_start.with_timezone(&Utc),
        day_end.with_timezone(&Utc),
    ))
}

/// The open/close window of a business on a concrete date.
///
/// `None` means no bookable time: no schedule row for the weekday, the day
/// is marked closed, a time bound is missing, or the window is degenerate
/// (open >= close).
pub fn opening_window(
    hours: Option<&entity::opening_hour::Model>,
    date: NaiveDate,
    tz: Tz,
) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
    let hours = hours?;
    if hours.is_closed {
        return None;
    }

    let open_dt = local_datetime(date, hours.open_time?, tz)?;
    let close_dt = local_datetime(date, hours.close_time?, tz)?;
    if open_dt >= close_dt {
        return None;
    }

    Some((open_dt, close_dt))
}

/// An occupied `[start, end)` range in business-local time, already
/// extended by the appointment's stored buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRange {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl AppointmentRange {
    /// Half-open overlap test: ranges that merely touch do not conflict.
    pub fn overlaps(&self, other_start: DateTime<Tz>, other_end: DateTime<Tz>) -> bool {
        !(other_end <= self.start || other_start >= self.end)
    }
}

/// Builds conflict ranges from stored appointments.
///
/// Each range ends `buffer_minutes` after the appointment's end: the buffer
/// is occupied but not bookable time following a service.
pub fn build_existing_ranges(
    appointments: &[entity::appointment::Model],
    tz: Tz,
) -> Vec<AppointmentRange> {
    appointments
        .iter()
        .map(|appointment| AppointmentRange {
            start: appointment.start.with_timezone(&tz),
            end: appointment.end.with_timezone(&tz)
                + Duration::minutes(i64::from(appointment.buffer_minutes)),
        })
        .collect()
}

/// Step between slot candidates: duration + buffer, degraded to the bare
/// duration (minimum one minute) when the nominal step is not positive, so
/// the walk always makes forward progress.
pub fn normalize_step(service: &entity::service::Model) -> Duration {
    let step_minutes = service.duration_minutes + service.buffer_minutes;
    if step_minutes <= 0 {
        return Duration::minutes(i64::from(service.duration_minutes.max(1)));
    }
    Duration::minutes(i64::from(step_minutes))
}

/// Walks the open window in fixed steps and collects free slot starts.
///
/// A candidate is emitted when the whole service duration fits before the
/// close bound (`<=`, so an exactly-fitting last slot is allowed) and no
/// existing range overlaps it. Candidates before `now_local` are skipped
/// but still advance the walk, so the grid stays aligned to the open bound.
pub fn walk_slots(
    window: (DateTime<Tz>, DateTime<Tz>),
    existing_ranges: &[AppointmentRange],
    service: &entity::service::Model,
    now_local: DateTime<Tz>,
) -> Vec<NaiveTime> {
    let (open_dt, close_dt) = window;
    let slot_length = Duration::minutes(i64::from(service.duration_minutes));
    let step = normalize_step(service);

    let mut available_slots = Vec::new();
    let mut current_start = open_dt;
    while current_start + slot_length <= close_dt {
        if current_start < now_local {
            current_start += step;
            continue;
        }

        let current_end = current_start + slot_length;
        let has_conflict = existing_ranges
            .iter()
            .any(|range| range.overlaps(current_start, current_end));
        if !has_conflict {
            available_slots.push(current_start.time());
        }

        current_start += step;
    }

    available_slots
}

/// Outcome of checking a single candidate slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotCheck {
    /// The slot lies inside the window and conflicts with nothing.
    Free,
    /// The business is closed, or the slot does not fit the open window.
    OutsideWindow,
    /// An existing appointment (buffer included) overlaps the slot.
    Conflict,
}

/// Checks one candidate start against the window and the existing ranges.
pub fn check_slot(
    hours: Option<&entity::opening_hour::Model>,
    existing: &[entity::appointment::Model],
    service: &entity::service::Model,
    start_local: DateTime<Tz>,
    tz: Tz,
) -> SlotCheck {
    let date = start_local.date_naive();
    let Some((open_dt, close_dt)) = opening_window(hours, date, tz) else {
        return SlotCheck::OutsideWindow;
    };

    let end_local = start_local + Duration::minutes(i64::from(service.duration_minutes));
    if start_local < open_dt || end_local > close_dt {
        return SlotCheck::OutsideWindow;
    }

    let ranges = build_existing_ranges(existing, tz);
    if ranges
        .iter()
        .any(|range| range.overlaps(start_local, end_local))
    {
        return SlotCheck::Conflict;
    }

    SlotCheck::Free
}

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the free slot starts for a service on a date.
    ///
    /// Returns an ascending, de-duplicated list of business-local times of
    /// day. Closed days, degenerate windows and unresolvable day bounds all
    /// yield an empty list rather than an error.
    ///
    /// # Returns
    /// - `Ok(slots)`: Free slot starts, possibly empty
    /// - `Err(AppError)`: Database error
    pub async fn daily_availability(
        &self,
        business: &entity::business::Model,
        service: &entity::service::Model,
        date: NaiveDate,
    ) -> Result<Vec<NaiveTime>, AppError> {
        let tz = resolve_timezone(business);

        let hours = OpeningHourRepository::new(self.db)
            .get_for_day(business.id, weekday_index(date))
            .await?;
        let Some(window) = opening_window(hours.as_ref(), date, tz) else {
            return Ok(Vec::new());
        };

        let Some((day_start_utc, day_end_utc)) = day_bounds_utc(date, tz) else {
            tracing::warn!(
                business = %business.display_name(),
                %date,
                "Could not resolve local day bounds, returning no slots"
            );
            return Ok(Vec::new());
        };

        let existing = self
            .overlapping_appointments(business.id, day_start_utc, day_end_utc)
            .await?;
        let existing_ranges = build_existing_ranges(&existing, tz);

        let now_local = Utc::now().with_timezone(&tz);

        Ok(walk_slots(window, &existing_ranges, service, now_local))
    }

    /// Checks whether a single business-local start time is bookable.
    ///
    /// This is the same predicate the slot list is built from; the booking
    /// transaction re-runs it against its own connection before inserting.
    pub async fn is_slot_available(
        &self,
        business: &entity::business::Model,
        service: &entity::service::Model,
        start_local: DateTime<Tz>,
    ) -> Result<bool, AppError> {
        let tz = resolve_timezone(business);
        let start_local = start_local.with_timezone(&tz);
        let date = start_local.date_naive();

        let hours = OpeningHourRepository::new(self.db)
            .get_for_day(business.id, weekday_index(date))
            .await?;

        let Some((day_start_utc, day_end_utc)) = day_bounds_utc(date, tz) else {
            return Ok(false);
        };
        let existing = self
            .overlapping_appointments(business.id, day_start_utc, day_end_utc)
            .await?;

        Ok(check_slot(hours.as_ref(), &existing, service, start_local, tz) == SlotCheck::Free)
    }

    async fn overlapping_appointments(
        &self,
        business_id: Uuid,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> Result<Vec<entity::appointment::Model>, AppError> {
        Ok(AppointmentRepository::new(self.db)
            .overlapping(business_id, range_start, range_end)
            .await?)
    }
}
