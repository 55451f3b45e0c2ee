//! The booking transaction: re-validates a requested slot and atomically
//! persists the appointment.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::server::{
    data::{
        appointment::AppointmentRepository, opening_hour::OpeningHourRepository,
        service::ServiceRepository,
    },
    error::{booking::BookingError, AppError},
    model::{
        appointment::{BookAppointmentParams, InsertAppointmentParams},
        named::Named,
    },
    service::{
        availability::{
            build_existing_ranges, day_bounds_utc, local_datetime, opening_window,
            resolve_timezone, weekday_index,
        },
        calendar::CalendarSync,
        unit_of_work::UnitOfWork,
    },
};

/// Per-business advisory locks serializing concurrent booking attempts.
///
/// SQLite through SQLx does not detect overlapping-interval writes at the
/// isolation level the pool runs at, so the conflict re-check and the
/// insert must not interleave for the same business. Two concurrent `book`
/// calls for the same slot therefore queue here: the loser re-checks after
/// the winner committed and observes the conflict.
pub struct BookingLocks {
    locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl BookingLocks {
    pub fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Acquires the lock for a business, creating it on first use.
    ///
    /// The guard is owned so it can be held across the whole check+insert
    /// without borrowing from the registry.
    pub async fn acquire(&self, business_id: Uuid) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(business_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        lock.lock_owned().await
    }
}

impl Default for BookingLocks {
    fn default() -> Self {
        Self::new()
    }
}

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a BookingLocks,
    calendar: Arc<CalendarSync>,
}

impl<'a> BookingService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        locks: &'a BookingLocks,
        calendar: Arc<CalendarSync>,
    ) -> Self {
        Self {
            db,
            locks,
            calendar,
        }
    }

    /// Books an appointment if the requested slot is still free.
    ///
    /// The conflict check and the insert run as one atomic unit: a
    /// transaction plus the per-business advisory lock. Client-side or
    /// pre-transaction availability checks are not trusted; everything is
    /// re-derived and re-checked in here. Exactly one appointment row is
    /// created on success, zero on failure.
    ///
    /// # Returns
    /// - `Ok(appointment)`: The persisted pending appointment
    /// - `Err(AppError::BookingErr)`: Slot taken, outside hours, in the
    ///   past, or unknown/inactive service
    /// - `Err(AppError::DbErr)`: Persistence failure
    pub async fn book(
        &self,
        business: &entity::business::Model,
        params: BookAppointmentParams,
    ) -> Result<entity::appointment::Model, AppError> {
        let service = ServiceRepository::new(self.db)
            .get_active(business.id, params.service_id)
            .await?
            .ok_or(BookingError::ServiceInactive)?;

        if service.duration_minutes <= 0 {
            tracing::warn!(
                service = %service.display_name(),
                duration = service.duration_minutes,
                "Refusing to book service with non-positive duration"
            );
            return Err(BookingError::ServiceInactive.into());
        }

        let tz = resolve_timezone(business);
        let Some(start_local) = local_datetime(params.date, params.start_time, tz) else {
            // The requested wall-clock time does not exist on that date
            // (DST gap); nothing can start there.
            return Err(BookingError::InvalidWindow.into());
        };

        let now_local = Utc::now().with_timezone(&tz);
        if start_local < now_local {
            return Err(BookingError::PastSlot.into());
        }

        let duration = Duration::minutes(i64::from(service.duration_minutes));
        let end_local = start_local + duration;

        // Serialize against every other booking attempt for this business
        // for the full check+insert, then re-check inside the transaction.
        let _guard = self.locks.acquire(business.id).await;
        let mut uow = UnitOfWork::begin(self.db).await?;

        let hours = OpeningHourRepository::new(uow.connection())
            .get_for_day(business.id, weekday_index(params.date))
            .await?;
        let Some((open_dt, close_dt)) = opening_window(hours.as_ref(), params.date, tz) else {
            return Err(BookingError::InvalidWindow.into());
        };
        if start_local < open_dt || end_local > close_dt {
            return Err(BookingError::InvalidWindow.into());
        }

        let Some((day_start_utc, day_end_utc)) = day_bounds_utc(params.date, tz) else {
            return Err(BookingError::InvalidWindow.into());
        };

        let appointment_repo = AppointmentRepository::new(uow.connection());
        let existing = appointment_repo
            .overlapping(business.id, day_start_utc, day_end_utc)
            .await?;
        let existing_ranges = build_existing_ranges(&existing, tz);
        if existing_ranges
            .iter()
            .any(|range| range.overlaps(start_local, end_local))
        {
            return Err(BookingError::SlotUnavailable.into());
        }

        let appointment = appointment_repo
            .insert(InsertAppointmentParams {
                business_id: business.id,
                service_id: service.id,
                customer_id: params.customer_id,
                start: start_local.with_timezone(&Utc),
                end: end_local.with_timezone(&Utc),
                buffer_minutes: service.buffer_minutes,
                notes: params.notes,
            })
            .await?;

        // Re-validate the temporal invariants on the row actually written.
        if appointment.start >= appointment.end
            || appointment.end - appointment.start != duration
        {
            return Err(AppError::InternalError(format!(
                "Booked appointment violates duration invariants: {} .. {}",
                appointment.start, appointment.end
            )));
        }

        let appointment_id = appointment.id;
        let calendar = self.calendar.clone();
        uow.after_commit(async move {
            calendar.sync_appointment(appointment_id).await;
        });
        uow.commit().await?;

        tracing::info!(
            business = %business.display_name(),
            service = %service.display_name(),
            appointment = %appointment.display_name(),
            "Appointment booked"
        );

        Ok(appointment)
    }
}
