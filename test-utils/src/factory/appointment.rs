//! Appointment factory for creating booked appointment rows.
//!
//! Tests that exercise the booking transaction itself should go through the
//! booking service; this factory exists for seeding pre-existing
//! appointments that availability computations must route around.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating appointment rows with customizable status and times.
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    business_id: Uuid,
    service_id: Uuid,
    customer_id: Uuid,
    status: entity::appointment::Status,
    start: DateTime<Utc>,
    duration_minutes: i64,
    buffer_minutes: i32,
    notes: String,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory with default values.
    ///
    /// Defaults: pending status, starts two hours from now, 60-minute
    /// duration, no buffer.
    pub fn new(
        db: &'a DatabaseConnection,
        business_id: Uuid,
        service_id: Uuid,
        customer_id: Uuid,
    ) -> Self {
        Self {
            db,
            business_id,
            service_id,
            customer_id,
            status: entity::appointment::Status::Pending,
            start: Utc::now() + Duration::hours(2),
            duration_minutes: 60,
            buffer_minutes: 0,
            notes: String::new(),
        }
    }

    pub fn status(mut self, status: entity::appointment::Status) -> Self {
        self.status = status;
        self
    }

    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = start;
        self
    }

    pub fn duration_minutes(mut self, duration_minutes: i64) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    pub fn buffer_minutes(mut self, buffer_minutes: i32) -> Self {
        self.buffer_minutes = buffer_minutes;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Builds and inserts the appointment row into the database.
    ///
    /// `end` is derived as `start + duration_minutes`.
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        let now = Utc::now();
        entity::appointment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            business_id: ActiveValue::Set(self.business_id),
            service_id: ActiveValue::Set(self.service_id),
            customer_id: ActiveValue::Set(self.customer_id),
            status: ActiveValue::Set(self.status),
            start: ActiveValue::Set(self.start),
            end: ActiveValue::Set(self.start + Duration::minutes(self.duration_minutes)),
            buffer_minutes: ActiveValue::Set(self.buffer_minutes),
            notes: ActiveValue::Set(self.notes),
            google_event_id: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            confirmed_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending appointment starting two hours from now.
pub async fn create_appointment(
    db: &DatabaseConnection,
    business_id: Uuid,
    service_id: Uuid,
    customer_id: Uuid,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, business_id, service_id, customer_id)
        .build()
        .await
}
