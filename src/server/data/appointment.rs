use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::{
    appointment::{AppointmentListFilter, InsertAppointmentParams, TimeFilter},
    business::BusinessStats,
};

/// Repository for appointment rows.
///
/// Generic over the connection so availability queries and the booking
/// insert can run either on the shared pool or inside an open transaction.
pub struct AppointmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AppointmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all non-cancelled appointments of a business whose `[start, end)`
    /// interval overlaps `[range_start, range_end)`.
    ///
    /// The stored buffer is NOT applied here; callers extend intervals when
    /// building conflict ranges. An appointment whose raw interval ends
    /// exactly at `range_start` is excluded (half-open semantics).
    ///
    /// # Returns
    /// - `Ok(appointments)`: Overlapping active appointments
    /// - `Err(DbErr)`: Database error
    pub async fn overlapping(
        &self,
        business_id: Uuid,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::BusinessId.eq(business_id))
            .filter(
                entity::appointment::Column::Status.ne(entity::appointment::Status::Cancelled),
            )
            .filter(entity::appointment::Column::Start.lt(range_end))
            .filter(entity::appointment::Column::End.gt(range_start))
            .all(self.db)
            .await
    }

    /// Inserts a new pending appointment.
    ///
    /// Must only be called from the booking transaction after the conflict
    /// re-check; nothing here validates availability.
    pub async fn insert(
        &self,
        params: InsertAppointmentParams,
    ) -> Result<entity::appointment::Model, DbErr> {
        let now = Utc::now();
        entity::appointment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            business_id: ActiveValue::Set(params.business_id),
            service_id: ActiveValue::Set(params.service_id),
            customer_id: ActiveValue::Set(params.customer_id),
            status: ActiveValue::Set(entity::appointment::Status::Pending),
            start: ActiveValue::Set(params.start),
            end: ActiveValue::Set(params.end),
            buffer_minutes: ActiveValue::Set(params.buffer_minutes),
            notes: ActiveValue::Set(params.notes),
            google_event_id: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            confirmed_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find_by_id(id).one(self.db).await
    }

    /// Gets an appointment only if it belongs to the given customer.
    pub async fn find_by_id_for_customer(
        &self,
        id: Uuid,
        customer_id: Uuid,
    ) -> Result<Option<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find_by_id(id)
            .filter(entity::appointment::Column::CustomerId.eq(customer_id))
            .one(self.db)
            .await
    }

    /// Gets an appointment only if it belongs to the given business.
    pub async fn find_by_id_for_business(
        &self,
        id: Uuid,
        business_id: Uuid,
    ) -> Result<Option<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find_by_id(id)
            .filter(entity::appointment::Column::BusinessId.eq(business_id))
            .one(self.db)
            .await
    }

    /// Lists a customer's appointments, newest start first, with optional
    /// status and upcoming/past filters.
    pub async fn list_for_customer(
        &self,
        customer_id: Uuid,
        filter: AppointmentListFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        let mut query = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::CustomerId.eq(customer_id))
            .order_by_desc(entity::appointment::Column::Start);

        if let Some(status) = filter.status {
            query = query.filter(entity::appointment::Column::Status.eq(status));
        }

        match filter.time {
            Some(TimeFilter::Upcoming) => {
                query = query.filter(entity::appointment::Column::Start.gte(now));
            }
            Some(TimeFilter::Past) => {
                query = query.filter(entity::appointment::Column::Start.lt(now));
            }
            None => {}
        }

        query.all(self.db).await
    }

    /// Lists a business's appointments, newest start first.
    pub async fn list_for_business(
        &self,
        business_id: Uuid,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::BusinessId.eq(business_id))
            .order_by_desc(entity::appointment::Column::Start)
            .all(self.db)
            .await
    }

    /// Applies a status transition to an appointment.
    ///
    /// Transition legality is the service layer's responsibility; this only
    /// persists the new status, bumps `updated_at` and stamps `confirmed_at`
    /// when the new status is Confirmed.
    pub async fn update_status(
        &self,
        appointment: entity::appointment::Model,
        status: entity::appointment::Status,
    ) -> Result<entity::appointment::Model, DbErr> {
        let now = Utc::now();
        let confirmed_at = match status {
            entity::appointment::Status::Confirmed => Some(now),
            _ => appointment.confirmed_at,
        };

        let mut active_model: entity::appointment::ActiveModel = appointment.into();
        active_model.status = ActiveValue::Set(status);
        active_model.updated_at = ActiveValue::Set(now);
        active_model.confirmed_at = ActiveValue::Set(confirmed_at);

        active_model.update(self.db).await
    }

    /// Stores the external calendar event id after a successful sync.
    pub async fn update_google_event_id(
        &self,
        appointment: entity::appointment::Model,
        google_event_id: String,
    ) -> Result<entity::appointment::Model, DbErr> {
        let mut active_model: entity::appointment::ActiveModel = appointment.into();
        active_model.google_event_id = ActiveValue::Set(google_event_id);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Computes the owner-dashboard appointment counts for a business.
    pub async fn stats(
        &self,
        business_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<BusinessStats, DbErr> {
        let base = || {
            entity::prelude::Appointment::find()
                .filter(entity::appointment::Column::BusinessId.eq(business_id))
        };
        let thirty_days_ago = now - Duration::days(30);

        let total = base().count(self.db).await?;
        let upcoming = base()
            .filter(entity::appointment::Column::Start.gte(now))
            .filter(entity::appointment::Column::Status.eq(entity::appointment::Status::Pending))
            .count(self.db)
            .await?;
        let confirmed = base()
            .filter(
                entity::appointment::Column::Status.eq(entity::appointment::Status::Confirmed),
            )
            .count(self.db)
            .await?;
        let completed = base()
            .filter(entity::appointment::Column::Start.lt(now))
            .filter(
                entity::appointment::Column::Status.eq(entity::appointment::Status::Confirmed),
            )
            .count(self.db)
            .await?;
        let cancelled = base()
            .filter(
                entity::appointment::Column::Status.eq(entity::appointment::Status::Cancelled),
            )
            .count(self.db)
            .await?;
        let last_30_days = base()
            .filter(entity::appointment::Column::CreatedAt.gte(thirty_days_ago))
            .count(self.db)
            .await?;

        Ok(BusinessStats {
            total,
            upcoming,
            confirmed,
            completed,
            cancelled,
            last_30_days,
        })
    }
}
