//! Appointment lifecycle operations: listings and the status state machine.
//!
//! Allowed transitions: `pending -> confirmed` (owner), `pending|confirmed
//! -> cancelled` (customer only while the start is still in the future,
//! owner regardless of time). `cancelled` is terminal. Appointments are
//! created exclusively by the booking service and never deleted.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::appointment::AppointmentRepository,
    error::AppError,
    model::{appointment::AppointmentListFilter, named::Named},
};

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the calling customer's appointments, newest start first.
    pub async fn list_for_customer(
        &self,
        customer_id: Uuid,
        filter: AppointmentListFilter,
    ) -> Result<Vec<entity::appointment::Model>, AppError> {
        let repo = AppointmentRepository::new(self.db);
        Ok(repo
            .list_for_customer(customer_id, filter, Utc::now())
            .await?)
    }

    /// Gets one of the calling customer's appointments.
    ///
    /// # Returns
    /// - `Ok(appointment)`: The appointment
    /// - `Err(AppError::NotFound)`: Unknown id or owned by someone else
    pub async fn get_for_customer(
        &self,
        id: Uuid,
        customer_id: Uuid,
    ) -> Result<entity::appointment::Model, AppError> {
        AppointmentRepository::new(self.db)
            .find_by_id_for_customer(id, customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))
    }

    /// Cancels an appointment on behalf of its customer.
    ///
    /// Customers may only cancel upcoming appointments; an appointment whose
    /// start has passed, or one that is already cancelled, is rejected.
    pub async fn cancel_as_customer(
        &self,
        id: Uuid,
        customer_id: Uuid,
    ) -> Result<entity::appointment::Model, AppError> {
        let repo = AppointmentRepository::new(self.db);
        let appointment = repo
            .find_by_id_for_customer(id, customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

        if appointment.status == entity::appointment::Status::Cancelled {
            return Err(AppError::BadRequest(
                "This appointment has already been cancelled".to_string(),
            ));
        }
        if appointment.start < Utc::now() {
            return Err(AppError::BadRequest(
                "Past appointments cannot be cancelled".to_string(),
            ));
        }

        let cancelled = repo
            .update_status(appointment, entity::appointment::Status::Cancelled)
            .await?;

        tracing::info!(
            appointment = %cancelled.display_name(),
            %customer_id,
            "Appointment cancelled by customer"
        );

        Ok(cancelled)
    }

    /// Lists every appointment of a business, newest start first.
    pub async fn list_for_business(
        &self,
        business: &entity::business::Model,
    ) -> Result<Vec<entity::appointment::Model>, AppError> {
        let repo = AppointmentRepository::new(self.db);
        Ok(repo.list_for_business(business.id).await?)
    }

    /// Confirms a pending appointment as the business owner.
    ///
    /// Only `pending` appointments can be confirmed; `confirmed_at` is
    /// stamped by the transition.
    pub async fn confirm_as_owner(
        &self,
        business: &entity::business::Model,
        id: Uuid,
    ) -> Result<entity::appointment::Model, AppError> {
        let repo = AppointmentRepository::new(self.db);
        let appointment = repo
            .find_by_id_for_business(id, business.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

        if appointment.status != entity::appointment::Status::Pending {
            return Err(AppError::BadRequest(
                "Only pending appointments can be confirmed".to_string(),
            ));
        }

        let confirmed = repo
            .update_status(appointment, entity::appointment::Status::Confirmed)
            .await?;

        tracing::info!(
            business = %business.display_name(),
            appointment = %confirmed.display_name(),
            "Appointment confirmed by owner"
        );

        Ok(confirmed)
    }

    /// Cancels an appointment as the business owner.
    ///
    /// Unlike the customer path, owners may cancel appointments whose start
    /// has already passed.
    pub async fn cancel_as_owner(
        &self,
        business: &entity::business::Model,
        id: Uuid,
    ) -> Result<entity::appointment::Model, AppError> {
        let repo = AppointmentRepository::new(self.db);
        let appointment = repo
            .find_by_id_for_business(id, business.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

        if appointment.status == entity::appointment::Status::Cancelled {
            return Err(AppError::BadRequest(
                "This appointment has already been cancelled".to_string(),
            ));
        }

        let cancelled = repo
            .update_status(appointment, entity::appointment::Status::Cancelled)
            .await?;

        tracing::info!(
            business = %business.display_name(),
            appointment = %cancelled.display_name(),
            "Appointment cancelled by owner"
        );

        Ok(cancelled)
    }
}
