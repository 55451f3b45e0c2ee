use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::business::ServiceDto;

/// Booking request payload. `date` and `start_time` are interpreted in the
/// business's local timezone; `start_time` is a `HH:MM` string.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct CreateAppointmentDto {
    pub service_id: Uuid,
    pub date: NaiveDate,
    pub start_time: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AppointmentDto {
    pub id: Uuid,
    /// Slug of the business the appointment belongs to.
    pub business: String,
    pub service: ServiceDto,
    pub status: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub notes: String,
    pub google_event_id: String,
    pub created_at: DateTime<Utc>,
}

impl AppointmentDto {
    pub fn from_models(
        appointment: entity::appointment::Model,
        business_slug: String,
        service: entity::service::Model,
    ) -> Self {
        Self {
            id: appointment.id,
            business: business_slug,
            service: ServiceDto::from_model(service),
            status: appointment.status.as_str().to_string(),
            start: appointment.start,
            end: appointment.end,
            notes: appointment.notes,
            google_event_id: appointment.google_event_id,
            created_at: appointment.created_at,
        }
    }
}

/// Appointment view for the business owner, including customer contact.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct OwnerAppointmentDto {
    pub id: Uuid,
    pub service: ServiceDto,
    pub customer_email: String,
    pub status: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl OwnerAppointmentDto {
    pub fn from_models(
        appointment: entity::appointment::Model,
        service: entity::service::Model,
        customer_email: String,
    ) -> Self {
        Self {
            id: appointment.id,
            service: ServiceDto::from_model(service),
            customer_email,
            status: appointment.status.as_str().to_string(),
            start: appointment.start,
            end: appointment.end,
            notes: appointment.notes,
            created_at: appointment.created_at,
            updated_at: appointment.updated_at,
            confirmed_at: appointment.confirmed_at,
        }
    }
}

/// Query parameters for the customer appointment listing.
#[derive(Deserialize, Debug)]
pub struct AppointmentListQuery {
    /// Status filter: `pending`, `confirmed` or `cancelled`.
    pub status: Option<String>,
    /// Time filter: `upcoming` or `past`.
    pub time: Option<String>,
}

/// Parses a status query value.
pub fn parse_status(value: &str) -> Option<entity::appointment::Status> {
    match value {
        "pending" => Some(entity::appointment::Status::Pending),
        "confirmed" => Some(entity::appointment::Status::Confirmed),
        "cancelled" => Some(entity::appointment::Status::Cancelled),
        _ => None,
    }
}
