//! External calendar synchronization.
//!
//! `CalendarSync` is constructed once at process start with an explicit
//! HTTP client and configuration, and is invoked exclusively from
//! post-commit hooks. Synchronization is strictly best-effort: every
//! failure is logged and swallowed so a calendar outage can never fail or
//! roll back a booking.

use reqwest::Client;
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::json;
use uuid::Uuid;

use crate::server::{
    config::CalendarConfig,
    data::appointment::AppointmentRepository,
    model::named::Named,
    service::availability::resolve_timezone,
};

pub struct CalendarSync {
    db: DatabaseConnection,
    client: Client,
    config: CalendarConfig,
}

impl CalendarSync {
    pub fn new(db: DatabaseConnection, client: Client, config: CalendarConfig) -> Self {
        Self { db, client, config }
    }

    /// Pushes an appointment to the external calendar.
    ///
    /// Inserts a new event or updates the stored one, then persists a
    /// changed event id. Disabled configuration, missing rows, missing
    /// calendar ids and HTTP failures all short-circuit with a log line.
    pub async fn sync_appointment(&self, appointment_id: Uuid) {
        if !self.config.enabled {
            tracing::debug!("Calendar sync disabled, skipping");
            return;
        }

        let loaded = self.load_appointment(appointment_id).await;
        let Some((appointment, business, service, customer)) = loaded else {
            return;
        };

        let calendar_id = match self.resolve_calendar_id(&business) {
            Some(calendar_id) => calendar_id,
            None => {
                tracing::info!(
                    business = %business.display_name(),
                    "No calendar configured, skipping sync"
                );
                return;
            }
        };

        let event_body = self.build_event_body(&appointment, &business, &service, &customer);

        let request = if appointment.google_event_id.is_empty() {
            self.client
                .post(format!(
                    "{}/calendars/{}/events",
                    self.config.api_base_url, calendar_id
                ))
                .json(&event_body)
        } else {
            self.client
                .put(format!(
                    "{}/calendars/{}/events/{}",
                    self.config.api_base_url, calendar_id, appointment.google_event_id
                ))
                .json(&event_body)
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("Calendar request failed: {}", err);
                return;
            }
        };
        if !response.status().is_success() {
            tracing::error!(
                status = %response.status(),
                appointment = %appointment.display_name(),
                "Calendar rejected event"
            );
            return;
        }

        let event: serde_json::Value = match response.json().await {
            Ok(event) => event,
            Err(err) => {
                tracing::error!("Could not decode calendar response: {}", err);
                return;
            }
        };

        let Some(event_id) = event.get("id").and_then(|id| id.as_str()) else {
            return;
        };
        if event_id != appointment.google_event_id {
            let repo = AppointmentRepository::new(&self.db);
            if let Err(err) = repo
                .update_google_event_id(appointment, event_id.to_string())
                .await
            {
                tracing::error!("Could not store calendar event id: {}", err);
            }
        }
    }

    async fn load_appointment(
        &self,
        appointment_id: Uuid,
    ) -> Option<(
        entity::appointment::Model,
        entity::business::Model,
        entity::service::Model,
        entity::user::Model,
    )> {
        let repo = AppointmentRepository::new(&self.db);
        let appointment = match repo.find_by_id(appointment_id).await {
            Ok(Some(appointment)) => appointment,
            Ok(None) => {
                tracing::warn!(%appointment_id, "Appointment to sync no longer exists");
                return None;
            }
            Err(err) => {
                tracing::error!("Could not load appointment for sync: {}", err);
                return None;
            }
        };

        let business = entity::prelude::Business::find_by_id(appointment.business_id)
            .one(&self.db)
            .await
            .ok()
            .flatten()?;
        let service = entity::prelude::Service::find_by_id(appointment.service_id)
            .one(&self.db)
            .await
            .ok()
            .flatten()?;
        let customer = entity::prelude::User::find_by_id(appointment.customer_id)
            .one(&self.db)
            .await
            .ok()
            .flatten()?;

        Some((appointment, business, service, customer))
    }

    /// The calendar to write to: the business's own calendar when set,
    /// otherwise the configured default.
    fn resolve_calendar_id(&self, business: &entity::business::Model) -> Option<String> {
        if !business.google_calendar_id.is_empty() {
            return Some(business.google_calendar_id.clone());
        }
        self.config.default_calendar_id.clone()
    }

    fn build_event_body(
        &self,
        appointment: &entity::appointment::Model,
        business: &entity::business::Model,
        service: &entity::service::Model,
        customer: &entity::user::Model,
    ) -> serde_json::Value {
        let tz = resolve_timezone(business);
        let notes = if appointment.notes.is_empty() {
            service.description.clone()
        } else {
            appointment.notes.clone()
        };

        let mut attendees = Vec::new();
        if !customer.email.is_empty() {
            attendees.push(json!({
                "email": customer.email,
                "displayName": customer.display_name(),
            }));
        }

        json!({
            "summary": format!("{} - {}", service.display_name(), customer.display_name()),
            "description": notes,
            "location": build_event_location(business),
            "start": {
                "dateTime": appointment.start.with_timezone(&tz).to_rfc3339(),
                "timeZone": business.timezone,
            },
            "end": {
                "dateTime": appointment.end.with_timezone(&tz).to_rfc3339(),
                "timeZone": business.timezone,
            },
            "attendees": attendees,
            "reminders": { "useDefault": true },
        })
    }
}

fn build_event_location(business: &entity::business::Model) -> String {
    let city_line = format!("{} {}", business.postal_code, business.city);

    [
        business.address_line1.as_str(),
        business.address_line2.as_str(),
        city_line.trim(),
        business.country.as_str(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn location_skips_empty_parts() {
        let business = entity::business::Model {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: "Salon".to_string(),
            slug: "salon".to_string(),
            category: entity::business::Category::Beauty,
            description: String::new(),
            email: String::new(),
            phone_number: String::new(),
            website_url: String::new(),
            timezone: "Europe/Warsaw".to_string(),
            address_line1: "Main Street 1".to_string(),
            address_line2: String::new(),
            city: "Warsaw".to_string(),
            postal_code: "00-001".to_string(),
            country: "Poland".to_string(),
            google_calendar_id: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert_eq!(
            build_event_location(&business),
            "Main Street 1, 00-001 Warsaw, Poland"
        );
    }
}
