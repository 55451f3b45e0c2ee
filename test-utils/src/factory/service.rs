//! Service factory for creating bookable service entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating services with customizable slot widths.
pub struct ServiceFactory<'a> {
    db: &'a DatabaseConnection,
    business_id: Uuid,
    name: String,
    duration_minutes: i32,
    buffer_minutes: i32,
    is_active: bool,
}

impl<'a> ServiceFactory<'a> {
    /// Creates a new ServiceFactory with default values.
    ///
    /// Defaults: 60-minute duration, no buffer, active.
    pub fn new(db: &'a DatabaseConnection, business_id: Uuid) -> Self {
        Self {
            db,
            business_id,
            name: format!("Service {}", next_id()),
            duration_minutes: 60,
            buffer_minutes: 0,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn duration_minutes(mut self, duration_minutes: i32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    pub fn buffer_minutes(mut self, buffer_minutes: i32) -> Self {
        self.buffer_minutes = buffer_minutes;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the service entity into the database.
    pub async fn build(self) -> Result<entity::service::Model, DbErr> {
        let now = Utc::now();
        entity::service::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            business_id: ActiveValue::Set(self.business_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(String::new()),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            buffer_minutes: ActiveValue::Set(self.buffer_minutes),
            price_amount: ActiveValue::Set(Some(100.0)),
            price_currency: ActiveValue::Set("PLN".to_string()),
            is_active: ActiveValue::Set(self.is_active),
            color: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a 60-minute zero-buffer active service.
pub async fn create_service(
    db: &DatabaseConnection,
    business_id: Uuid,
) -> Result<entity::service::Model, DbErr> {
    ServiceFactory::new(db, business_id).build().await
}
