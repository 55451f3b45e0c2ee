//! Business factory for creating test business entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test businesses with customizable fields.
///
/// The owner must exist before building; pass its ID to `new()`.
pub struct BusinessFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: Uuid,
    name: String,
    slug: String,
    category: entity::business::Category,
    timezone: String,
    google_calendar_id: String,
}

impl<'a> BusinessFactory<'a> {
    /// Creates a new BusinessFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Business {id}"`, slug: `"business-{id}"`
    /// - category: `Other`
    /// - timezone: `"Europe/Warsaw"`
    pub fn new(db: &'a DatabaseConnection, owner_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Business {}", id),
            slug: format!("business-{}", id),
            category: entity::business::Category::Other,
            timezone: "Europe/Warsaw".to_string(),
            google_calendar_id: String::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn category(mut self, category: entity::business::Category) -> Self {
        self.category = category;
        self
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn google_calendar_id(mut self, calendar_id: impl Into<String>) -> Self {
        self.google_calendar_id = calendar_id.into();
        self
    }

    /// Builds and inserts the business entity into the database.
    pub async fn build(self) -> Result<entity::business::Model, DbErr> {
        let now = Utc::now();
        entity::business::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            category: ActiveValue::Set(self.category),
            description: ActiveValue::Set(String::new()),
            email: ActiveValue::Set(String::new()),
            phone_number: ActiveValue::Set(String::new()),
            website_url: ActiveValue::Set(String::new()),
            timezone: ActiveValue::Set(self.timezone),
            address_line1: ActiveValue::Set("Main Street 1".to_string()),
            address_line2: ActiveValue::Set(String::new()),
            city: ActiveValue::Set("Warsaw".to_string()),
            postal_code: ActiveValue::Set("00-001".to_string()),
            country: ActiveValue::Set("Poland".to_string()),
            google_calendar_id: ActiveValue::Set(self.google_calendar_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a business with default values owned by the given user.
pub async fn create_business(
    db: &DatabaseConnection,
    owner_id: Uuid,
) -> Result<entity::business::Model, DbErr> {
    BusinessFactory::new(db, owner_id).build().await
}
