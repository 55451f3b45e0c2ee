//! Favorite factory for linking users to favorited businesses.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a favorite row for the given user/business pair.
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: Uuid,
    business_id: Uuid,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        user_id: ActiveValue::Set(user_id),
        business_id: ActiveValue::Set(business_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
