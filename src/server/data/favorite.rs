use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's favorites with the favorited business attached,
    /// newest first.
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<(entity::favorite::Model, Option<entity::business::Model>)>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_desc(entity::favorite::Column::CreatedAt)
            .find_also_related(entity::prelude::Business)
            .all(self.db)
            .await
    }

    pub async fn exists(&self, user_id: Uuid, business_id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::BusinessId.eq(business_id))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        business_id: Uuid,
    ) -> Result<entity::favorite::Model, DbErr> {
        entity::favorite::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            business_id: ActiveValue::Set(business_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn delete(&self, user_id: Uuid, business_id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::BusinessId.eq(business_id))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
