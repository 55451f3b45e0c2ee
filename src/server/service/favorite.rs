//! Favorite businesses: a direct user-to-business many-to-many.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{business::BusinessRepository, favorite::FavoriteRepository},
    error::AppError,
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the businesses a user has favorited, most recent first.
    pub async fn list(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<entity::business::Model>, AppError> {
        let favorites = FavoriteRepository::new(self.db)
            .list_for_user(user_id)
            .await?;

        Ok(favorites
            .into_iter()
            .filter_map(|(_, business)| business)
            .collect())
    }

    /// Adds a business to the user's favorites. Adding an existing favorite
    /// is a no-op, so the operation is idempotent.
    pub async fn add(&self, user_id: Uuid, business_id: Uuid) -> Result<(), AppError> {
        BusinessRepository::new(self.db)
            .get_by_id(business_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

        let repo = FavoriteRepository::new(self.db);
        if !repo.exists(user_id, business_id).await? {
            repo.create(user_id, business_id).await?;
        }

        Ok(())
    }

    /// Removes a business from the user's favorites; removing an absent
    /// favorite is a no-op.
    pub async fn remove(&self, user_id: Uuid, business_id: Uuid) -> Result<(), AppError> {
        FavoriteRepository::new(self.db)
            .delete(user_id, business_id)
            .await?;
        Ok(())
    }
}
