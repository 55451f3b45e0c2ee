use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::business::{CreateServiceParams, UpdateServiceParams};

pub struct ServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        business_id: Uuid,
        id: Uuid,
    ) -> Result<Option<entity::service::Model>, DbErr> {
        entity::prelude::Service::find_by_id(id)
            .filter(entity::service::Column::BusinessId.eq(business_id))
            .one(self.db)
            .await
    }

    /// Gets a service only if it belongs to the business and is active.
    ///
    /// The booking path goes through this lookup so deactivated services are
    /// indistinguishable from missing ones.
    pub async fn get_active(
        &self,
        business_id: Uuid,
        id: Uuid,
    ) -> Result<Option<entity::service::Model>, DbErr> {
        entity::prelude::Service::find_by_id(id)
            .filter(entity::service::Column::BusinessId.eq(business_id))
            .filter(entity::service::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    pub async fn list_active(
        &self,
        business_id: Uuid,
    ) -> Result<Vec<entity::service::Model>, DbErr> {
        entity::prelude::Service::find()
            .filter(entity::service::Column::BusinessId.eq(business_id))
            .filter(entity::service::Column::IsActive.eq(true))
            .order_by_asc(entity::service::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn list_all(
        &self,
        business_id: Uuid,
    ) -> Result<Vec<entity::service::Model>, DbErr> {
        entity::prelude::Service::find()
            .filter(entity::service::Column::BusinessId.eq(business_id))
            .order_by_asc(entity::service::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn count_active(&self, business_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Service::find()
            .filter(entity::service::Column::BusinessId.eq(business_id))
            .filter(entity::service::Column::IsActive.eq(true))
            .count(self.db)
            .await
    }

    pub async fn create(
        &self,
        business_id: Uuid,
        params: CreateServiceParams,
    ) -> Result<entity::service::Model, DbErr> {
        let now = Utc::now();
        entity::service::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            business_id: ActiveValue::Set(business_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            duration_minutes: ActiveValue::Set(params.duration_minutes),
            buffer_minutes: ActiveValue::Set(params.buffer_minutes),
            price_amount: ActiveValue::Set(params.price_amount),
            price_currency: ActiveValue::Set(params.price_currency),
            is_active: ActiveValue::Set(params.is_active),
            color: ActiveValue::Set(params.color),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Updates a service; only fields present in `params` change.
    ///
    /// Editing the duration or buffer only affects future bookings;
    /// committed appointments keep the buffer snapshot taken when they were
    /// created.
    pub async fn update(
        &self,
        service: entity::service::Model,
        params: UpdateServiceParams,
    ) -> Result<entity::service::Model, DbErr> {
        let mut active_model: entity::service::ActiveModel = service.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(duration_minutes) = params.duration_minutes {
            active_model.duration_minutes = ActiveValue::Set(duration_minutes);
        }
        if let Some(buffer_minutes) = params.buffer_minutes {
            active_model.buffer_minutes = ActiveValue::Set(buffer_minutes);
        }
        if let Some(price_amount) = params.price_amount {
            active_model.price_amount = ActiveValue::Set(price_amount);
        }
        if let Some(price_currency) = params.price_currency {
            active_model.price_currency = ActiveValue::Set(price_currency);
        }
        if let Some(is_active) = params.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        if let Some(color) = params.color {
            active_model.color = ActiveValue::Set(color);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Service::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
