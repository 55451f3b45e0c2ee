use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::business::OpeningHourParams;

/// Repository for weekly opening-hour rows.
///
/// Generic over the connection so the booking transaction can read the
/// schedule through the same connection that holds the conflict check.
pub struct OpeningHourRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OpeningHourRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the opening-hours row for a weekday, 0 = Monday .. 6 = Sunday.
    ///
    /// At most one row exists per (business, weekday) by schema constraint.
    pub async fn get_for_day(
        &self,
        business_id: Uuid,
        day_of_week: i32,
    ) -> Result<Option<entity::opening_hour::Model>, DbErr> {
        entity::prelude::OpeningHour::find()
            .filter(entity::opening_hour::Column::BusinessId.eq(business_id))
            .filter(entity::opening_hour::Column::DayOfWeek.eq(day_of_week))
            .one(self.db)
            .await
    }

    pub async fn list_for_business(
        &self,
        business_id: Uuid,
    ) -> Result<Vec<entity::opening_hour::Model>, DbErr> {
        entity::prelude::OpeningHour::find()
            .filter(entity::opening_hour::Column::BusinessId.eq(business_id))
            .order_by_asc(entity::opening_hour::Column::DayOfWeek)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        business_id: Uuid,
        params: OpeningHourParams,
    ) -> Result<entity::opening_hour::Model, DbErr> {
        entity::opening_hour::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            business_id: ActiveValue::Set(business_id),
            day_of_week: ActiveValue::Set(params.day_of_week),
            is_closed: ActiveValue::Set(params.is_closed),
            open_time: ActiveValue::Set(params.open_time),
            close_time: ActiveValue::Set(params.close_time),
        }
        .insert(self.db)
        .await
    }

    /// Replaces every opening-hours row of a business with the given set.
    ///
    /// Callers run this inside a transaction so a failed insert cannot leave
    /// the business without a schedule.
    pub async fn replace_week(
        &self,
        business_id: Uuid,
        rows: Vec<OpeningHourParams>,
    ) -> Result<Vec<entity::opening_hour::Model>, DbErr> {
        entity::prelude::OpeningHour::delete_many()
            .filter(entity::opening_hour::Column::BusinessId.eq(business_id))
            .exec(self.db)
            .await?;

        let mut created = Vec::with_capacity(rows.len());
        for params in rows {
            created.push(self.create(business_id, params).await?);
        }

        Ok(created)
    }
}
