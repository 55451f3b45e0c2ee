//! Opening-hour factory for creating weekly schedule rows.

use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating opening-hour rows.
///
/// Defaults to an open 09:00-17:00 day; call `closed()` for a closed day
/// (time bounds are cleared).
pub struct OpeningHourFactory<'a> {
    db: &'a DatabaseConnection,
    business_id: Uuid,
    day_of_week: i32,
    is_closed: bool,
    open_time: Option<NaiveTime>,
    close_time: Option<NaiveTime>,
}

impl<'a> OpeningHourFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, business_id: Uuid, day_of_week: i32) -> Self {
        Self {
            db,
            business_id,
            day_of_week,
            is_closed: false,
            open_time: NaiveTime::from_hms_opt(9, 0, 0),
            close_time: NaiveTime::from_hms_opt(17, 0, 0),
        }
    }

    pub fn open_time(mut self, open_time: NaiveTime) -> Self {
        self.open_time = Some(open_time);
        self
    }

    pub fn close_time(mut self, close_time: NaiveTime) -> Self {
        self.close_time = Some(close_time);
        self
    }

    /// Marks the day closed and clears both time bounds.
    pub fn closed(mut self) -> Self {
        self.is_closed = true;
        self.open_time = None;
        self.close_time = None;
        self
    }

    /// Builds and inserts the opening-hour row into the database.
    pub async fn build(self) -> Result<entity::opening_hour::Model, DbErr> {
        entity::opening_hour::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            business_id: ActiveValue::Set(self.business_id),
            day_of_week: ActiveValue::Set(self.day_of_week),
            is_closed: ActiveValue::Set(self.is_closed),
            open_time: ActiveValue::Set(self.open_time),
            close_time: ActiveValue::Set(self.close_time),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open day with the given bounds.
pub async fn create_open_day(
    db: &DatabaseConnection,
    business_id: Uuid,
    day_of_week: i32,
    open_time: NaiveTime,
    close_time: NaiveTime,
) -> Result<entity::opening_hour::Model, DbErr> {
    OpeningHourFactory::new(db, business_id, day_of_week)
        .open_time(open_time)
        .close_time(close_time)
        .build()
        .await
}

/// Creates seven identical open days (00:00 indexing Monday..Sunday).
pub async fn create_week_hours(
    db: &DatabaseConnection,
    business_id: Uuid,
    open_time: NaiveTime,
    close_time: NaiveTime,
) -> Result<Vec<entity::opening_hour::Model>, DbErr> {
    let mut rows = Vec::with_capacity(7);
    for day in 0..7 {
        rows.push(create_open_day(db, business_id, day, open_time, close_time).await?);
    }
    Ok(rows)
}
