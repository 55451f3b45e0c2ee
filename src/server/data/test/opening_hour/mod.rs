use chrono::NaiveTime;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::opening_hour::OpeningHourRepository;
use crate::server::model::business::OpeningHourParams;

mod get_for_day;
mod replace_week;

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}
