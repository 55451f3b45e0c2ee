use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use super::*;
use crate::server::{
    error::AppError,
    service::{appointment::AppointmentService, availability::AvailabilityService},
    util::time::format_time_list,
};

mod lifecycle;
