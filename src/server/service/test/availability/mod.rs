use test_utils::{builder::TestBuilder, factory};

use super::*;
use crate::server::{
    error::AppError,
    service::availability::{local_datetime, resolve_timezone, AvailabilityService},
    util::time::format_time_list,
};

mod daily_availability;
