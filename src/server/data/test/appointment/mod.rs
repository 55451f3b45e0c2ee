use chrono::{DateTime, Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::appointment::AppointmentRepository;
use crate::server::model::appointment::{AppointmentListFilter, InsertAppointmentParams};

mod insert;
mod overlapping;
mod stats;
mod update_status;

/// A fixed instant well in the future so seeded rows never collide with
/// "now"-relative filters.
fn base_time() -> DateTime<Utc> {
    Utc::now() + Duration::days(30)
}
