use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use super::*;
use crate::server::{
    data::appointment::AppointmentRepository,
    error::{booking::BookingError, AppError},
    model::appointment::BookAppointmentParams,
    service::booking::{BookingLocks, BookingService},
};

mod book;

fn params(
    service_id: Uuid,
    customer_id: Uuid,
    date: NaiveDate,
    hour: u32,
    minute: u32,
) -> BookAppointmentParams {
    BookAppointmentParams {
        service_id,
        customer_id,
        date,
        start_time: hm(hour, minute),
        notes: String::new(),
    }
}
