use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::EntityTrait;
use uuid::Uuid;

use crate::{
    model::appointment::{
        parse_status, AppointmentDto, AppointmentListQuery, CreateAppointmentDto,
    },
    server::{
        data::business::BusinessRepository,
        error::AppError,
        middleware::auth::IdentityGuard,
        model::appointment::{AppointmentListFilter, BookAppointmentParams, TimeFilter},
        service::{appointment::AppointmentService, booking::BookingService},
        state::AppState,
        util::time::parse_hhmm,
    },
};

/// POST /api/businesses/{slug}/appointments
/// Book a slot. Returns 201 with the created appointment; a lost race maps
/// to 409, validation failures to 400/404.
pub async fn create_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Json(dto): Json<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let customer = IdentityGuard::new(&state.db, &headers).require_user().await?;

    let business = BusinessRepository::new(&state.db)
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

    let start_time = parse_hhmm(&dto.start_time)?;

    let booking_service =
        BookingService::new(&state.db, &state.booking_locks, state.calendar.clone());
    let appointment = booking_service
        .book(
            &business,
            BookAppointmentParams {
                service_id: dto.service_id,
                customer_id: customer.id,
                date: dto.date,
                start_time,
                notes: dto.notes.trim().to_string(),
            },
        )
        .await?;

    let dto = appointment_to_dto(&state, appointment).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

/// GET /api/appointments?status=&time=
/// The calling customer's appointments.
pub async fn list_my_appointments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AppointmentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let customer = IdentityGuard::new(&state.db, &headers).require_user().await?;

    let status = match query.status.as_deref() {
        Some(value) => Some(parse_status(value).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown status '{}'", value))
        })?),
        None => None,
    };
    let time = match query.time.as_deref() {
        Some(value) => Some(TimeFilter::parse(value).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown time filter '{}'", value))
        })?),
        None => None,
    };

    let appointments = AppointmentService::new(&state.db)
        .list_for_customer(customer.id, AppointmentListFilter { status, time })
        .await?;

    let mut dtos = Vec::with_capacity(appointments.len());
    for appointment in appointments {
        dtos.push(appointment_to_dto(&state, appointment).await?);
    }

    Ok(Json(dtos))
}

/// GET /api/appointments/{id}
pub async fn get_my_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let customer = IdentityGuard::new(&state.db, &headers).require_user().await?;

    let appointment = AppointmentService::new(&state.db)
        .get_for_customer(id, customer.id)
        .await?;

    let dto = appointment_to_dto(&state, appointment).await?;
    Ok(Json(dto))
}

/// POST /api/appointments/{id}/cancel
/// Customer-initiated cancellation; only upcoming appointments qualify.
pub async fn cancel_my_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let customer = IdentityGuard::new(&state.db, &headers).require_user().await?;

    let appointment = AppointmentService::new(&state.db)
        .cancel_as_customer(id, customer.id)
        .await?;

    let dto = appointment_to_dto(&state, appointment).await?;
    Ok(Json(dto))
}

/// Enriches an appointment with its business slug and service for the
/// customer-facing DTO.
async fn appointment_to_dto(
    state: &AppState,
    appointment: entity::appointment::Model,
) -> Result<AppointmentDto, AppError> {
    let business = entity::prelude::Business::find_by_id(appointment.business_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;
    let service = entity::prelude::Service::find_by_id(appointment.service_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

    Ok(AppointmentDto::from_models(
        appointment,
        business.slug,
        service,
    ))
}
