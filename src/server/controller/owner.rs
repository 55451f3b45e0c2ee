use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::EntityTrait;
use uuid::Uuid;

use crate::{
    model::{
        appointment::OwnerAppointmentDto,
        business::{
            BusinessListDto, BusinessStatsDto, CreateServiceDto, OpeningHourDto,
            OpeningHourWriteDto, ServiceDto, UpdateServiceDto,
        },
    },
    server::{
        data::{business::BusinessRepository, service::ServiceRepository},
        error::AppError,
        middleware::auth::IdentityGuard,
        model::business::{CreateServiceParams, OpeningHourParams, UpdateServiceParams},
        service::{appointment::AppointmentService, business::BusinessService},
        state::AppState,
        util::time::parse_hhmm,
    },
};

/// GET /api/my-businesses
/// Businesses owned by the caller.
pub async fn list_my_businesses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let owner = IdentityGuard::new(&state.db, &headers).require_user().await?;

    let businesses = BusinessRepository::new(&state.db)
        .list_by_owner(owner.id)
        .await?;

    let service_repo = ServiceRepository::new(&state.db);
    let mut dtos = Vec::with_capacity(businesses.len());
    for business in businesses {
        let services_count = service_repo.count_active(business.id).await?;
        dtos.push(BusinessListDto::from_model(business, services_count));
    }

    Ok(Json(dtos))
}

/// GET /api/my-businesses/{slug}/stats
pub async fn business_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (_, business) = IdentityGuard::new(&state.db, &headers)
        .require_owner(&slug)
        .await?;

    let stats = BusinessService::new(&state.db).stats(&business).await?;

    Ok(Json(BusinessStatsDto {
        total: stats.total,
        upcoming: stats.upcoming,
        confirmed: stats.confirmed,
        completed: stats.completed,
        cancelled: stats.cancelled,
        last_30_days: stats.last_30_days,
    }))
}

/// GET /api/my-businesses/{slug}/services
/// Every service of the business, inactive ones included.
pub async fn list_services(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (_, business) = IdentityGuard::new(&state.db, &headers)
        .require_owner(&slug)
        .await?;

    let services = BusinessService::new(&state.db)
        .list_services(&business)
        .await?;

    Ok(Json(
        services
            .into_iter()
            .map(ServiceDto::from_model)
            .collect::<Vec<_>>(),
    ))
}

/// POST /api/my-businesses/{slug}/services
pub async fn create_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Json(dto): Json<CreateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, business) = IdentityGuard::new(&state.db, &headers)
        .require_owner(&slug)
        .await?;

    let service = BusinessService::new(&state.db)
        .create_service(
            &business,
            CreateServiceParams {
                name: dto.name,
                description: dto.description,
                duration_minutes: dto.duration_minutes,
                buffer_minutes: dto.buffer_minutes,
                price_amount: dto.price_amount,
                price_currency: dto.price_currency,
                is_active: dto.is_active,
                color: dto.color,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ServiceDto::from_model(service))))
}

/// PUT /api/my-businesses/{slug}/services/{id}
pub async fn update_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((slug, service_id)): Path<(String, Uuid)>,
    Json(dto): Json<UpdateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, business) = IdentityGuard::new(&state.db, &headers)
        .require_owner(&slug)
        .await?;

    let service = BusinessService::new(&state.db)
        .update_service(
            &business,
            service_id,
            UpdateServiceParams {
                name: Some(dto.name),
                description: Some(dto.description),
                duration_minutes: Some(dto.duration_minutes),
                buffer_minutes: Some(dto.buffer_minutes),
                price_amount: Some(dto.price_amount),
                price_currency: Some(dto.price_currency),
                is_active: Some(dto.is_active),
                color: Some(dto.color),
            },
        )
        .await?;

    Ok(Json(ServiceDto::from_model(service)))
}

/// DELETE /api/my-businesses/{slug}/services/{id}
pub async fn delete_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((slug, service_id)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let (_, business) = IdentityGuard::new(&state.db, &headers)
        .require_owner(&slug)
        .await?;

    BusinessService::new(&state.db)
        .delete_service(&business, service_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/my-businesses/{slug}/opening-hours
pub async fn list_opening_hours(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (_, business) = IdentityGuard::new(&state.db, &headers)
        .require_owner(&slug)
        .await?;

    let hours = BusinessService::new(&state.db)
        .list_opening_hours(&business)
        .await?;

    Ok(Json(
        hours
            .into_iter()
            .map(OpeningHourDto::from_model)
            .collect::<Vec<_>>(),
    ))
}

/// POST /api/my-businesses/{slug}/opening-hours
pub async fn create_opening_hour(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Json(dto): Json<OpeningHourWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, business) = IdentityGuard::new(&state.db, &headers)
        .require_owner(&slug)
        .await?;

    let params = opening_hour_params(dto)?;
    let hours = BusinessService::new(&state.db)
        .create_opening_hour(&business, params)
        .await?;

    Ok((StatusCode::CREATED, Json(OpeningHourDto::from_model(hours))))
}

/// POST /api/my-businesses/{slug}/opening-hours/bulk
/// Replace the whole weekly schedule atomically.
pub async fn bulk_update_opening_hours(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Json(dtos): Json<Vec<OpeningHourWriteDto>>,
) -> Result<impl IntoResponse, AppError> {
    let (_, business) = IdentityGuard::new(&state.db, &headers)
        .require_owner(&slug)
        .await?;

    let mut rows = Vec::with_capacity(dtos.len());
    for dto in dtos {
        rows.push(opening_hour_params(dto)?);
    }

    let hours = BusinessService::new(&state.db)
        .replace_opening_hours(&business, rows)
        .await?;

    Ok(Json(
        hours
            .into_iter()
            .map(OpeningHourDto::from_model)
            .collect::<Vec<_>>(),
    ))
}

/// GET /api/my-businesses/{slug}/appointments
pub async fn list_business_appointments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (_, business) = IdentityGuard::new(&state.db, &headers)
        .require_owner(&slug)
        .await?;

    let appointments = AppointmentService::new(&state.db)
        .list_for_business(&business)
        .await?;

    let mut dtos = Vec::with_capacity(appointments.len());
    for appointment in appointments {
        dtos.push(owner_appointment_to_dto(&state, appointment).await?);
    }

    Ok(Json(dtos))
}

/// POST /api/my-businesses/{slug}/appointments/{id}/confirm
pub async fn confirm_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((slug, id)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let (_, business) = IdentityGuard::new(&state.db, &headers)
        .require_owner(&slug)
        .await?;

    let appointment = AppointmentService::new(&state.db)
        .confirm_as_owner(&business, id)
        .await?;

    let dto = owner_appointment_to_dto(&state, appointment).await?;
    Ok(Json(dto))
}

/// POST /api/my-businesses/{slug}/appointments/{id}/cancel
/// Owner cancellation; allowed regardless of the appointment's start time.
pub async fn cancel_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((slug, id)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let (_, business) = IdentityGuard::new(&state.db, &headers)
        .require_owner(&slug)
        .await?;

    let appointment = AppointmentService::new(&state.db)
        .cancel_as_owner(&business, id)
        .await?;

    let dto = owner_appointment_to_dto(&state, appointment).await?;
    Ok(Json(dto))
}

fn opening_hour_params(dto: OpeningHourWriteDto) -> Result<OpeningHourParams, AppError> {
    let open_time = dto.open_time.as_deref().map(parse_hhmm).transpose()?;
    let close_time = dto.close_time.as_deref().map(parse_hhmm).transpose()?;

    Ok(OpeningHourParams {
        day_of_week: dto.day_of_week,
        is_closed: dto.is_closed,
        open_time,
        close_time,
    })
}

async fn owner_appointment_to_dto(
    state: &AppState,
    appointment: entity::appointment::Model,
) -> Result<OwnerAppointmentDto, AppError> {
    let service = entity::prelude::Service::find_by_id(appointment.service_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;
    let customer = entity::prelude::User::find_by_id(appointment.customer_id)
        .one(&state.db)
        .await?;

    Ok(OwnerAppointmentDto::from_models(
        appointment,
        service,
        customer.map(|user| user.email).unwrap_or_default(),
    ))
}
