use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::business::{
        parse_category, AvailabilityDto, AvailabilityQuery, BusinessDetailDto, BusinessListDto,
        BusinessListQuery, CategoryCountDto, OpeningHourDto, ServiceDto,
    },
    server::{
        data::{business::BusinessRepository, service::ServiceRepository},
        error::{booking::BookingError, AppError},
        service::{availability::AvailabilityService, business::BusinessService},
        state::AppState,
        util::time::format_time_list,
    },
};

/// GET /api/businesses
/// List businesses with optional `category` and `search` filters.
pub async fn list_businesses(
    State(state): State<AppState>,
    Query(query): Query<BusinessListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let category = match query.category.as_deref() {
        Some(value) => Some(parse_category(value).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown category '{}'", value))
        })?),
        None => None,
    };

    let businesses = BusinessService::new(&state.db)
        .list(category, query.search.as_deref())
        .await?;

    let dtos: Vec<BusinessListDto> = businesses
        .into_iter()
        .map(|(business, services_count)| BusinessListDto::from_model(business, services_count))
        .collect();

    Ok(Json(dtos))
}

/// GET /api/businesses/categories
/// Category slugs with their business counts.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let counts = BusinessService::new(&state.db).category_counts().await?;

    let dtos: Vec<CategoryCountDto> = counts
        .into_iter()
        .map(|(category, count)| CategoryCountDto {
            slug: crate::model::business::category_slug(&category).to_string(),
            name: category.display_name().to_string(),
            count,
        })
        .collect();

    Ok(Json(dtos))
}

/// GET /api/businesses/{slug}
/// Business detail including opening hours and active services.
pub async fn get_business(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (business, hours, services) = BusinessService::new(&state.db).detail(&slug).await?;

    let services_count = services.len() as u64;
    let email = business.email.clone();
    let timezone = business.timezone.clone();

    let dto = BusinessDetailDto {
        summary: BusinessListDto::from_model(business, services_count),
        email,
        timezone,
        opening_hours: hours.into_iter().map(OpeningHourDto::from_model).collect(),
        services: services.into_iter().map(ServiceDto::from_model).collect(),
    };

    Ok(Json(dto))
}

/// GET /api/businesses/{slug}/availability?date=YYYY-MM-DD&service_id=...
/// Free slot starts for a service on a date, as ascending `HH:MM` strings.
pub async fn get_availability(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let business = BusinessRepository::new(&state.db)
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

    let service = ServiceRepository::new(&state.db)
        .get_active(business.id, query.service_id)
        .await?
        .ok_or(BookingError::ServiceInactive)?;

    let slots = AvailabilityService::new(&state.db)
        .daily_availability(&business, &service, query.date)
        .await?;

    Ok(Json(AvailabilityDto {
        date: query.date,
        service_id: service.id,
        slots: format_time_list(&slots),
    }))
}
