use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{api::MessageDto, business::BusinessListDto},
    server::{
        data::service::ServiceRepository, error::AppError, middleware::auth::IdentityGuard,
        service::favorite::FavoriteService, state::AppState,
    },
};

/// GET /api/favorites
/// Businesses the caller has favorited, most recent first.
pub async fn list_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = IdentityGuard::new(&state.db, &headers).require_user().await?;

    let businesses = FavoriteService::new(&state.db).list(user.id).await?;

    let service_repo = ServiceRepository::new(&state.db);
    let mut dtos = Vec::with_capacity(businesses.len());
    for business in businesses {
        let services_count = service_repo.count_active(business.id).await?;
        dtos.push(BusinessListDto::from_model(business, services_count));
    }

    Ok(Json(dtos))
}

/// POST /api/favorites/{business_id}
pub async fn add_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(business_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = IdentityGuard::new(&state.db, &headers).require_user().await?;

    FavoriteService::new(&state.db)
        .add(user.id, business_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "Business added to favorites".to_string(),
        }),
    ))
}

/// DELETE /api/favorites/{business_id}
pub async fn remove_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(business_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = IdentityGuard::new(&state.db, &headers).require_user().await?;

    FavoriteService::new(&state.db)
        .remove(user.id, business_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
