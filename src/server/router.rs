use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::{
    controller::{
        appointment::{
            cancel_my_appointment, create_appointment, get_my_appointment, list_my_appointments,
        },
        business::{get_availability, get_business, list_businesses, list_categories},
        favorite::{add_favorite, list_favorites, remove_favorite},
        owner::{
            bulk_update_opening_hours, business_stats, cancel_appointment, confirm_appointment,
            create_opening_hour, create_service, delete_service, list_business_appointments,
            list_my_businesses, list_opening_hours, list_services, update_service,
        },
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        // Public browsing and availability
        .route("/api/businesses", get(list_businesses))
        .route("/api/businesses/categories", get(list_categories))
        .route("/api/businesses/{slug}", get(get_business))
        .route("/api/businesses/{slug}/availability", get(get_availability))
        // Customer booking and appointment management
        .route("/api/businesses/{slug}/appointments", post(create_appointment))
        .route("/api/appointments", get(list_my_appointments))
        .route("/api/appointments/{id}", get(get_my_appointment))
        .route("/api/appointments/{id}/cancel", post(cancel_my_appointment))
        // Favorites
        .route("/api/favorites", get(list_favorites))
        .route(
            "/api/favorites/{business_id}",
            post(add_favorite).delete(remove_favorite),
        )
        // Owner management
        .route("/api/my-businesses", get(list_my_businesses))
        .route("/api/my-businesses/{slug}/stats", get(business_stats))
        .route(
            "/api/my-businesses/{slug}/services",
            get(list_services).post(create_service),
        )
        .route(
            "/api/my-businesses/{slug}/services/{id}",
            put(update_service).delete(delete_service),
        )
        .route(
            "/api/my-businesses/{slug}/opening-hours",
            get(list_opening_hours).post(create_opening_hour),
        )
        .route(
            "/api/my-businesses/{slug}/opening-hours/bulk",
            post(bulk_update_opening_hours),
        )
        .route(
            "/api/my-businesses/{slug}/appointments",
            get(list_business_appointments),
        )
        .route(
            "/api/my-businesses/{slug}/appointments/{id}/confirm",
            post(confirm_appointment),
        )
        .route(
            "/api/my-businesses/{slug}/appointments/{id}/cancel",
            post(cancel_appointment),
        )
}
