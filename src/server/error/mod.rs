//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion
//! logic for transforming errors into appropriate HTTP responses. The
//! `AppError` enum serves as the top-level error type that wraps
//! domain-specific errors and implements `IntoResponse` for automatic error
//! handling in API endpoints.

pub mod auth;
pub mod booking;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, booking::BookingError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and
/// provides automatic conversion to HTTP responses. Most variants use
/// `#[from]` for automatic error conversion. Domain-specific errors like
/// `BookingError` handle their own response mapping, while generic variants
/// provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Identity or ownership error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code
    /// mapping (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Booking validation or slot-race error.
    ///
    /// Delegates to `BookingError::into_response()`; these are user-facing
    /// conditions (409 for a lost slot race, 400/404 for invalid requests),
    /// never server errors.
    #[error(transparent)]
    BookingErr(#[from] BookingError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged
    /// server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response
/// body. Booking and identity errors delegate to their own response
/// handling, while other errors use standard mappings. Internal errors are
/// logged with full details but return generic messages to avoid
/// information leakage.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BookingErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the error message and returns a generic "Internal server error"
/// message to the client. Used as a fallback for errors that don't have
/// specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
