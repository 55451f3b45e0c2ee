use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// User-facing booking failures.
///
/// Every variant is a recoverable condition the caller can act on: pick a
/// different slot, a different day, or a different service. None of these
/// indicate a server fault, so none map to a 5xx status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The slot was taken between rendering and committing, or was already
    /// booked. The losing side of a concurrent booking race receives this.
    #[error("The selected slot is no longer available.")]
    SlotUnavailable,

    /// The requested time falls outside the business's opening window for
    /// that day, or the business is closed.
    #[error("The requested time is outside the business's opening hours.")]
    InvalidWindow,

    /// The requested start has already elapsed in the business's local time.
    #[error("Appointments cannot be booked in the past.")]
    PastSlot,

    /// The service does not exist for this business or has been deactivated.
    #[error("Service not found.")]
    ServiceInactive,
}

impl BookingError {
    fn status_code(&self) -> StatusCode {
        match self {
            BookingError::SlotUnavailable => StatusCode::CONFLICT,
            BookingError::InvalidWindow | BookingError::PastSlot => StatusCode::BAD_REQUEST,
            BookingError::ServiceInactive => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
