use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

/// Identity errors raised by the request-identity guard.
///
/// The authentication protocol itself lives upstream; this backend only
/// receives an opaque user id and verifies it maps to a known user.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No identity header was supplied with the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing an authenticated identity")]
    MissingIdentity,

    /// The identity header was present but not a valid UUID.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request identity is malformed")]
    MalformedIdentity,

    /// The supplied identity does not match any known user.
    ///
    /// Results in a 401 Unauthorized response; the id is logged for
    /// diagnostics but not echoed to the client.
    #[error("Unknown user {0}")]
    UnknownUser(Uuid),
}

/// Converts identity errors into HTTP responses.
///
/// All variants map to 401 Unauthorized with a generic message; details are
/// logged server-side to avoid leaking which identities exist.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Authentication required".to_string(),
            }),
        )
            .into_response()
    }
}
