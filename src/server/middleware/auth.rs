//! Request-identity guard.
//!
//! Authentication itself happens upstream (the identity collaborator); the
//! backend receives the already-authenticated user id in the `X-User-Id`
//! header and treats it as opaque. The guard verifies the id maps to a
//! known user and, for owner endpoints, that the user owns the business
//! addressed by the request.

use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{business::BusinessRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
};

/// Header carrying the authenticated user id.
pub const IDENTITY_HEADER: &str = "x-user-id";

pub struct IdentityGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> IdentityGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the request identity to a known user.
    ///
    /// # Returns
    /// - `Ok(user)`: The authenticated user
    /// - `Err(AppError::AuthErr)`: Header missing, malformed, or unknown
    pub async fn require_user(&self) -> Result<entity::user::Model, AppError> {
        let raw = self
            .headers
            .get(IDENTITY_HEADER)
            .ok_or(AuthError::MissingIdentity)?;
        let user_id = raw
            .to_str()
            .ok()
            .and_then(|value| Uuid::parse_str(value).ok())
            .ok_or(AuthError::MalformedIdentity)?;

        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UnknownUser(user_id))?;

        Ok(user)
    }

    /// Resolves the request identity and the business it must own.
    ///
    /// A business that exists but belongs to someone else is reported as
    /// not found, so ownership cannot be probed through this endpoint.
    ///
    /// # Returns
    /// - `Ok((user, business))`: The owner and their business
    /// - `Err(AppError::AuthErr)`: Identity failure
    /// - `Err(AppError::NotFound)`: No owned business under this slug
    pub async fn require_owner(
        &self,
        slug: &str,
    ) -> Result<(entity::user::Model, entity::business::Model), AppError> {
        let user = self.require_user().await?;

        let business = BusinessRepository::new(self.db)
            .get_by_slug_for_owner(slug, user.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

        Ok((user, business))
    }
}
