//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields use
//! cheap-to-clone types: `DatabaseConnection` is a connection pool and the
//! rest are reference-counted.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::{booking::BookingLocks, calendar::CalendarSync};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Calendar-sync collaborator, constructed once at startup with its own
    /// HTTP client and invoked from post-commit hooks.
    pub calendar: Arc<CalendarSync>,

    /// Per-business advisory locks serializing concurrent bookings.
    pub booking_locks: Arc<BookingLocks>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        calendar: Arc<CalendarSync>,
        booking_locks: Arc<BookingLocks>,
    ) -> Self {
        Self {
            db,
            calendar,
            booking_locks,
        }
    }
}
