//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories automatically handle foreign-key dependencies, making
//! tests concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let owner = factory::user::create_user(&db).await?;
//! let business = factory::business::create_business(&db, owner.id).await?;
//!
//! // Create a fully bookable business in one call
//! let (owner, business, service, customer) =
//!     factory::helpers::create_booking_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let service = factory::service::ServiceFactory::new(&db, business.id)
//!     .duration_minutes(30)
//!     .buffer_minutes(10)
//!     .build()
//!     .await?;
//! ```

pub mod appointment;
pub mod business;
pub mod favorite;
pub mod helpers;
pub mod opening_hour;
pub mod service;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use appointment::create_appointment;
pub use business::create_business;
pub use favorite::create_favorite;
pub use opening_hour::{create_open_day, create_week_hours};
pub use service::create_service;
pub use user::create_user;
