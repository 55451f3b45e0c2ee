//! Sessly Test Utils
//!
//! Shared testing utilities for building integration and unit tests for the
//! sessly booking backend. This crate offers a builder pattern for creating
//! test contexts with in-memory SQLite databases and customizable table
//! schemas, plus factories for every entity in the booking domain.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database
//! tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_booking() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_booking_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
