//! SeaORM entity definitions for the sessly booking backend.
//!
//! One module per database table. The `prelude` re-exports every entity
//! under its `Entity` alias for use in repositories and the test schema
//! builder.

pub mod appointment;
pub mod business;
pub mod favorite;
pub mod opening_hour;
pub mod service;
pub mod user;

pub mod prelude;
