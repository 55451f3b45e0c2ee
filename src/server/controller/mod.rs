//! HTTP request handlers.
//!
//! Controllers validate access through the identity guard, convert DTOs to
//! parameter models, call into the service layer, and convert results back
//! to DTOs.

pub mod appointment;
pub mod business;
pub mod favorite;
pub mod owner;
