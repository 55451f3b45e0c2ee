//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations
//! (CRUD) for each domain in the application. Repositories use SeaORM entity
//! models internally and accept parameter models to maintain separation
//! between the data layer and business logic layer.
//!
//! `AppointmentRepository` and `OpeningHourRepository` are generic over
//! `ConnectionTrait` so the same queries run on the pooled connection and
//! inside the booking transaction.

pub mod appointment;
pub mod business;
pub mod favorite;
pub mod opening_hour;
pub mod service;
pub mod user;

#[cfg(test)]
mod test;
