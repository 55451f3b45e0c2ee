//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits
//! between the controller (API) layer and the data (repository) layer.
//! Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating repository calls and external services
//! - **Transaction Management**: Handling multi-step operations, most
//!   notably the atomic booking transaction
//!
//! The availability engine lives in `availability`; `booking` wraps it in
//! the transaction + advisory-lock unit that makes bookings race-free.

pub mod appointment;
pub mod availability;
pub mod booking;
pub mod business;
pub mod calendar;
pub mod favorite;
pub mod unit_of_work;

#[cfg(test)]
mod test;
