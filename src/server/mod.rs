//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the
//! appointment-booking application: API endpoints, the availability and
//! booking engine, data access, and infrastructure services. The backend
//! uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access
//!   control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration; the
//!   availability engine and the atomic booking transaction live here
//! - **Data Layer** (`data/`) - Database operations via repositories
//! - **Model Layer** (`model/`) - Domain models and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP mapping
//! - **Middleware** (`middleware/`) - Request-identity guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared application state (DB, calendar sync,
//!   booking locks)
//! - **Startup** (`startup`) - Database, HTTP client and calendar setup
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. **Controller** resolves the identity, converts DTOs to params, calls
//!    a service
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries the database through SeaORM entities
//! 5. **Controller** converts the result back to a DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
