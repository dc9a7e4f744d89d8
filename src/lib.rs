//! Persistence and configuration layer for an order-management backend.
//!
//! This crate owns the data-access side of the application: filtered and
//! paginated order queries, the daily revenue report, user lookup for the
//! authentication layer, and the security settings the web layer reads.
//! Request routing, authorization enforcement, and schema management live
//! upstream.
//!
//! # Architecture Layers
//!
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and the query filter representation
//! - **infra**: Infrastructure concerns (database connection, repositories)
//! - **types**: Shared types (pagination)
//! - **errors**: Centralized error handling

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod types;

// Re-export commonly used types at crate root
pub use config::{Config, SecuritySettings};
pub use domain::{Order, OrderFilter, OrderSummary, User};
pub use errors::{AppError, AppResult};
pub use infra::{Database, OrderRepository, OrderStore, UserRepository, UserStore};
