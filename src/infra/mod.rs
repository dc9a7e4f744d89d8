//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection management
//! - Repositories over the persistence engine

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{OrderRepository, OrderStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockOrderRepository, MockUserRepository};
