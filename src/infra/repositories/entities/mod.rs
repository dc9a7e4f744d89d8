//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod customer;
pub mod order;
pub mod user;
