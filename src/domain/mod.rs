//! Domain layer - Core business entities
//!
//! Plain data types with no persistence concerns; database mapping lives
//! in the infra layer.

mod filter;
mod order;
mod user;

pub use filter::{FilterCondition, FilterValue, OrderField, OrderFilter};
pub use order::{Customer, DailyRevenue, Order, OrderStatus, OrderSummary};
pub use user::User;
