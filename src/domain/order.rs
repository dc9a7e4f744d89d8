//! Order domain entities and derived read shapes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{STATUS_APPROVED, STATUS_CANCELLED, STATUS_CREATED};

/// Order lifecycle states. Transitions happen upstream; this layer only
/// reads them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Approved,
    Cancelled,
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        match s {
            STATUS_APPROVED => OrderStatus::Approved,
            STATUS_CANCELLED => OrderStatus::Cancelled,
            _ => OrderStatus::Created,
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.to_string()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Created => write!(f, "{}", STATUS_CREATED),
            OrderStatus::Approved => write!(f, "{}", STATUS_APPROVED),
            OrderStatus::Cancelled => write!(f, "{}", STATUS_CANCELLED),
        }
    }
}

/// Customer referenced by an order. Owned by the customer module upstream;
/// carried here for search and display only.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
}

/// Order domain entity. Created and mutated upstream; read-only here.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: i64,
    pub customer: Customer,
    pub created_at: NaiveDate,
    pub total: Decimal,
    pub status: OrderStatus,
}

/// Read-only order projection for listings: the fields the overview screen
/// needs, recomputed per query and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
    pub id: i64,
    pub customer_name: String,
    pub created_at: NaiveDate,
    pub total: Decimal,
    pub status: OrderStatus,
}

/// Aggregated revenue for one day with at least one order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRevenue {
    pub day: NaiveDate,
    pub total: Decimal,
}
