//! Order repository: filtered pagination and the daily revenue report.
//!
//! Filter conditions arrive as pure data from the domain layer and are
//! compiled here into store-native predicates. Each operation compiles the
//! filter once and builds every statement it runs (listing, projection,
//! count) from that single compiled condition, so the reported total always
//! matches the page contents.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, SelectTwo,
};

use super::entities::{customer, order};
use crate::domain::{
    DailyRevenue, FilterCondition, FilterValue, Order, OrderField, OrderFilter, OrderStatus,
    OrderSummary,
};
use crate::errors::{AppError, AppResult};
use crate::types::{Paginated, PaginationParams};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Query-side repository for orders. All methods are read-only; order
/// entry and status transitions happen upstream.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Page of full orders matching the filter, with customers attached
    async fn filter(
        &self,
        filter: &OrderFilter,
        page: &PaginationParams,
    ) -> AppResult<Paginated<Order>>;

    /// Page of order summaries (projection) matching the filter
    async fn summarize(
        &self,
        filter: &OrderFilter,
        page: &PaginationParams,
    ) -> AppResult<Paginated<OrderSummary>>;

    /// Revenue summed per day for the month containing `reference`.
    /// Days without orders are absent from the result.
    async fn revenue_by_day(&self, reference: NaiveDate) -> AppResult<Vec<DailyRevenue>>;
}

/// Concrete implementation of OrderRepository
pub struct OrderStore {
    db: DatabaseConnection,
}

impl OrderStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Full-entity listing with the customer row selected alongside.
    fn items_query(condition: Condition) -> SelectTwo<order::Entity, customer::Entity> {
        order::Entity::find()
            .find_also_related(customer::Entity)
            .filter(condition)
    }

    /// Base select with the customer join and the compiled condition
    /// applied. Also serves as the COUNT query.
    fn scoped(condition: Condition) -> Select<order::Entity> {
        order::Entity::find()
            .join(JoinType::InnerJoin, order::Relation::Customer.def())
            .filter(condition)
    }

    /// Summary projection over the scoped select.
    fn summary_query(condition: Condition) -> Select<order::Entity> {
        Self::scoped(condition)
            .select_only()
            .column(order::Column::Id)
            .column_as(customer::Column::Name, "customer_name")
            .column(order::Column::CreatedAt)
            .column(order::Column::Total)
            .column(order::Column::Status)
    }

    /// Per-day revenue aggregation between two inclusive dates.
    fn revenue_query(first_day: NaiveDate, last_day: NaiveDate) -> Select<order::Entity> {
        let condition = compile(&[
            FilterCondition::GreaterOrEqual(OrderField::CreatedAt, FilterValue::Date(first_day)),
            FilterCondition::LessOrEqual(OrderField::CreatedAt, FilterValue::Date(last_day)),
        ]);

        order::Entity::find()
            .select_only()
            .column_as(order::Column::CreatedAt, "day")
            .column_as(order::Column::Total.sum(), "total")
            .filter(condition)
            .group_by(order::Column::CreatedAt)
            .order_by_asc(order::Column::CreatedAt)
    }
}

#[async_trait]
impl OrderRepository for OrderStore {
    async fn filter(
        &self,
        filter: &OrderFilter,
        page: &PaginationParams,
    ) -> AppResult<Paginated<Order>> {
        let condition = compile(&filter.conditions());

        let rows = Self::items_query(condition.clone())
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        let total = Self::scoped(condition)
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        let mut data = Vec::with_capacity(rows.len());
        for (order, customer) in rows {
            // customer_id is a non-nullable FK; a missing join side means
            // the data set is corrupt
            let customer =
                customer.ok_or_else(|| AppError::internal("order row is missing its customer"))?;
            data.push(Order::from((order, customer)));
        }

        Ok(Paginated::new(data, page.page, page.limit(), total))
    }

    async fn summarize(
        &self,
        filter: &OrderFilter,
        page: &PaginationParams,
    ) -> AppResult<Paginated<OrderSummary>> {
        let condition = compile(&filter.conditions());

        let rows = Self::summary_query(condition.clone())
            .offset(page.offset())
            .limit(page.limit())
            .into_model::<SummaryRow>()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        let total = Self::scoped(condition)
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        let data = rows.into_iter().map(OrderSummary::from).collect();

        Ok(Paginated::new(data, page.page, page.limit(), total))
    }

    async fn revenue_by_day(&self, reference: NaiveDate) -> AppResult<Vec<DailyRevenue>> {
        let (first_day, last_day) = month_bounds(reference);

        let rows = Self::revenue_query(first_day, last_day)
            .into_model::<RevenueRow>()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows
            .into_iter()
            .map(|row| DailyRevenue {
                day: row.day,
                total: row.total,
            })
            .collect())
    }
}

/// Summary projection row as selected by `summary_query`
#[derive(Debug, FromQueryResult)]
struct SummaryRow {
    id: i64,
    customer_name: String,
    created_at: NaiveDate,
    total: Decimal,
    status: String,
}

impl From<SummaryRow> for OrderSummary {
    fn from(row: SummaryRow) -> Self {
        OrderSummary {
            id: row.id,
            customer_name: row.customer_name,
            created_at: row.created_at,
            total: row.total,
            status: OrderStatus::from(row.status.as_str()),
        }
    }
}

/// Aggregation row as selected by `revenue_query`
#[derive(Debug, FromQueryResult)]
struct RevenueRow {
    day: NaiveDate,
    total: Decimal,
}

/// Compile a condition list into a store-native conjunctive condition.
///
/// This is the only place predicates are constructed; listing, projection,
/// and count statements must all be built from one call's output.
fn compile(conditions: &[FilterCondition]) -> Condition {
    conditions.iter().fold(Condition::all(), |acc, condition| {
        acc.add(match condition {
            FilterCondition::Equals(field, value) => column(*field).eq(sea_value(value)),
            FilterCondition::ContainsCaseInsensitive(field, fragment) => {
                Expr::expr(Func::lower(column(*field)))
                    .like(format!("%{}%", fragment.to_lowercase()))
            }
            FilterCondition::GreaterOrEqual(field, value) => column(*field).gte(sea_value(value)),
            FilterCondition::LessOrEqual(field, value) => column(*field).lte(sea_value(value)),
        })
    })
}

fn column(field: OrderField) -> Expr {
    match field {
        OrderField::Id => Expr::col((order::Entity, order::Column::Id)),
        OrderField::CustomerName => Expr::col((customer::Entity, customer::Column::Name)),
        OrderField::CreatedAt => Expr::col((order::Entity, order::Column::CreatedAt)),
    }
}

fn sea_value(value: &FilterValue) -> sea_orm::Value {
    match value {
        FilterValue::Id(id) => (*id).into(),
        FilterValue::Date(date) => (*date).into(),
    }
}

/// First and last calendar day of the month containing `reference`.
fn month_bounds(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first =
        NaiveDate::from_ymd_opt(reference.year(), reference.month(), 1).unwrap_or(reference);

    let next_month = if reference.month() == 12 {
        NaiveDate::from_ymd_opt(reference.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(reference.year(), reference.month() + 1, 1)
    };
    let last = next_month
        .and_then(|day| day.pred_opt())
        .unwrap_or(reference);

    (first, last)
}
