//! Order database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Order, OrderStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub customer_id: i64,
    pub created_at: Date,
    pub total: Decimal,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model plus its customer row to the domain entity
impl From<(Model, super::customer::Model)> for Order {
    fn from((order, customer): (Model, super::customer::Model)) -> Self {
        Order {
            id: order.id,
            customer: customer.into(),
            created_at: order.created_at,
            total: order.total,
            status: OrderStatus::from(order.status.as_str()),
        }
    }
}
