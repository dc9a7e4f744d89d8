//! Customer database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Customer;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Customer {
    fn from(model: Model) -> Self {
        Customer {
            id: model.id,
            name: model.name,
        }
    }
}
