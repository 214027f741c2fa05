//! Persisted category catalog.
//!
//! The table is seeded by the migration with the ids of
//! [`catalog`](crate::catalog); nothing writes to it at runtime.

use sea_orm::entity::prelude::*;

use crate::{EngineError, ResultEngine, TransactionType, catalog::category_label};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    /// Stable code, e.g. `makanan_dan_minuman`.
    pub name: String,
    pub kind: TransactionType,
    /// Display name, e.g. `Makanan & Minuman`.
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub transaction_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Category {
    type Error = EngineError;

    fn try_from(model: Model) -> ResultEngine<Self> {
        let kind = TransactionType::try_from(model.transaction_type.as_str())?;
        Ok(Self {
            label: category_label(kind, &model.name),
            id: model.id,
            name: model.name,
            kind,
        })
    }
}
