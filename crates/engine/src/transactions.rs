//! Transaction primitives.
//!
//! A `Transaction` is a dated income or expense against exactly one wallet.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

use crate::{EngineError, ResultEngine, TransactionType};

#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub id: i32,
    pub kind: TransactionType,
    pub amount: Decimal,
    pub description: Option<String>,
    pub wallet_id: i32,
    pub category_id: i32,
    pub date: DateTime<Utc>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Text used to refer to the transaction in messages: the description
    /// when present, `"{type} - {amount}"` otherwise.
    pub fn label(&self) -> String {
        match &self.description {
            Some(description) => description.clone(),
            None => format!("{} - {}", self.kind, self.amount),
        }
    }
}

/// Result of a write that moved a wallet balance.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionReceipt {
    pub transaction: Transaction,
    pub wallet_balance: Decimal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeletedTransaction {
    pub id: i32,
    pub label: String,
    pub wallet_id: i32,
    pub wallet_balance: Decimal,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "tipe_transaksi")]
    pub kind: String,
    #[sea_orm(column_name = "jumlah", column_type = "Decimal(Some((16, 2)))")]
    pub amount: Decimal,
    #[sea_orm(column_name = "deskripsi")]
    pub description: Option<String>,
    pub wallet_id: i32,
    #[sea_orm(column_name = "tanggal")]
    pub date: DateTimeUtc,
    #[sea_orm(column_name = "catatan")]
    pub note: Option<String>,
    pub created_at: DateTimeUtc,
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::wallets::Entity",
        from = "Column::WalletId",
        to = "super::wallets::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Wallet,
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Category,
}

impl Related<super::wallets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wallet.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Transaction {
    type Error = EngineError;

    fn try_from(model: Model) -> ResultEngine<Self> {
        Ok(Self {
            id: model.id,
            kind: TransactionType::try_from(model.kind.as_str())?,
            amount: model.amount,
            description: model.description,
            wallet_id: model.wallet_id,
            category_id: model.category_id,
            date: model.date,
            note: model.note,
            created_at: model.created_at,
        })
    }
}
