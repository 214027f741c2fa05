//! The module contains `Wallet` struct and its implementation.

use std::fmt;

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// Kind of place where the money of a wallet is kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletType {
    Cash,
    Bank,
    CreditCard,
    EWallet,
}

impl WalletType {
    pub const ALL: [WalletType; 4] = [
        WalletType::Cash,
        WalletType::Bank,
        WalletType::CreditCard,
        WalletType::EWallet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Bank => "bank",
            Self::CreditCard => "credit_card",
            Self::EWallet => "e_wallet",
        }
    }

    /// Human readable name, e.g. `Credit Card`.
    pub fn label(self) -> String {
        crate::catalog::title_case(self.as_str())
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for WalletType {
    type Error = EngineError;

    /// Case-insensitive.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "cash" => Ok(Self::Cash),
            "bank" => Ok(Self::Bank),
            "credit_card" => Ok(Self::CreditCard),
            "e_wallet" => Ok(Self::EWallet),
            _ => Err(EngineError::Validation(format!(
                "Invalid wallet type. Valid types: {}",
                WalletType::ALL.map(WalletType::as_str).join(", ")
            ))),
        }
    }
}

/// A wallet.
///
/// A wallet is a representation of a real wallet, a bank account, a credit
/// card or an e-wallet. `current_balance` is owned by the reconciliation
/// engine and always equals `initial_balance` plus the signed sum of the
/// wallet's transactions.
#[derive(Clone, Debug, PartialEq)]
pub struct Wallet {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub initial_balance: Decimal,
    pub current_balance: Decimal,
    pub wallet_type: WalletType,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Balance snapshot of a wallet.
#[derive(Clone, Debug, PartialEq)]
pub struct WalletBalance {
    pub wallet_id: i32,
    pub wallet_name: String,
    pub initial_balance: Decimal,
    pub current_balance: Decimal,
}

impl From<&Model> for WalletBalance {
    fn from(model: &Model) -> Self {
        Self {
            wallet_id: model.id,
            wallet_name: model.name.clone(),
            initial_balance: model.initial_balance,
            current_balance: model.current_balance,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wallets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "nama_dompet")]
    pub name: String,
    #[sea_orm(column_name = "deskripsi")]
    pub description: Option<String>,
    #[sea_orm(column_name = "saldo_awal", column_type = "Decimal(Some((16, 2)))")]
    pub initial_balance: Decimal,
    #[sea_orm(column_name = "saldo_saat_ini", column_type = "Decimal(Some((16, 2)))")]
    pub current_balance: Decimal,
    #[sea_orm(column_name = "tipe_dompet")]
    pub wallet_type: String,
    #[sea_orm(column_name = "warna")]
    pub color: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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

impl TryFrom<Model> for Wallet {
    type Error = EngineError;

    fn try_from(model: Model) -> ResultEngine<Self> {
        Ok(Self {
            id: model.id,
            name: model.name,
            description: model.description,
            initial_balance: model.initial_balance,
            current_balance: model.current_balance,
            wallet_type: WalletType::try_from(model.wallet_type.as_str())?,
            color: model.color,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
