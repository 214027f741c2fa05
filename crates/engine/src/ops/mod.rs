use sea_orm::{ConnectionTrait, DatabaseConnection, prelude::*};

use crate::{EngineError, ResultEngine};

mod balances;
mod categories;
mod transactions;
mod wallets;

pub use transactions::TransactionListFilter;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    async fn require_wallet<C>(&self, db: &C, wallet_id: i32) -> ResultEngine<crate::wallets::Model>
    where
        C: ConnectionTrait,
    {
        crate::wallets::Entity::find_by_id(wallet_id)
            .one(db)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("Wallet not found".to_string()))
    }

    async fn require_transaction<C>(
        &self,
        db: &C,
        transaction_id: i32,
    ) -> ResultEngine<crate::transactions::Model>
    where
        C: ConnectionTrait,
    {
        crate::transactions::Entity::find_by_id(transaction_id)
            .one(db)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("Transaction not found".to_string()))
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
