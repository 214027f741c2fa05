use crate::{ResultEngine, Transaction};

use super::Engine;

mod list;
mod write;

pub use list::TransactionListFilter;

impl Engine {
    /// Return a single transaction.
    pub async fn transaction(&self, transaction_id: i32) -> ResultEngine<Transaction> {
        let model = self
            .require_transaction(&self.database, transaction_id)
            .await?;
        Transaction::try_from(model)
    }
}
