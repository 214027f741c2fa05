use sea_orm::{TransactionTrait, prelude::*};

use crate::{DeletedTransaction, ResultEngine, Transaction, reconcile, transactions};

use super::super::super::{Engine, with_tx};
use super::common::store_wallet_balance;

impl Engine {
    /// Deletes a transaction and reverts its effect on the wallet.
    ///
    /// Always succeeds for an existing transaction: reverting an income whose
    /// money was already spent leaves the wallet negative.
    pub async fn delete_transaction(&self, transaction_id: i32) -> ResultEngine<DeletedTransaction> {
        with_tx!(self, |db_tx| {
            let existing = self.require_transaction(&db_tx, transaction_id).await?;
            let transaction = Transaction::try_from(existing)?;

            let wallet = self.require_wallet(&db_tx, transaction.wallet_id).await?;
            let balance =
                reconcile::revert(wallet.current_balance, transaction.kind, transaction.amount);
            store_wallet_balance(&db_tx, wallet, balance).await?;
            transactions::Entity::delete_by_id(transaction_id)
                .exec(&db_tx)
                .await?;

            if balance < Decimal::ZERO {
                tracing::warn!(
                    transaction_id,
                    wallet_id = transaction.wallet_id,
                    %balance,
                    "wallet balance negative after delete"
                );
            }
            Ok(DeletedTransaction {
                id: transaction.id,
                label: transaction.label(),
                wallet_id: transaction.wallet_id,
                wallet_balance: balance,
            })
        })
    }
}
