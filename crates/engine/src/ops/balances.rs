use chrono::Utc;
use sea_orm::{ActiveValue, ConnectionTrait, QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{ResultEngine, TransactionType, WalletBalance, reconcile, transactions, wallets};

use super::{Engine, with_tx};

impl Engine {
    /// Balance snapshot of a wallet.
    pub async fn wallet_balance(&self, wallet_id: i32) -> ResultEngine<WalletBalance> {
        let model = self.require_wallet(&self.database, wallet_id).await?;
        Ok(WalletBalance::from(&model))
    }

    /// Recomputes the denormalized `current_balance` of a wallet from the
    /// ledger (`initial + Σ income − Σ expense`) and persists it.
    ///
    /// Returns the fresh snapshot.
    pub async fn recompute_wallet_balance(&self, wallet_id: i32) -> ResultEngine<WalletBalance> {
        with_tx!(self, |db_tx| {
            let existing = self.require_wallet(&db_tx, wallet_id).await?;
            let ledger = wallet_ledger(&db_tx, wallet_id).await?;
            let balance = reconcile::replay(existing.initial_balance, ledger);

            if balance != existing.current_balance {
                tracing::warn!(
                    wallet_id,
                    stored = %existing.current_balance,
                    computed = %balance,
                    "wallet balance drifted from ledger"
                );
            }

            let mut active: wallets::ActiveModel = existing.into();
            active.current_balance = ActiveValue::Set(balance);
            active.updated_at = ActiveValue::Set(Utc::now());
            let model = active.update(&db_tx).await?;
            Ok(WalletBalance::from(&model))
        })
    }
}

/// `(type, amount)` of every transaction of a wallet, oldest first.
async fn wallet_ledger<C>(db: &C, wallet_id: i32) -> ResultEngine<Vec<(TransactionType, Decimal)>>
where
    C: ConnectionTrait,
{
    let models = transactions::Entity::find()
        .filter(transactions::Column::WalletId.eq(wallet_id))
        .order_by_asc(transactions::Column::Id)
        .all(db)
        .await?;
    models
        .into_iter()
        .map(|model| {
            TransactionType::try_from(model.kind.as_str()).map(|kind| (kind, model.amount))
        })
        .collect()
}
