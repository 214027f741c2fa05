use sea_orm::{QueryFilter, QueryOrder, QuerySelect, prelude::*};

use crate::{ResultEngine, Transaction, TransactionType, transactions};

use super::super::Engine;

/// Filters for listing transactions.
///
/// Every filter is an equality match; unset filters match everything.
#[derive(Clone, Debug)]
pub struct TransactionListFilter {
    pub wallet_id: Option<i32>,
    pub kind: Option<TransactionType>,
    /// Maximum number of rows returned.
    pub limit: u64,
}

impl TransactionListFilter {
    pub const DEFAULT_LIMIT: u64 = 100;
    /// Largest limit the SQLite binder accepts (`i64::MAX`).
    pub const MAX_LIMIT: u64 = i64::MAX as u64;

    #[must_use]
    pub fn wallet_id(mut self, wallet_id: i32) -> Self {
        self.wallet_id = Some(wallet_id);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit.min(Self::MAX_LIMIT);
        self
    }
}

impl Default for TransactionListFilter {
    fn default() -> Self {
        Self {
            wallet_id: None,
            kind: None,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

trait ApplyTxFilters: QueryFilter + Sized {
    fn apply_tx_filters(self, filter: &TransactionListFilter) -> Self;
}

impl<T> ApplyTxFilters for T
where
    T: QueryFilter + Sized,
{
    fn apply_tx_filters(mut self, filter: &TransactionListFilter) -> Self {
        if let Some(wallet_id) = filter.wallet_id {
            self = self.filter(transactions::Column::WalletId.eq(wallet_id));
        }
        if let Some(kind) = filter.kind {
            self = self.filter(transactions::Column::Kind.eq(kind.as_str()));
        }
        self
    }
}

impl Engine {
    /// Lists transactions, newest first (`created_at DESC`, then `id DESC`),
    /// returning at most `filter.limit` rows. Limits above
    /// [`TransactionListFilter::MAX_LIMIT`] are clamped.
    pub async fn list_transactions(
        &self,
        filter: &TransactionListFilter,
    ) -> ResultEngine<Vec<Transaction>> {
        let models = transactions::Entity::find()
            .apply_tx_filters(filter)
            .order_by_desc(transactions::Column::CreatedAt)
            .order_by_desc(transactions::Column::Id)
            .limit(filter.limit.min(TransactionListFilter::MAX_LIMIT))
            .all(&self.database)
            .await?;
        models.into_iter().map(Transaction::try_from).collect()
    }
}
