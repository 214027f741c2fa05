use sea_orm::{ActiveValue, TransactionTrait, prelude::*};

use crate::{
    ResultEngine, Transaction, TransactionReceipt, TransactionType, UpdateTransactionCmd,
    catalog::ensure_category,
    reconcile::{self, ensure_positive_amount},
    transactions,
    util::{apply_optional_text_patch, parse_datetime},
};

use super::super::super::{Engine, with_tx};
use super::common::store_wallet_balance;

impl Engine {
    /// Patches a transaction and moves the wallet balance accordingly.
    ///
    /// Every new value is validated before the balance is touched. When only
    /// the type changes, the stored category must also belong to the new type.
    /// The old effect is then reverted, the effective expense is checked
    /// against the reverted balance, and the new effect is applied; any
    /// failure rolls the whole update back.
    pub async fn update_transaction(
        &self,
        transaction_id: i32,
        cmd: UpdateTransactionCmd,
    ) -> ResultEngine<TransactionReceipt> {
        with_tx!(self, |db_tx| {
            let existing = self.require_transaction(&db_tx, transaction_id).await?;
            let old_kind = TransactionType::try_from(existing.kind.as_str())?;

            let kind = cmd.kind.unwrap_or(old_kind);
            let amount = match cmd.amount {
                Some(amount) => ensure_positive_amount(amount)?,
                None => existing.amount,
            };
            let category_id = cmd.category_id.unwrap_or(existing.category_id);
            ensure_category(kind, category_id)?;
            let date = cmd.date.as_deref().map(parse_datetime).transpose()?;

            let wallet = self.require_wallet(&db_tx, existing.wallet_id).await?;
            let reverted = reconcile::revert(wallet.current_balance, old_kind, existing.amount);
            reconcile::ensure_sufficient(reverted, kind, amount)?;
            let balance =
                reconcile::ensure_balance_in_range(reconcile::apply(reverted, kind, amount))?;

            let mut active: transactions::ActiveModel = existing.clone().into();
            active.kind = ActiveValue::Set(kind.as_str().to_string());
            active.amount = ActiveValue::Set(amount);
            active.category_id = ActiveValue::Set(category_id);
            if let Some(date) = date {
                active.date = ActiveValue::Set(date);
            }
            if cmd.description.is_some() {
                active.description = ActiveValue::Set(apply_optional_text_patch(
                    existing.description.clone(),
                    cmd.description.as_deref(),
                ));
            }
            if cmd.note.is_some() {
                active.note = ActiveValue::Set(apply_optional_text_patch(
                    existing.note.clone(),
                    cmd.note.as_deref(),
                ));
            }
            let model = active.update(&db_tx).await?;

            let wallet_id = wallet.id;
            store_wallet_balance(&db_tx, wallet, balance).await?;

            tracing::debug!(transaction_id, wallet_id, %balance, "transaction reconciled");
            Ok(TransactionReceipt {
                transaction: Transaction::try_from(model)?,
                wallet_balance: balance,
            })
        })
    }
}
