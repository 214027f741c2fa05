use chrono::Utc;
use sea_orm::{ActiveValue, TransactionTrait, prelude::*};

use crate::{
    NewTransactionCmd, ResultEngine, Transaction, TransactionReceipt,
    catalog::ensure_category,
    reconcile::{self, ensure_positive_amount},
    transactions,
    util::{normalize_optional_text, parse_datetime},
};

use super::super::super::{Engine, with_tx};
use super::common::store_wallet_balance;

impl Engine {
    /// Records an income or expense and applies it to the wallet balance.
    ///
    /// Checks run in this order: positive amount, category matching the
    /// type, wallet existence, sufficient balance for expenses, date format.
    /// The row insert and the balance update commit together.
    pub async fn create_transaction(
        &self,
        cmd: NewTransactionCmd,
    ) -> ResultEngine<TransactionReceipt> {
        let amount = ensure_positive_amount(cmd.amount)?;
        ensure_category(cmd.kind, cmd.category_id)?;

        with_tx!(self, |db_tx| {
            let wallet = self.require_wallet(&db_tx, cmd.wallet_id).await?;
            reconcile::ensure_sufficient(wallet.current_balance, cmd.kind, amount)?;
            let date = parse_datetime(&cmd.date)?;

            let model = transactions::ActiveModel {
                id: ActiveValue::NotSet,
                kind: ActiveValue::Set(cmd.kind.as_str().to_string()),
                amount: ActiveValue::Set(amount),
                description: ActiveValue::Set(normalize_optional_text(cmd.description.as_deref())),
                wallet_id: ActiveValue::Set(wallet.id),
                date: ActiveValue::Set(date),
                note: ActiveValue::Set(normalize_optional_text(cmd.note.as_deref())),
                created_at: ActiveValue::Set(Utc::now()),
                category_id: ActiveValue::Set(cmd.category_id),
            }
            .insert(&db_tx)
            .await?;

            let wallet_id = wallet.id;
            let balance = reconcile::ensure_balance_in_range(reconcile::apply(
                wallet.current_balance,
                cmd.kind,
                amount,
            ))?;
            store_wallet_balance(&db_tx, wallet, balance).await?;

            tracing::debug!(
                transaction_id = model.id,
                wallet_id,
                kind = %cmd.kind,
                %amount,
                %balance,
                "transaction applied"
            );
            Ok(TransactionReceipt {
                transaction: Transaction::try_from(model)?,
                wallet_balance: balance,
            })
        })
    }
}
