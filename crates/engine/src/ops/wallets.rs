use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    EngineError, NewWalletCmd, ResultEngine, UpdateWalletCmd, Wallet, reconcile, transactions,
    util::{
        DEFAULT_WALLET_COLOR, apply_optional_text_patch, normalize_optional_text,
        normalize_wallet_name, validate_color,
    },
    wallets,
};

use super::{Engine, with_tx};

fn ensure_non_negative_initial(initial_balance: Decimal) -> ResultEngine<Decimal> {
    if initial_balance < Decimal::ZERO {
        return Err(EngineError::Validation(
            "saldo_awal must not be negative".to_string(),
        ));
    }
    reconcile::ensure_storable(initial_balance, "saldo_awal")
}

impl Engine {
    /// All wallets, ordered by id.
    pub async fn list_wallets(&self) -> ResultEngine<Vec<Wallet>> {
        let models = wallets::Entity::find()
            .order_by_asc(wallets::Column::Id)
            .all(&self.database)
            .await?;
        models.into_iter().map(Wallet::try_from).collect()
    }

    /// Return a wallet snapshot from DB.
    pub async fn wallet(&self, wallet_id: i32) -> ResultEngine<Wallet> {
        let model = self.require_wallet(&self.database, wallet_id).await?;
        Wallet::try_from(model)
    }

    /// Create a wallet. Its current balance starts at the initial balance.
    pub async fn create_wallet(&self, cmd: NewWalletCmd) -> ResultEngine<Wallet> {
        let name = normalize_wallet_name(&cmd.name)?;
        let color = match cmd.color.as_deref() {
            Some(color) => validate_color(color)?,
            None => DEFAULT_WALLET_COLOR.to_string(),
        };
        let initial_balance =
            ensure_non_negative_initial(cmd.initial_balance.unwrap_or(Decimal::ZERO))?;
        let now = Utc::now();

        with_tx!(self, |db_tx| {
            let model = wallets::ActiveModel {
                id: ActiveValue::NotSet,
                name: ActiveValue::Set(name),
                description: ActiveValue::Set(normalize_optional_text(cmd.description.as_deref())),
                initial_balance: ActiveValue::Set(initial_balance),
                current_balance: ActiveValue::Set(initial_balance),
                wallet_type: ActiveValue::Set(cmd.wallet_type.as_str().to_string()),
                color: ActiveValue::Set(Some(color)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            }
            .insert(&db_tx)
            .await?;
            tracing::debug!(wallet_id = model.id, "wallet created");
            Wallet::try_from(model)
        })
    }

    /// Patch a wallet.
    ///
    /// A new `initial_balance` shifts the current balance by the same delta,
    /// and fails with [`EngineError::InsufficientBalance`] if the result would
    /// be negative.
    pub async fn update_wallet(&self, wallet_id: i32, cmd: UpdateWalletCmd) -> ResultEngine<Wallet> {
        with_tx!(self, |db_tx| {
            let existing = self.require_wallet(&db_tx, wallet_id).await?;

            let name = cmd.name.as_deref().map(normalize_wallet_name).transpose()?;
            let color = cmd.color.as_deref().map(validate_color).transpose()?;
            let initial_balance = cmd
                .initial_balance
                .map(ensure_non_negative_initial)
                .transpose()?;

            let mut active: wallets::ActiveModel = existing.clone().into();
            if let Some(name) = name {
                active.name = ActiveValue::Set(name);
            }
            if cmd.description.is_some() {
                active.description = ActiveValue::Set(apply_optional_text_patch(
                    existing.description.clone(),
                    cmd.description.as_deref(),
                ));
            }
            if let Some(wallet_type) = cmd.wallet_type {
                active.wallet_type = ActiveValue::Set(wallet_type.as_str().to_string());
            }
            if let Some(color) = color {
                active.color = ActiveValue::Set(Some(color));
            }
            if let Some(initial_balance) = initial_balance {
                let current =
                    existing.current_balance + (initial_balance - existing.initial_balance);
                if current < Decimal::ZERO {
                    return Err(EngineError::InsufficientBalance(existing.current_balance));
                }
                let current = reconcile::ensure_balance_in_range(current)?;
                active.initial_balance = ActiveValue::Set(initial_balance);
                active.current_balance = ActiveValue::Set(current);
            }
            active.updated_at = ActiveValue::Set(Utc::now());

            let model = active.update(&db_tx).await?;
            Wallet::try_from(model)
        })
    }

    /// Delete a wallet together with its transactions. Returns the name the
    /// wallet had.
    pub async fn delete_wallet(&self, wallet_id: i32) -> ResultEngine<String> {
        with_tx!(self, |db_tx| {
            let existing = self.require_wallet(&db_tx, wallet_id).await?;

            let removed = transactions::Entity::delete_many()
                .filter(transactions::Column::WalletId.eq(wallet_id))
                .exec(&db_tx)
                .await?;
            wallets::Entity::delete_by_id(wallet_id).exec(&db_tx).await?;

            tracing::debug!(
                wallet_id,
                transactions = removed.rows_affected,
                "wallet deleted"
            );
            Ok(existing.name)
        })
    }
}
