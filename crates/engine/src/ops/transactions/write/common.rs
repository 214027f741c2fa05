use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseTransaction, prelude::*};

use crate::{ResultEngine, wallets};

/// Persist a reconciled balance and touch `updated_at`.
pub(super) async fn store_wallet_balance(
    db_tx: &DatabaseTransaction,
    wallet: wallets::Model,
    balance: Decimal,
) -> ResultEngine<()> {
    let mut active: wallets::ActiveModel = wallet.into();
    active.current_balance = ActiveValue::Set(balance);
    active.updated_at = ActiveValue::Set(Utc::now());
    active.update(db_tx).await?;
    Ok(())
}
