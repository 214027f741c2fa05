//! Balance reconciliation.
//!
//! These are the only functions that compute a wallet's new balance from a
//! transaction. Every write path in [`Engine`](crate::Engine) pairs one of
//! them with the ledger write inside the same database transaction, so that
//!
//! ```text
//! current_balance == initial_balance + Σ income − Σ expense
//! ```
//!
//! holds for every wallet once the transaction commits.

use rust_decimal::Decimal;

use crate::{EngineError, ResultEngine, TransactionType};

/// Largest amount or balance stored without loss: `9999999999999.99`.
///
/// SQLite keeps `DECIMAL(16, 2)` columns as REAL, so values need at most two
/// decimal places and fifteen significant digits to round-trip exactly.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_7FFF, 0x3_8D7E, 0, false, 2);
const MAX_SCALE: u32 = 2;

/// Applies the effect of a transaction to `balance`.
///
/// The caller must have checked sufficiency with [`ensure_sufficient`] for
/// expenses.
pub fn apply(balance: Decimal, kind: TransactionType, amount: Decimal) -> Decimal {
    match kind {
        TransactionType::Income => balance + amount,
        TransactionType::Expense => balance - amount,
    }
}

/// Removes the effect of a previously applied transaction from `balance`.
pub fn revert(balance: Decimal, kind: TransactionType, amount: Decimal) -> Decimal {
    match kind {
        TransactionType::Income => balance - amount,
        TransactionType::Expense => balance + amount,
    }
}

/// Fails with [`EngineError::InsufficientBalance`] when an expense of
/// `amount` is larger than `balance`. Income always passes.
pub fn ensure_sufficient(
    balance: Decimal,
    kind: TransactionType,
    amount: Decimal,
) -> ResultEngine<()> {
    if kind == TransactionType::Expense && amount > balance {
        return Err(EngineError::InsufficientBalance(balance));
    }
    Ok(())
}

/// Rebuilds a balance from the initial amount and a ledger.
pub fn replay<I>(initial: Decimal, entries: I) -> Decimal
where
    I: IntoIterator<Item = (TransactionType, Decimal)>,
{
    entries
        .into_iter()
        .fold(initial, |balance, (kind, amount)| apply(balance, kind, amount))
}

pub(crate) fn ensure_positive_amount(amount: Decimal) -> ResultEngine<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(EngineError::Validation(
            "Amount must be greater than 0".to_string(),
        ));
    }
    ensure_storable(amount, "Amount")
}

/// Rejects values the ledger cannot store exactly.
pub(crate) fn ensure_storable(value: Decimal, field: &str) -> ResultEngine<Decimal> {
    if value.normalize().scale() > MAX_SCALE {
        return Err(EngineError::Validation(format!(
            "{field} must have at most {MAX_SCALE} decimal places"
        )));
    }
    if value.abs() > MAX_AMOUNT {
        return Err(EngineError::Validation(format!(
            "{field} must not exceed {MAX_AMOUNT}"
        )));
    }
    Ok(value)
}

/// A balance produced by a write must stay storable too.
pub(crate) fn ensure_balance_in_range(balance: Decimal) -> ResultEngine<Decimal> {
    if balance > MAX_AMOUNT {
        return Err(EngineError::Validation(format!(
            "Balance would exceed {MAX_AMOUNT}"
        )));
    }
    Ok(balance)
}
