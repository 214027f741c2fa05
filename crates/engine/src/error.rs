//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`Validation`] thrown when an input value is missing or malformed.
//! - [`KeyNotFound`] thrown when a wallet or transaction does not exist.
//! - [`InsufficientBalance`] thrown when an expense would overdraw a wallet.
//! - [`Database`] wrapping any storage failure.
//!
//!  [`Validation`]: EngineError::Validation
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InsufficientBalance`]: EngineError::InsufficientBalance
//!  [`Database`]: EngineError::Database
use rust_decimal::Decimal;
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    KeyNotFound(String),
    /// Carries the balance the expense was checked against.
    #[error("Insufficient balance. Current balance: {0}")]
    InsufficientBalance(Decimal),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::InsufficientBalance(a), Self::InsufficientBalance(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_balance_message_includes_balance() {
        let err = EngineError::InsufficientBalance(Decimal::new(150_000, 0));
        assert_eq!(
            err.to_string(),
            "Insufficient balance. Current balance: 150000"
        );
    }

    #[test]
    fn validation_message_is_verbatim() {
        let err = EngineError::Validation("Amount must be greater than 0".to_string());
        assert_eq!(err.to_string(), "Amount must be greater than 0");
    }
}
