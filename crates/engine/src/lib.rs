//! Dompetku ledger engine.
//!
//! Wallets hold money, transactions move it in or out of exactly one wallet,
//! and every write keeps `current_balance` reconciled with the ledger inside a
//! single database transaction.

pub use categories::Category;
pub use catalog::TransactionType;
pub use commands::{NewTransactionCmd, NewWalletCmd, UpdateTransactionCmd, UpdateWalletCmd};
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder, TransactionListFilter};
pub use rust_decimal::Decimal;
pub use transactions::{DeletedTransaction, Transaction, TransactionReceipt};
pub use wallets::{Wallet, WalletBalance, WalletType};

pub mod catalog;
mod categories;
mod commands;
mod error;
mod ops;
pub mod reconcile;
mod transactions;
mod util;
mod wallets;

pub type ResultEngine<T> = Result<T, EngineError>;
