//! Command structs for engine operations.
//!
//! These types group parameters for write operations (create/update of
//! wallets and transactions), keeping call sites readable and avoiding long
//! argument lists. Patch commands use `None` for "leave unchanged".

use rust_decimal::Decimal;

use crate::{TransactionType, WalletType};

/// Create a wallet.
#[derive(Clone, Debug)]
pub struct NewWalletCmd {
    pub name: String,
    pub wallet_type: WalletType,
    pub description: Option<String>,
    /// Defaults to zero.
    pub initial_balance: Option<Decimal>,
    /// Defaults to `#000000`.
    pub color: Option<String>,
}

impl NewWalletCmd {
    #[must_use]
    pub fn new(name: impl Into<String>, wallet_type: WalletType) -> Self {
        Self {
            name: name.into(),
            wallet_type,
            description: None,
            initial_balance: None,
            color: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn initial_balance(mut self, initial_balance: Decimal) -> Self {
        self.initial_balance = Some(initial_balance);
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Patch a wallet.
///
/// `description: Some("")` clears the description. The current balance is not
/// part of the patch; it only moves through transactions or through a change
/// of `initial_balance`.
#[derive(Clone, Debug, Default)]
pub struct UpdateWalletCmd {
    pub name: Option<String>,
    pub description: Option<String>,
    pub wallet_type: Option<WalletType>,
    pub color: Option<String>,
    pub initial_balance: Option<Decimal>,
}

impl UpdateWalletCmd {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn wallet_type(mut self, wallet_type: WalletType) -> Self {
        self.wallet_type = Some(wallet_type);
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn initial_balance(mut self, initial_balance: Decimal) -> Self {
        self.initial_balance = Some(initial_balance);
        self
    }
}

/// Record an income or expense against a wallet.
#[derive(Clone, Debug)]
pub struct NewTransactionCmd {
    pub wallet_id: i32,
    pub kind: TransactionType,
    pub amount: Decimal,
    pub category_id: i32,
    /// ISO-8601 date or date-time, parsed by the engine.
    pub date: String,
    pub description: Option<String>,
    pub note: Option<String>,
}

impl NewTransactionCmd {
    #[must_use]
    pub fn new(
        wallet_id: i32,
        kind: TransactionType,
        amount: Decimal,
        category_id: i32,
        date: impl Into<String>,
    ) -> Self {
        Self {
            wallet_id,
            kind,
            amount,
            category_id,
            date: date.into(),
            description: None,
            note: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Patch a transaction. The wallet cannot be changed.
#[derive(Clone, Debug, Default)]
pub struct UpdateTransactionCmd {
    pub kind: Option<TransactionType>,
    pub amount: Option<Decimal>,
    pub category_id: Option<i32>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub note: Option<String>,
}

impl UpdateTransactionCmd {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    #[must_use]
    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
