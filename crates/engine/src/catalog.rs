//! Category catalog.
//!
//! Categories are a closed set split by [`TransactionType`]. The ids below are
//! the ones seeded into the `category` table by the migration and sent by
//! clients as `category_id`; a category is only usable by transactions of its
//! own type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// Direction of a money movement. Shared by categories, transactions and the
/// listing filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Human readable name, e.g. `Income`.
    pub fn label(self) -> String {
        title_case(self.as_str())
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TransactionType {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(EngineError::Validation(format!(
                "Invalid transaction type. Valid types: {}",
                TransactionType::ALL.map(TransactionType::as_str).join(", ")
            ))),
        }
    }
}

pub const EXPENSE_CATEGORIES: &[(i32, &str)] = &[
    (1, "makanan_dan_minuman"),
    (2, "transport"),
    (3, "belanja"),
    (4, "hiburan"),
    (5, "tagihan_dan_utilitas"),
    (6, "kesehatan"),
    (7, "pendidikan"),
    (8, "rumah"),
    (9, "perjalanan"),
    (10, "hadiah_dan_donasi"),
    (11, "lainnya"),
];

pub const INCOME_CATEGORIES: &[(i32, &str)] = &[
    (12, "gaji"),
    (13, "bisnis"),
    (14, "investasi"),
    (15, "bonus"),
    (16, "hadiah"),
    (17, "piutang"),
    (18, "lainnya"),
];

/// `(id, code)` pairs usable by transactions of `kind`.
pub fn categories(kind: TransactionType) -> &'static [(i32, &'static str)] {
    match kind {
        TransactionType::Income => INCOME_CATEGORIES,
        TransactionType::Expense => EXPENSE_CATEGORIES,
    }
}

pub fn valid_categories(kind: TransactionType) -> Vec<i32> {
    categories(kind).iter().map(|(id, _)| *id).collect()
}

pub fn category_matches(kind: TransactionType, category_id: i32) -> bool {
    categories(kind).iter().any(|(id, _)| *id == category_id)
}

pub(crate) fn ensure_category(kind: TransactionType, category_id: i32) -> ResultEngine<()> {
    if category_matches(kind, category_id) {
        return Ok(());
    }
    Err(EngineError::Validation(format!(
        "Invalid category for {kind} transaction. Valid categories: {:?}",
        valid_categories(kind)
    )))
}

/// Display label for a category code.
///
/// Underscores become spaces and every word is capitalized; expense codes
/// also render the joining word `dan` as `&`
/// (`makanan_dan_minuman` -> `Makanan & Minuman`).
pub fn category_label(kind: TransactionType, code: &str) -> String {
    let words: Vec<&str> = code
        .split('_')
        .map(|word| match (kind, word) {
            (TransactionType::Expense, "dan") => "&",
            _ => word,
        })
        .collect();
    title_case(&words.join(" "))
}

pub(crate) fn title_case(value: &str) -> String {
    value
        .replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_sets_are_disjoint() {
        for id in valid_categories(TransactionType::Income) {
            assert!(!category_matches(TransactionType::Expense, id));
        }
        assert_eq!(EXPENSE_CATEGORIES.len(), 11);
        assert_eq!(INCOME_CATEGORIES.len(), 7);
    }

    #[test]
    fn income_category_rejected_for_expense() {
        let err = ensure_category(TransactionType::Expense, 12).unwrap_err();
        assert!(matches!(err, EngineError::Validation(msg) if msg.contains("expense")));
        assert!(ensure_category(TransactionType::Income, 12).is_ok());
        assert!(ensure_category(TransactionType::Income, 1).is_err());
    }

    #[test]
    fn unknown_category_rejected() {
        assert!(ensure_category(TransactionType::Income, 0).is_err());
        assert!(ensure_category(TransactionType::Expense, 19).is_err());
    }

    #[test]
    fn expense_labels_use_ampersand() {
        assert_eq!(
            category_label(TransactionType::Expense, "makanan_dan_minuman"),
            "Makanan & Minuman"
        );
        assert_eq!(
            category_label(TransactionType::Expense, "tagihan_dan_utilitas"),
            "Tagihan & Utilitas"
        );
        assert_eq!(category_label(TransactionType::Expense, "transport"), "Transport");
    }

    #[test]
    fn income_labels_keep_words() {
        assert_eq!(category_label(TransactionType::Income, "gaji"), "Gaji");
        assert_eq!(category_label(TransactionType::Income, "lainnya"), "Lainnya");
    }

    #[test]
    fn parse_transaction_type() {
        assert_eq!(
            TransactionType::try_from("income").unwrap(),
            TransactionType::Income
        );
        assert_eq!(
            TransactionType::try_from(" expense ").unwrap(),
            TransactionType::Expense
        );
        let err = TransactionType::try_from("transfer").unwrap_err();
        assert_eq!(
            err,
            EngineError::Validation(
                "Invalid transaction type. Valid types: income, expense".to_string()
            )
        );
        assert_eq!(TransactionType::Expense.label(), "Expense");
    }
}
