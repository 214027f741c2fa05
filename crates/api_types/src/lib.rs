use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Tells an absent member (`None`) from an explicit `null` (`Some(None)`).
///
/// Use together with `#[serde(default)]`.
pub fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Response envelope shared by every endpoint.
///
/// `status` is `"success"` or `"error"`; the other members are omitted when
/// unset.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> Envelope<T> {
    pub const SUCCESS: &'static str = "success";
    pub const ERROR: &'static str = "error";

    pub fn success(data: T) -> Self {
        Self {
            status: Self::SUCCESS.to_string(),
            data: Some(data),
            message: None,
            count: None,
        }
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

impl Envelope<()> {
    /// Success without `data`, e.g. a wallet deletion.
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            status: Self::SUCCESS.to_string(),
            data: None,
            message: Some(message.into()),
            count: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Self::ERROR.to_string(),
            data: None,
            message: Some(message.into()),
            count: None,
        }
    }
}

/// `{value, label}` entry of a static enumeration listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct EnumOption {
    pub value: String,
    pub label: String,
}

pub mod wallet {
    use super::*;

    /// Request body for `POST /api/wallets`.
    ///
    /// Required members are optional here so the server can answer
    /// `Field <name> is required` instead of a generic decoding error.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct WalletNew {
        pub nama_dompet: Option<String>,
        pub tipe_dompet: Option<String>,
        pub deskripsi: Option<String>,
        pub saldo_awal: Option<Decimal>,
        pub warna: Option<String>,
    }

    /// Request body for `PUT /api/wallets/{id}`. Absent members are left
    /// unchanged; `saldo_saat_ini` is not accepted. `deskripsi: null` clears
    /// the description.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct WalletUpdate {
        pub nama_dompet: Option<String>,
        #[serde(default, deserialize_with = "explicit_null")]
        pub deskripsi: Option<Option<String>>,
        pub tipe_dompet: Option<String>,
        pub warna: Option<String>,
        pub saldo_awal: Option<Decimal>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct WalletView {
        pub id: i32,
        pub nama_dompet: String,
        pub deskripsi: Option<String>,
        #[serde(with = "rust_decimal::serde::float")]
        pub saldo_awal: Decimal,
        #[serde(with = "rust_decimal::serde::float")]
        pub saldo_saat_ini: Decimal,
        pub tipe_dompet: String,
        pub warna: Option<String>,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BalanceView {
        pub wallet_id: i32,
        pub wallet_name: String,
        #[serde(with = "rust_decimal::serde::float")]
        pub saldo_awal: Decimal,
        #[serde(with = "rust_decimal::serde::float")]
        pub saldo_saat_ini: Decimal,
    }
}

pub mod transaction {
    use super::*;

    /// Request body for `POST /api/transactions`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub tipe_transaksi: Option<String>,
        pub jumlah: Option<Decimal>,
        pub category_id: Option<i32>,
        pub wallet_id: Option<i32>,
        pub tanggal: Option<String>,
        pub deskripsi: Option<String>,
        pub catatan: Option<String>,
    }

    /// Request body for `PUT /api/transactions/{id}`. `null` clears
    /// `deskripsi` and `catatan`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionUpdate {
        pub tipe_transaksi: Option<String>,
        pub jumlah: Option<Decimal>,
        pub category_id: Option<i32>,
        pub tanggal: Option<String>,
        #[serde(default, deserialize_with = "explicit_null")]
        pub deskripsi: Option<Option<String>>,
        #[serde(default, deserialize_with = "explicit_null")]
        pub catatan: Option<Option<String>>,
    }

    /// Query string of `GET /api/transactions`.
    ///
    /// `type` is kept raw: unknown values are ignored rather than rejected.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionListQuery {
        pub wallet_id: Option<i32>,
        #[serde(rename = "type")]
        pub kind: Option<String>,
        pub limit: Option<u64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: i32,
        pub tipe_transaksi: String,
        #[serde(with = "rust_decimal::serde::float")]
        pub jumlah: Decimal,
        pub deskripsi: Option<String>,
        pub wallet_id: i32,
        pub category_id: i32,
        pub tanggal: DateTime<Utc>,
        pub catatan: Option<String>,
        pub created_at: DateTime<Utc>,
        /// Balance of the wallet right after a create/update.
        #[serde(
            default,
            with = "rust_decimal::serde::float_option",
            skip_serializing_if = "Option::is_none"
        )]
        pub wallet_balance: Option<Decimal>,
    }

    /// `data` of a deletion response.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionDeleted {
        pub wallet_id: i32,
        #[serde(with = "rust_decimal::serde::float")]
        pub wallet_balance: Decimal,
    }
}

pub mod category {
    use super::*;

    /// Query string of `GET /api/categories`. `type` defaults to `all`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CategoryQuery {
        #[serde(rename = "type")]
        pub kind: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryView {
        pub value: i32,
        pub name: String,
        pub label: String,
        /// Only set in the grouped (`type=all`) listing.
        #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
        pub kind: Option<String>,
    }

    /// `data` of `GET /api/categories?type=all`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryGroups {
        pub expense: Vec<CategoryView>,
        pub income: Vec<CategoryView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum CategoryListing {
        Single(Vec<CategoryView>),
        Grouped(CategoryGroups),
    }
}
