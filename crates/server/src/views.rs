//! Mapping from engine values to wire views.

use api_types::{
    category::CategoryView,
    transaction::TransactionView,
    wallet::{BalanceView, WalletView},
};
use engine::{Category, Decimal, Transaction, Wallet, WalletBalance};

pub(crate) fn wallet_view(wallet: Wallet) -> WalletView {
    WalletView {
        id: wallet.id,
        nama_dompet: wallet.name,
        deskripsi: wallet.description,
        saldo_awal: wallet.initial_balance,
        saldo_saat_ini: wallet.current_balance,
        tipe_dompet: wallet.wallet_type.as_str().to_string(),
        warna: wallet.color,
        created_at: wallet.created_at,
        updated_at: wallet.updated_at,
    }
}

pub(crate) fn balance_view(balance: WalletBalance) -> BalanceView {
    BalanceView {
        wallet_id: balance.wallet_id,
        wallet_name: balance.wallet_name,
        saldo_awal: balance.initial_balance,
        saldo_saat_ini: balance.current_balance,
    }
}

pub(crate) fn transaction_view(
    transaction: Transaction,
    wallet_balance: Option<Decimal>,
) -> TransactionView {
    TransactionView {
        id: transaction.id,
        tipe_transaksi: transaction.kind.as_str().to_string(),
        jumlah: transaction.amount,
        deskripsi: transaction.description,
        wallet_id: transaction.wallet_id,
        category_id: transaction.category_id,
        tanggal: transaction.date,
        catatan: transaction.note,
        created_at: transaction.created_at,
        wallet_balance,
    }
}

pub(crate) fn category_view(category: Category, with_type: bool) -> CategoryView {
    CategoryView {
        value: category.id,
        kind: with_type.then(|| category.kind.as_str().to_string()),
        name: category.name,
        label: category.label,
    }
}
