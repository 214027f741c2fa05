//! Initial schema migration.
//!
//! Creates the three tables backing Dompetku:
//!
//! - `category`: the closed set of income/expense categories (seeded here)
//! - `wallets`: balance-bearing accounts (cash, bank, card, e-wallet)
//! - `transactions`: dated income/expense movements against one wallet
//!
//! Column names follow the legacy Indonesian schema the web clients were built
//! against (`nama_dompet`, `saldo_awal`, `jumlah`, ...).

use sea_orm::ConnectionTrait;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Category {
    Table,
    Id,
    Name,
    TransactionType,
}

#[derive(Iden)]
enum Wallets {
    Table,
    Id,
    NamaDompet,
    Deskripsi,
    SaldoAwal,
    SaldoSaatIni,
    TipeDompet,
    Warna,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    TipeTransaksi,
    Jumlah,
    Deskripsi,
    WalletId,
    Tanggal,
    Catatan,
    CreatedAt,
    CategoryId,
}

/// Seed rows for `category`, `(id, name, transaction_type)`.
///
/// Ids are part of the public API (clients send `category_id`), so they are
/// fixed and must match `engine::catalog`.
const CATEGORY_SEED: &[(i32, &str, &str)] = &[
    (1, "makanan_dan_minuman", "expense"),
    (2, "transport", "expense"),
    (3, "belanja", "expense"),
    (4, "hiburan", "expense"),
    (5, "tagihan_dan_utilitas", "expense"),
    (6, "kesehatan", "expense"),
    (7, "pendidikan", "expense"),
    (8, "rumah", "expense"),
    (9, "perjalanan", "expense"),
    (10, "hadiah_dan_donasi", "expense"),
    (11, "lainnya", "expense"),
    (12, "gaji", "income"),
    (13, "bisnis", "income"),
    (14, "investasi", "income"),
    (15, "bonus", "income"),
    (16, "hadiah", "income"),
    (17, "piutang", "income"),
    (18, "lainnya", "income"),
];

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Category
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Category::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Category::Name).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Category::TransactionType)
                            .string_len(16)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert()
            .into_table(Category::Table)
            .columns([Category::Id, Category::Name, Category::TransactionType])
            .to_owned();
        for (id, name, kind) in CATEGORY_SEED {
            seed.values_panic([(*id).into(), (*name).into(), (*kind).into()]);
        }
        let db = manager.get_connection();
        db.execute(db.get_database_backend().build(&seed)).await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Wallets
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Wallets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Wallets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Wallets::NamaDompet)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Wallets::Deskripsi).string_len(255))
                    .col(
                        ColumnDef::new(Wallets::SaldoAwal)
                            .decimal_len(16, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Wallets::SaldoSaatIni)
                            .decimal_len(16, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Wallets::TipeDompet).string_len(16).not_null())
                    .col(ColumnDef::new(Wallets::Warna).string_len(7))
                    .col(
                        ColumnDef::new(Wallets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Wallets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Transactions
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Transactions::TipeTransaksi)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::Jumlah)
                            .decimal_len(16, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::Deskripsi).string_len(255))
                    .col(ColumnDef::new(Transactions::WalletId).integer().not_null())
                    .col(
                        ColumnDef::new(Transactions::Tanggal)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::Catatan).string_len(500))
                    .col(
                        ColumnDef::new(Transactions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::CategoryId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-wallet_id")
                            .from(Transactions::Table, Transactions::WalletId)
                            .to(Wallets::Table, Wallets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-category_id")
                            .from(Transactions::Table, Transactions::CategoryId)
                            .to(Category::Table, Category::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-wallet_id")
                    .table(Transactions::Table)
                    .col(Transactions::WalletId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-created_at")
                    .table(Transactions::Table)
                    .col(Transactions::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Wallets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await?;
        Ok(())
    }
}
