use sea_orm::{Database, DatabaseConnection};

use engine::{
    Decimal, Engine, EngineError, NewTransactionCmd, NewWalletCmd, TransactionListFilter,
    TransactionType, UpdateTransactionCmd, WalletType,
};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

fn d(value: i64) -> Decimal {
    Decimal::new(value, 0)
}

async fn cash_wallet(engine: &Engine, initial: i64) -> i32 {
    engine
        .create_wallet(NewWalletCmd::new("Cash", WalletType::Cash).initial_balance(d(initial)))
        .await
        .unwrap()
        .id
}

async fn income(engine: &Engine, wallet_id: i32, amount: i64) -> i32 {
    engine
        .create_transaction(NewTransactionCmd::new(
            wallet_id,
            TransactionType::Income,
            d(amount),
            12,
            "2024-05-01T10:00:00",
        ))
        .await
        .unwrap()
        .transaction
        .id
}

async fn expense(engine: &Engine, wallet_id: i32, amount: i64) -> Result<i32, EngineError> {
    engine
        .create_transaction(NewTransactionCmd::new(
            wallet_id,
            TransactionType::Expense,
            d(amount),
            1,
            "2024-05-02T12:30:00Z",
        ))
        .await
        .map(|receipt| receipt.transaction.id)
}

async fn balance(engine: &Engine, wallet_id: i32) -> Decimal {
    engine.wallet(wallet_id).await.unwrap().current_balance
}

async fn ledger_balance(engine: &Engine, wallet_id: i32) -> Decimal {
    let wallet = engine.wallet(wallet_id).await.unwrap();
    let ledger = engine
        .list_transactions(&TransactionListFilter::default().wallet_id(wallet_id).limit(10_000))
        .await
        .unwrap();
    engine::reconcile::replay(
        wallet.initial_balance,
        ledger.into_iter().map(|tx| (tx.kind, tx.amount)),
    )
}

#[tokio::test]
async fn income_then_rejected_expense_then_delete() {
    let (engine, _db) = engine_with_db().await;
    let wallet_id = cash_wallet(&engine, 100_000).await;

    let income_id = income(&engine, wallet_id, 50_000).await;
    assert_eq!(balance(&engine, wallet_id).await, d(150_000));

    let err = expense(&engine, wallet_id, 200_000).await.unwrap_err();
    assert_eq!(err, EngineError::InsufficientBalance(d(150_000)));
    assert!(err.to_string().contains("150000"));
    assert_eq!(balance(&engine, wallet_id).await, d(150_000));

    let deleted = engine.delete_transaction(income_id).await.unwrap();
    assert_eq!(deleted.wallet_id, wallet_id);
    assert_eq!(deleted.wallet_balance, d(100_000));
    assert_eq!(balance(&engine, wallet_id).await, d(100_000));
}

#[tokio::test]
async fn receipt_reports_new_balance() {
    let (engine, _db) = engine_with_db().await;
    let wallet_id = cash_wallet(&engine, 10_000).await;

    let receipt = engine
        .create_transaction(
            NewTransactionCmd::new(
                wallet_id,
                TransactionType::Expense,
                d(2_500),
                2,
                "2024-05-01",
            )
            .description("  Bus  ")
            .note(""),
        )
        .await
        .unwrap();

    assert_eq!(receipt.wallet_balance, d(7_500));
    assert_eq!(receipt.transaction.kind, TransactionType::Expense);
    assert_eq!(receipt.transaction.description.as_deref(), Some("Bus"));
    assert_eq!(receipt.transaction.note, None);
    assert_eq!(receipt.transaction.category_id, 2);
}

#[tokio::test]
async fn balance_matches_ledger_after_mixed_writes() {
    let (engine, _db) = engine_with_db().await;
    let wallet_id = cash_wallet(&engine, 1_000).await;

    let a = income(&engine, wallet_id, 500).await;
    let b = expense(&engine, wallet_id, 300).await.unwrap();
    income(&engine, wallet_id, 50).await;
    engine
        .update_transaction(b, UpdateTransactionCmd::new().amount(d(900)))
        .await
        .unwrap();
    engine.delete_transaction(a).await.unwrap();

    let stored = balance(&engine, wallet_id).await;
    assert_eq!(stored, d(150));
    assert_eq!(stored, ledger_balance(&engine, wallet_id).await);
}

#[tokio::test]
async fn create_update_delete_restores_balance() {
    let (engine, _db) = engine_with_db().await;
    let wallet_id = cash_wallet(&engine, 5_000).await;

    let id = expense(&engine, wallet_id, 1_000).await.unwrap();
    assert_eq!(balance(&engine, wallet_id).await, d(4_000));

    let receipt = engine
        .update_transaction(
            id,
            UpdateTransactionCmd::new()
                .kind(TransactionType::Income)
                .category_id(13)
                .amount(d(2_000)),
        )
        .await
        .unwrap();
    assert_eq!(receipt.wallet_balance, d(7_000));
    assert_eq!(receipt.transaction.kind, TransactionType::Income);

    engine.delete_transaction(id).await.unwrap();
    assert_eq!(balance(&engine, wallet_id).await, d(5_000));
}

#[tokio::test]
async fn failed_update_leaves_balance_untouched() {
    let (engine, _db) = engine_with_db().await;
    let wallet_id = cash_wallet(&engine, 1_000).await;
    let id = expense(&engine, wallet_id, 400).await.unwrap();

    let err = engine
        .update_transaction(id, UpdateTransactionCmd::new().amount(d(5_000)))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::InsufficientBalance(d(1_000)));
    assert_eq!(balance(&engine, wallet_id).await, d(600));

    let err = engine
        .update_transaction(id, UpdateTransactionCmd::new().amount(d(0)))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    let err = engine
        .update_transaction(id, UpdateTransactionCmd::new().date("not a date"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
    assert_eq!(balance(&engine, wallet_id).await, d(600));

    let stored = engine.transaction(id).await.unwrap();
    assert_eq!(stored.amount, d(400));
}

#[tokio::test]
async fn type_change_requires_matching_category() {
    let (engine, _db) = engine_with_db().await;
    let wallet_id = cash_wallet(&engine, 1_000).await;
    let id = expense(&engine, wallet_id, 100).await.unwrap();

    let err = engine
        .update_transaction(
            id,
            UpdateTransactionCmd::new().kind(TransactionType::Income),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(msg) if msg.contains("income")));
    assert_eq!(balance(&engine, wallet_id).await, d(900));
}

#[tokio::test]
async fn category_must_match_type() {
    let (engine, _db) = engine_with_db().await;
    let wallet_id = cash_wallet(&engine, 1_000).await;

    let err = engine
        .create_transaction(NewTransactionCmd::new(
            wallet_id,
            TransactionType::Expense,
            d(10),
            12,
            "2024-05-01",
        ))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Validation(
            "Invalid category for expense transaction. Valid categories: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]"
                .to_string()
        )
    );

    let err = engine
        .create_transaction(NewTransactionCmd::new(
            wallet_id,
            TransactionType::Income,
            d(10),
            3,
            "2024-05-01",
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
    assert_eq!(balance(&engine, wallet_id).await, d(1_000));
}

#[tokio::test]
async fn create_validation_errors() {
    let (engine, _db) = engine_with_db().await;
    let wallet_id = cash_wallet(&engine, 1_000).await;

    let err = engine
        .create_transaction(NewTransactionCmd::new(
            wallet_id,
            TransactionType::Income,
            d(0),
            12,
            "2024-05-01",
        ))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Validation("Amount must be greater than 0".to_string())
    );

    let err = engine
        .create_transaction(NewTransactionCmd::new(
            9_999,
            TransactionType::Income,
            d(10),
            12,
            "2024-05-01",
        ))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("Wallet not found".to_string()));

    let err = engine
        .create_transaction(NewTransactionCmd::new(
            wallet_id,
            TransactionType::Income,
            d(10),
            12,
            "01/05/2024",
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(msg) if msg.starts_with("Invalid date format")));
    assert_eq!(balance(&engine, wallet_id).await, d(1_000));
}

#[tokio::test]
async fn deleting_spent_income_allows_negative_balance() {
    let (engine, _db) = engine_with_db().await;
    let wallet_id = cash_wallet(&engine, 0).await;

    let income_id = income(&engine, wallet_id, 100).await;
    expense(&engine, wallet_id, 80).await.unwrap();

    let deleted = engine.delete_transaction(income_id).await.unwrap();
    assert_eq!(deleted.wallet_balance, d(-80));
    assert_eq!(deleted.label, "income - 100");
}

#[tokio::test]
async fn missing_transaction_is_not_found() {
    let (engine, _db) = engine_with_db().await;

    let not_found = EngineError::KeyNotFound("Transaction not found".to_string());
    assert_eq!(engine.transaction(42).await.unwrap_err(), not_found);
    assert_eq!(
        engine
            .update_transaction(42, UpdateTransactionCmd::new())
            .await
            .unwrap_err(),
        not_found
    );
    assert_eq!(engine.delete_transaction(42).await.unwrap_err(), not_found);
}

#[tokio::test]
async fn list_filters_order_and_limit() {
    let (engine, _db) = engine_with_db().await;
    let first = cash_wallet(&engine, 1_000).await;
    let second = cash_wallet(&engine, 1_000).await;

    let mut ids = Vec::new();
    for amount in 1..=5 {
        ids.push(income(&engine, first, amount).await);
    }
    expense(&engine, first, 10).await.unwrap();
    income(&engine, second, 7).await;

    let all = engine
        .list_transactions(&TransactionListFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 7);
    for pair in all.windows(2) {
        assert!(
            (pair[0].created_at, pair[0].id) > (pair[1].created_at, pair[1].id),
            "transactions must be newest first"
        );
    }

    let limited = engine
        .list_transactions(&TransactionListFilter::default().wallet_id(first).limit(3))
        .await
        .unwrap();
    assert_eq!(limited.len(), 3);
    assert!(limited.iter().all(|tx| tx.wallet_id == first));

    let incomes = engine
        .list_transactions(
            &TransactionListFilter::default()
                .wallet_id(first)
                .kind(TransactionType::Income),
        )
        .await
        .unwrap();
    let mut listed: Vec<i32> = incomes.iter().map(|tx| tx.id).collect();
    listed.reverse();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn oversized_limit_is_clamped() {
    let (engine, _db) = engine_with_db().await;
    let wallet_id = cash_wallet(&engine, 0).await;
    income(&engine, wallet_id, 10).await;

    let filter = TransactionListFilter::default().limit(u64::MAX);
    assert_eq!(filter.limit, TransactionListFilter::MAX_LIMIT);
    assert_eq!(engine.list_transactions(&filter).await.unwrap().len(), 1);

    let raw = TransactionListFilter {
        limit: u64::MAX,
        ..TransactionListFilter::default()
    };
    assert_eq!(engine.list_transactions(&raw).await.unwrap().len(), 1);
}
