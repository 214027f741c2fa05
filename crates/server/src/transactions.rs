//! Transactions API endpoints.

use api_types::{
    Envelope,
    transaction::{
        TransactionDeleted, TransactionListQuery, TransactionNew, TransactionUpdate,
        TransactionView,
    },
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use engine::{NewTransactionCmd, TransactionListFilter, TransactionType, UpdateTransactionCmd};

use crate::{
    ServerError, required, required_text, server::ServerState, views::transaction_view,
};

type TransactionId = WithRejection<Path<i32>, ServerError>;

pub async fn list(
    State(state): State<ServerState>,
    WithRejection(Query(query), _): WithRejection<Query<TransactionListQuery>, ServerError>,
) -> Result<Json<Envelope<Vec<TransactionView>>>, ServerError> {
    let filter = TransactionListFilter {
        wallet_id: query.wallet_id,
        // An unknown type filters nothing.
        kind: query
            .kind
            .as_deref()
            .and_then(|kind| TransactionType::try_from(kind).ok()),
        limit: query.limit.unwrap_or(TransactionListFilter::DEFAULT_LIMIT),
    };

    let views: Vec<TransactionView> = state
        .engine
        .list_transactions(&filter)
        .await?
        .into_iter()
        .map(|tx| transaction_view(tx, None))
        .collect();
    let count = views.len();
    Ok(Json(Envelope::success(views).count(count)))
}

pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): TransactionId,
) -> Result<Json<Envelope<TransactionView>>, ServerError> {
    let transaction = state.engine.transaction(id).await?;
    Ok(Json(Envelope::success(transaction_view(transaction, None))))
}

pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(payload), _): WithRejection<Json<TransactionNew>, ServerError>,
) -> Result<(StatusCode, Json<Envelope<TransactionView>>), ServerError> {
    let kind = required_text(payload.tipe_transaksi, "tipe_transaksi")?;
    let amount = required(payload.jumlah, "jumlah")?;
    let category_id = required(payload.category_id, "category_id")?;
    let wallet_id = required(payload.wallet_id, "wallet_id")?;
    let date = required_text(payload.tanggal, "tanggal")?;
    let kind = TransactionType::try_from(kind.as_str())?;

    let mut cmd = NewTransactionCmd::new(wallet_id, kind, amount, category_id, date);
    cmd.description = payload.deskripsi;
    cmd.note = payload.catatan;

    let receipt = state.engine.create_transaction(cmd).await?;
    let view = transaction_view(receipt.transaction, Some(receipt.wallet_balance));
    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(view).message("Transaction created successfully")),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): TransactionId,
    WithRejection(Json(payload), _): WithRejection<Json<TransactionUpdate>, ServerError>,
) -> Result<Json<Envelope<TransactionView>>, ServerError> {
    let kind = payload
        .tipe_transaksi
        .as_deref()
        .map(TransactionType::try_from)
        .transpose()?;

    let cmd = UpdateTransactionCmd {
        kind,
        amount: payload.jumlah,
        category_id: payload.category_id,
        date: payload.tanggal,
        description: payload.deskripsi.map(Option::unwrap_or_default),
        note: payload.catatan.map(Option::unwrap_or_default),
    };
    let receipt = state.engine.update_transaction(id, cmd).await?;
    let view = transaction_view(receipt.transaction, Some(receipt.wallet_balance));
    Ok(Json(
        Envelope::success(view).message("Transaction updated successfully"),
    ))
}

pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): TransactionId,
) -> Result<Json<Envelope<TransactionDeleted>>, ServerError> {
    let deleted = state.engine.delete_transaction(id).await?;
    let message = format!("Transaction \"{}\" deleted successfully", deleted.label);
    Ok(Json(
        Envelope::success(TransactionDeleted {
            wallet_id: deleted.wallet_id,
            wallet_balance: deleted.wallet_balance,
        })
        .message(message),
    ))
}
