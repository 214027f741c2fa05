//! Wallets API endpoints.

use api_types::{
    Envelope,
    wallet::{BalanceView, WalletNew, WalletUpdate, WalletView},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use engine::{NewWalletCmd, UpdateWalletCmd, WalletType};

use crate::{
    ServerError, required_text,
    server::ServerState,
    views::{balance_view, wallet_view},
};

type WalletId = WithRejection<Path<i32>, ServerError>;

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Envelope<Vec<WalletView>>>, ServerError> {
    let wallets = state.engine.list_wallets().await?;
    Ok(Json(Envelope::success(
        wallets.into_iter().map(wallet_view).collect(),
    )))
}

pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WalletId,
) -> Result<Json<Envelope<WalletView>>, ServerError> {
    let wallet = state.engine.wallet(id).await?;
    Ok(Json(Envelope::success(wallet_view(wallet))))
}

pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(payload), _): WithRejection<Json<WalletNew>, ServerError>,
) -> Result<(StatusCode, Json<Envelope<WalletView>>), ServerError> {
    let name = required_text(payload.nama_dompet, "nama_dompet")?;
    let wallet_type = required_text(payload.tipe_dompet, "tipe_dompet")?;
    let wallet_type = WalletType::try_from(wallet_type.as_str())?;

    let mut cmd = NewWalletCmd::new(name, wallet_type);
    cmd.description = payload.deskripsi;
    cmd.initial_balance = payload.saldo_awal;
    cmd.color = payload.warna;

    let wallet = state.engine.create_wallet(cmd).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(wallet_view(wallet)).message("Wallet created successfully")),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WalletId,
    WithRejection(Json(payload), _): WithRejection<Json<WalletUpdate>, ServerError>,
) -> Result<Json<Envelope<WalletView>>, ServerError> {
    let wallet_type = payload
        .tipe_dompet
        .as_deref()
        .map(WalletType::try_from)
        .transpose()?;

    let cmd = UpdateWalletCmd {
        name: payload.nama_dompet,
        description: payload.deskripsi.map(Option::unwrap_or_default),
        wallet_type,
        color: payload.warna,
        initial_balance: payload.saldo_awal,
    };
    let wallet = state.engine.update_wallet(id, cmd).await?;
    Ok(Json(
        Envelope::success(wallet_view(wallet)).message("Wallet updated successfully"),
    ))
}

pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WalletId,
) -> Result<Json<Envelope<()>>, ServerError> {
    let name = state.engine.delete_wallet(id).await?;
    Ok(Json(Envelope::done(format!(
        "Wallet \"{name}\" deleted successfully"
    ))))
}

pub async fn balance(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WalletId,
) -> Result<Json<Envelope<BalanceView>>, ServerError> {
    let balance = state.engine.wallet_balance(id).await?;
    Ok(Json(Envelope::success(balance_view(balance))))
}

pub async fn recompute(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WalletId,
) -> Result<Json<Envelope<BalanceView>>, ServerError> {
    let balance = state.engine.recompute_wallet_balance(id).await?;
    Ok(Json(
        Envelope::success(balance_view(balance)).message("Wallet balance recomputed"),
    ))
}
