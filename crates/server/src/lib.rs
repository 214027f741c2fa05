use api_types::Envelope;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use engine::EngineError;

pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};

mod categories;
mod server;
mod transactions;
mod views;
mod wallets;

pub mod types {
    pub mod wallet {
        pub use api_types::wallet::{BalanceView, WalletNew, WalletUpdate, WalletView};
    }

    pub mod transaction {
        pub use api_types::transaction::{
            TransactionDeleted, TransactionListQuery, TransactionNew, TransactionUpdate,
            TransactionView,
        };
    }

    pub mod category {
        pub use api_types::category::{CategoryGroups, CategoryListing, CategoryQuery, CategoryView};
    }
}

pub enum ServerError {
    Engine(EngineError),
    /// Malformed request (body, path or query) or missing field; always 400.
    Generic(String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::Validation(_) | EngineError::InsufficientBalance(_) => {
            StatusCode::BAD_REQUEST
        }
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    if let EngineError::Database(db_err) = &err {
        tracing::error!("database error: {db_err}");
    }
    err.to_string()
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Envelope::error(message))).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected body: {}", rejection.body_text());
        Self::Generic("Invalid JSON data".to_string())
    }
}

impl From<PathRejection> for ServerError {
    fn from(rejection: PathRejection) -> Self {
        Self::Generic(rejection.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Generic(rejection.body_text())
    }
}

/// `Field {name} is required` unless the value is present and not blank.
pub(crate) fn required<T>(value: Option<T>, field: &str) -> Result<T, ServerError> {
    value.ok_or_else(|| ServerError::Generic(format!("Field {field} is required")))
}

pub(crate) fn required_text(value: Option<String>, field: &str) -> Result<String, ServerError> {
    required(value.filter(|v| !v.trim().is_empty()), field)
}

#[cfg(test)]
mod tests {
    use engine::Decimal;
    use sea_orm::DbErr;

    use super::*;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::KeyNotFound("Wallet not found".to_string()))
            .into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_validation_maps_to_400() {
        let res = ServerError::from(EngineError::Validation("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn insufficient_balance_maps_to_400() {
        let res = ServerError::from(EngineError::InsufficientBalance(Decimal::new(10, 0)))
            .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_maps_to_500() {
        let res = ServerError::from(EngineError::Database(DbErr::Custom("boom".to_string())))
            .into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn blank_required_text_is_missing() {
        let err = required_text(Some("  ".to_string()), "nama_dompet").err();
        assert!(matches!(err, Some(ServerError::Generic(msg)) if msg == "Field nama_dompet is required"));
        assert!(required_text(Some("Cash".to_string()), "nama_dompet").is_ok());
        assert!(required::<i32>(None, "wallet_id").is_err());
    }
}
