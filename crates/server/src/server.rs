use api_types::Envelope;
use axum::{
    Json, Router,
    extract::{Request, State},
    http::{
        HeaderValue, Method, StatusCode,
        header::{self, InvalidHeaderValue},
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};

use std::sync::Arc;

use crate::{categories, transactions, wallets};
use engine::Engine;

const ALLOW_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";
const ALLOW_HEADERS: &str = "Origin, Content-Type, Accept, Authorization";
const PREFLIGHT_MAX_AGE: &str = "86400";

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    /// Value of `Access-Control-Allow-Origin` on every response.
    pub cors_origin: HeaderValue,
}

impl ServerState {
    pub fn new(engine: Engine, cors_origin: &str) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            engine: Arc::new(engine),
            cors_origin: HeaderValue::from_str(cors_origin)?,
        })
    }
}

/// Answers preflight requests directly and decorates every other response
/// with the CORS headers.
async fn cors(State(state): State<ServerState>, request: Request, next: Next) -> Response {
    let preflight = request.method() == Method::OPTIONS;
    let mut response = if preflight {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, state.cors_origin.clone());
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    if preflight {
        headers.insert(
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from_static(PREFLIGHT_MAX_AGE),
        );
    }
    response
}

async fn not_found() -> (StatusCode, Json<Envelope<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::error("Endpoint not found")),
    )
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/api/wallets", get(wallets::list).post(wallets::create))
        .route(
            "/api/wallets/{id}",
            get(wallets::get)
                .put(wallets::update)
                .delete(wallets::delete),
        )
        .route("/api/wallets/{id}/balance", get(wallets::balance))
        .route(
            "/api/wallets/{id}/recompute",
            axum::routing::post(wallets::recompute),
        )
        .route(
            "/api/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/api/transactions/{id}",
            get(transactions::get)
                .put(transactions::update)
                .delete(transactions::delete),
        )
        .route("/api/categories", get(categories::list))
        .route("/api/wallet-types", get(categories::wallet_types))
        .route("/api/transaction-types", get(categories::transaction_types))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), cors))
        .with_state(state)
}

pub async fn run(state: ServerState, bind: &str, port: u16) -> Result<(), std::io::Error> {
    let addr = format!("{bind}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await.inspect_err(|err| {
        tracing::error!("failed to bind server listener on {addr}: {err}");
    })?;
    run_with_listener(state, listener).await
}

pub async fn run_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(state, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
