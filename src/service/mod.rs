//! HTTP query service.
//!
//! Exposes `GET /api/related?word=<word>`: the word is trimmed and
//! lowercased, a store handle is acquired for the duration of one build,
//! and the resulting graph is returned as JSON. Empty input is a 400, any
//! build failure a 500 carrying the failure text.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderValue, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::error::{Result, WnjGraphError};
use crate::graph::build_synonym_graph;
use crate::lexicon::StoreProvider;
use crate::types::SynonymGraph;

/// Error body for requests without a usable word.
pub const NO_WORD_MESSAGE: &str = "No word provided";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct ServiceState {
    provider: Arc<dyn StoreProvider>,
}

impl ServiceState {
    pub fn new(provider: Arc<dyn StoreProvider>) -> Self {
        Self { provider }
    }
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query string as ordered key/value pairs. Repeated keys are kept.
type QueryPairs = Vec<(String, String)>;

/// Value of the first `key` parameter, ignoring later repeats.
fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

// ---------------------------------------------------------------------------
// Normalization and building
// ---------------------------------------------------------------------------

/// Trim and lowercase a raw query word. `None` when nothing is left.
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

/// Run one build on the blocking pool with its own store handle.
///
/// The handle is acquired and dropped inside the blocking task, so the
/// connection is closed on success and failure alike.
pub async fn build_graph(provider: Arc<dyn StoreProvider>, word: String) -> Result<SynonymGraph> {
    tokio::task::spawn_blocking(move || {
        let store = provider.acquire()?;
        build_synonym_graph(store.as_ref(), &word)
    })
    .await
    .map_err(|e| WnjGraphError::Task(e.to_string()))?
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

async fn related(
    State(state): State<Arc<ServiceState>>,
    params: std::result::Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let pairs = match params {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected malformed query string");
            return error_response(StatusCode::BAD_REQUEST, &rejection.body_text());
        }
    };

    let Some(word) = first_param(&pairs, "word").and_then(normalize_word) else {
        tracing::debug!("rejected request without word");
        return error_response(StatusCode::BAD_REQUEST, NO_WORD_MESSAGE);
    };

    tracing::debug!(word = %word, "related query");
    match build_graph(state.provider.clone(), word.clone()).await {
        Ok(graph) => Json(graph).into_response(),
        Err(e) => {
            tracing::error!(word = %word, error = %e, "graph build failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

async fn preflight() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "*"),
        ],
    )
        .into_response()
}

async fn add_cors_headers(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

// ---------------------------------------------------------------------------
// Server entry point
// ---------------------------------------------------------------------------

/// Build the service Router (extracted for testability).
pub fn build_router(state: Arc<ServiceState>, cors: bool) -> Router {
    let router = Router::new()
        .route("/api/related", get(related).options(preflight))
        .with_state(state);

    if cors {
        router.layer(middleware::map_response(add_cors_headers))
    } else {
        router
    }
}

/// Serve the API on `addr` until Ctrl-C.
pub async fn run_server(
    provider: Arc<dyn StoreProvider>,
    addr: SocketAddr,
    cors: bool,
) -> Result<()> {
    let state = Arc::new(ServiceState::new(provider));
    let app = build_router(state, cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("wnjgraph listening on http://{}/api/related", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down wnjgraph service");
        })
        .await?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
