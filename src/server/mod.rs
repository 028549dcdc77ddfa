//! HTTP server exposing the link extractor.
//!
//! Provides two endpoints:
//! - `POST /parse` - fetches the URL in the request body and returns its links as JSON
//! - `GET /status` - JSON status endpoint with request and error counters

mod handlers;
mod types;

use std::future::Future;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use crate::config::{PARSE_ROUTE, STATUS_ROUTE};
use handlers::{method_not_allowed, parse_handler, status_handler};
pub use types::AppState;

/// Builds the router with all routes wired to `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            PARSE_ROUTE,
            post(parse_handler).fallback(method_not_allowed),
        )
        .route(STATUS_ROUTE, get(status_handler))
        .with_state(state)
}

/// Serves the router on an already-bound listener until `shutdown` resolves.
///
/// In-flight requests are allowed to finish after `shutdown` fires.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), anyhow::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener
        .local_addr()
        .map_err(|e| anyhow::anyhow!("Failed to read listener address: {}", e))?;

    log::info!("Link parser listening on http://{}/", addr);
    log::info!("  - Parse: POST http://{}{}", addr, PARSE_ROUTE);
    log::info!("  - Status: GET http://{}{}", addr, STATUS_ROUTE);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log::info!("Server stopped");
    Ok(())
}
