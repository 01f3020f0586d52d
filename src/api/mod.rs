//! HTTP API server

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{Error, Result};

pub mod handlers;

/// Build the API router.
///
/// Only `GET /api/test` is registered; everything else gets axum's default
/// 404 (or 405 for other methods on the same path).
pub fn create_router() -> Router {
    Router::new()
        .route("/api/test", get(handlers::test))
        .layer(TraceLayer::new_for_http())
}

/// Bind a TCP listener on `addr`
pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| Error::bind(addr, source))
}

/// Serve `router` on `listener` until the process is terminated
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    axum::serve(listener, router).await?;
    Ok(())
}
