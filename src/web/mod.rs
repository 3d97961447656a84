//! HTTP surface: a single page with a prompt box, plus the JSON endpoint it
//! calls to generate an image.

pub mod handlers;
pub mod types;

use crate::app::App;
use crate::Result;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(app: Arc<App>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/api/generate", post(handlers::generate))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

/// Bind and serve until the process is stopped.
pub async fn serve(app: Arc<App>, host: &str, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(app)).await?;
    Ok(())
}
