pub mod handlers;
pub mod types;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::BackendConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend: BackendConfig,
}

pub fn router(backend: BackendConfig) -> Router {
    let state = Arc::new(AppState {
        http: reqwest::Client::new(),
        backend,
    });

    Router::new()
        .route("/", get(index))
        .route("/api/predict", post(handlers::predict))
        .route("/api/health", get(handlers::health))
        .with_state(state)
        // Upload size is guidance only (10MB in the page help text), so the
        // framework's default body cap is lifted rather than tuned.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub async fn serve(backend: BackendConfig, host: &str, port: u16) -> eyre::Result<()> {
    let app = router(backend);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Portal listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received, stopping portal");
        })
        .await?;
    Ok(())
}
