//! Web routes.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
};
use chrono::Utc;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use socialpilot_upload::UploadClient;

/// Shared state for the web server.
pub struct AppState {
    pub upload: UploadClient,
}

/// Create the web router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/history", get(history))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the router until the process exits.
pub async fn serve(router: Router, port: u16) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("web server listening on http://0.0.0.0:{}", port);
    axum::serve(listener, router).await
}

/// Liveness check. Always 200 while the process is alive; says nothing about
/// whether passes are succeeding.
async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "online",
        "message": "SocialPilot headless automation bot is running.",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Posting-history passthrough from the distribution API.
async fn history(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.upload.history().await {
        Ok(history) => (StatusCode::OK, Json(history)),
        Err(e) => {
            warn!(error = %e, "failed to fetch posting history");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}
