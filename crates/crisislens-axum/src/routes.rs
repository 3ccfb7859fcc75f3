//! Route definitions and router construction.

use axum::Json;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig, ServerConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Create the main Axum router.
///
/// Routes:
/// - `POST /analyze`: multipart analysis (body limit from config)
/// - `GET /health`: liveness probe
/// - `GET /`: the form, from `static_dir/index.html` or the embedded page
/// - `GET /static/*`: assets from `static_dir`, when configured
pub fn create_router(ctx: AxumContext, config: &ServerConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    let api = Router::new()
        .route("/analyze", post(handlers::analyze::analyze))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .route("/health", get(health_check));

    let app = match &config.static_dir {
        Some(dir) => api
            .route_service("/", ServeFile::new(dir.join("index.html")))
            .nest_service("/static", ServeDir::new(dir)),
        None => api.route("/", get(handlers::frontend::index)),
    };

    app.with_state(state)
        .layer(build_cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
