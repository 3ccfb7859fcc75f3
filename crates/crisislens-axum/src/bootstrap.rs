//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where the vision model adapter is chosen
//! and wired into the analysis service.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use crisislens_core::{AnalysisService, Settings, UnavailableModel, VisionModel};
use crisislens_gemini::{GeminiClient, GeminiConfig};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

/// Default upload limit for `POST /analyze` (20 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Port for the HTTP server (0 picks an ephemeral port).
    pub port: u16,
    /// Optional directory with `index.html` and assets for `/static`.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Maximum accepted request body for uploads.
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Derive server config from application settings.
    ///
    /// An empty origin list allows any origin.
    pub fn from_settings(settings: &Settings) -> Self {
        let cors = if settings.cors_origins.is_empty() {
            CorsConfig::AllowAll
        } else {
            CorsConfig::AllowOrigins(settings.cors_origins.clone())
        };
        Self {
            host: settings.host.clone(),
            port: settings.port,
            static_dir: settings.static_dir.clone(),
            cors,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    /// Set the static directory for frontend serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// `host:port` string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// Image analysis backed by the configured vision model.
    pub analysis: AnalysisService,
}

impl AxumContext {
    /// Build a context around an explicit model (tests, embedding).
    pub fn with_model(model: Arc<dyn VisionModel>) -> Self {
        Self {
            analysis: AnalysisService::new(model),
        }
    }
}

/// Choose the vision model for the given settings.
///
/// Without an API key the server still starts; `/analyze` then answers 503
/// with the reason.
pub fn build_model(settings: &Settings) -> Result<Arc<dyn VisionModel>> {
    if let Some(key) = &settings.gemini_api_key {
        let config = GeminiConfig::new(key.clone()).with_model(settings.gemini_model.clone());
        let client = GeminiClient::new(config).context("failed to build Gemini HTTP client")?;
        return Ok(Arc::new(client));
    }

    let reason = settings
        .missing_model_reason()
        .unwrap_or("Vision model is not configured.");
    tracing::warn!(target: "crisislens.bootstrap", reason, "analysis endpoint disabled");
    Ok(Arc::new(UnavailableModel::new(reason)))
}

/// Bootstrap the Axum context from settings.
pub fn bootstrap(settings: &Settings) -> Result<AxumContext> {
    let model = build_model(settings)?;

    info!(
        target: "crisislens.bootstrap",
        model = model.name(),
        available = model.unavailable_reason().is_none(),
        static_dir = ?settings.static_dir,
        "Axum bootstrap complete"
    );

    Ok(AxumContext::with_model(model))
}

/// Start the web server and run until Ctrl+C.
///
/// If `config.static_dir` is set, serves the frontend from it.
/// Otherwise, serves the embedded page.
pub async fn start_server(ctx: AxumContext, config: ServerConfig) -> Result<()> {
    let app = crate::routes::create_router(ctx, &config);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    match config.static_dir {
        Some(ref dir) => info!(
            "CrisisLens (UI from {}) listening on http://{}",
            dir.display(),
            addr
        ),
        None => info!("CrisisLens listening on http://{}", addr),
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("CrisisLens server stopped");
    Ok(())
}

/// Bind and serve in a background task.
///
/// Returns the bound address (useful with port 0) and the task handle.
pub async fn spawn_server(
    ctx: AxumContext,
    config: ServerConfig,
) -> Result<(SocketAddr, JoinHandle<()>)> {
    let app = crate::routes::create_router(ctx, &config);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "CrisisLens server error");
        }
    });

    Ok((addr, handle))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_builds_unavailable_model() {
        let model = build_model(&Settings::default()).unwrap();
        assert!(
            model
                .unavailable_reason()
                .is_some_and(|r| r.contains("GEMINI_API_KEY"))
        );
    }

    #[test]
    fn api_key_builds_gemini_model() {
        let settings = Settings {
            gemini_api_key: Some("key".into()),
            gemini_model: "gemini-2.5-flash".into(),
            ..Settings::default()
        };
        let model = build_model(&settings).unwrap();
        assert_eq!(model.name(), "gemini-2.5-flash");
        assert!(model.unavailable_reason().is_none());
    }

    #[test]
    fn server_config_follows_settings() {
        let settings = Settings {
            host: "0.0.0.0".into(),
            port: 9999,
            ..Settings::default()
        };
        let config = ServerConfig::from_settings(&settings).with_static_dir("./web");
        assert_eq!(config.bind_addr(), "0.0.0.0:9999");
        assert_eq!(config.static_dir, Some(PathBuf::from("./web")));
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert!(matches!(config.cors, CorsConfig::AllowAll));
    }

    #[test]
    fn configured_origins_restrict_cors() {
        let settings = Settings {
            cors_origins: vec!["https://lens.example".into()],
            ..Settings::default()
        };
        let config = ServerConfig::from_settings(&settings);
        assert!(
            matches!(config.cors, CorsConfig::AllowOrigins(ref o) if o == &["https://lens.example"])
        );
    }
}
