//! Axum web adapter for CrisisLens.
//!
//! Serves the analysis form and the `POST /analyze` endpoint backed by
//! [`crisislens_core::AnalysisService`].
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for integration-test-only crates
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use crisislens_client as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{
    AxumContext, CorsConfig, DEFAULT_MAX_UPLOAD_BYTES, ServerConfig, bootstrap, build_model,
    spawn_server, start_server,
};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
