//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to `AnalysisService`.

pub mod analyze;
pub mod frontend;
