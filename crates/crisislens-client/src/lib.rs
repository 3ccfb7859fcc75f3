//! HTTP client for `POST /analyze`.
//!
//! [`HttpAnalyzeClient`] implements [`crisislens_core::AnalyzeEndpoint`], so it
//! plugs straight into [`crisislens_core::SubmissionHandler`].
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;

// ============================================================================
// Public API
// ============================================================================

pub use client::HttpAnalyzeClient;
pub use config::{ANALYZE_PATH, ClientConfig};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio as _;
#[cfg(test)]
use wiremock as _;
