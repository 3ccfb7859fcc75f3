//! Gemini adapter for the CrisisLens vision model port.
//!
//! Talks to the public `generateContent` REST method; the image travels as
//! base64 `inline_data` next to the prompt.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod wire;

// ============================================================================
// Public API
// ============================================================================

pub use client::GeminiClient;
pub use config::{API_BASE, GeminiConfig};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio as _;
#[cfg(test)]
use wiremock as _;
