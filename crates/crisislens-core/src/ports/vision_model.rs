//! Port for the multimodal model that produces crisis reports.
//!
//! Implementations live in adapters (e.g. `crisislens-gemini`).

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ImageUpload;

/// Errors from a vision model call.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The model cannot be used at all (missing key, missing SDK).
    #[error("{0}")]
    Unavailable(String),

    /// The model API answered with an error status.
    #[error("Model API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The request did not reach the model API.
    #[error("Model request failed: {0}")]
    Network(String),

    /// The API answered but produced no text.
    #[error("Model returned an empty response")]
    EmptyResponse,

    /// The API response could not be decoded.
    #[error("Invalid model response: {0}")]
    InvalidResponse(String),
}

/// A model that turns a prompt plus an image into text.
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Short identifier for logs (e.g. the model name).
    fn name(&self) -> &str;

    /// Reason the model cannot serve requests, if any.
    ///
    /// Checked before any request validation so that a misconfigured server
    /// answers 503 regardless of input.
    fn unavailable_reason(&self) -> Option<&str> {
        None
    }

    /// Generate text for `prompt` with `image` attached.
    async fn generate(&self, prompt: &str, image: &ImageUpload) -> Result<String, ModelError>;
}

/// Stand-in used when no model could be configured.
#[derive(Debug, Clone)]
pub struct UnavailableModel {
    reason: String,
}

impl UnavailableModel {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl VisionModel for UnavailableModel {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn unavailable_reason(&self) -> Option<&str> {
        Some(&self.reason)
    }

    async fn generate(&self, _prompt: &str, _image: &ImageUpload) -> Result<String, ModelError> {
        Err(ModelError::Unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unavailable_model_always_fails_with_reason() {
        let model = UnavailableModel::new("GEMINI_API_KEY is not set.");
        assert_eq!(model.unavailable_reason(), Some("GEMINI_API_KEY is not set."));

        let image = ImageUpload::new("a.png", "image/png", vec![0]);
        let err = model.generate("prompt", &image).await.unwrap_err();
        assert_eq!(err.to_string(), "GEMINI_API_KEY is not set.");
    }
}
