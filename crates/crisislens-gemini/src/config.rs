//! Public configuration for the Gemini client.

use std::fmt;
use std::time::Duration;

use crisislens_core::DEFAULT_GEMINI_MODEL;

/// Public Gemini REST endpoint.
pub const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for [`crate::GeminiClient`].
///
/// # Example
///
/// ```
/// use crisislens_gemini::GeminiConfig;
/// use std::time::Duration;
///
/// let config = GeminiConfig::new("api-key")
///     .with_model("gemini-2.5-flash")
///     .with_timeout(Duration::from_secs(30));
/// assert!(config.generate_url().ends_with("/models/gemini-2.5-flash:generateContent"));
/// ```
#[derive(Clone)]
pub struct GeminiConfig {
    pub(crate) api_key: String,
    pub(crate) model: String,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) json_response: bool,
}

impl GeminiConfig {
    /// Create a configuration with default model, endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: API_BASE.to_string(),
            timeout: Duration::from_secs(120),
            json_response: true,
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (tests, proxies).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout. Defaults to 120 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Ask the API for `application/json` output. Enabled by default.
    #[must_use]
    pub const fn with_json_response(mut self, enabled: bool) -> Self {
        self.json_response = enabled;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// URL of the `generateContent` method for the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("json_response", &self.json_response)
            .finish()
    }
}
