//! Public configuration for the analyze client.

use crisislens_core::DEFAULT_SERVER_URL;

/// Path of the analysis endpoint, relative to the server base URL.
pub const ANALYZE_PATH: &str = "/analyze";

/// Configuration for [`crate::HttpAnalyzeClient`].
///
/// There is deliberately no timeout or retry setting: a submission is a
/// single request that runs until the server answers.
///
/// # Example
///
/// ```
/// use crisislens_client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_base_url("http://localhost:8000/")
///     .with_user_agent("my-app/1.0");
/// assert_eq!(config.analyze_url(), "http://localhost:8000/analyze");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            user_agent: concat!("crisislens-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server base URL. A trailing slash is ignored.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Full URL of the analysis endpoint.
    pub fn analyze_url(&self) -> String {
        format!("{}{ANALYZE_PATH}", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        assert_eq!(
            ClientConfig::default().analyze_url(),
            "http://127.0.0.1:8000/analyze"
        );
    }

    #[test]
    fn user_agent_includes_version() {
        let config = ClientConfig::default();
        assert!(config.user_agent.starts_with("crisislens-client/"));
    }
}
