//! Port for the remote analysis endpoint the form submits to.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::{AnalysisResult, AnalyzeRequest};

/// Message used when an error response carries no usable `detail`.
pub const DEFAULT_FAILURE_DETAIL: &str = "Analysis failed";

/// Why a submission did not produce a result.
///
/// `Display` is the bare message so the form can render `Error: <message>`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// `detail` from the error body, or the default failure text
        message: String,
    },

    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    /// The response body was not the JSON we expected.
    #[error("{0}")]
    Parse(String),
}

impl SubmitError {
    /// Build a rejection from a non-success response body.
    ///
    /// The body must be JSON. A missing, null, empty, zero or `false` `detail`
    /// falls back to [`DEFAULT_FAILURE_DETAIL`]; a non-string detail, such as
    /// a list of validation errors, is rendered as compact JSON.
    pub fn from_error_body(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::Rejected {
                status,
                message: detail_message(&value),
            },
            Err(e) => Self::Parse(e.to_string()),
        }
    }

    /// Build a transport failure, never with an empty message.
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Network("Network request failed".to_string())
        } else {
            Self::Network(message)
        }
    }

    /// HTTP status for rejections.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Network(_) | Self::Parse(_) => None,
        }
    }
}

fn detail_message(body: &Value) -> String {
    match body.get("detail") {
        None | Some(Value::Null | Value::Bool(false)) => DEFAULT_FAILURE_DETAIL.to_string(),
        Some(Value::String(s)) if s.is_empty() => DEFAULT_FAILURE_DETAIL.to_string(),
        Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v.abs() < f64::EPSILON) => {
            DEFAULT_FAILURE_DETAIL.to_string()
        }
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// The analysis endpoint (`POST /analyze`).
///
/// One call is one network request: implementations must not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyzeEndpoint: Send + Sync {
    /// Submit one image and its trimmed text context.
    async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisResult, SubmitError>;
}
