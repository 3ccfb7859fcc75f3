//! Status badge state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown when the form is submitted without an image.
pub const MISSING_IMAGE_MESSAGE: &str = "Please upload an image.";

/// Badge message while a request is in flight.
pub const LOADING_MESSAGE: &str = "Analyzing...";

/// Badge message after a successful analysis.
pub const SUCCESS_MESSAGE: &str = "Analysis ready";

/// Badge message after a failed analysis.
pub const ERROR_MESSAGE: &str = "Error";

/// Result area text while a request is in flight.
pub const LOADING_PLACEHOLDER: &str = "Analyzing crisis context with Gemini 3...";

/// Phase of the current (or last) submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl StatusKind {
    /// Lowercase name used in CSS classes and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the status badge currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDisplay {
    pub message: String,
    pub kind: StatusKind,
}

impl StatusDisplay {
    pub fn new(message: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn loading() -> Self {
        Self::new(LOADING_MESSAGE, StatusKind::Loading)
    }

    pub fn success() -> Self {
        Self::new(SUCCESS_MESSAGE, StatusKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, StatusKind::Error)
    }

    /// Class attribute for the badge element, e.g. `status status-error`.
    pub fn css_class(&self) -> String {
        format!("status status-{}", self.kind)
    }
}
