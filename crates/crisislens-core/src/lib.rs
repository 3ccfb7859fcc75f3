//! Core domain types, ports and services for CrisisLens.
//!
//! - [`domain`]: form input, status badge, analysis result, prompt handling
//! - [`ports`]: traits implemented by the HTTP client, the model adapter and views
//! - [`services`]: the form submission handler and the server-side analysis
//! - [`settings`]: environment-driven configuration
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use domain::{
    AnalysisResult, AnalyzeRequest, CrisisReport, FormState, ImageUpload, SeverityLevel,
    StatusDisplay, StatusKind,
};
pub use ports::{
    AnalyzeEndpoint, DEFAULT_FAILURE_DETAIL, FormView, ModelError, RecordingView, SubmitError,
    UnavailableModel, ViewUpdate, VisionModel,
};
pub use services::{AnalysisError, AnalysisService, SubmissionHandler, SubmitOutcome};
pub use settings::{
    DEFAULT_GEMINI_MODEL, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SERVER_URL, RawSettings, Settings,
    SettingsError,
};
