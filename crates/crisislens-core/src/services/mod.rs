//! Application services built on the ports.

pub mod analysis;
pub mod submission;

pub use analysis::{AnalysisError, AnalysisService, SUPPORTED_CONTENT_TYPES};
pub use submission::{SubmissionHandler, SubmitOutcome};
