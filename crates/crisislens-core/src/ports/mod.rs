//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.

pub mod analyze_endpoint;
pub mod form_view;
pub mod vision_model;

pub use analyze_endpoint::{AnalyzeEndpoint, DEFAULT_FAILURE_DETAIL, SubmitError};
pub use form_view::{FormView, RecordingView, ViewUpdate};
pub use vision_model::{ModelError, UnavailableModel, VisionModel};
