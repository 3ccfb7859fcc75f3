//! Domain types for CrisisLens.
//!
//! Pure data: no I/O, no adapter types.

pub mod analysis;
pub mod form;
pub mod prompt;
pub mod status;

pub use analysis::{AnalysisResult, CrisisReport, SeverityLevel};
pub use form::{AnalyzeRequest, FormState, ImageUpload};
pub use prompt::{INVALID_MODEL_JSON, SYSTEM_PROMPT, build_prompt, parse_model_json};
pub use status::{
    ERROR_MESSAGE, LOADING_MESSAGE, LOADING_PLACEHOLDER, MISSING_IMAGE_MESSAGE, SUCCESS_MESSAGE,
    StatusDisplay, StatusKind,
};
