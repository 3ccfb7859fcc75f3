//! Server-side analysis: validate the upload, prompt the vision model and
//! recover a JSON report from its output.

use std::borrow::Cow;
use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, ImageReader};
use thiserror::Error;

use crate::domain::{
    AnalysisResult, INVALID_MODEL_JSON, ImageUpload, build_prompt, parse_model_json,
};
use crate::ports::{ModelError, VisionModel};

/// Content types the analysis accepts.
pub const SUPPORTED_CONTENT_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Reasons an analysis request fails.
///
/// Adapters map these to transport errors; `Display` is the user-facing detail.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No usable model is configured.
    #[error("{0}")]
    Unavailable(String),

    /// Content type outside [`SUPPORTED_CONTENT_TYPES`].
    #[error("Only JPEG and PNG images are supported.")]
    UnsupportedImageType(String),

    /// Bytes could not be read as an image.
    #[error("Invalid image file.")]
    InvalidImage(String),

    /// The model call failed.
    #[error("{0}")]
    Model(ModelError),

    /// The model answered with something that is not a JSON object.
    #[error("{INVALID_MODEL_JSON}")]
    InvalidModelOutput,
}

impl AnalysisError {
    /// Whether the caller sent a bad request (as opposed to a server fault).
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::UnsupportedImageType(_) | Self::InvalidImage(_))
    }
}

impl From<ModelError> for AnalysisError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Unavailable(reason) => Self::Unavailable(reason),
            other => Self::Model(other),
        }
    }
}

/// Runs analyses against a [`VisionModel`].
#[derive(Clone)]
pub struct AnalysisService {
    model: Arc<dyn VisionModel>,
}

impl AnalysisService {
    pub fn new(model: Arc<dyn VisionModel>) -> Self {
        Self { model }
    }

    /// Name of the configured model, for diagnostics.
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Reason the service cannot analyze anything, if any.
    pub fn unavailable_reason(&self) -> Option<&str> {
        self.model.unavailable_reason()
    }

    /// Analyze one image with its text context.
    pub async fn analyze(
        &self,
        image: &ImageUpload,
        text: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        if let Some(reason) = self.model.unavailable_reason() {
            return Err(AnalysisError::Unavailable(reason.to_string()));
        }

        validate_content_type(&image.content_type)?;
        let probed = probe_image(&image.bytes)?;
        tracing::debug!(
            file_name = %image.file_name,
            format = ?probed.format,
            width = probed.width,
            height = probed.height,
            model = self.model.name(),
            "image accepted for analysis"
        );

        // The model gets the type found in the bytes, not the declared one.
        let detected = probed.format.to_mime_type();
        let image = if detected == image.content_type {
            Cow::Borrowed(image)
        } else {
            tracing::debug!(
                declared = %image.content_type,
                detected,
                "declared content type does not match image data"
            );
            Cow::Owned(ImageUpload {
                content_type: detected.to_string(),
                ..image.clone()
            })
        };

        let prompt = build_prompt(text);
        let raw = self.model.generate(&prompt, &image).await?;

        parse_model_json(&raw).map(AnalysisResult::new).ok_or_else(|| {
            tracing::warn!(output_len = raw.len(), "model output contained no JSON object");
            AnalysisError::InvalidModelOutput
        })
    }
}

fn validate_content_type(content_type: &str) -> Result<(), AnalysisError> {
    if SUPPORTED_CONTENT_TYPES.contains(&content_type) {
        Ok(())
    } else {
        Err(AnalysisError::UnsupportedImageType(content_type.to_string()))
    }
}

/// Format and size read from an image header.
struct ProbedImage {
    format: ImageFormat,
    width: u32,
    height: u32,
}

/// Read the image header without decoding pixel data.
fn probe_image(bytes: &[u8]) -> Result<ProbedImage, AnalysisError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| AnalysisError::InvalidImage(e.to_string()))?;
    let format = reader
        .format()
        .ok_or_else(|| AnalysisError::InvalidImage("unrecognized image format".to_string()))?;
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| AnalysisError::InvalidImage(e.to_string()))?;
    Ok(ProbedImage {
        format,
        width,
        height,
    })
}
