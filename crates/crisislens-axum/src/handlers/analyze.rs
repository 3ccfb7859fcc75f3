//! `POST /analyze` - multipart upload in, crisis report JSON out.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use crisislens_core::{AnalysisResult, ImageUpload};

use crate::error::HttpError;
use crate::state::AppState;

/// Multipart field carrying the image file.
pub const IMAGE_FIELD: &str = "image";

/// Multipart field carrying the text context.
pub const TEXT_FIELD: &str = "text";

/// Fields of an analyze upload once fully read.
#[derive(Debug)]
struct AnalyzeForm {
    image: ImageUpload,
    text: String,
}

/// Analyze an uploaded image with its text context.
pub async fn analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResult>, HttpError> {
    let mut multipart =
        multipart.map_err(|rejection| HttpError::Unprocessable(rejection.body_text()))?;
    let form = read_form(&mut multipart).await?;

    tracing::info!(
        file_name = %form.image.file_name,
        content_type = %form.image.content_type,
        bytes = form.image.len(),
        "analysis requested"
    );

    let result = state.analysis.analyze(&form.image, &form.text).await?;
    Ok(Json(result))
}

async fn read_form(multipart: &mut Multipart) -> Result<AnalyzeForm, HttpError> {
    let mut image = None;
    let mut text = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(IMAGE_FIELD) => {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_owned();
                let bytes = field.bytes().await?;
                image = Some(ImageUpload::new(file_name, content_type, bytes.to_vec()));
            }
            Some(TEXT_FIELD) => text = Some(field.text().await?),
            other => tracing::debug!(field = ?other, "ignoring unknown multipart field"),
        }
    }

    match (image, text) {
        (Some(image), Some(text)) => Ok(AnalyzeForm { image, text }),
        (image, text) => {
            let missing: Vec<&str> = [
                image.is_none().then_some(IMAGE_FIELD),
                text.is_none().then_some(TEXT_FIELD),
            ]
            .into_iter()
            .flatten()
            .collect();
            Err(HttpError::Unprocessable(format!(
                "Field required: {}",
                missing.join(", ")
            )))
        }
    }
}
