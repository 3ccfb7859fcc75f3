//! reqwest implementation of the analyze endpoint port.

use async_trait::async_trait;
use crisislens_core::{AnalysisResult, AnalyzeEndpoint, AnalyzeRequest, ImageUpload, SubmitError};
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::config::ClientConfig;

/// Submits analysis requests as `multipart/form-data` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAnalyzeClient {
    client: reqwest::Client,
    analyze_url: String,
}

impl HttpAnalyzeClient {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            analyze_url: config.analyze_url(),
        })
    }

    /// URL every request is posted to.
    pub fn analyze_url(&self) -> &str {
        &self.analyze_url
    }
}

/// Build the multipart body: `image` file part and `text` field.
fn build_form(request: AnalyzeRequest) -> Result<Form, SubmitError> {
    let AnalyzeRequest { image, text } = request;
    Ok(Form::new().part("image", image_part(image)?).text("text", text))
}

fn image_part(image: ImageUpload) -> Result<Part, SubmitError> {
    let ImageUpload {
        file_name,
        content_type,
        bytes,
    } = image;
    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(&content_type)
        .map_err(|e| SubmitError::Parse(format!("Invalid content type '{content_type}': {e}")))
}

#[async_trait]
impl AnalyzeEndpoint for HttpAnalyzeClient {
    async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisResult, SubmitError> {
        let form = build_form(request)?;

        let response = self
            .client
            .post(&self.analyze_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SubmitError::network(e.to_string()))?;

        tracing::debug!(
            url = %self.analyze_url,
            status = status.as_u16(),
            body_len = body.len(),
            "analyze response received"
        );

        if !status.is_success() {
            return Err(SubmitError::from_error_body(status.as_u16(), &body));
        }

        serde_json::from_slice::<Value>(&body)
            .map(AnalysisResult::new)
            .map_err(|e| SubmitError::Parse(e.to_string()))
    }
}
