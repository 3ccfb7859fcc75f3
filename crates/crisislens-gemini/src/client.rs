//! Gemini REST client implementing the vision model port.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use crisislens_core::{ImageUpload, ModelError, VisionModel};

use crate::config::GeminiConfig;
use crate::wire::{
    Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, RequestPart,
};

/// Vision model backed by the Gemini `generateContent` API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    fn request_body<'a>(
        &self,
        prompt: &'a str,
        image: &'a ImageUpload,
    ) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    RequestPart::Text { text: prompt },
                    RequestPart::InlineData {
                        inline_data: InlineData {
                            mime_type: &image.content_type,
                            data: STANDARD.encode(&image.bytes),
                        },
                    },
                ],
            }],
            generation_config: self.config.json_response.then_some(GenerationConfig {
                response_mime_type: "application/json",
            }),
        }
    }
}

/// Pull `error.message` out of an API error body, else use the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[async_trait]
impl VisionModel for GeminiClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, prompt: &str, image: &ImageUpload) -> Result<String, ModelError> {
        let url = self.config.generate_url();
        let body = self.request_body(prompt, image);

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            image_bytes = image.len(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Gemini API returned an error");
            return Err(ModelError::Api {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            tracing::warn!(block_reason = reason, "prompt blocked by Gemini");
        }
        if let Some(reason) = parsed
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
        {
            tracing::debug!(finish_reason = reason, "Gemini candidate finished");
        }

        parsed.text().ok_or(ModelError::EmptyResponse)
    }
}
