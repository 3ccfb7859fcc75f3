//! Fake models and hand-built multipart bodies.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, header};
use crisislens_axum::{AxumContext, ServerConfig};
use crisislens_core::{ImageUpload, ModelError, VisionModel};

pub use crisislens_core::testing::PNG_1X1;

/// Boundary used by [`MultipartBody`].
pub const BOUNDARY: &str = "crisislens-test-boundary";

/// Model that answers every request with the same reply.
pub struct CannedModel {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl CannedModel {
    pub fn ok(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisionModel for CannedModel {
    fn name(&self) -> &str {
        "canned"
    }

    async fn generate(&self, _prompt: &str, _image: &ImageUpload) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map_err(|message| ModelError::Api {
            status: 500,
            message,
        })
    }
}

/// Context around a shared model handle.
pub fn context(model: Arc<dyn VisionModel>) -> AxumContext {
    AxumContext::with_model(model)
}

/// Config that serves the embedded page and binds an ephemeral port.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// Minimal `multipart/form-data` body builder.
#[derive(Default)]
pub struct MultipartBody {
    bytes: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.bytes.extend_from_slice(data);
        self.bytes.extend_from_slice(b"\r\n");
        self
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.bytes
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.bytes
    }
}

/// `POST /analyze` carrying `body`.
pub fn analyze_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// A well-formed upload: the 1x1 PNG plus `text`.
pub fn png_with_text(text: &str) -> Vec<u8> {
    MultipartBody::new()
        .file("image", "pixel.png", "image/png", PNG_1X1)
        .text("text", text)
        .finish()
}
