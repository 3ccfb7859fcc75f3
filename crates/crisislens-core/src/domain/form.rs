//! Form input types.
//!
//! A [`FormState`] is a snapshot of the form inputs taken at submit time.
//! Nothing here is persisted between submissions.

use std::fmt;

/// An image file selected by the user.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original file name, forwarded as the multipart filename.
    pub file_name: String,
    /// MIME type reported for the file (e.g. `image/png`).
    pub content_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Create an upload from its parts.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Guess the MIME type from a file name extension.
    ///
    /// Falls back to `application/octet-stream` so the server can reject it
    /// with a meaningful message instead of the client guessing wrong.
    pub fn content_type_for(file_name: &str) -> &'static str {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("jpg" | "jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            _ => "application/octet-stream",
        }
    }

    /// Size of the file in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Raw bytes are noise in logs and test failures.
impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Current values of the analysis form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Selected image, if any.
    pub image: Option<ImageUpload>,
    /// Free-form context text exactly as typed.
    pub text: String,
}

impl FormState {
    /// Create a form snapshot.
    pub fn new(image: Option<ImageUpload>, text: impl Into<String>) -> Self {
        Self {
            image,
            text: text.into(),
        }
    }

    /// Context text with surrounding whitespace removed. May be empty.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }
}

/// Payload of a single `POST /analyze` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    /// Sent as the `image` file field.
    pub image: ImageUpload,
    /// Sent as the `text` field, already trimmed.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_text_strips_surrounding_whitespace() {
        let form = FormState::new(None, "  flooded street \n");
        assert_eq!(form.trimmed_text(), "flooded street");
    }

    #[test]
    fn trimmed_text_may_be_empty() {
        let form = FormState::new(None, "   ");
        assert_eq!(form.trimmed_text(), "");
    }

    #[test]
    fn content_type_guess_is_case_insensitive() {
        assert_eq!(ImageUpload::content_type_for("PHOTO.JPG"), "image/jpeg");
        assert_eq!(ImageUpload::content_type_for("a.png"), "image/png");
        assert_eq!(
            ImageUpload::content_type_for("notes"),
            "application/octet-stream"
        );
    }

    #[test]
    fn debug_output_omits_bytes() {
        let upload = ImageUpload::new("a.png", "image/png", vec![1, 2, 3]);
        let rendered = format!("{upload:?}");
        assert!(rendered.contains("len: 3"));
        assert!(!rendered.contains("[1, 2, 3]"));
    }
}
