//! Form submission handler.
//!
//! Mirrors the form's submit listener: validate, show loading state, send one
//! request, then render either the pretty-printed result or the error.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::{
    AnalysisResult, AnalyzeRequest, ERROR_MESSAGE, FormState, LOADING_PLACEHOLDER,
    MISSING_IMAGE_MESSAGE, StatusDisplay,
};
use crate::ports::{AnalyzeEndpoint, FormView, SubmitError};

/// How a call to [`SubmissionHandler::submit`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// No image selected; nothing was sent.
    MissingImage,
    /// Another submission was still in flight; nothing was sent or rendered.
    Busy,
    /// The endpoint returned a result, now shown in the view.
    Success(AnalysisResult),
    /// The request failed; the error is shown in the view.
    Failed(SubmitError),
}

impl SubmitOutcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Handles submissions of the analysis form.
///
/// Holds no per-submission state apart from the in-flight flag, so one
/// handler lives for the whole session.
pub struct SubmissionHandler {
    endpoint: Arc<dyn AnalyzeEndpoint>,
    in_flight: AtomicBool,
}

impl SubmissionHandler {
    pub fn new(endpoint: Arc<dyn AnalyzeEndpoint>) -> Self {
        Self {
            endpoint,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a submission is currently awaiting its response.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit the form and render the outcome into `view`.
    pub async fn submit(&self, form: &FormState, view: &mut dyn FormView) -> SubmitOutcome {
        let Some(image) = form.image.as_ref() else {
            view.set_status(StatusDisplay::error(MISSING_IMAGE_MESSAGE));
            return SubmitOutcome::MissingImage;
        };

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!("ignoring submit while a request is in flight");
            return SubmitOutcome::Busy;
        };

        view.set_status(StatusDisplay::loading());
        view.set_result(LOADING_PLACEHOLDER.to_string());

        let request = AnalyzeRequest {
            image: image.clone(),
            text: form.trimmed_text().to_string(),
        };
        tracing::debug!(
            file_name = %request.image.file_name,
            bytes = request.image.len(),
            text_len = request.text.len(),
            "submitting analysis request"
        );

        match self.endpoint.analyze(request).await {
            Ok(result) => {
                view.set_result(result.pretty());
                view.set_status(StatusDisplay::success());
                SubmitOutcome::Success(result)
            }
            Err(err) => {
                tracing::debug!(error = %err, status = ?err.status(), "analysis request failed");
                view.set_result(format!("Error: {err}"));
                view.set_status(StatusDisplay::error(ERROR_MESSAGE));
                SubmitOutcome::Failed(err)
            }
        }
    }
}

/// Clears the in-flight flag when the submission finishes, even on panic.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
