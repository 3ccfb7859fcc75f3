//! Port for the two output regions of the form: the status badge and the
//! result area.

use crate::domain::StatusDisplay;

/// Sink for form output.
///
/// Both methods overwrite the previous value.
pub trait FormView: Send {
    fn set_status(&mut self, status: StatusDisplay);
    fn set_result(&mut self, text: String);
}

/// One mutation applied to a [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    Status(StatusDisplay),
    Result(String),
}

/// In-memory view that keeps the current state and every update in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    status: StatusDisplay,
    result: String,
    updates: Vec<ViewUpdate>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn status(&self) -> &StatusDisplay {
        &self.status
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    /// Every update since creation, oldest first.
    pub fn updates(&self) -> &[ViewUpdate] {
        &self.updates
    }
}

impl FormView for RecordingView {
    fn set_status(&mut self, status: StatusDisplay) {
        self.updates.push(ViewUpdate::Status(status.clone()));
        self.status = status;
    }

    fn set_result(&mut self, text: String) {
        self.updates.push(ViewUpdate::Result(text.clone()));
        self.result = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatusKind;

    #[test]
    fn recording_view_tracks_latest_and_history() {
        let mut view = RecordingView::new();
        view.set_status(StatusDisplay::loading());
        view.set_result("first".to_string());
        view.set_result("second".to_string());

        assert_eq!(view.status().kind, StatusKind::Loading);
        assert_eq!(view.result(), "second");
        assert_eq!(view.updates().len(), 3);
    }
}
