//! A [`FormView`] that renders the status badge as log-style lines and
//! keeps the result area for printing once the submission settles.

use std::io::Write;

use crisislens_core::{FormView, StatusDisplay};

/// One-line rendering of the status badge, e.g. `[loading] Analyzing...`.
pub fn badge(status: &StatusDisplay) -> String {
    format!("[{}] {}", status.kind, status.message)
}

/// Terminal-backed view.
///
/// Status changes are written to `status_out` as they happen. The result
/// area is only held in memory; [`TerminalView::result`] returns its final
/// value.
pub struct TerminalView<W> {
    status_out: W,
    status: StatusDisplay,
    result: String,
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(status_out: W) -> Self {
        Self {
            status_out,
            status: StatusDisplay::default(),
            result: String::new(),
        }
    }

    pub const fn status(&self) -> &StatusDisplay {
        &self.status
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn into_writer(self) -> W {
        self.status_out
    }
}

impl<W: Write + Send> FormView for TerminalView<W> {
    fn set_status(&mut self, status: StatusDisplay) {
        if let Err(e) = writeln!(self.status_out, "{}", badge(&status)) {
            tracing::debug!(error = %e, "failed to write status line");
        }
        self.status = status;
    }

    fn set_result(&mut self, text: String) {
        self.result = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crisislens_core::StatusKind;

    #[test]
    fn badge_shows_kind_and_message() {
        assert_eq!(badge(&StatusDisplay::loading()), "[loading] Analyzing...");
        assert_eq!(badge(&StatusDisplay::error("Error")), "[error] Error");
    }

    #[test]
    fn status_lines_stream_and_result_is_kept() {
        let mut view = TerminalView::new(Vec::new());
        view.set_status(StatusDisplay::loading());
        view.set_result("placeholder".into());
        view.set_status(StatusDisplay::success());
        view.set_result("{}".into());

        assert_eq!(view.status().kind, StatusKind::Success);
        assert_eq!(view.result(), "{}");
        let lines = String::from_utf8(view.into_writer()).unwrap();
        assert_eq!(lines, "[loading] Analyzing...\n[success] Analysis ready\n");
    }
}
