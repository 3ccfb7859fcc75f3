//! Analyze command handler.
//!
//! Drives [`SubmissionHandler`] against a running server, exactly like the
//! browser form, and prints the final result area to stdout.

use std::path::Path;
use std::sync::Arc;

use crisislens_client::{ClientConfig, HttpAnalyzeClient};
use crisislens_core::{
    FormState, ImageUpload, RawSettings, Settings, SubmissionHandler, SubmitOutcome,
};

use crate::commands::AnalyzeArgs;
use crate::error::CliError;
use crate::presentation::TerminalView;

/// Read an image from disk, guessing its content type from the extension.
pub fn load_upload(path: &Path) -> Result<ImageUpload, CliError> {
    let bytes = std::fs::read(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content_type = ImageUpload::content_type_for(&file_name);
    Ok(ImageUpload::new(file_name, content_type, bytes))
}

/// Merge `--server` into the environment values and check the final URL.
pub fn resolve_settings(
    mut raw: RawSettings,
    server: Option<String>,
) -> Result<Settings, CliError> {
    if let Some(server) = server {
        raw.server_url = Some(server);
    }
    Ok(raw.into_client_settings()?)
}

/// Execute the analyze command.
///
/// Returns an error when the final status is `Error`, so the process exits
/// non-zero.
pub async fn execute(raw: RawSettings, args: AnalyzeArgs) -> Result<(), CliError> {
    let settings = resolve_settings(raw, args.server)?;
    let form = FormState {
        image: Some(load_upload(&args.image)?),
        text: args.text,
    };

    let config = ClientConfig::new().with_base_url(settings.server_url);
    let client = HttpAnalyzeClient::new(&config)
        .map_err(|e| CliError::Config(format!("failed to build HTTP client: {e}")))?;
    tracing::debug!(url = %client.analyze_url(), "submitting analysis");

    let handler = SubmissionHandler::new(Arc::new(client));
    let mut view = TerminalView::new(std::io::stderr());
    let outcome = handler.submit(&form, &mut view).await;

    println!("{}", view.result());
    match outcome {
        SubmitOutcome::Success(_) => Ok(()),
        SubmitOutcome::Failed(err) => Err(err.into()),
        SubmitOutcome::MissingImage | SubmitOutcome::Busy => {
            Err(CliError::Analysis(view.status().message.clone()))
        }
    }
}
