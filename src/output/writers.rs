use std::path::Path;

use tokio::io::AsyncWriteExt;
use tracing::info;

use super::render::{render_json, render_text};
use crate::args::OutputFormat;
use crate::error::{AppError, AppResult, OutputError};
use crate::reports::UsageReports;

/// Renders the reports and writes them to `output`, or stdout when unset.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub async fn write_reports(
    reports: &UsageReports,
    format: OutputFormat,
    output: Option<&str>,
) -> AppResult<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(reports)?,
        OutputFormat::Json => render_json(reports)?,
    };

    match output {
        Some(path) => {
            let path = Path::new(path);
            tokio::fs::write(path, rendered.as_bytes())
                .await
                .map_err(|err| {
                    AppError::output(OutputError::WriteFile {
                        path: path.to_path_buf(),
                        source: err,
                    })
                })?;
            info!(
                "Wrote {} reports to '{}'",
                format.as_str(),
                path.display()
            );
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(rendered.as_bytes())
                .await
                .map_err(|err| AppError::output(OutputError::WriteStdout { source: err }))?;
            stdout
                .flush()
                .await
                .map_err(|err| AppError::output(OutputError::WriteStdout { source: err }))?;
        }
    }
    Ok(())
}
