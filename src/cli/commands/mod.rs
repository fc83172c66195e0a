pub mod batch;
pub mod chunks;
pub mod decode;

use crate::config::{AppConfig, OutputFormat};
use crate::decoder::DecodeReport;
use crate::errors::AppResult;

/// Render a report in the requested format, falling back to configuration
pub(crate) fn render_report(
    report: &DecodeReport,
    format: Option<OutputFormat>,
    config: &AppConfig,
    pretty: bool,
) -> AppResult<String> {
    match format.unwrap_or(config.output.format) {
        OutputFormat::Json => Ok(report.to_json(pretty)?),
        OutputFormat::Text => Ok(report.to_text()),
    }
}
