use anyhow::{Context, Result};
use blitfont_spec::{Report, ReportBuilder, ValidationResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Tool identifier recorded in reports.
pub(crate) fn tool_version() -> String {
    format!("blitfont-cli v{}", env!("CARGO_PKG_VERSION"))
}

pub(crate) fn apply_validation_messages(
    builder: ReportBuilder,
    validation: &ValidationResult,
) -> ReportBuilder {
    builder
        .validation_errors(&validation.errors)
        .validation_warnings(&validation.warnings)
}

/// `<out_dir>/<font>.report.json`, font name lowercased.
pub(crate) fn report_path(out_dir: &Path, font_name: &str) -> PathBuf {
    out_dir.join(format!("{}.report.json", font_name.to_lowercase()))
}

pub(crate) fn write_report(report: &Report, path: &Path) -> Result<()> {
    let json = report.to_json_pretty().context("Failed to serialize report")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write report to: {}", path.display()))?;
    Ok(())
}
