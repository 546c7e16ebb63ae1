//! Builder pattern for creating reports.

use super::{FontStats, OutputResult, Report, ReportError, ReportWarning, REPORT_VERSION};
use crate::error::{ValidationError, ValidationWarning};

/// Builder for creating reports ergonomically.
pub struct ReportBuilder {
    font: String,
    spec_hash: String,
    ok: bool,
    errors: Vec<ReportError>,
    warnings: Vec<ReportWarning>,
    stats: Option<FontStats>,
    outputs: Vec<OutputResult>,
    duration_ms: u64,
    tool_version: String,
}

impl ReportBuilder {
    /// Creates a new report builder.
    ///
    /// # Arguments
    ///
    /// * `font` - Name of the font the report describes
    /// * `spec_hash` - Hex-encoded BLAKE3 hash of the font spec
    /// * `tool_version` - Tool identifier and version
    pub fn new(font: impl Into<String>, spec_hash: String, tool_version: String) -> Self {
        Self {
            font: font.into(),
            spec_hash,
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: None,
            outputs: Vec::new(),
            duration_ms: 0,
            tool_version,
        }
    }

    /// Sets the ok status.
    pub fn ok(mut self, ok: bool) -> Self {
        self.ok = ok;
        self
    }

    /// Adds an error to the report.
    pub fn error(mut self, error: ReportError) -> Self {
        self.errors.push(error);
        self.ok = false;
        self
    }

    /// Adds errors from ValidationErrors.
    pub fn validation_errors(mut self, errors: &[ValidationError]) -> Self {
        if !errors.is_empty() {
            self.ok = false;
            self.errors
                .extend(errors.iter().map(ReportError::from_validation_error));
        }
        self
    }

    /// Adds warnings from ValidationWarnings.
    pub fn validation_warnings(mut self, warnings: &[ValidationWarning]) -> Self {
        self.warnings
            .extend(warnings.iter().map(ReportWarning::from_validation_warning));
        self
    }

    /// Sets the compile statistics.
    pub fn stats(mut self, stats: FontStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Adds an output to the report.
    pub fn output(mut self, output: OutputResult) -> Self {
        self.outputs.push(output);
        self
    }

    /// Sets the execution duration in milliseconds.
    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = ms;
        self
    }

    /// Builds the final report.
    pub fn build(self) -> Report {
        Report {
            report_version: REPORT_VERSION,
            font: self.font,
            spec_hash: self.spec_hash,
            ok: self.ok,
            errors: self.errors,
            warnings: self.warnings,
            stats: self.stats,
            outputs: self.outputs,
            duration_ms: self.duration_ms,
            tool_version: self.tool_version,
        }
    }
}
