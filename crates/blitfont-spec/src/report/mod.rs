//! Compile reports.
//!
//! Every `blitfont compile` run writes one report per font describing what
//! was compiled, from which spec, and what came out, so reproducibility can be
//! checked by comparing digests.

mod builder;
mod error;

pub use builder::ReportBuilder;
pub use error::{ReportError, ReportWarning};

use serde::{Deserialize, Serialize};

/// Report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Summary of one compiled font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontStats {
    /// Glyphs packed into the data buffer.
    pub glyphs: usize,
    /// Character map entries skipped because their block is not included.
    pub skipped: usize,
    /// Length of the data buffer in 32-bit words.
    pub data_words: usize,
    /// BLAKE3 digest over data, hashes, and offsets.
    pub digest: String,
}

/// A file written by the compile run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputResult {
    /// Output format ("rust", "json", "png").
    pub format: String,
    /// Path of the written file.
    pub path: String,
}

impl OutputResult {
    /// Creates a new output entry.
    pub fn new(format: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            path: path.into(),
        }
    }
}

/// A complete report for one font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version.
    pub report_version: u32,
    /// Font name.
    pub font: String,
    /// Hex-encoded BLAKE3 hash of the font spec.
    pub spec_hash: String,
    /// Whether the operation succeeded without errors.
    pub ok: bool,
    /// Errors that occurred.
    pub errors: Vec<ReportError>,
    /// Warnings raised.
    pub warnings: Vec<ReportWarning>,
    /// Compile statistics, present when compilation succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<FontStats>,
    /// Files written.
    pub outputs: Vec<OutputResult>,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
    /// Tool name and version.
    pub tool_version: String,
}

impl Report {
    /// Creates a builder for a report.
    pub fn builder(
        font: impl Into<String>,
        spec_hash: String,
        tool_version: String,
    ) -> ReportBuilder {
        ReportBuilder::new(font, spec_hash, tool_version)
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a report from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
