//! JSON output types for machine-readable CLI output.
//!
//! These back the `--json` flag on `validate` and `compile`, so scripts and
//! build systems can parse results without scraping colored text.

use blitfont_spec::{
    BackendError, FontStats, OutputResult, ValidationError, ValidationWarning,
};
use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// These codes are stable. Validation and backend errors pass their own
/// codes through (`E001`, `GLYPH_003`, ...).
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Manifest JSON could not be parsed
    pub const JSON_PARSE: &str = "CLI_002";
    /// No font with the requested name
    pub const UNKNOWN_FONT: &str = "CLI_003";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_004";
    /// Output rendering failed
    pub const EMIT: &str = "CLI_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Validation result for one font.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FontValidateResult {
    pub font: String,
    pub ok: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
}

/// Output of `validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateOutput {
    /// Whether every font is valid
    pub success: bool,
    /// Manifest-level errors (unreadable or unparseable manifest)
    pub errors: Vec<JsonError>,
    pub fonts: Vec<FontValidateResult>,
    /// BLAKE3 hash of the manifest source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Compile result for one font.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FontCompileResult {
    pub font: String,
    pub ok: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    pub outputs: Vec<OutputResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<FontStats>,
    /// Path of the font's report file
    pub report: String,
}

/// Output of `compile --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompileOutput {
    /// Whether every font compiled
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub fonts: Vec<FontCompileResult>,
}

/// Converts a validation error to JSON format.
pub fn validation_error_to_json(err: &ValidationError) -> JsonError {
    JsonError {
        code: err.code.to_string(),
        message: err.message.clone(),
        path: err.path.clone(),
        file: None,
    }
}

/// Converts a validation warning to JSON format.
pub fn validation_warning_to_json(warn: &ValidationWarning) -> JsonWarning {
    JsonWarning {
        code: warn.code.to_string(),
        message: warn.message.clone(),
        path: warn.path.clone(),
    }
}

/// Converts a backend error to JSON format.
pub fn backend_error_to_json<E: BackendError + ?Sized>(err: &E) -> JsonError {
    JsonError::new(err.code(), err.message())
}

/// Converts a manifest loading error to JSON format.
pub fn input_error_to_json(err: &InputError, file: &str) -> JsonError {
    let code = match err {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        InputError::UnknownFont { .. } => error_codes::UNKNOWN_FONT,
    };
    JsonError::new(code, err.to_string()).with_file(file)
}

/// Prints a JSON document to stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
