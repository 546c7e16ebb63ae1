//! Error types for font spec validation and processing.

use thiserror::Error;

/// Error codes for font spec validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Cell size is zero
    ZeroCellSize,
    /// E002: Column count is zero
    ZeroColumns,
    /// E003: Font name is not a valid identifier
    InvalidFontName,
    /// E004: Font references a block missing from the block table
    UnknownBlockName,
    /// E005: Character map entry lies outside the grid columns
    ColumnOutOfRange,
    /// E006: Leading scalar of a cluster belongs to no known block
    UnclassifiedCodepoint,
    /// E007: The same cluster appears twice in the character map
    DuplicateCluster,
    /// E008: Character map has no entries
    EmptyCharMap,
    /// E009: Trim rule refers to a column outside the grid
    TrimRuleOutOfRange,
    /// E010: Named built-in character map does not exist
    UnknownCharMap,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::ZeroCellSize => "E001",
            ErrorCode::ZeroColumns => "E002",
            ErrorCode::InvalidFontName => "E003",
            ErrorCode::UnknownBlockName => "E004",
            ErrorCode::ColumnOutOfRange => "E005",
            ErrorCode::UnclassifiedCodepoint => "E006",
            ErrorCode::DuplicateCluster => "E007",
            ErrorCode::EmptyCharMap => "E008",
            ErrorCode::TrimRuleOutOfRange => "E009",
            ErrorCode::UnknownCharMap => "E010",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for font spec validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Missing legal notice for the glyph artwork
    MissingLegal,
    /// W002: Entry belongs to a block the font does not include
    ExcludedBlock,
    /// W003: Two trim rules match the same grid cell
    OverlappingTrimRules,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::MissingLegal => "W001",
            WarningCode::ExcludedBlock => "W002",
            WarningCode::OverlappingTrimRules => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "charmap\[12\].col").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for spec operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A hex cluster or codepoint string could not be parsed.
    #[error("invalid hex scalar sequence {value:?}: {reason}")]
    InvalidHex {
        /// The offending text.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// No built-in character map with this name.
    #[error(
        "unknown built-in character map: {0} (available: {})",
        crate::charmap::BUILTIN_CHARMAPS.join(", ")
    )]
    UnknownCharMap(String),

    /// A font references a block that the block table does not define.
    #[error("unknown Unicode block: {0}")]
    UnknownBlock(String),

    /// No built-in font preset with this name.
    #[error("unknown font preset: {0}")]
    UnknownPreset(String),
}

/// Result of font spec validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for backend errors.
///
/// Gives every backend failure a stable code (e.g. "GLYPH_001") and a
/// category, so the CLI and reports can surface them uniformly.
pub trait BackendError: std::error::Error {
    /// Stable error code for reporting.
    fn code(&self) -> &'static str;

    /// Human-readable message; defaults to `Display`.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category, such as "config" or "decode".
    fn category(&self) -> &'static str;
}
