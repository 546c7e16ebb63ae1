//! blitfont Font Spec Library
//!
//! This crate provides the configuration side of blitfont: sprite sheet
//! geometry, character maps, the Unicode block table, trim policies, font
//! manifests, their validation, and compile reports. It has no knowledge of
//! pixels; the `blitfont-backend` crate turns these specs into compiled fonts.
//!
//! # Example
//!
//! ```
//! use blitfont_spec::{BlockTable, FontSpec};
//! use blitfont_spec::validation::validate_font_spec;
//!
//! let table = BlockTable::known().unwrap();
//! let spec = FontSpec::preset("regular").unwrap();
//!
//! let result = validate_font_spec(&spec, &table);
//! assert!(result.is_ok());
//!
//! let latin = spec.supported_blocks(&table).unwrap();
//! assert!(latin.contains('é' as u32));
//! assert!(!latin.contains(0x1F600));
//! ```
//!
//! # Modules
//!
//! - [`blocks`]: Unicode block table used for classification and lookup pre-filtering
//! - [`charmap`]: Embedded character maps
//! - [`cluster`]: Character map entries (clusters and named icons)
//! - [`error`]: Error and warning types for validation
//! - [`font`]: Font specs and manifests
//! - [`hash`]: Canonical hashing
//! - [`report`]: Compile reports
//! - [`sheet`]: Sprite sheet geometry
//! - [`trim`]: Trim limits and policies
//! - [`validation`]: Font spec validation

pub mod blocks;
pub mod charmap;
pub mod cluster;
pub mod error;
pub mod font;
pub mod hash;
pub mod hex;
pub mod report;
pub mod sheet;
pub mod trim;
pub mod validation;

// Re-export commonly used types at the crate root
pub use blocks::{BlockTable, UnicodeBlock};
pub use charmap::{builtin_charmap, BUILTIN_CHARMAPS};
pub use cluster::{CharacterEntry, ClusterOrLabel};
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use font::{CharMap, FontManifest, FontSpec, SYS_LATIN_BLOCKS};
pub use hash::canonical_font_hash;
pub use report::{FontStats, OutputResult, Report, ReportBuilder, ReportError, ReportWarning};
pub use sheet::{GlyphLocation, SpriteSheetSpec};
pub use trim::{TrimLimits, TrimPolicy, TrimRule};
pub use validation::{is_valid_font_name, validate_font_spec};
