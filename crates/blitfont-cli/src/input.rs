//! Manifest loading.
//!
//! Reads a font manifest, records where it came from, and resolves the
//! fonts a command should operate on.

use std::path::{Path, PathBuf};

use blitfont_spec::{FontManifest, FontSpec};

/// Errors that can occur while loading a manifest.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing failed.
    JsonParse { message: String },

    /// No font with the requested name.
    UnknownFont { name: String, available: Vec<String> },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::JsonParse { message } => write!(f, "invalid manifest: {}", message),
            InputError::UnknownFont { name, available } => write!(
                f,
                "no font named '{}' in manifest (available: {})",
                name,
                available.join(", ")
            ),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A parsed manifest and its provenance.
#[derive(Debug)]
pub struct LoadedManifest {
    pub manifest: FontManifest,
    /// Directory sprite paths are resolved against.
    pub base_dir: PathBuf,
    /// BLAKE3 hash of the manifest file content (hex string).
    pub source_hash: String,
}

impl LoadedManifest {
    /// Fonts to operate on: the named one, or all of them.
    pub fn select(&self, name: Option<&str>) -> Result<Vec<&FontSpec>, InputError> {
        match name {
            None => Ok(self.manifest.fonts.iter().collect()),
            Some(name) => self
                .manifest
                .font(name)
                .map(|font| vec![font])
                .ok_or_else(|| InputError::UnknownFont {
                    name: name.to_string(),
                    available: self.manifest.fonts.iter().map(|f| f.name.clone()).collect(),
                }),
        }
    }
}

/// Loads a manifest file.
pub fn load_manifest(path: &Path) -> Result<LoadedManifest, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let manifest = FontManifest::from_json(&content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })?;

    let base_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
        .to_path_buf();

    Ok(LoadedManifest {
        manifest,
        base_dir,
        source_hash,
    })
}
