//! Command implementations for the blitfont CLI

pub mod compile;
pub mod inspect;
pub mod json_output;
pub mod preview;
pub mod reporting;
pub mod validate;

use anyhow::{bail, Context, Result};
use blitfont_backend::{compile_font_spec, CompiledFont};
use blitfont_spec::{validate_font_spec, BlockTable, FontSpec};
use std::path::Path;

use crate::input::load_manifest;

/// Loads a manifest and compiles the named font from it.
pub(crate) fn compile_single(manifest_path: &str, font: &str) -> Result<(FontSpec, CompiledFont)> {
    let loaded = load_manifest(Path::new(manifest_path))
        .with_context(|| format!("Failed to load manifest: {}", manifest_path))?;
    let spec = loaded
        .select(Some(font))?
        .into_iter()
        .next()
        .cloned()
        .with_context(|| format!("font not found: {}", font))?;

    let table = BlockTable::known().context("Failed to load the Unicode block table")?;
    let validation = validate_font_spec(&spec, &table);
    if let Some(err) = validation.errors.first() {
        bail!(
            "font {} is invalid: [{}] {} ({} error(s))",
            spec.name,
            err.code,
            err.message,
            validation.errors.len()
        );
    }

    let compiled = compile_font_spec(&spec, &table, &loaded.base_dir)
        .with_context(|| format!("Failed to compile font {}", spec.name))?;
    Ok((spec, compiled))
}
