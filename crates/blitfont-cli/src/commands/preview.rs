//! Preview command implementation
//!
//! Renders every glyph of a compiled font into a grayscale PNG atlas.

use anyhow::{Context, Result};
use blitfont_backend::png::{write_grayscale_to_vec_with_hash, PngConfig};
use blitfont_backend::{render_preview, PreviewOptions};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::compile_single;

/// Run the preview command
///
/// # Arguments
/// * `manifest_path` - Path to the font manifest
/// * `font` - Font to render
/// * `out` - Output PNG path
/// * `columns` - Glyphs per atlas row
pub fn run(manifest_path: &str, font: &str, out: &str, columns: u32) -> Result<ExitCode> {
    println!("{} {} ({})", "Preview:".cyan().bold(), font, manifest_path);

    let (spec, compiled) = compile_single(manifest_path, font)?;
    let options = PreviewOptions {
        columns,
        ..PreviewOptions::default()
    };
    let canvas = render_preview(&compiled, options);

    let (bytes, hash) = write_grayscale_to_vec_with_hash(&canvas, &PngConfig::default())
        .context("Failed to encode preview")?;

    let out = Path::new(out);
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(out, &bytes)
        .with_context(|| format!("Failed to write preview: {}", out.display()))?;

    println!(
        "  {} {} glyph(s), {}x{} px",
        spec.name,
        compiled.glyphs.len(),
        canvas.width,
        canvas.height
    );
    println!("  {} {}", "->".green(), out.display());
    println!("  {} {}", "BLAKE3:".dimmed(), hash);

    Ok(ExitCode::SUCCESS)
}
