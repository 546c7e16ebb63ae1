//! Inspect command implementation
//!
//! Compiles one font and prints a single glyph's header and an ASCII
//! rendering of its packed pattern.

use anyhow::{Context, Result};
use blitfont_backend::{str_hash, CLUSTER_SEED};
use blitfont_spec::hex::{format_cluster, parse_cluster};
use colored::Colorize;
use std::process::ExitCode;

use super::compile_single;

/// Run the inspect command
///
/// # Arguments
/// * `manifest_path` - Path to the font manifest
/// * `font` - Font to compile
/// * `cluster` - Grapheme cluster to look up
/// * `hex` - Read `cluster` as dash-separated hex scalars (`1f3c4-200d`)
///
/// # Returns
/// Exit code: 0 if the glyph was found, 1 otherwise
pub fn run(manifest_path: &str, font: &str, cluster: &str, hex: bool) -> Result<ExitCode> {
    let text = resolve_cluster(cluster, hex)?;
    let (spec, compiled) = compile_single(manifest_path, font)?;

    let scalars: Vec<char> = text.chars().collect();
    println!("{} {}", "Font:".cyan().bold(), spec.name);
    println!(
        "{} {:?} ({})",
        "Cluster:".cyan().bold(),
        text,
        format_cluster(&scalars)
    );
    println!("{} 0x{:08x}", "Hash:".dimmed(), str_hash(&text, CLUSTER_SEED));

    let offset = match compiled.pattern_offset(&text) {
        Ok(offset) => offset,
        Err(e) => {
            println!("{} {}", "x".red(), e);
            return Ok(ExitCode::from(1));
        }
    };
    let glyph = compiled.glyph(&text)?;

    if let Some(record) = compiled.glyphs.iter().find(|g| g.offset == offset) {
        println!("{} {} at {}", "Label:".dimmed(), record.label, record.location);
    }
    println!("{} {}", "Offset:".dimmed(), offset);
    println!(
        "{} {}x{}, y-offset {} (0x{:08x})",
        "Header:".dimmed(),
        glyph.width(),
        glyph.height(),
        glyph.y_offset(),
        glyph.header.to_word()
    );
    println!("{} {}", "Data words:".dimmed(), glyph.data.len());
    println!();
    print!("{}", glyph.to_matrix().to_text());

    Ok(ExitCode::SUCCESS)
}

fn resolve_cluster(cluster: &str, hex: bool) -> Result<String> {
    if hex {
        let scalars = parse_cluster(cluster)
            .with_context(|| format!("Invalid hex cluster: {}", cluster))?;
        Ok(scalars.into_iter().collect())
    } else {
        Ok(cluster.to_string())
    }
}
