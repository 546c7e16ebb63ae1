//! Compiled font emission.
//!
//! The Rust format is a self-contained font module. It expects its parent
//! module to provide `murmur3(&str, u32) -> u32` (the cluster hash) and a
//! `GlyphNotFound` type, so several generated fonts can share one runtime.

use std::fmt::Write as _;

use anyhow::{ensure, Result};
use blitfont_backend::CompiledFont;
use blitfont_spec::{BlockTable, FontSpec};
use serde::Serialize;

/// Words of pattern data per line in the `DATA` array.
const WORDS_PER_LINE: usize = 8;

/// Output formats for compiled fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitFormat {
    Rust,
    Json,
}

impl EmitFormat {
    /// Parses a format name as accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rust" => Some(EmitFormat::Rust),
            "json" => Some(EmitFormat::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmitFormat::Rust => "rust",
            EmitFormat::Json => "json",
        }
    }

    /// Output file name for a font.
    pub fn file_name(&self, spec: &FontSpec) -> String {
        match self {
            EmitFormat::Rust => spec.rust_file_name(),
            EmitFormat::Json => format!("{}.json", spec.name.to_lowercase()),
        }
    }

    /// Renders a compiled font in this format.
    pub fn render(&self, font: &CompiledFont, spec: &FontSpec) -> Result<String> {
        match self {
            EmitFormat::Rust => rust_source(font, spec),
            EmitFormat::Json => json_source(font),
        }
    }
}

/// Renders the generated Rust module for a font.
pub fn rust_source(font: &CompiledFont, spec: &FontSpec) -> Result<String> {
    ensure!(
        font.max_height <= u8::MAX as u32,
        "font {}: cell size {} does not fit MAX_HEIGHT: u8",
        font.name,
        font.max_height
    );

    let mut out = String::new();
    writeln!(out, "#![forbid(unsafe_code)]")?;
    writeln!(out, "#![allow(dead_code)]")?;
    writeln!(out, "//! {} Font", font.name)?;
    writeln!(out, "// DO NOT MAKE EDITS HERE because this file is automatically generated.")?;
    writeln!(out, "// To make changes, edit the font manifest and rerun `blitfont compile`.")?;
    if let Some(legal) = spec.legal.as_deref().filter(|l| !l.trim().is_empty()) {
        writeln!(out, "//")?;
        writeln!(out, "// CREDITS:")?;
        for line in legal.lines() {
            writeln!(out, "// {}", line)?;
        }
    }
    writeln!(out)?;
    writeln!(out, "/// Maximum height of glyph patterns in this bitmap typeface.")?;
    writeln!(out, "/// This will be true: h + y_offset <= MAX_HEIGHT")?;
    writeln!(out, "pub const MAX_HEIGHT: u8 = {};", font.max_height)?;
    writeln!(out)?;

    write_lookup(&mut out, &font.blocks)?;
    writeln!(out)?;
    write_index(&mut out, font)?;
    writeln!(out)?;
    write_data(&mut out, font)?;

    Ok(out)
}

fn write_lookup(out: &mut String, blocks: &BlockTable) -> std::fmt::Result {
    out.push_str(
        "/// Return Ok(offset into DATA[]) for start of blit pattern for grapheme cluster.
///
/// Before doing an expensive lookup for the whole cluster, this does a pre-filter
/// check to see whether the first character falls into one of the codepoint ranges
/// for Unicode blocks included in this font.
pub fn get_blit_pattern_offset(cluster: &str) -> Result<usize, super::GlyphNotFound> {
    let first_char = match cluster.chars().next() {
        Some(c) => c as u32,
        None => return Err(super::GlyphNotFound),
    };
    match first_char {
",
    );
    for (i, block) in blocks.blocks().iter().enumerate() {
        let lead = if i == 0 { "       " } else { "        |" };
        writeln!(
            out,
            "{} 0x{:04X}..=0x{:04X} // {}",
            lead, block.low, block.high, block.name
        )?;
    }
    if !blocks.is_empty() {
        out.push_str("        => find_pattern(cluster),\n");
    }
    out.push_str(
        "        _ => Err(super::GlyphNotFound),
    }
}

/// Use binary search on table of grapheme cluster hashes to find blit pattern for grapheme cluster
fn find_pattern(cluster: &str) -> Result<usize, super::GlyphNotFound> {
    let seed = 0;
    let key = super::murmur3(cluster, seed);
    match HASHED_CLUSTERS.binary_search(&key) {
        Ok(index) => Ok(PATTERN_OFFSETS[index]),
        Err(_) => Err(super::GlyphNotFound),
    }
}
",
    );
    Ok(())
}

fn write_index(out: &mut String, font: &CompiledFont) -> std::fmt::Result {
    let index = &font.index;
    writeln!(out, "// Index of murmur3(grapheme cluster) with sort order matching PATTERN_OFFSETS")?;
    writeln!(out, "const HASHED_CLUSTERS: [u32; {}] = [", index.len())?;
    for entry in index.entries() {
        writeln!(out, "    0x{:08X}, // {}", entry.hash, entry.label)?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    writeln!(out, "// Lookup table from hashed cluster to blit pattern offset (sort order matches HASHED_CLUSTERS)")?;
    writeln!(out, "const PATTERN_OFFSETS: [usize; {}] = [", index.len())?;
    for entry in index.entries() {
        writeln!(out, "    {:<6} // {}", format!("{},", entry.offset), entry.label)?;
    }
    writeln!(out, "];")
}

fn write_data(out: &mut String, font: &CompiledFont) -> std::fmt::Result {
    out.push_str(
        "/// Packed glyph pattern data.
/// Record format:
///  [offset+0]: ((w as u8) << 16) | ((h as u8) << 8) | (y_offset as u8)
///  [offset+1..=ceil(w*h/32)]: packed 1-bit pixels; 0=clear, 1=set
/// Pixels are packed in top to bottom, left to right order with MSB of first
/// pixel word containing the top left pixel.
///  w: Width of pattern in pixels
///  h: Height of pattern in pixels
///  y_offset: Vertical offset (pixels downward from top of line) to position
///     glyph pattern properly relative to text baseline
",
    );
    writeln!(out, "pub const DATA: [u32; {}] = [", font.data.len())?;
    for glyph in &font.glyphs {
        let end = glyph.offset + glyph.header.pattern_len();
        let words = &font.data[glyph.offset..end];
        writeln!(out, "    // [{}]: {:X} {}", glyph.offset, glyph.codepoint, glyph.label)?;
        for line in words.chunks(WORDS_PER_LINE) {
            let hex: Vec<String> = line.iter().map(|w| format!("0x{:08x}", w)).collect();
            writeln!(out, "    {},", hex.join(", "))?;
        }
    }
    writeln!(out, "];")
}

#[derive(Serialize)]
struct FontJson<'a> {
    name: &'a str,
    max_height: u32,
    ranges: &'a BlockTable,
    data: &'a [u32],
    hashed_clusters: &'a [u32],
    pattern_offsets: &'a [usize],
    labels: &'a [String],
}

/// Renders a font's arrays as pretty-printed JSON.
pub fn json_source(font: &CompiledFont) -> Result<String> {
    let doc = FontJson {
        name: &font.name,
        max_height: font.max_height,
        ranges: &font.blocks,
        data: &font.data,
        hashed_clusters: font.index.hashes(),
        pattern_offsets: font.index.offsets(),
        labels: font.index.labels(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
