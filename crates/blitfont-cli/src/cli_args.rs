//! CLI argument definitions for the blitfont command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// blitfont - Bitmap font compiler for sprite sheet fonts
#[derive(Parser)]
#[command(name = "blitfont")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Validate a font manifest without reading sprite sheets
    Validate {
        /// Path to the font manifest (JSON)
        #[arg(short, long)]
        manifest: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Compile fonts from a manifest into generated source files
    Compile {
        /// Path to the font manifest (JSON)
        #[arg(short, long)]
        manifest: String,

        /// Output directory for generated files and reports
        #[arg(short, long)]
        out_dir: String,

        /// Compile only this font (default: all fonts in the manifest)
        #[arg(short, long)]
        font: Option<String>,

        /// Generated output format
        #[arg(long, default_value = "rust", value_parser = ["rust", "json"])]
        format: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print one glyph's header and pixels
    Inspect {
        /// Path to the font manifest (JSON)
        #[arg(short, long)]
        manifest: String,

        /// Font to compile
        #[arg(short, long)]
        font: String,

        /// Grapheme cluster to look up
        #[arg(short, long)]
        cluster: String,

        /// Read the cluster as dash-separated hex scalars (e.g. 1f3c4-200d)
        #[arg(long)]
        hex: bool,
    },

    /// Render a font's glyphs into a PNG atlas
    Preview {
        /// Path to the font manifest (JSON)
        #[arg(short, long)]
        manifest: String,

        /// Font to render
        #[arg(short, long)]
        font: String,

        /// Output PNG path
        #[arg(short, long)]
        out: String,

        /// Glyphs per atlas row
        #[arg(long, default_value_t = 16)]
        columns: u32,
    },
}
