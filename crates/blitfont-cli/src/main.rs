//! blitfont CLI - Command-line interface for the bitmap font compiler
//!
//! This binary provides commands for validating font manifests, compiling
//! sprite sheets into generated font modules, and inspecting the result.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use blitfont_cli::commands;
use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { manifest, json } => commands::validate::run(&manifest, json),
        Commands::Compile {
            manifest,
            out_dir,
            font,
            format,
            json,
        } => commands::compile::run(&manifest, &out_dir, font.as_deref(), &format, json),
        Commands::Inspect {
            manifest,
            font,
            cluster,
            hex,
        } => commands::inspect::run(&manifest, &font, &cluster, hex),
        Commands::Preview {
            manifest,
            font,
            out,
            columns,
        } => commands::preview::run(&manifest, &font, &out, columns),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_compile_defaults() {
        let cli = Cli::try_parse_from([
            "blitfont",
            "compile",
            "--manifest",
            "fonts.json",
            "--out-dir",
            "out",
        ])
        .unwrap();

        match cli.command {
            Commands::Compile {
                manifest,
                out_dir,
                font,
                format,
                json,
            } => {
                assert_eq!(manifest, "fonts.json");
                assert_eq!(out_dir, "out");
                assert_eq!(font, None);
                assert_eq!(format, "rust");
                assert!(!json);
            }
            _ => panic!("expected compile command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let err = Cli::try_parse_from([
            "blitfont",
            "compile",
            "--manifest",
            "fonts.json",
            "--out-dir",
            "out",
            "--format",
            "c",
        ]);
        assert!(err.is_err());
    }

    #[test]
    fn test_cli_inspect_requires_font() {
        let err = Cli::try_parse_from([
            "blitfont",
            "inspect",
            "--manifest",
            "fonts.json",
            "--cluster",
            "A",
        ]);
        assert!(err.is_err());
    }

    #[test]
    fn test_cli_parses_preview() {
        let cli = Cli::try_parse_from([
            "blitfont",
            "preview",
            "-m",
            "fonts.json",
            "-f",
            "Bold",
            "-o",
            "bold.png",
            "--columns",
            "8",
        ])
        .unwrap();

        match cli.command {
            Commands::Preview { font, columns, .. } => {
                assert_eq!(font, "Bold");
                assert_eq!(columns, 8);
            }
            _ => panic!("expected preview command"),
        }
    }
}
