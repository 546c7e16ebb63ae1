//! Validate command implementation
//!
//! Validates every font in a manifest without reading any sprite sheets.

use anyhow::{Context, Result};
use blitfont_spec::{validate_font_spec, BlockTable, ValidationResult};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{
    input_error_to_json, print_json, validation_error_to_json, validation_warning_to_json,
    FontValidateResult, JsonError, ValidateOutput,
};
use crate::input::load_manifest;

/// Run the validate command
///
/// # Arguments
/// * `manifest_path` - Path to the font manifest
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if every font is valid, 1 otherwise
pub fn run(manifest_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(manifest_path)
    } else {
        run_human(manifest_path)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(manifest_path: &str) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Validating:".cyan().bold(), manifest_path);

    let loaded = load_manifest(Path::new(manifest_path))
        .with_context(|| format!("Failed to load manifest: {}", manifest_path))?;
    println!("{} {}", "Source:".dimmed(), &loaded.source_hash[..16]);

    let table = BlockTable::known().context("Failed to load the Unicode block table")?;

    let mut failed = 0;
    for spec in &loaded.manifest.fonts {
        let result = validate_font_spec(spec, &table);
        print_font_result(&spec.name, &result);
        if !result.is_ok() {
            failed += 1;
        }
    }

    let duration_ms = start.elapsed().as_millis();
    let total = loaded.manifest.fonts.len();
    if failed == 0 {
        println!(
            "\n{} {} font(s) valid ({}ms)",
            "SUCCESS".green().bold(),
            total,
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} {} of {} font(s) invalid ({}ms)",
            "FAILED".red().bold(),
            failed,
            total,
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}

/// Prints one font's errors and warnings.
pub(crate) fn print_font_result(font: &str, result: &ValidationResult) {
    let status = if result.is_ok() {
        "ok".green()
    } else {
        "invalid".red()
    };
    println!("\n{} {} [{}]", "Font:".cyan().bold(), font, status);

    for err in &result.errors {
        let path = err
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!("  {} [{}]{}: {}", "x".red(), err.code, path.dimmed(), err.message);
    }
    for warn in &result.warnings {
        let path = warn
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!("  {} [{}]{}: {}", "!".yellow(), warn.code, path.dimmed(), warn.message);
    }
}

/// Run validate with machine-readable JSON output
fn run_json(manifest_path: &str) -> Result<ExitCode> {
    let loaded = match load_manifest(Path::new(manifest_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let output = ValidateOutput {
                success: false,
                errors: vec![input_error_to_json(&e, manifest_path)],
                fonts: vec![],
                source_hash: None,
            };
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let table = match BlockTable::known() {
        Ok(table) => table,
        Err(e) => {
            let output = ValidateOutput {
                success: false,
                errors: vec![JsonError::new(
                    super::json_output::error_codes::JSON_PARSE,
                    e.to_string(),
                )],
                fonts: vec![],
                source_hash: Some(loaded.source_hash),
            };
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let fonts: Vec<FontValidateResult> = loaded
        .manifest
        .fonts
        .iter()
        .map(|spec| {
            let result = validate_font_spec(spec, &table);
            FontValidateResult {
                font: spec.name.clone(),
                ok: result.is_ok(),
                errors: result.errors.iter().map(validation_error_to_json).collect(),
                warnings: result.warnings.iter().map(validation_warning_to_json).collect(),
            }
        })
        .collect();

    let success = fonts.iter().all(|f| f.ok);
    let output = ValidateOutput {
        success,
        errors: vec![],
        fonts,
        source_hash: Some(loaded.source_hash),
    };
    print_json(&output)?;

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{"fonts": [
        {"name": "Tiny", "sprites": "tiny.png", "size": 8, "cols": 4,
         "blocks": ["BASIC_LATIN"], "charmap": [{"cluster": "41", "row": 0, "col": 0}],
         "legal": "test"},
        {"name": "Broken", "sprites": "broken.png", "size": 0, "cols": 4,
         "blocks": ["BASIC_LATIN"], "charmap": [{"cluster": "41", "row": 0, "col": 0}]}
    ]}"#;

    #[test]
    fn test_validate_reports_failure_exit_code() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("fonts.json");
        std::fs::write(&path, MANIFEST).unwrap();

        let code = run(path.to_str().unwrap(), false).unwrap();
        assert_eq!(code, ExitCode::from(1));
        let code = run(path.to_str().unwrap(), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_validate_valid_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("fonts.json");
        let valid = MANIFEST.replace("\"size\": 0", "\"size\": 8");
        std::fs::write(&path, valid).unwrap();

        assert_eq!(run(path.to_str().unwrap(), true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_validate_missing_manifest() {
        assert!(run("/nonexistent/fonts.json", false).is_err());
        assert_eq!(
            run("/nonexistent/fonts.json", true).unwrap(),
            ExitCode::from(1)
        );
    }
}
