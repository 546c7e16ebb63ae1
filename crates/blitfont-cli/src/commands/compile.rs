//! Compile command implementation
//!
//! Compiles each font in a manifest, writes the generated source and a
//! per-font report. Fonts are independent: one failure is reported and the
//! rest still compile.

use anyhow::{anyhow, Context, Result};
use blitfont_backend::compile_font_spec;
use blitfont_spec::{
    canonical_font_hash, validate_font_spec, BlockTable, FontSpec, OutputResult, Report,
    ReportBuilder, ReportError, ValidationResult,
};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{
    backend_error_to_json, error_codes, input_error_to_json, print_json,
    validation_error_to_json, validation_warning_to_json, CompileOutput, FontCompileResult,
    JsonError,
};
use super::reporting;
use super::validate::print_font_result;
use crate::emit::EmitFormat;
use crate::input::load_manifest;

/// What happened to one font.
struct FontOutcome {
    validation: ValidationResult,
    /// Compile, render, or write failure after validation passed.
    failure: Option<JsonError>,
    report: Report,
    report_path: PathBuf,
}

impl FontOutcome {
    fn ok(&self) -> bool {
        self.report.ok
    }
}

/// Run the compile command
///
/// # Arguments
/// * `manifest_path` - Path to the font manifest
/// * `out_dir` - Directory for generated files and reports
/// * `font` - Compile only this font (default: all)
/// * `format` - Output format name ("rust" or "json")
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if every selected font compiled, 1 otherwise
pub fn run(
    manifest_path: &str,
    out_dir: &str,
    font: Option<&str>,
    format: &str,
    json_output: bool,
) -> Result<ExitCode> {
    let format = EmitFormat::from_name(format)
        .ok_or_else(|| anyhow!("unknown output format: {} (expected rust or json)", format))?;
    if json_output {
        run_json(manifest_path, out_dir, font, format)
    } else {
        run_human(manifest_path, out_dir, font, format)
    }
}

fn run_human(
    manifest_path: &str,
    out_dir: &str,
    font: Option<&str>,
    format: EmitFormat,
) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Compiling:".cyan().bold(), manifest_path);

    let loaded = load_manifest(Path::new(manifest_path))
        .with_context(|| format!("Failed to load manifest: {}", manifest_path))?;
    let fonts = loaded.select(font)?;
    let table = BlockTable::known().context("Failed to load the Unicode block table")?;

    let out_dir = Path::new(out_dir);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let mut failed = 0;
    for spec in &fonts {
        let outcome = compile_one(spec, &loaded.base_dir, &table, out_dir, format)?;
        print_font_result(&spec.name, &outcome.validation);

        if let Some(err) = &outcome.failure {
            println!("  {} [{}]: {}", "x".red(), err.code, err.message);
        }
        if let Some(stats) = &outcome.report.stats {
            println!(
                "  {} {} glyph(s), {} skipped, {} data word(s)",
                "Packed:".dimmed(),
                stats.glyphs,
                stats.skipped,
                stats.data_words
            );
        }
        for output in &outcome.report.outputs {
            println!("  {} {}", "->".green(), output.path);
        }
        println!("  {} {}", "Report:".dimmed(), outcome.report_path.display());

        if !outcome.ok() {
            failed += 1;
        }
    }

    let duration_ms = start.elapsed().as_millis();
    if failed == 0 {
        println!(
            "\n{} {} font(s) compiled ({}ms)",
            "SUCCESS".green().bold(),
            fonts.len(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} {} of {} font(s) failed ({}ms)",
            "FAILED".red().bold(),
            failed,
            fonts.len(),
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(
    manifest_path: &str,
    out_dir: &str,
    font: Option<&str>,
    format: EmitFormat,
) -> Result<ExitCode> {
    let fail = |error: JsonError| -> Result<ExitCode> {
        print_json(&CompileOutput {
            success: false,
            errors: vec![error],
            fonts: vec![],
        })?;
        Ok(ExitCode::from(1))
    };

    let loaded = match load_manifest(Path::new(manifest_path)) {
        Ok(loaded) => loaded,
        Err(e) => return fail(input_error_to_json(&e, manifest_path)),
    };
    let fonts = match loaded.select(font) {
        Ok(fonts) => fonts,
        Err(e) => return fail(input_error_to_json(&e, manifest_path)),
    };
    let table = match BlockTable::known() {
        Ok(table) => table,
        Err(e) => return fail(JsonError::new(error_codes::JSON_PARSE, e.to_string())),
    };
    let out_dir = Path::new(out_dir);
    if let Err(e) = fs::create_dir_all(out_dir) {
        return fail(
            JsonError::new(error_codes::FILE_WRITE, e.to_string())
                .with_file(out_dir.display().to_string()),
        );
    }

    let mut results = Vec::with_capacity(fonts.len());
    for spec in &fonts {
        let outcome = compile_one(spec, &loaded.base_dir, &table, out_dir, format)?;
        let mut errors: Vec<JsonError> = outcome
            .validation
            .errors
            .iter()
            .map(validation_error_to_json)
            .collect();
        errors.extend(outcome.failure.clone());
        results.push(FontCompileResult {
            font: spec.name.clone(),
            ok: outcome.ok(),
            errors,
            warnings: outcome
                .validation
                .warnings
                .iter()
                .map(validation_warning_to_json)
                .collect(),
            outputs: outcome.report.outputs.clone(),
            stats: outcome.report.stats.clone(),
            report: outcome.report_path.display().to_string(),
        });
    }

    let success = results.iter().all(|r| r.ok);
    print_json(&CompileOutput {
        success,
        errors: vec![],
        fonts: results,
    })?;

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Validates, compiles, and emits one font, then writes its report.
///
/// Only a failure to write the report itself is returned as an error; every
/// other problem is recorded in the outcome.
fn compile_one(
    spec: &FontSpec,
    base_dir: &Path,
    table: &BlockTable,
    out_dir: &Path,
    format: EmitFormat,
) -> Result<FontOutcome> {
    let start = Instant::now();

    let spec_hash = canonical_font_hash(spec).unwrap_or_else(|_| "unknown".to_string());
    let validation = validate_font_spec(spec, table);
    let mut builder = reporting::apply_validation_messages(
        ReportBuilder::new(&spec.name, spec_hash, reporting::tool_version()),
        &validation,
    );

    let mut failure = None;
    if validation.is_ok() {
        match compile_font_spec(spec, table, base_dir) {
            Ok(font) => {
                let path = out_dir.join(format.file_name(spec));
                let written = format
                    .render(&font, spec)
                    .map_err(|e| JsonError::new(error_codes::EMIT, format!("{:#}", e)))
                    .and_then(|text| {
                        fs::write(&path, text).map_err(|e| {
                            JsonError::new(error_codes::FILE_WRITE, e.to_string())
                                .with_file(path.display().to_string())
                        })
                    });
                match written {
                    Ok(()) => {
                        let output =
                            OutputResult::new(format.as_str(), path.display().to_string());
                        builder = builder.stats(font.stats()).output(output);
                    }
                    Err(err) => {
                        builder = builder
                            .error(ReportError::new(err.code.clone(), err.message.clone()));
                        failure = Some(err);
                    }
                }
            }
            Err(e) => {
                builder = builder.error(ReportError::from_backend(&e));
                failure = Some(backend_error_to_json(&e));
            }
        }
    }

    let report = builder
        .duration_ms(start.elapsed().as_millis() as u64)
        .build();
    let report_path = reporting::report_path(out_dir, &spec.name);
    reporting::write_report(&report, &report_path)?;

    Ok(FontOutcome {
        validation,
        failure,
        report,
        report_path,
    })
}
