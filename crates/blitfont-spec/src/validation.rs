//! Font spec validation logic.
//!
//! Validation reports every problem it finds rather than stopping at the
//! first, so a manifest can be fixed in one pass. Compilation re-checks the
//! conditions it depends on and fails with context if they are violated.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::blocks::BlockTable;
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::font::FontSpec;
use crate::trim::TrimRule;

/// Font names become identifiers in generated code.
const FONT_NAME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_]{0,63}$";

static FONT_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn font_name_regex() -> &'static Regex {
    FONT_NAME_REGEX.get_or_init(|| Regex::new(FONT_NAME_PATTERN).expect("invalid regex pattern"))
}

/// Checks whether a font name is usable as an identifier.
pub fn is_valid_font_name(name: &str) -> bool {
    font_name_regex().is_match(name)
}

/// Validates a font spec against the full block table.
///
/// # Arguments
/// * `spec` - The font spec to validate
/// * `table` - The table of every known Unicode block
///
/// # Example
/// ```
/// use blitfont_spec::{BlockTable, FontSpec};
/// use blitfont_spec::validation::validate_font_spec;
///
/// let table = BlockTable::known().unwrap();
/// let spec = FontSpec::preset("regular").unwrap();
/// assert!(validate_font_spec(&spec, &table).is_ok());
/// ```
pub fn validate_font_spec(spec: &FontSpec, table: &BlockTable) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_geometry(spec, &mut result);
    validate_name(spec, &mut result);
    let included = validate_blocks(spec, table, &mut result);
    validate_charmap(spec, table, &included, &mut result);
    validate_trim_rules(spec, &mut result);

    if spec.legal.as_deref().map_or(true, |l| l.trim().is_empty()) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingLegal,
            "no legal notice for the glyph artwork",
            "legal",
        ));
    }

    result
}

fn validate_geometry(spec: &FontSpec, result: &mut ValidationResult) {
    if spec.size == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::ZeroCellSize,
            "cell size must be greater than 0",
            "size",
        ));
    }
    if spec.cols == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::ZeroColumns,
            "column count must be greater than 0",
            "cols",
        ));
    }
}

fn validate_name(spec: &FontSpec, result: &mut ValidationResult) {
    if !is_valid_font_name(&spec.name) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidFontName,
            format!(
                "font name {:?} must match {}",
                spec.name, FONT_NAME_PATTERN
            ),
            "name",
        ));
    }
}

/// Returns the blocks the font includes, skipping unknown names.
fn validate_blocks(
    spec: &FontSpec,
    table: &BlockTable,
    result: &mut ValidationResult,
) -> BlockTable {
    let mut known = Vec::new();
    for (i, name) in spec.blocks.iter().enumerate() {
        match table.get(name) {
            Some(block) => known.push(block.clone()),
            None => result.add_error(ValidationError::with_path(
                ErrorCode::UnknownBlockName,
                format!("block {:?} is not in the Unicode block table", name),
                format!("blocks[{}]", i),
            )),
        }
    }
    BlockTable::new(known)
}

fn validate_charmap(
    spec: &FontSpec,
    table: &BlockTable,
    included: &BlockTable,
    result: &mut ValidationResult,
) {
    let entries = match spec.character_map() {
        Ok(entries) => entries,
        Err(e) => {
            result.add_error(ValidationError::with_path(
                ErrorCode::UnknownCharMap,
                e.to_string(),
                "charmap",
            ));
            return;
        }
    };

    if entries.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyCharMap,
            "character map has no entries",
            "charmap",
        ));
        return;
    }

    let mut seen: HashMap<&[char], usize> = HashMap::new();
    for (i, entry) in entries.iter().enumerate() {
        let label = entry.glyph.label();
        if spec.cols > 0 && entry.location.col >= spec.cols {
            result.add_error(ValidationError::with_path(
                ErrorCode::ColumnOutOfRange,
                format!(
                    "{} is at column {}, but the grid has {} columns",
                    label, entry.location.col, spec.cols
                ),
                format!("charmap[{}].col", i),
            ));
        }

        let codepoint = entry.leading_codepoint();
        match table.classify(codepoint) {
            None => result.add_error(ValidationError::with_path(
                ErrorCode::UnclassifiedCodepoint,
                format!(
                    "{} (U+{:04X}) belongs to no known Unicode block",
                    label, codepoint
                ),
                format!("charmap[{}]", i),
            )),
            Some(block) if !included.contains(codepoint) => {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::ExcludedBlock,
                    format!(
                        "{} is in {}, which this font does not include; it will be skipped",
                        label, block.name
                    ),
                    format!("charmap[{}]", i),
                ))
            }
            Some(_) => {}
        }

        if let Some(first) = seen.insert(entry.glyph.scalars(), i) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateCluster,
                format!("{} is also mapped by charmap[{}]", label, first),
                format!("charmap[{}]", i),
            ));
        }
    }
}

fn validate_trim_rules(spec: &FontSpec, result: &mut ValidationResult) {
    let rules = &spec.trim_rules.rules;
    for (i, rule) in rules.iter().enumerate() {
        if spec.cols > 0 && rule.col() >= spec.cols {
            result.add_error(ValidationError::with_path(
                ErrorCode::TrimRuleOutOfRange,
                format!(
                    "trim rule targets column {}, but the grid has {} columns",
                    rule.col(),
                    spec.cols
                ),
                format!("trim_rules[{}]", i),
            ));
        }
        for (j, other) in rules.iter().enumerate().skip(i + 1) {
            if rules_overlap(rule, other) {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::OverlappingTrimRules,
                    format!("trim_rules[{}] shadows trim_rules[{}] on some cells", i, j),
                    format!("trim_rules[{}]", j),
                ));
            }
        }
    }
}

fn row_span(rule: &TrimRule) -> (u32, u32) {
    match *rule {
        TrimRule::Space { row, .. } => (row, row),
        TrimRule::Fixed { rows, .. } => (rows[0], rows[1]),
    }
}

fn rules_overlap(a: &TrimRule, b: &TrimRule) -> bool {
    let (a_first, a_last) = row_span(a);
    let (b_first, b_last) = row_span(b);
    a.col() == b.col() && a_first <= b_last && b_first <= a_last
}
