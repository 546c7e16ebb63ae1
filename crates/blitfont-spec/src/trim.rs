//! Trim policy: how much blank margin may be stripped from each glyph edge.

use serde::{Deserialize, Serialize};

use crate::sheet::{GlyphLocation, SpriteSheetSpec};

/// Maximum number of blank rows/columns that may be removed from each edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrimLimits {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl TrimLimits {
    /// Creates limits in top, right, bottom, left order.
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Every edge may be trimmed across the whole cell.
    pub const fn full(size: u32) -> Self {
        Self::new(size, size, size, size)
    }

    /// Limits that leave at least a 4px wide, 2px tall box for the space glyph,
    /// so word spacing stays constant.
    pub fn space(size: u32) -> Self {
        let lr = (size / 2).saturating_sub(2);
        let tb = (size / 2).saturating_sub(1);
        Self::new(tb, lr, tb, lr)
    }
}

/// A rule that overrides the default full trim for specific cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum TrimRule {
    /// The designated space glyph.
    Space { row: u32, col: u32 },
    /// A vertical run of cells in one column sharing fixed limits, used for
    /// multi-bar status icons whose bars must stay aligned.
    Fixed {
        col: u32,
        /// First and last row, inclusive.
        rows: [u32; 2],
        limits: TrimLimits,
    },
}

impl TrimRule {
    /// Whether the rule applies to a cell.
    pub fn matches(&self, location: GlyphLocation) -> bool {
        match *self {
            TrimRule::Space { row, col } => location.row == row && location.col == col,
            TrimRule::Fixed { col, rows, .. } => {
                location.col == col && rows[0] <= location.row && location.row <= rows[1]
            }
        }
    }

    /// The limits this rule imposes for a sheet.
    pub fn limits(&self, sheet: &SpriteSheetSpec) -> TrimLimits {
        match *self {
            TrimRule::Space { .. } => TrimLimits::space(sheet.size),
            TrimRule::Fixed { limits, .. } => limits,
        }
    }

    /// Grid column the rule refers to.
    pub fn col(&self) -> u32 {
        match *self {
            TrimRule::Space { col, .. } | TrimRule::Fixed { col, .. } => col,
        }
    }
}

/// Ordered trim rules; the first matching rule wins, otherwise full trim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrimPolicy {
    pub rules: Vec<TrimRule>,
}

impl TrimPolicy {
    /// Creates a policy from rules.
    pub fn new(rules: Vec<TrimRule>) -> Self {
        Self { rules }
    }

    /// Selects the trim limits for a cell.
    pub fn limits_for(&self, sheet: &SpriteSheetSpec, location: GlyphLocation) -> TrimLimits {
        self.rules
            .iter()
            .find(|rule| rule.matches(location))
            .map(|rule| rule.limits(sheet))
            .unwrap_or_else(|| TrimLimits::full(sheet.size))
    }

    /// Rules used by the system Latin fonts: radio strength bars in column 0,
    /// rows 5-9, and the space glyph at row 0, column 2.
    pub fn sys_latin() -> Self {
        Self::new(vec![
            TrimRule::Fixed {
                col: 0,
                rows: [5, 9],
                limits: TrimLimits::new(7, 5, 6, 4),
            },
            TrimRule::Space { row: 0, col: 2 },
        ])
    }
}
