//! Sprite sheet geometry.

use serde::{Deserialize, Serialize};

/// Immutable description of a square-cell glyph grid.
///
/// Cell `(row, col)` starts at pixel
/// `(border + col * (size + gutter), border + row * (size + gutter))`
/// and spans `size` pixels in each direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteSheetSpec {
    /// Identifying name of the font drawn on this sheet.
    pub name: String,
    /// Side length of each glyph cell in pixels.
    pub size: u32,
    /// Number of glyph columns in the grid.
    pub cols: u32,
    /// Pixels between neighbouring cells.
    #[serde(default)]
    pub gutter: u32,
    /// Width of the top and left border in pixels.
    #[serde(default)]
    pub border: u32,
}

impl SpriteSheetSpec {
    /// Creates a new sheet description.
    pub fn new(name: impl Into<String>, size: u32, cols: u32, gutter: u32, border: u32) -> Self {
        Self {
            name: name.into(),
            size,
            cols,
            gutter,
            border,
        }
    }

    /// Distance in pixels from one cell origin to the next, `None` if it
    /// does not fit in a `u32`.
    pub fn pitch(&self) -> Option<u32> {
        self.size.checked_add(self.gutter)
    }

    /// Number of complete grid rows in an image of the given height.
    pub fn rows_for_height(&self, image_height: u32) -> u32 {
        match self.pitch() {
            Some(pitch) if pitch > 0 => image_height.saturating_sub(self.border) / pitch,
            _ => 0,
        }
    }

    /// Top-left pixel of a cell, `None` if it lies beyond `u32` coordinates.
    pub fn cell_origin(&self, location: GlyphLocation) -> Option<(u32, u32)> {
        let pitch = self.pitch()?;
        let axis = |index: u32| index.checked_mul(pitch)?.checked_add(self.border);
        Some((axis(location.col)?, axis(location.row)?))
    }
}

/// A `(row, col)` coordinate in a sprite sheet grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GlyphLocation {
    /// Grid row, counted from the top.
    pub row: u32,
    /// Grid column, counted from the left.
    pub col: u32,
}

impl GlyphLocation {
    /// Creates a new grid location.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for GlyphLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}, col {}", self.row, self.col)
    }
}
