//! Glyph lookup by grapheme cluster.

use thiserror::Error;

use crate::compile::CompiledFont;
use crate::hash::{str_hash, CLUSTER_SEED};
use crate::pattern::PatternView;

/// The font has no pattern for the requested cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("glyph not found")]
pub struct GlyphNotFound;

impl CompiledFont {
    /// Finds the data offset of a cluster's blit pattern.
    ///
    /// Clusters whose leading scalar is outside the font's blocks are
    /// rejected before hashing, so out-of-coverage text never reaches the
    /// binary search.
    pub fn pattern_offset(&self, cluster: &str) -> Result<usize, GlyphNotFound> {
        let leading = cluster.chars().next().ok_or(GlyphNotFound)?;
        if !self.blocks.contains(leading as u32) {
            return Err(GlyphNotFound);
        }
        self.index
            .find(str_hash(cluster, CLUSTER_SEED))
            .ok_or(GlyphNotFound)
    }

    /// Finds a cluster's pattern in the data buffer.
    pub fn glyph(&self, cluster: &str) -> Result<PatternView<'_>, GlyphNotFound> {
        let offset = self.pattern_offset(cluster)?;
        PatternView::read(&self.data, offset).ok_or(GlyphNotFound)
    }
}
