//! Font compilation.
//!
//! Walks a character map in order, and for each entry whose leading scalar
//! falls in an included block: samples its cell, trims it, packs it onto the
//! end of the data buffer, and indexes its cluster hash.

use std::path::Path;

use blitfont_spec::{
    BackendError, BlockTable, CharacterEntry, FontSpec, FontStats, GlyphLocation, SpecError,
    SpriteSheetSpec, TrimPolicy,
};
use thiserror::Error;

use crate::image::{load_png, DecodeError, SpriteImage};
use crate::index::{ClusterIndex, IndexBuilder, IndexError};
use crate::pattern::{BlitPattern, GlyphHeader, PackError};
use crate::sampler::{sample_cell, SampleError};
use crate::trim::trim;

/// Why a single glyph failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphError {
    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Pack(#[from] PackError),
}

/// Errors from compiling a font.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("font {font}: cell size {size} and {cols} columns do not describe a grid")]
    InvalidSheet { font: String, size: u32, cols: u32 },

    #[error("font {font}: entry at {location} has an empty cluster")]
    EmptyCluster {
        font: String,
        location: GlyphLocation,
    },

    #[error(
        "font {font}: {label} (U+{codepoint:04X}) at {location} belongs to no known Unicode block"
    )]
    UnknownBlock {
        font: String,
        label: String,
        codepoint: u32,
        location: GlyphLocation,
    },

    #[error("font {font}: {label} (U+{codepoint:04X}) at {location}: {source}")]
    Glyph {
        font: String,
        label: String,
        codepoint: u32,
        location: GlyphLocation,
        #[source]
        source: GlyphError,
    },

    #[error("font {font}: {source}")]
    Index {
        font: String,
        #[source]
        source: IndexError,
    },

    #[error("font {font}: {source}")]
    Spec {
        font: String,
        #[source]
        source: SpecError,
    },

    #[error("font {font}: failed to load sprite sheet: {source}")]
    Decode {
        font: String,
        #[source]
        source: DecodeError,
    },
}

impl BackendError for CompileError {
    fn code(&self) -> &'static str {
        match self {
            CompileError::InvalidSheet { .. } => "GLYPH_001",
            CompileError::EmptyCluster { .. } => "GLYPH_002",
            CompileError::UnknownBlock { .. } => "GLYPH_003",
            CompileError::Glyph {
                source: GlyphError::Sample(_),
                ..
            } => "GLYPH_004",
            CompileError::Glyph {
                source: GlyphError::Pack(_),
                ..
            } => "GLYPH_005",
            CompileError::Index {
                source: IndexError::DuplicateCluster { .. },
                ..
            } => "GLYPH_006",
            CompileError::Index {
                source: IndexError::Collision { .. },
                ..
            } => "GLYPH_007",
            CompileError::Spec { .. } => "GLYPH_008",
            CompileError::Decode { .. } => "GLYPH_009",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            CompileError::InvalidSheet { .. }
            | CompileError::EmptyCluster { .. }
            | CompileError::UnknownBlock { .. }
            | CompileError::Spec { .. } => "config",
            CompileError::Glyph { .. } => "glyph",
            CompileError::Index { .. } => "index",
            CompileError::Decode { .. } => "decode",
        }
    }
}

/// Where a packed glyph came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRecord {
    /// Offset of the header word in the data buffer.
    pub offset: usize,
    /// Leading scalar of the cluster.
    pub codepoint: u32,
    pub label: String,
    pub location: GlyphLocation,
    pub header: GlyphHeader,
}

/// A compiled font: packed patterns plus a sorted hash index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFont {
    pub name: String,
    /// Cell size; no glyph's `y_offset + height` exceeds it.
    pub max_height: u32,
    /// Blocks the font includes, for lookup pre-filtering.
    pub blocks: BlockTable,
    /// Concatenated blit patterns.
    pub data: Vec<u32>,
    pub index: ClusterIndex,
    /// Packed glyphs in data order.
    pub glyphs: Vec<GlyphRecord>,
    /// Entries skipped because their block is not included.
    pub skipped: usize,
}

impl CompiledFont {
    /// BLAKE3 digest over data, hashes, and offsets.
    pub fn digest(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for word in &self.data {
            hasher.update(&word.to_le_bytes());
        }
        for hash in self.index.hashes() {
            hasher.update(&hash.to_le_bytes());
        }
        for &offset in self.index.offsets() {
            hasher.update(&(offset as u64).to_le_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }

    pub fn stats(&self) -> FontStats {
        FontStats {
            glyphs: self.glyphs.len(),
            skipped: self.skipped,
            data_words: self.data.len(),
            digest: self.digest(),
        }
    }
}

/// Compiles one font from a sheet image and its character map.
#[derive(Debug, Clone)]
pub struct FontCompiler {
    sheet: SpriteSheetSpec,
    entries: Vec<CharacterEntry>,
    known: BlockTable,
    included: BlockTable,
    trim: TrimPolicy,
}

impl FontCompiler {
    /// Creates a compiler with no trim overrides.
    ///
    /// `known` classifies every entry; entries outside `included` are
    /// skipped.
    pub fn new(
        sheet: SpriteSheetSpec,
        entries: Vec<CharacterEntry>,
        known: BlockTable,
        included: BlockTable,
    ) -> Self {
        Self {
            sheet,
            entries,
            known,
            included,
            trim: TrimPolicy::default(),
        }
    }

    pub fn with_trim(mut self, trim: TrimPolicy) -> Self {
        self.trim = trim;
        self
    }

    /// Builds a compiler from a manifest entry.
    pub fn from_spec(spec: &FontSpec, known: &BlockTable) -> Result<Self, CompileError> {
        let spec_err = |source| CompileError::Spec {
            font: spec.name.clone(),
            source,
        };
        let entries = spec.character_map().map_err(spec_err)?;
        let included = spec.supported_blocks(known).map_err(spec_err)?;
        Ok(Self::new(spec.sheet(), entries, known.clone(), included)
            .with_trim(spec.trim_rules.clone()))
    }

    pub fn sheet(&self) -> &SpriteSheetSpec {
        &self.sheet
    }

    /// Runs the compile over a decoded sheet.
    pub fn compile<I: SpriteImage + ?Sized>(
        &self,
        image: &I,
    ) -> Result<CompiledFont, CompileError> {
        let font = &self.sheet.name;
        if self.sheet.size == 0 || self.sheet.cols == 0 {
            return Err(CompileError::InvalidSheet {
                font: font.clone(),
                size: self.sheet.size,
                cols: self.sheet.cols,
            });
        }

        let mut data = Vec::new();
        let mut glyphs = Vec::new();
        let mut index = IndexBuilder::new();
        let mut skipped = 0;

        for entry in &self.entries {
            let location = entry.location;
            let leading = entry
                .glyph
                .leading_scalar()
                .ok_or_else(|| CompileError::EmptyCluster {
                    font: font.clone(),
                    location,
                })?;
            let codepoint = leading as u32;
            let label = entry.glyph.label();

            if self.known.classify(codepoint).is_none() {
                return Err(CompileError::UnknownBlock {
                    font: font.clone(),
                    label,
                    codepoint,
                    location,
                });
            }
            if !self.included.contains(codepoint) {
                skipped += 1;
                continue;
            }

            let pattern = self.pack_glyph(image, location).map_err(|source| CompileError::Glyph {
                font: font.clone(),
                label: label.clone(),
                codepoint,
                location,
                source,
            })?;

            let offset = data.len();
            index.push(entry.glyph.scalars(), offset, label.clone());
            glyphs.push(GlyphRecord {
                offset,
                codepoint,
                label,
                location,
                header: pattern.header(),
            });
            data.extend_from_slice(pattern.words());
        }

        let index = index.finish().map_err(|source| CompileError::Index {
            font: font.clone(),
            source,
        })?;

        Ok(CompiledFont {
            name: font.clone(),
            max_height: self.sheet.size,
            blocks: self.included.clone(),
            data,
            index,
            glyphs,
            skipped,
        })
    }

    fn pack_glyph<I: SpriteImage + ?Sized>(
        &self,
        image: &I,
        location: GlyphLocation,
    ) -> Result<BlitPattern, GlyphError> {
        let cell = sample_cell(image, &self.sheet, location)?;
        let limits = self.trim.limits_for(&self.sheet, location);
        let trimmed = trim(&cell, limits);
        Ok(BlitPattern::pack(&trimmed.matrix, trimmed.y_offset)?)
    }
}

/// Loads a font's sprite sheet relative to `base_dir` and compiles it.
pub fn compile_font_spec(
    spec: &FontSpec,
    known: &BlockTable,
    base_dir: &Path,
) -> Result<CompiledFont, CompileError> {
    let compiler = FontCompiler::from_spec(spec, known)?;
    let image = load_png(&spec.sprites_path(base_dir)).map_err(|source| CompileError::Decode {
        font: spec.name.clone(),
        source,
    })?;
    compiler.compile(&image)
}
