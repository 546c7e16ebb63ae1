//! blitfont glyph compiler backend.
//!
//! Turns a sprite sheet image and a [`blitfont_spec::FontSpec`] into a
//! [`CompiledFont`]: a flat buffer of 1-bit blit patterns plus a sorted
//! cluster hash index for lookup.
//!
//! # Pipeline
//!
//! For each character map entry, in map order:
//!
//! 1. Classify the leading scalar into a Unicode block; skip entries
//!    whose block the font does not include.
//! 2. [`sample_cell`] reads the entry's grid cell into a [`PixelMatrix`].
//! 3. [`trim`] strips blank margins within the cell's [`TrimLimits`].
//! 4. [`BlitPattern::pack`] encodes the glyph and its y-offset.
//! 5. The pattern is appended to the data buffer and its cluster hash is
//!    indexed.
//!
//! [`TrimLimits`]: blitfont_spec::TrimLimits
//!
//! # Example
//!
//! ```
//! use blitfont_backend::{DecodedImage, FontCompiler};
//! use blitfont_spec::{BlockTable, CharacterEntry, SpriteSheetSpec};
//!
//! let known = BlockTable::known().unwrap();
//! let latin = known.subset(&["BASIC_LATIN"]).unwrap();
//! let sheet = SpriteSheetSpec::new("Dot", 4, 1, 0, 0);
//!
//! // One 4x4 cell with a single ink pixel.
//! let mut pixels = vec![255u8; 16];
//! pixels[5] = 0;
//! let image = DecodedImage::from_gray8(4, 4, pixels).unwrap();
//!
//! let font = FontCompiler::new(sheet, vec![CharacterEntry::cluster(".", 0, 0)], known, latin)
//!     .compile(&image)
//!     .unwrap();
//! let dot = font.glyph(".").unwrap();
//! assert_eq!((dot.width(), dot.height(), dot.y_offset()), (1, 1, 1));
//! ```

pub mod compile;
pub mod hash;
pub mod image;
pub mod index;
pub mod lookup;
pub mod matrix;
pub mod pattern;
pub mod png;
pub mod preview;
pub mod sampler;
pub mod trim;

pub use compile::{
    compile_font_spec, CompileError, CompiledFont, FontCompiler, GlyphError, GlyphRecord,
};
pub use hash::{cluster_hash, str_hash, CLUSTER_SEED};
pub use image::{decode_png, load_png, DecodeError, DecodedImage, SpriteImage};
pub use index::{ClusterIndex, IndexBuilder, IndexEntry, IndexError};
pub use lookup::GlyphNotFound;
pub use matrix::PixelMatrix;
pub use pattern::{BlitPattern, GlyphHeader, PackError, PatternView};
pub use preview::{render_preview, PreviewOptions};
pub use sampler::{grid_rows, sample_cell, SampleError};
pub use trim::{trim, Trimmed};
