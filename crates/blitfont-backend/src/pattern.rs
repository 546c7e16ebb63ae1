//! Blit pattern encoding.
//!
//! A blit pattern is one header word followed by the glyph's pixels packed
//! 32 per word:
//!
//! ```text
//! header: width << 16 | height << 8 | y_offset
//! data:   row-major, left to right; the top-left pixel is the most
//!         significant bit of the first data word; the last word is
//!         zero-padded in its low bits
//! ```
//!
//! A 0x0 glyph is a header word alone.

use thiserror::Error;

use crate::matrix::PixelMatrix;

/// Largest width, height, or y-offset a header can hold.
pub const MAX_HEADER_FIELD: u32 = 0xFF;

/// Errors from packing a glyph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    #[error("{width}x{height} glyph with y-offset {y_offset} does not fit 8-bit header fields")]
    HeaderOverflow {
        width: u32,
        height: u32,
        y_offset: u32,
    },
}

/// The first word of a blit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphHeader {
    pub width: u8,
    pub height: u8,
    pub y_offset: u8,
}

impl GlyphHeader {
    /// Builds a header, checking that every field fits in 8 bits.
    pub fn new(width: u32, height: u32, y_offset: u32) -> Result<Self, PackError> {
        let overflow = || PackError::HeaderOverflow {
            width,
            height,
            y_offset,
        };
        Ok(Self {
            width: u8::try_from(width).map_err(|_| overflow())?,
            height: u8::try_from(height).map_err(|_| overflow())?,
            y_offset: u8::try_from(y_offset).map_err(|_| overflow())?,
        })
    }

    /// Packs the header into its word form.
    pub fn to_word(self) -> u32 {
        (self.width as u32) << 16 | (self.height as u32) << 8 | self.y_offset as u32
    }

    /// Unpacks a header word. The top 8 bits are ignored.
    pub fn from_word(word: u32) -> Self {
        Self {
            width: (word >> 16) as u8,
            height: (word >> 8) as u8,
            y_offset: word as u8,
        }
    }

    /// Number of data words that follow the header.
    pub fn data_words(self) -> usize {
        (self.width as usize * self.height as usize).div_ceil(32)
    }

    /// Total pattern length, header included.
    pub fn pattern_len(self) -> usize {
        1 + self.data_words()
    }
}

/// An owned blit pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlitPattern {
    words: Vec<u32>,
}

impl BlitPattern {
    /// Packs a trimmed glyph and its y-offset.
    pub fn pack(matrix: &PixelMatrix, y_offset: u32) -> Result<Self, PackError> {
        let header = GlyphHeader::new(matrix.width(), matrix.height(), y_offset)?;

        let mut words = Vec::with_capacity(header.pattern_len());
        words.push(header.to_word());

        let mut acc = 0u32;
        let mut bits = 0u32;
        for &ink in matrix.pixels() {
            acc = acc << 1 | u32::from(ink);
            bits += 1;
            if bits == 32 {
                words.push(acc);
                acc = 0;
                bits = 0;
            }
        }
        if bits > 0 {
            words.push(acc << (32 - bits));
        }

        Ok(Self { words })
    }

    pub fn header(&self) -> GlyphHeader {
        GlyphHeader::from_word(self.words[0])
    }

    /// Header word followed by data words.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub fn as_view(&self) -> PatternView<'_> {
        PatternView {
            header: self.header(),
            data: &self.words[1..],
        }
    }

    /// Unpacks back to a pixel matrix.
    pub fn to_matrix(&self) -> PixelMatrix {
        self.as_view().to_matrix()
    }
}

/// A pattern borrowed from a font's data buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternView<'a> {
    pub header: GlyphHeader,
    /// Data words, header excluded.
    pub data: &'a [u32],
}

impl<'a> PatternView<'a> {
    /// Reads the pattern starting at `offset`. Returns `None` if the buffer
    /// ends before the pattern does.
    pub fn read(buffer: &'a [u32], offset: usize) -> Option<Self> {
        let header = GlyphHeader::from_word(*buffer.get(offset)?);
        let start = offset + 1;
        let data = buffer.get(start..start + header.data_words())?;
        Some(Self { header, data })
    }

    pub fn width(&self) -> u32 {
        self.header.width as u32
    }

    pub fn height(&self) -> u32 {
        self.header.height as u32
    }

    pub fn y_offset(&self) -> u32 {
        self.header.y_offset as u32
    }

    /// Whether the pixel at `(x, y)` is ink.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width() || y >= self.height() {
            return false;
        }
        let bit = (y * self.width() + x) as usize;
        self.data
            .get(bit / 32)
            .is_some_and(|word| word >> (31 - bit % 32) & 1 == 1)
    }

    pub fn to_matrix(&self) -> PixelMatrix {
        let mut matrix = PixelMatrix::new(self.width(), self.height());
        for y in 0..self.height() {
            for x in 0..self.width() {
                matrix.set(x, y, self.pixel(x, y));
            }
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    #[test]
    fn test_diagonal_2x2() {
        let m = PixelMatrix::from_rows(&[[1, 0], [0, 1]]);
        let p = BlitPattern::pack(&m, 0).unwrap();
        assert_eq!(p.words(), &[(2 << 16) | (2 << 8), 0x9000_0000]);
    }

    #[test]
    fn test_empty_matrix_is_header_only() {
        let p = BlitPattern::pack(&PixelMatrix::new(0, 0), 8).unwrap();
        assert_eq!(p.words(), &[8]);
        assert_eq!(p.to_matrix(), PixelMatrix::new(0, 0));
    }

    #[test]
    fn test_exactly_32_pixels_has_no_padding_word() {
        let mut m = PixelMatrix::new(8, 4);
        m.set(7, 3, true);
        let p = BlitPattern::pack(&m, 1).unwrap();
        assert_eq!(p.words(), &[(8 << 16) | (4 << 8) | 1, 1]);
    }

    #[test]
    fn test_header_roundtrip_and_overflow() {
        let h = GlyphHeader::new(30, 22, 5).unwrap();
        assert_eq!(h.to_word(), 0x001E_1605);
        assert_eq!(GlyphHeader::from_word(0xFF1E_1605), h);
        assert_eq!(h.data_words(), 21);

        assert_eq!(
            GlyphHeader::new(256, 1, 0),
            Err(PackError::HeaderOverflow {
                width: 256,
                height: 1,
                y_offset: 0
            })
        );
        assert!(BlitPattern::pack(&PixelMatrix::new(1, 1), 300).is_err());
    }

    #[test]
    fn test_random_matrices_pack_and_unpack() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let w = rng.gen_range(0..40);
            let h = rng.gen_range(0..40);
            let mut m = PixelMatrix::new(w, h);
            for y in 0..h {
                for x in 0..w {
                    m.set(x, y, rng.gen_bool(0.3));
                }
            }
            let y_offset = rng.gen_range(0..=255);
            let p = BlitPattern::pack(&m, y_offset).unwrap();

            let expected_len = 1 + ((w * h) as usize).div_ceil(32);
            assert_eq!(p.words().len(), expected_len, "{}x{}", w, h);
            assert_eq!(p.header().pattern_len(), expected_len);
            assert_eq!(p.as_view().y_offset(), y_offset);
            assert_eq!(p.to_matrix(), m);

            // Padding bits are zero.
            let used = (w * h) % 32;
            if used != 0 {
                let last = *p.words().last().unwrap();
                assert_eq!(last & ((1u32 << (32 - used)) - 1), 0);
            }
        }
    }

    #[test]
    fn test_view_reads_from_buffer() {
        let a = BlitPattern::pack(&PixelMatrix::from_text("#.\n.#\n"), 0).unwrap();
        let b = BlitPattern::pack(&PixelMatrix::from_text("###\n"), 4).unwrap();
        let mut buffer = a.words().to_vec();
        buffer.extend_from_slice(b.words());

        let view = PatternView::read(&buffer, 2).unwrap();
        assert_eq!(view.y_offset(), 4);
        assert_eq!(view.to_matrix().to_text(), "###\n");
        assert!(view.pixel(2, 0));
        assert!(!view.pixel(3, 0));

        assert_eq!(PatternView::read(&buffer, 4), None);
        assert_eq!(PatternView::read(&buffer[..3], 2), None);
    }
}
