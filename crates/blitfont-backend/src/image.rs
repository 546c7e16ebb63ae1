//! Sprite sheet images.
//!
//! The compiler only needs the red channel of each pixel: a pixel is ink
//! when its red sample is exactly 0 at the sheet's full bit depth. Sheets are
//! drawn black-on-white, so any other value (including anti-aliased greys) is
//! background.

use std::path::Path;

use thiserror::Error;

/// Red sample value that counts as ink.
pub const INK_SAMPLE: u8 = 0;

/// Read access to the pixels of a decoded sprite sheet.
pub trait SpriteImage {
    /// Image width in pixels.
    fn width(&self) -> u32;

    /// Image height in pixels.
    fn height(&self) -> u32;

    /// 8-bit red sample at `(x, y)`. Callers stay within bounds.
    ///
    /// Deeper images report the most significant byte.
    fn red(&self, x: u32, y: u32) -> u8;

    /// Whether the pixel at `(x, y)` is ink.
    ///
    /// Images with more than 8 bits per sample override this to compare the
    /// whole sample.
    fn is_ink(&self, x: u32, y: u32) -> bool {
        self.red(x, y) == INK_SAMPLE
    }
}

/// Errors from loading a sprite sheet.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG decoding error: {0}")]
    Png(#[from] png::DecodingError),

    #[error("unsupported PNG color type {0:?}")]
    UnsupportedColor(png::ColorType),

    #[error("unsupported PNG bit depth {0:?}")]
    UnsupportedDepth(png::BitDepth),

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// An 8- or 16-bit image held in memory, one to four samples per pixel.
///
/// 16-bit samples are stored big-endian, as PNG lays them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    channels: usize,
    sample_bytes: usize,
    pixels: Vec<u8>,
}

impl DecodedImage {
    /// Wraps a tightly packed 8-bit pixel buffer.
    ///
    /// The red sample of each pixel is its first channel, so grayscale
    /// buffers work as-is.
    pub fn new(
        width: u32,
        height: u32,
        channels: usize,
        pixels: Vec<u8>,
    ) -> Result<Self, DecodeError> {
        Self::with_sample_bytes(width, height, channels, 1, pixels)
    }

    fn with_sample_bytes(
        width: u32,
        height: u32,
        channels: usize,
        sample_bytes: usize,
        pixels: Vec<u8>,
    ) -> Result<Self, DecodeError> {
        let expected = width as usize * height as usize * channels * sample_bytes;
        if channels == 0 || pixels.len() != expected {
            return Err(DecodeError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            sample_bytes,
            pixels,
        })
    }

    /// A single-channel image.
    pub fn from_gray8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DecodeError> {
        Self::new(width, height, 1, pixels)
    }

    /// Samples per pixel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Bytes per sample: 1 for 8-bit images, 2 for 16-bit ones.
    pub fn sample_bytes(&self) -> usize {
        self.sample_bytes
    }

    fn red_sample(&self, x: u32, y: u32) -> &[u8] {
        let pixel = self.channels * self.sample_bytes;
        let idx = (y as usize * self.width as usize + x as usize) * pixel;
        &self.pixels[idx..idx + self.sample_bytes]
    }
}

impl SpriteImage for DecodedImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn red(&self, x: u32, y: u32) -> u8 {
        self.red_sample(x, y)[0]
    }

    fn is_ink(&self, x: u32, y: u32) -> bool {
        self.red_sample(x, y).iter().all(|&b| b == INK_SAMPLE)
    }
}

/// Decodes PNG bytes into an image.
///
/// Palette and low bit-depth images are expanded to 8 bits, 16-bit samples
/// are kept whole.
pub fn decode_png(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => return Err(DecodeError::UnsupportedColor(other)),
    };
    let sample_bytes = match info.bit_depth {
        png::BitDepth::Eight => 1,
        png::BitDepth::Sixteen => 2,
        other => return Err(DecodeError::UnsupportedDepth(other)),
    };

    // Rows may be padded; repack them tightly.
    let row_bytes = info.width as usize * channels * sample_bytes;
    let mut pixels = Vec::with_capacity(row_bytes * info.height as usize);
    for row in buf.chunks(info.line_size).take(info.height as usize) {
        pixels.extend_from_slice(&row[..row_bytes]);
    }

    DecodedImage::with_sample_bytes(info.width, info.height, channels, sample_bytes, pixels)
}

/// Reads and decodes a PNG file.
pub fn load_png(path: &Path) -> Result<DecodedImage, DecodeError> {
    let bytes = std::fs::read(path).map_err(|source| DecodeError::Io {
        path: path.display().to_string(),
        source,
    })?;
    decode_png(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use png::{BitDepth, ColorType, Encoder};

    fn encode(width: u32, height: u32, color: ColorType, depth: BitDepth, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_decode_rgba_uses_red_channel() {
        // Black, red, white, and a pixel with zero red but full green.
        let data = [
            0, 0, 0, 255, 255, 0, 0, 255, //
            255, 255, 255, 255, 0, 255, 0, 255,
        ];
        let bytes = encode(2, 2, ColorType::Rgba, BitDepth::Eight, &data);
        let image = decode_png(&bytes).unwrap();

        assert_eq!((image.width(), image.height()), (2, 2));
        assert_eq!(image.channels(), 4);
        assert!(image.is_ink(0, 0));
        assert!(!image.is_ink(1, 0));
        assert!(!image.is_ink(0, 1));
        assert!(image.is_ink(1, 1));
    }

    #[test]
    fn test_decode_one_bit_grayscale_is_expanded() {
        // 3 pixels wide: 0b010 padded to a byte.
        let data = [0b0100_0000, 0b1010_0000];
        let bytes = encode(3, 2, ColorType::Grayscale, BitDepth::One, &data);
        let image = decode_png(&bytes).unwrap();

        assert_eq!(image.channels(), 1);
        let ink: Vec<bool> = (0..2)
            .flat_map(|y| (0..3).map(move |x| (x, y)))
            .map(|(x, y)| image.is_ink(x, y))
            .collect();
        assert_eq!(ink, vec![true, false, true, false, true, false]);
    }

    #[test]
    fn test_decode_sixteen_bit_compares_whole_sample() {
        // 0x00FF, 0xFF00, 0x0000
        let data = [0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00];
        let bytes = encode(3, 1, ColorType::Grayscale, BitDepth::Sixteen, &data);
        let image = decode_png(&bytes).unwrap();

        assert_eq!(image.sample_bytes(), 2);
        assert_eq!(image.red(0, 0), 0x00);
        assert!(!image.is_ink(0, 0));
        assert!(!image.is_ink(1, 0));
        assert!(image.is_ink(2, 0));
    }

    #[test]
    fn test_decode_sixteen_bit_rgba_reads_red() {
        // Red 0x0001 with zero green, then red 0x0000 with full green.
        let data = [
            0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, //
            0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF,
        ];
        let bytes = encode(2, 1, ColorType::Rgba, BitDepth::Sixteen, &data);
        let image = decode_png(&bytes).unwrap();

        assert_eq!(image.channels(), 4);
        assert!(!image.is_ink(0, 0));
        assert!(image.is_ink(1, 0));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode_png(b"not a png"), Err(DecodeError::Png(_))));
    }

    #[test]
    fn test_buffer_size_checked() {
        let err = DecodedImage::from_gray8(4, 4, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::BufferSize {
                expected: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_png(Path::new("/nonexistent/sheet.png")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sheet.png"));
    }
}
