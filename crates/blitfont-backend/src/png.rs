//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same pixels always produce
//! byte-identical files.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    pub compression: Compression,
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Smallest files, slower.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Fastest encode, larger files.
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// An 8-bit grayscale canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayCanvas {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl GrayCanvas {
    pub fn new(width: u32, height: u32, fill: u8) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width as usize * height as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[(y * self.width + x) as usize]
    }

    /// Sets a pixel. Out-of-range writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = value;
        }
    }
}

/// Write a grayscale canvas to a PNG file.
pub fn write_grayscale(
    canvas: &GrayCanvas,
    path: &Path,
    config: &PngConfig,
) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_grayscale_to_writer(canvas, writer, config)
}

/// Write a grayscale canvas to any writer.
pub fn write_grayscale_to_writer<W: Write>(
    canvas: &GrayCanvas,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "{}x{} canvas",
            canvas.width, canvas.height
        )));
    }

    let mut encoder = Encoder::new(writer, canvas.width, canvas.height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&canvas.data)?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Write to a Vec<u8> and return the hash.
pub fn write_grayscale_to_vec_with_hash(
    canvas: &GrayCanvas,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_grayscale_to_writer(canvas, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{decode_png, SpriteImage};

    fn gradient() -> GrayCanvas {
        let mut canvas = GrayCanvas::new(64, 64, 0);
        for y in 0..64 {
            for x in 0..64 {
                canvas.set(x, y, ((x + y) * 2) as u8);
            }
        }
        canvas
    }

    #[test]
    fn test_grayscale_deterministic() {
        let config = PngConfig::default();

        let (data1, hash1) = write_grayscale_to_vec_with_hash(&gradient(), &config).unwrap();
        let (data2, hash2) = write_grayscale_to_vec_with_hash(&gradient(), &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
    }

    #[test]
    fn test_written_png_decodes_to_same_pixels() {
        let canvas = gradient();
        let (data, _) =
            write_grayscale_to_vec_with_hash(&canvas, &PngConfig::best_compression()).unwrap();
        let image = decode_png(&data).unwrap();
        assert_eq!((image.width(), image.height()), (64, 64));
        assert_eq!(image.red(10, 20), canvas.get(10, 20));
    }

    #[test]
    fn test_zero_size_rejected() {
        let canvas = GrayCanvas::new(0, 4, 255);
        assert!(matches!(
            write_grayscale_to_vec_with_hash(&canvas, &PngConfig::fast()),
            Err(PngError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("canvas.png");
        write_grayscale(&gradient(), &path, &PngConfig::default()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        let (_, hash) =
            write_grayscale_to_vec_with_hash(&gradient(), &PngConfig::default()).unwrap();
        assert_eq!(hash_png(&bytes), hash);
    }
}
