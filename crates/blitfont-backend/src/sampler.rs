//! Grid cell sampling.

use blitfont_spec::{GlyphLocation, SpriteSheetSpec};
use thiserror::Error;

use crate::image::SpriteImage;
use crate::matrix::PixelMatrix;

/// Errors from reading a grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("sheet geometry has zero cell size or zero columns")]
    InvalidSheet,

    #[error("{location} is outside the {rows}x{cols} grid")]
    OutOfGrid {
        location: GlyphLocation,
        rows: u32,
        cols: u32,
    },

    #[error("{location} extends past the {width}x{height} image")]
    OutOfImage {
        location: GlyphLocation,
        width: u32,
        height: u32,
    },
}

/// Number of complete grid rows the image holds.
pub fn grid_rows<I: SpriteImage + ?Sized>(image: &I, sheet: &SpriteSheetSpec) -> u32 {
    sheet.rows_for_height(image.height())
}

/// Reads the `size` x `size` cell at `location` into a pixel matrix.
///
/// A pixel is ink when its red sample is 0.
pub fn sample_cell<I: SpriteImage + ?Sized>(
    image: &I,
    sheet: &SpriteSheetSpec,
    location: GlyphLocation,
) -> Result<PixelMatrix, SampleError> {
    if sheet.size == 0 || sheet.cols == 0 {
        return Err(SampleError::InvalidSheet);
    }

    let rows = grid_rows(image, sheet);
    if location.row >= rows || location.col >= sheet.cols {
        return Err(SampleError::OutOfGrid {
            location,
            rows,
            cols: sheet.cols,
        });
    }

    let out_of_image = SampleError::OutOfImage {
        location,
        width: image.width(),
        height: image.height(),
    };
    let (x0, y0) = sheet.cell_origin(location).ok_or(out_of_image.clone())?;
    let fits = |origin: u32, limit: u32| {
        origin
            .checked_add(sheet.size)
            .is_some_and(|end| end <= limit)
    };
    if !fits(x0, image.width()) || !fits(y0, image.height()) {
        return Err(out_of_image);
    }

    let mut matrix = PixelMatrix::new(sheet.size, sheet.size);
    for y in 0..sheet.size {
        for x in 0..sheet.size {
            if image.is_ink(x0 + x, y0 + y) {
                matrix.set(x, y, true);
            }
        }
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::DecodedImage;
    use pretty_assertions::assert_eq;

    /// 2x2 grid of 3px cells, 1px gutter, 1px border: 9x9 white image.
    fn sheet() -> SpriteSheetSpec {
        SpriteSheetSpec::new("Test", 3, 2, 1, 1)
    }

    fn white(width: u32, height: u32) -> Vec<u8> {
        vec![255; (width * height) as usize]
    }

    #[test]
    fn test_sample_reads_the_right_cell() {
        let mut pixels = white(9, 9);
        // Ink at cell (1, 1) local (0, 2): image (1+4+0, 1+4+2) = (5, 7).
        pixels[7 * 9 + 5] = 0;
        // Anti-aliased grey is background.
        pixels[7 * 9 + 6] = 1;
        // Gutter pixel, belongs to no cell.
        pixels[4 * 9 + 4] = 0;
        let image = DecodedImage::from_gray8(9, 9, pixels).unwrap();

        let cell = sample_cell(&image, &sheet(), GlyphLocation::new(1, 1)).unwrap();
        assert_eq!(cell.to_text(), "...\n...\n#..\n");

        for (row, col) in [(0, 0), (0, 1), (1, 0)] {
            let cell = sample_cell(&image, &sheet(), GlyphLocation::new(row, col)).unwrap();
            assert_eq!(cell.ink_count(), 0, "cell ({}, {})", row, col);
        }
    }

    #[test]
    fn test_grid_rows_uses_border_and_pitch() {
        let image = DecodedImage::from_gray8(9, 9, white(9, 9)).unwrap();
        assert_eq!(grid_rows(&image, &sheet()), 2);
        let short = DecodedImage::from_gray8(9, 8, white(9, 8)).unwrap();
        assert_eq!(grid_rows(&short, &sheet()), 1);
    }

    #[test]
    fn test_out_of_grid() {
        let image = DecodedImage::from_gray8(9, 9, white(9, 9)).unwrap();
        let err = sample_cell(&image, &sheet(), GlyphLocation::new(2, 0)).unwrap_err();
        assert_eq!(
            err,
            SampleError::OutOfGrid {
                location: GlyphLocation::new(2, 0),
                rows: 2,
                cols: 2
            }
        );
        assert!(sample_cell(&image, &sheet(), GlyphLocation::new(0, 2)).is_err());
    }

    #[test]
    fn test_out_of_image_width() {
        // Too narrow for the second column.
        let image = DecodedImage::from_gray8(7, 9, white(7, 9)).unwrap();
        let err = sample_cell(&image, &sheet(), GlyphLocation::new(0, 1)).unwrap_err();
        assert!(matches!(err, SampleError::OutOfImage { width: 7, .. }));
        assert!(sample_cell(&image, &sheet(), GlyphLocation::new(0, 0)).is_ok());
    }

    #[test]
    fn test_far_column_is_out_of_image() {
        let image = DecodedImage::from_gray8(4, 40, vec![255; 4 * 40]).unwrap();
        let wide = SpriteSheetSpec::new("Wide", 30, u32::MAX, 2, 2);

        for col in [200_000_000, u32::MAX - 1] {
            let err = sample_cell(&image, &wide, GlyphLocation::new(0, col)).unwrap_err();
            assert_eq!(
                err,
                SampleError::OutOfImage {
                    location: GlyphLocation::new(0, col),
                    width: 4,
                    height: 40
                }
            );
        }
    }

    #[test]
    fn test_cell_end_past_u32_is_out_of_image() {
        let image = DecodedImage::from_gray8(4, 4, vec![255; 16]).unwrap();
        let sheet = SpriteSheetSpec::new("Edge", 2, u32::MAX, 0, 0);
        // The origin 0xFFFF_FFFE fits, its end does not.
        let loc = GlyphLocation::new(0, u32::MAX / 2);
        assert_eq!(sheet.cell_origin(loc), Some((u32::MAX - 1, 0)));
        let err = sample_cell(&image, &sheet, loc).unwrap_err();
        assert!(matches!(err, SampleError::OutOfImage { .. }));
    }

    #[test]
    fn test_invalid_sheet() {
        let image = DecodedImage::from_gray8(9, 9, white(9, 9)).unwrap();
        let zero = SpriteSheetSpec::new("Zero", 0, 2, 0, 0);
        assert_eq!(
            sample_cell(&image, &zero, GlyphLocation::new(0, 0)),
            Err(SampleError::InvalidSheet)
        );
    }
}
