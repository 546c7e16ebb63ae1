//! Blank margin trimming.

use blitfont_spec::TrimLimits;

use crate::matrix::PixelMatrix;

/// A trimmed glyph and the number of rows removed from its top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trimmed {
    pub matrix: PixelMatrix,
    pub y_offset: u32,
}

/// Strips blank rows and columns from each edge, up to the given limits.
///
/// Edges are processed top, bottom, left, right. A fully blank matrix with
/// generous limits therefore loses all of its rows to the top edge first,
/// giving a 0x0 result whose `y_offset` is the original height.
pub fn trim(matrix: &PixelMatrix, limits: TrimLimits) -> Trimmed {
    let (width, height) = (matrix.width(), matrix.height());

    let mut top = 0;
    while top < limits.top && top < height && matrix.row_is_blank(top) {
        top += 1;
    }

    let mut bottom = 0;
    while bottom < limits.bottom
        && top + bottom < height
        && matrix.row_is_blank(height - 1 - bottom)
    {
        bottom += 1;
    }

    let band = height - top - bottom;
    let blank_col = |x: u32| (top..top + band).all(|y| !matrix.get(x, y));

    let mut left = 0;
    while left < limits.left && left < width && blank_col(left) {
        left += 1;
    }

    let mut right = 0;
    while right < limits.right && left + right < width && blank_col(width - 1 - right) {
        right += 1;
    }

    Trimmed {
        matrix: matrix.crop(left, top, width - left - right, band),
        y_offset: top,
    }
}
