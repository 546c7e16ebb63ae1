//! 2D 1-bit pixel matrices.

/// A width x height grid of ink/background pixels, stored row-major.
///
/// A matrix may have zero width or height; a fully trimmed blank glyph
/// is 0x0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PixelMatrix {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl PixelMatrix {
    /// Creates a blank matrix.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width as usize * height as usize],
        }
    }

    /// Builds a matrix from rows of 0/1 values, top row first.
    ///
    /// The width is the longest row; shorter rows are padded with
    /// background.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let width = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0) as u32;
        let mut matrix = Self::new(width, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.as_ref().iter().enumerate() {
                matrix.set(x as u32, y as u32, v != 0);
            }
        }
        matrix
    }

    /// Parses the `#`/`.` text form produced by [`PixelMatrix::to_text`].
    pub fn from_text(text: &str) -> Self {
        let rows: Vec<Vec<u8>> = text
            .lines()
            .map(|line| line.bytes().map(|b| u8::from(b == b'#')).collect())
            .collect();
        Self::from_rows(&rows)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the matrix has no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Number of pixels (`width * height`).
    pub fn area(&self) -> usize {
        self.pixels.len()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Gets a pixel. Out-of-range coordinates read as background.
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.pixels[self.index(x, y)]
    }

    /// Sets a pixel. Out-of-range writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, ink: bool) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.pixels[idx] = ink;
        }
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Number of ink pixels.
    pub fn ink_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Whether row `y` has no ink.
    pub fn row_is_blank(&self, y: u32) -> bool {
        (0..self.width).all(|x| !self.get(x, y))
    }

    /// Whether column `x` has no ink.
    pub fn col_is_blank(&self, x: u32) -> bool {
        (0..self.height).all(|y| !self.get(x, y))
    }

    /// Copies out the `width` x `height` region starting at `(x, y)`.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Self {
        let mut out = Self::new(width, height);
        for dy in 0..height {
            for dx in 0..width {
                out.set(dx, dy, self.get(x + dx, y + dy));
            }
        }
        out
    }

    /// Renders the matrix as lines of `#` (ink) and `.` (background).
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(if self.get(x, y) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_rows_pads_short_rows() {
        let m = PixelMatrix::from_rows(&[vec![1, 0, 1], vec![1]]);
        assert_eq!((m.width(), m.height()), (3, 2));
        assert_eq!(m.to_text(), "#.#\n#..\n");
        assert_eq!(m.ink_count(), 3);
    }

    #[test]
    fn test_text_roundtrip() {
        let text = "..#.\n.##.\n....\n";
        let m = PixelMatrix::from_text(text);
        assert_eq!(m.to_text(), text);
        assert!(m.row_is_blank(2));
        assert!(!m.row_is_blank(1));
        assert!(m.col_is_blank(0));
        assert!(m.col_is_blank(3));
        assert!(!m.col_is_blank(2));
    }

    #[test]
    fn test_crop_and_bounds() {
        let m = PixelMatrix::from_text("#..\n.#.\n..#\n");
        assert_eq!(m.crop(1, 1, 2, 2).to_text(), "#.\n.#\n");
        assert!(!m.get(5, 5));
        assert_eq!(m.crop(0, 0, 0, 0), PixelMatrix::new(0, 0));
    }

    #[test]
    fn test_empty_matrix() {
        let m = PixelMatrix::new(0, 0);
        assert!(m.is_empty());
        assert_eq!(m.to_text(), "");
        let m = PixelMatrix::new(0, 3);
        assert!(m.is_empty());
        assert!(m.row_is_blank(1));
    }
}
