//! Preview atlas rendering.
//!
//! Decodes every packed glyph back out of a compiled font and lays them out
//! on a grid, in data order. Each glyph is drawn at its y-offset inside a
//! `max_height` cell, so baseline problems from trimming are easy to spot.

use crate::compile::CompiledFont;
use crate::pattern::PatternView;
use crate::png::GrayCanvas;

pub const BACKGROUND: u8 = 255;
pub const INK: u8 = 0;
/// Cell outline, drawn one pixel outside each cell.
pub const GRID: u8 = 200;

/// Preview layout options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Glyphs per atlas row.
    pub columns: u32,
    /// Pixels between cells.
    pub padding: u32,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            columns: 16,
            padding: 2,
        }
    }
}

/// Renders a compiled font's glyphs onto a grayscale canvas.
pub fn render_preview(font: &CompiledFont, options: PreviewOptions) -> GrayCanvas {
    let columns = options.columns.max(1);
    let cell = font.max_height.max(1);
    let pitch = cell + options.padding;
    let count = font.glyphs.len() as u32;
    let rows = count.div_ceil(columns).max(1);

    let width = options.padding + columns * pitch;
    let height = options.padding + rows * pitch;
    let mut canvas = GrayCanvas::new(width, height, BACKGROUND);

    for (i, glyph) in font.glyphs.iter().enumerate() {
        let i = i as u32;
        let x0 = options.padding + (i % columns) * pitch;
        let y0 = options.padding + (i / columns) * pitch;

        if options.padding > 0 {
            draw_outline(&mut canvas, x0, y0, cell);
        }

        let Some(view) = PatternView::read(&font.data, glyph.offset) else {
            continue;
        };
        for y in 0..view.height() {
            for x in 0..view.width() {
                if view.pixel(x, y) {
                    canvas.set(x0 + x, y0 + view.y_offset() + y, INK);
                }
            }
        }
    }

    canvas
}

fn draw_outline(canvas: &mut GrayCanvas, x0: u32, y0: u32, cell: u32) {
    let (left, top) = (x0 - 1, y0 - 1);
    let (right, bottom) = (x0 + cell, y0 + cell);
    for x in left..=right {
        canvas.set(x, top, GRID);
        canvas.set(x, bottom, GRID);
    }
    for y in top..=bottom {
        canvas.set(left, y, GRID);
        canvas.set(right, y, GRID);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::FontCompiler;
    use crate::image::DecodedImage;
    use crate::png::{write_grayscale_to_vec_with_hash, PngConfig};
    use blitfont_spec::{BlockTable, CharacterEntry, SpriteSheetSpec};

    fn font() -> CompiledFont {
        let known = BlockTable::known().unwrap();
        let included = known.subset(&["BASIC_LATIN"]).unwrap();
        let entries = vec![
            CharacterEntry::cluster("A", 0, 0),
            CharacterEntry::cluster("B", 0, 1),
            CharacterEntry::cluster("C", 0, 2),
        ];
        // 5px cells; 'A' has ink at local (1, 2), 'C' at local (4, 4).
        let mut pixels = vec![255u8; 15 * 5];
        pixels[2 * 15 + 1] = 0;
        pixels[4 * 15 + 14] = 0;
        let image = DecodedImage::from_gray8(15, 5, pixels).unwrap();
        FontCompiler::new(SpriteSheetSpec::new("Preview", 5, 3, 0, 0), entries, known, included)
            .compile(&image)
            .unwrap()
    }

    #[test]
    fn test_glyphs_drawn_at_their_offsets() {
        let canvas = render_preview(
            &font(),
            PreviewOptions {
                columns: 2,
                padding: 2,
            },
        );
        // pitch 7: 2 + 2*7 = 16 wide, 2 rows.
        assert_eq!((canvas.width, canvas.height), (16, 16));
        // 'A' trims to 1x1 at y-offset 2, x restarts at the cell's left edge.
        assert_eq!(canvas.get(2, 4), INK);
        // 'C' is the third glyph: second row, first column.
        assert_eq!(canvas.get(2, 9 + 4), INK);
        assert_eq!(canvas.get(1, 1), GRID);
        let ink = canvas.data.iter().filter(|&&p| p == INK).count();
        assert_eq!(ink, 2);
    }

    #[test]
    fn test_preview_is_deterministic() {
        let config = PngConfig::default();
        let first = render_preview(&font(), PreviewOptions::default());
        let second = render_preview(&font(), PreviewOptions::default());
        let (_, a) = write_grayscale_to_vec_with_hash(&first, &config).unwrap();
        let (_, b) = write_grayscale_to_vec_with_hash(&second, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_padding_no_outline() {
        let canvas = render_preview(
            &font(),
            PreviewOptions {
                columns: 3,
                padding: 0,
            },
        );
        assert_eq!((canvas.width, canvas.height), (15, 5));
        assert!(canvas.data.iter().all(|&p| p == BACKGROUND || p == INK));
    }
}
