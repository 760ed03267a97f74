//! Drawing loop and file output for the glyph sheet.

use std::path::Path;

use log::{debug, info};

use crate::canvas::Canvas;
use crate::error::Result;
use crate::glyphs::glyph_pattern;
use crate::{CHARS_PER_ROW, GLYPH_COUNT, GLYPH_SIZE, OUTPUT_FILE, SHEET_SIZE};

const WHITE: (u8, u8, u8) = (255, 255, 255);

/// Draw the glyph for `code` into its grid cell.
///
/// The cell is addressed as `(code % 16, code / 16)`, so each of the 256
/// codes lands in its own cell and cells never overlap.
fn draw_glyph(canvas: &mut Canvas, code: u8) {
    let base_x = (usize::from(code) % CHARS_PER_ROW) * GLYPH_SIZE;
    let base_y = (usize::from(code) / CHARS_PER_ROW) * GLYPH_SIZE;
    for &(dx, dy) in glyph_pattern(code) {
        canvas.set_pixel(base_x + usize::from(dx), base_y + usize::from(dy), WHITE);
    }
}

/// Draw all 256 glyph cells onto a fresh black canvas.
pub fn generate() -> Canvas {
    let mut canvas = Canvas::new(SHEET_SIZE, SHEET_SIZE);
    for code in 0..=u8::MAX {
        draw_glyph(&mut canvas, code);
    }
    debug!("drew {} glyph cells", GLYPH_COUNT);
    canvas
}

/// Generate the sheet, encode it as PNG and write it to `path`.
///
/// Overwrites any existing file at that path. Failures to encode or write
/// propagate to the caller; there is no partial-output fallback.
pub fn write_sheet(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let canvas = generate();
    canvas.save(path)?;
    info!("wrote glyph sheet to {}", path.display());
    Ok(())
}

/// The two-line summary printed after a successful run.
pub fn summary() -> String {
    format!(
        "Generated {}: {}x{} pixels, {}x{} grid of {}x{} glyphs\nTotal glyphs: {}",
        OUTPUT_FILE,
        SHEET_SIZE,
        SHEET_SIZE,
        CHARS_PER_ROW,
        CHARS_PER_ROW,
        GLYPH_SIZE,
        GLYPH_SIZE,
        GLYPH_COUNT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_sheet_sized_canvas() {
        let canvas = generate();
        assert_eq!(canvas.width(), SHEET_SIZE);
        assert_eq!(canvas.height(), SHEET_SIZE);
    }

    #[test]
    fn space_cell_stays_black() {
        let canvas = generate();
        let base_x = (usize::from(b' ') % CHARS_PER_ROW) * GLYPH_SIZE;
        let base_y = (usize::from(b' ') / CHARS_PER_ROW) * GLYPH_SIZE;
        for dy in 0..GLYPH_SIZE {
            for dx in 0..GLYPH_SIZE {
                assert_eq!(canvas.pixel(base_x + dx, base_y + dy), (0, 0, 0));
            }
        }
    }

    #[test]
    fn summary_has_exact_wording() {
        assert_eq!(
            summary(),
            "Generated test_font_8x8.png: 128x128 pixels, 16x16 grid of 8x8 glyphs\n\
             Total glyphs: 256"
        );
    }
}
