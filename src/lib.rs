//! Glyph sheet generator
//!
//! Draws a 128x128 test font atlas (a 16x16 grid of 8x8 glyph cells covering
//! code points 0-255) and writes it to disk as `test_font_8x8.png`. The asset
//! is a structural alignment fixture for text-rendering tests, not a faithful
//! font: a handful of characters carry hand-authored pixel patterns and every
//! other code point falls back to a centered 3x3 placeholder square.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> glyphsheet::Result<()> {
//! glyphsheet::sheet::write_sheet(glyphsheet::OUTPUT_FILE)?;
//! println!("{}", glyphsheet::sheet::summary());
//! # Ok(())
//! # }
//! ```

pub mod canvas;
pub mod error;
pub mod glyphs;
pub mod sheet;

pub use canvas::Canvas;
pub use error::{Error, Result};

/// Edge length of the sheet in pixels.
pub const SHEET_SIZE: usize = 128;

/// Glyph cells per row (and per column; the grid is square).
pub const CHARS_PER_ROW: usize = 16;

/// Edge length of one glyph cell in pixels.
pub const GLYPH_SIZE: usize = 8;

/// Total glyph cells in the sheet.
pub const GLYPH_COUNT: usize = CHARS_PER_ROW * CHARS_PER_ROW;

/// File name the sheet is written under, relative to the working directory.
pub const OUTPUT_FILE: &str = "test_font_8x8.png";
