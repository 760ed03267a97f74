//! Fixed-size RGB raster the glyph sheet is drawn into.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// A simple 2D RGB image buffer, row-major, initialized to black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Canvas {
    /// Create a new all-black canvas with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 3],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGB bytes, 3 per pixel, rows top to bottom.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Set a single pixel. Coordinates must be in bounds.
    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: (u8, u8, u8)) {
        debug_assert!(x < self.width && y < self.height);
        let base = (y * self.width + x) * 3;
        self.data[base] = rgb.0;
        self.data[base + 1] = rgb.1;
        self.data[base + 2] = rgb.2;
    }

    pub fn pixel(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let base = (y * self.width + x) * 3;
        (self.data[base], self.data[base + 1], self.data[base + 2])
    }

    /// Encode the raster as an 8-bit RGB PNG.
    ///
    /// Encoder settings are fixed and no ancillary chunks are written, so the
    /// same canvas always encodes to the same bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.data)?;
        writer.finish()?;
        Ok(out)
    }

    /// Encode and write the raster to `path`, overwriting any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let png = self.encode_png()?;
        fs::write(path, png)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_black() {
        let c = Canvas::new(4, 2);
        assert_eq!(c.as_bytes().len(), 4 * 2 * 3);
        assert!(c.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn set_pixel_round_trips() {
        let mut c = Canvas::new(4, 4);
        c.set_pixel(2, 3, (255, 255, 255));
        assert_eq!(c.pixel(2, 3), (255, 255, 255));
        assert_eq!(c.pixel(3, 2), (0, 0, 0));
    }

    #[test]
    fn encode_emits_png_signature() {
        let c = Canvas::new(8, 8);
        let png = c.encode_png().expect("encode");
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
