//! RGBA raster produced by the renderer.

use std::io::Cursor;

use image::{ImageFormat, ImageResult, Rgba, RgbaImage};

/// A rendered QR code image, one RGBA pixel per symbol matrix cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    image: RgbaImage,
}

impl PixelGrid {
    /// Creates a grid filled with `color`.
    pub fn filled(width: u32, height: u32, color: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, color),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        self.image.put_pixel(x, y, color);
    }

    /// Raw RGBA bytes in row-major order.
    pub fn as_rgba(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Distinct colors in order of first appearance.
    pub fn distinct_colors(&self) -> Vec<Rgba<u8>> {
        let mut seen: Vec<Rgba<u8>> = Vec::new();
        for pixel in self.image.pixels() {
            if !seen.contains(pixel) {
                seen.push(*pixel);
            }
        }
        seen
    }

    /// Encodes the grid as a PNG byte stream.
    pub fn encode_png(&self) -> ImageResult<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.image.write_to(&mut cursor, ImageFormat::Png)?;
        Ok(cursor.into_inner())
    }
}
