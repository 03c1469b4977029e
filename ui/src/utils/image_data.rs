//! Conversion of rendered QR codes into egui images.

use egui::ColorImage;
use qrstudio_business::PixelGrid;

/// Builds an egui image from a rendered grid.
///
/// Pixels keep straight (unmultiplied) alpha, matching the PNG export.
pub fn to_color_image(grid: &PixelGrid) -> ColorImage {
    ColorImage::from_rgba_unmultiplied(
        [grid.width() as usize, grid.height() as usize],
        grid.as_rgba(),
    )
}
