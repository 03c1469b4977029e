//! Shared color constants and conversions for the UI.

use egui::Color32;
use image::Rgba;

/// Light gray used for swatch and preview borders.
pub const BORDER_COLOR: Color32 = Color32::LIGHT_GRAY;

/// Background behind the whole screen.
pub const SCREEN_BACKGROUND: Color32 = Color32::GRAY;

/// Converts a straight-alpha RGBA value to an egui color.
pub fn to_color32(color: Rgba<u8>) -> Color32 {
    let [r, g, b, a] = color.0;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_conversion() {
        assert_eq!(to_color32(Rgba([255, 0, 255, 255])), Color32::from_rgb(255, 0, 255));
    }

    #[test]
    fn test_transparent_conversion() {
        assert_eq!(to_color32(Rgba([0, 0, 0, 0])), Color32::TRANSPARENT);
    }
}
