//! Fixed color choices offered on the studio screen.
//!
//! Both lists are small, ordered and immutable. The first entry of each
//! list is the initial selection.

use image::Rgba;

/// A selectable color: a display label and the concrete RGBA value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub label: &'static str,
    pub color: Rgba<u8>,
}

impl ColorOption {
    pub const fn new(label: &'static str, color: [u8; 4]) -> Self {
        Self {
            label,
            color: Rgba(color),
        }
    }
}

pub const BLACK: ColorOption = ColorOption::new("Black", [0x00, 0x00, 0x00, 0xFF]);
pub const RED: ColorOption = ColorOption::new("Red", [0xFF, 0x00, 0x00, 0xFF]);
pub const GREEN: ColorOption = ColorOption::new("Green", [0x00, 0xFF, 0x00, 0xFF]);
pub const BLUE: ColorOption = ColorOption::new("Blue", [0x00, 0x00, 0xFF, 0xFF]);
pub const MAGENTA: ColorOption = ColorOption::new("Magenta", [0xFF, 0x00, 0xFF, 0xFF]);

pub const TRANSPARENT: ColorOption = ColorOption::new("Transparent", [0x00, 0x00, 0x00, 0x00]);
pub const WHITE: ColorOption = ColorOption::new("White", [0xFF, 0xFF, 0xFF, 0xFF]);
pub const YELLOW: ColorOption = ColorOption::new("Yellow", [0xFF, 0xFF, 0x00, 0xFF]);
pub const LIGHT_GRAY: ColorOption = ColorOption::new("Light Gray", [0xCC, 0xCC, 0xCC, 0xFF]);
pub const CYAN: ColorOption = ColorOption::new("Cyan", [0x00, 0xFF, 0xFF, 0xFF]);

/// Colors for the dark modules of the code.
pub const CODE_COLORS: [ColorOption; 5] = [BLACK, RED, GREEN, BLUE, MAGENTA];

/// Colors for the light modules and quiet zone.
pub const BACKGROUND_COLORS: [ColorOption; 5] = [TRANSPARENT, WHITE, YELLOW, LIGHT_GRAY, CYAN];

/// Looks up an option by its display label.
pub fn find_option<'a>(options: &'a [ColorOption], label: &str) -> Option<&'a ColorOption> {
    options.iter().find(|option| option.label == label)
}
