//! Boolean QR symbol matrices and the encoder seam that produces them.
//!
//! The actual QR encoding (data modes, error correction, masking) is done
//! by the `qrcode` crate. This module only lays the resulting modules out
//! on a pixel-sized grid.

use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};

/// Modules of light border around the symbol.
pub const DEFAULT_QUIET_ZONE: u32 = 4;

/// Largest width or height, in pixels, the encoder will lay out.
pub const MAX_DIMENSION: u32 = 4096;

/// Immutable grid of "module set" (dark) / "module clear" (light) cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMatrix {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl SymbolMatrix {
    /// Builds a matrix by asking `is_set` about every `(x, y)` cell.
    pub fn from_fn(width: u32, height: u32, mut is_set: impl FnMut(u32, u32) -> bool) -> Self {
        let mut bits = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                bits.push(is_set(x, y));
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns whether the cell at `(x, y)` is set. Out of bounds cells are clear.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[y as usize * self.width as usize + x as usize]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Found empty contents")]
    EmptyContents,
    #[error("Requested dimensions are out of range: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("QR encoding failed: {0}")]
    Qr(#[from] QrError),
}

/// Produces a symbol matrix for `text` sized to `width × height` pixels.
///
/// Implementations may return a larger matrix when the symbol cannot fit
/// into the requested dimensions.
pub trait SymbolEncoder {
    fn encode(&self, text: &str, width: u32, height: u32) -> Result<SymbolMatrix, EncodeError>;
}

/// QR encoder backed by the `qrcode` crate.
///
/// The returned matrix is pre-scaled: the symbol (plus its quiet zone) is
/// enlarged by the largest whole factor that fits the requested size and
/// centered, so every module maps to a square block of equal size. When
/// the requested size is smaller than the symbol, the symbol is returned
/// at one pixel per module.
#[derive(Debug, Clone, Copy)]
pub struct QrSymbolEncoder {
    pub ec_level: EcLevel,
    pub quiet_zone: u32,
}

impl Default for QrSymbolEncoder {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::L,
            quiet_zone: DEFAULT_QUIET_ZONE,
        }
    }
}

impl SymbolEncoder for QrSymbolEncoder {
    fn encode(&self, text: &str, width: u32, height: u32) -> Result<SymbolMatrix, EncodeError> {
        if text.is_empty() {
            return Err(EncodeError::EmptyContents);
        }
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(EncodeError::InvalidDimensions { width, height });
        }

        let code = QrCode::with_error_correction_level(text.as_bytes(), self.ec_level)?;
        let modules = code.width() as u32;
        let padded = modules + self.quiet_zone * 2;

        let output_width = width.max(padded);
        let output_height = height.max(padded);
        let multiple = (output_width / padded).min(output_height / padded);

        let left = (output_width - modules * multiple) / 2;
        let top = (output_height - modules * multiple) / 2;

        log::trace!(
            "qr symbol modules={modules} multiple={multiple} output={output_width}x{output_height}"
        );

        Ok(SymbolMatrix::from_fn(output_width, output_height, |x, y| {
            if x < left || y < top {
                return false;
            }
            let mx = (x - left) / multiple;
            let my = (y - top) / multiple;
            mx < modules && my < modules && code[(mx as usize, my as usize)] == Color::Dark
        }))
    }
}
