//! Matrix-to-image rendering.
//!
//! [`generate_qr_code`] is what the screen calls: it never fails loudly,
//! it only reports "no image". [`QrRenderer::render`] exposes the typed
//! error for callers that want it.

use image::Rgba;

use crate::pixel_grid::PixelGrid;
use crate::symbol::{EncodeError, QrSymbolEncoder, SymbolEncoder, SymbolMatrix};

/// Source resolution of the displayed and shared image.
pub const DEFAULT_SIZE: u32 = 512;

/// Everything needed to draw one QR code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub text: String,
    pub size: u32,
    pub code_color: Rgba<u8>,
    pub background_color: Rgba<u8>,
}

impl RenderRequest {
    pub fn new(text: impl Into<String>, code_color: Rgba<u8>, background_color: Rgba<u8>) -> Self {
        Self {
            text: text.into(),
            size: DEFAULT_SIZE,
            code_color,
            background_color,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to encode QR symbol: {0}")]
    Encode(#[from] EncodeError),
}

/// Paints every set cell with `code_color` and every clear cell with
/// `background_color`. The grid has exactly the matrix dimensions.
pub fn paint(
    matrix: &SymbolMatrix,
    code_color: Rgba<u8>,
    background_color: Rgba<u8>,
) -> PixelGrid {
    let mut grid = PixelGrid::filled(matrix.width(), matrix.height(), background_color);
    for y in 0..matrix.height() {
        for x in 0..matrix.width() {
            if matrix.get(x, y) {
                grid.set(x, y, code_color);
            }
        }
    }
    grid
}

/// Renders requests through a [`SymbolEncoder`].
#[derive(Debug, Clone, Default)]
pub struct QrRenderer<E = QrSymbolEncoder> {
    encoder: E,
}

impl<E: SymbolEncoder> QrRenderer<E> {
    pub fn new(encoder: E) -> Self {
        Self { encoder }
    }

    pub fn render(&self, request: &RenderRequest) -> Result<PixelGrid, RenderError> {
        let matrix = self
            .encoder
            .encode(&request.text, request.size, request.size)?;
        Ok(paint(
            &matrix,
            request.code_color,
            request.background_color,
        ))
    }

    /// Like [`Self::render`], but logs failures and returns `None`.
    pub fn render_or_none(&self, request: &RenderRequest) -> Option<PixelGrid> {
        match self.render(request) {
            Ok(grid) => Some(grid),
            Err(e) => {
                log::warn!("No QR image for {} chars of text: {e}", request.text.len());
                None
            }
        }
    }
}

/// Generates a QR code image with the default encoder.
///
/// Returns `None` when the text cannot be encoded (including empty text).
pub fn generate_qr_code(
    text: &str,
    size: u32,
    code_color: Rgba<u8>,
    background_color: Rgba<u8>,
) -> Option<PixelGrid> {
    let request = RenderRequest::new(text, code_color, background_color).with_size(size);
    QrRenderer::<QrSymbolEncoder>::default().render_or_none(&request)
}
