//! Memoized QR image derived from the screen inputs.
//!
//! The image is recomputed only when one of its inputs changes. The
//! previous image is dropped on every recompute.

use crate::palette::{BACKGROUND_COLORS, CODE_COLORS, ColorOption};
use crate::pixel_grid::PixelGrid;
use crate::render::{DEFAULT_SIZE, QrRenderer, RenderRequest};
use crate::symbol::{QrSymbolEncoder, SymbolEncoder};

/// Inputs the QR image depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrInputs {
    pub text: String,
    pub code_color: ColorOption,
    pub background_color: ColorOption,
    pub size: u32,
}

impl Default for QrInputs {
    fn default() -> Self {
        Self {
            text: String::new(),
            code_color: CODE_COLORS[0],
            background_color: BACKGROUND_COLORS[0],
            size: DEFAULT_SIZE,
        }
    }
}

impl QrInputs {
    fn to_request(&self) -> RenderRequest {
        RenderRequest::new(
            self.text.clone(),
            self.code_color.color,
            self.background_color.color,
        )
        .with_size(self.size)
    }
}

/// Holds the last computed image together with the inputs it was built from.
#[derive(Debug, Default)]
pub struct QrCompute<E = QrSymbolEncoder> {
    renderer: QrRenderer<E>,
    inputs: Option<QrInputs>,
    image: Option<PixelGrid>,
    revision: u64,
}

impl<E: SymbolEncoder> QrCompute<E> {
    pub fn with_encoder(encoder: E) -> Self {
        Self {
            renderer: QrRenderer::new(encoder),
            inputs: None,
            image: None,
            revision: 0,
        }
    }

    /// Recomputes the image if `inputs` differ from the last computed ones.
    ///
    /// Returns true when a recompute happened.
    pub fn sync(&mut self, inputs: &QrInputs) -> bool {
        if self.inputs.as_ref() == Some(inputs) {
            return false;
        }

        self.image = self.renderer.render_or_none(&inputs.to_request());
        self.inputs = Some(inputs.clone());
        self.revision += 1;

        log::debug!(
            "qr image recomputed revision={} has_image={}",
            self.revision,
            self.image.is_some()
        );
        true
    }

    /// The current image, if the last inputs produced one.
    pub fn image(&self) -> Option<&PixelGrid> {
        self.image.as_ref()
    }

    /// Increments on every recompute, including ones that produced no image.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
