//! Core logic of QR Studio: turning text and two colors into a QR image,
//! and exporting that image for sharing.
//!
//! QR symbol encoding itself is done by the `qrcode` crate behind the
//! [`SymbolEncoder`] seam.

pub mod config;
pub mod export;
pub mod palette;
pub mod pixel_grid;
pub mod qr_compute;
pub mod render;
pub mod share;
pub mod symbol;

pub use config::{ConfigError, StudioConfig};
pub use export::{ExportArtifact, ExportError, ShareError, ShareExporter, share_bitmap};
pub use palette::{BACKGROUND_COLORS, CODE_COLORS, ColorOption};
pub use pixel_grid::PixelGrid;
pub use qr_compute::{QrCompute, QrInputs};
pub use render::{DEFAULT_SIZE, QrRenderer, RenderError, RenderRequest, generate_qr_code, paint};
pub use share::{
    ContentRef, DispatchError, DispatchedShare, RecordingDispatcher, ShareDispatcher, ShareRequest,
};
pub use symbol::{EncodeError, MAX_DIMENSION, QrSymbolEncoder, SymbolEncoder, SymbolMatrix};
