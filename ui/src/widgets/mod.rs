mod color_selector;
mod qr_preview;
mod share_button;

pub use color_selector::{color_selector, color_swatch};
pub use qr_preview::{PREVIEW_SIZE, QrPreview, qr_preview};
pub use share_button::{SHARE_BUTTON_LABEL, share_button};
