//! Share target that places the exported QR image on the system clipboard.
//!
//! # Architecture
//!
//! - [`ClipboardSink`]: anything that can accept an RGBA image
//! - [`SystemClipboard`]: production sink using the `arboard` crate
//! - [`MemoryClipboard`]: in-memory sink for tests
//! - [`ClipboardDispatcher`]: reads the exported PNG behind a
//!   [`ContentRef`](qrstudio_business::ContentRef) and hands it to a sink
//!
//! # Platform Support
//!
//! - **Windows**: Win32 clipboard (`CF_DIBV5`)
//! - **macOS**: `NSPasteboard`
//! - **Linux X11 / Wayland**: selections via `arboard`; the clipboard handle is
//!   kept alive so the image stays available after the share returns

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use image::ImageFormat;
use qrstudio_business::share::PNG_MIME_TYPE;
use qrstudio_business::{DispatchError, ShareDispatcher, ShareRequest};

/// Error types for clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// Failed to open the clipboard.
    #[error("Clipboard access error: {0}")]
    AccessError(String),
    /// The clipboard rejected the image.
    #[error("Clipboard write error: {0}")]
    WriteError(String),
}

impl From<ClipboardError> for DispatchError {
    fn from(e: ClipboardError) -> Self {
        Self::Unavailable(e.to_string())
    }
}

/// Accepts decoded RGBA images.
pub trait ClipboardSink {
    fn set_image(&self, width: usize, height: usize, rgba: Vec<u8>) -> Result<(), ClipboardError>;
}

/// System clipboard implementation using the `arboard` crate.
#[derive(Default)]
pub struct SystemClipboard {
    inner: RefCell<Option<arboard::Clipboard>>,
}

impl ClipboardSink for SystemClipboard {
    fn set_image(&self, width: usize, height: usize, rgba: Vec<u8>) -> Result<(), ClipboardError> {
        let mut slot = self.inner.borrow_mut();
        if slot.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::AccessError(e.to_string()))?;
            *slot = Some(clipboard);
        }
        let Some(clipboard) = slot.as_mut() else {
            return Err(ClipboardError::AccessError("clipboard unavailable".to_owned()));
        };

        clipboard
            .set_image(arboard::ImageData {
                width,
                height,
                bytes: rgba.into(),
            })
            .map_err(|e| ClipboardError::WriteError(e.to_string()))
    }
}

/// An image held by [`MemoryClipboard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardImage {
    pub width: usize,
    pub height: usize,
    pub bytes: Vec<u8>,
}

/// In-memory clipboard. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    image: Rc<RefCell<Option<ClipboardImage>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<ClipboardImage> {
        self.image.borrow().clone()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_image(&self, width: usize, height: usize, rgba: Vec<u8>) -> Result<(), ClipboardError> {
        *self.image.borrow_mut() = Some(ClipboardImage {
            width,
            height,
            bytes: rgba,
        });
        Ok(())
    }
}

/// Shares PNG exports by copying the image to a clipboard.
#[derive(Default)]
pub struct ClipboardDispatcher<C = SystemClipboard> {
    sink: C,
}

impl<C: ClipboardSink> ClipboardDispatcher<C> {
    pub fn new(sink: C) -> Self {
        Self { sink }
    }
}

impl<C: ClipboardSink> ShareDispatcher for ClipboardDispatcher<C> {
    fn dispatch(&self, request: &ShareRequest) -> Result<(), DispatchError> {
        if request.mime_type != PNG_MIME_TYPE {
            return Err(DispatchError::UnsupportedType(request.mime_type.to_owned()));
        }

        let bytes = fs::read(request.content.path())?;
        let image = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .map_err(|e| DispatchError::Image(e.to_string()))?
            .to_rgba8();
        let (width, height) = image.dimensions();

        self.sink
            .set_image(width as usize, height as usize, image.into_raw())?;

        log::info!(
            target: "qrstudio_share::clipboard",
            "Copied {width}x{height} QR code to clipboard ({})",
            request.chooser_title
        );
        Ok(())
    }
}
