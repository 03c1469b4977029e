//! Desktop share targets for QR Studio.
//!
//! Desktop platforms have no share sheet that accepts a file handle, so
//! the exported QR code is shared by copying it to the system clipboard.

pub mod clipboard;

pub use clipboard::{
    ClipboardDispatcher, ClipboardError, ClipboardImage, ClipboardSink, MemoryClipboard,
    SystemClipboard,
};
