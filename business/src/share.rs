//! Share requests and the dispatcher seam that delivers them.
//!
//! A dispatcher is whatever hands the exported image to another program:
//! the system clipboard on desktop, a platform share sheet elsewhere.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const PNG_MIME_TYPE: &str = "image/png";
pub const SHARE_CHOOSER_TITLE: &str = "Share QR Code";

/// Opaque, permission-scoped reference to an exported file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRef {
    uri: String,
    path: PathBuf,
}

impl ContentRef {
    /// Builds `content://<authority>/<relative>` for `path` below `root`.
    ///
    /// Returns `None` if `path` is not inside `root`.
    pub fn for_file(authority: &str, root: &Path, path: &Path) -> Option<Self> {
        let relative = path.strip_prefix(root).ok()?;
        let segments: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            uri: format!("content://{authority}/{}", segments.join("/")),
            path: path.to_path_buf(),
        })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Local path behind the reference. Only dispatchers should read it.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A "send" action for one exported file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub content: ContentRef,
    pub mime_type: &'static str,
    /// Grant the receiving program read access to `content`.
    pub grant_read: bool,
    pub chooser_title: &'static str,
}

impl ShareRequest {
    pub fn png(content: ContentRef) -> Self {
        Self {
            content,
            mime_type: PNG_MIME_TYPE,
            grant_read: true,
            chooser_title: SHARE_CHOOSER_TITLE,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Unsupported content type: {0}")]
    UnsupportedType(String),
    #[error("Share target unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to read shared content: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode shared image: {0}")]
    Image(String),
}

/// Delivers a share request to an external share facility.
pub trait ShareDispatcher {
    fn dispatch(&self, request: &ShareRequest) -> Result<(), DispatchError>;
}

/// A request as seen by [`RecordingDispatcher`], with the file contents at
/// dispatch time.
#[derive(Debug, Clone)]
pub struct DispatchedShare {
    pub request: ShareRequest,
    pub bytes: Vec<u8>,
}

/// In-memory dispatcher that records every request.
///
/// Clones share the same record, so a test can keep one clone and hand
/// the other to the code under test.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    shares: Rc<RefCell<Vec<DispatchedShare>>>,
    fail_with: Option<String>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dispatcher whose target is always unavailable.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            shares: Rc::default(),
            fail_with: Some(reason.into()),
        }
    }

    pub fn shares(&self) -> Vec<DispatchedShare> {
        self.shares.borrow().clone()
    }

    pub fn last(&self) -> Option<DispatchedShare> {
        self.shares.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.shares.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.borrow().is_empty()
    }
}

impl ShareDispatcher for RecordingDispatcher {
    fn dispatch(&self, request: &ShareRequest) -> Result<(), DispatchError> {
        if let Some(reason) = &self.fail_with {
            return Err(DispatchError::Unavailable(reason.clone()));
        }
        let bytes = fs::read(request.content.path())?;
        log::debug!(
            "recorded share uri={} bytes={}",
            request.content.uri(),
            bytes.len()
        );
        self.shares.borrow_mut().push(DispatchedShare {
            request: request.clone(),
            bytes,
        });
        Ok(())
    }
}
