//! Clipboard service.
//!
//! Widgets only see the [`Clipboard`] trait; the binary plugs in
//! [`SystemClipboard`], tests use [`MemoryClipboard`].

use cli_clipboard::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Write-only clipboard contract used by the copy actions.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `cli-clipboard`.
///
/// The context is created on every write: it is not `Send` on every
/// platform and creating it is cheap.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut ctx = ClipboardContext::new().map_err(|e| {
            warn!(error = %e, "failed to open clipboard");
            ClipboardError::Unavailable(e.to_string())
        })?;
        ctx.set_contents(text.to_owned()).map_err(|e| {
            warn!(error = %e, "failed to write clipboard");
            ClipboardError::Write(e.to_string())
        })
    }
}

/// In-memory clipboard. Can be told to fail to exercise error paths.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write("memory clipboard set to fail".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
