//! System clipboard access for the room join link.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write clipboard: {0}")]
    Write(String),
}

pub trait Clipboard: Send {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by the OS via arboard. The handle is opened lazily and
/// reopened after a failure.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = match self.inner.as_mut() {
            Some(clipboard) => clipboard,
            None => {
                let clipboard = arboard::Clipboard::new()
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
                self.inner.insert(clipboard)
            }
        };

        if let Err(e) = clipboard.set_text(text.to_string()) {
            self.inner = None;
            return Err(ClipboardError::Write(e.to_string()));
        }
        Ok(())
    }
}
