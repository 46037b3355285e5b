use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(String);

pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard through `arboard`.
///
/// The handle is opened lazily and kept alive, since on X11 the copied text
/// is only served while the owning handle exists.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| ClipboardError("clipboard lock poisoned".to_string()))?;
        if guard.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|err| ClipboardError(err.to_string()))?;
            *guard = Some(clipboard);
        }
        match guard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|err| ClipboardError(err.to_string())),
            None => Err(ClipboardError("clipboard not initialized".to_string())),
        }
    }
}

/// In-process clipboard that records every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.writes.lock().ok()?.last().cloned()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .map(|writes| writes.clone())
            .unwrap_or_default()
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes
            .lock()
            .map_err(|_| ClipboardError("clipboard lock poisoned".to_string()))?
            .push(text.to_string());
        Ok(())
    }
}
