//! System clipboard backed by `arboard`.

use teamsplit_engine::{Clipboard, ClipboardError};

/// Lazily connects to the system clipboard on first write.
///
/// The handle is kept for the rest of the session: on X11 the copied text is
/// only served while the owning `arboard::Clipboard` is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
        };
        let result = clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()));
        self.inner = Some(clipboard);
        result
    }
}
