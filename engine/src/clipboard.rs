//! Outbound clipboard boundary.
//!
//! The engine only formats text and decides which toast to show; the actual
//! system clipboard lives behind this trait so the session can be driven
//! without a display server.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
