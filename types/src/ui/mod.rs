//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod toast;
mod view_state;

pub use animation::normalized_progress;

pub use toast::{
    DEFAULT_TOAST_SETTLE, DEFAULT_TOAST_VISIBLE, Toast, ToastKind, ToastMessage, ToastPhase,
};
pub use view_state::{InputMode, UiOptions};
