//! View-side state shared between the engine and the renderer.

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// What keystrokes currently act on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands: navigate, add, remove, generate, copy.
    #[default]
    Normal,
    /// Keys edit the name of the member at `index` in place.
    Rename { index: usize },
}
