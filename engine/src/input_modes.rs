//! In-place member renaming.
//!
//! Every edit is applied to the roster immediately, so the roster always shows
//! exactly what has been typed so far. There is no draft to commit or discard.

use unicode_segmentation::UnicodeSegmentation;

use crate::{App, InputMode};

impl App {
    /// Start renaming the selected member. No-op on an empty roster.
    pub fn begin_rename(&mut self) {
        if self.selected < self.roster.len() {
            self.input_mode = InputMode::Rename {
                index: self.selected,
            };
        }
    }

    pub fn finish_rename(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Index of the member being renamed, if in rename mode.
    #[must_use]
    pub fn rename_target(&self) -> Option<usize> {
        match self.input_mode {
            InputMode::Rename { index } => Some(index),
            InputMode::Normal => None,
        }
    }

    pub fn rename_insert_char(&mut self, c: char) {
        self.edit_target(|name| name.push(c));
    }

    pub fn rename_insert_str(&mut self, text: &str) {
        // Names are single-line.
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        self.edit_target(|name| name.push_str(&text));
    }

    /// Delete the last grapheme of the name being edited.
    pub fn rename_backspace(&mut self) {
        self.edit_target(|name| {
            if let Some((offset, _)) = name.grapheme_indices(true).next_back() {
                name.truncate(offset);
            }
        });
    }

    pub fn rename_clear(&mut self) {
        self.edit_target(String::clear);
    }

    fn edit_target(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(index) = self.rename_target() else {
            return;
        };
        let Some(current) = self.roster.get(index) else {
            self.input_mode = InputMode::Normal;
            return;
        };
        let mut name = current.to_owned();
        edit(&mut name);
        self.rename_member(index, name);
    }
}
