//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use teamsplit_engine::{
    App, Clipboard, ClipboardError, RosterConfig, TeamsplitConfig, ToastConfig, UiOptions,
};

/// Clipboard double that records every write and can be told to fail.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    writes: Rc<RefCell<Vec<String>>>,
    failing: Rc<RefCell<bool>>,
}

impl RecordingClipboard {
    pub fn set_failing(&self, failing: bool) {
        *self.failing.borrow_mut() = failing;
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if *self.failing.borrow() {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        self.writes.borrow_mut().push(text.to_owned());
        Ok(())
    }
}

pub fn config_with_members(members: &[&str]) -> TeamsplitConfig {
    TeamsplitConfig {
        roster: Some(RosterConfig {
            members: members.iter().map(ToString::to_string).collect(),
        }),
        ..TeamsplitConfig::default()
    }
}

/// Session over `members` with default options and a recording clipboard.
pub fn session(members: &[&str]) -> (App, RecordingClipboard) {
    session_with(&config_with_members(members), UiOptions::default())
}

pub fn session_with(config: &TeamsplitConfig, options: UiOptions) -> (App, RecordingClipboard) {
    let clipboard = RecordingClipboard::default();
    let app = App::with_options(Some(config), Box::new(clipboard.clone()), options);
    (app, clipboard)
}

/// Toast timings short enough to reason about in whole milliseconds.
pub fn fast_toasts(members: &[&str]) -> TeamsplitConfig {
    TeamsplitConfig {
        toast: Some(ToastConfig {
            visible_ms: Some(100),
            settle_ms: Some(10),
        }),
        ..config_with_members(members)
    }
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
