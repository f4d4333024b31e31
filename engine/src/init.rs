//! Session construction from configuration and environment.

use std::env;
use std::time::Instant;

use teamsplit_types::HistoryLedger;
use teamsplit_types::ui::{InputMode, Toast};

use crate::config::{TeamsplitConfig, env_flag};
use crate::{App, Clipboard, Roster, UiOptions};

impl App {
    pub fn new(config: Option<&TeamsplitConfig>, clipboard: Box<dyn Clipboard>) -> Self {
        let ui_options =
            Self::ui_options_with_env(config, |key| env::var(key).ok());
        Self::with_options(config, clipboard, ui_options)
    }

    /// Like [`App::new`] but with UI options fixed by the caller, ignoring the
    /// environment.
    pub fn with_options(
        config: Option<&TeamsplitConfig>,
        clipboard: Box<dyn Clipboard>,
        ui_options: UiOptions,
    ) -> Self {
        let roster = Self::roster_from_config(config);
        let toast = config
            .and_then(|cfg| cfg.toast.as_ref())
            .map(|toast| Toast::new(toast.visible(), toast.settle()))
            .unwrap_or_default();

        tracing::info!(members = roster.len(), "Session started");

        Self {
            roster,
            teams: None,
            history: HistoryLedger::new(),
            toast,
            clipboard,
            input_mode: InputMode::Normal,
            selected: 0,
            history_scroll: 0,
            ui_options,
            should_quit: false,
            tick: 0,
            last_frame: Instant::now(),
        }
    }

    fn roster_from_config(config: Option<&TeamsplitConfig>) -> Roster {
        match config.and_then(|cfg| cfg.roster.as_ref()) {
            Some(roster) => Roster::from_members(roster.members.iter().cloned()),
            None => Roster::with_defaults(),
        }
    }

    fn ui_options_from_config(config: Option<&TeamsplitConfig>) -> UiOptions {
        let app = config.and_then(|cfg| cfg.app.as_ref());
        UiOptions {
            ascii_only: app.is_some_and(|cfg| cfg.ascii_only),
            high_contrast: app.is_some_and(|cfg| cfg.high_contrast),
            reduced_motion: app.is_some_and(|cfg| cfg.reduced_motion),
        }
    }

    /// Config values, with `TEAMSPLIT_ASCII`, `TEAMSPLIT_HIGH_CONTRAST` and
    /// `TEAMSPLIT_REDUCED_MOTION` able to switch options on.
    pub(crate) fn ui_options_with_env(
        config: Option<&TeamsplitConfig>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> UiOptions {
        let mut options = Self::ui_options_from_config(config);
        let enabled = |key: &str| lookup(key).is_some_and(|value| env_flag(&value));
        if enabled("TEAMSPLIT_ASCII") {
            options.ascii_only = true;
        }
        if enabled("TEAMSPLIT_HIGH_CONTRAST") {
            options.high_contrast = true;
        }
        if enabled("TEAMSPLIT_REDUCED_MOTION") {
            options.reduced_motion = true;
        }
        options
    }
}
