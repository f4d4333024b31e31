//! Session state and orchestration for teamsplit.
//!
//! [`App`] owns everything a session has: the roster, the current teams, the
//! history ledger, the toast slot and the view state the renderer reads. All
//! mutation happens synchronously inside key handlers; the only time-driven
//! piece is the toast, which is advanced once per frame from [`App::tick`].

mod clipboard;
mod config;
mod init;
mod input_modes;
mod partition;

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use rand::Rng;

pub use clipboard::{Clipboard, ClipboardError};
pub use config::{AppConfig, ConfigError, RosterConfig, TeamsplitConfig, ToastConfig, config_path};
pub use partition::generate;
pub use teamsplit_types::ui::{
    InputMode, Toast, ToastKind, ToastMessage, ToastPhase, UiOptions, normalized_progress,
};
pub use teamsplit_types::{
    HISTORY_CAPACITY, HistoryEntry, HistoryLedger, Partition, Roster, RosterError, TEAM_A_LABEL,
    TEAM_B_LABEL, format_team_line,
};

/// Toast text after a successful copy.
pub const COPY_SUCCESS_MESSAGE: &str = "Teams copied to clipboard!";

/// Toast text when copy is requested before any teams exist.
pub const NOTHING_TO_COPY_MESSAGE: &str = "Generate teams first";

/// Format used for history timestamps (local time).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct App {
    roster: Roster,
    /// Latest partition; `None` until teams are generated for the first time.
    teams: Option<Partition>,
    history: HistoryLedger,
    toast: Toast,
    clipboard: Box<dyn Clipboard>,
    input_mode: InputMode,
    /// Highlighted roster row. Always `< roster.len()` unless the roster is empty.
    selected: usize,
    /// First previous-history entry shown. Always `< history.previous().len()`
    /// unless there is none.
    history_scroll: usize,
    ui_options: UiOptions,
    should_quit: bool,
    tick: usize,
    /// Frame timing for the toast clock.
    last_frame: Instant,
}

impl App {
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn teams(&self) -> Option<&Partition> {
        self.teams.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn history_scroll(&self) -> usize {
        self.history_scroll
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ------------------------------------------------------------------
    // Roster
    // ------------------------------------------------------------------

    /// Append a synthesized member and select it.
    pub fn add_member(&mut self) {
        let name = self.roster.add().to_owned();
        self.selected = self.roster.len() - 1;
        tracing::debug!(%name, len = self.roster.len(), "Member added");
    }

    /// Replace the member at `index` verbatim. Out-of-range indices are ignored.
    pub fn rename_member(&mut self, index: usize, name: impl Into<String>) {
        if let Err(err) = self.roster.rename(index, name) {
            tracing::warn!("Ignoring rename: {err}");
        }
    }

    /// Remove the member at `index`. Out-of-range indices are ignored.
    pub fn remove_member(&mut self, index: usize) {
        match self.roster.remove(index) {
            Ok(name) => {
                tracing::debug!(%name, len = self.roster.len(), "Member removed");
                self.clamp_selection();
                // Keep a rename pointed at the same member, or end it if that
                // member is gone.
                if let InputMode::Rename { index: target } = self.input_mode {
                    self.input_mode = match target.cmp(&index) {
                        Ordering::Less => InputMode::Rename { index: target },
                        Ordering::Equal => InputMode::Normal,
                        Ordering::Greater => InputMode::Rename { index: target - 1 },
                    };
                }
            }
            Err(err) => tracing::warn!("Ignoring remove: {err}"),
        }
    }

    pub fn remove_selected(&mut self) {
        self.remove_member(self.selected);
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.roster.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.roster.len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.roster.len().saturating_sub(1));
    }

    // ------------------------------------------------------------------
    // Teams
    // ------------------------------------------------------------------

    /// Generate teams with the thread-local RNG.
    pub fn generate_teams(&mut self) -> &Partition {
        self.generate_teams_with(&mut rand::rng())
    }

    /// Generate teams from a roster snapshot, make them current and record
    /// them in history.
    pub fn generate_teams_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Partition {
        let partition = partition::generate(&self.roster, rng);
        tracing::info!(
            team_a = partition.team_a().len(),
            team_b = partition.team_b().len(),
            "Teams generated"
        );
        self.history
            .record(HistoryEntry::new(partition.clone(), timestamp_now()));
        self.history_scroll = 0;
        self.teams.insert(partition)
    }

    /// Scroll the history panel towards older entries.
    pub fn scroll_history_down(&mut self) {
        let last = self.history.previous().len().saturating_sub(1);
        self.history_scroll = (self.history_scroll + 1).min(last);
    }

    /// Scroll the history panel towards newer entries.
    pub fn scroll_history_up(&mut self) {
        self.history_scroll = self.history_scroll.saturating_sub(1);
    }

    /// Copy the current teams to the clipboard and report the outcome as a toast.
    ///
    /// Exactly one toast is shown per call. Clipboard failures are reported,
    /// never propagated.
    pub fn copy_teams(&mut self) {
        let Some(teams) = self.teams.as_ref() else {
            self.toast.show(ToastMessage::failure(NOTHING_TO_COPY_MESSAGE));
            return;
        };

        let text = teams.clipboard_text();
        match self.clipboard.set_text(&text) {
            Ok(()) => {
                tracing::info!(bytes = text.len(), "Teams copied to clipboard");
                self.toast.show(ToastMessage::success(COPY_SUCCESS_MESSAGE));
            }
            Err(err) => {
                tracing::warn!("Clipboard write failed: {err}");
                self.toast
                    .show(ToastMessage::failure(format!("Copy failed: {err}")));
            }
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast.dismiss();
    }

    // ------------------------------------------------------------------
    // Frame clock
    // ------------------------------------------------------------------

    /// Advance per-frame state by the wall-clock time since the previous frame.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        let elapsed = self.frame_elapsed();
        self.advance(elapsed);
    }

    /// Advance time-driven state by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        self.toast.advance(delta);
    }

    /// Get elapsed time since last frame and update timing.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }
}

fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
