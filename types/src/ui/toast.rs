//! Single-slot transient notification.
//!
//! Only one toast exists at a time. Showing a new toast while one is on screen
//! hides the current one, waits a short settle delay, then shows the new one,
//! so two messages never overlap. The pending deadline is a timer owned by the
//! current state: replacing the state drops the old timer, so an auto-hide armed
//! for a previous message can never fire against a newer one.

use std::mem::take;
use std::time::Duration;

use super::animation::EffectTimer;

/// How long a toast stays on screen before hiding itself.
pub const DEFAULT_TOAST_VISIBLE: Duration = Duration::from_secs(3);

/// Hidden gap between two consecutive toasts (room for an exit animation).
pub const DEFAULT_TOAST_SETTLE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    kind: ToastKind,
    text: String,
}

impl ToastMessage {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Failure,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Observable state of the toast slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Hidden,
    Visible,
    /// Hidden, waiting out the settle delay before a pending toast appears.
    Settling,
}

#[derive(Debug, Clone, Default)]
enum ToastState {
    #[default]
    Hidden,
    Visible {
        message: ToastMessage,
        timer: EffectTimer,
    },
    Settling {
        pending: ToastMessage,
        timer: EffectTimer,
    },
}

#[derive(Debug, Clone)]
pub struct Toast {
    state: ToastState,
    visible_for: Duration,
    settle_for: Duration,
}

impl Default for Toast {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_VISIBLE, DEFAULT_TOAST_SETTLE)
    }
}

impl Toast {
    #[must_use]
    pub fn new(visible_for: Duration, settle_for: Duration) -> Self {
        Self {
            state: ToastState::Hidden,
            visible_for,
            settle_for,
        }
    }

    /// Show `message`, replacing whatever is on screen or pending.
    ///
    /// From `Visible` the current toast is hidden first and `message` appears
    /// after the settle delay. From `Settling` the pending message is replaced
    /// and the running settle delay is kept.
    pub fn show(&mut self, message: ToastMessage) {
        self.state = match take(&mut self.state) {
            ToastState::Hidden => ToastState::Visible {
                message,
                timer: EffectTimer::new(self.visible_for),
            },
            ToastState::Visible { .. } => ToastState::Settling {
                pending: message,
                timer: EffectTimer::new(self.settle_for),
            },
            ToastState::Settling { timer, .. } => ToastState::Settling {
                pending: message,
                timer,
            },
        };
    }

    /// Move time forward by `delta`, firing at most one transition.
    pub fn advance(&mut self, delta: Duration) {
        let finished = match &mut self.state {
            ToastState::Hidden => false,
            ToastState::Visible { timer, .. } | ToastState::Settling { timer, .. } => {
                timer.advance(delta);
                timer.is_finished()
            }
        };
        if !finished {
            return;
        }

        self.state = match take(&mut self.state) {
            ToastState::Settling { pending, .. } => ToastState::Visible {
                message: pending,
                timer: EffectTimer::new(self.visible_for),
            },
            ToastState::Hidden | ToastState::Visible { .. } => ToastState::Hidden,
        };
    }

    /// Hide immediately, dropping any pending toast.
    pub fn dismiss(&mut self) {
        self.state = ToastState::Hidden;
    }

    #[must_use]
    pub fn phase(&self) -> ToastPhase {
        match self.state {
            ToastState::Hidden => ToastPhase::Hidden,
            ToastState::Visible { .. } => ToastPhase::Visible,
            ToastState::Settling { .. } => ToastPhase::Settling,
        }
    }

    /// The message currently on screen, if any.
    #[must_use]
    pub fn visible(&self) -> Option<&ToastMessage> {
        match &self.state {
            ToastState::Visible { message, .. } => Some(message),
            ToastState::Hidden | ToastState::Settling { .. } => None,
        }
    }

    /// How long the current toast has been on screen.
    #[must_use]
    pub fn shown_for(&self) -> Option<Duration> {
        match &self.state {
            ToastState::Visible { timer, .. } => Some(timer.elapsed()),
            ToastState::Hidden | ToastState::Settling { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTLE: Duration = DEFAULT_TOAST_SETTLE;
    const VISIBLE: Duration = DEFAULT_TOAST_VISIBLE;

    fn text(toast: &Toast) -> Option<&str> {
        toast.visible().map(ToastMessage::text)
    }

    #[test]
    fn show_from_hidden_is_immediate() {
        let mut toast = Toast::default();
        assert_eq!(toast.phase(), ToastPhase::Hidden);

        toast.show(ToastMessage::success("copied"));
        assert_eq!(toast.phase(), ToastPhase::Visible);
        assert_eq!(text(&toast), Some("copied"));
        assert_eq!(toast.shown_for(), Some(Duration::ZERO));
    }

    #[test]
    fn auto_hides_after_visible_duration() {
        let mut toast = Toast::default();
        toast.show(ToastMessage::success("copied"));

        toast.advance(Duration::from_millis(2999));
        assert_eq!(text(&toast), Some("copied"));

        toast.advance(Duration::from_millis(1));
        assert_eq!(toast.phase(), ToastPhase::Hidden);
        assert!(toast.visible().is_none());
    }

    #[test]
    fn second_show_hides_then_reappears_after_settle() {
        let mut toast = Toast::default();
        toast.show(ToastMessage::success("X"));
        toast.show(ToastMessage::success("Y"));

        assert_eq!(toast.phase(), ToastPhase::Settling);
        assert!(toast.visible().is_none());

        toast.advance(SETTLE);
        assert_eq!(text(&toast), Some("Y"));
        // The replacement gets a full visible window of its own.
        assert_eq!(toast.shown_for(), Some(Duration::ZERO));
    }

    #[test]
    fn stale_auto_hide_does_not_cut_replacement_short() {
        let mut toast = Toast::default();
        toast.show(ToastMessage::success("X"));
        toast.advance(Duration::from_millis(2900));

        toast.show(ToastMessage::success("Y"));
        toast.advance(SETTLE);
        assert_eq!(text(&toast), Some("Y"));

        // X would have expired 100ms after being replaced; Y must outlive that.
        toast.advance(Duration::from_millis(200));
        assert_eq!(text(&toast), Some("Y"));

        toast.advance(VISIBLE);
        assert_eq!(toast.phase(), ToastPhase::Hidden);
    }

    #[test]
    fn show_during_settle_replaces_pending_without_restarting_delay() {
        let mut toast = Toast::default();
        toast.show(ToastMessage::success("X"));
        toast.show(ToastMessage::success("Y"));
        toast.advance(Duration::from_millis(200));
        toast.show(ToastMessage::failure("Z"));

        toast.advance(Duration::from_millis(100));
        assert_eq!(text(&toast), Some("Z"));
        assert_eq!(toast.visible().map(ToastMessage::kind), Some(ToastKind::Failure));
    }

    #[test]
    fn rapid_shows_end_with_exactly_the_last_message() {
        let mut toast = Toast::default();
        for n in 0..20 {
            toast.show(ToastMessage::success(format!("msg {n}")));
        }
        toast.advance(SETTLE);
        assert_eq!(text(&toast), Some("msg 19"));
    }

    #[test]
    fn dismiss_drops_pending() {
        let mut toast = Toast::default();
        toast.show(ToastMessage::success("X"));
        toast.show(ToastMessage::success("Y"));
        toast.dismiss();
        toast.advance(SETTLE);
        assert_eq!(toast.phase(), ToastPhase::Hidden);
    }

    #[test]
    fn custom_durations() {
        let mut toast = Toast::new(Duration::from_millis(100), Duration::ZERO);
        toast.show(ToastMessage::success("X"));
        toast.show(ToastMessage::success("Y"));
        toast.advance(Duration::ZERO);
        assert_eq!(text(&toast), Some("Y"));
        toast.advance(Duration::from_millis(100));
        assert!(toast.visible().is_none());
    }
}
