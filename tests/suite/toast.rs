//! Toast timing as seen through the session.

use std::time::Duration;

use teamsplit_engine::{COPY_SUCCESS_MESSAGE, ToastKind, ToastPhase, UiOptions};

use crate::common::{fast_toasts, seeded, session, session_with};

const MS: Duration = Duration::from_millis(1);

#[test]
fn toast_hides_after_configured_time() {
    let (mut app, _) = session_with(&fast_toasts(&["A", "B"]), UiOptions::default());
    app.generate_teams_with(&mut seeded(0));
    app.copy_teams();

    app.advance(99 * MS);
    assert_eq!(app.toast().phase(), ToastPhase::Visible);
    app.advance(MS);
    assert_eq!(app.toast().phase(), ToastPhase::Hidden);
}

#[test]
fn default_toast_lasts_three_seconds() {
    let (mut app, _) = session(&["A"]);
    app.generate_teams_with(&mut seeded(0));
    app.copy_teams();

    app.advance(Duration::from_millis(2999));
    assert!(app.toast().visible().is_some());
    app.advance(MS);
    assert!(app.toast().visible().is_none());
}

#[test]
fn copying_twice_hides_first_then_shows_one_fresh_toast() {
    let (mut app, clipboard) = session_with(&fast_toasts(&["A", "B"]), UiOptions::default());
    app.generate_teams_with(&mut seeded(0));

    app.copy_teams();
    app.advance(50 * MS);
    app.copy_teams();
    assert_eq!(clipboard.writes().len(), 2);

    // The first toast is gone immediately; the second waits out the settle gap.
    assert_eq!(app.toast().phase(), ToastPhase::Settling);
    assert!(app.toast().visible().is_none());

    app.advance(10 * MS);
    let toast = app.toast().visible().expect("second toast");
    assert_eq!(toast.kind(), ToastKind::Success);
    assert_eq!(toast.text(), COPY_SUCCESS_MESSAGE);

    // The second toast gets a full lifetime; the first toast's timer is gone.
    app.advance(60 * MS);
    assert!(app.toast().visible().is_some());
    app.advance(40 * MS);
    assert!(app.toast().visible().is_none());
}

#[test]
fn rapid_copies_show_only_the_latest() {
    let (mut app, _) = session_with(&fast_toasts(&["A", "B"]), UiOptions::default());
    app.copy_teams(); // failure: nothing generated yet
    app.generate_teams_with(&mut seeded(0));
    app.copy_teams();
    app.copy_teams();

    app.advance(10 * MS);
    let toast = app.toast().visible().expect("latest toast");
    assert_eq!(toast.kind(), ToastKind::Success);
}

#[test]
fn dismiss_drops_pending_toast() {
    let (mut app, _) = session_with(&fast_toasts(&["A"]), UiOptions::default());
    app.generate_teams_with(&mut seeded(0));
    app.copy_teams();
    app.copy_teams();
    app.dismiss_toast();

    app.advance(Duration::from_secs(1));
    assert_eq!(app.toast().phase(), ToastPhase::Hidden);
}
