//! End-to-end session flows: edit the roster, generate, copy.

use std::collections::HashSet;

use teamsplit_engine::{
    COPY_SUCCESS_MESSAGE, HISTORY_CAPACITY, InputMode, NOTHING_TO_COPY_MESSAGE, ToastKind,
};

use crate::common::{seeded, session};

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

#[test]
fn five_members_split_three_two_and_copy_exact_lines() {
    let (mut app, clipboard) = session(&["A", "B", "C", "D", "E"]);
    let teams = app.generate_teams_with(&mut seeded(7)).clone();

    assert_eq!(teams.team_a().len(), 3);
    assert_eq!(teams.team_b().len(), 2);
    let mut all: Vec<String> = teams.team_a().to_vec();
    all.extend(teams.team_b().iter().cloned());
    assert_eq!(sorted(all), ["A", "B", "C", "D", "E"]);

    app.copy_teams();
    let writes = clipboard.writes();
    assert_eq!(writes.len(), 1);
    let expected = format!(
        "Team A(3명): {}\nTeam B(2명): {}",
        teams.team_a().join(", "),
        teams.team_b().join(", ")
    );
    assert_eq!(writes[0], expected);

    let toast = app.toast().visible().expect("toast shown");
    assert_eq!(toast.kind(), ToastKind::Success);
    assert_eq!(toast.text(), COPY_SUCCESS_MESSAGE);
}

#[test]
fn edits_after_generation_do_not_touch_results() {
    let (mut app, _) = session(&["A", "B", "C", "D"]);
    let teams = app.generate_teams_with(&mut seeded(1)).clone();

    app.rename_member(0, "Zed");
    app.add_member();
    app.remove_member(1);

    assert_eq!(app.teams(), Some(&teams));
    assert_eq!(app.history().latest().map(|e| e.partition()), Some(&teams));
    assert_eq!(app.roster().members(), ["Zed", "C", "D", "직원5"]);
}

#[test]
fn regenerating_uses_the_edited_roster() {
    let (mut app, _) = session(&["A", "B"]);
    app.generate_teams_with(&mut seeded(2));
    app.add_member();
    app.rename_member(2, "C");

    let teams = app.generate_teams_with(&mut seeded(3)).clone();
    assert_eq!(teams.len(), 3);
    assert_eq!(teams.team_a().len(), 2);
    assert_eq!(app.history().len(), 2);
}

#[test]
fn history_keeps_the_ten_newest() {
    let (mut app, _) = session(&["A", "B", "C"]);
    let mut generated = Vec::new();
    for seed in 0..12 {
        generated.push(app.generate_teams_with(&mut seeded(seed)).clone());
    }

    let history = app.history();
    assert_eq!(history.len(), HISTORY_CAPACITY);
    // Newest first; the two oldest were evicted.
    let kept: Vec<_> = history.entries().iter().map(|e| e.partition().clone()).collect();
    let expected: Vec<_> = generated.iter().rev().take(HISTORY_CAPACITY).cloned().collect();
    assert_eq!(kept, expected);
    assert_eq!(history.previous().len(), HISTORY_CAPACITY - 1);
}

#[test]
fn empty_roster_generates_empty_teams() {
    let (mut app, clipboard) = session(&[]);
    let teams = app.generate_teams_with(&mut seeded(0)).clone();
    assert!(teams.is_empty());

    app.copy_teams();
    assert_eq!(clipboard.writes(), ["Team A(0명): \nTeam B(0명): "]);
}

#[test]
fn copy_before_generating_reports_and_writes_nothing() {
    let (mut app, clipboard) = session(&["A"]);
    app.copy_teams();

    assert!(clipboard.writes().is_empty());
    let toast = app.toast().visible().expect("toast shown");
    assert_eq!(toast.kind(), ToastKind::Failure);
    assert_eq!(toast.text(), NOTHING_TO_COPY_MESSAGE);
}

#[test]
fn clipboard_failure_is_reported_not_raised() {
    let (mut app, clipboard) = session(&["A", "B"]);
    clipboard.set_failing(true);
    app.generate_teams_with(&mut seeded(4));
    app.copy_teams();

    let toast = app.toast().visible().expect("toast shown");
    assert_eq!(toast.kind(), ToastKind::Failure);
    assert!(toast.text().starts_with("Copy failed"), "{}", toast.text());

    // The session carries on.
    clipboard.set_failing(false);
    app.generate_teams_with(&mut seeded(5));
    assert_eq!(app.history().len(), 2);
}

#[test]
fn duplicate_names_are_kept_as_separate_members() {
    let (mut app, _) = session(&["Kim", "Kim", "Lee"]);
    let teams = app.generate_teams_with(&mut seeded(9)).clone();
    let kims = teams
        .team_a()
        .iter()
        .chain(teams.team_b())
        .filter(|name| *name == "Kim")
        .count();
    assert_eq!(kims, 2);
}

#[test]
fn different_seeds_give_different_splits() {
    let members = ["A", "B", "C", "D", "E", "F", "G", "H"];
    let (mut app, _) = session(&members);
    let splits: HashSet<Vec<String>> = (0..20)
        .map(|seed| sorted(app.generate_teams_with(&mut seeded(seed)).team_a().to_vec()))
        .collect();
    assert!(splits.len() > 1);
}

#[test]
fn rename_mode_edits_in_place() {
    let (mut app, _) = session(&["A", "B"]);
    app.select_next();
    app.begin_rename();
    assert_eq!(app.input_mode(), InputMode::Rename { index: 1 });

    app.rename_clear();
    app.rename_insert_str("Bo\tb");
    assert_eq!(app.roster().get(1), Some("Bob"));

    app.finish_rename();
    assert_eq!(app.input_mode(), InputMode::Normal);
}

#[test]
fn removing_the_last_member_clamps_selection() {
    let (mut app, _) = session(&["A", "B", "C"]);
    app.select_last();
    app.remove_selected();
    assert_eq!(app.selected(), 1);
    app.remove_selected();
    app.remove_selected();
    assert!(app.roster().is_empty());
    assert_eq!(app.selected(), 0);

    // Nothing to remove: no-op.
    app.remove_selected();
    assert!(app.roster().is_empty());
}
