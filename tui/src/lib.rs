//! TUI rendering for teamsplit using ratatui.

mod clipboard;
mod effects;
mod input;
mod theme;

pub use clipboard::SystemClipboard;
pub use effects::{TOAST_ENTRANCE, apply_toast_entrance, toast_rect};
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Wrap,
    },
};
use unicode_width::UnicodeWidthStr;

use teamsplit_engine::{
    App, InputMode, Partition, TEAM_A_LABEL, TEAM_B_LABEL, ToastKind,
    format_team_line,
};

const TITLE: &str = "Random Team Generator";
const TEAMS_PANEL_HEIGHT: u16 = 6;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], &palette, &glyphs);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    draw_roster(frame, app, body[0], &palette, &glyphs);

    // History of previous teams only appears once there is something older
    // than the current result.
    if app.history().previous().is_empty() {
        draw_teams(frame, app, body[1], &palette);
    } else {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TEAMS_PANEL_HEIGHT),
                Constraint::Min(3),
            ])
            .split(body[1]);
        draw_teams(frame, app, right[0], &palette);
        draw_history(frame, app, right[1], &palette, &glyphs);
    }

    draw_status_bar(frame, app, chunks[2], &palette);
    draw_toast(frame, app, &palette, &glyphs);
}

fn panel<'a>(title: impl Into<Line<'a>>, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel))
        .title(title)
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let line = Line::from(vec![
        Span::styled(
            TITLE,
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} 총 {}명", glyphs.bullet, app.roster().len()),
            Style::default().fg(palette.text_muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_roster(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let roster = app.roster();
    let rename_target = app.rename_target();
    let block = panel(format!(" Members ({}명) ", roster.len()), palette);

    if roster.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(Span::styled("No members.", styles::key_hint(palette))),
            Line::from(vec![
                Span::styled("Press ", styles::key_hint(palette)),
                Span::styled("a", styles::key_highlight(palette)),
                Span::styled(" to add one.", styles::key_hint(palette)),
            ]),
        ])
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let number_width = roster.len().to_string().len();
    let items: Vec<ListItem> = roster
        .members()
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let editing = rename_target == Some(index);
            let marker = if editing {
                glyphs.editing
            } else if index == app.selected() {
                glyphs.selected
            } else {
                " "
            };
            let name_style = if editing {
                Style::default()
                    .fg(palette.peach)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text_primary)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(palette.accent)),
                Span::styled(
                    format!("{:>number_width$}. ", index + 1),
                    Style::default().fg(palette.text_muted),
                ),
                Span::styled(name.clone(), name_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(palette.bg_highlight));
    let mut state = ListState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);

    if let Some(index) = rename_target
        && let Some(name) = roster.get(index)
    {
        // marker + space + number + ". "
        let prefix_width = 2 + number_width + 2;
        let row = index.saturating_sub(state.offset());
        let inner_width = area.width.saturating_sub(2);
        let x = (prefix_width + name.width()).min(usize::from(inner_width.saturating_sub(1)));
        let y = area.y.saturating_add(1).saturating_add(row as u16);
        if y < area.y.saturating_add(area.height.saturating_sub(1)) {
            frame.set_cursor_position(Position::new(area.x + 1 + x as u16, y));
        }
    }
}

fn team_lines<'a>(partition: &Partition, palette: &Palette) -> Vec<Line<'a>> {
    vec![
        team_line(TEAM_A_LABEL, partition.team_a(), styles::team_a(palette), palette),
        team_line(TEAM_B_LABEL, partition.team_b(), styles::team_b(palette), palette),
    ]
}

fn team_line<'a>(label: &str, members: &[String], style: Style, palette: &Palette) -> Line<'a> {
    let text = format_team_line(label, members);
    // Split "Team A(2명): A, B" so the label can be styled apart from the names.
    match text.split_once(": ") {
        Some((head, names)) => Line::from(vec![
            Span::styled(format!("{head}: "), style),
            Span::styled(names.to_owned(), Style::default().fg(palette.text_primary)),
        ]),
        None => Line::from(Span::styled(text, style)),
    }
}

fn draw_teams(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let block = panel(" Today's Teams ", palette);
    let content = match app.teams() {
        Some(partition) => {
            let mut lines = team_lines(partition, palette);
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("c", styles::key_highlight(palette)),
                Span::styled(" copy result", styles::key_hint(palette)),
            ]));
            lines
        }
        None => vec![Line::from(vec![
            Span::styled("Press ", styles::key_hint(palette)),
            Span::styled("g", styles::key_highlight(palette)),
            Span::styled(" to generate random teams.", styles::key_hint(palette)),
        ])],
    };
    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn draw_history(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let entries = app.history().previous();
    let offset = app.history_scroll().min(entries.len().saturating_sub(1));
    let block = panel(
        format!(" Previous Teams ({}/{}) ", offset + 1, entries.len()),
        palette,
    );

    // Entries are numbered by age: #1 is the result just before the current one.
    let mut lines = Vec::new();
    for (i, entry) in entries.iter().enumerate().skip(offset) {
        if i > offset {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            format!("{} #{} {}", glyphs.history, i + 1, entry.timestamp()),
            Style::default().fg(palette.text_muted),
        )));
        lines.extend(team_lines(entry.partition(), palette));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );

    if entries.len() > 1 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_symbol(Some(glyphs.track))
            .thumb_symbol(glyphs.thumb)
            .style(Style::default().fg(palette.text_muted));
        let mut scrollbar_state = ScrollbarState::new(entries.len()).position(offset);
        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin::new(0, 1)),
            &mut scrollbar_state,
        );
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let (badge, badge_style, hints): (&str, Style, &[(&str, &str)]) = match app.input_mode() {
        InputMode::Normal => (
            " NORMAL ",
            styles::mode_normal(palette),
            &[
                ("↑↓", "move"),
                ("a", "add"),
                ("d", "del"),
                ("e", "edit"),
                ("g", "split"),
                ("[ ]", "past"),
                ("c", "copy"),
                ("q", "quit"),
            ],
        ),
        InputMode::Rename { .. } => (
            " RENAME ",
            styles::mode_rename(palette),
            &[("type", "edit name"), ("Ctrl+U", "clear"), ("Enter/Esc", "done")],
        ),
    };

    let mut spans = vec![Span::styled(badge, badge_style), Span::raw(" ")];
    for (key, action) in hints {
        spans.push(Span::styled(format!(" {key}"), styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action} "), styles::key_hint(palette)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_toast(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let toast = app.toast();
    let Some(message) = toast.visible() else {
        return;
    };

    let (icon, color) = match message.kind() {
        ToastKind::Success => (glyphs.success, palette.success),
        ToastKind::Failure => (glyphs.failure, palette.error),
    };
    let text = format!(" {icon} {} ", message.text());
    let viewport = frame.area();
    let width = u16::try_from(text.width() + 2).unwrap_or(u16::MAX);
    let mut area = toast_rect(viewport, width, 3);
    if !app.ui_options().reduced_motion
        && let Some(shown_for) = toast.shown_for()
    {
        area = apply_toast_entrance(area, viewport, shown_for);
    }

    let widget = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(palette.bg_popup)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}
