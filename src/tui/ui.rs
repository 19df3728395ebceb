//! Rendering.
//!
//! Layout: header, player table (plus optional history panel), key help.
//! Rename prompt and game-over notice are drawn as centered modals.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::app::{App, Mode};
use crate::core::{Phase, Variant};

const HIGHLIGHT: Color = Color::Yellow;
const DEFEATED: Color = Color::Red;
const MUTED: Color = Color::DarkGray;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(4),
    ])
    .split(frame.area());

    render_header(frame, app, chunks[0]);

    if app.show_history() {
        let body = Layout::horizontal([Constraint::Min(24), Constraint::Percentage(40)])
            .split(chunks[1]);
        render_players(frame, app, body[0]);
        render_history(frame, app, body[1]);
    } else {
        render_players(frame, app, chunks[1]);
    }

    render_footer(frame, app, chunks[2]);

    if app.mode() == Mode::Renaming {
        render_rename(frame, app);
    }
    if app.session().game_over() {
        render_game_over(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let session = app.session();
    let phase = match session.phase() {
        Phase::Setup => "setup",
        Phase::InProgress => "in progress",
        Phase::GameOver => "game over",
    };

    let mut spans = vec![
        Span::styled(
            " Life Counter ",
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("({phase})"), Style::default().fg(MUTED)),
    ];
    if let Some(loser) = session.loser() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{loser} LOSES!"),
            Style::default().fg(DEFEATED).add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_players(frame: &mut Frame, app: &App, area: Rect) {
    let session = app.session();
    let title = format!(
        "Players {}/{}",
        session.player_count(),
        session.config().max_players
    );

    let items: Vec<ListItem> = session
        .players()
        .iter()
        .enumerate()
        .map(|(i, player)| {
            let marker = if i == app.selected() { "> " } else { "  " };
            let mut style = Style::default();
            if !player.is_alive() {
                style = style.fg(DEFEATED).add_modifier(Modifier::CROSSED_OUT);
            }
            if i == app.selected() {
                style = style.add_modifier(Modifier::BOLD).fg(HIGHLIGHT);
            }
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<20}", player.name), style),
                Span::styled(format!("{:>6}", player.life), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let history = app.session().history();
    let visible = area.height.saturating_sub(2) as usize;
    let end = history.len().saturating_sub(app.history_scroll());
    let start = end.saturating_sub(visible);

    let lines: Vec<Line> = history
        .iter()
        .skip(start)
        .take(end - start)
        .map(|entry| Line::raw(entry.as_str()))
        .collect();

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("History"))
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let session = app.session();
    let presets = session
        .config()
        .presets
        .iter()
        .enumerate()
        .map(|(i, delta)| format!("{}:{:+}", i + 1, delta))
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![Line::raw(format!(
        "↑/↓ select  {presets}  r rename  h history  R reset  q quit"
    ))];

    if session.config().variant == Variant::Multiplayer {
        let field_style = if app.mode() == Mode::EditingDelta {
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let mut spans = vec![
            Span::raw("e edit N: ["),
            Span::styled(app.delta_field().text().to_string(), field_style),
            Span::raw("]  -/+ apply ±N"),
        ];
        if session.can_add_player() {
            spans.push(Span::raw("  a add player"));
        }
        lines.push(Line::from(spans));
    }

    let footer = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

fn render_rename(frame: &mut Frame, app: &App) {
    let area = centered_fixed(40, 3, frame.area());
    let prompt = Paragraph::new(app.rename_field().text().to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Rename (Enter to save, Esc to cancel)"),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(prompt, area);
}

fn render_game_over(frame: &mut Frame, app: &App) {
    let winner = app.session().winner().unwrap_or("Nobody");
    let area = centered_fixed(44, 5, frame.area());
    let notice = Paragraph::new(vec![
        Line::styled(
            format!("{winner} wins!"),
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
        ),
        Line::raw("Press Enter to start a new game"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Game Over"));
    frame.render_widget(Clear, area);
    frame.render_widget(notice, area);
}

/// Compute a centered rectangle with fixed dimensions.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
