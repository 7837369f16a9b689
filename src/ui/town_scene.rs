//! The main in-town view: news log, hunter status, town status, and the
//! fixed option menu, plus the end-of-game overlay.

use prospect::core::game_state::{GameState, Tone};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw_game(frame: &mut Frame, state: &GameState) {
    let area = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(6),    // News log
            Constraint::Length(8), // Status panels
            Constraint::Length(9), // Option menu
        ])
        .split(area);

    draw_title(frame, chunks[0], state);
    draw_news(frame, chunks[1], state);

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    draw_hunter_panel(frame, row[0], state);
    draw_town_panel(frame, row[1], state);

    draw_menu(frame, chunks[3]);
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Info => Color::Gray,
        Tone::Good => Color::Green,
        Tone::Bad => Color::Red,
    }
}

fn draw_title(frame: &mut Frame, area: Rect, state: &GameState) {
    let title = Paragraph::new(format!(
        " PROSPECT - {} mode",
        state.difficulty.label()
    ))
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, area);
}

fn draw_news(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Latest News ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Newest first, as many as fit.
    let mut lines: Vec<Line> = Vec::new();
    for entry in state.news.iter().rev().take(inner.height as usize) {
        lines.push(Line::from(Span::styled(
            entry.text.clone(),
            Style::default().fg(tone_color(entry.tone)),
        )));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_hunter_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" Hunter ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let gold_color = if state.hunter.gold() < 0 {
        Color::Red
    } else {
        Color::Yellow
    };
    let kit = if state.hunter.kit().is_empty() {
        "empty".to_string()
    } else {
        state
            .hunter
            .kit()
            .iter()
            .map(|item| item.name())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let lines = vec![
        Line::from(Span::styled(
            state.hunter.name().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Gold: {}", state.hunter.gold()),
            Style::default().fg(gold_color),
        )),
        Line::from(format!("Kit: {}", kit)),
        Line::from(format!("Treasures found: {}", state.treasure_summary())),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_town_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Town ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mood = if state.town.is_tough() {
        Span::styled("The locals look rough.", Style::default().fg(Color::Red))
    } else {
        Span::styled(
            "The locals seem mild mannered.",
            Style::default().fg(Color::Gray),
        )
    };

    let lines = vec![
        Line::from(state.town.description()),
        Line::from(mood),
        Line::from(format!(
            "Crossing the {} calls for a {}.",
            state.town.terrain.name(),
            state.town.terrain.required_item().name()
        )),
        Line::from(format!("Towns visited: {}", state.towns_visited)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_menu(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" What's your next move? ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from("(B)uy something at the shop."),
        Line::from("(S)ell something at the shop."),
        Line::from("(M)ove on to a different town."),
        Line::from("(L)ook for trouble!"),
        Line::from("(H)unt for treasure!"),
        Line::from("(D)ig for gold!"),
        Line::from("Give up the hunt and e(X)it."),
    ];
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(Color::Gray)),
        inner,
    );
}

/// End-of-game overlay: victory or a plain farewell, plus the final tally.
pub fn draw_game_over(frame: &mut Frame, area: Rect, state: &GameState, victory: bool) {
    let overlay = super::centered_rect(56, 10, area);
    frame.render_widget(Clear, overlay);

    let (title, border, headline) = if victory {
        (
            " You Win! ",
            Color::Yellow,
            "You found the last of the treasures!",
        )
    } else {
        (
            " Farewell ",
            Color::Gray,
            "The big treasure will have to wait.",
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title);
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "{} rode through {} towns and ended with {} gold.",
            state.hunter.name(),
            state.towns_visited,
            state.hunter.gold()
        )),
        Line::from(format!("Treasures: {}", state.treasure_summary())),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to leave the frontier.",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}
