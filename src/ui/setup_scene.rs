//! Pre-game scenes: name entry and difficulty selection.

use prospect::core::game_state::Difficulty;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MAX_NAME_LEN: usize = 16;

fn validate_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Name cannot be blank".to_string());
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Some(format!("Name must be {} characters or fewer", MAX_NAME_LEN));
    }
    None
}

pub struct NameEntryScreen {
    pub name_input: String,
    pub cursor_position: usize,
    pub validation_error: Option<String>,
}

impl NameEntryScreen {
    pub fn new() -> Self {
        Self {
            name_input: String::new(),
            cursor_position: 0,
            validation_error: None,
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(2), // Tagline
                Constraint::Length(1), // Input label
                Constraint::Length(3), // Input field
                Constraint::Length(2), // Validation
                Constraint::Min(0),    // Filler
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new("PROSPECT")
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let tagline = Paragraph::new("Going hunting for the big treasure, eh?")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(tagline, chunks[1]);

        let label = Paragraph::new("What's your name, Hunter?");
        f.render_widget(label, chunks[2]);

        // Input field with a visible cursor
        let input_area = chunks[3];
        let input_text = {
            let char_count = self.name_input.chars().count();
            if self.cursor_position < char_count {
                let chars: Vec<char> = self.name_input.chars().collect();
                let before: String = chars[..self.cursor_position].iter().collect();
                let after: String = chars[self.cursor_position..].iter().collect();
                format!("{}_{}", before, after)
            } else {
                format!("{}_", self.name_input)
            }
        };
        let input_widget = Paragraph::new(input_text)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));
        f.render_widget(input_widget, input_area);

        let validation_text = if let Some(error) = &self.validation_error {
            Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            ))
        } else if !self.name_input.trim().is_empty() {
            Line::from(Span::styled(
                "✓ Ready to ride",
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from("")
        };
        f.render_widget(Paragraph::new(validation_text), chunks[4]);

        let controls = Paragraph::new("[Enter] Ride on    [Esc] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[6]);
    }

    /// Byte offset of the character cursor, for splicing the input.
    fn byte_index(&self) -> usize {
        self.name_input
            .char_indices()
            .nth(self.cursor_position)
            .map(|(idx, _)| idx)
            .unwrap_or(self.name_input.len())
    }

    pub fn handle_char_input(&mut self, c: char) {
        let idx = self.byte_index();
        self.name_input.insert(idx, c);
        self.cursor_position += 1;
        self.validate();
    }

    pub fn handle_backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let idx = self.byte_index();
            self.name_input.remove(idx);
            self.validate();
        }
    }

    pub fn validate(&mut self) {
        self.validation_error = validate_name(&self.name_input);
    }

    pub fn is_valid(&self) -> bool {
        self.validation_error.is_none() && !self.name_input.trim().is_empty()
    }

    pub fn get_name(&self) -> String {
        self.name_input.trim().to_string()
    }
}

/// One-keypress difficulty picker.
pub struct DifficultyScreen;

impl DifficultyScreen {
    /// Maps a difficulty key. The scout cheat rides on an unlisted key.
    pub fn select(key: char) -> Option<(Difficulty, bool)> {
        match key.to_ascii_lowercase() {
            'e' => Some((Difficulty::Easy, false)),
            'n' => Some((Difficulty::Normal, false)),
            'h' => Some((Difficulty::Hard, false)),
            's' => Some((Difficulty::Samurai, false)),
            't' => Some((Difficulty::Normal, true)),
            _ => None,
        }
    }

    pub fn draw(f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(6), // Options
                Constraint::Min(0),    // Filler
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new("How rough a hunt do you want?")
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let options = vec![
            Line::from("(E)asy    - friendly towns, full sell-back, extra gold"),
            Line::from("(N)ormal  - the standard hunt"),
            Line::from("(H)ard    - tough towns, stingy shopkeep"),
            Line::from("(S)amurai - start armed; the shop stocks swords"),
        ];
        let options_widget = Paragraph::new(options).alignment(Alignment::Center);
        f.render_widget(options_widget, chunks[1]);

        let controls = Paragraph::new("[Esc] Back")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[3]);
    }
}
