//! The shop overlay: a modal list over the town view, one row per item.

use prospect::core::game_state::GameState;
use prospect::items::Item;
use prospect::shop::ShopMode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct ShopScene {
    pub mode: ShopMode,
    pub selected: usize,
    pub notice: Option<String>,
}

impl ShopScene {
    pub fn new(mode: ShopMode) -> Self {
        Self {
            mode,
            selected: 0,
            notice: None,
        }
    }

    /// The rows on offer: shop stock when buying, the kit when selling.
    fn rows(&self, state: &GameState) -> Vec<Item> {
        match self.mode {
            ShopMode::Buy => state.shop.stock(),
            ShopMode::Sell => state.hunter.kit().to_vec(),
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, state: &GameState) {
        if self.selected + 1 < self.rows(state).len() {
            self.selected += 1;
        }
    }

    /// Buys or sells the selected row and phrases the result.
    pub fn transact(&mut self, state: &mut GameState) {
        let rows = self.rows(state);
        let Some(&item) = rows.get(self.selected) else {
            self.notice = Some("Nothing to trade.".to_string());
            return;
        };

        let result = match self.mode {
            ShopMode::Buy => state.shop.buy(&mut state.hunter, item),
            ShopMode::Sell => state.shop.sell(&mut state.hunter, item),
        };
        self.notice = Some(match (self.mode, result) {
            (ShopMode::Buy, Ok(gold)) => {
                format!("You pay {} gold for the {}.", gold, item.name())
            }
            (ShopMode::Sell, Ok(gold)) => {
                format!("The shopkeep hands you {} gold for your {}.", gold, item.name())
            }
            (_, Err(err)) => err.message().to_string(),
        });

        // Selling shrinks the list; keep the cursor on it.
        let remaining = self.rows(state).len();
        self.selected = self.selected.min(remaining.saturating_sub(1));
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, state: &GameState) {
        let rows = self.rows(state);
        let height = (rows.len().max(1) + 7) as u16;
        let overlay = super::centered_rect(48, height, area);
        frame.render_widget(Clear, overlay);

        let title = match self.mode {
            ShopMode::Buy => " General Store - Buying ",
            ShopMode::Sell => " General Store - Selling ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title);
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            format!("Gold: {}", state.hunter.gold()),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));

        if rows.is_empty() {
            lines.push(Line::from(Span::styled(
                "  Nothing to sell.",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            for (idx, item) in rows.iter().enumerate() {
                let price = match self.mode {
                    ShopMode::Buy => state.shop.buy_price(*item),
                    ShopMode::Sell => state.shop.sell_price(*item),
                };
                let text = format!("{:<9} {:>3} gold", item.name(), price);
                let line = if idx == self.selected {
                    Line::from(Span::styled(
                        format!("> {}", text),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(format!("  {}", text))
                };
                lines.push(line);
            }
        }

        lines.push(Line::from(""));
        if let Some(notice) = &self.notice {
            lines.push(Line::from(Span::styled(
                notice.clone(),
                Style::default().fg(Color::Magenta),
            )));
        } else {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "[Up/Down] Pick   [Enter] Trade   [Esc] Leave",
            Style::default().fg(Color::Gray),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospect::core::game_state::Difficulty;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn state() -> GameState {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        GameState::new("Rory", Difficulty::Normal, false, &mut rng)
    }

    #[test]
    fn test_buy_through_the_overlay() {
        let mut state = state();
        let mut scene = ShopScene::new(ShopMode::Buy);

        // First stock row is Water at 2 gold.
        scene.transact(&mut state);
        assert!(state.hunter.has_item(Item::Water));
        assert_eq!(state.hunter.gold(), 8);
        assert!(scene.notice.as_deref().unwrap().contains("2 gold"));
    }

    #[test]
    fn test_sell_with_empty_kit_is_harmless() {
        let mut state = state();
        let mut scene = ShopScene::new(ShopMode::Sell);

        scene.transact(&mut state);
        assert_eq!(state.hunter.gold(), 10);
        assert_eq!(scene.notice.as_deref(), Some("Nothing to trade."));
    }

    #[test]
    fn test_cursor_follows_a_shrinking_kit() {
        let mut state = state();
        state.hunter.add_item(Item::Water);
        let mut scene = ShopScene::new(ShopMode::Sell);

        scene.transact(&mut state);
        assert!(state.hunter.kit().is_empty());
        assert_eq!(scene.selected, 0);
    }
}
