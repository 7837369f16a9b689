//! Central game state: the hunter, the current town, the shop, and the
//! rolling news log the UI renders.

use crate::core::constants::{
    EASY_GOLD_BONUS, EASY_MARKDOWN, EASY_TOUGHNESS, HARD_MARKDOWN, HARD_TOUGHNESS, MAX_NEWS_LINES,
    NORMAL_MARKDOWN, NORMAL_TOUGHNESS, SCOUT_GOLD_BONUS, STARTING_GOLD,
};
use crate::hunter::Hunter;
use crate::items::Item;
use crate::shop::Shop;
use crate::town::types::{Town, Treasure};
use rand::Rng;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Samurai,
}

impl Difficulty {
    /// Chance a freshly rolled town is tough.
    pub fn toughness(self) -> f64 {
        match self {
            Difficulty::Easy => EASY_TOUGHNESS,
            Difficulty::Normal | Difficulty::Samurai => NORMAL_TOUGHNESS,
            Difficulty::Hard => HARD_TOUGHNESS,
        }
    }

    /// Sell-back fraction the shop applies in this mode.
    pub fn markdown(self) -> f64 {
        match self {
            Difficulty::Easy => EASY_MARKDOWN,
            Difficulty::Normal | Difficulty::Samurai => NORMAL_MARKDOWN,
            Difficulty::Hard => HARD_MARKDOWN,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Samurai => "Samurai",
        }
    }
}

/// Visual tone of a news line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Good,
    Bad,
}

#[derive(Debug, Clone)]
pub struct NewsLine {
    pub text: String,
    pub tone: Tone,
}

/// Everything the turn loop owns. The current town is replaced wholesale
/// whenever the hunter manages to move on.
#[derive(Debug, Clone)]
pub struct GameState {
    pub hunter: Hunter,
    pub town: Town,
    pub shop: Shop,
    pub difficulty: Difficulty,
    pub towns_visited: u32,
    /// Rolling log, oldest first; the UI renders it newest-first.
    pub news: VecDeque<NewsLine>,
}

impl GameState {
    /// Sets up a fresh hunt: purse and kit per difficulty, the shop, and
    /// the first town with its welcome in the news log.
    pub fn new(
        name: impl Into<String>,
        difficulty: Difficulty,
        scout_cheat: bool,
        rng: &mut impl Rng,
    ) -> Self {
        let mut hunter = Hunter::new(name, STARTING_GOLD);
        let mut shop = Shop::new(difficulty.markdown());

        if difficulty == Difficulty::Easy {
            hunter.change_gold(EASY_GOLD_BONUS);
        }
        if difficulty == Difficulty::Samurai {
            hunter.add_item(Item::Sword);
            shop.stock_sword();
        }
        if scout_cheat {
            hunter.change_gold(SCOUT_GOLD_BONUS);
            for item in Item::BASE_STOCK {
                hunter.add_item(item);
            }
        }

        let mut state = Self {
            hunter,
            town: Self::spawn_town(difficulty, rng),
            shop,
            difficulty,
            towns_visited: 1,
            news: VecDeque::new(),
        };
        state.arrive();
        state
    }

    /// Rolls the next town: treasure draw, then terrain and toughness,
    /// with easy mode forcing the item-break flag.
    fn spawn_town(difficulty: Difficulty, rng: &mut impl Rng) -> Town {
        let treasure = Treasure::random(rng);
        let mut town = Town::new(difficulty.toughness(), treasure, rng);
        if difficulty == Difficulty::Easy {
            town.force_item_break();
        }
        town
    }

    /// Discards the current town for a fresh one. Callers flush the old
    /// town's last message first; the welcome lands here.
    pub fn move_to_new_town(&mut self, rng: &mut impl Rng) {
        self.town = Self::spawn_town(self.difficulty, rng);
        self.towns_visited += 1;
        self.arrive();
    }

    fn arrive(&mut self) {
        self.town.greet(&self.hunter);
        let welcome = self.town.latest_news.clone();
        self.push_news(&welcome, Tone::Info);
        let description = self.town.description();
        self.push_news(&description, Tone::Info);
    }

    /// Appends a (possibly multi-line) message to the news log, dropping
    /// the oldest lines past the cap.
    pub fn push_news(&mut self, text: &str, tone: Tone) {
        for line in text.lines() {
            if self.news.len() >= MAX_NEWS_LINES {
                self.news.pop_front();
            }
            self.news.push_back(NewsLine {
                text: line.to_string(),
                tone,
            });
        }
    }

    /// "none", or "a crown, some dust" style summary for the status panel.
    pub fn treasure_summary(&self) -> String {
        if self.hunter.treasures().is_empty() {
            return "none".to_string();
        }
        self.hunter
            .treasures()
            .iter()
            .map(|t| t.with_article())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
