//! Turn dispatch: one keypress in, one typed outcome out.
//!
//! The menu: (B)uy, (S)ell, (M)ove on, (L)ook for trouble, (H)unt for
//! treasure, (D)ig for gold, e(X)it. Anything else is an invalid option
//! that costs nothing.

use crate::core::game_state::{GameState, Tone};
use crate::shop::ShopMode;
use crate::town::logic::{self as town_logic, BrawlOutcome, DigOutcome};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Buy,
    Sell,
    MoveOn,
    LookForTrouble,
    HuntForTreasure,
    Dig,
    Quit,
}

impl Command {
    /// Case-insensitive menu key lookup.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'b' => Some(Command::Buy),
            's' => Some(Command::Sell),
            'm' => Some(Command::MoveOn),
            'l' => Some(Command::LookForTrouble),
            'h' => Some(Command::HuntForTreasure),
            'd' => Some(Command::Dig),
            'x' => Some(Command::Quit),
            _ => None,
        }
    }
}

/// What the turn loop should do next. Game-over travels through this
/// value; there is no global flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue,
    OpenShop(ShopMode),
    Quit,
    Victory,
}

/// Processes one keypress. Unrecognized keys report an invalid option
/// and change nothing.
pub fn process_key(state: &mut GameState, key: char, rng: &mut impl Rng) -> TurnOutcome {
    match Command::from_key(key) {
        Some(command) => process_command(state, command, rng),
        None => {
            state.push_news("Yikes! That's an invalid option! Try again.", Tone::Bad);
            TurnOutcome::Continue
        }
    }
}

pub fn process_command(state: &mut GameState, command: Command, rng: &mut impl Rng) -> TurnOutcome {
    match command {
        Command::Buy => TurnOutcome::OpenShop(ShopMode::Buy),
        Command::Sell => TurnOutcome::OpenShop(ShopMode::Sell),

        Command::MoveOn => {
            if town_logic::leave_town(&mut state.town, &mut state.hunter, rng) {
                // This town is going away, so flush its news first.
                let crossing = state.town.latest_news.clone();
                state.push_news(&crossing, Tone::Info);
                state.move_to_new_town(rng);
            } else {
                let stuck = state.town.latest_news.clone();
                state.push_news(&stuck, Tone::Bad);
            }
            TurnOutcome::Continue
        }

        Command::LookForTrouble => {
            let outcome = town_logic::look_for_trouble(&mut state.town, &mut state.hunter, rng);
            let tone = match outcome {
                BrawlOutcome::NoTrouble => Tone::Info,
                BrawlOutcome::Won { .. } => Tone::Good,
                BrawlOutcome::Lost { .. } => Tone::Bad,
            };
            let news = state.town.latest_news.clone();
            state.push_news(&news, tone);
            TurnOutcome::Continue
        }

        Command::HuntForTreasure => {
            if town_logic::look_for_treasure(&mut state.town, &mut state.hunter) {
                let found = format!("You found {}!", state.town.treasure().with_article());
                state.push_news(&found, Tone::Good);
                if state.hunter.has_all_treasures() {
                    state.push_news(
                        "That was the last of the treasures. Congratulations, you win!",
                        Tone::Good,
                    );
                    return TurnOutcome::Victory;
                }
            } else if !state.town.has_treasure() {
                state.push_news("You have already searched this town.", Tone::Info);
            } else {
                let duplicate = format!(
                    "You found {}... but you already have one.",
                    state.town.treasure().with_article()
                );
                state.push_news(&duplicate, Tone::Info);
            }
            TurnOutcome::Continue
        }

        Command::Dig => {
            match town_logic::dig(&mut state.town, &mut state.hunter, rng) {
                DigOutcome::Struck(gold) => {
                    let news = format!("You found {} gold!", gold);
                    state.push_news(&news, Tone::Good);
                }
                DigOutcome::Dirt => state.push_news("You dug but only found dirt.", Tone::Info),
                DigOutcome::AlreadyDug => {
                    state.push_news("You've already dug in this town.", Tone::Info)
                }
                DigOutcome::NoShovel => state.push_news("You need a shovel to dig!", Tone::Bad),
            }
            TurnOutcome::Continue
        }

        Command::Quit => {
            let farewell = format!("Fare thee well, {}!", state.hunter.name());
            state.push_news(&farewell, Tone::Info);
            TurnOutcome::Quit
        }
    }
}

/// Called when the shop overlay closes; the town records the visit.
pub fn leave_shop(state: &mut GameState) {
    state.town.shop_visited();
    let news = state.town.latest_news.clone();
    state.push_news(&news, Tone::Info);
}
