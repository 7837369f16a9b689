//! Prospect - Terminal Frontier Treasure Hunt
//!
//! Binary entry point: terminal bracketing and the screen state machine
//! (name entry, difficulty select, the game itself plus its overlays).

mod ui;

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use prospect::core::game_logic::{self, TurnOutcome};
use prospect::core::game_state::GameState;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use ui::setup_scene::{DifficultyScreen, NameEntryScreen};
use ui::shop_scene::ShopScene;
use ui::town_scene;

#[derive(Clone, Copy)]
enum Screen {
    NameEntry,
    DifficultySelect,
    Game,
}

enum Overlay {
    None,
    Shop(ShopScene),
    GameOver { victory: bool },
}

fn main() -> io::Result<()> {
    // Handle CLI arguments before touching the terminal
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("prospect {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Prospect - Terminal Frontier Treasure Hunt\n");
                println!("Usage: prospect [OPTIONS]\n");
                println!("Options:");
                println!("  -v, --version  Show version information");
                println!("  -h, --help     Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'prospect --help' for usage.");
                std::process::exit(2);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Cleanup terminal even when the loop errored
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut rng = rand::thread_rng();

    let mut screen = Screen::NameEntry;
    let mut name_screen = NameEntryScreen::new();
    let mut hunter_name = String::new();
    let mut state: Option<GameState> = None;
    let mut overlay = Overlay::None;

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            match screen {
                Screen::NameEntry => name_screen.draw(frame, area),
                Screen::DifficultySelect => DifficultyScreen::draw(frame, area),
                Screen::Game => {
                    if let Some(game) = &state {
                        town_scene::draw_game(frame, game);
                        match &overlay {
                            Overlay::Shop(shop) => shop.draw(frame, area, game),
                            Overlay::GameOver { victory } => {
                                town_scene::draw_game_over(frame, area, game, *victory)
                            }
                            Overlay::None => {}
                        }
                    }
                }
            }
        })?;

        // Turn-based: block until the next key
        let Event::Key(key_event) = event::read()? else {
            continue;
        };

        match screen {
            Screen::NameEntry => match key_event.code {
                KeyCode::Char(c) => name_screen.handle_char_input(c),
                KeyCode::Backspace => name_screen.handle_backspace(),
                KeyCode::Enter => {
                    if name_screen.is_valid() {
                        hunter_name = name_screen.get_name();
                        screen = Screen::DifficultySelect;
                    }
                }
                KeyCode::Esc => break,
                _ => {}
            },

            Screen::DifficultySelect => match key_event.code {
                KeyCode::Char(c) => {
                    if let Some((difficulty, scout_cheat)) = DifficultyScreen::select(c) {
                        state = Some(GameState::new(
                            hunter_name.clone(),
                            difficulty,
                            scout_cheat,
                            &mut rng,
                        ));
                        overlay = Overlay::None;
                        screen = Screen::Game;
                    }
                }
                KeyCode::Esc => screen = Screen::NameEntry,
                _ => {}
            },

            Screen::Game => {
                let Some(game) = state.as_mut() else {
                    break;
                };
                let current = std::mem::replace(&mut overlay, Overlay::None);
                overlay = match current {
                    // Any key leaves the frontier once the game is over.
                    Overlay::GameOver { .. } => break,

                    Overlay::Shop(mut shop) => match key_event.code {
                        KeyCode::Up => {
                            shop.move_up();
                            Overlay::Shop(shop)
                        }
                        KeyCode::Down => {
                            shop.move_down(game);
                            Overlay::Shop(shop)
                        }
                        KeyCode::Enter => {
                            shop.transact(game);
                            Overlay::Shop(shop)
                        }
                        KeyCode::Esc => {
                            game_logic::leave_shop(game);
                            Overlay::None
                        }
                        _ => Overlay::Shop(shop),
                    },

                    Overlay::None => {
                        if let KeyCode::Char(c) = key_event.code {
                            match game_logic::process_key(game, c, &mut rng) {
                                TurnOutcome::Continue => Overlay::None,
                                TurnOutcome::OpenShop(mode) => Overlay::Shop(ShopScene::new(mode)),
                                TurnOutcome::Quit => Overlay::GameOver { victory: false },
                                TurnOutcome::Victory => Overlay::GameOver { victory: true },
                            }
                        } else {
                            Overlay::None
                        }
                    }
                };
            }
        }
    }

    Ok(())
}
