//! Game state and turn dispatch.

pub mod constants;
pub mod game_logic;
pub mod game_state;
