pub mod types;
pub mod error;
pub mod config;
pub mod words;
pub mod setup;
pub mod rules;
pub mod engine;
pub mod visibility;


pub use types::*;
pub use error::{ConfigError, EngineError};
pub use config::GameConfig;
pub use engine::{apply_action, Action};
pub use rules::{check_win_condition, is_correct_guess, tally_votes};
pub use setup::{create_game, create_game_seeded, create_initial_state};
