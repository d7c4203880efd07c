//! Error types for game setup and phase transitions.
//!
//! The engine never silently ignores a bad call: every precondition a caller
//! can violate (wrong phase, dead or unknown player, self vote, guessing
//! without an eliminated Mr. White) maps to a variant here.

use thiserror::Error;

use crate::types::{Phase, PlayerId};

/// Rejected game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("need between {min} and {max} players, got {got}")]
    PlayerCount { got: usize, min: usize, max: usize },

    #[error("at least one Undercover or Mr. White is required")]
    NoInfiltrators,

    /// Infiltrators must never start as a majority.
    #[error("{requested} infiltrators is too many for {players} players (at most {max})")]
    TooManyInfiltrators {
        requested: usize,
        max: usize,
        players: usize,
    },

    #[error("player name {0:?} is used more than once")]
    DuplicateName(String),
}

/// A call the engine refused because its precondition does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{action} is not allowed in the {phase} phase")]
    InvalidAction { phase: Phase, action: &'static str },

    #[error("no player with id {0}")]
    UnknownPlayer(PlayerId),

    #[error("player {0} has been eliminated")]
    PlayerEliminated(PlayerId),

    #[error("player {0} cannot vote for themselves")]
    SelfVote(PlayerId),

    #[error("no votes have been cast")]
    NoVotes,

    #[error("there is no eliminated Mr. White waiting to guess")]
    NoPendingGuess,
}
