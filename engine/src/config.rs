// ═══════════════════════════════════════════════════════════════════════
// Game configuration — player names and faction sizes
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ConfigError;

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 12;

/// Largest infiltrator count (Undercover + Mr. White) that still leaves
/// the civilians a strict majority.
pub fn max_infiltrators(player_count: usize) -> usize {
    player_count.saturating_sub(1) / 2
}

/// Name used for a seat left blank (1-based).
pub fn default_name(seat: usize) -> String {
    format!("Player {}", seat + 1)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seat order. Blank entries become "Player N".
    pub names: Vec<String>,
    pub num_undercover: u8,
    pub num_mr_white: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::with_player_count(5, 1, 1)
    }
}

impl GameConfig {
    pub fn new(names: Vec<String>, num_undercover: u8, num_mr_white: u8) -> Self {
        GameConfig { names, num_undercover, num_mr_white }
    }

    /// Config with `count` unnamed seats.
    pub fn with_player_count(count: usize, num_undercover: u8, num_mr_white: u8) -> Self {
        GameConfig {
            names: vec![String::new(); count],
            num_undercover,
            num_mr_white,
        }
    }

    pub fn player_count(&self) -> usize {
        self.names.len()
    }

    pub fn num_infiltrators(&self) -> usize {
        self.num_undercover as usize + self.num_mr_white as usize
    }

    /// Names trimmed, with blanks replaced by their seat default.
    pub fn resolved_names(&self) -> Vec<String> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| {
                let trimmed = n.trim();
                if trimmed.is_empty() { default_name(i) } else { trimmed.to_string() }
            })
            .collect()
    }

    /// Names must be unique after trimming; the comparison is case-sensitive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let players = self.player_count();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(ConfigError::PlayerCount {
                got: players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        let requested = self.num_infiltrators();
        if requested == 0 {
            return Err(ConfigError::NoInfiltrators);
        }
        let max = max_infiltrators(players);
        if requested > max {
            return Err(ConfigError::TooManyInfiltrators { requested, max, players });
        }

        let mut seen = HashSet::new();
        for name in self.resolved_names() {
            if !seen.insert(name.clone()) {
                return Err(ConfigError::DuplicateName(name));
            }
        }
        Ok(())
    }
}
