// ═══════════════════════════════════════════════════════════════════════
// Batch simulation — many seeded games in parallel, faction statistics
// ═══════════════════════════════════════════════════════════════════════

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};
use undercover_agents::AgentKind;
use undercover_engine::config::GameConfig;
use undercover_engine::types::*;

use crate::runner::{make_agents, run_game, GameResult};

/// Seeds of consecutive games are this far apart.
const SEED_STRIDE: u64 = 1000;

/// Aggregated outcome of a batch of games.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub games: u32,
    pub errors: u32,
    pub civilian_wins: u32,
    pub infiltrator_wins: u32,
    pub mr_white_wins: u32,
    pub total_rounds: u64,
    /// Times an eliminated Mr. White got to guess, and how often correctly.
    pub mr_white_guesses: u32,
    pub mr_white_correct: u32,
}

impl BatchSummary {
    pub fn record(&mut self, result: &GameResult) {
        self.games += 1;
        self.total_rounds += result.rounds_played as u64;
        match result.winner {
            Winner::Civilians => self.civilian_wins += 1,
            Winner::Infiltrators => self.infiltrator_wins += 1,
            Winner::MrWhite => self.mr_white_wins += 1,
        }
        let guesses = result
            .eliminations
            .iter()
            .filter(|e| e.role == Role::MrWhite)
            .count() as u32;
        self.mr_white_guesses += guesses;
        if result.winner == Winner::MrWhite {
            self.mr_white_correct += 1;
        }
    }

    pub fn merge(mut self, other: BatchSummary) -> BatchSummary {
        self.games += other.games;
        self.errors += other.errors;
        self.civilian_wins += other.civilian_wins;
        self.infiltrator_wins += other.infiltrator_wins;
        self.mr_white_wins += other.mr_white_wins;
        self.total_rounds += other.total_rounds;
        self.mr_white_guesses += other.mr_white_guesses;
        self.mr_white_correct += other.mr_white_correct;
        self
    }

    pub fn wins(&self, winner: Winner) -> u32 {
        match winner {
            Winner::Civilians => self.civilian_wins,
            Winner::Infiltrators => self.infiltrator_wins,
            Winner::MrWhite => self.mr_white_wins,
        }
    }

    /// Share of finished games won by `winner`, in percent.
    pub fn win_rate(&self, winner: Winner) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins(winner) as f64 / self.games as f64 * 100.0
        }
    }

    pub fn average_rounds(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_rounds as f64 / self.games as f64
        }
    }
}

/// Seed of game `index` in a batch starting at `base_seed`.
pub fn game_seed(base_seed: u64, index: u32) -> u64 {
    base_seed.wrapping_add(index as u64 * SEED_STRIDE)
}

/// Play `games` games in parallel and aggregate the outcomes.
///
/// Failed games are logged and counted in `errors`; they do not abort the
/// batch.
pub fn run_batch(
    config: &GameConfig,
    kind: AgentKind,
    games: u32,
    base_seed: u64,
    max_actions: usize,
) -> BatchSummary {
    let summary = (0..games)
        .into_par_iter()
        .map(|g| {
            let seed = game_seed(base_seed, g);
            let mut agents = make_agents(kind, config.player_count(), seed);
            (seed, run_game(&mut agents, config, seed, max_actions))
        })
        .fold(BatchSummary::default, |mut summary, (seed, outcome)| {
            match outcome {
                Ok(result) => summary.record(&result),
                Err(e) => {
                    warn!(seed, error = %e, "game failed");
                    summary.errors += 1;
                }
            }
            summary
        })
        .reduce(BatchSummary::default, BatchSummary::merge);

    info!(
        games = summary.games,
        errors = summary.errors,
        civilians = summary.civilian_wins,
        infiltrators = summary.infiltrator_wins,
        mr_white = summary.mr_white_wins,
        "batch finished"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_counts_add_up() {
        let config = GameConfig::default();
        let summary = run_batch(&config, AgentKind::Random, 200, 42, 10_000);
        assert_eq!(summary.errors, 0);
        assert_eq!(summary.games, 200);
        assert_eq!(
            summary.civilian_wins + summary.infiltrator_wins + summary.mr_white_wins,
            200
        );
        assert!(summary.mr_white_correct <= summary.mr_white_guesses);
        assert!(summary.average_rounds() >= 1.0);
        let total: f64 = Winner::ALL.iter().map(|w| summary.win_rate(*w)).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_batch_is_deterministic() {
        let config = GameConfig::with_player_count(7, 1, 1);
        let a = run_batch(&config, AgentKind::Mixed, 60, 7, 10_000);
        let b = run_batch(&config, AgentKind::Mixed, 60, 7, 10_000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_config_counts_errors() {
        let config = GameConfig::with_player_count(3, 0, 0);
        let summary = run_batch(&config, AgentKind::Random, 5, 0, 100);
        assert_eq!(summary.games, 0);
        assert_eq!(summary.errors, 5);
        assert_eq!(summary.win_rate(Winner::Civilians), 0.0);
    }

    #[test]
    fn test_heuristic_mr_white_beats_random_guessing() {
        // Exposed words let the heuristic Mr. White guess right far more
        // often than picking from the whole table.
        let config = GameConfig::with_player_count(8, 1, 1);
        let random = run_batch(&config, AgentKind::Random, 400, 1, 10_000);
        let heuristic = run_batch(&config, AgentKind::Heuristic, 400, 1, 10_000);
        assert!(heuristic.mr_white_wins > random.mr_white_wins);
    }
}
