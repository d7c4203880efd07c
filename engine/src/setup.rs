// ═══════════════════════════════════════════════════════════════════════
// Game setup — role assignment and word distribution
// ═══════════════════════════════════════════════════════════════════════

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::types::*;
use crate::words::WORD_PAIRS;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Create a game with a fresh random seed.
pub fn create_game<S: AsRef<str>>(
    names: &[S],
    num_undercover: u8,
    num_mr_white: u8,
) -> Result<GameState, ConfigError> {
    create_game_seeded(names, num_undercover, num_mr_white, rand::random())
}

/// Create a game whose roles and words are fully determined by `seed`.
pub fn create_game_seeded<S: AsRef<str>>(
    names: &[S],
    num_undercover: u8,
    num_mr_white: u8,
    seed: u64,
) -> Result<GameState, ConfigError> {
    let names = names.iter().map(|n| n.as_ref().to_string()).collect();
    create_initial_state(&GameConfig::new(names, num_undercover, num_mr_white), seed)
}

/// Role multiset before shuffling: undercovers, then Mr. Whites, then civilians.
pub fn role_pool(player_count: usize, num_undercover: u8, num_mr_white: u8) -> Vec<Role> {
    let mut roles = Vec::with_capacity(player_count);
    roles.extend(std::iter::repeat(Role::Undercover).take(num_undercover as usize));
    roles.extend(std::iter::repeat(Role::MrWhite).take(num_mr_white as usize));
    while roles.len() < player_count {
        roles.push(Role::Civilian);
    }
    roles
}

/// Validate `config` and deal a new game from it.
pub fn create_initial_state(config: &GameConfig, seed: u64) -> Result<GameState, ConfigError> {
    config.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let (first, second) = WORD_PAIRS[rng.gen_range(0..WORD_PAIRS.len())];
    // Coin flip so neither column of the table is always the civilian word
    let (civilian_word, undercover_word) = if rng.gen_bool(0.5) {
        (first, second)
    } else {
        (second, first)
    };

    let names = config.resolved_names();
    let mut roles = role_pool(names.len(), config.num_undercover, config.num_mr_white);
    roles.shuffle(&mut rng);

    let players: Vec<Player> = names
        .into_iter()
        .zip(roles)
        .enumerate()
        .map(|(i, (name, role))| Player {
            id: PlayerId(i as u8),
            name,
            role,
            word: match role {
                Role::Civilian => Some(civilian_word.to_string()),
                Role::Undercover => Some(undercover_word.to_string()),
                Role::MrWhite => None,
            },
            alive: true,
        })
        .collect();

    info!(
        players = players.len(),
        undercover = config.num_undercover,
        mr_white = config.num_mr_white,
        seed,
        "new game dealt"
    );

    Ok(GameState {
        phase: Phase::Distribute,
        players,
        civilian_word: civilian_word.to_string(),
        undercover_word: undercover_word.to_string(),
        num_undercover: config.num_undercover,
        num_mr_white: config.num_mr_white,
        current_player_index: 0,
        votes: Votes::new(),
        eliminated_player_id: None,
        winner: None,
        round: 1,
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("P{}", i)).collect()
    }

    #[test]
    fn test_create_5_player_game() {
        let state = create_game_seeded(&names(5), 1, 1, 42).unwrap();
        assert_eq!(state.player_count(), 5);
        assert_eq!(state.phase, Phase::Distribute);
        assert_eq!(state.current_player_index, 0);
        assert_eq!(state.round, 1);
        assert!(state.votes.is_empty());
        assert!(state.eliminated_player_id.is_none());
        assert!(state.winner.is_none());
        assert!(state.players.iter().all(|p| p.alive));
        for (i, p) in state.players.iter().enumerate() {
            assert_eq!(p.id, PlayerId(i as u8));
            assert_eq!(p.name, format!("P{}", i));
        }
    }

    #[test]
    fn test_deterministic_seed() {
        let s1 = create_game_seeded(&names(8), 2, 1, 123).unwrap();
        let s2 = create_game_seeded(&names(8), 2, 1, 123).unwrap();
        assert_eq!(s1, s2);
    }

    #[test]
    fn test_role_pool_counts() {
        let pool = role_pool(7, 2, 1);
        assert_eq!(pool.len(), 7);
        assert_eq!(pool.iter().filter(|r| **r == Role::Undercover).count(), 2);
        assert_eq!(pool.iter().filter(|r| **r == Role::MrWhite).count(), 1);
        assert_eq!(pool.iter().filter(|r| **r == Role::Civilian).count(), 4);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = create_game_seeded(&names(4), 1, 1, 0).unwrap_err();
        assert!(matches!(err, ConfigError::TooManyInfiltrators { .. }));
    }

    #[test]
    fn test_words_come_from_one_pair() {
        for seed in 0..50 {
            let state = create_game_seeded(&names(6), 1, 1, seed).unwrap();
            let pair = (state.civilian_word.as_str(), state.undercover_word.as_str());
            assert!(
                WORD_PAIRS.iter().any(|&(a, b)| pair == (a, b) || pair == (b, a)),
                "seed {} produced unknown pair {:?}",
                seed,
                pair
            );
        }
    }

    #[test]
    fn test_both_word_orientations_occur() {
        // Over many seeds each column of the table should land on the civilians
        let mut first_column = 0;
        let mut second_column = 0;
        for seed in 0..200 {
            let state = create_game_seeded(&names(5), 1, 0, seed).unwrap();
            if WORD_PAIRS.iter().any(|&(a, _)| a == state.civilian_word) {
                first_column += 1;
            } else {
                second_column += 1;
            }
        }
        assert!(first_column > 50 && second_column > 50, "{} vs {}", first_column, second_column);
    }
}
