// ═══════════════════════════════════════════════════════════════════════
// Game Runner — runs a complete headless game with agents
// ═══════════════════════════════════════════════════════════════════════

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};
use undercover_agents::{make_agent, Agent, AgentKind};
use undercover_engine::config::GameConfig;
use undercover_engine::engine::{apply_action, Action};
use undercover_engine::error::{ConfigError, EngineError};
use undercover_engine::setup::create_initial_state;
use undercover_engine::types::*;
use undercover_engine::visibility::player_view;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid game configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("engine rejected an agent action: {0}")]
    Engine(#[from] EngineError),

    #[error("no agent seated at {0}")]
    NoAgent(PlayerId),

    #[error("agent at {seat} had no answer in the {phase} phase")]
    NoDecision { seat: PlayerId, phase: Phase },

    #[error("game exceeded {limit} actions without finishing (round {round})")]
    TooLong { limit: usize, round: u32 },

    #[error("game stuck: phase={phase}, round={round}")]
    Stuck { phase: Phase, round: u32 },
}

/// Result of a completed game.
#[derive(Debug, Clone, Serialize)]
pub struct GameResult {
    pub seed: u64,
    pub winner: Winner,
    pub rounds_played: u32,
    pub civilian_word: String,
    pub undercover_word: String,
    /// In elimination order.
    pub eliminations: Vec<Elimination>,
    pub player_results: Vec<PlayerResult>,
    /// Mr. White's guess, if one was eliminated, and whether it was right.
    pub mr_white_guess: Option<(String, bool)>,
    pub final_state: GameState,
}

#[derive(Debug, Clone, Serialize)]
pub struct Elimination {
    pub round: u32,
    pub player: PlayerId,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerResult {
    pub id: PlayerId,
    pub name: String,
    pub agent_name: String,
    pub role: Role,
    pub survived: bool,
    pub won: bool,
}

/// One agent per seat, seat `i` seeded from `seed + i + 1`.
pub fn make_agents(kind: AgentKind, player_count: usize, seed: u64) -> Vec<Box<dyn Agent>> {
    (0..player_count)
        .map(|i| make_agent(kind, PlayerId(i as u8), seed.wrapping_add(i as u64 + 1)))
        .collect()
}

/// Run a complete game. `agents[i]` plays seat `i`.
pub fn run_game(
    agents: &mut [Box<dyn Agent>],
    config: &GameConfig,
    seed: u64,
    max_actions: usize, // safety limit to prevent infinite loops
) -> Result<GameResult, RunError> {
    let mut state = create_initial_state(config, seed)?;
    let mut eliminations = Vec::new();
    let mut mr_white_guess = None;
    let mut action_count = 0;

    while state.phase != Phase::GameOver {
        let action = match state.phase {
            // Nobody decides anything while the phone is passed around
            Phase::Distribute | Phase::Describe => Action::Next,
            Phase::Discuss => Action::StartVote,

            Phase::Vote => {
                let voter = state
                    .next_voter()
                    .map(|p| p.id)
                    .ok_or(RunError::Stuck { phase: state.phase, round: state.round })?;
                ask_agent(agents, &state, voter)?
            }

            Phase::Reveal => {
                record_elimination(&state, &mut eliminations);
                Action::Continue
            }

            Phase::MrWhiteGuess => {
                let seat = record_elimination(&state, &mut eliminations)
                    .ok_or(RunError::Stuck { phase: state.phase, round: state.round })?;
                let action = ask_agent(agents, &state, seat)?;
                if let Action::GuessWord(guess) = &action {
                    let correct = undercover_engine::rules::is_correct_guess(&state, guess);
                    debug!(guess = guess.as_str(), correct, "Mr. White guessed");
                    mr_white_guess = Some((guess.clone(), correct));
                }
                action
            }

            Phase::GameOver => break,
        };

        trace!(?action, phase = %state.phase, "applying");
        state = apply_action(&state, action)?;

        action_count += 1;
        if action_count > max_actions {
            return Err(RunError::TooLong { limit: max_actions, round: state.round });
        }
    }

    let winner = state
        .winner
        .ok_or(RunError::Stuck { phase: state.phase, round: state.round })?;
    Ok(build_result(agents, state, seed, winner, eliminations, mr_white_guess))
}

fn ask_agent(
    agents: &mut [Box<dyn Agent>],
    state: &GameState,
    seat: PlayerId,
) -> Result<Action, RunError> {
    let agent = agents.get_mut(seat.index()).ok_or(RunError::NoAgent(seat))?;
    let view = player_view(state, seat);
    agent
        .decide(&view)
        .ok_or(RunError::NoDecision { seat, phase: state.phase })
}

fn record_elimination(state: &GameState, eliminations: &mut Vec<Elimination>) -> Option<PlayerId> {
    let player = state.eliminated_player()?;
    eliminations.push(Elimination {
        round: state.round,
        player: player.id,
        name: player.name.clone(),
        role: player.role,
    });
    Some(player.id)
}

fn build_result(
    agents: &[Box<dyn Agent>],
    state: GameState,
    seed: u64,
    winner: Winner,
    eliminations: Vec<Elimination>,
    mr_white_guess: Option<(String, bool)>,
) -> GameResult {
    let player_results = state
        .players
        .iter()
        .map(|p| PlayerResult {
            id: p.id,
            name: p.name.clone(),
            agent_name: agents
                .get(p.id.index())
                .map(|a| a.name().to_string())
                .unwrap_or_default(),
            role: p.role,
            survived: p.alive,
            won: winner.includes(p.role),
        })
        .collect();

    GameResult {
        seed,
        winner,
        rounds_played: state.round,
        civilian_word: state.civilian_word.clone(),
        undercover_word: state.undercover_word.clone(),
        eliminations,
        player_results,
        mr_white_guess,
        final_state: state,
    }
}
