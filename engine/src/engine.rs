// ═══════════════════════════════════════════════════════════════════════
// Game Engine — phase state machine
//
// Architecture:
//   The engine is a pure state machine. It never does I/O or talks to
//   players. The caller (a UI, or the headless tournament runner) reads
//   the current phase, collects the matching user action and feeds it to
//   `apply_action()`, which returns a brand new GameState. The input
//   state is never modified, so the caller can simply replace its copy.
//
// Flow:
//   Distribute ─Next…→ Describe ─Next…→ Discuss ─StartVote→ Vote
//   Vote ─CastVote… (last alive voter)→ Reveal | MrWhiteGuess
//   Reveal ─Continue→ GameOver | Describe (round + 1)
//   MrWhiteGuess ─GuessWord→ GameOver | Describe (round + 1)
// ═══════════════════════════════════════════════════════════════════════

use crate::error::EngineError;
use crate::rules;
use crate::types::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// User actions forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Current player is done (saw their word, or finished describing).
    Next,

    /// End the discussion and open a fresh ballot.
    StartVote,

    /// Voting again before the ballot closes replaces the earlier vote.
    CastVote { voter: PlayerId, target: PlayerId },

    /// Leave the reveal screen.
    Continue,

    /// Eliminated Mr. White's last-chance guess at the civilian word.
    GuessWord(String),
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::Next => "next",
            Action::StartVote => "start vote",
            Action::CastVote { .. } => "cast vote",
            Action::Continue => "continue",
            Action::GuessWord(_) => "guess word",
        }
    }
}

/// Apply one action and return the resulting state.
pub fn apply_action(state: &GameState, action: Action) -> Result<GameState, EngineError> {
    let mut next = state.clone();

    match (state.phase, action) {
        (Phase::Distribute, Action::Next) => advance_distribute(&mut next),

        (Phase::Describe, Action::Next) => advance_describe(&mut next),

        (Phase::Discuss, Action::StartVote) => {
            next.votes.clear();
            set_phase(&mut next, Phase::Vote);
        }

        (Phase::Vote, Action::CastVote { voter, target }) => {
            cast_vote(&mut next, voter, target)?;
            if next.alive_players().all(|p| next.votes.has_voted(p.id)) {
                resolve_votes(&mut next)?;
            }
        }

        (Phase::Reveal, Action::Continue) => {
            if next.winner.is_some() {
                set_phase(&mut next, Phase::GameOver);
            } else {
                start_next_round(&mut next);
            }
        }

        (Phase::MrWhiteGuess, Action::GuessWord(guess)) => resolve_guess(&mut next, &guess)?,

        (_, Action::GuessWord(_)) => return Err(EngineError::NoPendingGuess),

        (phase, action) => {
            return Err(EngineError::InvalidAction { phase, action: action.label() });
        }
    }

    Ok(next)
}

// ── Transitions ────────────────────────────────────────────────────────

fn set_phase(state: &mut GameState, phase: Phase) {
    debug!(from = %state.phase, to = %phase, round = state.round, "phase change");
    state.phase = phase;
}

fn advance_distribute(state: &mut GameState) {
    if state.current_player_index + 1 >= state.player_count() {
        state.current_player_index = 0;
        set_phase(state, Phase::Describe);
    } else {
        state.current_player_index += 1;
    }
}

fn advance_describe(state: &mut GameState) {
    // Cursor counts alive players only; eliminated seats are skipped.
    if state.current_player_index + 1 >= state.alive_count() {
        state.current_player_index = 0;
        set_phase(state, Phase::Discuss);
    } else {
        state.current_player_index += 1;
    }
}

fn cast_vote(state: &mut GameState, voter: PlayerId, target: PlayerId) -> Result<(), EngineError> {
    for id in [voter, target] {
        let player = state.player(id).ok_or(EngineError::UnknownPlayer(id))?;
        if !player.alive {
            return Err(EngineError::PlayerEliminated(id));
        }
    }
    if voter == target {
        return Err(EngineError::SelfVote(voter));
    }

    debug!(%voter, %target, "vote cast");
    state.votes.cast(voter, target);
    Ok(())
}

/// Tally the closed ballot and eliminate the loser.
fn resolve_votes(state: &mut GameState) -> Result<(), EngineError> {
    let eliminated = rules::tally(&state.votes).ok_or(EngineError::NoVotes)?;
    let player = state
        .player_mut(eliminated)
        .ok_or(EngineError::UnknownPlayer(eliminated))?;
    player.alive = false;
    let role = player.role;

    info!(player = %eliminated, %role, round = state.round, "player eliminated");
    state.eliminated_player_id = Some(eliminated);

    match role {
        Role::MrWhite => set_phase(state, Phase::MrWhiteGuess),
        Role::Civilian | Role::Undercover => {
            declare_winner(state, rules::check_win_condition(state));
            set_phase(state, Phase::Reveal);
        }
    }
    Ok(())
}

fn resolve_guess(state: &mut GameState, guess: &str) -> Result<(), EngineError> {
    match state.eliminated_player() {
        Some(p) if p.role == Role::MrWhite => {}
        _ => return Err(EngineError::NoPendingGuess),
    }

    if rules::is_correct_guess(state, guess) {
        declare_winner(state, Some(Winner::MrWhite));
        set_phase(state, Phase::GameOver);
        return Ok(());
    }

    debug!(guess, "Mr. White guessed wrong");
    declare_winner(state, rules::check_win_condition(state));
    if state.winner.is_some() {
        set_phase(state, Phase::GameOver);
    } else {
        start_next_round(state);
    }
    Ok(())
}

fn declare_winner(state: &mut GameState, winner: Option<Winner>) {
    if state.winner.is_some() {
        return;
    }
    if let Some(w) = winner {
        info!(winner = %w, round = state.round, "game decided");
        state.winner = Some(w);
    }
}

fn start_next_round(state: &mut GameState) {
    state.round += 1;
    state.current_player_index = 0;
    state.votes.clear();
    state.eliminated_player_id = None;
    set_phase(state, Phase::Describe);
}
