// ═══════════════════════════════════════════════════════════════════════
// Visibility / Information Model
//
// On the shared phone, information is split between:
//   PUBLIC  — everyone at the table knows it
//   PRIVATE — only the player holding the phone during Distribute
//   HIDDEN  — nobody knows it until the game ends
//
// This module produces a "player view" of the game state that only
// contains what a given seat is entitled to know. Simulated players MUST
// only receive a PlayerView, never the raw GameState.
// ═══════════════════════════════════════════════════════════════════════

use crate::types::*;
use serde::{Deserialize, Serialize};

// ── What is PUBLIC ─────────────────────────────────────────────────────
//
// • Names and seats of all players, and who is still alive
// • Current round and phase
// • Every eliminated player's role and word (shown on the reveal screen)
// • The winner, and once the game is over both words and all roles
//
// ── What is PRIVATE (per player) ───────────────────────────────────────
//
// • Your own word. Civilians and Undercovers are not told which of the
//   two they are; Mr. White is told, because he has no word at all.
//
// ── What is HIDDEN ─────────────────────────────────────────────────────
//
// • Everyone else's role and word while they are alive
// • The other players' ballots (votes are cast privately on the phone)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    // ── Public info ────────────────────────────────────────
    pub viewer: PlayerId,
    pub round: u32,
    pub phase: Phase,
    pub roster: Vec<SeatView>,
    pub winner: Option<Winner>,
    /// Both words, only once the game is over.
    pub revealed_words: Option<(String, String)>,

    // ── Private info (only for the viewer) ─────────────────
    pub my_word: Option<String>,
    /// Set only for Mr. White; word holders do not learn their faction.
    pub i_am_mr_white: bool,
}

/// What the table knows about one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub id: PlayerId,
    pub name: String,
    pub alive: bool,
    /// Role shown on elimination, or for everyone at game over.
    pub revealed_role: Option<Role>,
    pub revealed_word: Option<String>,
}

impl PlayerView {
    /// Alive seats other than the viewer: the legal vote targets.
    pub fn vote_targets(&self) -> Vec<PlayerId> {
        self.roster
            .iter()
            .filter(|s| s.alive && s.id != self.viewer)
            .map(|s| s.id)
            .collect()
    }

    /// Words exposed by eliminated players of the given role.
    pub fn exposed_words(&self, role: Role) -> impl Iterator<Item = &str> + '_ {
        self.roster
            .iter()
            .filter(move |s| !s.alive && s.revealed_role == Some(role))
            .filter_map(|s| s.revealed_word.as_deref())
    }
}

/// Build the view of `state` that seat `viewer` may see.
pub fn player_view(state: &GameState, viewer: PlayerId) -> PlayerView {
    let game_over = state.phase == Phase::GameOver;

    let roster = state
        .players
        .iter()
        .map(|p| {
            let revealed = game_over || !p.alive;
            SeatView {
                id: p.id,
                name: p.name.clone(),
                alive: p.alive,
                revealed_role: revealed.then_some(p.role),
                revealed_word: if revealed { p.word.clone() } else { None },
            }
        })
        .collect();

    let me = state.player(viewer);

    PlayerView {
        viewer,
        round: state.round,
        phase: state.phase,
        roster,
        winner: state.winner,
        revealed_words: game_over
            .then(|| (state.civilian_word.clone(), state.undercover_word.clone())),
        my_word: me.and_then(|p| p.word.clone()),
        i_am_mr_white: me.map_or(false, |p| p.role == Role::MrWhite),
    }
}
