// ═══════════════════════════════════════════════════════════════════════
// Agent Trait — interface for simulated players
//
// KEY DESIGN PRINCIPLE:
//   Agents receive a `PlayerView` (not raw GameState), which only
//   contains what that seat could know at the table: its own word, the
//   roster, and whatever eliminations have revealed.
//
//   The agent never gets to see:
//     - Other alive players' roles or words
//     - Other players' ballots
//     - Which word is the civilian word (unless someone revealed it)
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use undercover_engine::engine::Action;
use undercover_engine::types::*;
use undercover_engine::visibility::PlayerView;

use crate::heuristic::HeuristicAgent;
use crate::random::RandomAgent;

/// A simulated player sitting in one seat.
pub trait Agent: Send + Sync {
    fn name(&self) -> &str;

    fn seat(&self) -> PlayerId;

    /// Answer whatever the current phase asks of this seat. None when the
    /// phase has no decision for a player (Distribute, Describe, ...) or
    /// there is nobody to vote for.
    fn decide(&mut self, view: &PlayerView) -> Option<Action> {
        match view.phase {
            Phase::Vote => self
                .vote(view)
                .map(|target| Action::CastVote { voter: self.seat(), target }),
            Phase::MrWhiteGuess => Some(Action::GuessWord(self.guess_word(view))),
            Phase::Distribute
            | Phase::Describe
            | Phase::Discuss
            | Phase::Reveal
            | Phase::GameOver => None,
        }
    }

    /// Pick an alive player other than ourselves to eliminate.
    fn vote(&mut self, view: &PlayerView) -> Option<PlayerId>;

    /// Mr. White's last-chance guess at the civilian word.
    fn guess_word(&mut self, view: &PlayerView) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Random,
    Heuristic,
    /// Alternating seats: heuristic on even seats, random on odd ones.
    Mixed,
}

impl std::str::FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(AgentKind::Random),
            "heuristic" => Ok(AgentKind::Heuristic),
            "mixed" => Ok(AgentKind::Mixed),
            other => Err(format!("unknown agent kind {:?} (expected random, heuristic or mixed)", other)),
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentKind::Random => write!(f, "random"),
            AgentKind::Heuristic => write!(f, "heuristic"),
            AgentKind::Mixed => write!(f, "mixed"),
        }
    }
}

/// Build the agent of `kind` for `seat`.
pub fn make_agent(kind: AgentKind, seat: PlayerId, seed: u64) -> Box<dyn Agent> {
    match kind {
        AgentKind::Random => Box::new(RandomAgent::new(seat, seed)),
        AgentKind::Heuristic => Box::new(HeuristicAgent::new(seat, seed)),
        AgentKind::Mixed => {
            if seat.0 % 2 == 0 {
                Box::new(HeuristicAgent::new(seat, seed))
            } else {
                Box::new(RandomAgent::new(seat, seed))
            }
        }
    }
}
