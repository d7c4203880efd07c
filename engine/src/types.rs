// ═══════════════════════════════════════════════════════════════════════
// Core types — roles, phases, players, votes and the GameState aggregate
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

// ── Enums ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Civilian,
    Undercover,
    MrWhite,
}

impl Role {
    /// Display name shown on the reveal and game-over screens.
    pub fn name(self) -> &'static str {
        match self {
            Role::Civilian => "Civilian",
            Role::Undercover => "Undercover",
            Role::MrWhite => "Mr. White",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Role::Civilian => "\u{1F9D1}",
            Role::Undercover => "\u{1F575}\u{FE0F}",
            Role::MrWhite => "\u{1F47B}",
        }
    }

    /// Undercover and Mr. White both count as infiltrators for win accounting.
    pub fn is_infiltrator(self) -> bool {
        match self {
            Role::Civilian => false,
            Role::Undercover | Role::MrWhite => true,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Phone passes seat by seat; each player privately sees their word.
    Distribute,
    /// Alive players describe their word one after another.
    Describe,
    Discuss,
    Vote,
    /// The eliminated player's role and word are shown to everyone.
    Reveal,
    /// An eliminated Mr. White gets one guess at the civilian word.
    MrWhiteGuess,
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Distribute => write!(f, "distribute"),
            Phase::Describe => write!(f, "describe"),
            Phase::Discuss => write!(f, "discuss"),
            Phase::Vote => write!(f, "vote"),
            Phase::Reveal => write!(f, "reveal"),
            Phase::MrWhiteGuess => write!(f, "mrwhite-guess"),
            Phase::GameOver => write!(f, "gameover"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Civilians,
    Infiltrators,
    MrWhite,
}

impl Winner {
    pub const ALL: [Winner; 3] = [Winner::Civilians, Winner::Infiltrators, Winner::MrWhite];

    pub fn label(self) -> &'static str {
        match self {
            Winner::Civilians => "Civilians Win!",
            Winner::Infiltrators => "Infiltrators Win!",
            Winner::MrWhite => "Mr. White Wins!",
        }
    }

    /// Whether a player holding `role` is on the winning side.
    pub fn includes(self, role: Role) -> bool {
        match self {
            Winner::Civilians => role == Role::Civilian,
            Winner::Infiltrators => role.is_infiltrator(),
            Winner::MrWhite => role == Role::MrWhite,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Civilians => write!(f, "Civilians"),
            Winner::Infiltrators => write!(f, "Infiltrators"),
            Winner::MrWhite => write!(f, "Mr. White"),
        }
    }
}

// ── Player ID ──────────────────────────────────────────────────────────
// Seat index. Players are never removed, so ids stay valid for the game.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ── Player ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    pub word: Option<String>, // None for Mr. White
    pub alive: bool,
}

// ── Votes ──────────────────────────────────────────────────────────────

/// Ballot for the current round: voter → target, kept in cast order.
///
/// A voter voting again replaces their target in place, so the entry keeps
/// the position of that voter's first vote. The tally's tie-break depends
/// on this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Votes {
    cast: Vec<(PlayerId, PlayerId)>,
}

impl Votes {
    pub fn new() -> Self {
        Votes::default()
    }

    pub fn cast(&mut self, voter: PlayerId, target: PlayerId) {
        match self.cast.iter_mut().find(|(v, _)| *v == voter) {
            Some(entry) => entry.1 = target,
            None => self.cast.push((voter, target)),
        }
    }

    pub fn target_of(&self, voter: PlayerId) -> Option<PlayerId> {
        self.cast.iter().find(|(v, _)| *v == voter).map(|(_, t)| *t)
    }

    pub fn has_voted(&self, voter: PlayerId) -> bool {
        self.target_of(voter).is_some()
    }

    pub fn len(&self) -> usize {
        self.cast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cast.is_empty()
    }

    pub fn clear(&mut self) {
        self.cast.clear();
    }

    /// (voter, target) pairs in cast order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, PlayerId)> + '_ {
        self.cast.iter().copied()
    }
}

impl FromIterator<(PlayerId, PlayerId)> for Votes {
    fn from_iter<I: IntoIterator<Item = (PlayerId, PlayerId)>>(iter: I) -> Self {
        let mut votes = Votes::new();
        for (voter, target) in iter {
            votes.cast(voter, target);
        }
        votes
    }
}

// ── Game State ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    /// Seat order. `players[i].id == PlayerId(i)`.
    pub players: Vec<Player>,
    pub civilian_word: String,
    pub undercover_word: String,
    pub num_undercover: u8,
    pub num_mr_white: u8,
    /// Cursor for Distribute (over all seats) and Describe (over alive seats).
    pub current_player_index: usize,
    pub votes: Votes,
    pub eliminated_player_id: Option<PlayerId>,
    pub winner: Option<Winner>,
    pub round: u32,
    /// Seed the roles and words were drawn from.
    pub seed: u64,
}

impl GameState {
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    /// Alive players in seat order.
    pub fn alive_players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.players.iter().filter(|p| p.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.alive_players().count()
    }

    pub fn num_civilians(&self) -> usize {
        self.players.len() - self.num_undercover as usize - self.num_mr_white as usize
    }

    /// Whose turn it is in Distribute or Describe. None in every other phase.
    pub fn current_player(&self) -> Option<&Player> {
        match self.phase {
            Phase::Distribute => self.players.get(self.current_player_index),
            Phase::Describe => self.alive_players().nth(self.current_player_index),
            Phase::Discuss
            | Phase::Vote
            | Phase::Reveal
            | Phase::MrWhiteGuess
            | Phase::GameOver => None,
        }
    }

    /// First alive player, in seat order, who has not voted this round.
    pub fn next_voter(&self) -> Option<&Player> {
        if self.phase != Phase::Vote {
            return None;
        }
        self.alive_players().find(|p| !self.votes.has_voted(p.id))
    }

    pub fn eliminated_player(&self) -> Option<&Player> {
        self.eliminated_player_id.and_then(|id| self.player(id))
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
