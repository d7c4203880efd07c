// ═══════════════════════════════════════════════════════════════════════
// Rules — vote tally, win condition, Mr. White's guess
// ═══════════════════════════════════════════════════════════════════════

use crate::types::*;

/// Player eliminated by this round's votes, or None if nobody voted.
///
/// Tie-break: candidates are ranked in order of their first vote (scanning
/// votes in cast order) and a later candidate only takes the lead with a
/// strictly greater count. Among tied leaders the one voted for first stays
/// eliminated.
pub fn tally_votes(state: &GameState) -> Option<PlayerId> {
    tally(&state.votes)
}

pub(crate) fn tally(votes: &Votes) -> Option<PlayerId> {
    // (target, count) in order of first appearance
    let mut counts: Vec<(PlayerId, usize)> = Vec::new();
    for (_, target) in votes.iter() {
        match counts.iter_mut().find(|(t, _)| *t == target) {
            Some(entry) => entry.1 += 1,
            None => counts.push((target, 1)),
        }
    }

    let mut best: Option<(PlayerId, usize)> = None;
    for (target, count) in counts {
        if best.map_or(true, |(_, max)| count > max) {
            best = Some((target, count));
        }
    }
    best.map(|(target, _)| target)
}

/// Winner by head count among alive players, if the game is decided.
///
/// Infiltrators win once they are at least as many as the civilians; the
/// civilians win once no infiltrator is left. The parity check runs first.
pub fn check_win_condition(state: &GameState) -> Option<Winner> {
    let (infiltrators, civilians) = state
        .alive_players()
        .fold((0usize, 0usize), |(inf, civ), p| {
            if p.role.is_infiltrator() { (inf + 1, civ) } else { (inf, civ + 1) }
        });

    if infiltrators >= civilians {
        Some(Winner::Infiltrators)
    } else if infiltrators == 0 {
        Some(Winner::Civilians)
    } else {
        None
    }
}

/// Mr. White's guess matches the civilian word, ignoring case and
/// surrounding whitespace.
pub fn is_correct_guess(state: &GameState, guess: &str) -> bool {
    let guess = guess.trim();
    !guess.is_empty() && guess.to_lowercase() == state.civilian_word.trim().to_lowercase()
}
