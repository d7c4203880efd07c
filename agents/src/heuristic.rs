// ═══════════════════════════════════════════════════════════════════════
// Heuristic Agent — same votes as a random player, but a Mr. White that
// reads the table before guessing.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use undercover_engine::types::*;
use undercover_engine::visibility::PlayerView;
use undercover_engine::words;

pub struct HeuristicAgent {
    seat: PlayerId,
    rng: ChaCha8Rng,
}

impl HeuristicAgent {
    pub fn new(seat: PlayerId, seed: u64) -> Self {
        HeuristicAgent {
            seat,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Best guess at the civilian word from public reveals.
    ///
    /// An eliminated civilian gives the word away outright. An eliminated
    /// undercover narrows it to the other half of that word's pair.
    fn deduce_civilian_word(view: &PlayerView) -> Option<String> {
        if let Some(word) = view.exposed_words(Role::Civilian).next() {
            return Some(word.to_string());
        }
        view.exposed_words(Role::Undercover)
            .find_map(words::partner_of)
            .map(str::to_string)
    }
}

impl Agent for HeuristicAgent {
    fn name(&self) -> &str { "Heuristic" }
    fn seat(&self) -> PlayerId { self.seat }

    fn vote(&mut self, view: &PlayerView) -> Option<PlayerId> {
        // Votes are secret and descriptions are not modelled, so there is
        // no public signal to rank suspects by.
        view.vote_targets().choose(&mut self.rng).copied()
    }

    fn guess_word(&mut self, view: &PlayerView) -> String {
        match Self::deduce_civilian_word(view) {
            Some(word) => word,
            None => words::all_words()
                .choose(&mut self.rng)
                .unwrap_or_default()
                .to_string(),
        }
    }
}
