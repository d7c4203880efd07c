// ═══════════════════════════════════════════════════════════════════════
// Random Agent — makes all decisions randomly.
// Serves as baseline and for testing game engine stability.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use undercover_engine::types::*;
use undercover_engine::visibility::PlayerView;
use undercover_engine::words;

pub struct RandomAgent {
    seat: PlayerId,
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(seat: PlayerId, seed: u64) -> Self {
        RandomAgent {
            seat,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str { "Random" }
    fn seat(&self) -> PlayerId { self.seat }

    fn vote(&mut self, view: &PlayerView) -> Option<PlayerId> {
        view.vote_targets().choose(&mut self.rng).copied()
    }

    fn guess_word(&mut self, _view: &PlayerView) -> String {
        words::all_words()
            .choose(&mut self.rng)
            .unwrap_or_default()
            .to_string()
    }
}
