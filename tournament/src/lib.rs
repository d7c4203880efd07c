pub mod runner;
pub mod batch;

pub use runner::{make_agents, run_game, GameResult, RunError};
pub use batch::{run_batch, BatchSummary};
