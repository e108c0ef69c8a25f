mod config;
mod console_interface;
mod driver;
mod frontier;
mod models;

pub use config::SolverConfig;
pub use console_interface::{render_search, SearchInfo, SearchRenderState};
pub use driver::Search;
pub use frontier::Frontier;
pub use models::{SearchNode, SearchStats, SearchStep, Solution};

use crate::core::{GameState, SharedGameState};

/// Run a best-first search from `initial` until it is solved or the frontier drains.
pub fn solve_game(shared: &SharedGameState, initial: GameState, config: SolverConfig) -> Solution {
    Search::new(shared, initial, config).run()
}
