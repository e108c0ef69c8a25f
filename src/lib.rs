//! Sokoban solver: best-first search over pusher moves with corner-deadlock pruning.
//! Tiles: '#' wall, '@' player, '$' box, '.' target, '*' box on target, '+' player on target, ' ' floor.

pub mod console_interface;
pub mod core;
pub mod puzzle;
pub mod search;
#[cfg(test)]
mod test;

pub use puzzle::{solve, try_solve, Puzzle, PuzzleError};
pub use search::{solve_game, Solution, SolverConfig};
