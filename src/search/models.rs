use std::fmt;
use serde::Serialize;
use crate::core::{GameState, NO_SOLUTION};

#[derive(Clone, Debug)]
pub struct SearchNode {
    pub game: GameState,
    /// Moves from the initial state, one `u`/`d`/`l`/`r` per step.
    pub path: String,
    /// g: moves taken so far. Always equal to `path.len()`.
    pub cost: u32,
    /// h: estimated moves remaining.
    pub heuristic: u32,
}

impl SearchNode {
    pub fn priority(&self) -> u32 {
        self.cost + self.heuristic
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    Solved(String),
    NoSolution,
}

impl Solution {
    pub fn is_solved(&self) -> bool {
        matches!(self, Solution::Solved(_))
    }

    pub fn moves(&self) -> Option<&str> {
        match self {
            Solution::Solved(path) => Some(path),
            Solution::NoSolution => None,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Solved(path) => f.write_str(path),
            Solution::NoSolution => f.write_str(NO_SOLUTION),
        }
    }
}

/// What a single call to [`crate::search::Search::step`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchStep {
    /// A new state was expanded and its children queued.
    Expanded,
    /// The popped state was already expanded and has been dropped.
    Duplicate,
    Finished(Solution),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States whose children were generated. Equals the visited set size.
    pub expanded: usize,
    /// Popped states dropped because their key was already visited.
    pub duplicates: usize,
    /// Children pushed onto the frontier.
    pub generated: usize,
    pub rejected_moves: usize,
    pub pruned_deadlocks: usize,
    pub max_frontier: usize,
}
