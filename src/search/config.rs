use serde::{Deserialize, Serialize};
use crate::core::{HeuristicKind, PRUNE_DEADLOCKS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub heuristic: HeuristicKind,
    /// Drop children that the corner check proves unsolvable.
    pub prune_deadlocks: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            heuristic: HeuristicKind::default(),
            prune_deadlocks: PRUNE_DEADLOCKS,
        }
    }
}
