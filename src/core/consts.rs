pub const PRUNE_DEADLOCKS: bool = true;

/// Returned by `solve` when the frontier drains without reaching a solved state.
pub const NO_SOLUTION: &str = "No solution found";
