use serde::{Deserialize, Serialize};
use crate::core::{GameState, SharedGameState};

/// How the remaining push distance is estimated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    /// Sum over crates of the distance to the nearest goal, covered or not. Admissible.
    #[default]
    NearestTarget,
    /// Each crate, in row-major order, claims the nearest goal not yet claimed.
    /// Deterministic, but can overestimate, so it is not guaranteed admissible.
    GreedyAssignment,
}

pub fn estimate_remaining(shared: &SharedGameState, game: &GameState, kind: HeuristicKind) -> u32 {
    match kind {
        HeuristicKind::NearestTarget => nearest_target_sum(shared, game),
        HeuristicKind::GreedyAssignment => greedy_assignment_sum(shared, game),
    }
}

fn nearest_target_sum(shared: &SharedGameState, game: &GameState) -> u32 {
    game.iter_boxes()
        .map(|game_box| {
            shared
                .targets()
                .iter()
                .map(|target| game_box.manhattan_distance(target))
                .min()
                .unwrap_or(0)
        })
        .sum()
}

fn greedy_assignment_sum(shared: &SharedGameState, game: &GameState) -> u32 {
    let targets = shared.targets();
    let mut assigned = vec![false; targets.len()];
    let mut total = 0;

    for game_box in game.iter_boxes() {
        let nearest = targets
            .iter()
            .enumerate()
            .filter(|(index, _)| !assigned[*index])
            .map(|(index, target)| (game_box.manhattan_distance(target), index))
            .min();
        if let Some((distance, index)) = nearest {
            assigned[index] = true;
            total += distance;
        }
    }

    total
}
