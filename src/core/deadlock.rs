use crate::core::{GameState, SharedGameState};
use crate::core::models::Vec2;

#[derive(Eq, PartialEq, Debug)]
pub enum WinnableState {
    WinMaybePossible,
    WinImpossible,
}

const VERTICAL_NEIGHBORS: [Vec2; 2] = [Vec2 { i: -1, j: 0 }, Vec2 { i: 1, j: 0 }];
const HORIZONTAL_NEIGHBORS: [Vec2; 2] = [Vec2 { i: 0, j: -1 }, Vec2 { i: 0, j: 1 }];

pub fn is_winnable(
    shared: &SharedGameState,
    game: &GameState) -> WinnableState {

    let mut total_boxes = 0;
    let mut total_trapped_boxes = 0;
    for game_box in game.iter_boxes() {
        total_boxes += 1;
        if is_box_trapped(shared, game_box) {
            total_trapped_boxes += 1;
        }
    }

    let total_free_boxes = total_boxes - total_trapped_boxes;
    let total_targets = shared.total_targets();

    if total_free_boxes >= total_targets {
        WinnableState::WinMaybePossible
    } else {
        WinnableState::WinImpossible
    }
}

/// No move sequence from a dead state reaches a solved state.
pub fn is_dead(shared: &SharedGameState, game: &GameState) -> bool {
    is_winnable(shared, game) == WinnableState::WinImpossible
}

/// a box is trapped if the player can never move it, and it is not on a target
pub fn is_box_trapped(shared: &SharedGameState, game_box: Vec2) -> bool {
    if shared.is_goal(&game_box) {
        return false;
    }

    // a wall on each axis pins the box into a corner; off-map counts as wall
    let blocked_vertically = VERTICAL_NEIGHBORS
        .iter()
        .any(|&dir| shared.is_wall(&(game_box + dir)));
    let blocked_horizontally = HORIZONTAL_NEIGHBORS
        .iter()
        .any(|&dir| shared.is_wall(&(game_box + dir)));

    blocked_vertically && blocked_horizontally
}
