use crate::core::Occupant::{Crate, Empty, Player};
use crate::core::{Direction, GameChangeType, GameState, GameUpdate, ReplayError, SharedGameState, StepError};

pub fn step(shared: &SharedGameState, game: &GameState, direction: Direction) -> GameUpdate {
    let dir = direction.offset();

    let next = game.player + dir;
    if !shared.in_bounds(&next) {
        return GameUpdate::Error(StepError::OutOfBounds);
    }
    if shared.is_wall(&next) {
        return GameUpdate::Error(StepError::IntoWall);
    }

    let pushing = game.occupants[&next] == Crate;
    let beyond = next + dir;
    if pushing && (shared.is_wall(&beyond) || game.occupants[&beyond] == Crate) {
        // is_wall covers out of bounds, so indexing beyond is safe past this point
        return GameUpdate::Error(StepError::CrateBlocked(next));
    }

    let mut new_occupants = game.occupants.clone();
    if pushing {
        new_occupants[&beyond] = Crate;
    }
    new_occupants[&game.player] = Empty;
    new_occupants[&next] = Player;

    GameUpdate::NextState(
        GameState {
            occupants: new_occupants,
            player: next,
        },
        if pushing {
            GameChangeType::PlayerAndBoxMove
        } else {
            GameChangeType::PlayerMove
        },
    )
}

/// Apply a `u`/`d`/`l`/`r` move string from `game`, stopping at the first bad move.
pub fn replay(shared: &SharedGameState, game: &GameState, moves: &str) -> Result<GameState, ReplayError> {
    let mut current = game.clone();
    for (index, found) in moves.chars().enumerate() {
        let direction = Direction::from_char(found)
            .ok_or(ReplayError::UnknownMove { index, found })?;
        current = match step(shared, &current, direction) {
            GameUpdate::NextState(next, _) => next,
            GameUpdate::Error(reason) => {
                return Err(ReplayError::Rejected { index, direction, reason });
            }
        };
    }
    Ok(current)
}
