//! Puzzle descriptions as handed over by a driver: a static map grid and an items grid.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use crate::core::{BoundedGrid, Cell, GameState, Occupant, SharedGameState, Vec2, NO_SOLUTION};
use crate::search::{solve_game, SolverConfig, Solution};

/// Two same-sized grids describing one board.
///
/// `map` uses `#` wall, `.` goal, ` ` floor. `items` uses `@` pusher, `$` crate,
/// ` ` nothing. Unknown map characters read as floor and unknown item characters as
/// nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub width: usize,
    pub height: usize,
    pub map: Vec<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("{grid} has {found} rows, expected {expected}")]
    RowCount {
        grid: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{grid} row {row} has {found} cells, expected {expected}")]
    RowWidth {
        grid: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("no pusher ('@') on the board")]
    MissingPlayer,
    #[error("more than one pusher: {first} and {second}")]
    MultiplePlayers { first: Vec2, second: Vec2 },
    #[error("'{item}' at {position} stands on a wall")]
    OnWall { item: char, position: Vec2 },
    #[error("{boxes} crates but {targets} goals")]
    CountMismatch { boxes: usize, targets: usize },
}

impl Puzzle {
    pub fn from_grids(width: usize, height: usize, map: &[Vec<char>], items: &[Vec<char>]) -> Puzzle {
        Puzzle {
            width,
            height,
            map: map.iter().map(|row| row.iter().collect()).collect(),
            items: items.iter().map(|row| row.iter().collect()).collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Puzzle, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate and split into the static board and the initial dynamic state.
    pub fn build(&self) -> Result<(GameState, SharedGameState), PuzzleError> {
        self.check_dimensions("map", &self.map)?;
        self.check_dimensions("items", &self.items)?;

        let (height, width) = (self.height as i32, self.width as i32);
        let mut grid = BoundedGrid::new_with_size(height, width, Cell::Floor);
        let mut occupants = BoundedGrid::new_with_size(height, width, Occupant::Empty);
        let mut player: Option<Vec2> = None;

        for (i, (map_row, item_row)) in self.map.iter().zip(&self.items).enumerate() {
            for (j, (map_char, item_char)) in map_row.chars().zip(item_row.chars()).enumerate() {
                let position = Vec2 { i: i as i32, j: j as i32 };
                let cell = match map_char {
                    '#' => Cell::Wall,
                    '.' => Cell::Target,
                    _ => Cell::Floor,
                };
                grid[&position] = cell;

                let occupant = match item_char {
                    '@' => Occupant::Player,
                    '$' => Occupant::Crate,
                    _ => continue,
                };
                if cell == Cell::Wall {
                    return Err(PuzzleError::OnWall { item: item_char, position });
                }
                if occupant == Occupant::Player {
                    if let Some(first) = player {
                        return Err(PuzzleError::MultiplePlayers { first, second: position });
                    }
                    player = Some(position);
                }
                occupants[&position] = occupant;
            }
        }

        let player = player.ok_or(PuzzleError::MissingPlayer)?;
        let shared = SharedGameState::new(grid);
        let game = GameState { occupants, player };

        let boxes = game.iter_boxes().count();
        if boxes != shared.total_targets() {
            return Err(PuzzleError::CountMismatch {
                boxes,
                targets: shared.total_targets(),
            });
        }

        Ok((game, shared))
    }

    fn check_dimensions(&self, grid: &'static str, rows: &[String]) -> Result<(), PuzzleError> {
        if rows.len() != self.height {
            return Err(PuzzleError::RowCount {
                grid,
                expected: self.height,
                found: rows.len(),
            });
        }
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != self.width {
                return Err(PuzzleError::RowWidth {
                    grid,
                    row,
                    expected: self.width,
                    found,
                });
            }
        }
        Ok(())
    }
}

pub fn try_solve(
    width: usize,
    height: usize,
    static_map: &[Vec<char>],
    initial_items: &[Vec<char>],
    config: SolverConfig,
) -> Result<Solution, PuzzleError> {
    let (game, shared) = Puzzle::from_grids(width, height, static_map, initial_items).build()?;
    Ok(solve_game(&shared, game, config))
}

/// Solve a puzzle given as two character grids.
///
/// Returns the move string over `u`, `d`, `l`, `r` (empty when already solved), or
/// `"No solution found"` when no sequence of moves solves it. Malformed input is
/// logged and also reported as `"No solution found"`.
pub fn solve(width: usize, height: usize, static_map: &[Vec<char>], initial_items: &[Vec<char>]) -> String {
    match try_solve(width, height, static_map, initial_items, SolverConfig::default()) {
        Ok(solution) => solution.to_string(),
        Err(err) => {
            warn!(%err, "rejecting malformed puzzle");
            NO_SOLUTION.to_string()
        }
    }
}
