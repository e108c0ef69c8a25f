use std::fmt;
use std::ops::Add;
use thiserror::Error;
use crate::core::bounded_grid::BoundedGrid;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Wall,
    Floor,
    Target,
}

/// What stands on a cell. Independent of the static [`Cell`] underneath it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Occupant {
    #[default]
    Empty,
    Crate,
    Player,
}

/// Grid position: `i` is the row, `j` the column.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

impl Vec2 {
    pub fn manhattan_distance(&self, other: &Vec2) -> u32 {
        self.i.abs_diff(other.i) + self.j.abs_diff(other.j)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Static half of the board. Never mutated once a search starts.
#[derive(Debug)]
pub struct SharedGameState {
    pub grid: BoundedGrid<Cell>,
    pub(crate) targets: Vec<Vec2>,
}

/// Dynamic half of the board: who stands where.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GameState {
    pub occupants: BoundedGrid<Occupant>,
    pub player: Vec2,
}

#[derive(Debug)]
pub enum GameUpdate {
    NextState(GameState, GameChangeType),
    Error(StepError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("cannot move out of bounds")]
    OutOfBounds,
    #[error("cannot walk into a wall")]
    IntoWall,
    #[error("cannot push crate at {0}")]
    CrateBlocked(Vec2),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("move {index}: '{found}' is not one of u, d, l, r")]
    UnknownMove { index: usize, found: char },
    #[error("move {index} ({direction:?}) rejected: {reason}")]
    Rejected {
        index: usize,
        direction: Direction,
        reason: StepError,
    },
}
