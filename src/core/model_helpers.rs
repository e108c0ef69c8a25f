use crate::core::bounded_grid::BoundedGrid;
use crate::core::models::{Cell, Direction, GameState, Occupant, SharedGameState, Vec2};

impl Cell {
    pub fn is_walkable(&self) -> bool {
        matches!(self, Cell::Floor | Cell::Target)
    }
}

impl SharedGameState {
    pub fn new(grid: BoundedGrid<Cell>) -> Self {
        let targets = grid
            .iter()
            .filter(|(_, cell)| **cell == Cell::Target)
            .map(|(pos, _)| pos)
            .collect();
        SharedGameState { grid, targets }
    }

    pub fn height(&self) -> i32 {
        self.grid.size().height()
    }

    pub fn width(&self) -> i32 {
        self.grid.size().width()
    }

    pub fn in_bounds(&self, pos: &Vec2) -> bool {
        self.grid.contains(pos)
    }

    /// Anything outside the map counts as wall.
    pub fn is_wall(&self, pos: &Vec2) -> bool {
        !self.grid.get(pos).is_some_and(|cell| cell.is_walkable())
    }

    pub fn is_goal(&self, pos: &Vec2) -> bool {
        self.grid.get(pos) == Some(&Cell::Target)
    }

    /// Goal cells in row-major order.
    pub fn targets(&self) -> &[Vec2] {
        &self.targets
    }

    pub fn total_targets(&self) -> usize {
        self.targets.len()
    }

    pub fn count_boxes_on_goals(&self, game: &GameState) -> usize {
        self.targets
            .iter()
            .filter(|target| game.has_box_at(target))
            .count()
    }
}

impl GameState {
    /// Every goal holds a crate.
    pub fn is_won(&self, shared: &SharedGameState) -> bool {
        shared.targets().iter().all(|target| self.has_box_at(target))
    }

    pub fn iter_boxes(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.occupants
            .iter()
            .filter(|(_, occupant)| **occupant == Occupant::Crate)
            .map(|(pos, _)| pos)
    }

    pub fn has_box_at(&self, position: &Vec2) -> bool {
        self.occupants.get(position) == Some(&Occupant::Crate)
    }

    pub fn height(&self) -> i32 {
        self.occupants.size().height()
    }

    pub fn width(&self) -> i32 {
        self.occupants.size().width()
    }
}

impl Direction {
    /// Expansion order. Also the order ties are resolved in.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }

    pub fn from_char(c: char) -> Option<Direction> {
        match c {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }
}
