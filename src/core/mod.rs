mod model_helpers;
mod models;
mod update;
mod bounded_grid;
mod consts;
mod bounds;
mod state_key;
mod deadlock;
mod heuristics;

pub use models::{Cell, Occupant, Vec2, Direction, SharedGameState, GameState, GameUpdate, GameChangeType, StepError, ReplayError};
pub use consts::*;
pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use state_key::StateKey;
pub use deadlock::{is_box_trapped, is_dead, is_winnable, WinnableState};
pub use heuristics::{estimate_remaining, HeuristicKind};
pub use update::{replay, step};
