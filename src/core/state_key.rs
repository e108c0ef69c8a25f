use crate::core::{GameState, Occupant};

/// Canonical fingerprint of a dynamic configuration, used for duplicate detection.
///
/// Packs the player's row-major cell index together with the cell indices of every
/// crate. Crates are collected by a row-major scan, so the list is always sorted and
/// two keys compare equal exactly when the player and crate layout match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey {
    player: u32,
    boxes: Box<[u32]>,
}

impl StateKey {
    pub fn from_game_state(game: &GameState) -> StateKey {
        let occupants = &game.occupants;
        let boxes = occupants
            .iter()
            .filter(|(_, occupant)| **occupant == Occupant::Crate)
            .map(|(pos, _)| occupants.index_of(&pos) as u32)
            .collect();
        StateKey {
            player: occupants.index_of(&game.player) as u32,
            boxes,
        }
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }
}

impl GameState {
    pub fn state_key(&self) -> StateKey {
        StateKey::from_game_state(self)
    }
}
