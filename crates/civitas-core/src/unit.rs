use serde::{Deserialize, Serialize};

use civitas_protocol::{CivId, Position, UnitType};

use crate::rules::{unit_stats, MAX_HEALTH, MOVES_PER_TURN};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub unit_type: UnitType,
    pub owner: CivId,
    pub position: Position,
    pub health: u8,
    /// Always within `0..=MOVES_PER_TURN`.
    pub moves: u8,
    /// Static value for a future combat system; never resolved here.
    pub combat_strength: i32,
}

impl Unit {
    pub fn new(unit_type: UnitType, owner: CivId, position: Position) -> Self {
        Self {
            unit_type,
            owner,
            position,
            health: MAX_HEALTH,
            moves: MOVES_PER_TURN,
            combat_strength: unit_stats(unit_type).combat_strength,
        }
    }

    pub fn reset_moves(&mut self) {
        self.moves = MOVES_PER_TURN;
    }

    pub fn has_moves(&self) -> bool {
        self.moves > 0
    }

    pub fn spend_move(&mut self) {
        self.moves = self.moves.saturating_sub(1);
    }

    pub fn can_found_city(&self) -> bool {
        unit_stats(self.unit_type).can_found_city
    }
}
