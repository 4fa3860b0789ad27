use serde::{Deserialize, Serialize};

use crate::{
    BuildingType, CityId, CivId, Position, ProductionItem, SessionStatus, Technology, Terrain,
    UnitId, UnitType,
};

/// All sim→caller events. Fully serializable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    // Game flow
    TurnStarted {
        turn: u32,
    },
    TurnEnded {
        turn: u32,
    },
    GameEnded {
        turn: u32,
        status: SessionStatus,
    },

    // Economy
    TreasuryChanged {
        civ: CivId,
        delta: i64,
        gold: i64,
    },

    // Research
    ResearchStarted {
        civ: CivId,
        tech: Technology,
    },
    TechResearched {
        civ: CivId,
        tech: Technology,
    },

    // Cities
    CityFounded {
        city: CityId,
        civ: CivId,
        name: String,
        pos: Position,
        terrain: Terrain,
    },
    ProductionSet {
        city: CityId,
        item: ProductionItem,
    },
    BuildingCompleted {
        city: CityId,
        building: BuildingType,
    },

    // Units
    UnitCreated {
        unit: UnitId,
        civ: CivId,
        unit_type: UnitType,
        pos: Position,
    },
    UnitMoved {
        unit: UnitId,
        from: Position,
        to: Position,
        moves_left: u8,
    },
    /// A settler was used up founding a city.
    UnitConsumed {
        unit: UnitId,
    },

    // Diplomacy
    WarDeclared {
        aggressor: CivId,
        target: CivId,
    },
    PeaceMade {
        a: CivId,
        b: CivId,
    },
}
