use serde::{Deserialize, Serialize};

use crate::{CityId, CivId, ProductionItem, Technology, UnitId};

/// All caller→sim commands. Fully serializable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    // Research
    StartResearch { civ: CivId, tech: Technology },

    // City commands
    SetProduction { city: CityId, item: ProductionItem },

    // Unit commands
    /// One orthogonal step: `dx, dy ∈ {-1, 0, 1}` with exactly one nonzero.
    MoveUnit { unit: UnitId, dx: i32, dy: i32 },
    /// An empty name falls back to "City <n>".
    FoundCity { unit: UnitId, name: String },

    // Diplomacy
    DeclareWar { a: CivId, b: CivId },
    ProposePeace { a: CivId, b: CivId },

    AdvanceTurn,
}
