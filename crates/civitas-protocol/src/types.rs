use serde::{Deserialize, Serialize};

/// Integer grid coordinates; `(0, 0)` is the top-left tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Plains,
    Forest,
    Mountains,
    Hills,
    Coast,
    Ocean,
}

impl Terrain {
    pub const ALL: [Terrain; 6] = [
        Terrain::Plains,
        Terrain::Forest,
        Terrain::Mountains,
        Terrain::Hills,
        Terrain::Coast,
        Terrain::Ocean,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    Settler,
    Warrior,
    Archer,
    Scout,
    Spearman,
    Horseman,
    Catapult,
}

impl UnitType {
    pub const ALL: [UnitType; 7] = [
        UnitType::Settler,
        UnitType::Warrior,
        UnitType::Archer,
        UnitType::Scout,
        UnitType::Spearman,
        UnitType::Horseman,
        UnitType::Catapult,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingType {
    Granary,
    Barracks,
    Library,
    Market,
    Walls,
    Temple,
}

impl BuildingType {
    pub const ALL: [BuildingType; 6] = [
        BuildingType::Granary,
        BuildingType::Barracks,
        BuildingType::Library,
        BuildingType::Market,
        BuildingType::Walls,
        BuildingType::Temple,
    ];
}

/// Node of the technology graph. Declaration order is a topological order
/// (every prerequisite is declared before its dependents).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technology {
    Agriculture,
    Pottery,
    Writing,
    Archery,
    Mining,
    BronzeWorking,
    TheWheel,
    Masonry,
    HorsebackRiding,
    Mathematics,
}

impl Technology {
    pub const COUNT: usize = 10;

    pub const ALL: [Technology; Self::COUNT] = [
        Technology::Agriculture,
        Technology::Pottery,
        Technology::Writing,
        Technology::Archery,
        Technology::Mining,
        Technology::BronzeWorking,
        Technology::TheWheel,
        Technology::Masonry,
        Technology::HorsebackRiding,
        Technology::Mathematics,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "type", rename_all = "snake_case")]
pub enum ProductionItem {
    Unit(UnitType),
    Building(BuildingType),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiplomaticStatus {
    #[default]
    Peace,
    War,
}

/// Per-civilization view of a technology node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechState {
    /// At least one prerequisite is not completed.
    Locked,
    Researchable,
    /// The civilization's active research.
    InProgress,
    Completed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    #[default]
    Setup,
    Running,
    Victory,
    Defeat,
}

impl SessionStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Victory | SessionStatus::Defeat)
    }
}
