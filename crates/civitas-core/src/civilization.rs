use serde::{Deserialize, Serialize};

use civitas_protocol::{CityId, CivId, Technology, UnitId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Civilization {
    pub id: CivId,
    pub name: String,
    pub leader: String,
    pub is_ai: bool,
    /// Founding order.
    pub cities: Vec<CityId>,
    /// Creation order.
    pub units: Vec<UnitId>,
    pub(crate) known_techs: [bool; Technology::COUNT],
    /// Completed technologies in completion order.
    pub discovered: Vec<Technology>,
    /// Not clamped; upkeep can drive it negative.
    pub gold: i64,
    pub science_per_turn: i64,
    pub gold_per_turn: i64,
    pub researching: Option<Technology>,
}

impl Civilization {
    pub fn new(
        id: CivId,
        name: impl Into<String>,
        leader: impl Into<String>,
        is_ai: bool,
        gold: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            leader: leader.into(),
            is_ai,
            cities: Vec::new(),
            units: Vec::new(),
            known_techs: [false; Technology::COUNT],
            discovered: Vec::new(),
            gold,
            science_per_turn: 0,
            gold_per_turn: 0,
            researching: None,
        }
    }

    pub fn knows(&self, tech: Technology) -> bool {
        self.known_techs[tech.index()]
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }
}
