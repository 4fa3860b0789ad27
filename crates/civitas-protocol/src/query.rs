use serde::{Deserialize, Serialize};

use crate::{CivId, DiplomaticStatus, ProductionItem, Technology};

/// A technology the civilization may start researching now.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechOption {
    pub tech: Technology,
    pub cost: i64,
}

/// One entry of a city's build menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionOption {
    pub item: ProductionItem,
    pub cost: i64,
    /// Whether `SetProduction` with this item would be accepted.
    pub enabled: bool,
}

/// One unordered pair of the diplomacy table (`a < b`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiplomacyEntry {
    pub a: CivId,
    pub b: CivId,
    pub status: DiplomaticStatus,
}
