use serde::{Deserialize, Serialize};

use crate::{CivId, SessionStatus, Technology};

/// Minimal displayable record of a session: enough to redraw the status
/// screen, not enough to resume play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub turn: u32,
    #[serde(default)]
    pub status: SessionStatus,
    pub civilizations: Vec<CivSnapshot>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivSnapshot {
    pub id: CivId,
    pub name: String,
    pub leader: String,
    pub gold: i64,
    /// Discovered technologies in completion order.
    #[serde(default)]
    pub techs: Vec<Technology>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
