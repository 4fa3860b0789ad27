use std::fmt;

use civitas_protocol::{
    BuildingType, CityId, CivId, Position, SessionStatus, Technology, UnitId, UnitType,
};

/// Rejection of a command. No variant leaves partial state behind: every
/// command validates fully before it mutates anything.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cannot research {tech:?}: {reason}")]
    InvalidTechnology {
        tech: Technology,
        reason: ResearchRejection,
    },

    #[error("invalid production order: {reason}")]
    InvalidOrder { reason: OrderRejection },

    #[error("{0:?} cannot found a city")]
    NotASettler(UnitType),

    #[error("move from ({}, {}) to ({}, {}) leaves the map", .from.x, .from.y, .to.x, .to.y)]
    OutOfBounds { from: Position, to: Position },

    #[error("unit has no moves remaining")]
    NoMovesRemaining,

    /// Move vectors are single orthogonal steps.
    #[error("invalid move direction ({dx}, {dy})")]
    InvalidDirection { dx: i32, dy: i32 },

    #[error("unknown {0}")]
    UnknownEntity(EntityRef),

    #[error("every civilization id is taken")]
    TooManyCivilizations,

    #[error("no player civilization registered")]
    NoPlayerCivilization,

    #[error("session is {actual:?}, expected {expected:?}")]
    WrongPhase {
        expected: SessionStatus,
        actual: SessionStatus,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResearchRejection {
    AlreadyResearched,
    PrerequisitesNotMet,
}

impl fmt::Display for ResearchRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResearchRejection::AlreadyResearched => f.write_str("already researched"),
            ResearchRejection::PrerequisitesNotMet => f.write_str("prerequisites not met"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderRejection {
    MissingTechnology(Technology),
    BuildingAlreadyBuilt(BuildingType),
}

impl fmt::Display for OrderRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderRejection::MissingTechnology(tech) => write!(f, "requires {tech:?}"),
            OrderRejection::BuildingAlreadyBuilt(building) => {
                write!(f, "{building:?} already built")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityRef {
    Civilization(CivId),
    City(CityId),
    Unit(UnitId),
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Civilization(id) => write!(f, "civilization {id}"),
            EntityRef::City(id) => write!(f, "city {id}"),
            EntityRef::Unit(id) => write!(f, "unit {id}"),
        }
    }
}
