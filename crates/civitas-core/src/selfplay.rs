//! Headless self-play harness.
//!
//! Drives the player civilization with a fixed autopilot so whole sessions
//! can be run and compared without a front end.

use serde::Serialize;
use tracing::{debug, info};

use civitas_protocol::{CivId, ProductionItem, SessionStatus, Snapshot, UnitId, UnitType};

use crate::{
    config::{ConfigError, SessionConfig},
    game::GameSession,
};

/// Steps a settler tries, in order, when its tile already holds a city.
const SETTLER_STEPS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Configuration for self-play simulation.
#[derive(Clone, Debug)]
pub struct SelfPlayConfig {
    /// Turns to play before stopping without a result.
    pub max_turns: u32,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self { max_turns: 200 }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SelfPlayResult {
    pub seed: u64,
    pub turns_played: u32,
    /// `Running` when the turn limit was hit first.
    pub status: SessionStatus,
    pub player_cities: usize,
    pub player_units: usize,
    /// Commands accepted by the session, turn advances included.
    pub commands: usize,
    pub snapshot: Snapshot,
}

/// Plays one standard game from `config` under the autopilot.
pub fn run_selfplay(
    config: SessionConfig,
    selfplay: &SelfPlayConfig,
) -> Result<SelfPlayResult, ConfigError> {
    let seed = config.seed;
    let mut session = GameSession::new_game(config)?;
    let Some(player) = session.human() else {
        return Err(ConfigError::Invalid("no player civilization".to_string()));
    };

    while !session.status().is_terminal() && session.turn() < selfplay.max_turns {
        autopilot(&mut session, player);
        if let Err(err) = session.advance_turn() {
            debug!(%err, "turn advance rejected");
            break;
        }
    }

    let result = SelfPlayResult {
        seed,
        turns_played: session.turn(),
        status: session.status(),
        player_cities: session.cities_of(player).len(),
        player_units: session.units_of(player).len(),
        commands: session.command_log().len(),
        snapshot: session.snapshot(),
    };
    info!(
        seed,
        turns = result.turns_played,
        status = ?result.status,
        cities = result.player_cities,
        "self-play finished"
    );
    Ok(result)
}

/// One round of player decisions: research, city orders, then settlers.
fn autopilot(session: &mut GameSession, player: CivId) {
    let researching = session
        .civilization(player)
        .and_then(|civ| civ.researching);
    if researching.is_none() {
        let cheapest = session
            .tech_options(player)
            .ok()
            .and_then(|options| options.into_iter().min_by_key(|option| option.cost));
        if let Some(option) = cheapest {
            if let Err(err) = session.start_research(player, option.tech) {
                debug!(%err, tech = ?option.tech, "autopilot research rejected");
            }
        }
    }

    let idle_cities: Vec<_> = session
        .cities_of(player)
        .into_iter()
        .filter(|(_, city)| city.queue.is_idle())
        .map(|(id, _)| id)
        .collect();
    for city in idle_cities {
        if let Err(err) = session.set_production(city, ProductionItem::Unit(UnitType::Settler)) {
            debug!(%err, %city, "autopilot order rejected");
        }
    }

    let settlers: Vec<_> = session
        .units_of(player)
        .into_iter()
        .filter(|(_, unit)| unit.can_found_city())
        .map(|(id, _)| id)
        .collect();
    for settler in settlers {
        settle(session, settler);
    }
}

/// Founds a city where the settler stands, or walks it off occupied tiles
/// for as long as it has moves.
fn settle(session: &mut GameSession, settler: UnitId) {
    loop {
        let Some(unit) = session.unit(settler) else {
            return;
        };
        if session.city_at(unit.position).is_none() {
            if let Err(err) = session.found_city(settler, "") {
                debug!(%err, unit = %settler, "autopilot founding rejected");
            }
            return;
        }
        if !unit.has_moves() {
            return;
        }

        let moved = SETTLER_STEPS
            .iter()
            .any(|&(dx, dy)| session.move_unit(settler, dx, dy).is_ok());
        if !moved {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autopilot_founds_its_starting_settler() {
        let config = SessionConfig {
            seed: 7,
            ..SessionConfig::default()
        };
        let selfplay = SelfPlayConfig { max_turns: 40 };
        let result = run_selfplay(config, &selfplay).expect("selfplay");

        assert!(result.player_cities >= 2);
        assert_ne!(result.status, SessionStatus::Defeat);
        if result.status == SessionStatus::Running {
            assert_eq!(result.turns_played, 40);
        }
        assert_eq!(result.snapshot.turn, result.turns_played);
    }

    #[test]
    fn same_seed_same_outcome() {
        let config = SessionConfig {
            seed: 99,
            ..SessionConfig::default()
        };
        let selfplay = SelfPlayConfig { max_turns: 30 };
        let a = run_selfplay(config.clone(), &selfplay).expect("selfplay");
        let b = run_selfplay(config, &selfplay).expect("selfplay");
        assert_eq!(a.snapshot, b.snapshot);
        assert_eq!(a.commands, b.commands);
    }
}
