use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use civitas_protocol::{
    BuildingType, CityId, CivId, CivSnapshot, Command, DiplomacyEntry, DiplomaticStatus, Event,
    Position, ProductionItem, ProductionOption, SessionStatus, Snapshot, TechOption, TechState,
    Technology, Terrain, UnitId, UnitType,
};
use rand::Rng;

use crate::{
    ai::{AiStrategy, RandomWalk},
    city::City,
    civilization::Civilization,
    config::{ConfigError, SessionConfig},
    error::{EntityRef, GameError},
    map::GameMap,
    production::validate_order,
    registry::World,
    rng::GameRng,
    rules::{production_cost, TechGraph},
    unit::Unit,
};

/// A command accepted by a session, with the turn it was issued on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedCommand {
    pub turn: u32,
    pub command: Command,
}

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("recorded command {index} rejected on replay: {source}")]
    Rejected {
        index: usize,
        #[source]
        source: GameError,
    },
}

/// One game: the civilization registry plus the turn engine driving it.
///
/// A session starts in `Setup`, where the scenario API may shape it, and
/// moves to `Running` on [`GameSession::start`]. Commands are only accepted
/// while `Running`; `Victory` and `Defeat` are terminal.
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    status: SessionStatus,
    turn: u32,
    world: World,
    rng: GameRng,
    strategy: Box<dyn AiStrategy>,
    /// Set by `start`; the first civilization not controlled by the AI.
    human: Option<CivId>,
    command_log: Vec<RecordedCommand>,
}

impl GameSession {
    /// A session in `Setup` with no civilizations on an all-plains map.
    pub fn empty(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let map = GameMap::filled(config.width, config.height, Terrain::Plains);
        let rng = GameRng::seed_from_u64(config.seed);
        Ok(Self::from_parts(config, map, rng))
    }

    /// The standard opening: a generated map, the player's capital and
    /// settler in the centre, and one capital plus warrior per rival.
    pub fn new_game(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = GameRng::seed_from_u64(config.seed);
        let map = GameMap::generate(config.width, config.height, &mut rng);
        let mut session = Self::from_parts(config, map, rng);

        session
            .setup_standard_game()
            .map_err(|err| ConfigError::Invalid(format!("standard setup failed: {err}")))?;
        Ok(session)
    }

    fn from_parts(config: SessionConfig, map: GameMap, rng: GameRng) -> Self {
        Self {
            config,
            status: SessionStatus::Setup,
            turn: 0,
            world: World::new(map),
            rng,
            strategy: Box::new(RandomWalk),
            human: None,
            command_log: Vec::new(),
        }
    }

    fn setup_standard_game(&mut self) -> Result<(), GameError> {
        let player = self.config.player.clone();
        let human = self.add_civilization(&player.name, &player.leader, false)?;
        let center = self.world.map().center();
        self.spawn_city(human, player.capital_name(), center)?;
        self.spawn_unit(human, UnitType::Settler, center)?;
        self.grant_technology(human, Technology::Agriculture)?;

        for rival in self.config.rivals.clone() {
            let civ = self.add_civilization(&rival.name, &rival.leader, true)?;
            let pos = Position::new(
                self.rng.gen_range(0..self.config.width) as i32,
                self.rng.gen_range(0..self.config.height) as i32,
            );
            self.spawn_city(civ, rival.capital_name(), pos)?;
            self.spawn_unit(civ, UnitType::Warrior, pos)?;
        }

        self.start()
    }

    /// Replaces the movement policy of non-player civilizations.
    pub fn with_strategy(mut self, strategy: impl AiStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Rebuilds a standard game from `config` and re-applies `log` in order.
    pub fn replay(config: SessionConfig, log: &[RecordedCommand]) -> Result<Self, ReplayError> {
        let mut session = Self::new_game(config)?;
        for (index, recorded) in log.iter().enumerate() {
            session
                .apply_command(recorded.command.clone())
                .map_err(|source| ReplayError::Rejected { index, source })?;
        }
        Ok(session)
    }

    // =========================================================================
    // Setup
    // =========================================================================

    fn require_phase(&self, expected: SessionStatus) -> Result<(), GameError> {
        if self.status == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.status,
            })
        }
    }

    pub fn add_civilization(
        &mut self,
        name: &str,
        leader: &str,
        is_ai: bool,
    ) -> Result<CivId, GameError> {
        self.require_phase(SessionStatus::Setup)?;
        self.world
            .add_civilization(name, leader, is_ai, self.config.starting_gold)
            .ok_or(GameError::TooManyCivilizations)
    }

    pub fn spawn_city(
        &mut self,
        owner: CivId,
        name: impl Into<String>,
        pos: Position,
    ) -> Result<CityId, GameError> {
        self.require_phase(SessionStatus::Setup)?;
        self.world.spawn_city(owner, name, pos)
    }

    pub fn spawn_unit(
        &mut self,
        owner: CivId,
        unit_type: UnitType,
        pos: Position,
    ) -> Result<UnitId, GameError> {
        self.require_phase(SessionStatus::Setup)?;
        self.world.spawn_unit(owner, unit_type, pos)
    }

    pub fn grant_technology(&mut self, civ: CivId, tech: Technology) -> Result<(), GameError> {
        self.require_phase(SessionStatus::Setup)?;
        self.world.require_civ_mut(civ)?.grant_technology(tech);
        Ok(())
    }

    pub fn set_terrain(&mut self, pos: Position, terrain: Terrain) -> Result<(), GameError> {
        self.require_phase(SessionStatus::Setup)?;
        if self.world.map_mut().set_terrain(pos, terrain) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds { from: pos, to: pos })
        }
    }

    /// Leaves `Setup`. The first non-AI civilization becomes the player.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.require_phase(SessionStatus::Setup)?;
        let human = self
            .world
            .civilizations()
            .iter()
            .find(|civ| !civ.is_ai)
            .map(|civ| civ.id)
            .ok_or(GameError::NoPlayerCivilization)?;

        self.human = Some(human);
        self.status = SessionStatus::Running;
        info!(
            civs = self.world.civilizations().len(),
            width = self.world.map().width(),
            height = self.world.map().height(),
            %human,
            "session started"
        );
        Ok(())
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Applies `command` and records it in the command log on success.
    pub fn apply_command(&mut self, command: Command) -> Result<Vec<Event>, GameError> {
        let turn = self.turn;
        match self.try_apply_command(command.clone()) {
            Ok(events) => {
                self.command_log.push(RecordedCommand { turn, command });
                Ok(events)
            }
            Err(err) => {
                debug!(?command, %err, "command rejected");
                Err(err)
            }
        }
    }

    /// Applies `command` without recording it.
    pub fn try_apply_command(&mut self, command: Command) -> Result<Vec<Event>, GameError> {
        self.require_phase(SessionStatus::Running)?;
        match command {
            Command::StartResearch { civ, tech } => self.exec_start_research(civ, tech),
            Command::SetProduction { city, item } => self.exec_set_production(city, item),
            Command::MoveUnit { unit, dx, dy } => self.exec_move_unit(unit, dx, dy),
            Command::FoundCity { unit, name } => self.exec_found_city(unit, &name),
            Command::DeclareWar { a, b } => self.exec_set_diplomacy(a, b, DiplomaticStatus::War),
            Command::ProposePeace { a, b } => {
                self.exec_set_diplomacy(a, b, DiplomaticStatus::Peace)
            }
            Command::AdvanceTurn => Ok(self.exec_advance_turn()),
        }
    }

    pub fn start_research(&mut self, civ: CivId, tech: Technology) -> Result<Vec<Event>, GameError> {
        self.apply_command(Command::StartResearch { civ, tech })
    }

    pub fn set_production(
        &mut self,
        city: CityId,
        item: ProductionItem,
    ) -> Result<Vec<Event>, GameError> {
        self.apply_command(Command::SetProduction { city, item })
    }

    pub fn move_unit(&mut self, unit: UnitId, dx: i32, dy: i32) -> Result<Vec<Event>, GameError> {
        self.apply_command(Command::MoveUnit { unit, dx, dy })
    }

    pub fn found_city(
        &mut self,
        unit: UnitId,
        name: impl Into<String>,
    ) -> Result<Vec<Event>, GameError> {
        self.apply_command(Command::FoundCity {
            unit,
            name: name.into(),
        })
    }

    pub fn declare_war(&mut self, a: CivId, b: CivId) -> Result<Vec<Event>, GameError> {
        self.apply_command(Command::DeclareWar { a, b })
    }

    pub fn propose_peace(&mut self, a: CivId, b: CivId) -> Result<Vec<Event>, GameError> {
        self.apply_command(Command::ProposePeace { a, b })
    }

    pub fn advance_turn(&mut self) -> Result<Vec<Event>, GameError> {
        self.apply_command(Command::AdvanceTurn)
    }

    fn exec_start_research(&mut self, civ: CivId, tech: Technology) -> Result<Vec<Event>, GameError> {
        self.world.start_research(civ, tech)?;
        debug!(%civ, ?tech, "research started");
        Ok(vec![Event::ResearchStarted { civ, tech }])
    }

    fn exec_set_production(
        &mut self,
        city: CityId,
        item: ProductionItem,
    ) -> Result<Vec<Event>, GameError> {
        let replaced = self.world.set_production(city, item)?;
        debug!(%city, ?item, ?replaced, "production set");
        Ok(vec![Event::ProductionSet { city, item }])
    }

    fn exec_move_unit(&mut self, unit: UnitId, dx: i32, dy: i32) -> Result<Vec<Event>, GameError> {
        let outcome = self.world.move_unit(unit, dx, dy)?;
        Ok(vec![Event::UnitMoved {
            unit,
            from: outcome.from,
            to: outcome.to,
            moves_left: outcome.moves_left,
        }])
    }

    fn exec_found_city(&mut self, unit: UnitId, name: &str) -> Result<Vec<Event>, GameError> {
        let founded = self.world.found_city(unit, name)?;
        let city = self.world.require_city(founded.city)?;
        info!(city = %city.name, civ = %city.owner, x = city.position.x, y = city.position.y, "city founded");

        Ok(vec![
            Event::UnitConsumed {
                unit: founded.consumed,
            },
            Event::CityFounded {
                city: founded.city,
                civ: city.owner,
                name: city.name.clone(),
                pos: city.position,
                terrain: city.terrain,
            },
        ])
    }

    fn exec_set_diplomacy(
        &mut self,
        a: CivId,
        b: CivId,
        status: DiplomaticStatus,
    ) -> Result<Vec<Event>, GameError> {
        if !self.world.set_diplomacy(a, b, status)? {
            return Ok(Vec::new());
        }
        info!(%a, %b, ?status, "diplomatic status changed");
        Ok(vec![match status {
            DiplomaticStatus::War => Event::WarDeclared {
                aggressor: a,
                target: b,
            },
            DiplomaticStatus::Peace => Event::PeaceMade { a, b },
        }])
    }

    // =========================================================================
    // Turn engine
    // =========================================================================

    /// One full round. Order matters: each step reads what the previous one
    /// wrote.
    fn exec_advance_turn(&mut self) -> Vec<Event> {
        self.turn = self.turn.saturating_add(1);
        let turn = self.turn;
        let mut events = vec![Event::TurnStarted { turn }];
        info!(turn, "turn started");

        if let Some(human) = self.human {
            self.player_round(human, &mut events);
        }
        self.ai_round(&mut events);

        events.push(Event::TurnEnded { turn });
        self.evaluate_outcome(&mut events);
        events
    }

    fn player_round(&mut self, civ: CivId, events: &mut Vec<Event>) {
        let city_ids = self
            .world
            .civ(civ)
            .map(|c| c.cities.clone())
            .unwrap_or_default();

        for city_id in city_ids {
            let Some(city) = self.world.city_mut(city_id) else {
                continue;
            };
            city.apply_tile_work();
            let pos = city.position;
            match city.advance_production() {
                Some(ProductionItem::Unit(unit_type)) => {
                    match self.world.spawn_unit(civ, unit_type, pos) {
                        Ok(unit) => {
                            info!(city = %city_id, ?unit_type, "unit produced");
                            events.push(Event::UnitCreated {
                                unit,
                                civ,
                                unit_type,
                                pos,
                            });
                        }
                        Err(err) => debug!(city = %city_id, %err, "produced unit not placed"),
                    }
                }
                Some(ProductionItem::Building(building)) => {
                    info!(city = %city_id, ?building, "building completed");
                    events.push(Event::BuildingCompleted {
                        city: city_id,
                        building,
                    });
                }
                None => {}
            }
        }

        self.world.calculate_yields(civ);

        let unit_ids = {
            let Some(state) = self.world.civ_mut(civ) else {
                return;
            };

            let delta = state.gold_per_turn;
            state.gold = state.gold.saturating_add(delta);
            if delta != 0 {
                events.push(Event::TreasuryChanged {
                    civ,
                    delta,
                    gold: state.gold,
                });
            }

            if let Some(tech) = state.complete_research_if_ready() {
                info!(%civ, ?tech, "technology researched");
                events.push(Event::TechResearched { civ, tech });
            }

            state.units.clone()
        };

        for unit_id in unit_ids {
            if let Some(unit) = self.world.unit_mut(unit_id) {
                unit.reset_moves();
            }
        }
    }

    /// Non-player civilizations work their cities and wander. They never
    /// build, research or have their moves restored.
    fn ai_round(&mut self, events: &mut Vec<Event>) {
        let ai_civs: Vec<CivId> = self
            .world
            .civilizations()
            .iter()
            .filter(|civ| Some(civ.id) != self.human)
            .map(|civ| civ.id)
            .collect();

        for civ in ai_civs {
            let (city_ids, unit_ids) = match self.world.civ(civ) {
                Some(state) => (state.cities.clone(), state.units.clone()),
                None => continue,
            };

            for city_id in city_ids {
                if let Some(city) = self.world.city_mut(city_id) {
                    city.apply_tile_work();
                }
            }

            for unit_id in unit_ids {
                let Some(unit) = self.world.unit(unit_id) else {
                    continue;
                };
                if !unit.has_moves() {
                    continue;
                }
                let (dx, dy) = self.strategy.choose_step(unit, &mut self.rng);
                let from = unit.position;
                let to = self.world.map().clamp(from.offset(dx, dy));

                let Some(unit) = self.world.unit_mut(unit_id) else {
                    continue;
                };
                unit.position = to;
                unit.spend_move();
                debug!(%civ, unit = %unit_id, ?from, ?to, "ai unit moved");
                events.push(Event::UnitMoved {
                    unit: unit_id,
                    from,
                    to,
                    moves_left: unit.moves,
                });
            }
        }
    }

    fn evaluate_outcome(&mut self, events: &mut Vec<Event>) {
        let cities = self
            .human
            .and_then(|id| self.world.civ(id))
            .map_or(0, Civilization::city_count);

        let outcome = if cities >= self.config.victory_city_count {
            SessionStatus::Victory
        } else if cities == 0 {
            SessionStatus::Defeat
        } else {
            return;
        };

        self.status = outcome;
        info!(turn = self.turn, cities, status = ?outcome, "game over");
        events.push(Event::GameEnded {
            turn: self.turn,
            status: outcome,
        });
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn map(&self) -> &GameMap {
        self.world.map()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn command_log(&self) -> &[RecordedCommand] {
        &self.command_log
    }

    pub fn civilizations(&self) -> &[Civilization] {
        self.world.civilizations()
    }

    pub fn civilization(&self, id: CivId) -> Option<&Civilization> {
        self.world.civ(id)
    }

    /// The player civilization; `None` until the session has started.
    pub fn human(&self) -> Option<CivId> {
        self.human
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.world.city(id)
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.world.unit(id)
    }

    pub fn cities_of(&self, civ: CivId) -> Vec<(CityId, &City)> {
        self.world.cities_of(civ).collect()
    }

    pub fn units_of(&self, civ: CivId) -> Vec<(UnitId, &Unit)> {
        self.world.units_of(civ).collect()
    }

    pub fn city_at(&self, pos: Position) -> Option<CityId> {
        self.world.city_at(pos)
    }

    pub fn tech_state(&self, civ: CivId, tech: Technology) -> Result<TechState, GameError> {
        Ok(self.world.require_civ(civ)?.tech_state(tech))
    }

    pub fn is_researchable(&self, civ: CivId, tech: Technology) -> Result<bool, GameError> {
        Ok(self.world.require_civ(civ)?.is_researchable(tech))
    }

    /// Technologies `civ` could start now, in declaration order.
    pub fn tech_options(&self, civ: CivId) -> Result<Vec<TechOption>, GameError> {
        Ok(self
            .world
            .require_civ(civ)?
            .researchable_techs()
            .map(|tech| TechOption {
                tech,
                cost: TechGraph::cost_of(tech),
            })
            .collect())
    }

    /// The full build menu for `city`: every unit, then every building, each
    /// flagged with whether an order for it would be accepted now.
    pub fn production_options(&self, city_id: CityId) -> Result<Vec<ProductionOption>, GameError> {
        let city = self.world.require_city(city_id)?;
        let owner = self
            .world
            .civ(city.owner)
            .ok_or(GameError::UnknownEntity(EntityRef::Civilization(city.owner)))?;

        let units = UnitType::ALL.into_iter().map(ProductionItem::Unit);
        let buildings = BuildingType::ALL.into_iter().map(ProductionItem::Building);

        Ok(units
            .chain(buildings)
            .map(|item| ProductionOption {
                item,
                cost: production_cost(item),
                enabled: validate_order(item, city, |tech| owner.knows(tech)).is_ok(),
            })
            .collect())
    }

    pub fn diplomatic_status(&self, a: CivId, b: CivId) -> DiplomaticStatus {
        self.world.diplomacy().status(a, b)
    }

    pub fn diplomacy_table(&self) -> Vec<DiplomacyEntry> {
        self.world.diplomacy().table()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            turn: self.turn,
            status: self.status,
            civilizations: self
                .world
                .civilizations()
                .iter()
                .map(|civ| CivSnapshot {
                    id: civ.id,
                    name: civ.name.clone(),
                    leader: civ.leader.clone(),
                    gold: civ.gold,
                    techs: civ.discovered.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ai::HoldPosition;

    use super::*;

    fn scenario() -> (GameSession, CivId) {
        let mut session = GameSession::empty(SessionConfig::default())
            .expect("config")
            .with_strategy(HoldPosition);
        let rome = session
            .add_civilization("Rome", "Caesar", false)
            .expect("civ");
        (session, rome)
    }

    #[test]
    fn commands_are_rejected_during_setup() {
        let (mut session, rome) = scenario();
        assert_eq!(
            session.start_research(rome, Technology::Mining),
            Err(GameError::WrongPhase {
                expected: SessionStatus::Running,
                actual: SessionStatus::Setup,
            })
        );
        assert!(session.command_log().is_empty());
    }

    #[test]
    fn setup_api_is_closed_after_start() {
        let (mut session, rome) = scenario();
        session
            .spawn_city(rome, "Roma", Position::new(2, 2))
            .expect("city");
        session.start().expect("start");
        assert_eq!(
            session.spawn_unit(rome, UnitType::Settler, Position::new(0, 0)),
            Err(GameError::WrongPhase {
                expected: SessionStatus::Setup,
                actual: SessionStatus::Running,
            })
        );
    }

    #[test]
    fn start_requires_a_player_civilization() {
        let mut session = GameSession::empty(SessionConfig::default()).expect("config");
        session
            .add_civilization("Egypt", "Ramesses", true)
            .expect("civ");
        assert_eq!(session.start(), Err(GameError::NoPlayerCivilization));
        assert_eq!(session.status(), SessionStatus::Setup);
    }

    #[test]
    fn round_works_cities_then_produces_then_pays() {
        let (mut session, rome) = scenario();
        session
            .set_terrain(Position::new(1, 1), Terrain::Hills)
            .expect("terrain");
        let city = session
            .spawn_city(rome, "Hillfort", Position::new(1, 1))
            .expect("city");
        session.start().expect("start");
        session
            .set_production(city, ProductionItem::Building(BuildingType::Granary))
            .expect("order");

        let events = session.advance_turn().expect("turn");
        assert_eq!(events.first(), Some(&Event::TurnStarted { turn: 1 }));
        assert!(events.contains(&Event::TreasuryChanged {
            civ: rome,
            delta: 1,
            gold: 101,
        }));

        let stockpile = session.city(city).expect("city").stockpile();
        assert_eq!((stockpile.production, stockpile.gold), (3, 1));
        assert_eq!(session.city(city).expect("city").queue.progress(), 3);
    }

    #[test]
    fn treasury_saturates_instead_of_overflowing() {
        let (mut session, rome) = scenario();
        session
            .set_terrain(Position::new(3, 3), Terrain::Coast)
            .expect("terrain");
        let city = session
            .spawn_city(rome, "Portus", Position::new(3, 3))
            .expect("city");
        session.start().expect("start");

        session.world.city_mut(city).expect("city").gold = i64::MAX - 1;
        session.world.civ_mut(rome).expect("civ").gold = i64::MAX - 10;
        session.advance_turn().expect("turn");

        let civ = session.civilization(rome).expect("civ");
        assert_eq!(session.city(city).expect("city").gold, i64::MAX);
        assert_eq!(civ.gold_per_turn, i64::MAX);
        assert_eq!(civ.gold, i64::MAX);
    }

    #[test]
    fn research_completes_from_this_rounds_science() {
        let (mut session, rome) = scenario();
        let city = session
            .spawn_city(rome, "Roma", Position::new(0, 0))
            .expect("city");
        session.start().expect("start");
        session.start_research(rome, Technology::Agriculture).expect("research");

        // Science only comes from libraries; give the city a large stockpile.
        session.world.city_mut(city).expect("city").science = 20;
        let events = session.advance_turn().expect("turn");
        assert!(events.contains(&Event::TechResearched {
            civ: rome,
            tech: Technology::Agriculture,
        }));
        assert_eq!(
            session.tech_state(rome, Technology::Agriculture),
            Ok(TechState::Completed)
        );
    }

    #[test]
    fn ai_units_spend_moves_and_are_never_restored() {
        let (mut session, rome) = scenario();
        let egypt = session
            .add_civilization("Egypt", "Ramesses", true)
            .expect("civ");
        session
            .spawn_city(rome, "Roma", Position::new(0, 0))
            .expect("city");
        let warrior = session
            .spawn_unit(egypt, UnitType::Warrior, Position::new(5, 5))
            .expect("unit");
        session.start().expect("start");

        for expected in [1, 0, 0] {
            session.advance_turn().expect("turn");
            let unit = session.unit(warrior).expect("unit");
            assert_eq!(unit.moves, expected);
            assert_eq!(unit.position, Position::new(5, 5));
        }
    }

    #[test]
    fn diplomacy_commands_emit_events_only_on_change() {
        let (mut session, rome) = scenario();
        let egypt = session
            .add_civilization("Egypt", "Ramesses", true)
            .expect("civ");
        session
            .spawn_city(rome, "Roma", Position::new(0, 0))
            .expect("city");
        session.start().expect("start");

        assert_eq!(
            session.declare_war(rome, egypt),
            Ok(vec![Event::WarDeclared {
                aggressor: rome,
                target: egypt,
            }])
        );
        assert_eq!(session.declare_war(egypt, rome), Ok(vec![]));
        assert_eq!(
            session.propose_peace(egypt, rome),
            Ok(vec![Event::PeaceMade { a: egypt, b: rome }])
        );
        assert_eq!(session.diplomatic_status(rome, egypt), DiplomaticStatus::Peace);
    }

    #[test]
    fn production_options_flag_locked_and_built_items() {
        let (mut session, rome) = scenario();
        let city = session
            .spawn_city(rome, "Roma", Position::new(0, 0))
            .expect("city");
        session.start().expect("start");
        session
            .world
            .city_mut(city)
            .expect("city")
            .buildings
            .insert(BuildingType::Walls);

        let options = session.production_options(city).expect("options");
        assert_eq!(options.len(), UnitType::ALL.len() + BuildingType::ALL.len());
        let enabled = |item| {
            options
                .iter()
                .find(|o| o.item == item)
                .map(|o| o.enabled)
                .expect("listed")
        };
        assert!(enabled(ProductionItem::Unit(UnitType::Settler)));
        assert!(!enabled(ProductionItem::Unit(UnitType::Warrior)));
        assert!(!enabled(ProductionItem::Building(BuildingType::Walls)));
        assert!(enabled(ProductionItem::Building(BuildingType::Temple)));
    }
}
