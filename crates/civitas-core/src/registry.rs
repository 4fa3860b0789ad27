use civitas_protocol::{
    CityId, CivId, DiplomaticStatus, Position, ProductionItem, Technology, UnitId, UnitType,
};

use crate::{
    city::City,
    civilization::Civilization,
    diplomacy::DiplomacyState,
    entities::EntityStore,
    error::{EntityRef, GameError},
    map::GameMap,
    production::validate_order,
    rules::UNIT_UPKEEP,
    unit::Unit,
    yields::Yields,
};

/// Outcome of a successful single-step move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Position,
    pub to: Position,
    pub moves_left: u8,
}

/// A city created by a settler, plus the settler it used up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoundedCity {
    pub city: CityId,
    pub consumed: UnitId,
}

/// Civilization registry: owns every civilization, city and unit together
/// with the terrain map and the diplomacy table.
///
/// Civilizations own their cities and units by id; the entities point back
/// at their owner with a plain `CivId`.
#[derive(Clone, Debug)]
pub struct World {
    map: GameMap,
    civs: Vec<Civilization>,
    cities: EntityStore<City>,
    units: EntityStore<Unit>,
    diplomacy: DiplomacyState,
}

impl World {
    pub fn new(map: GameMap) -> Self {
        Self {
            map,
            civs: Vec::new(),
            cities: EntityStore::default(),
            units: EntityStore::default(),
            diplomacy: DiplomacyState::new(0),
        }
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut GameMap {
        &mut self.map
    }

    pub fn diplomacy(&self) -> &DiplomacyState {
        &self.diplomacy
    }

    // ---------------------------------------------------------------------
    // Lookups
    // ---------------------------------------------------------------------

    pub fn civilizations(&self) -> &[Civilization] {
        &self.civs
    }

    pub fn civ(&self, id: CivId) -> Option<&Civilization> {
        self.civs.get(id.index())
    }

    pub fn civ_mut(&mut self, id: CivId) -> Option<&mut Civilization> {
        self.civs.get_mut(id.index())
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.get(id)
    }

    pub fn city_mut(&mut self, id: CityId) -> Option<&mut City> {
        self.cities.get_mut(id)
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(id)
    }

    pub(crate) fn require_civ(&self, id: CivId) -> Result<&Civilization, GameError> {
        self.civ(id)
            .ok_or(GameError::UnknownEntity(EntityRef::Civilization(id)))
    }

    pub(crate) fn require_civ_mut(&mut self, id: CivId) -> Result<&mut Civilization, GameError> {
        self.civs
            .get_mut(id.index())
            .ok_or(GameError::UnknownEntity(EntityRef::Civilization(id)))
    }

    pub(crate) fn require_city(&self, id: CityId) -> Result<&City, GameError> {
        self.city(id).ok_or(GameError::UnknownEntity(EntityRef::City(id)))
    }

    pub(crate) fn require_unit(&self, id: UnitId) -> Result<&Unit, GameError> {
        self.unit(id).ok_or(GameError::UnknownEntity(EntityRef::Unit(id)))
    }

    /// Cities of `civ` in founding order. Empty for an unknown civ.
    pub fn cities_of(&self, civ: CivId) -> impl Iterator<Item = (CityId, &City)> {
        self.civ(civ)
            .map(|c| c.cities.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|&id| Some((id, self.cities.get(id)?)))
    }

    /// Units of `civ` in creation order. Empty for an unknown civ.
    pub fn units_of(&self, civ: CivId) -> impl Iterator<Item = (UnitId, &Unit)> {
        self.civ(civ)
            .map(|c| c.units.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|&id| Some((id, self.units.get(id)?)))
    }

    pub fn city_at(&self, pos: Position) -> Option<CityId> {
        self.cities
            .iter()
            .find(|(_, city)| city.position == pos)
            .map(|(id, _)| id)
    }

    // ---------------------------------------------------------------------
    // Creation
    // ---------------------------------------------------------------------

    /// Registers a civilization at peace with everyone. `None` once every
    /// `CivId` is taken.
    pub fn add_civilization(
        &mut self,
        name: impl Into<String>,
        leader: impl Into<String>,
        is_ai: bool,
        gold: i64,
    ) -> Option<CivId> {
        let index = u8::try_from(self.civs.len()).ok()?;
        let id = CivId(index);
        self.civs.push(Civilization::new(id, name, leader, is_ai, gold));
        self.diplomacy.add_civ();
        Some(id)
    }

    /// Places a city for `owner` on the map tile at `pos`, taking that tile's
    /// terrain.
    pub fn spawn_city(
        &mut self,
        owner: CivId,
        name: impl Into<String>,
        pos: Position,
    ) -> Result<CityId, GameError> {
        self.require_civ(owner)?;
        let terrain = self
            .map
            .terrain_at(pos)
            .ok_or(GameError::OutOfBounds { from: pos, to: pos })?;

        let id = self.cities.insert(City::new(name, owner, pos, terrain));
        if let Some(civ) = self.civ_mut(owner) {
            civ.cities.push(id);
        }
        Ok(id)
    }

    pub fn spawn_unit(
        &mut self,
        owner: CivId,
        unit_type: UnitType,
        pos: Position,
    ) -> Result<UnitId, GameError> {
        self.require_civ(owner)?;
        if !self.map.contains(pos) {
            return Err(GameError::OutOfBounds { from: pos, to: pos });
        }

        let id = self.units.insert(Unit::new(unit_type, owner, pos));
        if let Some(civ) = self.civ_mut(owner) {
            civ.units.push(id);
        }
        Ok(id)
    }

    // ---------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------

    pub fn start_research(&mut self, civ: CivId, tech: Technology) -> Result<(), GameError> {
        self.require_civ_mut(civ)?.start_research(tech)
    }

    /// Replaces the city's order, returning the one it displaced.
    pub fn set_production(
        &mut self,
        city_id: CityId,
        item: ProductionItem,
    ) -> Result<Option<ProductionItem>, GameError> {
        let city = self.require_city(city_id)?;
        let owner = self.require_civ(city.owner)?;
        validate_order(item, city, |tech| owner.knows(tech))
            .map_err(|reason| GameError::InvalidOrder { reason })?;

        let Some(city) = self.cities.get_mut(city_id) else {
            return Ok(None);
        };
        let replaced = city.queue.current();
        city.queue.set(item);
        Ok(replaced)
    }

    /// Moves one orthogonal step. Checks run in a fixed order (unit, vector,
    /// moves, bounds) and nothing changes unless all pass.
    pub fn move_unit(&mut self, unit_id: UnitId, dx: i32, dy: i32) -> Result<MoveOutcome, GameError> {
        let unit = self.require_unit(unit_id)?;
        let valid_axis = |d: i32| (-1..=1).contains(&d);
        if !valid_axis(dx) || !valid_axis(dy) || (dx != 0) == (dy != 0) {
            return Err(GameError::InvalidDirection { dx, dy });
        }
        if !unit.has_moves() {
            return Err(GameError::NoMovesRemaining);
        }
        let from = unit.position;
        let to = from.offset(dx, dy);
        if !self.map.contains(to) {
            return Err(GameError::OutOfBounds { from, to });
        }

        let unit = self
            .units
            .get_mut(unit_id)
            .ok_or(GameError::UnknownEntity(EntityRef::Unit(unit_id)))?;
        unit.position = to;
        unit.spend_move();
        Ok(MoveOutcome {
            from,
            to,
            moves_left: unit.moves,
        })
    }

    /// Turns a settler into a city on its tile. An empty `name` becomes
    /// "City <n>" with `n` the owner's city count after founding.
    pub fn found_city(&mut self, unit_id: UnitId, name: &str) -> Result<FoundedCity, GameError> {
        let unit = self.require_unit(unit_id)?;
        if !unit.can_found_city() {
            return Err(GameError::NotASettler(unit.unit_type));
        }
        let (owner, pos) = (unit.owner, unit.position);
        let civ = self.require_civ(owner)?;
        let name = match name.trim() {
            "" => format!("City {}", civ.city_count() + 1),
            trimmed => trimmed.to_string(),
        };

        let city = self.spawn_city(owner, name, pos)?;
        self.units.remove(unit_id);
        if let Some(civ) = self.civ_mut(owner) {
            civ.units.retain(|&id| id != unit_id);
        }
        Ok(FoundedCity {
            city,
            consumed: unit_id,
        })
    }

    /// Sets the relation in both directions. Returns whether anything changed.
    pub fn set_diplomacy(
        &mut self,
        a: CivId,
        b: CivId,
        status: DiplomaticStatus,
    ) -> Result<bool, GameError> {
        self.require_civ(a)?;
        self.require_civ(b)?;
        if a == b || self.diplomacy.status(a, b) == status {
            return Ok(false);
        }
        self.diplomacy.set(a, b, status);
        Ok(true)
    }

    /// Recomputes `civ`'s per-turn rates from its cities' stockpiles, less
    /// unit upkeep. Pure recomputation; calling it twice changes nothing.
    pub fn calculate_yields(&mut self, civ: CivId) {
        let mut total = Yields::ZERO;
        for (_, city) in self.cities_of(civ) {
            total += city.stockpile();
        }

        if let Some(civ) = self.civ_mut(civ) {
            let units = i64::try_from(civ.unit_count()).unwrap_or(i64::MAX);
            civ.science_per_turn = total.science;
            civ.gold_per_turn = total.gold.saturating_sub(units.saturating_mul(UNIT_UPKEEP));
        }
    }
}
