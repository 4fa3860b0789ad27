use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use civitas_protocol::{BuildingType, CivId, Position, ProductionItem, Terrain};

use crate::{
    production::ProductionQueue,
    rules::{building_stats, terrain_yields},
    yields::Yields,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub owner: CivId,
    pub position: Position,
    /// Fixed at founding from the tile under the city.
    pub terrain: Terrain,
    pub population: u32,
    // Cumulative stockpiles; only tile work ever changes them.
    pub food: i64,
    pub production: i64,
    pub gold: i64,
    pub science: i64,
    pub buildings: BTreeSet<BuildingType>,
    pub queue: ProductionQueue,
}

impl City {
    pub fn new(name: impl Into<String>, owner: CivId, position: Position, terrain: Terrain) -> Self {
        Self {
            name: name.into(),
            owner,
            position,
            terrain,
            population: 1,
            food: 0,
            production: 0,
            gold: 0,
            science: 0,
            buildings: BTreeSet::new(),
            queue: ProductionQueue::Idle,
        }
    }

    /// What one round of work adds: terrain plus every building bonus.
    pub fn tile_yield(&self) -> Yields {
        self.buildings
            .iter()
            .fold(terrain_yields(self.terrain), |acc, &building| {
                acc + building_stats(building).bonus
            })
    }

    pub fn apply_tile_work(&mut self) -> Yields {
        let gained = self.tile_yield();
        let total = self.stockpile() + gained;
        self.food = total.food;
        self.production = total.production;
        self.gold = total.gold;
        self.science = total.science;
        gained
    }

    pub fn stockpile(&self) -> Yields {
        Yields::new(self.food, self.production, self.gold, self.science)
    }

    pub fn has_building(&self, building: BuildingType) -> bool {
        self.buildings.contains(&building)
    }

    /// Feeds the production stockpile into the queue. A finished building is
    /// added here; finished units are left to the caller to spawn.
    pub fn advance_production(&mut self) -> Option<ProductionItem> {
        let done = self.queue.advance(self.production)?;
        if let ProductionItem::Building(building) = done {
            self.buildings.insert(building);
        }
        Some(done)
    }
}

#[cfg(test)]
mod tests {
    use civitas_protocol::UnitType;

    use super::*;

    #[test]
    fn hills_city_gains_production_and_gold() {
        let mut city = City::new("Hillfort", CivId(0), Position::new(1, 1), Terrain::Hills);
        let gained = city.apply_tile_work();
        assert_eq!(gained, Yields::new(0, 3, 1, 0));
        assert_eq!(city.stockpile(), Yields::new(0, 3, 1, 0));
    }

    #[test]
    fn building_bonuses_stack_on_terrain() {
        let mut city = City::new("Port", CivId(0), Position::new(0, 0), Terrain::Coast);
        city.buildings.insert(BuildingType::Granary);
        city.buildings.insert(BuildingType::Library);
        city.buildings.insert(BuildingType::Market);
        city.buildings.insert(BuildingType::Walls);
        assert_eq!(city.tile_yield(), Yields::new(3, 0, 4, 2));

        city.apply_tile_work();
        city.apply_tile_work();
        assert_eq!(city.stockpile(), Yields::new(6, 0, 8, 4));
    }

    #[test]
    fn stockpiles_saturate_at_the_top_of_the_range() {
        let mut city = City::new("Portus", CivId(0), Position::new(0, 0), Terrain::Coast);
        city.food = i64::MAX;
        city.gold = i64::MAX - 1;
        assert_eq!(city.apply_tile_work(), Yields::new(2, 0, 2, 0));
        assert_eq!(city.stockpile(), Yields::new(i64::MAX, 0, i64::MAX, 0));
    }

    #[test]
    fn ocean_city_without_buildings_never_grows() {
        let mut city = City::new("Atoll", CivId(0), Position::new(0, 0), Terrain::Ocean);
        city.apply_tile_work();
        assert_eq!(city.stockpile(), Yields::ZERO);
    }

    #[test]
    fn production_uses_cumulative_stockpile() {
        let mut city = City::new("Forge", CivId(0), Position::new(0, 0), Terrain::Hills);
        city.queue.set(ProductionItem::Unit(UnitType::Scout));

        // 3 + 6 + 9 + 12 = 30 >= 25 on the fourth round.
        let mut finished = Vec::new();
        for _ in 0..4 {
            city.apply_tile_work();
            finished.push(city.advance_production());
        }
        assert_eq!(
            finished,
            vec![None, None, None, Some(ProductionItem::Unit(UnitType::Scout))]
        );
        assert!(city.queue.is_idle());
    }

    #[test]
    fn finished_building_joins_the_city() {
        let mut city = City::new("Roma", CivId(0), Position::new(0, 0), Terrain::Plains);
        city.production = 60;
        city.queue.set(ProductionItem::Building(BuildingType::Granary));
        assert_eq!(
            city.advance_production(),
            Some(ProductionItem::Building(BuildingType::Granary))
        );
        assert!(city.has_building(BuildingType::Granary));
    }
}
