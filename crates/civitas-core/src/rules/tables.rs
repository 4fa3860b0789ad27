use civitas_protocol::{BuildingType, ProductionItem, Technology, Terrain, UnitType};

use crate::yields::Yields;

pub const MAX_HEALTH: u8 = 100;
pub const MOVES_PER_TURN: u8 = 2;
/// Gold deducted per owned unit when per-turn yields are recomputed.
pub const UNIT_UPKEEP: i64 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitStats {
    pub cost: i64,
    pub combat_strength: i32,
    pub tech_required: Option<Technology>,
    pub can_found_city: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildingStats {
    pub cost: i64,
    /// Added to the city's stockpile every time its tile is worked.
    pub bonus: Yields,
}

/// What one round of tile work adds to a city on `terrain`.
pub const fn terrain_yields(terrain: Terrain) -> Yields {
    match terrain {
        Terrain::Plains => Yields::new(2, 1, 0, 0),
        Terrain::Forest => Yields::new(1, 2, 0, 0),
        Terrain::Hills => Yields::new(0, 3, 1, 0),
        Terrain::Coast => Yields::new(2, 0, 2, 0),
        Terrain::Mountains | Terrain::Ocean => Yields::ZERO,
    }
}

pub const fn unit_stats(unit_type: UnitType) -> UnitStats {
    // Every military unit is gated on the same metalworking technology.
    const MILITARY_TECH: Option<Technology> = Some(Technology::BronzeWorking);

    let (cost, combat_strength) = match unit_type {
        UnitType::Settler => (100, 0),
        UnitType::Warrior => (40, 10),
        UnitType::Archer => (60, 12),
        UnitType::Scout => (25, 5),
        UnitType::Spearman => (50, 15),
        UnitType::Horseman => (80, 18),
        UnitType::Catapult => (120, 20),
    };

    match unit_type {
        UnitType::Settler => UnitStats {
            cost,
            combat_strength,
            tech_required: None,
            can_found_city: true,
        },
        _ => UnitStats {
            cost,
            combat_strength,
            tech_required: MILITARY_TECH,
            can_found_city: false,
        },
    }
}

pub const fn building_stats(building: BuildingType) -> BuildingStats {
    match building {
        BuildingType::Granary => BuildingStats {
            cost: 60,
            bonus: Yields::food(1),
        },
        BuildingType::Barracks => BuildingStats {
            cost: 80,
            bonus: Yields::ZERO,
        },
        BuildingType::Library => BuildingStats {
            cost: 90,
            bonus: Yields::science(2),
        },
        BuildingType::Market => BuildingStats {
            cost: 100,
            bonus: Yields::gold(2),
        },
        BuildingType::Walls => BuildingStats {
            cost: 120,
            bonus: Yields::ZERO,
        },
        BuildingType::Temple => BuildingStats {
            cost: 80,
            bonus: Yields::ZERO,
        },
    }
}

pub const fn production_cost(item: ProductionItem) -> i64 {
    match item {
        ProductionItem::Unit(unit_type) => unit_stats(unit_type).cost,
        ProductionItem::Building(building) => building_stats(building).cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_settlers_found_cities_and_skip_tech_gate() {
        for unit_type in UnitType::ALL {
            let stats = unit_stats(unit_type);
            let is_settler = unit_type == UnitType::Settler;
            assert_eq!(stats.can_found_city, is_settler, "{unit_type:?}");
            assert_eq!(stats.tech_required.is_none(), is_settler, "{unit_type:?}");
        }
    }

    #[test]
    fn unproductive_terrain_yields_nothing() {
        assert_eq!(terrain_yields(Terrain::Mountains), Yields::ZERO);
        assert_eq!(terrain_yields(Terrain::Ocean), Yields::ZERO);
        assert_eq!(terrain_yields(Terrain::Hills), Yields::new(0, 3, 1, 0));
    }

    #[test]
    fn production_cost_covers_units_and_buildings() {
        assert_eq!(production_cost(ProductionItem::Unit(UnitType::Scout)), 25);
        assert_eq!(
            production_cost(ProductionItem::Building(BuildingType::Walls)),
            120
        );
    }
}
