use serde::{Deserialize, Serialize};

use civitas_protocol::{ProductionItem, Technology};

use crate::{
    city::City,
    error::OrderRejection,
    rules::{production_cost, unit_stats},
};

/// Per-city build order.
///
/// Progress belongs to the order: replacing or completing the order drops it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductionQueue {
    #[default]
    Idle,
    InProgress {
        item: ProductionItem,
        progress: i64,
    },
}

impl ProductionQueue {
    pub fn current(&self) -> Option<ProductionItem> {
        match *self {
            ProductionQueue::Idle => None,
            ProductionQueue::InProgress { item, .. } => Some(item),
        }
    }

    pub fn progress(&self) -> i64 {
        match *self {
            ProductionQueue::Idle => 0,
            ProductionQueue::InProgress { progress, .. } => progress,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ProductionQueue::Idle)
    }

    pub fn set(&mut self, item: ProductionItem) {
        *self = ProductionQueue::InProgress { item, progress: 0 };
    }

    /// Add `production` to the active order. Returns the item when it
    /// completes; the queue goes back to idle and any excess is discarded.
    pub fn advance(&mut self, production: i64) -> Option<ProductionItem> {
        let ProductionQueue::InProgress { item, progress } = self else {
            return None;
        };

        *progress = progress.saturating_add(production);
        if *progress < production_cost(*item) {
            return None;
        }

        let done = *item;
        *self = ProductionQueue::Idle;
        Some(done)
    }
}

/// Checks whether `city` may switch to `item` given the owner's techs.
pub fn validate_order(
    item: ProductionItem,
    city: &City,
    knows: impl Fn(Technology) -> bool,
) -> Result<(), OrderRejection> {
    match item {
        ProductionItem::Unit(unit_type) => match unit_stats(unit_type).tech_required {
            Some(tech) if !knows(tech) => Err(OrderRejection::MissingTechnology(tech)),
            _ => Ok(()),
        },
        ProductionItem::Building(building) => {
            if city.has_building(building) {
                Err(OrderRejection::BuildingAlreadyBuilt(building))
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use civitas_protocol::{BuildingType, CivId, Position, Terrain, UnitType};

    use super::*;

    #[test]
    fn completes_once_and_discards_excess() {
        let mut queue = ProductionQueue::default();
        queue.set(ProductionItem::Unit(UnitType::Scout));

        assert_eq!(queue.advance(20), None);
        assert_eq!(queue.progress(), 20);
        assert_eq!(
            queue.advance(30),
            Some(ProductionItem::Unit(UnitType::Scout))
        );
        assert!(queue.is_idle());
        assert_eq!(queue.progress(), 0);
        assert_eq!(queue.advance(100), None);
    }

    #[test]
    fn replacing_order_resets_progress() {
        let mut queue = ProductionQueue::default();
        queue.set(ProductionItem::Building(BuildingType::Walls));
        queue.advance(50);
        queue.set(ProductionItem::Building(BuildingType::Granary));
        assert_eq!(queue.progress(), 0);
        assert_eq!(
            queue.current(),
            Some(ProductionItem::Building(BuildingType::Granary))
        );
    }

    #[test]
    fn military_units_need_bronze_working() {
        let city = City::new("Roma", CivId(0), Position::new(0, 0), Terrain::Plains);
        let spear = ProductionItem::Unit(UnitType::Spearman);

        assert_eq!(
            validate_order(spear, &city, |_| false),
            Err(OrderRejection::MissingTechnology(Technology::BronzeWorking))
        );
        assert_eq!(
            validate_order(spear, &city, |t| t == Technology::BronzeWorking),
            Ok(())
        );
        assert_eq!(
            validate_order(ProductionItem::Unit(UnitType::Settler), &city, |_| false),
            Ok(())
        );
    }

    #[test]
    fn duplicate_building_is_rejected() {
        let mut city = City::new("Roma", CivId(0), Position::new(0, 0), Terrain::Plains);
        city.buildings.insert(BuildingType::Library);
        assert_eq!(
            validate_order(
                ProductionItem::Building(BuildingType::Library),
                &city,
                |_| true
            ),
            Err(OrderRejection::BuildingAlreadyBuilt(BuildingType::Library))
        );
    }
}
