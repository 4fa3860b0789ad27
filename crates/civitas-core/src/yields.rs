use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Yields {
    pub food: i64,
    pub production: i64,
    pub gold: i64,
    pub science: i64,
}

impl Yields {
    pub const ZERO: Yields = Yields::new(0, 0, 0, 0);

    pub const fn new(food: i64, production: i64, gold: i64, science: i64) -> Self {
        Self {
            food,
            production,
            gold,
            science,
        }
    }

    pub const fn food(amount: i64) -> Self {
        Self::new(amount, 0, 0, 0)
    }

    pub const fn gold(amount: i64) -> Self {
        Self::new(0, 0, amount, 0)
    }

    pub const fn science(amount: i64) -> Self {
        Self::new(0, 0, 0, amount)
    }
}

impl Add for Yields {
    type Output = Yields;

    fn add(self, other: Yields) -> Yields {
        Yields {
            food: self.food.saturating_add(other.food),
            production: self.production.saturating_add(other.production),
            gold: self.gold.saturating_add(other.gold),
            science: self.science.saturating_add(other.science),
        }
    }
}

impl AddAssign for Yields {
    fn add_assign(&mut self, other: Yields) {
        *self = *self + other;
    }
}
