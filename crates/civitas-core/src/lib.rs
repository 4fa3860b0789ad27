mod ai;
mod city;
mod civilization;
mod config;
mod diplomacy;
mod entities;
mod error;
mod game;
mod map;
mod production;
mod registry;
mod research;
mod rng;
mod rules;
pub mod selfplay;
mod unit;
mod yields;

pub use crate::ai::*;
pub use crate::city::*;
pub use crate::civilization::*;
pub use crate::config::*;
pub use crate::diplomacy::*;
pub use crate::entities::*;
pub use crate::error::*;
pub use crate::game::*;
pub use crate::map::*;
pub use crate::production::*;
pub use crate::registry::*;
pub use crate::rng::*;
pub use crate::rules::*;
pub use crate::selfplay::{run_selfplay, SelfPlayConfig, SelfPlayResult};
pub use crate::unit::*;
pub use crate::yields::*;
