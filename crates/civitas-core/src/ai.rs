//! Movement policy for non-player civilizations.
//!
//! The turn engine asks the strategy for a raw displacement per unit and
//! owns everything else (clamping to the grid, spending the move), so a
//! strategy can never break the round's ordering or bounds.

use std::fmt::Debug;

use rand::Rng;

use crate::{rng::GameRng, unit::Unit};

pub trait AiStrategy: Debug {
    /// Displacement for `unit` this round. Values outside `-1..=1` are
    /// allowed; the result is clamped to the map by the caller.
    fn choose_step(&mut self, unit: &Unit, rng: &mut GameRng) -> (i32, i32);
}

/// Each axis drawn independently and uniformly from `{-1, 0, 1}`.
/// A `(0, 0)` draw still spends the move.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomWalk;

impl AiStrategy for RandomWalk {
    fn choose_step(&mut self, _unit: &Unit, rng: &mut GameRng) -> (i32, i32) {
        let dx = rng.gen_range(-1..=1);
        let dy = rng.gen_range(-1..=1);
        (dx, dy)
    }
}

/// Never moves. Useful for scenarios that need AI units to stay put.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoldPosition;

impl AiStrategy for HoldPosition {
    fn choose_step(&mut self, _unit: &Unit, _rng: &mut GameRng) -> (i32, i32) {
        (0, 0)
    }
}
