//! Property tests for research gating, movement, diplomacy and production.

use proptest::prelude::*;

use civitas_core::{
    production_cost, Civilization, DiplomacyState, GameError, GameMap, ProductionQueue, TechGraph,
    World,
};
use civitas_protocol::{
    CivId, DiplomaticStatus, Position, ProductionItem, TechState, Technology, Terrain, UnitType,
};

fn civ_knowing(mask: u16) -> Civilization {
    let mut civ = Civilization::new(CivId(0), "Rome", "Caesar", false, 0);
    for tech in Technology::ALL {
        if mask & (1 << tech.index()) != 0 {
            civ.grant_technology(tech);
        }
    }
    civ
}

proptest! {
    /// Researchable exactly when unknown and every prerequisite is known.
    #[test]
    fn researchable_iff_prerequisites_complete(mask in 0u16..(1 << Technology::COUNT)) {
        let civ = civ_knowing(mask);
        for tech in Technology::ALL {
            let known = |t: Technology| mask & (1 << t.index()) != 0;
            let expected = !known(tech)
                && TechGraph::prerequisites(tech).iter().all(|&p| known(p));
            prop_assert_eq!(civ.is_researchable(tech), expected, "{:?}", tech);

            let state = civ.tech_state(tech);
            prop_assert_eq!(state == TechState::Completed, known(tech));
            prop_assert_eq!(state == TechState::Researchable, expected);
        }
    }

    /// Research start either succeeds on a researchable tech or changes nothing.
    #[test]
    fn start_research_is_validate_then_commit(
        mask in 0u16..(1 << Technology::COUNT),
        pick in 0usize..Technology::COUNT,
    ) {
        let mut civ = civ_knowing(mask);
        let tech = Technology::ALL[pick];
        let researchable = civ.is_researchable(tech);
        let before = civ.clone();

        match civ.start_research(tech) {
            Ok(()) => {
                prop_assert!(researchable);
                prop_assert_eq!(civ.researching, Some(tech));
                prop_assert_eq!(civ.tech_state(tech), TechState::InProgress);
            }
            Err(GameError::InvalidTechnology { .. }) => {
                prop_assert!(!researchable);
                prop_assert_eq!(civ, before);
            }
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }

    /// A move spends exactly one move on success and touches nothing on failure.
    #[test]
    fn failed_moves_never_mutate(
        x in 0i32..6,
        y in 0i32..4,
        moves in 0u8..=2,
        dx in -2i32..=2,
        dy in -2i32..=2,
    ) {
        let mut world = World::new(GameMap::filled(6, 4, Terrain::Plains));
        let civ = world.add_civilization("Rome", "Caesar", false, 0).expect("civ slot");
        let unit = world.spawn_unit(civ, UnitType::Scout, Position::new(x, y)).expect("unit");
        world.unit_mut(unit).expect("unit").moves = moves;
        let before = world.unit(unit).expect("unit").clone();

        match world.move_unit(unit, dx, dy) {
            Ok(outcome) => {
                let after = world.unit(unit).expect("unit");
                prop_assert_eq!(after.moves, before.moves - 1);
                prop_assert_eq!(after.position, Position::new(x + dx, y + dy));
                prop_assert_eq!(outcome.moves_left, after.moves);
                prop_assert!((dx == 0) != (dy == 0));
            }
            Err(_) => {
                prop_assert_eq!(world.unit(unit).expect("unit"), &before);
            }
        }
    }

    /// Every relation reads the same in both directions after any sequence
    /// of declarations.
    #[test]
    fn diplomacy_stays_symmetric(
        ops in proptest::collection::vec((0u8..4, 0u8..4, any::<bool>()), 0..32),
    ) {
        let mut diplomacy = DiplomacyState::new(4);
        for (a, b, war) in ops {
            let status = if war { DiplomaticStatus::War } else { DiplomaticStatus::Peace };
            diplomacy.set(CivId(a), CivId(b), status);

            for i in 0..4 {
                for j in 0..4 {
                    prop_assert_eq!(
                        diplomacy.status(CivId(i), CivId(j)),
                        diplomacy.status(CivId(j), CivId(i))
                    );
                }
            }
        }
    }

    /// An order completes on the first advance that brings progress to its
    /// cost, exactly once, and the excess is dropped.
    #[test]
    fn production_completes_once_at_threshold(
        steps in proptest::collection::vec(0i64..60, 1..20),
    ) {
        let item = ProductionItem::Unit(UnitType::Warrior);
        let cost = production_cost(item);
        let mut queue = ProductionQueue::default();
        queue.set(item);

        let mut total = 0;
        let mut completed = 0;
        for step in steps {
            let was_idle = queue.is_idle();
            let done = queue.advance(step);
            if was_idle {
                prop_assert_eq!(done, None);
                prop_assert_eq!(queue.progress(), 0);
                continue;
            }

            total += step;
            if total >= cost {
                prop_assert_eq!(done, Some(item));
                prop_assert!(queue.is_idle());
                completed += 1;
            } else {
                prop_assert_eq!(done, None);
                prop_assert_eq!(queue.progress(), total);
            }
        }
        prop_assert!(completed <= 1);
    }
}
