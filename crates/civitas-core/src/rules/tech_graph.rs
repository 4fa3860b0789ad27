use civitas_protocol::Technology;

/// The fixed technology prerequisite DAG.
///
/// Shape and costs are compile-time tables; nothing here is mutable.
#[derive(Clone, Copy, Debug, Default)]
pub struct TechGraph;

impl TechGraph {
    pub const fn cost_of(tech: Technology) -> i64 {
        match tech {
            Technology::Agriculture => 20,
            Technology::Pottery => 25,
            Technology::Writing => 40,
            Technology::Archery => 35,
            Technology::Mining => 30,
            Technology::BronzeWorking => 50,
            Technology::TheWheel => 45,
            Technology::Masonry => 55,
            Technology::HorsebackRiding => 60,
            Technology::Mathematics => 70,
        }
    }

    pub const fn prerequisites(tech: Technology) -> &'static [Technology] {
        use Technology::*;

        match tech {
            Agriculture | Mining => &[],
            Pottery | Archery | TheWheel => &[Agriculture],
            Writing => &[Pottery],
            BronzeWorking | Masonry => &[Mining],
            HorsebackRiding => &[TheWheel],
            Mathematics => &[Writing],
        }
    }

    /// True when every prerequisite of `tech` satisfies `known`.
    pub fn prerequisites_met(tech: Technology, known: impl Fn(Technology) -> bool) -> bool {
        Self::prerequisites(tech).iter().all(|&prereq| known(prereq))
    }
}
