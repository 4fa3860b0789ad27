//! Per-civilization research against the static technology graph.
//!
//! Completion is a threshold check on the current per-turn science rate,
//! re-evaluated every turn. Nothing accumulates between turns, so a switch
//! has nothing to discard and a tech whose cost the rate already meets
//! completes on the next check.

use civitas_protocol::{TechState, Technology};

use crate::{
    civilization::Civilization,
    error::{GameError, ResearchRejection},
    rules::TechGraph,
};

impl Civilization {
    /// Not yet completed, with every prerequisite completed.
    pub fn is_researchable(&self, tech: Technology) -> bool {
        !self.knows(tech) && TechGraph::prerequisites_met(tech, |t| self.knows(t))
    }

    pub fn tech_state(&self, tech: Technology) -> TechState {
        if self.knows(tech) {
            TechState::Completed
        } else if self.researching == Some(tech) {
            TechState::InProgress
        } else if TechGraph::prerequisites_met(tech, |t| self.knows(t)) {
            TechState::Researchable
        } else {
            TechState::Locked
        }
    }

    /// Researchable technologies in declaration order.
    pub fn researchable_techs(&self) -> impl Iterator<Item = Technology> + '_ {
        Technology::ALL
            .into_iter()
            .filter(move |&tech| self.is_researchable(tech))
    }

    pub fn start_research(&mut self, tech: Technology) -> Result<(), GameError> {
        if self.knows(tech) {
            return Err(GameError::InvalidTechnology {
                tech,
                reason: ResearchRejection::AlreadyResearched,
            });
        }
        if !self.is_researchable(tech) {
            return Err(GameError::InvalidTechnology {
                tech,
                reason: ResearchRejection::PrerequisitesNotMet,
            });
        }
        self.researching = Some(tech);
        Ok(())
    }

    /// Completes the active research when this turn's science rate covers
    /// its cost. Returns the completed technology.
    pub fn complete_research_if_ready(&mut self) -> Option<Technology> {
        let tech = self.researching?;
        if self.science_per_turn < TechGraph::cost_of(tech) {
            return None;
        }
        self.researching = None;
        self.grant_technology(tech);
        Some(tech)
    }

    /// Marks `tech` completed outside of research. Returns false when it was
    /// already known.
    pub fn grant_technology(&mut self, tech: Technology) -> bool {
        if self.knows(tech) {
            return false;
        }
        self.known_techs[tech.index()] = true;
        self.discovered.push(tech);
        if self.researching == Some(tech) {
            self.researching = None;
        }
        true
    }
}
