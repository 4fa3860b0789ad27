//! Static rule data: terrain, unit and building tables plus the technology graph.

mod tables;
mod tech_graph;

pub use tables::*;
pub use tech_graph::TechGraph;
