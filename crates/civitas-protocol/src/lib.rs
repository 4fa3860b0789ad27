//! Data shared between the civitas simulation core and its callers
//! (display, menus, persistence). No behavior lives here.

mod command;
mod event;
mod ids;
mod query;
mod snapshot;
mod types;

pub use crate::command::*;
pub use crate::event::*;
pub use crate::ids::*;
pub use crate::query::*;
pub use crate::snapshot::*;
pub use crate::types::*;
