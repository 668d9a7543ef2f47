//! Core simulation types: roles, fields, state, records, RNG, configuration.
//!
//! This module contains the fundamental building blocks that are
//! scenario-agnostic. Scenarios populate these via action catalogs and
//! starting states rather than modifying the core.

pub mod config;
pub mod field;
pub mod record;
pub mod rng;
pub mod role;
pub mod state;

pub use config::{GoalConfig, SimConfig};
pub use field::Field;
pub use record::{Outcome, TransitionRecord};
pub use rng::{RandomSource, ScriptedRng, SimRng, SimRngState};
pub use role::{Role, RoleMap};
pub use state::{ConstructionJob, HousingTier, WorldState};
