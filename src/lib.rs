//! # citywalls
//!
//! A round-based multi-actor simulation of city homelessness policy.
//!
//! ## Design Principles
//!
//! 1. **Scenario-Agnostic Engine**: No hardcoded actions, costs, or
//!    effects. Scenarios describe themselves as catalog data.
//!
//! 2. **Deterministic Replay**: All randomness flows through a seeded,
//!    serializable source. Same seed, same submissions, same history.
//!
//! 3. **Copy-on-Transition**: Every action works on a clone of the state
//!    and commits atomically, so the log is a sequence of snapshots that
//!    all actually existed.
//!
//! ## Architecture
//!
//! - **Fixed role cycle**: five civic actors take turns in a fixed
//!   order; a full cycle is a round, and round boundaries run the macro
//!   update (tax, grants, shocks, decay, construction).
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs` for
//!   the copy-on-transition discipline.
//!
//! - **Stochastic outcomes**: funded actions roll against a probability
//!   shaped by momentum, support, fatigue, and difficulty; weak rolls
//!   apply scaled-down effects instead of vanishing.
//!
//! ## Modules
//!
//! - `core`: Roles, fields, world state, records, RNG, configuration
//! - `catalog`: Action definitions, effect specs, validated registry
//! - `engine`: Ledger, outcome resolver, applier, upkeep, controller
//! - `scenario`: The City Without Walls data set (60 actions)

pub mod catalog;
pub mod core;
pub mod engine;
pub mod scenario;

// Re-export commonly used types
pub use crate::core::{
    ConstructionJob, Field, GoalConfig, HousingTier, Outcome, RandomSource, Role, RoleMap,
    ScriptedRng, SimConfig, SimRng, SimRngState, TransitionRecord, WorldState,
};

pub use crate::catalog::{ActionDef, ActionId, Catalog, CatalogError, CostMap, EffectSpec};

pub use crate::engine::{Funding, Resolution, Simulation, SubmitError};
