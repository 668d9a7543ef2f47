//! The City Without Walls scenario: five civic roles sharing one
//! homelessness crisis.
//!
//! Sixty actions, twelve per role, each grounded in a published source.
//! The scenario is pure data over the engine: a starting state, an
//! action catalog, and the default configuration.
//!
//! ## Example
//!
//! ```
//! use citywalls::scenario;
//!
//! let mut sim = scenario::new_simulation(42);
//! assert_eq!(sim.state().total_homeless, 9700);
//!
//! let record = sim
//!     .submit(sim.current_role(), "Civic Forum (reduce tensions)")
//!     .unwrap();
//! assert!(!record.citation.is_empty());
//! ```

pub mod business;
pub mod medical;
pub mod neighborhoods;
pub mod shelters;
pub mod university;

use crate::catalog::Catalog;
use crate::core::config::SimConfig;
use crate::core::role::Role;
use crate::core::state::WorldState;
use crate::engine::Simulation;

/// Build the full validated catalog, in role blocks.
#[must_use]
pub fn city_without_walls() -> Catalog {
    let mut actions = Vec::with_capacity(60);
    actions.extend(shelters::actions());
    actions.extend(neighborhoods::actions());
    actions.extend(business::actions());
    actions.extend(medical::actions());
    actions.extend(university::actions());
    Catalog::new(actions).expect("City Without Walls catalog is valid")
}

/// The city at round zero.
#[must_use]
pub fn starting_state() -> WorldState {
    let mut state = WorldState::new();

    state.pop_families = 2800;
    state.pop_youth = 1800;
    state.pop_chronic = 3600;
    state.pop_veterans = 1500;
    state.recompute_total();

    state.shelter_capacity = 1400;
    state.transitional_units = 600;
    state.permanent_units = 2200;

    state.social_workers = 120;
    state.outreach_teams = 8;
    state.medical_vans = 3;

    state.budgets[Role::Neighborhoods] = 900.0;
    state.budgets[Role::Business] = 750.0;
    state.budgets[Role::Medical] = 900.0;
    state.budgets[Role::Shelters] = 800.0;
    state.budgets[Role::University] = 450.0;

    state.public_support = 52.0;
    state.economy_index = 100.0;
    state.legal_pressure = 10.0;
    state.operating_obligation = 500.0;

    // Trend history starts flat at the opening total.
    for _ in 0..WorldState::TREND_CAPACITY {
        state.record_trend();
    }

    state
}

/// A seeded simulation over the full scenario with default tuning.
#[must_use]
pub fn new_simulation(seed: u64) -> Simulation {
    Simulation::new(
        city_without_walls(),
        starting_state(),
        SimConfig::default(),
        seed,
    )
}
