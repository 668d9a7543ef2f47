//! Simulation controller: turn validation, transition building, and the
//! append-only log.

use thiserror::Error;
use tracing::debug;

use crate::catalog::{ActionDef, Catalog};
use crate::core::config::SimConfig;
use crate::core::record::{Outcome, TransitionRecord};
use crate::core::rng::{RandomSource, SimRng, SimRngState};
use crate::core::role::Role;
use crate::core::state::WorldState;

use super::applier;
use super::ledger::{self, Funding};
use super::outcome;
use super::upkeep;

/// Rejections that leave the simulation untouched: nothing is logged and
/// the turn does not advance.
#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("it is {current}'s turn, not {actor}'s")]
    OutOfTurn { actor: Role, current: Role },

    #[error("unknown action '{name}'")]
    UnknownAction { name: String },

    #[error("action '{action}' belongs to {owner}, not {actor}")]
    RoleMismatch {
        action: String,
        owner: Role,
        actor: Role,
    },
}

/// The running simulation: catalog, configuration, current state, RNG,
/// and the transition log.
///
/// Every submission works on a clone of the current state; the clone
/// replaces it only once the transition is fully built, so a record in
/// the log always matches a state that actually existed.
///
/// ## Example
///
/// ```
/// use citywalls::scenario;
///
/// let mut sim = scenario::new_simulation(7);
/// let record = sim
///     .submit(sim.current_role(), "Media Campaign (reframe homelessness)")
///     .unwrap();
/// assert_eq!(record.round, 0);
/// ```
pub struct Simulation<R: RandomSource = SimRng> {
    config: SimConfig,
    catalog: Catalog,
    state: WorldState,
    rng: R,
    log: Vec<TransitionRecord>,
}

impl Simulation<SimRng> {
    /// Start a simulation with a seeded RNG.
    #[must_use]
    pub fn new(catalog: Catalog, state: WorldState, config: SimConfig, seed: u64) -> Self {
        Self::with_rng(catalog, state, config, SimRng::new(seed))
    }

    /// Serializable RNG position, for snapshotting alongside the state.
    #[must_use]
    pub fn rng_state(&self) -> SimRngState {
        self.rng.state()
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Start a simulation with an explicit randomness source, typically
    /// a scripted one in tests.
    #[must_use]
    pub fn with_rng(catalog: Catalog, state: WorldState, config: SimConfig, rng: R) -> Self {
        Self {
            config,
            catalog,
            state,
            rng,
            log: Vec::new(),
        }
    }

    /// Submit an action for `actor`.
    ///
    /// A processed action always consumes the turn, funded or not; when
    /// the turn cycle wraps, the round upkeep runs inside the same
    /// transition and its lines land on the returned record.
    pub fn submit(
        &mut self,
        actor: Role,
        action_name: &str,
    ) -> Result<&TransitionRecord, SubmitError> {
        if actor != self.state.turn {
            return Err(SubmitError::OutOfTurn {
                actor,
                current: self.state.turn,
            });
        }
        let action = self
            .catalog
            .by_name(action_name)
            .ok_or_else(|| SubmitError::UnknownAction {
                name: action_name.to_string(),
            })?;
        if action.role != actor {
            return Err(SubmitError::RoleMismatch {
                action: action.name.clone(),
                owner: action.role,
                actor,
            });
        }

        let submitted_round = self.state.round;
        let mut working = self.state.clone();

        let (outcome, probability, multiplier, effects) =
            match ledger::charge(&mut working, &action.cost) {
                Funding::Rejected => {
                    working.last_action =
                        format!("{actor} attempted '{}' but lacked funding.", action.name);
                    let effects = vec!["action failed: insufficient budget".to_string()];
                    (Outcome::Failed, 0.0, 0.0, effects)
                }
                Funding::Funded { fraction } => {
                    let resolution =
                        outcome::resolve(&working, action.difficulty, fraction, &mut self.rng);
                    let effects =
                        applier::apply(&mut working, action, resolution.multiplier, &self.config);
                    working.last_action =
                        format!("{actor} performed '{}' ({}).", action.name, resolution.outcome);
                    (
                        resolution.outcome,
                        resolution.probability,
                        resolution.multiplier,
                        effects,
                    )
                }
            };

        let wrapped = working.advance_turn();
        let upkeep = if wrapped {
            upkeep::run_round_upkeep(&mut working, &self.config, &mut self.rng)
        } else {
            Vec::new()
        };

        debug!(%actor, action = %action.name, %outcome, "action processed");
        if wrapped {
            debug!(round = working.round, "round complete");
        }

        let record = TransitionRecord {
            round: submitted_round,
            actor,
            action: action.name.clone(),
            outcome,
            probability,
            multiplier,
            effects,
            citation: action.citation.clone(),
            upkeep,
        };

        self.state = working;
        self.log.push(record);
        Ok(self.log.last().unwrap())
    }

    // === Views ===

    #[must_use]
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    #[must_use]
    pub fn log(&self) -> &[TransitionRecord] {
        &self.log
    }

    #[must_use]
    pub fn current_role(&self) -> Role {
        self.state.turn
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round
    }

    #[must_use]
    pub fn goal_reached(&self) -> bool {
        self.state.goal_reached(&self.config.goal)
    }

    #[must_use]
    pub fn goal_message(&self) -> String {
        self.state.goal_message(&self.config.goal)
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Actions `role` may submit, in catalog order.
    pub fn actions_for(&self, role: Role) -> impl Iterator<Item = &ActionDef> + '_ {
        self.catalog.for_role(role).map(|id| self.catalog.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ActionDef;
    use crate::core::field::Field;
    use crate::core::rng::ScriptedRng;

    fn mini_catalog() -> Catalog {
        let actions = vec![
            ActionDef::new("Forum", Role::Neighborhoods)
                .with_cost(Role::Neighborhoods, 30.0)
                .with_delta(Field::LegalPressure, -2.0)
                .with_citation("A source."),
            ActionDef::new("Microgrants", Role::Business)
                .with_cost(Role::Business, 120.0)
                .with_delta(Field::EconomyIndex, 1.2),
            ActionDef::new("Clinics", Role::Medical)
                .with_cost(Role::Medical, 160.0)
                .with_delta(Field::MedicalVans, 2.0),
            ActionDef::new("Vans", Role::Shelters)
                .with_cost(Role::Shelters, 90.0)
                .with_delta(Field::OutreachTeams, 2.0),
            ActionDef::new("Dashboard", Role::University)
                .with_cost(Role::University, 50.0)
                .with_delta(Field::PolicyMomentum, 0.8),
        ];
        Catalog::new(actions).unwrap()
    }

    fn funded_state() -> WorldState {
        let mut state = WorldState::new();
        state.public_support = 52.0;
        state.economy_index = 100.0;
        state.operating_obligation = 100.0;
        for role in Role::ALL {
            state.budgets[role] = 500.0;
        }
        state
    }

    fn scripted(draws: &[f64]) -> Simulation<ScriptedRng> {
        Simulation::with_rng(
            mini_catalog(),
            funded_state(),
            SimConfig::default(),
            ScriptedRng::new(draws),
        )
    }

    #[test]
    fn test_submit_builds_record_and_advances_turn() {
        let mut sim = scripted(&[0.1]);

        let record = sim.submit(Role::Neighborhoods, "Forum").unwrap();

        assert_eq!(record.round, 0);
        assert_eq!(record.actor, Role::Neighborhoods);
        assert_eq!(record.outcome, Outcome::Success);
        assert_eq!(record.multiplier, 1.0);
        assert_eq!(record.citation, "A source.");
        assert!(record.upkeep.is_empty());

        assert_eq!(sim.current_role(), Role::Business);
        assert_eq!(sim.round(), 0);
        assert_eq!(sim.state().budgets[Role::Neighborhoods], 470.0);
        assert_eq!(sim.log().len(), 1);
    }

    #[test]
    fn test_out_of_turn_rejected_without_state_change() {
        let mut sim = scripted(&[]);
        let before = sim.state().clone();

        let err = sim.submit(Role::Medical, "Clinics").unwrap_err();

        assert_eq!(
            err,
            SubmitError::OutOfTurn {
                actor: Role::Medical,
                current: Role::Neighborhoods
            }
        );
        assert_eq!(sim.state(), &before);
        assert!(sim.log().is_empty());
    }

    #[test]
    fn test_unknown_action_rejected() {
        let mut sim = scripted(&[]);

        let err = sim.submit(Role::Neighborhoods, "Blockade").unwrap_err();

        assert_eq!(
            err,
            SubmitError::UnknownAction {
                name: "Blockade".to_string()
            }
        );
        assert_eq!(sim.current_role(), Role::Neighborhoods);
    }

    #[test]
    fn test_role_mismatch_rejected() {
        let mut sim = scripted(&[]);

        let err = sim.submit(Role::Neighborhoods, "Clinics").unwrap_err();

        assert_eq!(
            err,
            SubmitError::RoleMismatch {
                action: "Clinics".to_string(),
                owner: Role::Medical,
                actor: Role::Neighborhoods
            }
        );
        assert!(sim.log().is_empty());
    }

    #[test]
    fn test_unfunded_action_fails_but_consumes_turn() {
        let mut sim = scripted(&[]);
        sim.state.budgets[Role::Neighborhoods] = 0.0;

        let record = sim.submit(Role::Neighborhoods, "Forum").unwrap();

        assert_eq!(record.outcome, Outcome::Failed);
        assert_eq!(record.probability, 0.0);
        assert_eq!(record.multiplier, 0.0);
        assert_eq!(
            record.effects,
            vec!["action failed: insufficient budget".to_string()]
        );
        assert_eq!(sim.current_role(), Role::Business);
        assert!(sim.state().last_action.contains("lacked funding"));
    }

    #[test]
    fn test_fifth_action_wraps_round_and_runs_upkeep() {
        // One success roll per action, then the upkeep shock draw.
        let mut sim = scripted(&[0.1, 0.1, 0.1, 0.1, 0.1, 0.9]);

        sim.submit(Role::Neighborhoods, "Forum").unwrap();
        sim.submit(Role::Business, "Microgrants").unwrap();
        sim.submit(Role::Medical, "Clinics").unwrap();
        sim.submit(Role::Shelters, "Vans").unwrap();
        let record = sim.submit(Role::University, "Dashboard").unwrap();

        assert_eq!(record.round, 0);
        assert!(!record.upkeep.is_empty());
        assert!(record.upkeep[0].starts_with("tax: +"));
        assert_eq!(sim.round(), 1);
        assert_eq!(sim.current_role(), Role::Neighborhoods);
        assert_eq!(sim.state().trend_history.len(), 1);
    }

    #[test]
    fn test_partial_outcome_recorded() {
        // Fail the roll, then draw the partial multiplier.
        let mut sim = scripted(&[0.99, 0.5]);

        let record = sim.submit(Role::Neighborhoods, "Forum").unwrap();

        assert_eq!(record.outcome, Outcome::Partial);
        assert!((record.multiplier - 0.5).abs() < 1e-9);
        assert!(sim.state().last_action.contains("(partial)"));
    }

    #[test]
    fn test_actions_for_lists_role_catalog() {
        let sim = scripted(&[]);
        let names: Vec<&str> = sim
            .actions_for(Role::Business)
            .map(|action| action.name.as_str())
            .collect();

        assert_eq!(names, vec!["Microgrants"]);
    }

    #[test]
    fn test_seeded_simulation_reproducible() {
        let run = |seed: u64| {
            let mut sim = Simulation::new(
                mini_catalog(),
                funded_state(),
                SimConfig::default(),
                seed,
            );
            sim.submit(Role::Neighborhoods, "Forum").unwrap();
            sim.submit(Role::Business, "Microgrants").unwrap();
            sim.state().clone()
        };

        assert_eq!(run(42), run(42));
    }
}
