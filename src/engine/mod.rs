//! Simulation engine: the pipeline that turns a submitted action into a
//! logged transition.
//!
//! A submission flows through validation, the budget [`ledger`], the
//! stochastic [`outcome`] resolver, the effect [`applier`], and on round
//! boundaries the [`upkeep`] pass. The [`controller`] owns the state and
//! sequences the stages.

pub mod applier;
pub mod construction;
pub mod controller;
pub mod ledger;
pub mod outcome;
pub mod upkeep;

pub use controller::{Simulation, SubmitError};
pub use ledger::{charge, Funding};
pub use outcome::{resolve, Resolution, MAX_PROBABILITY, MIN_PROBABILITY};
