//! Outcome resolution: success probability and effect multiplier.

use crate::core::record::Outcome;
use crate::core::rng::RandomSource;
use crate::core::state::WorldState;

/// Floor applied to every success probability.
pub const MIN_PROBABILITY: f64 = 0.05;
/// Ceiling applied to every success probability.
pub const MAX_PROBABILITY: f64 = 0.98;

/// How a funded action resolved: the outcome, the probability it was
/// rolled against, and the multiplier its effects are scaled by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub outcome: Outcome,
    pub probability: f64,
    pub multiplier: f64,
}

/// Roll an action's outcome.
///
/// The base probability rewards momentum and public support and
/// penalizes fatigue, then subtracts the action's difficulty. The result
/// is clamped, scaled by the funding fraction (half weight fixed, half
/// proportional), and clamped again, so even a fully starved long shot
/// keeps a 5% floor and a sure thing never exceeds 98%.
///
/// A failed roll does not void the action: it lands as `Partial` with a
/// multiplier drawn from `0.25..0.75` of the funding fraction.
pub fn resolve<R: RandomSource>(
    state: &WorldState,
    difficulty: f64,
    funding_fraction: f64,
    rng: &mut R,
) -> Resolution {
    let base = 0.35
        + 0.03 * state.policy_momentum
        + 0.01 * (state.public_support - 40.0)
        - 0.05 * state.policy_fatigue;

    let unscaled = (base - difficulty).clamp(MIN_PROBABILITY, MAX_PROBABILITY);
    let probability = (unscaled * (0.5 + 0.5 * funding_fraction))
        .clamp(MIN_PROBABILITY, MAX_PROBABILITY);

    if rng.unit() <= probability {
        Resolution {
            outcome: Outcome::Success,
            probability,
            multiplier: 1.0,
        }
    } else {
        Resolution {
            outcome: Outcome::Partial,
            probability,
            multiplier: funding_fraction * rng.range(0.25, 0.75),
        }
    }
}
