//! Budget ledger: two-pass charging of multi-pool action costs.

use crate::catalog::CostMap;
use crate::core::state::WorldState;

/// Result of charging an action's cost against the budget pools.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Funding {
    /// Some charged pool was completely empty; nothing was deducted.
    Rejected,
    /// All pools were charged. `fraction` is the minimum fill ratio
    /// across them, 1.0 when every pool covered its share in full.
    Funded { fraction: f64 },
}

/// Charge `cost` against the state's budget pools.
///
/// Pass one computes the funding fraction (the worst pool's
/// `available / required`, capped at 1.0) without touching the state.
/// A fraction of exactly zero rejects the action outright. Pass two
/// deducts the full required amount from each pool, flooring at zero,
/// so a partially funded action still drains what was there.
pub fn charge(state: &mut WorldState, cost: &CostMap) -> Funding {
    let mut fraction = 1.0f64;
    for (role, required) in cost.iter() {
        if required > 0.0 {
            let ratio = (state.budgets[role] / required).min(1.0);
            fraction = fraction.min(ratio);
        }
    }

    if fraction == 0.0 {
        return Funding::Rejected;
    }

    for (role, required) in cost.iter() {
        state.budgets[role] = (state.budgets[role] - required).max(0.0);
    }

    Funding::Funded { fraction }
}
