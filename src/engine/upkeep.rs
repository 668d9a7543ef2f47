//! Round upkeep: the macro update applied when the turn cycle wraps.
//!
//! Steps run in a fixed order on the same working state, so each one
//! sees its predecessors' mutations: tax income, discretionary grant,
//! economic shock, fatigue decay, shortfall degradation, construction
//! advance, trend recording.

use crate::core::config::SimConfig;
use crate::core::field::Field;
use crate::core::rng::RandomSource;
use crate::core::role::Role;
use crate::core::state::WorldState;

use super::construction;

/// Economy swing of a recession or boom, in index points.
const SHOCK_ECONOMY_SWING: (f64, f64) = (5.0, 12.0);
/// Public-support swing accompanying a recession or boom.
const SHOCK_SUPPORT_SWING: (f64, f64) = (2.0, 6.0);

/// Run the full round-boundary update, returning its log lines.
pub fn run_round_upkeep<R: RandomSource>(
    state: &mut WorldState,
    config: &SimConfig,
    rng: &mut R,
) -> Vec<String> {
    let mut lines = Vec::new();

    // 1. Tax income, split evenly across the pools.
    let tax = (state.economy_index * config.tax_rate).max(0.0);
    let share = tax / Role::COUNT as f64;
    for role in Role::ALL {
        state.apply_delta(Field::Budget(role), share);
    }
    lines.push(format!("tax: +{tax:.1} split across budgets"));

    // 2. Momentum above the threshold can attract an outside grant.
    if state.policy_momentum > config.grant_threshold && rng.chance(config.grant_chance) {
        let role = Role::ALL[rng.pick(Role::COUNT)];
        state.apply_delta(Field::Budget(role), config.grant_amount);
        state.apply_delta(Field::Debt, -config.grant_amount);
        lines.push(format!("grant: +{:.1} to {role}", config.grant_amount));
    }

    // 3. At most one economic shock per round.
    if rng.chance(config.shock_chance) {
        match rng.pick(3) {
            0 => {
                let economy = rng.range(SHOCK_ECONOMY_SWING.0, SHOCK_ECONOMY_SWING.1);
                let support = rng.range(SHOCK_SUPPORT_SWING.0, SHOCK_SUPPORT_SWING.1);
                state.apply_delta(Field::EconomyIndex, -economy);
                state.apply_delta(Field::PublicSupport, -support);
                lines.push(format!(
                    "shock: recession (economy -{economy:.1}, support -{support:.1})"
                ));
            }
            1 => {
                let economy = rng.range(SHOCK_ECONOMY_SWING.0, SHOCK_ECONOMY_SWING.1);
                let support = rng.range(SHOCK_SUPPORT_SWING.0, SHOCK_SUPPORT_SWING.1);
                state.apply_delta(Field::EconomyIndex, economy);
                state.apply_delta(Field::PublicSupport, support);
                lines.push(format!(
                    "shock: boom (economy +{economy:.1}, support +{support:.1})"
                ));
            }
            _ => {
                state.operating_obligation *= config.inflation_factor;
                lines.push(format!(
                    "shock: inflation (obligation now {:.1})",
                    state.operating_obligation
                ));
            }
        }
    }

    // 4. Fatigue decays toward zero.
    state.apply_delta(Field::PolicyFatigue, -config.fatigue_decay);

    // 5. Budgets short of the operating obligation degrade shelter stock.
    let total = state.total_budget();
    if total < state.operating_obligation {
        let ratio = ((state.operating_obligation - total) / state.operating_obligation).min(1.0);
        let loss = (f64::from(state.shelter_capacity) * ratio * config.degradation_rate).round();
        if loss > 0.0 {
            let before = state.shelter_capacity;
            state.apply_delta(Field::ShelterCapacity, -loss);
            lines.push(format!(
                "shortfall: shelter capacity -{}",
                before - state.shelter_capacity
            ));
        }
    }

    // 6. Construction ticks once per round.
    lines.extend(construction::advance(state));

    // 7. Trend history picks up the closing total.
    state.record_trend();

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedRng;
    use crate::core::state::HousingTier;

    fn funded_state() -> WorldState {
        let mut state = WorldState::new();
        state.economy_index = 100.0;
        state.public_support = 52.0;
        state.operating_obligation = 500.0;
        for role in Role::ALL {
            state.budgets[role] = 400.0;
        }
        state
    }

    #[test]
    fn test_tax_split_evenly() {
        let mut state = funded_state();
        let mut rng = ScriptedRng::new(&[0.9]); // no shock

        let lines = run_round_upkeep(&mut state, &SimConfig::default(), &mut rng);

        for role in Role::ALL {
            assert_eq!(state.budgets[role], 450.0);
        }
        assert_eq!(lines[0], "tax: +250.0 split across budgets");
    }

    #[test]
    fn test_grant_requires_momentum_over_threshold() {
        let mut state = funded_state();
        state.policy_momentum = 5.0; // not strictly above
        let mut rng = ScriptedRng::new(&[0.9]); // shock draw only

        run_round_upkeep(&mut state, &SimConfig::default(), &mut rng);

        assert_eq!(rng.remaining(), 0);
        assert_eq!(state.debt, 0.0);
    }

    #[test]
    fn test_grant_awarded() {
        let mut state = funded_state();
        state.policy_momentum = 6.0;
        // grant fires, lands on Medical, no shock
        let mut rng = ScriptedRng::new(&[0.1, 0.5, 0.9]);

        let lines = run_round_upkeep(&mut state, &SimConfig::default(), &mut rng);

        assert_eq!(state.budgets[Role::Medical], 400.0 + 50.0 + 150.0);
        assert_eq!(state.debt, -150.0);
        assert!(lines.contains(&"grant: +150.0 to Medical".to_string()));
    }

    #[test]
    fn test_recession_shock() {
        let mut state = funded_state();
        // shock fires, variant 0, economy swing 8.5, support swing 4.0
        let mut rng = ScriptedRng::new(&[0.1, 0.0, 0.5, 0.5]);

        let lines = run_round_upkeep(&mut state, &SimConfig::default(), &mut rng);

        assert_eq!(state.economy_index, 91.5);
        assert_eq!(state.public_support, 48.0);
        assert!(lines.contains(&"shock: recession (economy -8.5, support -4.0)".to_string()));
    }

    #[test]
    fn test_boom_shock() {
        let mut state = funded_state();
        let mut rng = ScriptedRng::new(&[0.1, 0.5, 0.5, 0.5]);

        let lines = run_round_upkeep(&mut state, &SimConfig::default(), &mut rng);

        assert_eq!(state.economy_index, 108.5);
        assert_eq!(state.public_support, 56.0);
        assert!(lines.iter().any(|line| line.starts_with("shock: boom")));
    }

    #[test]
    fn test_inflation_shock() {
        let mut state = funded_state();
        let mut rng = ScriptedRng::new(&[0.1, 0.9]);

        let lines = run_round_upkeep(&mut state, &SimConfig::default(), &mut rng);

        assert_eq!(state.operating_obligation, 625.0);
        assert!(lines.contains(&"shock: inflation (obligation now 625.0)".to_string()));
    }

    #[test]
    fn test_fatigue_decays_to_floor() {
        let mut state = funded_state();
        state.policy_fatigue = 0.1;
        let mut rng = ScriptedRng::new(&[0.9]);

        run_round_upkeep(&mut state, &SimConfig::default(), &mut rng);

        assert_eq!(state.policy_fatigue, 0.0);
    }

    #[test]
    fn test_shortfall_degrades_shelter_capacity() {
        let mut state = funded_state();
        state.shelter_capacity = 1400;
        state.economy_index = 0.0; // no tax income
        for role in Role::ALL {
            state.budgets[role] = 20.0; // total 100 against obligation 500
        }
        let mut rng = ScriptedRng::new(&[0.9]);

        let lines = run_round_upkeep(&mut state, &SimConfig::default(), &mut rng);

        // ratio 0.8 of obligation, 10% degradation: 1400 * 0.8 * 0.1 = 112
        assert_eq!(state.shelter_capacity, 1288);
        assert!(lines.contains(&"shortfall: shelter capacity -112".to_string()));
    }

    #[test]
    fn test_solvent_budgets_skip_degradation() {
        let mut state = funded_state();
        state.shelter_capacity = 1400;
        let mut rng = ScriptedRng::new(&[0.9]);

        let lines = run_round_upkeep(&mut state, &SimConfig::default(), &mut rng);

        assert_eq!(state.shelter_capacity, 1400);
        assert!(!lines.iter().any(|line| line.starts_with("shortfall")));
    }

    #[test]
    fn test_construction_ticks_and_trend_recorded() {
        let mut state = funded_state();
        state.pop_families = 100;
        state.recompute_total();
        construction::enqueue(&mut state, HousingTier::Transitional, 60, 1.0);
        let mut rng = ScriptedRng::new(&[0.9]);

        let lines = run_round_upkeep(&mut state, &SimConfig::default(), &mut rng);

        assert_eq!(state.transitional_units, 60);
        assert!(lines.contains(&"construction complete: +60 transitional units".to_string()));
        assert_eq!(state.trend_history.len(), 1);
        assert_eq!(state.trend_history[0], 100);
    }
}
