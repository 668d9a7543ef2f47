//! Effect application: turns a resolved action into state mutations and
//! the textual effect lines of its transition record.

use crate::catalog::{ActionDef, EffectSpec};
use crate::core::config::SimConfig;
use crate::core::field::Field;
use crate::core::state::WorldState;

use super::construction;

/// Largest fatigue gain a single action can add.
const FATIGUE_GAIN_CAP: f64 = 0.5;

/// Apply `action`'s effects under `multiplier`, then the per-action
/// bookkeeping: recompute the homeless total, add cost-driven fatigue,
/// and credit momentum.
///
/// Returns the effect lines for the transition record: computed-effect
/// descriptions and queued-build notices in effect order, followed by
/// the field-level diff against the pre-action state.
pub fn apply(
    state: &mut WorldState,
    action: &ActionDef,
    multiplier: f64,
    config: &SimConfig,
) -> Vec<String> {
    let before = state.clone();
    let mut lines = Vec::new();

    for effect in &action.effects {
        match effect {
            EffectSpec::Delta { field, amount } => {
                state.apply_delta(*field, amount * multiplier);
            }
            EffectSpec::Build { tier, units } => {
                let scaled = (f64::from(*units) * multiplier).round() as u32;
                if scaled > 0 {
                    let rounds =
                        construction::enqueue(state, *tier, scaled, config.build_delay_factor);
                    let noun = if rounds == 1 { "round" } else { "rounds" };
                    lines.push(format!("queued {scaled} {tier}, due in {rounds} {noun}"));
                }
            }
            EffectSpec::Computed(f) => {
                let text = f(state, multiplier);
                if !text.is_empty() {
                    lines.push(text);
                }
            }
        }
    }

    state.recompute_total();

    // Spending wears the city out; acting at all builds momentum.
    let fatigue_gain = (0.02 * action.cost.total() / 100.0).min(FATIGUE_GAIN_CAP);
    state.apply_delta(Field::PolicyFatigue, fatigue_gain);
    state.apply_delta(Field::PolicyMomentum, 0.5 * multiplier);

    lines.extend(before.diff(state));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::role::Role;
    use crate::core::state::HousingTier;
    use proptest::prelude::*;

    fn seeded_state() -> WorldState {
        let mut state = WorldState::new();
        state.pop_families = 2800;
        state.pop_chronic = 3600;
        state.recompute_total();
        state.public_support = 52.0;
        state
    }

    #[test]
    fn test_deltas_scale_with_multiplier() {
        let mut state = seeded_state();
        let action = ActionDef::new("Media Campaign", Role::Neighborhoods)
            .with_cost(Role::Neighborhoods, 120.0)
            .with_delta(Field::PublicSupport, 6.0)
            .with_delta(Field::LegalPressure, -3.0);

        apply(&mut state, &action, 0.5, &SimConfig::default());

        assert_eq!(state.public_support, 55.0);
        assert_eq!(state.legal_pressure, 0.0); // floored by clamp
    }

    #[test]
    fn test_build_queues_scaled_units() {
        let mut state = seeded_state();
        let action = ActionDef::new("Emergency Shelter Expansion", Role::Shelters)
            .with_cost(Role::Shelters, 300.0)
            .with_build(HousingTier::Shelter, 300);

        let lines = apply(&mut state, &action, 1.0, &SimConfig::default());

        assert_eq!(state.pipeline.len(), 1);
        assert_eq!(state.pipeline[0].units, 300);
        assert_eq!(state.pipeline[0].rounds_remaining, 6);
        assert_eq!(state.shelter_capacity, 0);
        assert!(lines.contains(&"queued 300 shelter beds, due in 6 rounds".to_string()));
    }

    #[test]
    fn test_build_rounded_to_zero_is_skipped() {
        let mut state = seeded_state();
        let action = ActionDef::new("Tiny Pilot", Role::University)
            .with_build(HousingTier::Transitional, 40);

        let lines = apply(&mut state, &action, 0.01, &SimConfig::default());

        assert!(state.pipeline.is_empty());
        assert!(!lines.iter().any(|line| line.starts_with("queued")));
    }

    #[test]
    fn test_computed_description_precedes_diff() {
        let mut state = seeded_state();
        let action = ActionDef::new("Rapid Rehousing Boost", Role::Shelters)
            .with_cost(Role::Shelters, 200.0)
            .with_shrink(Field::PopFamilies, 9.0);

        let lines = apply(&mut state, &action, 1.0, &SimConfig::default());

        assert_eq!(lines[0], "families -252");
        assert!(lines.contains(&"pop_families: 2800 -> 2548".to_string()));
        assert!(lines.contains(&"total_homeless: 6400 -> 6148".to_string()));
    }

    #[test]
    fn test_total_recomputed_after_effects() {
        let mut state = seeded_state();
        let action = ActionDef::new("Outreach Surge", Role::Medical)
            .with_delta(Field::PopChronic, -200.0);

        apply(&mut state, &action, 1.0, &SimConfig::default());

        assert_eq!(state.pop_chronic, 3400);
        assert_eq!(state.total_homeless, 6200);
    }

    #[test]
    fn test_fatigue_and_momentum_bookkeeping() {
        let mut state = seeded_state();
        let action = ActionDef::new("Substance Use Treatment Expansion", Role::Medical)
            .with_cost(Role::Medical, 260.0)
            .with_delta(Field::PolicyMomentum, 2.8);

        apply(&mut state, &action, 1.0, &SimConfig::default());

        assert!((state.policy_fatigue - 0.052).abs() < 1e-9);
        assert!((state.policy_momentum - 3.3).abs() < 1e-9);
    }

    #[test]
    fn test_fatigue_gain_capped() {
        let mut state = seeded_state();
        let action = ActionDef::new("Megaproject", Role::Business)
            .with_cost(Role::Business, 5000.0);

        apply(&mut state, &action, 1.0, &SimConfig::default());

        assert_eq!(state.policy_fatigue, FATIGUE_GAIN_CAP);
    }

    #[test]
    fn test_free_action_still_gains_momentum() {
        let mut state = seeded_state();
        let action = ActionDef::new("Defer Maintenance", Role::Shelters)
            .with_delta(Field::ShelterCapacity, -40.0);

        apply(&mut state, &action, 1.0, &SimConfig::default());

        assert_eq!(state.policy_fatigue, 0.0);
        assert_eq!(state.policy_momentum, 0.5);
    }

    proptest! {
        #[test]
        fn test_total_tracks_subpopulations(
            families in -400.0..400.0f64,
            youth in -400.0..400.0f64,
            chronic in -400.0..400.0f64,
            veterans in -400.0..400.0f64,
            multiplier in 0.0..1.0f64,
        ) {
            let mut state = WorldState::new();
            state.pop_families = 2800;
            state.pop_youth = 1800;
            state.pop_chronic = 3600;
            state.pop_veterans = 1500;
            state.recompute_total();

            let action = ActionDef::new("Mixed Outreach Sweep", Role::Medical)
                .with_delta(Field::PopFamilies, families)
                .with_delta(Field::PopYouth, youth)
                .with_delta(Field::PopChronic, chronic)
                .with_delta(Field::PopVeterans, veterans);

            apply(&mut state, &action, multiplier, &SimConfig::default());

            let sum = state.pop_families
                + state.pop_youth
                + state.pop_chronic
                + state.pop_veterans;
            prop_assert_eq!(state.total_homeless, sum);
        }
    }
}
