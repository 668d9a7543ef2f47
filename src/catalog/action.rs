//! Action definitions: costs, effect specs, and the builder API scenarios
//! use to describe interventions.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::core::field::Field;
use crate::core::role::Role;
use crate::core::state::{HousingTier, WorldState};

/// Sparse multi-pool cost, in thousands.
///
/// Most actions charge a single pool and a handful charge two, so the
/// entries live inline. Setting a role twice overwrites the first amount.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CostMap {
    entries: SmallVec<[(Role, f64); 2]>,
}

impl CostMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the amount charged to `role`, replacing any prior entry.
    pub fn set(&mut self, role: Role, amount: f64) {
        for entry in &mut self.entries {
            if entry.0 == role {
                entry.1 = amount;
                return;
            }
        }
        self.entries.push((role, amount));
    }

    /// Amount charged to `role`, zero when absent.
    #[must_use]
    pub fn get(&self, role: Role) -> f64 {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .map_or(0.0, |(_, amount)| *amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum across all charged pools.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, amount)| amount).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Closure form of an effect: mutates the state under the outcome
/// multiplier and returns a short description, or an empty string when
/// nothing changed.
pub type ComputedEffect = Arc<dyn Fn(&mut WorldState, f64) -> String + Send + Sync>;

/// One effect of an action.
///
/// `Delta` and `Build` are declarative and scaled by the applier;
/// `Computed` owns its own scaling, which lets it read the live state
/// (percentage shrinks, displacement into another subpopulation).
#[derive(Clone)]
pub enum EffectSpec {
    /// Add `amount * multiplier` to a field under its write policy.
    Delta { field: Field, amount: f64 },
    /// Queue `units * multiplier` of capacity in the construction pipeline.
    Build { tier: HousingTier, units: u32 },
    Computed(ComputedEffect),
}

impl EffectSpec {
    #[must_use]
    pub fn delta(field: Field, amount: f64) -> Self {
        EffectSpec::Delta { field, amount }
    }

    #[must_use]
    pub fn build(tier: HousingTier, units: u32) -> Self {
        EffectSpec::Build { tier, units }
    }

    pub fn computed(
        f: impl Fn(&mut WorldState, f64) -> String + Send + Sync + 'static,
    ) -> Self {
        EffectSpec::Computed(Arc::new(f))
    }

    /// Reduce a count field by a percentage of its current value.
    ///
    /// The cut is `round(value * percent * multiplier / 100)`, floored at
    /// zero, so a weakened outcome shrinks the reduction proportionally.
    #[must_use]
    pub fn shrink_percent(field: Field, percent: f64) -> Self {
        Self::computed(move |state, multiplier| {
            let cut = (state.value(field) * percent * multiplier / 100.0)
                .round()
                .max(0.0);
            if cut == 0.0 {
                return String::new();
            }
            state.apply_delta(field, -cut);
            format!("{} -{}", field.short_label(), cut as u32)
        })
    }

    /// Push a percentage of the current homeless total into the chronic
    /// subpopulation. Models sweeps and restrictive ordinances that move
    /// people around instead of housing them.
    #[must_use]
    pub fn displace_into_chronic(percent: f64) -> Self {
        Self::computed(move |state, multiplier| {
            let added = (f64::from(state.total_homeless) * percent * multiplier / 100.0)
                .round()
                .max(0.0);
            if added == 0.0 {
                return String::new();
            }
            state.apply_delta(Field::PopChronic, added);
            format!("displaced +{} chronic", added as u32)
        })
    }
}

impl std::fmt::Debug for EffectSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectSpec::Delta { field, amount } => f
                .debug_struct("Delta")
                .field("field", field)
                .field("amount", amount)
                .finish(),
            EffectSpec::Build { tier, units } => f
                .debug_struct("Build")
                .field("tier", tier)
                .field("units", units)
                .finish(),
            EffectSpec::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A scenario intervention: what it costs, what it changes, how hard it
/// is to pull off, and the source it is grounded in.
///
/// ## Example
///
/// ```
/// use citywalls::catalog::ActionDef;
/// use citywalls::core::{Field, Role};
///
/// let action = ActionDef::new("Media Campaign", Role::Neighborhoods)
///     .with_cost(Role::Neighborhoods, 120.0)
///     .with_delta(Field::PublicSupport, 6.0)
///     .with_delta(Field::LegalPressure, -3.0)
///     .with_difficulty(0.15)
///     .with_citation("Example, A. (2020). Framing housing policy. Press.");
///
/// assert_eq!(action.cost.total(), 120.0);
/// assert_eq!(action.effects.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct ActionDef {
    pub name: String,
    /// Role allowed to submit this action.
    pub role: Role,
    pub cost: CostMap,
    pub effects: SmallVec<[EffectSpec; 4]>,
    /// Base success-probability penalty, validated into `0.0..=0.8`.
    pub difficulty: f64,
    /// APA-style citation attached to every transition this action logs.
    pub citation: String,
}

impl ActionDef {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            cost: CostMap::new(),
            effects: SmallVec::new(),
            difficulty: 0.0,
            citation: String::new(),
        }
    }

    #[must_use]
    pub fn with_cost(mut self, role: Role, amount: f64) -> Self {
        self.cost.set(role, amount);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: EffectSpec) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_delta(self, field: Field, amount: f64) -> Self {
        self.with_effect(EffectSpec::delta(field, amount))
    }

    #[must_use]
    pub fn with_build(self, tier: HousingTier, units: u32) -> Self {
        self.with_effect(EffectSpec::build(tier, units))
    }

    #[must_use]
    pub fn with_shrink(self, field: Field, percent: f64) -> Self {
        self.with_effect(EffectSpec::shrink_percent(field, percent))
    }

    #[must_use]
    pub fn with_displacement(self, percent: f64) -> Self {
        self.with_effect(EffectSpec::displace_into_chronic(percent))
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: f64) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_citation(mut self, citation: impl Into<String>) -> Self {
        self.citation = citation.into();
        self
    }
}
