//! Simulation configuration.
//!
//! Callers configure the engine at startup by providing:
//! - `SimConfig`: macro-update rates, shock odds, and the construction
//!   delay factor
//! - `GoalConfig`: the end-state the simulation is judged against
//!
//! Defaults carry the standard city scenario constants; individual knobs
//! can be adjusted through `with_*` builders.

use serde::{Deserialize, Serialize};

/// End-state the simulation is judged against.
///
/// The goal holds when total homelessness is at or below the target,
/// public support is at or above the floor, and legal pressure is
/// strictly below the ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoalConfig {
    /// Maximum acceptable total homeless count.
    pub homeless_target: u32,

    /// Minimum acceptable public support percentage.
    pub support_floor: f64,

    /// Legal pressure must stay strictly below this value.
    pub pressure_ceiling: f64,
}

impl Default for GoalConfig {
    /// A 20% reduction from the initial homeless population of 10700,
    /// with support held above 45% and legal pressure below 25.
    fn default() -> Self {
        Self {
            homeless_target: 8560,
            support_floor: 45.0,
            pressure_ceiling: 25.0,
        }
    }
}

/// Engine tuning knobs.
///
/// ## Example
///
/// ```
/// use citywalls::core::SimConfig;
///
/// let config = SimConfig::default()
///     .with_shock_chance(0.0)
///     .with_build_delay_factor(1.0);
///
/// assert_eq!(config.shock_chance, 0.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Multiplier on the economy index for per-round tax inflow.
    pub tax_rate: f64,

    /// Policy momentum must exceed this for a grant to be possible.
    pub grant_threshold: f64,

    /// Probability of a grant once the momentum threshold is met.
    pub grant_chance: f64,

    /// Grant size, credited to one budget pool and deducted from debt.
    pub grant_amount: f64,

    /// Probability that one economic shock fires in a round.
    pub shock_chance: f64,

    /// Operating-obligation multiplier applied by an inflation shock.
    pub inflation_factor: f64,

    /// Per-round policy fatigue decay, floored at zero.
    pub fatigue_decay: f64,

    /// Fraction of shelter capacity lost per unit of budget shortfall ratio.
    pub degradation_rate: f64,

    /// Rounds per 100 construction units (before the minimum of 1 round).
    pub build_delay_factor: f64,

    /// Goal evaluation constants.
    pub goal: GoalConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tax_rate: 2.5,
            grant_threshold: 5.0,
            grant_chance: 0.4,
            grant_amount: 150.0,
            shock_chance: 0.15,
            inflation_factor: 1.25,
            fatigue_decay: 0.2,
            degradation_rate: 0.10,
            build_delay_factor: 2.0,
            goal: GoalConfig::default(),
        }
    }
}

impl SimConfig {
    /// Set the per-round tax rate.
    #[must_use]
    pub fn with_tax_rate(mut self, rate: f64) -> Self {
        self.tax_rate = rate;
        self
    }

    /// Set the grant probability.
    #[must_use]
    pub fn with_grant_chance(mut self, chance: f64) -> Self {
        assert!((0.0..=1.0).contains(&chance), "Chance must be in [0, 1]");
        self.grant_chance = chance;
        self
    }

    /// Set the per-round shock probability.
    #[must_use]
    pub fn with_shock_chance(mut self, chance: f64) -> Self {
        assert!((0.0..=1.0).contains(&chance), "Chance must be in [0, 1]");
        self.shock_chance = chance;
        self
    }

    /// Set the construction delay factor.
    #[must_use]
    pub fn with_build_delay_factor(mut self, factor: f64) -> Self {
        assert!(factor > 0.0, "Delay factor must be positive");
        self.build_delay_factor = factor;
        self
    }

    /// Set the goal constants.
    #[must_use]
    pub fn with_goal(mut self, goal: GoalConfig) -> Self {
        self.goal = goal;
        self
    }
}
