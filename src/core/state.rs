//! World state: the single mutable aggregate of all simulation quantities.
//!
//! ## WorldState
//!
//! One snapshot holds the demographic counts, housing capacities, service
//! resources, budget pools, sentiment metrics, construction pipeline, and
//! turn/round progression. Collections use `im` persistent structures so
//! the copy-on-transition clone taken for each action is cheap.
//!
//! `total_homeless` is derived: it is recomputed from the four
//! subpopulations after every mutation and never adjusted directly.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::GoalConfig;
use super::field::Field;
use super::role::{Role, RoleMap};

/// Housing tier a construction job builds toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HousingTier {
    Shelter,
    Transitional,
    Permanent,
}

impl HousingTier {
    /// The capacity field this tier commits units to.
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            HousingTier::Shelter => Field::ShelterCapacity,
            HousingTier::Transitional => Field::TransitionalUnits,
            HousingTier::Permanent => Field::PermanentUnits,
        }
    }
}

impl std::fmt::Display for HousingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HousingTier::Shelter => "shelter beds",
            HousingTier::Transitional => "transitional units",
            HousingTier::Permanent => "permanent units",
        };
        write!(f, "{name}")
    }
}

/// A pending capacity build.
///
/// `rounds_remaining` decreases by exactly 1 per round; the job commits
/// its units and leaves the pipeline when it reaches zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionJob {
    pub tier: HousingTier,
    pub units: u32,
    pub rounds_remaining: u32,
}

/// Snapshot of all simulation quantities.
///
/// Exclusively owned by the simulation controller; every processed action
/// produces a new value derived from the prior one, so the transition log
/// sits over an append-only sequence of immutable snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    // === Progression ===
    /// Completed full role cycles.
    pub round: u32,

    /// The role whose turn it is. The single authoritative turn field;
    /// every current-role view derives from it.
    pub turn: Role,

    // === Demographics ===
    pub pop_families: u32,
    pub pop_youth: u32,
    pub pop_chronic: u32,
    pub pop_veterans: u32,

    /// Derived sum of the four subpopulations. Never mutated directly;
    /// call [`WorldState::recompute_total`] after changing any component.
    pub total_homeless: u32,

    // === Housing ===
    pub shelter_capacity: u32,
    pub transitional_units: u32,
    pub permanent_units: u32,

    /// Pending capacity builds, in enqueue order.
    pub pipeline: Vector<ConstructionJob>,

    // === Service resources ===
    pub social_workers: u32,
    pub outreach_teams: u32,
    pub medical_vans: u32,

    // === Money ===
    /// Budget pools in thousands, one per role. Never negative.
    pub budgets: RoleMap<f64>,

    /// Accumulated debt; negative values represent surplus.
    pub debt: f64,

    /// Recurring upkeep compared against the summed budgets each round.
    pub operating_obligation: f64,

    // === Sentiment metrics ===
    pub public_support: f64,
    pub economy_index: f64,
    pub legal_pressure: f64,
    pub policy_momentum: f64,
    pub policy_fatigue: f64,

    // === History ===
    /// FIFO of past total-homeless snapshots, capped at
    /// [`WorldState::TREND_CAPACITY`].
    pub trend_history: Vector<u32>,

    /// Human-readable one-liner describing the most recent action.
    pub last_action: String,
}

impl WorldState {
    /// Maximum trend history length; the oldest entry is evicted past this.
    pub const TREND_CAPACITY: usize = 10;

    /// Create an empty city: all counts and pools at zero, turn at the
    /// first role of the cycle.
    ///
    /// Scenario modules provide populated starting states.
    #[must_use]
    pub fn new() -> Self {
        Self {
            round: 0,
            turn: Role::ALL[0],
            pop_families: 0,
            pop_youth: 0,
            pop_chronic: 0,
            pop_veterans: 0,
            total_homeless: 0,
            shelter_capacity: 0,
            transitional_units: 0,
            permanent_units: 0,
            pipeline: Vector::new(),
            social_workers: 0,
            outreach_teams: 0,
            medical_vans: 0,
            budgets: RoleMap::with_value(0.0),
            debt: 0.0,
            operating_obligation: 0.0,
            public_support: 0.0,
            economy_index: 0.0,
            legal_pressure: 0.0,
            policy_momentum: 0.0,
            policy_fatigue: 0.0,
            trend_history: Vector::new(),
            last_action: String::new(),
        }
    }

    // === Field access ===

    /// Read a field's value as `f64` (counts widen losslessly).
    #[must_use]
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::PopFamilies => f64::from(self.pop_families),
            Field::PopYouth => f64::from(self.pop_youth),
            Field::PopChronic => f64::from(self.pop_chronic),
            Field::PopVeterans => f64::from(self.pop_veterans),
            Field::ShelterCapacity => f64::from(self.shelter_capacity),
            Field::TransitionalUnits => f64::from(self.transitional_units),
            Field::PermanentUnits => f64::from(self.permanent_units),
            Field::SocialWorkers => f64::from(self.social_workers),
            Field::OutreachTeams => f64::from(self.outreach_teams),
            Field::MedicalVans => f64::from(self.medical_vans),
            Field::PublicSupport => self.public_support,
            Field::EconomyIndex => self.economy_index,
            Field::LegalPressure => self.legal_pressure,
            Field::PolicyMomentum => self.policy_momentum,
            Field::PolicyFatigue => self.policy_fatigue,
            Field::Debt => self.debt,
            Field::Budget(role) => self.budgets[role],
        }
    }

    /// Add a (possibly scaled) delta to a field under its write policy:
    /// counts round to the nearest integer and floor at zero, metrics
    /// clamp to their range, budgets stay non-negative, debt is unbounded.
    pub fn apply_delta(&mut self, field: Field, amount: f64) {
        match field {
            Field::PopFamilies => self.pop_families = add_count(self.pop_families, amount),
            Field::PopYouth => self.pop_youth = add_count(self.pop_youth, amount),
            Field::PopChronic => self.pop_chronic = add_count(self.pop_chronic, amount),
            Field::PopVeterans => self.pop_veterans = add_count(self.pop_veterans, amount),
            Field::ShelterCapacity => {
                self.shelter_capacity = add_count(self.shelter_capacity, amount);
            }
            Field::TransitionalUnits => {
                self.transitional_units = add_count(self.transitional_units, amount);
            }
            Field::PermanentUnits => {
                self.permanent_units = add_count(self.permanent_units, amount);
            }
            Field::SocialWorkers => self.social_workers = add_count(self.social_workers, amount),
            Field::OutreachTeams => self.outreach_teams = add_count(self.outreach_teams, amount),
            Field::MedicalVans => self.medical_vans = add_count(self.medical_vans, amount),
            Field::PublicSupport => {
                self.public_support = clamped(field, self.public_support + amount);
            }
            Field::EconomyIndex => {
                self.economy_index = clamped(field, self.economy_index + amount);
            }
            Field::LegalPressure => {
                self.legal_pressure = clamped(field, self.legal_pressure + amount);
            }
            Field::PolicyMomentum => {
                self.policy_momentum = clamped(field, self.policy_momentum + amount);
            }
            Field::PolicyFatigue => {
                self.policy_fatigue = clamped(field, self.policy_fatigue + amount);
            }
            Field::Debt => self.debt += amount,
            Field::Budget(role) => {
                self.budgets[role] = (self.budgets[role] + amount).max(0.0);
            }
        }
    }

    // === Derived quantities ===

    /// Recompute `total_homeless` from the four subpopulations.
    pub fn recompute_total(&mut self) {
        self.total_homeless =
            self.pop_families + self.pop_youth + self.pop_chronic + self.pop_veterans;
    }

    /// Sum of all budget pools.
    #[must_use]
    pub fn total_budget(&self) -> f64 {
        self.budgets.values().sum()
    }

    /// The role whose turn it is (read-only projection of `turn`).
    #[must_use]
    pub fn current_role(&self) -> Role {
        self.turn
    }

    // === Progression ===

    /// Advance the turn pointer to the next role in the cycle.
    ///
    /// Returns `true` when the pointer wrapped back to the first role,
    /// which also increments the round counter.
    pub fn advance_turn(&mut self) -> bool {
        self.turn = self.turn.next();
        if self.turn == Role::ALL[0] {
            self.round += 1;
            true
        } else {
            false
        }
    }

    /// Append the current homeless total to the trend history, evicting
    /// the oldest entry past [`WorldState::TREND_CAPACITY`].
    pub fn record_trend(&mut self) {
        self.trend_history.push_back(self.total_homeless);
        while self.trend_history.len() > Self::TREND_CAPACITY {
            self.trend_history.pop_front();
        }
    }

    // === Goal evaluation ===

    /// Whether the configured end-state holds.
    #[must_use]
    pub fn goal_reached(&self, goal: &GoalConfig) -> bool {
        self.total_homeless <= goal.homeless_target
            && self.public_support >= goal.support_floor
            && self.legal_pressure < goal.pressure_ceiling
    }

    /// Goal banner, empty while the goal is unmet.
    #[must_use]
    pub fn goal_message(&self, goal: &GoalConfig) -> String {
        if self.goal_reached(goal) {
            format!(
                "Goal: homeless {}, support {:.1}%, legal {:.1}",
                self.total_homeless, self.public_support, self.legal_pressure
            )
        } else {
            String::new()
        }
    }

    // === Diffing ===

    /// Textual diff of every scalar field that changed between `self`
    /// (the before state) and `after`, in declaration order.
    ///
    /// Counts print as integers, metrics to two decimals, money to one.
    #[must_use]
    pub fn diff(&self, after: &WorldState) -> Vec<String> {
        let mut lines = Vec::new();

        diff_count(&mut lines, "pop_families", self.pop_families, after.pop_families);
        diff_count(&mut lines, "pop_youth", self.pop_youth, after.pop_youth);
        diff_count(&mut lines, "pop_chronic", self.pop_chronic, after.pop_chronic);
        diff_count(&mut lines, "pop_veterans", self.pop_veterans, after.pop_veterans);
        diff_count(&mut lines, "total_homeless", self.total_homeless, after.total_homeless);
        diff_count(
            &mut lines,
            "shelter_capacity",
            self.shelter_capacity,
            after.shelter_capacity,
        );
        diff_count(
            &mut lines,
            "transitional_units",
            self.transitional_units,
            after.transitional_units,
        );
        diff_count(
            &mut lines,
            "permanent_units",
            self.permanent_units,
            after.permanent_units,
        );
        diff_count(&mut lines, "social_workers", self.social_workers, after.social_workers);
        diff_count(&mut lines, "outreach_teams", self.outreach_teams, after.outreach_teams);
        diff_count(&mut lines, "medical_vans", self.medical_vans, after.medical_vans);

        for (role, before) in self.budgets.iter() {
            diff_money(&mut lines, role.budget_label(), *before, after.budgets[role]);
        }

        diff_metric(&mut lines, "public_support", self.public_support, after.public_support);
        diff_metric(&mut lines, "economy_index", self.economy_index, after.economy_index);
        diff_metric(&mut lines, "legal_pressure", self.legal_pressure, after.legal_pressure);
        diff_metric(&mut lines, "policy_momentum", self.policy_momentum, after.policy_momentum);
        diff_metric(&mut lines, "policy_fatigue", self.policy_fatigue, after.policy_fatigue);
        diff_money(&mut lines, "debt", self.debt, after.debt);
        diff_money(
            &mut lines,
            "operating_obligation",
            self.operating_obligation,
            after.operating_obligation,
        );

        lines
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WorldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Round {} - Turn: {}", self.round, self.turn)?;
        writeln!(
            f,
            "Total Homeless: {} (f:{}, y:{}, c:{}, v:{})",
            self.total_homeless,
            self.pop_families,
            self.pop_youth,
            self.pop_chronic,
            self.pop_veterans
        )?;
        writeln!(
            f,
            "Capacity: shelter {}, trans {}, perm {}",
            self.shelter_capacity, self.transitional_units, self.permanent_units
        )?;
        writeln!(
            f,
            "Budgets (k$): S={:.0}, N={:.0}, B={:.0}, M={:.0}, U={:.0}",
            self.budgets[Role::Shelters],
            self.budgets[Role::Neighborhoods],
            self.budgets[Role::Business],
            self.budgets[Role::Medical],
            self.budgets[Role::University]
        )?;
        writeln!(
            f,
            "Public support: {:.1}%, Economy: {:.1}, Legal pressure: {:.1}",
            self.public_support, self.economy_index, self.legal_pressure
        )?;
        writeln!(
            f,
            "Debt: ${:.0}k, Momentum: {:.1}",
            self.debt, self.policy_momentum
        )?;
        writeln!(f, "Last action: {}", self.last_action)
    }
}

/// Add a rounded delta to a count, flooring at zero.
fn add_count(current: u32, delta: f64) -> u32 {
    let next = i64::from(current) + delta.round() as i64;
    next.max(0) as u32
}

/// Clamp a metric to its field range, passing other fields through.
fn clamped(field: Field, value: f64) -> f64 {
    match field.clamp_range() {
        Some((lo, hi)) => value.clamp(lo, hi),
        None => value,
    }
}

fn diff_count(lines: &mut Vec<String>, label: &str, before: u32, after: u32) {
    if before != after {
        lines.push(format!("{label}: {before} -> {after}"));
    }
}

fn diff_metric(lines: &mut Vec<String>, label: &str, before: f64, after: f64) {
    let b = format!("{before:.2}");
    let a = format!("{after:.2}");
    if b != a {
        lines.push(format!("{label}: {b} -> {a}"));
    }
}

fn diff_money(lines: &mut Vec<String>, label: &str, before: f64, after: f64) {
    let b = format!("{before:.1}");
    let a = format!("{after:.1}");
    if b != a {
        lines.push(format!("{label}: {b} -> {a}"));
    }
}
