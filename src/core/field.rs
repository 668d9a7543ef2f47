//! Addressable world-state fields.
//!
//! Effects target state quantities through the `Field` enum rather than
//! string keys, so a malformed catalog fails at startup validation instead
//! of at runtime. Each field carries its write policy: counts round to the
//! nearest integer and floor at zero, metrics clamp to a fixed range,
//! money fields stay non-negative (debt alone is unbounded).

use serde::{Deserialize, Serialize};

use super::role::Role;

/// A mutable scalar quantity of the world state, addressable by effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    // === Demographic counts ===
    PopFamilies,
    PopYouth,
    PopChronic,
    PopVeterans,

    // === Housing capacities ===
    ShelterCapacity,
    TransitionalUnits,
    PermanentUnits,

    // === Service resources ===
    SocialWorkers,
    OutreachTeams,
    MedicalVans,

    // === Sentiment and pressure metrics ===
    PublicSupport,
    EconomyIndex,
    LegalPressure,
    PolicyMomentum,
    PolicyFatigue,

    // === Money ===
    Debt,
    Budget(Role),
}

impl Field {
    /// Whether this field holds an integer count.
    ///
    /// Scaled deltas targeting a count are rounded to the nearest integer
    /// before application, and the result never drops below zero.
    #[must_use]
    pub const fn is_count(self) -> bool {
        matches!(
            self,
            Field::PopFamilies
                | Field::PopYouth
                | Field::PopChronic
                | Field::PopVeterans
                | Field::ShelterCapacity
                | Field::TransitionalUnits
                | Field::PermanentUnits
                | Field::SocialWorkers
                | Field::OutreachTeams
                | Field::MedicalVans
        )
    }

    /// Clamp range for metric fields, `None` for counts and money.
    #[must_use]
    pub const fn clamp_range(self) -> Option<(f64, f64)> {
        match self {
            Field::PublicSupport => Some((0.0, 100.0)),
            Field::EconomyIndex => Some((0.0, 200.0)),
            Field::LegalPressure => Some((0.0, 100.0)),
            Field::PolicyMomentum => Some((-10.0, 50.0)),
            Field::PolicyFatigue => Some((0.0, 10.0)),
            _ => None,
        }
    }

    /// Field name as it appears in textual diffs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Field::PopFamilies => "pop_families",
            Field::PopYouth => "pop_youth",
            Field::PopChronic => "pop_chronic",
            Field::PopVeterans => "pop_veterans",
            Field::ShelterCapacity => "shelter_capacity",
            Field::TransitionalUnits => "transitional_units",
            Field::PermanentUnits => "permanent_units",
            Field::SocialWorkers => "social_workers",
            Field::OutreachTeams => "outreach_teams",
            Field::MedicalVans => "medical_vans",
            Field::PublicSupport => "public_support",
            Field::EconomyIndex => "economy_index",
            Field::LegalPressure => "legal_pressure",
            Field::PolicyMomentum => "policy_momentum",
            Field::PolicyFatigue => "policy_fatigue",
            Field::Debt => "debt",
            Field::Budget(role) => role.budget_label(),
        }
    }

    /// Short population name for effect descriptions ("families", "youth").
    ///
    /// Falls back to [`Field::label`] for non-population fields.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Field::PopFamilies => "families",
            Field::PopYouth => "youth",
            Field::PopChronic => "chronic",
            Field::PopVeterans => "veterans",
            other => other.label(),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_fields() {
        assert!(Field::PopFamilies.is_count());
        assert!(Field::ShelterCapacity.is_count());
        assert!(Field::MedicalVans.is_count());
        assert!(!Field::PublicSupport.is_count());
        assert!(!Field::Debt.is_count());
        assert!(!Field::Budget(Role::Shelters).is_count());
    }

    #[test]
    fn test_clamp_ranges() {
        assert_eq!(Field::PublicSupport.clamp_range(), Some((0.0, 100.0)));
        assert_eq!(Field::PolicyMomentum.clamp_range(), Some((-10.0, 50.0)));
        assert_eq!(Field::PolicyFatigue.clamp_range(), Some((0.0, 10.0)));
        assert_eq!(Field::Debt.clamp_range(), None);
        assert_eq!(Field::PopYouth.clamp_range(), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Field::PopFamilies.label(), "pop_families");
        assert_eq!(Field::Budget(Role::Medical).label(), "medical_budget");
        assert_eq!(format!("{}", Field::EconomyIndex), "economy_index");
    }

    #[test]
    fn test_short_labels() {
        assert_eq!(Field::PopFamilies.short_label(), "families");
        assert_eq!(Field::PopChronic.short_label(), "chronic");
        assert_eq!(Field::ShelterCapacity.short_label(), "shelter_capacity");
    }
}
