//! Transition records: the per-action entries of the simulation log.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// How a funded action resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Full effect, multiplier 1.0.
    Success,
    /// Weakened effect, multiplier below 1.0.
    Partial,
    /// Nothing applied; the attempt still consumed the turn.
    Failed,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Outcome::Success => "success",
            Outcome::Partial => "partial",
            Outcome::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// One processed action, as appended to the simulation log.
///
/// `effects` holds the textual diff of the action itself; `upkeep` holds
/// the round-update lines when this action closed a round, and is empty
/// otherwise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Round the action was submitted in.
    pub round: u32,
    pub actor: Role,
    pub action: String,
    pub outcome: Outcome,
    /// Final success probability after funding scaling.
    pub probability: f64,
    /// Effect multiplier actually applied (0.0 when failed).
    pub multiplier: f64,
    pub effects: Vec<String>,
    /// APA-style source the action is grounded in.
    pub citation: String,
    pub upkeep: Vec<String>,
}

impl TransitionRecord {
    /// Multi-line log banner for this transition.
    #[must_use]
    pub fn banner(&self) -> String {
        let mut out = format!(
            "{} -> {} [{}, p={:.2}]",
            self.actor, self.action, self.outcome, self.probability
        );
        out.push_str("\n| Effects:\n");
        if self.effects.is_empty() {
            out.push_str("(no change)");
        } else {
            out.push_str(&self.effects.join("\n"));
        }
        out.push_str(&format!("\n| Source: {}", self.citation));
        if !self.upkeep.is_empty() {
            out.push_str("\n| Round update:\n");
            out.push_str(&self.upkeep.join("\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> TransitionRecord {
        TransitionRecord {
            round: 2,
            actor: Role::Medical,
            action: "Deploy Mobile Clinics".to_string(),
            outcome: Outcome::Success,
            probability: 0.6134,
            multiplier: 1.0,
            effects: vec![
                "medical_vans: 3 -> 5".to_string(),
                "pop_chronic: 3600 -> 3384".to_string(),
            ],
            citation: "HRSA. (2023). Mobile clinics and underserved populations.".to_string(),
            upkeep: Vec::new(),
        }
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(format!("{}", Outcome::Success), "success");
        assert_eq!(format!("{}", Outcome::Partial), "partial");
        assert_eq!(format!("{}", Outcome::Failed), "failed");
    }

    #[test]
    fn test_banner_layout() {
        let banner = sample_record().banner();

        assert!(banner.starts_with("Medical -> Deploy Mobile Clinics [success, p=0.61]"));
        assert!(banner.contains("| Effects:\nmedical_vans: 3 -> 5\npop_chronic: 3600 -> 3384"));
        assert!(banner.ends_with("| Source: HRSA. (2023). Mobile clinics and underserved populations."));
        assert!(!banner.contains("Round update"));
    }

    #[test]
    fn test_banner_includes_round_update() {
        let mut record = sample_record();
        record.upkeep = vec![
            "tax: +250.0 split across budgets".to_string(),
            "construction complete: +300 shelter beds".to_string(),
        ];

        let banner = record.banner();
        assert!(banner.contains("| Round update:\ntax: +250.0 split across budgets"));
        assert!(banner.ends_with("construction complete: +300 shelter beds"));
    }

    #[test]
    fn test_banner_empty_effects() {
        let mut record = sample_record();
        record.effects.clear();

        assert!(record.banner().contains("| Effects:\n(no change)"));
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: TransitionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
