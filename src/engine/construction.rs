//! Construction pipeline: deferred capacity builds with round-granular
//! completion.

use crate::core::state::{ConstructionJob, HousingTier, WorldState};

/// Rounds a build of `units` takes to mature, never less than one.
#[must_use]
pub fn rounds_for(units: u32, delay_factor: f64) -> u32 {
    let rounds = (f64::from(units) / 100.0 * delay_factor).round() as u32;
    rounds.max(1)
}

/// Queue a build at the back of the pipeline. Returns its lead time.
pub fn enqueue(state: &mut WorldState, tier: HousingTier, units: u32, delay_factor: f64) -> u32 {
    assert!(units > 0, "Construction jobs need at least one unit");

    let rounds = rounds_for(units, delay_factor);
    state.pipeline.push_back(ConstructionJob {
        tier,
        units,
        rounds_remaining: rounds,
    });
    rounds
}

/// Tick every queued job by one round, committing those that mature.
///
/// Called exactly once per round boundary. Matured units land on the
/// tier's capacity field; unfinished jobs keep their queue order.
pub fn advance(state: &mut WorldState) -> Vec<String> {
    let jobs = std::mem::take(&mut state.pipeline);
    let mut lines = Vec::new();

    for mut job in jobs {
        job.rounds_remaining -= 1;
        if job.rounds_remaining == 0 {
            state.apply_delta(job.tier.field(), f64::from(job.units));
            lines.push(format!("construction complete: +{} {}", job.units, job.tier));
        } else {
            state.pipeline.push_back(job);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_for_scales_with_units() {
        assert_eq!(rounds_for(300, 2.0), 6);
        assert_eq!(rounds_for(150, 2.0), 3);
        assert_eq!(rounds_for(100, 2.0), 2);
        assert_eq!(rounds_for(80, 2.0), 2);
    }

    #[test]
    fn test_rounds_for_floors_at_one() {
        assert_eq!(rounds_for(10, 2.0), 1);
        assert_eq!(rounds_for(40, 1.0), 1);
        assert_eq!(rounds_for(1, 0.5), 1);
    }

    #[test]
    fn test_job_matures_after_exact_lead_time() {
        let mut state = WorldState::new();
        let rounds = enqueue(&mut state, HousingTier::Shelter, 300, 2.0);
        assert_eq!(rounds, 6);

        for _ in 0..5 {
            assert!(advance(&mut state).is_empty());
            assert_eq!(state.shelter_capacity, 0);
        }

        let lines = advance(&mut state);
        assert_eq!(lines, vec!["construction complete: +300 shelter beds"]);
        assert_eq!(state.shelter_capacity, 300);
        assert!(state.pipeline.is_empty());
    }

    #[test]
    fn test_unfinished_jobs_keep_order() {
        let mut state = WorldState::new();
        enqueue(&mut state, HousingTier::Permanent, 150, 2.0); // 3 rounds
        enqueue(&mut state, HousingTier::Transitional, 60, 2.0); // 1 round

        let lines = advance(&mut state);
        assert_eq!(lines, vec!["construction complete: +60 transitional units"]);
        assert_eq!(state.transitional_units, 60);
        assert_eq!(state.pipeline.len(), 1);
        assert_eq!(state.pipeline[0].tier, HousingTier::Permanent);
        assert_eq!(state.pipeline[0].rounds_remaining, 2);
    }

    #[test]
    fn test_simultaneous_completions_in_queue_order() {
        let mut state = WorldState::new();
        enqueue(&mut state, HousingTier::Shelter, 80, 1.0); // 1 round
        enqueue(&mut state, HousingTier::Permanent, 50, 1.0); // 1 round

        let lines = advance(&mut state);
        assert_eq!(
            lines,
            vec![
                "construction complete: +80 shelter beds",
                "construction complete: +50 permanent units",
            ]
        );
        assert_eq!(state.shelter_capacity, 80);
        assert_eq!(state.permanent_units, 50);
    }
}
