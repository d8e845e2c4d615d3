//! Celebration policy: which single milestone (if any) to surface next.

use crate::milestones::detect_crossed_milestones;
use crate::types::CompletedMilestoneRecord;
use crate::units::{MilestoneInterval, WeightUnit};

/// Why the policy did or did not pick a milestone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CelebrationReason {
    /// No weight entries exist yet.
    NoEntries,
    /// A recorded milestone was never celebrated (e.g. the app quit between
    /// recording and display); show it first.
    UncelebratedExisting(f64),
    /// A milestone was crossed for the first time.
    NewlyCrossed(f64),
    /// The current weight has crossed nothing.
    NoCrossedMilestones,
    /// Everything crossed has already been celebrated.
    AllMilestonesAlreadyCelebrated,
}

/// Policy outcome: at most one milestone to surface, plus the reason.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelebrationCheck {
    pub milestone_to_show: Option<f64>,
    pub reason: CelebrationReason,
}

impl CelebrationCheck {
    fn none(reason: CelebrationReason) -> Self {
        Self {
            milestone_to_show: None,
            reason,
        }
    }
}

/// Decides which milestone (if any) to celebrate next.
///
/// Priority: (1) no entries; (2) the first existing record whose
/// `celebration_shown` is still false, preserving input order — this is what
/// makes a crash between "record" and "show" recoverable on next launch;
/// (3) the first newly crossed milestone in generation order; (4)/(5) a
/// reason explaining why nothing is shown. Completed weights are excluded by
/// the crossing detector, so regaining past an already-celebrated milestone
/// never re-celebrates it.
pub fn check_for_celebration(
    has_entries: bool,
    current_weight: f64,
    start_weight: f64,
    goal_weight: f64,
    unit: WeightUnit,
    interval: MilestoneInterval,
    completed: &[CompletedMilestoneRecord],
) -> CelebrationCheck {
    if !has_entries {
        return CelebrationCheck::none(CelebrationReason::NoEntries);
    }

    if let Some(record) = completed.iter().find(|r| !r.celebration_shown) {
        let weight = WeightUnit::convert(record.target_weight, record.unit, unit);
        tracing::debug!(milestone = weight, "celebration: uncelebrated existing record");
        return CelebrationCheck {
            milestone_to_show: Some(weight),
            reason: CelebrationReason::UncelebratedExisting(weight),
        };
    }

    let completed_weights: Vec<f64> = completed
        .iter()
        .map(|r| WeightUnit::convert(r.target_weight, r.unit, unit))
        .collect();
    let newly_crossed = detect_crossed_milestones(
        current_weight,
        start_weight,
        goal_weight,
        unit,
        &completed_weights,
        interval,
    );
    if let Some(&first) = newly_crossed.first() {
        tracing::debug!(milestone = first, "celebration: newly crossed");
        return CelebrationCheck {
            milestone_to_show: Some(first),
            reason: CelebrationReason::NewlyCrossed(first),
        };
    }

    // Nothing new: distinguish "nothing crossed at all" from "crossed but all
    // celebrated already".
    let crossed_ignoring_completed = detect_crossed_milestones(
        current_weight,
        start_weight,
        goal_weight,
        unit,
        &[],
        interval,
    );
    if crossed_ignoring_completed.is_empty() {
        CelebrationCheck::none(CelebrationReason::NoCrossedMilestones)
    } else {
        CelebrationCheck::none(CelebrationReason::AllMilestonesAlreadyCelebrated)
    }
}
