//! Milestone generation, progress bracketing, and crossing detection.

use crate::units::{MilestoneInterval, WeightUnit};

/// Travel direction from start toward goal. Equal start and goal degenerates
/// to the gaining path, which yields only the goal itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Losing,
    Gaining,
}

fn direction(start_weight: f64, goal_weight: f64) -> Direction {
    if goal_weight < start_weight {
        Direction::Losing
    } else {
        Direction::Gaining
    }
}

/// True once `weight` has been passed travelling in `dir`. Boundaries are
/// inclusive: exact equality counts as passed.
fn passed(current_weight: f64, milestone: f64, dir: Direction) -> bool {
    match dir {
        Direction::Losing => current_weight <= milestone,
        Direction::Gaining => current_weight >= milestone,
    }
}

/// Generates the ordered milestone list between `start_weight` and
/// `goal_weight`, nearest-to-start first.
///
/// Intermediate milestones land on multiples of the interval step; a multiple
/// equal to the start weight is skipped. The goal weight is always appended
/// last, even when it is off-interval, so the final spacing may differ from
/// the rest. Total over the whole input domain (including start == goal) and
/// never empty.
pub fn generate_milestones(
    start_weight: f64,
    goal_weight: f64,
    unit: WeightUnit,
    interval: MilestoneInterval,
) -> Vec<f64> {
    let step = interval.value_for(unit);
    let mut milestones = Vec::new();

    match direction(start_weight, goal_weight) {
        Direction::Losing => {
            let mut candidate = (start_weight / step).floor() * step;
            if candidate >= start_weight {
                candidate -= step;
            }
            while candidate > goal_weight {
                milestones.push(candidate);
                candidate -= step;
            }
        }
        Direction::Gaining => {
            let mut candidate = (start_weight / step).ceil() * step;
            if candidate <= start_weight {
                candidate += step;
            }
            while candidate < goal_weight {
                milestones.push(candidate);
                candidate += step;
            }
        }
    }

    milestones.push(goal_weight);
    milestones
}

/// Active milestone bracket for the current weight, plus everything a
/// progress display needs. Built by [`milestone_progress`].
#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneProgress {
    pub current_weight: f64,
    pub next_milestone: f64,
    pub previous_milestone: f64,
    pub goal_weight: f64,
    pub unit: WeightUnit,
    pub completed_milestones: Vec<f64>,
}

impl MilestoneProgress {
    fn travel(&self) -> Direction {
        // previous_milestone sits between start and goal, so its relation to
        // the goal recovers the travel direction. When it equals the goal the
        // journey is over and direction no longer matters.
        if self.goal_weight < self.previous_milestone {
            Direction::Losing
        } else {
            Direction::Gaining
        }
    }

    /// Fraction of the previous→next bracket covered, clamped to [0, 1].
    ///
    /// A zero-width bracket reports 1.0 (already there). Movement opposite to
    /// the goal direction from the previous milestone reports exactly 0.0.
    pub fn progress_to_next_milestone(&self) -> f64 {
        let total = (self.previous_milestone - self.next_milestone).abs();
        if total == 0.0 {
            return 1.0;
        }
        let traveled = match self.travel() {
            Direction::Losing => self.previous_milestone - self.current_weight,
            Direction::Gaining => self.current_weight - self.previous_milestone,
        };
        if traveled < 0.0 {
            return 0.0;
        }
        (traveled / total).clamp(0.0, 1.0)
    }

    /// Weight remaining to the next milestone, never negative.
    pub fn weight_to_next_milestone(&self) -> f64 {
        if self.has_reached_goal() {
            return 0.0;
        }
        let remaining = match self.travel() {
            Direction::Losing => self.current_weight - self.next_milestone,
            Direction::Gaining => self.next_milestone - self.current_weight,
        };
        remaining.max(0.0)
    }

    pub fn has_reached_goal(&self) -> bool {
        if self.goal_weight < self.previous_milestone {
            self.current_weight <= self.goal_weight
        } else if self.goal_weight > self.previous_milestone {
            self.current_weight >= self.goal_weight
        } else {
            // The previous milestone IS the goal: it has been passed.
            true
        }
    }
}

/// Computes the active previous→next milestone bracket for `current_weight`.
///
/// `completed_milestone_weights` must already be expressed in `unit`.
pub fn milestone_progress(
    current_weight: f64,
    start_weight: f64,
    goal_weight: f64,
    unit: WeightUnit,
    interval: MilestoneInterval,
    completed_milestone_weights: &[f64],
) -> MilestoneProgress {
    let milestones = generate_milestones(start_weight, goal_weight, unit, interval);
    let dir = direction(start_weight, goal_weight);

    // Milestones are ordered from start toward goal, so the passed ones form
    // a prefix of the list.
    let next_milestone = milestones
        .iter()
        .copied()
        .find(|&m| !passed(current_weight, m, dir))
        .unwrap_or(goal_weight);
    let previous_milestone = milestones
        .iter()
        .copied()
        .take_while(|&m| passed(current_weight, m, dir))
        .last()
        .unwrap_or(start_weight);

    MilestoneProgress {
        current_weight,
        next_milestone,
        previous_milestone,
        goal_weight,
        unit,
        completed_milestones: completed_milestone_weights.to_vec(),
    }
}

/// Milestones newly crossed at `current_weight`, in generation order
/// (nearest-to-start first), excluding any weight already present in
/// `completed_milestone_weights`.
///
/// Exact equality with a milestone counts as crossed; exact equality with a
/// completed weight counts as already recorded. A completed milestone is
/// never double-counted, regardless of where the weight has moved since.
pub fn detect_crossed_milestones(
    current_weight: f64,
    start_weight: f64,
    goal_weight: f64,
    unit: WeightUnit,
    completed_milestone_weights: &[f64],
    interval: MilestoneInterval,
) -> Vec<f64> {
    let dir = direction(start_weight, goal_weight);
    generate_milestones(start_weight, goal_weight, unit, interval)
        .into_iter()
        .filter(|&m| passed(current_weight, m, dir))
        .filter(|m| !completed_milestone_weights.contains(m))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_on_interval_boundary_is_skipped() {
        let m = generate_milestones(200.0, 160.0, WeightUnit::Pounds, MilestoneInterval::Five);
        assert_eq!(m, vec![195.0, 190.0, 185.0, 180.0, 175.0, 170.0, 165.0, 160.0]);
    }

    #[test]
    fn off_interval_goal_is_appended() {
        let m = generate_milestones(188.0, 171.5, WeightUnit::Pounds, MilestoneInterval::Ten);
        assert_eq!(m, vec![180.0, 171.5]);
    }

    #[test]
    fn start_equals_goal_yields_goal_only() {
        let m = generate_milestones(150.0, 150.0, WeightUnit::Pounds, MilestoneInterval::Five);
        assert_eq!(m, vec![150.0]);
    }

    #[test]
    fn gaining_steps_upward() {
        let m = generate_milestones(120.0, 150.0, WeightUnit::Pounds, MilestoneInterval::Five);
        assert_eq!(m, vec![125.0, 130.0, 135.0, 140.0, 145.0, 150.0]);
    }

    #[test]
    fn kilogram_intervals_use_their_own_steps() {
        let m = generate_milestones(90.0, 83.0, WeightUnit::Kilograms, MilestoneInterval::Five);
        assert_eq!(m, vec![88.0, 86.0, 84.0, 83.0]);
    }
}
