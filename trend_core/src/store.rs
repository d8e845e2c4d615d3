//! Collaborator interfaces for the persistence layer.
//!
//! The engine never persists anything itself; these traits describe the shape
//! of the store it is computed against. A presentation layer reads the
//! engine's outputs, records completions through [`MilestoneStore`], and flips
//! `celebration_shown` once a celebration has been displayed.

use crate::types::{CompletedMilestoneRecord, WeightSample};

pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Supplies the weight-sample history.
pub trait SampleSource {
    fn samples(&self) -> Result<Vec<WeightSample>, StoreError>;
}

/// Owns the completed-milestone records.
pub trait MilestoneStore {
    fn completed_milestones(&self) -> Result<Vec<CompletedMilestoneRecord>, StoreError>;
    fn record_completed(&mut self, record: CompletedMilestoneRecord) -> Result<(), StoreError>;
    /// Marks the record matching `target_weight` as celebrated.
    fn mark_celebration_shown(&mut self, target_weight: f64) -> Result<(), StoreError>;
}
