//! Test and helper mocks for trend_core

use crate::store::{MilestoneStore, SampleSource, StoreError};
use crate::types::{CompletedMilestoneRecord, WeightSample};

/// In-memory store, useful in tests and as a reference implementation for
/// wiring a real persistence layer.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    pub samples: Vec<WeightSample>,
    pub records: Vec<CompletedMilestoneRecord>,
}

impl SampleSource for InMemoryStore {
    fn samples(&self) -> Result<Vec<WeightSample>, StoreError> {
        Ok(self.samples.clone())
    }
}

impl MilestoneStore for InMemoryStore {
    fn completed_milestones(&self) -> Result<Vec<CompletedMilestoneRecord>, StoreError> {
        Ok(self.records.clone())
    }

    fn record_completed(&mut self, record: CompletedMilestoneRecord) -> Result<(), StoreError> {
        self.records.push(record);
        Ok(())
    }

    fn mark_celebration_shown(&mut self, target_weight: f64) -> Result<(), StoreError> {
        for record in &mut self.records {
            if record.target_weight == target_weight {
                record.celebration_shown = true;
            }
        }
        Ok(())
    }
}
