//! Owned copy of the loaded evaluations.

use crate::models::{EvaluationPatch, EvaluationRecord};

/// In-memory copy of the loaded evaluations shared by the list and report
/// handlers. Kept newest `created_at` first. Owned by the service and passed
/// around by reference.
#[derive(Debug, Default)]
pub struct EvaluationStore {
    records: Vec<EvaluationRecord>,
}

impl EvaluationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[EvaluationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replaces the whole collection with a backend listing (newest first).
    pub fn load(&mut self, records: Vec<EvaluationRecord>) {
        self.records = records;
    }

    /// Adds a record ahead of every older one. Records without a timestamp
    /// sort last.
    pub fn append(&mut self, record: EvaluationRecord) {
        let index = self
            .records
            .partition_point(|existing| existing.created_at > record.created_at);
        self.records.insert(index, record);
    }

    pub fn get(&self, id: &str) -> Option<&EvaluationRecord> {
        self.records.iter().find(|r| r.id.as_deref() == Some(id))
    }

    /// Swaps in a full record for the given id. Returns false when the id is unknown.
    pub fn replace(&mut self, id: &str, record: EvaluationRecord) -> bool {
        match self.records.iter_mut().find(|r| r.id.as_deref() == Some(id)) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Merges a partial update into the stored record.
    pub fn update(&mut self, id: &str, patch: &EvaluationPatch) -> bool {
        match self.records.iter_mut().find(|r| r.id.as_deref() == Some(id)) {
            Some(record) => {
                patch.apply_to(record);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<EvaluationRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.id.as_deref() == Some(id))?;
        Some(self.records.remove(index))
    }
}
