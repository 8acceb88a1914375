//! In-memory sink for deterministic assertions

use crate::filter::CategoryThresholds;
use crate::record::Record;
use crate::sink::Sink;
use gatelog_core_types::{Severity, Threshold};
use std::sync::{Arc, Mutex, PoisonError};

/// Keeps every accepted record in memory
///
/// Clones share the same buffer and thresholds, so a test can hand one
/// clone to a [`LoggerFactory`](crate::LoggerFactory) and inspect another.
#[derive(Clone, Debug)]
pub struct CaptureSink {
    records: Arc<Mutex<Vec<Record>>>,
    thresholds: Arc<CategoryThresholds>,
    skip_properties: bool,
}

impl CaptureSink {
    /// Accept everything at or above `threshold`, for every category
    pub fn new(threshold: Threshold) -> Self {
        Self::with_thresholds(CategoryThresholds::new(threshold))
    }

    pub fn with_thresholds(thresholds: CategoryThresholds) -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            thresholds: Arc::new(thresholds),
            skip_properties: false,
        }
    }

    /// Capture records without structured properties
    pub fn without_properties(mut self) -> Self {
        self.skip_properties = true;
        self
    }

    pub fn thresholds(&self) -> &CategoryThresholds {
        &self.thresholds
    }

    /// Get all captured records
    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clear all captured records
    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Count records matching a predicate
    pub fn count_records<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Record) -> bool,
    {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| predicate(r))
            .count()
    }

    /// Assert that a record of `severity` whose message contains `needle` exists
    ///
    /// # Panics
    ///
    /// Panics if no such record was captured
    pub fn assert_record_exists(&self, severity: Severity, needle: &str) {
        let records = self.records();
        let found = records
            .iter()
            .any(|r| r.severity() == severity && r.message().contains(needle));
        assert!(
            found,
            "Expected {} record containing {:?} not found in {} captured records",
            severity,
            needle,
            records.len()
        );
    }
}

impl Default for CaptureSink {
    fn default() -> Self {
        Self::new(Threshold::Trace)
    }
}

impl Sink for CaptureSink {
    fn accepts(&self, severity: Severity, category: &str) -> bool {
        self.thresholds.allows(severity, category)
    }

    fn wants_properties(&self) -> bool {
        !self.skip_properties
    }

    fn write(&self, record: Record) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}
