use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use mbg_core::Record;

/// Options for the generation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Skip recipe validation and the post-generation check.
    pub economy: bool,
    /// Seed for the record RNG; a random seed is drawn when unset.
    pub seed: Option<u64>,
}

/// Problems found in one generated record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordIssue {
    /// Zero-based position of the record in the batch.
    pub index: usize,
    pub problems: Vec<String>,
}

/// Post-generation conformance statistics for a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub total_records: u64,
    pub valid_records: u64,
    pub invalid_records: u64,
    pub empty_field_counts: BTreeMap<String, u64>,
    pub issues: Vec<RecordIssue>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.invalid_records == 0
    }

    /// Share of valid records as a percentage; 0 for an empty batch.
    pub fn quality(&self) -> f64 {
        if self.total_records == 0 {
            return 0.0;
        }
        self.valid_records as f64 / self.total_records as f64 * 100.0
    }

    pub fn record_empty(&mut self, field: &str) {
        *self.empty_field_counts.entry(field.to_string()).or_insert(0) += 1;
    }
}

/// Everything a generation run hands back to its caller.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub records: Vec<Record>,
    /// `MBG-YYYYMMDD-NNN`.
    pub batch_id: String,
    pub elapsed: Duration,
    /// `None` when economy mode skipped the check.
    pub report: Option<ValidationReport>,
    /// Recipe warnings raised before generation.
    pub warnings: Vec<String>,
    pub menu: String,
    pub target: String,
    pub requested: u64,
}
