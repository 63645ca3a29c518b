//! Per-batch cost estimate shown next to a run summary.
//!
//! The figures are illustrative; the only guarantee is that the total is the
//! sum of the listed components.

use rand::{Rng, RngCore};
use serde::Serialize;

/// Planned cost per record, in Rupiah.
pub const BASELINE_PER_RECORD: u64 = 40_000;
/// Deviations below this percentage are reported at this percentage.
pub const MIN_REPORTED_DEVIATION: f64 = 15.0;

const PROCESSING_PER_RECORD: (u64, u64) = (18_000, 28_000);
const DISTRIBUTION_PER_RECORD: (u64, u64) = (7_000, 12_000);
const COORDINATION_PER_RECORD: (u64, u64) = (30_000, 45_000);
const OVERHEAD_PER_RECORD: (u64, u64) = (12_000, 20_000);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetLine {
    pub label: &'static str,
    pub per_record: u64,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetEstimate {
    pub records: u64,
    pub lines: Vec<BudgetLine>,
    pub baseline: u64,
    /// Percentage above baseline.
    pub deviation_percent: f64,
}

impl BudgetEstimate {
    pub fn total(&self) -> u64 {
        self.lines.iter().map(|line| line.amount).sum()
    }

    pub fn per_record(&self) -> u64 {
        self.total().checked_div(self.records).unwrap_or(0)
    }
}

pub fn estimate_budget(records: u64, rng: &mut dyn RngCore) -> BudgetEstimate {
    let components = [
        ("processing", PROCESSING_PER_RECORD),
        ("distribution", DISTRIBUTION_PER_RECORD),
        ("coordination", COORDINATION_PER_RECORD),
        ("overhead", OVERHEAD_PER_RECORD),
    ];
    let lines: Vec<BudgetLine> = components
        .into_iter()
        .map(|(label, (low, high))| {
            let per_record = rng.random_range(low..=high);
            BudgetLine {
                label,
                per_record,
                amount: per_record.saturating_mul(records),
            }
        })
        .collect();

    let baseline = BASELINE_PER_RECORD.saturating_mul(records);
    let total: u64 = lines.iter().map(|line| line.amount).sum();
    let actual = if baseline == 0 {
        0.0
    } else {
        (total as f64 - baseline as f64) / baseline as f64 * 100.0
    };

    BudgetEstimate {
        records,
        lines,
        baseline,
        deviation_percent: actual.max(MIN_REPORTED_DEVIATION),
    }
}
