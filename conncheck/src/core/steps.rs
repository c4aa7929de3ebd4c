//! Placeholder step synthesis.

use serde::{Deserialize, Serialize};

/// Milliseconds attributed to each step index.
pub const STEP_DURATION_MS: u64 = 120;

/// Status of a synthesized step. Placeholders always report `ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Ok,
}

impl StepStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StepStatus::Ok => "ok",
        }
    }
}

/// One synthetic task entry in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based position in the sequence.
    pub step: u64,
    pub title: String,
    pub status: StepStatus,
    pub duration_ms: u64,
}

impl StepRecord {
    fn at(index: u64) -> Self {
        Self {
            step: index,
            title: format!("Task {index}"),
            status: StepStatus::Ok,
            duration_ms: STEP_DURATION_MS.saturating_mul(index),
        }
    }
}

/// Produce `count` step records with indices `1..=count`, in order.
///
/// A `count` of zero yields an empty list; callers pass a clamped count.
/// Every record is held in memory until rendering, so counts far beyond what
/// fits in memory abort the process on allocation failure. Durations
/// saturate at `u64::MAX` instead of overflowing.
pub fn synthesize_steps(count: u64) -> Vec<StepRecord> {
    (1..=count).map(StepRecord::at).collect()
}
