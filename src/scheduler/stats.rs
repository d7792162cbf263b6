use serde::Serialize;

use crate::error::{Result, SchedError};
use crate::process::ProcessRecord;

/// Turnaround time of every record, in snapshot order.
pub fn turnaround_times(records: &[ProcessRecord]) -> Vec<f64> {
    records.iter().map(ProcessRecord::turnaround_time).collect()
}

/// Arithmetic mean of the per-record turnaround times.
pub fn average_turnaround(records: &[ProcessRecord]) -> Result<f64> {
    if records.is_empty() {
        return Err(SchedError::EmptySnapshot);
    }
    let total: f64 = records.iter().map(ProcessRecord::turnaround_time).sum();
    Ok(total / records.len() as f64)
}

/// What a presenter needs to render one scheduling pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduleSummary {
    pub records: Vec<ProcessRecord>,
    /// `None` when the snapshot was empty.
    pub average_turnaround: Option<f64>,
}
