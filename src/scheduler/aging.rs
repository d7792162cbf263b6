use crate::process::ProcessRecord;

/// Add `increment` to every record's burst time. Nothing else changes.
pub fn apply(records: &mut [ProcessRecord], increment: f64) {
    for record in records.iter_mut() {
        record.age(increment);
    }
    tracing::trace!(records = records.len(), increment, "Aged snapshot");
}
