use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Result;
use crate::process::ProcessRecord;

pub mod procfs_source;
pub mod source;

pub use procfs_source::ProcfsSource;
pub use source::{ProcessSource, SourceEntry, StaticSource, Unavailable};

/// Current wall-clock time in whole seconds since the epoch.
fn wall_clock_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as f64)
        .unwrap_or(0.0)
}

/// Sample every live process from `source`, stamping arrival times against the wall clock.
pub fn collect(source: &mut dyn ProcessSource) -> Result<Vec<ProcessRecord>> {
    collect_at(source, wall_clock_secs())
}

/// Sample every process from `source` as if the current time were `now`.
///
/// Unavailable, defunct and malformed entries are dropped silently; the
/// returned records carry unique pids and no particular order.
pub fn collect_at(source: &mut dyn ProcessSource, now: f64) -> Result<Vec<ProcessRecord>> {
    let entries = source.entries()?;
    let listed = entries.len();

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(listed);

    for entry in entries {
        let sample = match entry {
            Ok(sample) => sample,
            Err(reason) => {
                tracing::trace!(?reason, "Skipping unavailable process");
                continue;
            }
        };

        if sample.is_defunct() {
            tracing::trace!(pid = sample.pid, "Skipping defunct process");
            continue;
        }

        // Guard against malformed data from the source
        if sample.creation_time.is_nan() || sample.creation_time <= 0.0 {
            tracing::debug!(
                pid = sample.pid,
                creation_time = sample.creation_time,
                "Skipping process with non-positive creation time"
            );
            continue;
        }
        let burst_time = sample.total_cpu_time();
        if !burst_time.is_finite() || burst_time < 0.0 {
            tracing::debug!(
                pid = sample.pid,
                burst_time,
                "Skipping process with invalid CPU time"
            );
            continue;
        }

        if !seen.insert(sample.pid) {
            tracing::debug!(pid = sample.pid, "Skipping duplicate pid");
            continue;
        }

        records.push(ProcessRecord::from_sample(&sample, now));
    }

    tracing::debug!(
        listed,
        collected = records.len(),
        dropped = listed - records.len(),
        "Collected process snapshot"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchedError;
    use crate::process::ProcessSample;

    fn sample(pid: u32, creation_time: f64, user: f64, system: f64) -> ProcessSample {
        ProcessSample {
            pid,
            creation_time,
            user_cpu_time: user,
            system_cpu_time: system,
            state: 'S',
        }
    }

    struct BrokenSource;

    impl ProcessSource for BrokenSource {
        fn entries(&mut self) -> Result<Vec<SourceEntry>> {
            Err(SchedError::SourceUnavailable("no /proc".to_string()))
        }
    }

    #[test]
    fn test_collect_derives_fields() {
        let mut source = StaticSource::from_samples(vec![sample(10, 900.0, 2.0, 1.0)]);
        let records = collect_at(&mut source, 1000.0).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pid, 10);
        assert_eq!(records[0].arrival_time, 100.0);
        assert_eq!(records[0].burst_time, 3.0);
        assert_eq!(records[0].completion_time, 0.0);
    }

    #[test]
    fn test_collect_drops_unavailable_entries() {
        let mut zombie = sample(4, 950.0, 0.0, 0.0);
        zombie.state = 'Z';
        let mut source = StaticSource::new(vec![
            Ok(sample(1, 900.0, 1.0, 0.0)),
            Err(Unavailable::NotFound),
            Err(Unavailable::AccessDenied),
            Err(Unavailable::Zombie),
            Ok(zombie),
            Ok(sample(2, 800.0, 0.5, 0.5)),
        ]);

        let records = collect_at(&mut source, 1000.0).unwrap();
        let pids: Vec<u32> = records.iter().map(|r| r.pid).collect();
        assert_eq!(pids, vec![1, 2]);
    }

    #[test]
    fn test_collect_drops_non_positive_creation_time() {
        let mut source = StaticSource::from_samples(vec![
            sample(1, 0.0, 1.0, 0.0),
            sample(2, -5.0, 1.0, 0.0),
            sample(3, f64::NAN, 1.0, 0.0),
            sample(4, 10.0, 1.0, 0.0),
        ]);

        let records = collect_at(&mut source, 20.0).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pid, 4);
    }

    #[test]
    fn test_collect_drops_invalid_cpu_time() {
        let mut source = StaticSource::from_samples(vec![
            sample(1, 10.0, -2.0, 0.0),
            sample(2, 10.0, f64::INFINITY, 0.0),
            sample(3, 10.0, 0.0, 0.0),
        ]);

        let records = collect_at(&mut source, 20.0).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pid, 3);
    }

    #[test]
    fn test_collect_keeps_first_duplicate() {
        let mut source = StaticSource::from_samples(vec![
            sample(5, 10.0, 1.0, 0.0),
            sample(5, 12.0, 9.0, 0.0),
        ]);

        let records = collect_at(&mut source, 20.0).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].burst_time, 1.0);
    }

    #[test]
    fn test_collect_propagates_source_failure() {
        let result = collect_at(&mut BrokenSource, 20.0);
        assert!(matches!(result, Err(SchedError::SourceUnavailable(_))));
    }
}
