use std::cmp::Ordering;

use crate::process::ProcessRecord;

// -0.0 and 0.0 compare equal here, unlike total_cmp
fn ascending(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Stable sort by ascending burst time; equal bursts keep their relative order.
pub fn sort_by_burst(records: &mut [ProcessRecord]) {
    records.sort_by(|a, b| ascending(a.burst_time, b.burst_time));
}

/// Stable sort by ascending arrival time. Completion times are left as they are.
pub fn sort_by_arrival(records: &mut [ProcessRecord]) {
    records.sort_by(|a, b| ascending(a.arrival_time, b.arrival_time));
}

/// Run the jobs back to back in their current order on a single simulated
/// processor starting at t=0, recording when each one finishes.
pub fn assign_completion_times(records: &mut [ProcessRecord]) {
    let mut clock = 0.0;
    for record in records.iter_mut() {
        record.completion_time = clock + record.burst_time;
        clock = record.completion_time;
    }
}

/// Non-preemptive shortest-job-first over the whole snapshot.
pub fn schedule(records: &mut [ProcessRecord]) {
    sort_by_burst(records);
    assign_completion_times(records);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pid: u32, arrival: f64, burst: f64) -> ProcessRecord {
        ProcessRecord::new(pid, 1.0, arrival, burst)
    }

    fn pids(records: &[ProcessRecord]) -> Vec<u32> {
        records.iter().map(|r| r.pid).collect()
    }

    #[test]
    fn test_schedule_orders_and_accumulates() {
        let mut records = vec![record(1, 5.0, 3.0), record(2, 2.0, 3.0), record(3, 10.0, 1.0)];
        schedule(&mut records);

        assert_eq!(pids(&records), vec![3, 1, 2]);
        let completions: Vec<f64> = records.iter().map(|r| r.completion_time).collect();
        assert_eq!(completions, vec![1.0, 4.0, 7.0]);
    }

    #[test]
    fn test_sort_by_burst_is_stable() {
        let mut records = vec![
            record(9, 0.0, 2.0),
            record(4, 0.0, 1.0),
            record(7, 0.0, 2.0),
            record(1, 0.0, 1.0),
        ];
        sort_by_burst(&mut records);
        assert_eq!(pids(&records), vec![4, 1, 9, 7]);
    }

    #[test]
    fn test_sort_by_arrival_keeps_completion_times() {
        let mut records = vec![record(1, 5.0, 3.0), record(2, 2.0, 3.0), record(3, 10.0, 1.0)];
        schedule(&mut records);
        sort_by_arrival(&mut records);

        assert_eq!(pids(&records), vec![2, 1, 3]);
        let completions: Vec<f64> = records.iter().map(|r| r.completion_time).collect();
        assert_eq!(completions, vec![7.0, 4.0, 1.0]);
    }

    #[test]
    fn test_sort_by_arrival_is_stable() {
        let mut records = vec![record(1, 7.0, 5.0), record(2, 7.0, 1.0), record(3, 7.0, 3.0)];
        schedule(&mut records);
        assert_eq!(pids(&records), vec![2, 3, 1]);

        sort_by_arrival(&mut records);
        assert_eq!(pids(&records), vec![2, 3, 1]);

        let mut mixed = vec![
            record(4, 9.0, 0.0),
            record(5, 3.0, 0.0),
            record(6, 9.0, 0.0),
            record(7, 3.0, 0.0),
        ];
        sort_by_arrival(&mut mixed);
        assert_eq!(pids(&mixed), vec![5, 7, 4, 6]);
    }

    #[test]
    fn test_signed_zero_bursts_keep_input_order() {
        let mut records = vec![record(1, 0.0, 0.0), record(2, 0.0, -0.0)];
        schedule(&mut records);
        assert_eq!(pids(&records), vec![1, 2]);

        let mut arrivals = vec![record(1, 0.0, 1.0), record(2, -0.0, 1.0)];
        sort_by_arrival(&mut arrivals);
        assert_eq!(pids(&arrivals), vec![1, 2]);
    }

    #[test]
    fn test_zero_bursts_share_completion_time() {
        let mut records = vec![record(1, 0.0, 0.0), record(2, 0.0, 0.0)];
        schedule(&mut records);
        assert_eq!(records[0].completion_time, 0.0);
        assert_eq!(records[1].completion_time, 0.0);
    }

    #[test]
    fn test_schedule_empty() {
        let mut records: Vec<ProcessRecord> = Vec::new();
        schedule(&mut records);
        assert!(records.is_empty());
    }
}
