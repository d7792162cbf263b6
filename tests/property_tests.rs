use proptest::prelude::*;
use sjf_scheduler::{ProcessRecord, Scheduler, SchedulerConfig};

// Whole-number times keep every sum exact in f64.
fn snapshot() -> impl Strategy<Value = Vec<ProcessRecord>> {
    prop::collection::vec((0u32..50, 0u32..50), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst))| {
                ProcessRecord::new(i as u32, 1.0, f64::from(arrival), f64::from(burst))
            })
            .collect()
    })
}

fn scheduler(aging: u32) -> Scheduler {
    Scheduler::new(SchedulerConfig::new().with_aging_increment(f64::from(aging))).unwrap()
}

proptest! {
    #[test]
    fn schedule_is_sorted_and_stable(records in snapshot()) {
        let mut engine = scheduler(0);
        engine.ingest(records);
        let scheduled = engine.schedule_sjf();

        for pair in scheduled.windows(2) {
            prop_assert!(pair[0].burst_time <= pair[1].burst_time);
            // pids were assigned in input order
            if pair[0].burst_time == pair[1].burst_time {
                prop_assert!(pair[0].pid < pair[1].pid);
            }
        }
    }

    #[test]
    fn reorder_by_arrival_is_sorted_and_stable(records in snapshot(), aging in 0u32..20) {
        let mut engine = scheduler(aging);
        let schedule_order: Vec<u32> = engine.run_pass(records).iter().map(|r| r.pid).collect();
        let position = |pid: u32| schedule_order.iter().position(|&p| p == pid);

        let reordered = engine.reorder_by_arrival_time();
        prop_assert_eq!(reordered.len(), schedule_order.len());
        for pair in reordered.windows(2) {
            prop_assert!(pair[0].arrival_time <= pair[1].arrival_time);
            if pair[0].arrival_time == pair[1].arrival_time {
                prop_assert!(position(pair[0].pid) < position(pair[1].pid));
            }
        }
    }

    #[test]
    fn completion_is_prefix_sum_of_bursts(records in snapshot(), aging in 0u32..20) {
        let mut engine = scheduler(aging);
        let scheduled = engine.run_pass(records);

        let mut total = 0.0;
        for record in scheduled {
            total += record.burst_time;
            prop_assert_eq!(record.completion_time, total);
        }
    }

    #[test]
    fn turnaround_is_absolute_difference(records in snapshot()) {
        let mut engine = scheduler(10);
        engine.run_pass(records);

        let turnarounds = engine.turnaround_times().unwrap_or_default();
        for (record, turnaround) in engine.records().iter().zip(turnarounds) {
            prop_assert!(turnaround >= 0.0);
            prop_assert_eq!(turnaround, (record.completion_time - record.arrival_time).abs());
        }
    }

    #[test]
    fn average_is_mean_of_turnarounds(records in snapshot()) {
        let mut engine = scheduler(10);
        let empty = records.is_empty();
        engine.run_pass(records);

        match engine.average_turnaround_time() {
            Ok(average) => {
                let turnarounds = engine.turnaround_times().unwrap();
                let mean = turnarounds.iter().sum::<f64>() / turnarounds.len() as f64;
                prop_assert!(!empty);
                prop_assert_eq!(average, mean);
            }
            Err(_) => prop_assert!(empty),
        }
    }

    #[test]
    fn aging_once_only_shifts_burst(records in snapshot(), aging in 0u32..100) {
        let mut engine = scheduler(aging);
        engine.ingest(records.clone());
        engine.age();

        prop_assert_eq!(engine.records().len(), records.len());
        for (before, after) in records.iter().zip(engine.records()) {
            prop_assert_eq!(after.burst_time, before.burst_time + f64::from(aging));
            prop_assert_eq!(after.pid, before.pid);
            prop_assert_eq!(after.arrival_time, before.arrival_time);
            prop_assert_eq!(after.creation_time, before.creation_time);
            prop_assert_eq!(after.completion_time, before.completion_time);
        }
    }
}
