use serde::Serialize;

mod sample;

pub use sample::{ProcClock, ProcessSample};

/// One snapshot of a single OS process, as seen by the scheduler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessRecord {
    pub pid: u32,
    pub creation_time: f64,
    pub arrival_time: f64,
    pub burst_time: f64,
    pub completion_time: f64,
}

impl ProcessRecord {
    pub fn new(pid: u32, creation_time: f64, arrival_time: f64, burst_time: f64) -> Self {
        ProcessRecord {
            pid,
            creation_time,
            arrival_time,
            burst_time,
            completion_time: 0.0,
        }
    }

    /// Derive arrival and burst time from a raw sample taken at `now` (epoch seconds).
    pub fn from_sample(sample: &ProcessSample, now: f64) -> Self {
        Self::new(
            sample.pid,
            sample.creation_time,
            now - sample.creation_time,
            sample.total_cpu_time(),
        )
    }

    pub fn age(&mut self, increment: f64) {
        self.burst_time += increment;
    }

    /// Absolute difference between completion and arrival. Arrival is sampled
    /// from wall-clock time, so it can exceed a small simulated completion time.
    pub fn turnaround_time(&self) -> f64 {
        (self.completion_time - self.arrival_time).abs()
    }
}
