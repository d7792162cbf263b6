use crate::collector::{self, ProcessSource};
use crate::config::SchedulerConfig;
use crate::error::{Result, SchedError};
use crate::process::ProcessRecord;

pub mod aging;
pub mod shared;
pub mod sjf;
pub mod stats;

pub use shared::SharedScheduler;
pub use stats::ScheduleSummary;

/// Where the current snapshot is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotState {
    Empty,
    Collected,
    Aged,
    Scheduled,
    Reordered,
}

impl SnapshotState {
    /// Completion times are valid for the records held.
    pub fn is_scheduled(self) -> bool {
        matches!(self, SnapshotState::Scheduled | SnapshotState::Reordered)
    }
}

//Scheduler engine: owns one snapshot at a time and runs SJF passes over it
#[derive(Debug)]
pub struct Scheduler {
    snapshot: Vec<ProcessRecord>,
    state: SnapshotState,
    config: SchedulerConfig,
}

impl Default for Scheduler {
    fn default() -> Self {
        Scheduler {
            snapshot: Vec::new(),
            state: SnapshotState::Empty,
            config: SchedulerConfig::default(),
        }
    }
}

impl Scheduler {
    pub fn new(config: SchedulerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Scheduler {
            config,
            ..Default::default()
        })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Takes effect on the next `age` call.
    pub fn set_aging_increment(&mut self, aging_increment: f64) -> Result<()> {
        let config = self.config.clone().with_aging_increment(aging_increment);
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn state(&self) -> SnapshotState {
        self.state
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.snapshot
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Replace the current snapshot wholesale.
    pub fn ingest(&mut self, snapshot: Vec<ProcessRecord>) {
        self.snapshot = snapshot;
        self.state = SnapshotState::Collected;
    }

    /// Add the configured increment to every burst time. Each call ages again,
    /// so a pass should call this exactly once between `ingest` and `schedule_sjf`.
    pub fn age(&mut self) {
        aging::apply(&mut self.snapshot, self.config.aging_increment);
        self.state = SnapshotState::Aged;
    }

    /// Order by burst time and assign completion times.
    pub fn schedule_sjf(&mut self) -> &[ProcessRecord] {
        sjf::schedule(&mut self.snapshot);
        self.state = SnapshotState::Scheduled;
        &self.snapshot
    }

    /// Display aid only: reorders by arrival without recomputing completion times.
    pub fn reorder_by_arrival_time(&mut self) -> &[ProcessRecord] {
        sjf::sort_by_arrival(&mut self.snapshot);
        if self.state.is_scheduled() {
            self.state = SnapshotState::Reordered;
        }
        &self.snapshot
    }

    fn ensure_scheduled(&self) -> Result<()> {
        if self.snapshot.is_empty() {
            return Err(SchedError::EmptySnapshot);
        }
        if !self.state.is_scheduled() {
            return Err(SchedError::NotScheduled { state: self.state });
        }
        Ok(())
    }

    pub fn turnaround_times(&self) -> Result<Vec<f64>> {
        self.ensure_scheduled()?;
        Ok(stats::turnaround_times(&self.snapshot))
    }

    pub fn average_turnaround_time(&self) -> Result<f64> {
        self.ensure_scheduled()?;
        stats::average_turnaround(&self.snapshot)
    }

    /// One full pass over an already collected snapshot: ingest, age once, schedule.
    pub fn run_pass(&mut self, snapshot: Vec<ProcessRecord>) -> &[ProcessRecord] {
        self.ingest(snapshot);
        self.age();
        self.schedule_sjf();

        match self.average_turnaround_time() {
            Ok(average) => tracing::info!(
                records = self.snapshot.len(),
                average_turnaround = average,
                "Scheduling pass complete"
            ),
            Err(_) => tracing::info!("Scheduling pass complete with an empty snapshot"),
        }
        &self.snapshot
    }

    /// Collect from `source` and run a full pass over the result.
    pub fn retrieve(&mut self, source: &mut dyn ProcessSource) -> Result<&[ProcessRecord]> {
        let snapshot = collector::collect(source)?;
        Ok(self.run_pass(snapshot))
    }

    /// Like `retrieve`, with arrival times measured against `now`.
    pub fn retrieve_at(
        &mut self,
        source: &mut dyn ProcessSource,
        now: f64,
    ) -> Result<&[ProcessRecord]> {
        let snapshot = collector::collect_at(source, now)?;
        Ok(self.run_pass(snapshot))
    }

    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            records: self.snapshot.clone(),
            average_turnaround: self.average_turnaround_time().ok(),
        }
    }
}
