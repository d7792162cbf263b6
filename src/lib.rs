//! Shortest-Job-First scheduling simulated over a snapshot of live processes.
//!
//! The [`collector`] samples every process once through a [`ProcessSource`],
//! the [`Scheduler`] ages, orders and times the snapshot, and [`report`]
//! renders the result.

pub mod analysis;
pub mod collector;
pub mod config;
pub mod error;
pub mod gui;
pub mod process;
pub mod report;
pub mod scheduler;

pub use collector::{collect, collect_at, ProcessSource, ProcfsSource, StaticSource};
pub use config::SchedulerConfig;
pub use error::{Result, SchedError};
pub use process::{ProcessRecord, ProcessSample};
pub use scheduler::{ScheduleSummary, Scheduler, SharedScheduler, SnapshotState};
