use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::collector::ProcessSource;
use crate::error::Result;
use crate::scheduler::{ScheduleSummary, Scheduler};

/// A scheduler that can be triggered from several places at once.
///
/// Every operation holds one lock for its whole duration, so a pass
/// (collect, ingest, age, schedule) is never interleaved with another.
#[derive(Debug, Clone, Default)]
pub struct SharedScheduler {
    inner: Arc<Mutex<Scheduler>>,
}

impl SharedScheduler {
    pub fn new(scheduler: Scheduler) -> Self {
        SharedScheduler {
            inner: Arc::new(Mutex::new(scheduler)),
        }
    }

    pub fn retrieve(&self, source: &mut dyn ProcessSource) -> Result<ScheduleSummary> {
        let mut scheduler = self.inner.lock();
        scheduler.retrieve(source)?;
        Ok(scheduler.summary())
    }

    pub fn retrieve_at(
        &self,
        source: &mut dyn ProcessSource,
        now: f64,
    ) -> Result<ScheduleSummary> {
        let mut scheduler = self.inner.lock();
        scheduler.retrieve_at(source, now)?;
        Ok(scheduler.summary())
    }

    pub fn reorder_by_arrival_time(&self) -> ScheduleSummary {
        let mut scheduler = self.inner.lock();
        scheduler.reorder_by_arrival_time();
        scheduler.summary()
    }

    pub fn set_aging_increment(&self, aging_increment: f64) -> Result<()> {
        self.inner.lock().set_aging_increment(aging_increment)
    }

    pub fn summary(&self) -> ScheduleSummary {
        self.inner.lock().summary()
    }

    /// Direct access for callers that need several operations under one lock.
    pub fn lock(&self) -> MutexGuard<'_, Scheduler> {
        self.inner.lock()
    }
}
