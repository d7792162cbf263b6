use crate::error::Result;
use crate::process::ProcessSample;

/// Why a listed process could not be sampled.
#[derive(Debug, Clone, PartialEq)]
pub enum Unavailable {
    NotFound, // Vanished between listing and reading
    AccessDenied,
    Zombie,
    Other(String),
}

pub type SourceEntry = std::result::Result<ProcessSample, Unavailable>;

/// A black-box supplier of live process data.
///
/// `entries` fails only when the source as a whole cannot be enumerated;
/// per-process problems are reported inline as `Unavailable`.
pub trait ProcessSource {
    fn entries(&mut self) -> Result<Vec<SourceEntry>>;
}

/// A fixed list of entries, handy for replaying a captured snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: Vec<SourceEntry>,
}

impl StaticSource {
    pub fn new(entries: Vec<SourceEntry>) -> Self {
        StaticSource { entries }
    }

    pub fn from_samples(samples: impl IntoIterator<Item = ProcessSample>) -> Self {
        Self::new(samples.into_iter().map(Ok).collect())
    }
}

impl ProcessSource for StaticSource {
    fn entries(&mut self) -> Result<Vec<SourceEntry>> {
        Ok(self.entries.clone())
    }
}
