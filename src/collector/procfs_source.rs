use procfs::ProcError;

use crate::collector::source::{ProcessSource, SourceEntry, Unavailable};
use crate::error::Result;
use crate::process::{ProcClock, ProcessSample};

/// Reads live processes from the /proc filesystem.
#[derive(Debug, Default)]
pub struct ProcfsSource;

impl ProcfsSource {
    pub fn new() -> Self {
        ProcfsSource
    }
}

fn classify(e: ProcError) -> Unavailable {
    match e {
        ProcError::NotFound(_) => Unavailable::NotFound,
        ProcError::PermissionDenied(_) => Unavailable::AccessDenied,
        other => Unavailable::Other(other.to_string()),
    }
}

impl ProcessSource for ProcfsSource {
    fn entries(&mut self) -> Result<Vec<SourceEntry>> {
        let clock = ProcClock::read()?;
        let procfs_processes = procfs::process::all_processes()?; //Reading initial process list

        let mut entries = Vec::new();
        for p in procfs_processes {
            let procfs_proc = match p {
                Ok(p) => p,
                Err(e) => {
                    entries.push(Err(classify(e)));
                    continue;
                }
            };

            let entry = match procfs_proc.stat() {
                Ok(stat) => {
                    let sample = ProcessSample::from_stat(&stat, &clock);
                    if sample.is_defunct() {
                        Err(Unavailable::Zombie)
                    } else {
                        Ok(sample)
                    }
                }
                Err(e) => Err(classify(e)),
            };
            entries.push(entry);
        }

        tracing::debug!(entries = entries.len(), "Read /proc process list");
        Ok(entries)
    }
}
