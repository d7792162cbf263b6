use nix::unistd::{sysconf, SysconfVar};
use procfs::process::Stat;
use procfs::ProcResult;

/// Raw per-process data as the process-data source reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSample {
    pub pid: u32,
    pub creation_time: f64, // Seconds since epoch
    pub user_cpu_time: f64,
    pub system_cpu_time: f64,
    pub state: char,
}

/// Converts kernel tick counts from /proc/[pid]/stat into epoch seconds.
#[derive(Debug, Clone, Copy)]
pub struct ProcClock {
    pub boot_time_secs: u64,
    pub ticks_per_second: f64,
}

impl ProcClock {
    pub fn read() -> ProcResult<Self> {
        Ok(ProcClock {
            boot_time_secs: procfs::boot_time_secs()?,
            ticks_per_second: clock_ticks_per_second(),
        })
    }

    pub fn ticks_to_secs(&self, ticks: u64) -> f64 {
        ticks as f64 / self.ticks_per_second
    }
}

/// System HZ from sysconf(_SC_CLK_TCK). Most Linux systems use 100.
fn clock_ticks_per_second() -> f64 {
    match sysconf(SysconfVar::CLK_TCK) {
        Ok(Some(hz)) if hz > 0 => hz as f64,
        _ => 100.0,
    }
}

impl ProcessSample {
    pub fn from_stat(stat: &Stat, clock: &ProcClock) -> Self {
        ProcessSample {
            pid: stat.pid as u32,
            creation_time: clock.boot_time_secs as f64 + clock.ticks_to_secs(stat.starttime),
            user_cpu_time: clock.ticks_to_secs(stat.utime),
            system_cpu_time: clock.ticks_to_secs(stat.stime),
            state: stat.state,
        }
    }

    /// Zombie or dead processes have no meaningful CPU accounting left.
    pub fn is_defunct(&self) -> bool {
        matches!(self.state, 'Z' | 'X' | 'x')
    }

    pub fn total_cpu_time(&self) -> f64 {
        self.user_cpu_time + self.system_cpu_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(state: char) -> ProcessSample {
        ProcessSample {
            pid: 42,
            creation_time: 1_700_000_000.0,
            user_cpu_time: 1.25,
            system_cpu_time: 0.75,
            state,
        }
    }

    #[test]
    fn test_total_cpu_time_sums_user_and_system() {
        assert_eq!(sample('S').total_cpu_time(), 2.0);
    }

    #[test]
    fn test_defunct_states() {
        assert!(sample('Z').is_defunct());
        assert!(sample('X').is_defunct());
        assert!(!sample('R').is_defunct());
        assert!(!sample('S').is_defunct());
    }

    #[test]
    fn test_ticks_to_secs() {
        let clock = ProcClock {
            boot_time_secs: 1000,
            ticks_per_second: 100.0,
        };
        assert_eq!(clock.ticks_to_secs(250), 2.5);
    }
}
