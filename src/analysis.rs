use crate::report::{self, ReportRow};
use crate::scheduler::ScheduleSummary;

/// One numeric column of the schedule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Pid,
    Arrival,
    Burst,
    Completion,
    Turnaround,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Pid,
        Field::Arrival,
        Field::Burst,
        Field::Completion,
        Field::Turnaround,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Pid => "PID",
            Field::Arrival => "Arrival Time",
            Field::Burst => "Burst Time",
            Field::Completion => "Completion Time",
            Field::Turnaround => "Turnaround Time",
        }
    }

    pub fn value(self, row: &ReportRow) -> f64 {
        match self {
            Field::Pid => f64::from(row.pid),
            Field::Arrival => row.arrival_time,
            Field::Burst => row.burst_time,
            Field::Completion => row.completion_time,
            Field::Turnaround => row.turnaround_time,
        }
    }
}

/// Every unordered pair of distinct fields, in column order.
pub fn field_pairs() -> Vec<(Field, Field)> {
    let mut pairs = Vec::new();
    for (i, &x) in Field::ALL.iter().enumerate() {
        for &y in &Field::ALL[i + 1..] {
            pairs.push((x, y));
        }
    }
    pairs
}

/// `[x, y]` per record, in snapshot order.
pub fn points(summary: &ScheduleSummary, x: Field, y: Field) -> Vec<[f64; 2]> {
    report::rows(summary)
        .iter()
        .map(|row| [x.value(row), y.value(row)])
        .collect()
}
