use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::process::ProcessRecord;
use crate::scheduler::ScheduleSummary;

pub const HEADERS: [&str; 5] = [
    "PID",
    "Arrival Time",
    "Burst Time",
    "Completion Time",
    "Turnaround Time",
];

const COL_WIDTHS: [usize; 5] = [10, 15, 15, 15, 15];

/// One table row: the five numeric fields shown and exported per process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "PID")]
    pub pid: u32,
    #[serde(rename = "Arrival Time")]
    pub arrival_time: f64,
    #[serde(rename = "Burst Time")]
    pub burst_time: f64,
    #[serde(rename = "Completion Time")]
    pub completion_time: f64,
    #[serde(rename = "Turnaround Time")]
    pub turnaround_time: f64,
}

impl From<&ProcessRecord> for ReportRow {
    fn from(record: &ProcessRecord) -> Self {
        ReportRow {
            pid: record.pid,
            arrival_time: record.arrival_time,
            burst_time: record.burst_time,
            completion_time: record.completion_time,
            turnaround_time: record.turnaround_time(),
        }
    }
}

impl ReportRow {
    pub fn cells(&self) -> [String; 5] {
        [
            self.pid.to_string(),
            format!("{:.2}", self.arrival_time),
            format!("{:.2}", self.burst_time),
            format!("{:.2}", self.completion_time),
            format!("{:.2}", self.turnaround_time),
        ]
    }
}

pub fn rows(summary: &ScheduleSummary) -> Vec<ReportRow> {
    summary.records.iter().map(ReportRow::from).collect()
}

pub fn average_line(summary: &ScheduleSummary) -> String {
    match summary.average_turnaround {
        Some(average) => format!("Average Turnaround Time: {:.2}", average),
        None => "Average Turnaround Time: no data".to_string(),
    }
}

fn format_line<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .zip(COL_WIDTHS)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

/// Fixed-width text table with a trailing average row.
pub fn render_table(summary: &ScheduleSummary) -> String {
    let divider: Vec<String> = COL_WIDTHS.iter().map(|w| "-".repeat(*w)).collect();
    let divider = format_line(&divider);

    let mut out = String::new();
    out.push_str(&format_line(&HEADERS));
    out.push('\n');
    out.push_str(&divider);
    out.push('\n');
    for row in rows(summary) {
        out.push_str(&format_line(&row.cells()));
        out.push('\n');
    }
    out.push_str(&divider);
    out.push('\n');
    out.push_str(&average_line(summary));
    out.push('\n');
    out
}

/// Flat CSV of the five fields per record, header first.
pub fn write_csv<W: Write>(summary: &ScheduleSummary, mut writer: W) -> Result<()> {
    writeln!(writer, "{}", HEADERS.join(","))?;
    for row in rows(summary) {
        writeln!(
            writer,
            "{},{},{},{},{}",
            row.pid, row.arrival_time, row.burst_time, row.completion_time, row.turnaround_time
        )?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport {
    records: Vec<ReportRow>,
    average_turnaround: Option<f64>,
}

pub fn write_json<W: Write>(summary: &ScheduleSummary, mut writer: W) -> Result<()> {
    let report = JsonReport {
        records: rows(summary),
        average_turnaround: summary.average_turnaround,
    };
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn save_csv(summary: &ScheduleSummary, path: &Path) -> Result<()> {
    write_csv(summary, BufWriter::new(File::create(path)?))?;
    tracing::info!(path = %path.display(), records = summary.records.len(), "Exported CSV");
    Ok(())
}

pub fn save_json(summary: &ScheduleSummary, path: &Path) -> Result<()> {
    write_json(summary, BufWriter::new(File::create(path)?))?;
    tracing::info!(path = %path.display(), records = summary.records.len(), "Exported JSON");
    Ok(())
}
