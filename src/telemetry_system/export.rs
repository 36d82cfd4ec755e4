//! Tabular and JSON output of a finished run.
//!
//! The workbook is a directory holding one CSV file per sheet, named after
//! the sheet.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::FINISH_TIME_EXPORT_DECIMALS;
use crate::control::parameters::CarInputs;
use crate::errors::SimulationError;
use crate::trajectory_system::trace::{RunOutcome, SimulationTrace};

pub const PARAMETERS_SHEET: &str = "Parameters";
pub const SIMULATION_SHEET: &str = "Simulation Data";
pub const FINISH_TIME_LABEL: &str = "Finish Time (s)";
pub const PARAMETER_COLUMNS: [&str; 2] = ["Parameter", "Value"];
pub const SIMULATION_COLUMNS: [&str; 4] = [
    "Time (s)",
    "Position (m)",
    "Velocity (m/s)",
    "Acceleration (m/s²)",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(name: &str, header: &[&str]) -> Self {
        Sheet {
            name: name.to_string(),
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn write_csv<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.to_csv().as_bytes())
    }

    pub fn to_csv(&self) -> String {
        let mut csv = csv_line(&self.header);
        for row in &self.rows {
            csv.push_str(&csv_line(row));
        }
        csv
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name)
    }
}

fn csv_line(fields: &[String]) -> String {
    let line: Vec<String> = fields.iter().map(|f| escape_csv_field(f)).collect();
    format!("{}\n", line.join(","))
}

fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn parameters_sheet(inputs: &CarInputs, finish_time: f64) -> Sheet {
    let mut sheet = Sheet::new(PARAMETERS_SHEET, &PARAMETER_COLUMNS);
    for (label, value) in inputs.labelled_values() {
        sheet.push_row(vec![label.to_string(), value.to_string()]);
    }
    sheet.push_row(vec![
        FINISH_TIME_LABEL.to_string(),
        round_to(finish_time, FINISH_TIME_EXPORT_DECIMALS).to_string(),
    ]);
    sheet
}

pub fn simulation_sheet(trace: &SimulationTrace) -> Sheet {
    let mut sheet = Sheet::new(SIMULATION_SHEET, &SIMULATION_COLUMNS);
    for sample in trace.samples() {
        sheet.push_row(vec![
            sample.time.to_string(),
            sample.position.to_string(),
            sample.velocity.to_string(),
            sample.acceleration.to_string(),
        ]);
    }
    sheet
}

/// `f1_race_simulation_results_<ms>ms`, with the finish time truncated to
/// whole milliseconds.
pub fn workbook_name(finish_time: f64) -> String {
    format!(
        "f1_race_simulation_results_{}ms",
        (finish_time * 1000.0).floor() as i64
    )
}

/// Writes both sheets into a new workbook directory under `dir` and returns
/// its path.
pub fn write_workbook(
    dir: &Path,
    inputs: &CarInputs,
    trace: &SimulationTrace,
) -> Result<PathBuf, SimulationError> {
    let workbook = dir.join(workbook_name(trace.finish_time()));
    fs::create_dir_all(&workbook)?;

    for sheet in [
        parameters_sheet(inputs, trace.finish_time()),
        simulation_sheet(trace),
    ] {
        let mut writer = BufWriter::new(File::create(workbook.join(sheet.file_name()))?);
        sheet.write_csv(&mut writer)?;
        writer.flush()?;
    }

    Ok(workbook)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub inputs: CarInputs,
    pub finish_time: f64,
    pub outcome: RunOutcome,
    pub final_position: f64,
    pub max_velocity: f64,
    pub max_acceleration: f64,
    pub breakaway_time: Option<f64>,
    pub interpolated_crossing_time: Option<f64>,
    pub sample_count: usize,
}

impl RunSummary {
    pub fn new(inputs: &CarInputs, trace: &SimulationTrace) -> Self {
        RunSummary {
            inputs: *inputs,
            finish_time: round_to(trace.finish_time(), FINISH_TIME_EXPORT_DECIMALS),
            outcome: trace.outcome(inputs.track_length),
            final_position: trace.final_position(),
            max_velocity: trace.max_velocity(),
            max_acceleration: trace.max_acceleration(),
            breakaway_time: trace.breakaway_time(),
            interpolated_crossing_time: trace.interpolated_crossing_time(inputs.track_length),
            sample_count: trace.len(),
        }
    }
}

pub fn write_summary_file(path: &Path, summary: &RunSummary) -> Result<(), SimulationError> {
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)?;
    Ok(())
}
