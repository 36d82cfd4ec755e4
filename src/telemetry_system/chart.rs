use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::errors::SimulationError;
use crate::trajectory_system::trace::{Sample, SimulationTrace};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub unit: String,
    pub points: Vec<(f64, f64)>,
}

/// Position, velocity and acceleration against time on one shared y-axis,
/// ready for an external plotting tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    pub fn from_trace(trace: &SimulationTrace) -> Self {
        let samples = trace.samples();
        let series = |name: &str, unit: &str, value: fn(&Sample) -> f64| ChartSeries {
            name: format!("{} ({})", name, unit),
            unit: unit.to_string(),
            points: samples.iter().map(|s| (s.time, value(s))).collect(),
        };

        ChartData {
            title: "Race Simulation".to_string(),
            x_label: "Time (s)".to_string(),
            y_label: "Value".to_string(),
            series: vec![
                series("Position", "m", |s| s.position),
                series("Velocity", "m/s", |s| s.velocity),
                series("Acceleration", "m/s²", |s| s.acceleration),
            ],
        }
    }

    pub fn write_json_file(&self, path: &Path) -> Result<(), SimulationError> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
