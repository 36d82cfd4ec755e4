use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use race_simulation::*;

#[derive(Parser, Debug)]
#[command(
    name = "race_sim",
    version,
    about = "Simulate a gas-propelled model car from launch to the finish line"
)]
struct Opts {
    /// JSON parameter file; flags below override its values
    #[arg(long)]
    params: Option<PathBuf>,

    /// Car mass in grams
    #[arg(long)]
    mass: Option<f64>,

    /// Drag coefficient (Cd)
    #[arg(long)]
    drag_coefficient: Option<f64>,

    /// Frontal area in m²
    #[arg(long)]
    frontal_area: Option<f64>,

    /// Peak thrust in N
    #[arg(long)]
    max_thrust: Option<f64>,

    /// Thrust decay rate in 1/s
    #[arg(long)]
    thrust_decay_rate: Option<f64>,

    /// Static friction force in N
    #[arg(long)]
    static_friction: Option<f64>,

    /// Kinetic friction force in N
    #[arg(long)]
    kinetic_friction: Option<f64>,

    /// Track length in m
    #[arg(long)]
    track_length: Option<f64>,

    /// Directory to write the results workbook into
    #[arg(long)]
    export: Option<PathBuf>,

    /// Write a JSON run summary to this file
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Write chart series as JSON to this file
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Print the full race log
    #[arg(long)]
    verbose: bool,
}

impl Opts {
    fn overrides(&self) -> InputOverrides {
        InputOverrides {
            mass_grams: self.mass,
            drag_coefficient: self.drag_coefficient,
            frontal_area: self.frontal_area,
            max_thrust: self.max_thrust,
            thrust_decay_rate: self.thrust_decay_rate,
            static_friction_force: self.static_friction,
            kinetic_friction_force: self.kinetic_friction,
            track_length: self.track_length,
        }
    }
}

fn main() -> Result<()> {
    let opt = Opts::parse();

    let inputs = CarInputs::resolve(opt.params.as_deref(), &opt.overrides())?;
    let params = inputs.to_parameters()?;

    let trace = simulate(&params);
    let telemetry = Telemetry::from_trace(&trace, params.track_length);

    if opt.verbose {
        telemetry.display_data();
    } else {
        telemetry.display_summary();
    }

    if let Some(dir) = &opt.export {
        let workbook = export::write_workbook(dir, &inputs, &trace)?;
        println!("Workbook: {}", workbook.display());
    }
    if let Some(path) = &opt.summary {
        export::write_summary_file(path, &export::RunSummary::new(&inputs, &trace))?;
        println!("Summary: {}", path.display());
    }
    if let Some(path) = &opt.chart {
        chart::ChartData::from_trace(&trace).write_json_file(path)?;
        println!("Chart data: {}", path.display());
    }

    Ok(())
}
