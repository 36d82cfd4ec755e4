use std::fs;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::{rngs::StdRng, Rng, SeedableRng};
use race_simulation::{
    chart::ChartData, export, simulate, CarInputs, InputOverrides, MotionRegime, RunOutcome, SimulationError,
    SimulationParameters, SimulationTrace, Telemetry, MAX_SIMULATION_TIME, PARAMETER_SPECS,
    TIME_STEP,
};

fn run(inputs: &CarInputs) -> (SimulationParameters, SimulationTrace) {
    let params = inputs
        .to_parameters()
        .expect("test inputs should be within range");
    (params, simulate(&params))
}

fn random_inputs(rng: &mut StdRng) -> CarInputs {
    let mut values = [0.0; 8];
    for (value, spec) in values.iter_mut().zip(PARAMETER_SPECS.iter()) {
        *value = rng.gen_range(spec.min..=spec.max);
    }
    CarInputs {
        mass_grams: values[0],
        drag_coefficient: values[1],
        frontal_area: values[2],
        max_thrust: values[3],
        thrust_decay_rate: values[4],
        static_friction_force: values[5],
        kinetic_friction_force: values[6],
        track_length: values[7],
    }
}

fn assert_trace_invariants(params: &SimulationParameters, trace: &SimulationTrace) {
    let samples = trace.samples();
    assert!(!samples.is_empty());
    assert_eq!(samples[0].time, 0.0);
    assert_eq!(samples[0].position, 0.0);
    assert_eq!(samples[0].velocity, 0.0);

    for pair in samples.windows(2) {
        let (before, after) = (pair[0], pair[1]);
        assert!(after.time > before.time, "time must increase");
        assert_abs_diff_eq!(after.time - before.time, TIME_STEP, epsilon = 1e-9);
        assert!(after.position >= before.position, "position must not decrease");
    }
    assert!(samples.iter().all(|s| s.velocity >= 0.0));

    let last = trace.final_sample();
    assert!(last.time <= MAX_SIMULATION_TIME + TIME_STEP + 1e-9);
    assert!(last.position >= params.track_length || last.time >= MAX_SIMULATION_TIME);

    let len = trace.len();
    assert_eq!(trace.times().len(), len);
    assert_eq!(trace.positions().len(), len);
    assert_eq!(trace.velocities().len(), len);
    assert_eq!(trace.accelerations().len(), len);
}

#[test]
fn test_default_race_finishes() {
    let (params, trace) = run(&CarInputs::default());

    assert_trace_invariants(&params, &trace);
    assert!(trace.finish_time() > 0.0 && trace.finish_time() < 5.0);
    assert_relative_eq!(trace.finish_time(), 1.137, epsilon = 1e-9);
    assert!(trace.final_position() >= 20.0);
    assert!(trace.final_position() < 20.0 + trace.max_velocity() * TIME_STEP);
    assert_eq!(trace.outcome(params.track_length), RunOutcome::Finished);
}

#[test]
fn test_determinism() {
    let inputs = CarInputs::default();
    let (_, first) = run(&inputs);
    let (_, second) = run(&inputs);

    assert_eq!(first, second);
}

#[test]
fn test_stall_below_static_friction() {
    // Thrust starts at 0.5 N and only decays, so it never beats 0.9 N.
    let params = SimulationParameters {
        max_thrust: 0.5,
        ..SimulationParameters::default()
    };
    let trace = simulate(&params);

    assert_trace_invariants(&params, &trace);
    assert!(trace.velocities().iter().all(|&v| v == 0.0));
    assert_eq!(trace.final_position(), 0.0);
    assert_abs_diff_eq!(trace.finish_time(), MAX_SIMULATION_TIME, epsilon = 1e-9);
    assert_eq!(trace.outcome(params.track_length), RunOutcome::TimedOut);
}

#[test]
fn test_low_resistance_finishes_sooner() {
    let (_, baseline) = run(&CarInputs::default());
    let slippery = CarInputs {
        drag_coefficient: 0.05,
        static_friction_force: 0.0,
        kinetic_friction_force: 0.0,
        ..CarInputs::default()
    };
    let (params, trace) = run(&slippery);

    assert_trace_invariants(&params, &trace);
    assert_eq!(trace.outcome(params.track_length), RunOutcome::Finished);
    assert!(trace.finish_time() < baseline.finish_time());
    assert_relative_eq!(trace.finish_time(), 0.919, epsilon = 1e-9);
}

#[test]
fn test_long_track_times_out() {
    let weak = CarInputs {
        mass_grams: 200.0,
        max_thrust: 1.0,
        thrust_decay_rate: 50.0,
        track_length: 50.0,
        ..CarInputs::default()
    };
    let (params, trace) = run(&weak);

    assert_trace_invariants(&params, &trace);
    assert!(trace.finish_time() >= MAX_SIMULATION_TIME);
    assert!(trace.final_position() < params.track_length);
    assert_eq!(trace.outcome(params.track_length), RunOutcome::TimedOut);
    assert_eq!(trace.interpolated_crossing_time(params.track_length), None);

    // Slowing into the at-rest band with thrust below static friction pins
    // the net force at zero, so the car creeps on at its last velocity.
    let last = trace.final_sample();
    assert_eq!(MotionRegime::from_velocity(last.velocity), MotionRegime::AtRest);
    assert!(last.velocity > 0.0);
    assert_eq!(last.acceleration, 0.0);
}

#[test]
fn test_heavier_car_is_slower() {
    let (_, light) = run(&CarInputs::default());
    let (_, heavy) = run(&CarInputs {
        mass_grams: 150.0,
        ..CarInputs::default()
    });

    assert!(heavy.finish_time() > light.finish_time());
    assert!(heavy.max_velocity() < light.max_velocity());
}

#[test]
fn test_random_inputs_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let inputs = random_inputs(&mut rng);
        let (params, trace) = run(&inputs);
        assert_trace_invariants(&params, &trace);

        let outcome = trace.outcome(params.track_length);
        if outcome == RunOutcome::Finished {
            let crossing = trace.interpolated_crossing_time(params.track_length).unwrap();
            assert!(crossing <= trace.finish_time());
            assert!(crossing >= trace.finish_time() - TIME_STEP - 1e-9);
        }
    }
}

#[test]
fn test_telemetry_matches_trace() {
    let (params, trace) = run(&CarInputs::default());
    let telemetry = Telemetry::from_trace(&trace, params.track_length);

    assert_eq!(telemetry.get_outcome(), RunOutcome::Finished);
    assert_eq!(telemetry.get_finish_time(), trace.finish_time());
    assert_eq!(telemetry.get_max_velocity(), trace.max_velocity());
    assert!(!telemetry.log.is_empty());
}

#[test]
fn test_export_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = CarInputs::default();
    let (_, trace) = run(&inputs);

    let workbook = export::write_workbook(dir.path(), &inputs, &trace).unwrap();
    assert!(workbook.ends_with("f1_race_simulation_results_1136ms"));

    let parameters = fs::read_to_string(workbook.join("Parameters.csv")).unwrap();
    let lines: Vec<&str> = parameters.lines().collect();
    assert_eq!(lines[0], "Parameter,Value");
    assert_eq!(lines[1], "Car Mass (grams),55");
    assert_eq!(lines[9], "Finish Time (s),1.137");
    assert_eq!(lines.len(), 10);

    let data = fs::read_to_string(workbook.join("Simulation Data.csv")).unwrap();
    let mut rows = data.lines();
    assert_eq!(
        rows.next(),
        Some("Time (s),Position (m),Velocity (m/s),Acceleration (m/s²)")
    );
    assert_eq!(rows.count(), trace.len());
}

#[test]
fn test_summary_and_chart_files() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = CarInputs::default();
    let (_, trace) = run(&inputs);

    let summary_path = dir.path().join("summary.json");
    export::write_summary_file(&summary_path, &export::RunSummary::new(&inputs, &trace))
        .unwrap();
    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(summary["outcome"], "Finished");
    assert_eq!(summary["finish_time"], 1.137);
    assert_eq!(summary["inputs"]["mass_grams"], 55.0);

    let chart_path = dir.path().join("chart.json");
    ChartData::from_trace(&trace)
        .write_json_file(&chart_path)
        .unwrap();
    let chart: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&chart_path).unwrap()).unwrap();
    assert_eq!(chart["series"].as_array().unwrap().len(), 3);
    assert_eq!(chart["series"][2]["name"], "Acceleration (m/s²)");
}

#[test]
fn test_parameter_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.json");
    fs::write(&path, r#"{ "max_thrust": 30.0, "track_length": 25.0 }"#).unwrap();

    let inputs = CarInputs::from_json_file(&path).unwrap();
    assert_eq!(inputs.max_thrust, 30.0);
    assert_eq!(inputs.mass_grams, 55.0);

    let (params, trace) = run(&inputs);
    assert_eq!(trace.outcome(params.track_length), RunOutcome::Finished);
}

#[test]
fn test_flag_overrides_file_overrides_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.json");
    fs::write(&path, r#"{ "mass_grams": 500.0, "max_thrust": 30.0 }"#).unwrap();

    let file_only =
        CarInputs::resolve(Some(path.as_path()), &InputOverrides::default()).unwrap();
    assert!(matches!(
        file_only.to_parameters(),
        Err(SimulationError::ParameterError(_))
    ));

    let overrides = InputOverrides {
        mass_grams: Some(80.0),
        ..InputOverrides::default()
    };
    let inputs = CarInputs::resolve(Some(path.as_path()), &overrides).unwrap();
    assert_eq!(inputs.mass_grams, 80.0);
    assert_eq!(inputs.max_thrust, 30.0);
    assert_eq!(inputs.track_length, 20.0);

    let (params, trace) = run(&inputs);
    assert_eq!(trace.outcome(params.track_length), RunOutcome::Finished);
}

#[test]
fn test_out_of_range_inputs_rejected() {
    let inputs = CarInputs {
        mass_grams: 10.0,
        ..CarInputs::default()
    };
    match inputs.to_parameters() {
        Err(SimulationError::ParameterError(msg)) => assert!(msg.contains("mass")),
        other => panic!("expected a parameter error, got {:?}", other),
    }
}
