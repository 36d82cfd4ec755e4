use crate::constants::{MAX_SIMULATION_TIME, MAX_STEP_COUNT, TIME_STEP};
use crate::control::{car::Car, environment::Environment, parameters::SimulationParameters};
use crate::errors::SimulationError;

use super::{kinematics::Kinematics, trace::SimulationTrace};

/// Fixed settings of the integrator. The defaults are the race constants;
/// other values are only meant for experiments and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub environment: Environment,
    pub time_step: f64,
    pub max_time: f64,
}

impl SimulationConfig {
    pub fn new(
        environment: Environment,
        time_step: f64,
        max_time: f64,
    ) -> Result<Self, SimulationError> {
        if !(time_step.is_finite() && time_step > 0.0) {
            return Err(SimulationError::ConfigError(format!(
                "time step must be positive, got {}",
                time_step
            )));
        }
        if !(max_time.is_finite() && max_time > 0.0) {
            return Err(SimulationError::ConfigError(format!(
                "maximum simulation time must be positive, got {}",
                max_time
            )));
        }
        let steps = (max_time / time_step).ceil();
        if steps > MAX_STEP_COUNT as f64 {
            return Err(SimulationError::ConfigError(format!(
                "{} s at a step of {} s needs {} steps, more than the limit of {}",
                max_time, time_step, steps, MAX_STEP_COUNT
            )));
        }
        Ok(SimulationConfig {
            environment,
            time_step,
            max_time,
        })
    }

    /// Upper bound on the number of steps, never above `MAX_STEP_COUNT + 1`.
    /// Accumulated rounding in the clock can cost one extra step, hence the `+ 1`.
    pub fn step_budget(&self) -> usize {
        if self.time_step > 0.0 && self.max_time.is_finite() {
            let steps = (self.max_time / self.time_step)
                .ceil()
                .min(MAX_STEP_COUNT as f64);
            steps as usize + 1
        } else {
            0
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            environment: Environment::new(),
            time_step: TIME_STEP,
            max_time: MAX_SIMULATION_TIME,
        }
    }
}

/// Runs the race with the default constants.
pub fn simulate(params: &SimulationParameters) -> SimulationTrace {
    simulate_with(params, &SimulationConfig::default())
}

/// Steps the car until it reaches the track length or the clock reaches
/// `max_time`. The crossing step is kept, so the last sample may overshoot
/// the finish line by up to one step of travel.
pub fn simulate_with(params: &SimulationParameters, config: &SimulationConfig) -> SimulationTrace {
    let car = Car::new(params);
    let mut kinematics = Kinematics::new();
    let mut trace = SimulationTrace::new(kinematics.get_sample());

    let budget = config.step_budget();
    let mut steps = 0;
    while !kinematics.has_reached(params.track_length)
        && kinematics.time < config.max_time
        && steps < budget
    {
        kinematics.update(config.time_step, &car, &config.environment);
        trace.record(kinematics.get_sample());
        steps += 1;
    }

    trace.align_initial_acceleration();
    trace
}
