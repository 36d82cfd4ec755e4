// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s² (not part of the force balance)
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³

// Simulation Parameters
pub const TIME_STEP: f64 = 0.001; // s
pub const MAX_SIMULATION_TIME: f64 = 5.0; // s
pub const MAX_STEP_COUNT: usize = 1_000_000;

// Friction regime
pub const REST_VELOCITY_THRESHOLD: f64 = 0.01; // m/s, below this the car counts as at rest

// Unit conversion
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

// Export
pub const FINISH_TIME_EXPORT_DECIMALS: i32 = 5;
