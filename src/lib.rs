pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::car::Car;
pub use control::environment::Environment;
pub use control::friction::{Friction, MotionRegime};
pub use control::parameters::{
    CarInputs, InputOverrides, ParameterSpec, SimulationParameters, PARAMETER_SPECS,
};
pub use control::propulsion::PropulsionSystem;
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::kinematics::Kinematics;
pub use trajectory_system::simulation::{simulate, simulate_with, SimulationConfig};
pub use trajectory_system::trace::{RunOutcome, Sample, SimulationTrace};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;
pub use telemetry_system::{chart, export};
