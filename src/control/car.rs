use crate::trajectory_system::aerodynamics::Aerodynamics;

use super::{
    environment::Environment,
    friction::{Friction, MotionRegime},
    parameters::SimulationParameters,
    propulsion::PropulsionSystem,
};

/// Force model of the car. Holds no motion state, so the same car can be
/// evaluated at any (time, velocity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Car {
    pub mass: f64,
    pub propulsion: PropulsionSystem,
    pub aerodynamics: Aerodynamics,
    pub friction: Friction,
}

impl Car {
    pub fn new(params: &SimulationParameters) -> Self {
        Car {
            mass: params.mass,
            propulsion: PropulsionSystem::new(params.max_thrust, params.thrust_decay_rate),
            aerodynamics: Aerodynamics::new(params.drag_coefficient, params.frontal_area),
            friction: Friction::new(
                params.static_friction_force,
                params.kinetic_friction_force,
            ),
        }
    }

    pub fn get_regime(&self, velocity: f64) -> MotionRegime {
        MotionRegime::from_velocity(velocity)
    }

    pub fn calculate_net_force(&self, time: f64, velocity: f64, environment: &Environment) -> f64 {
        let thrust = self.propulsion.get_thrust(time);
        let drag = self.aerodynamics.calculate_drag(velocity, environment);

        self.friction
            .resolve_net_force(self.get_regime(velocity), thrust, drag)
    }

    pub fn calculate_acceleration(
        &self,
        time: f64,
        velocity: f64,
        environment: &Environment,
    ) -> f64 {
        self.calculate_net_force(time, velocity, environment) / self.mass
    }
}
