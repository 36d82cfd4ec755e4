use crate::control::environment::Environment;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub frontal_area: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, frontal_area: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            frontal_area,
        }
    }

    /// Magnitude of the drag force. The car only ever moves forward, so the
    /// caller subtracts it.
    pub fn calculate_drag(&self, velocity: f64, environment: &Environment) -> f64 {
        let dynamic_pressure = self.calculate_dynamic_pressure(velocity, environment);
        dynamic_pressure * self.drag_coefficient * self.frontal_area
    }

    fn calculate_dynamic_pressure(&self, velocity: f64, environment: &Environment) -> f64 {
        0.5 * environment.air_density * velocity.powi(2)
    }
}
