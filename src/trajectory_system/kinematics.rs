use crate::control::{car::Car, environment::Environment, friction::MotionRegime};

use super::trace::Sample;

/// One-dimensional motion state along the track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kinematics {
    pub time: f64,
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
}

impl Kinematics {
    pub fn new() -> Self {
        Kinematics::default()
    }

    /// Advances one explicit Euler step. Velocity is updated first and the
    /// new velocity moves the car, velocity never drops below zero.
    pub fn update(&mut self, delta_time: f64, car: &Car, environment: &Environment) {
        let acceleration = car.calculate_acceleration(self.time, self.velocity, environment);

        self.velocity += acceleration * delta_time;
        if self.velocity < 0.0 {
            self.velocity = 0.0;
        }
        self.position += self.velocity * delta_time;
        self.time += delta_time;
        self.acceleration = acceleration;
    }

    pub fn has_reached(&self, distance: f64) -> bool {
        self.position >= distance
    }

    pub fn get_regime(&self) -> MotionRegime {
        MotionRegime::from_velocity(self.velocity)
    }

    pub fn get_sample(&self) -> Sample {
        Sample {
            time: self.time,
            position: self.position,
            velocity: self.velocity,
            acceleration: self.acceleration,
        }
    }
}
