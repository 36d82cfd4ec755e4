use crate::constants::REST_VELOCITY_THRESHOLD;

/// Which friction law applies. Derived from the current velocity every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionRegime {
    AtRest,
    Moving,
}

impl MotionRegime {
    pub fn from_velocity(velocity: f64) -> Self {
        if velocity < REST_VELOCITY_THRESHOLD {
            MotionRegime::AtRest
        } else {
            MotionRegime::Moving
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Friction {
    pub static_force: f64,
    pub kinetic_force: f64,
}

impl Friction {
    pub fn new(static_force: f64, kinetic_force: f64) -> Self {
        Friction {
            static_force,
            kinetic_force,
        }
    }

    /// Combines thrust, drag and friction into the force along the track.
    ///
    /// At rest the static force only gates breakaway: below it the car is
    /// pinned and the net force is exactly zero, at or above it kinetic
    /// friction applies straight away.
    pub fn resolve_net_force(&self, regime: MotionRegime, thrust: f64, drag: f64) -> f64 {
        match regime {
            MotionRegime::AtRest if thrust < self.static_force => 0.0,
            MotionRegime::AtRest | MotionRegime::Moving => thrust - drag - self.kinetic_force,
        }
    }
}
