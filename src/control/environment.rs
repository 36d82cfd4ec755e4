use crate::constants::{AIR_DENSITY_SEA_LEVEL, GRAVITY};

/// Ambient conditions along the track. They stay fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub air_density: f64,
    /// Carried for completeness; no force term depends on it yet.
    pub gravity: f64,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            air_density: AIR_DENSITY_SEA_LEVEL,
            gravity: GRAVITY,
        }
    }

    pub fn with_air_density(air_density: f64) -> Self {
        Environment {
            air_density,
            ..Environment::new()
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}
