use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::GRAMS_PER_KILOGRAM;
use crate::errors::SimulationError;

/// Physical inputs of one run, in SI units. The integrator trusts these
/// values; range checks happen in [`CarInputs::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub mass: f64, // kg
    pub drag_coefficient: f64,
    pub frontal_area: f64,           // m²
    pub max_thrust: f64,             // N
    pub thrust_decay_rate: f64,      // 1/s
    pub static_friction_force: f64,  // N
    pub kinetic_friction_force: f64, // N
    pub track_length: f64,           // m
}

impl Default for SimulationParameters {
    fn default() -> Self {
        CarInputs::default().into()
    }
}

/// Documented label, inclusive range and default of one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl ParameterSpec {
    pub fn check(&self, value: f64) -> Result<(), SimulationError> {
        if !value.is_finite() {
            return Err(SimulationError::ParameterError(format!(
                "{} must be a finite number, got {}",
                self.name, value
            )));
        }
        if value < self.min || value > self.max {
            return Err(SimulationError::ParameterError(format!(
                "{} = {} is outside the allowed range [{}, {}]",
                self.name, value, self.min, self.max
            )));
        }
        Ok(())
    }
}

pub const MASS_GRAMS: ParameterSpec = ParameterSpec {
    name: "mass",
    label: "Car Mass (grams)",
    min: 30.0,
    max: 200.0,
    default: 55.0,
};

pub const DRAG_COEFFICIENT: ParameterSpec = ParameterSpec {
    name: "drag_coefficient",
    label: "Drag Coefficient (Cd)",
    min: 0.05,
    max: 1.5,
    default: 0.50,
};

pub const FRONTAL_AREA: ParameterSpec = ParameterSpec {
    name: "frontal_area",
    label: "Frontal Area (m²)",
    min: 0.0005,
    max: 0.01,
    default: 0.0039,
};

pub const MAX_THRUST: ParameterSpec = ParameterSpec {
    name: "max_thrust",
    label: "Max Thrust Force (N)",
    min: 1.0,
    max: 40.0,
    default: 22.0,
};

pub const THRUST_DECAY_RATE: ParameterSpec = ParameterSpec {
    name: "thrust_decay_rate",
    label: "Thrust Decay Rate (1/s)",
    min: 1.0,
    max: 50.0,
    default: 17.0,
};

pub const STATIC_FRICTION_FORCE: ParameterSpec = ParameterSpec {
    name: "static_friction_force",
    label: "Static Friction Force (N)",
    min: 0.0,
    max: 1.0,
    default: 0.90,
};

pub const KINETIC_FRICTION_FORCE: ParameterSpec = ParameterSpec {
    name: "kinetic_friction_force",
    label: "Kinetic Friction Force (N)",
    min: 0.0,
    max: 0.1,
    default: 0.065,
};

pub const TRACK_LENGTH: ParameterSpec = ParameterSpec {
    name: "track_length",
    label: "Track Length (m)",
    min: 5.0,
    max: 50.0,
    default: 20.0,
};

/// Display order used by the parameters sheet.
pub const PARAMETER_SPECS: [ParameterSpec; 8] = [
    MASS_GRAMS,
    DRAG_COEFFICIENT,
    FRONTAL_AREA,
    MAX_THRUST,
    THRUST_DECAY_RATE,
    STATIC_FRICTION_FORCE,
    KINETIC_FRICTION_FORCE,
    TRACK_LENGTH,
];

/// Inputs as a user enters them. Mass is in grams here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarInputs {
    pub mass_grams: f64,
    pub drag_coefficient: f64,
    pub frontal_area: f64,
    pub max_thrust: f64,
    pub thrust_decay_rate: f64,
    pub static_friction_force: f64,
    pub kinetic_friction_force: f64,
    pub track_length: f64,
}

impl Default for CarInputs {
    fn default() -> Self {
        CarInputs {
            mass_grams: MASS_GRAMS.default,
            drag_coefficient: DRAG_COEFFICIENT.default,
            frontal_area: FRONTAL_AREA.default,
            max_thrust: MAX_THRUST.default,
            thrust_decay_rate: THRUST_DECAY_RATE.default,
            static_friction_force: STATIC_FRICTION_FORCE.default,
            kinetic_friction_force: KINETIC_FRICTION_FORCE.default,
            track_length: TRACK_LENGTH.default,
        }
    }
}

impl CarInputs {
    /// Parses a parameter file without range checks, so overrides can still
    /// correct a value before [`Self::to_parameters`] validates.
    pub fn from_json_str(json: &str) -> Result<Self, SimulationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, SimulationError> {
        let json = fs::read_to_string(path).map_err(|e| {
            SimulationError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    /// Values in [`PARAMETER_SPECS`] order.
    pub fn values(&self) -> [f64; 8] {
        [
            self.mass_grams,
            self.drag_coefficient,
            self.frontal_area,
            self.max_thrust,
            self.thrust_decay_rate,
            self.static_friction_force,
            self.kinetic_friction_force,
            self.track_length,
        ]
    }

    pub fn labelled_values(&self) -> Vec<(&'static str, f64)> {
        PARAMETER_SPECS
            .iter()
            .zip(self.values())
            .map(|(spec, value)| (spec.label, value))
            .collect()
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        for (spec, value) in PARAMETER_SPECS.iter().zip(self.values()) {
            spec.check(value)?;
        }
        Ok(())
    }

    pub fn to_parameters(&self) -> Result<SimulationParameters, SimulationError> {
        self.validate()?;
        Ok((*self).into())
    }

    /// Defaults, then the parameter file if any, then the overrides.
    pub fn resolve(
        params_file: Option<&Path>,
        overrides: &InputOverrides,
    ) -> Result<Self, SimulationError> {
        let mut inputs = match params_file {
            Some(path) => CarInputs::from_json_file(path)?,
            None => CarInputs::default(),
        };
        overrides.apply_to(&mut inputs);
        Ok(inputs)
    }
}

/// Individually set inputs, e.g. from command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputOverrides {
    pub mass_grams: Option<f64>,
    pub drag_coefficient: Option<f64>,
    pub frontal_area: Option<f64>,
    pub max_thrust: Option<f64>,
    pub thrust_decay_rate: Option<f64>,
    pub static_friction_force: Option<f64>,
    pub kinetic_friction_force: Option<f64>,
    pub track_length: Option<f64>,
}

impl InputOverrides {
    pub fn apply_to(&self, inputs: &mut CarInputs) {
        let fields = [
            (self.mass_grams, &mut inputs.mass_grams),
            (self.drag_coefficient, &mut inputs.drag_coefficient),
            (self.frontal_area, &mut inputs.frontal_area),
            (self.max_thrust, &mut inputs.max_thrust),
            (self.thrust_decay_rate, &mut inputs.thrust_decay_rate),
            (self.static_friction_force, &mut inputs.static_friction_force),
            (self.kinetic_friction_force, &mut inputs.kinetic_friction_force),
            (self.track_length, &mut inputs.track_length),
        ];
        for (value, field) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

impl From<CarInputs> for SimulationParameters {
    fn from(inputs: CarInputs) -> Self {
        SimulationParameters {
            mass: inputs.mass_grams / GRAMS_PER_KILOGRAM,
            drag_coefficient: inputs.drag_coefficient,
            frontal_area: inputs.frontal_area,
            max_thrust: inputs.max_thrust,
            thrust_decay_rate: inputs.thrust_decay_rate,
            static_friction_force: inputs.static_friction_force,
            kinetic_friction_force: inputs.kinetic_friction_force,
            track_length: inputs.track_length,
        }
    }
}
