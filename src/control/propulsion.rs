/// Compressed-gas canister thrust. Peaks at ignition and decays
/// exponentially as the propellant is used up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropulsionSystem {
    pub max_thrust: f64,
    pub decay_rate: f64,
}

impl PropulsionSystem {
    pub fn new(max_thrust: f64, decay_rate: f64) -> Self {
        PropulsionSystem {
            max_thrust,
            decay_rate,
        }
    }

    pub fn get_thrust(&self, time: f64) -> f64 {
        self.max_thrust * (-self.decay_rate * time).exp()
    }
}
