use serde::{Deserialize, Serialize};

/// State of the car at one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,         // s
    pub position: f64,     // m
    pub velocity: f64,     // m/s
    pub acceleration: f64, // m/s²
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Finished,
    TimedOut,
}

/// Recorded history of one run. Never empty: the initial state is always
/// the first sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationTrace {
    samples: Vec<Sample>,
}

impl SimulationTrace {
    pub(crate) fn new(initial: Sample) -> Self {
        SimulationTrace {
            samples: vec![initial],
        }
    }

    pub(crate) fn record(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// The initial state has no step of its own, so it takes the
    /// acceleration of the first step. Stays at zero if no step ran.
    pub(crate) fn align_initial_acceleration(&mut self) {
        if let Some(first_step) = self.samples.get(1).map(|s| s.acceleration) {
            self.samples[0].acceleration = first_step;
        }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn final_sample(&self) -> Sample {
        self.samples.last().copied().unwrap_or_default()
    }

    /// Time at loop exit, whether or not the car reached the finish line.
    pub fn finish_time(&self) -> f64 {
        self.final_sample().time
    }

    pub fn final_position(&self) -> f64 {
        self.final_sample().position
    }

    pub fn outcome(&self, track_length: f64) -> RunOutcome {
        if self.final_position() >= track_length {
            RunOutcome::Finished
        } else {
            RunOutcome::TimedOut
        }
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    pub fn positions(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.position).collect()
    }

    pub fn velocities(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.velocity).collect()
    }

    pub fn accelerations(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.acceleration).collect()
    }

    pub fn max_velocity(&self) -> f64 {
        self.samples.iter().map(|s| s.velocity).fold(0.0, f64::max)
    }

    pub fn max_acceleration(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.acceleration)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Time of the first sample where the car has left the start.
    pub fn breakaway_time(&self) -> Option<f64> {
        self.samples.iter().find(|s| s.velocity > 0.0).map(|s| s.time)
    }

    /// Linear estimate of when the car passed `track_length`, between the
    /// two samples that bracket it. Does not affect [`Self::finish_time`].
    pub fn interpolated_crossing_time(&self, track_length: f64) -> Option<f64> {
        let index = self
            .samples
            .iter()
            .position(|s| s.position >= track_length)?;
        if index == 0 {
            return Some(self.samples[0].time);
        }

        let before = self.samples[index - 1];
        let after = self.samples[index];
        let fraction = (track_length - before.position) / (after.position - before.position);
        Some(before.time + fraction * (after.time - before.time))
    }
}
