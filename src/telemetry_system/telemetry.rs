use crate::control::friction::MotionRegime;
use crate::trajectory_system::trace::{RunOutcome, Sample, SimulationTrace};

pub struct Telemetry {
    pub log: Vec<String>,
    max_velocity: f64,
    max_acceleration: f64,
    breakaway_time: Option<f64>,
    state_times: Vec<(MotionRegime, f64)>,
    simulation_time: f64,
    position: f64,
    track_length: f64,
}

impl Telemetry {
    /// Summary figures come from the trace, so they always agree with the
    /// exported data. The log and regime transitions are replayed sample by
    /// sample.
    pub fn from_trace(trace: &SimulationTrace, track_length: f64) -> Self {
        let mut telemetry = Telemetry {
            log: Vec::new(),
            max_velocity: trace.max_velocity(),
            max_acceleration: trace.max_acceleration(),
            breakaway_time: trace.breakaway_time(),
            state_times: Vec::new(),
            simulation_time: 0.0,
            position: 0.0,
            track_length,
        };
        for sample in trace.samples() {
            telemetry.collect_data(sample);
        }
        telemetry.record_outcome();
        telemetry
    }

    fn format_time(elapsed_time: f64) -> String {
        format!("{:.3}s", elapsed_time)
    }

    fn format_distance(distance: f64) -> String {
        if distance < 1.0 {
            format!("{:.1} cm", distance * 100.0)
        } else {
            format!("{:.2} m", distance)
        }
    }

    fn collect_data(&mut self, sample: &Sample) {
        self.simulation_time = sample.time;
        self.position = sample.position;

        if self.breakaway_time == Some(sample.time) {
            self.log.push(format!(
                "{} | Breakaway, velocity {:.4} m/s",
                Self::format_time(sample.time),
                sample.velocity
            ));
        }

        let regime = MotionRegime::from_velocity(sample.velocity);
        let changed = match self.state_times.last() {
            Some((last_regime, _)) => *last_regime != regime,
            None => true,
        };
        if changed {
            self.state_times.push((regime, sample.time));
            self.log.push(format!(
                "{} | Regime {:?} at {} (velocity {:.4} m/s, acceleration {:.2} m/s²)",
                Self::format_time(sample.time),
                regime,
                Self::format_distance(sample.position),
                sample.velocity,
                sample.acceleration
            ));
        }
    }

    fn record_outcome(&mut self) {
        let entry = match self.get_outcome() {
            RunOutcome::Finished => format!(
                "{} | Crossed the finish line at {}",
                Self::format_time(self.simulation_time),
                Self::format_distance(self.position)
            ),
            RunOutcome::TimedOut => format!(
                "{} | Time limit reached at {} of {}",
                Self::format_time(self.simulation_time),
                Self::format_distance(self.position),
                Self::format_distance(self.track_length)
            ),
        };
        self.log.push(entry);
    }

    pub fn get_outcome(&self) -> RunOutcome {
        if self.position >= self.track_length {
            RunOutcome::Finished
        } else {
            RunOutcome::TimedOut
        }
    }

    pub fn get_max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn get_max_acceleration(&self) -> f64 {
        self.max_acceleration
    }

    pub fn get_breakaway_time(&self) -> Option<f64> {
        self.breakaway_time
    }

    pub fn get_state_times(&self) -> &[(MotionRegime, f64)] {
        &self.state_times
    }

    pub fn get_finish_time(&self) -> f64 {
        self.simulation_time
    }

    pub fn display_data(&self) {
        println!("--- Race Log ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Race Log ---");
        self.display_summary();
    }

    pub fn display_summary(&self) {
        println!("\n--- Race Summary ---");
        println!("Finish Time: {:.3} seconds", self.simulation_time);
        if self.get_outcome() == RunOutcome::TimedOut {
            println!(
                "Did not finish: stopped at {} of {}",
                Self::format_distance(self.position),
                Self::format_distance(self.track_length)
            );
        }
        println!("Max Velocity: {:.2} m/s", self.max_velocity);
        println!("Max Acceleration: {:.2} m/s²", self.max_acceleration);
        match self.breakaway_time {
            Some(time) => println!("Breakaway: {}", Self::format_time(time)),
            None => println!("Breakaway: never (thrust below static friction)"),
        }

        println!("\n--- Regime Transitions ---");
        for (regime, time) in &self.state_times {
            println!("Regime {:?} from: {}", regime, Self::format_time(*time));
        }
    }
}
