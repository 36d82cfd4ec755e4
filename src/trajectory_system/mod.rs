pub mod aerodynamics;
pub mod kinematics;
pub mod simulation;
pub mod trace;
