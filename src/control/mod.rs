pub mod car;
pub mod environment;
pub mod friction;
pub mod parameters;
pub mod propulsion;
