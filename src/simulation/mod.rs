//! Simulation driver: per-tick orchestration and the pacing boundary

pub mod driver;
pub mod tick;

pub use driver::{Simulation, TickDriver};
pub use tick::{run_simulation_tick, SimulationEvent};
