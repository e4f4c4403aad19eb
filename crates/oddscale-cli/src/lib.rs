//! Command-line driver for oddscale — simulated and operator-driven searches.

pub mod interactive;
pub mod report;

pub use interactive::{parse_reading, ReplScale};
pub use report::{render_weighings, run_simulation, SimulationReport};
