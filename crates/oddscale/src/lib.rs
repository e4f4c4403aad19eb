//! Oddscale — isolate a single anomalous item with an abstract balance oracle.

pub mod locator;
pub mod oracle;
pub mod sim;
pub mod types;

pub use locator::{is_resolvable, locate, max_weighings};
pub use oracle::{Transcript, WeighingOracle};
pub use sim::SimulatedScale;
pub use types::*;
