//! Deterministic scale for simulations and tests.

use crate::oracle::WeighingOracle;
use crate::types::{ItemId, Outcome, ScaleError, ScaleResult};

/// A simulated balance that knows which item is anomalous.
///
/// Enforces the oracle precondition: the two groups must be non-empty,
/// disjoint, and of equal size.
#[derive(Debug, Clone)]
pub struct SimulatedScale {
    anomaly: ItemId,
    comparisons: usize,
}

impl SimulatedScale {
    /// Create a scale with `anomaly` designated as the odd item.
    pub fn new(anomaly: ItemId) -> Self {
        Self {
            anomaly,
            comparisons: 0,
        }
    }

    /// The designated anomalous item.
    pub fn anomaly(&self) -> ItemId {
        self.anomaly
    }

    /// Number of comparisons performed so far.
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }
}

impl WeighingOracle for SimulatedScale {
    fn compare(&mut self, left: &[ItemId], right: &[ItemId]) -> ScaleResult<Outcome> {
        if left.is_empty() || left.len() != right.len() {
            return Err(ScaleError::Oracle(format!(
                "groups must be non-empty and equal size, got {} and {}",
                left.len(),
                right.len()
            )));
        }
        if left.iter().any(|id| right.contains(id)) {
            return Err(ScaleError::Oracle("compared groups overlap".to_string()));
        }

        self.comparisons += 1;

        if left.contains(&self.anomaly) {
            Ok(Outcome::LeftIndicated)
        } else if right.contains(&self.anomaly) {
            Ok(Outcome::RightIndicated)
        } else {
            Ok(Outcome::Balanced)
        }
    }
}
