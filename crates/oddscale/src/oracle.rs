//! The balance oracle capability and transcript recording.

use crate::types::{ItemId, Outcome, ScaleResult, Weighing};

/// A balance that compares two disjoint, equal-size groups of items.
///
/// Implementations own all physical or simulated interaction; the search
/// only ever sees the three-way reading. Implementations must report a
/// failed comparison as an error rather than substitute a guessed reading.
pub trait WeighingOracle {
    /// Compare `left` against `right` and report the scale's reading.
    ///
    /// Callers guarantee the groups are disjoint and of equal length.
    fn compare(&mut self, left: &[ItemId], right: &[ItemId]) -> ScaleResult<Outcome>;
}

/// Records every weighing an inner oracle performs, in invocation order.
pub struct Transcript<O> {
    inner: O,
    weighings: Vec<Weighing>,
}

impl<O: WeighingOracle> Transcript<O> {
    /// Wrap an oracle so its weighings are recorded.
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            weighings: Vec::new(),
        }
    }

    /// The weighings recorded so far.
    pub fn weighings(&self) -> &[Weighing] {
        &self.weighings
    }

    /// Number of weighings recorded so far.
    pub fn count(&self) -> usize {
        self.weighings.len()
    }

    /// Consume the transcript and return the recorded weighings.
    pub fn into_weighings(self) -> Vec<Weighing> {
        self.weighings
    }
}

impl<O: WeighingOracle> WeighingOracle for Transcript<O> {
    fn compare(&mut self, left: &[ItemId], right: &[ItemId]) -> ScaleResult<Outcome> {
        let outcome = self.inner.compare(left, right)?;
        self.weighings.push(Weighing {
            left: left.to_vec(),
            right: right.to_vec(),
            outcome,
        });
        Ok(outcome)
    }
}
