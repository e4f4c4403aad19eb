//! Core data types for balance comparisons.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for one candidate item. Unique within a candidate set.
pub type ItemId = u32;

/// The reading produced by a single weighing.
///
/// "Indicated" means that side's group contains the anomaly. A reading
/// carries no information about the direction of the deviation, only which
/// side is implicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Neither compared group contains the anomaly.
    Balanced,
    /// The left group contains the anomaly.
    LeftIndicated,
    /// The right group contains the anomaly.
    RightIndicated,
}

impl Outcome {
    /// The scale's result text for this reading.
    pub fn symbol(&self) -> &'static str {
        match self {
            Outcome::Balanced => "=",
            Outcome::LeftIndicated => "<",
            Outcome::RightIndicated => ">",
        }
    }

    /// Parse the scale's result text (`=`, `<`, `>`).
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "=" => Some(Outcome::Balanced),
            "<" => Some(Outcome::LeftIndicated),
            ">" => Some(Outcome::RightIndicated),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One recorded weighing: the two groups compared and the reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weighing {
    pub left: Vec<ItemId>,
    pub right: Vec<ItemId>,
    pub outcome: Outcome,
}

/// Errors that can occur during a search.
#[derive(thiserror::Error, Debug)]
pub enum ScaleError {
    /// The candidate set is empty or cannot be reduced to a base case.
    #[error("Invalid population: {0}")]
    InvalidPopulation(String),

    /// The oracle failed to produce a reading. A weighing is not safe to
    /// silently repeat, so this aborts the whole search.
    #[error("Oracle failure: {0}")]
    Oracle(String),
}

/// Convenience result type.
pub type ScaleResult<T> = Result<T, ScaleError>;
