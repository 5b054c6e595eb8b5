//! Column positions and the numbering policy used when renumbering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative ordering key of a task inside its status column.
///
/// Positions only order tasks; they need not be contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(i64);

impl Position {
    /// Wraps a raw position value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw position value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Spacing and ceiling applied when positions are (re)assigned.
///
/// Gaps of `spacing` leave room for later single-row inserts. Values never
/// exceed `cap`; once a column grows past `cap / spacing` rows the tail
/// collapses onto the cap and keeps its relative order only through stable
/// sorting. There is no rebalancing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionPolicy {
    /// Distance between consecutive positions.
    pub spacing: i64,
    /// Largest position ever assigned.
    pub cap: i64,
}

impl Default for PositionPolicy {
    fn default() -> Self {
        Self {
            spacing: 1000,
            cap: 1_000_000,
        }
    }
}

impl PositionPolicy {
    /// Position for the row at zero-based `index`: `min((index + 1) * spacing, cap)`.
    #[must_use]
    pub fn position_for(&self, index: usize) -> Position {
        let slot = i64::try_from(index)
            .unwrap_or(i64::MAX)
            .saturating_add(1);
        Position(slot.saturating_mul(self.spacing).min(self.cap))
    }

    /// Position for a task appended after `last`, the current tail of a
    /// column (`None` when the column is empty).
    #[must_use]
    pub fn next_after(&self, last: Option<Position>) -> Position {
        let value = last.map_or(self.spacing, |tail| tail.0.saturating_add(self.spacing));
        Position(value.min(self.cap))
    }
}
