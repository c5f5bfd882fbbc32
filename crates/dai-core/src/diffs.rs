//! Trailing-window maximum of convergence differences
//!
//! Iterative algorithms push one difference per iteration (typically the
//! magnitude of change in their estimate) and poll [`ConvergenceMonitor::max_diff`]
//! to decide whether the process has settled over the last `capacity`
//! iterations.
//!
//! Storage is a fixed ring of `capacity` slots with two cursors: the slot the
//! next sample overwrites, and the slot holding the current maximum. Pushing
//! is O(1) except when the outgoing sample is the maximum itself, in which
//! case the whole ring is rescanned.
//!
//! NaN ranks below every number, negative infinity included, and never above
//! another NaN. A NaN is therefore reported only when nothing else is in the
//! window.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::error::{DaiError, DaiResult};
use crate::real::Real;

/// Fill state of a [`ConvergenceMonitor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum MonitorState {
    /// Fewer than `capacity` samples recorded; `max_diff` reports the default
    Filling,
    /// Every push overwrites the oldest sample
    Full,
}

/// Whether `a` ranks strictly above `b`
#[inline]
fn beats(a: Real, b: Real) -> bool {
    if a.is_nan() {
        false
    } else if b.is_nan() {
        true
    } else {
        a > b
    }
}

/// Empty history with room for `capacity` differences
fn reserve_history(mut history: Vec<Real>, capacity: usize) -> DaiResult<Vec<Real>> {
    history
        .try_reserve_exact(capacity - history.len())
        .map_err(|e| {
            DaiError::InvalidArgument(format!("cannot reserve {capacity} differences: {e}"))
        })?;
    Ok(history)
}

/// Index of the first maximal element, 0 for an empty slice
fn argmax(values: &[Real]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if beats(v, values[best]) {
            best = i;
        }
    }
    best
}

/// Bounded history of differences with an O(1) trailing maximum
///
/// Serializes as `{capacity, default_value, history, write_cursor}`.
/// Deserialization validates the snapshot and recomputes the maximum.
/// JSON has no NaN: a NaN sample is written as `null`, which is then
/// rejected on the way back in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Snapshot", into = "Snapshot")]
pub struct ConvergenceMonitor {
    capacity: usize,
    default_value: Real,
    history: Vec<Real>,
    /// Next slot to overwrite once full
    write_cursor: usize,
    /// Slot holding the current maximum
    max_cursor: usize,
    rescans: u64,
}

impl ConvergenceMonitor {
    /// Create an empty monitor holding up to `capacity` differences.
    ///
    /// `default_value` is reported by [`max_diff`](Self::max_diff) until the
    /// window has filled up.
    pub fn new(capacity: usize, default_value: Real) -> DaiResult<Self> {
        if capacity == 0 {
            return Err(DaiError::InvalidArgument(
                "capacity must be >= 1, got 0".to_string(),
            ));
        }
        let history = reserve_history(Vec::new(), capacity)?;
        log::debug!("convergence monitor: capacity={capacity}, default={default_value}");
        Ok(Self {
            capacity,
            default_value,
            history,
            write_cursor: 0,
            max_cursor: 0,
            rescans: 0,
        })
    }

    /// Maximum difference in the window, or the default while still filling
    pub fn max_diff(&self) -> Real {
        if self.history.len() < self.capacity {
            self.default_value
        } else {
            self.history[self.max_cursor]
        }
    }

    /// Register a new difference
    pub fn push(&mut self, x: Real) {
        if self.history.len() < self.capacity {
            self.history.push(x);
            let last = self.history.len() - 1;
            // Equal values keep the earlier maximum.
            if last == 0 || beats(x, self.history[self.max_cursor]) {
                self.max_cursor = last;
            }
            return;
        }

        let target = self.write_cursor;
        if target == self.max_cursor {
            self.history[target] = x;
            self.advance();
            self.rescan();
        } else {
            if beats(x, self.history[self.max_cursor]) {
                self.max_cursor = target;
            }
            self.history[target] = x;
            self.advance();
        }
    }

    fn advance(&mut self) {
        self.write_cursor = (self.write_cursor + 1) % self.capacity;
    }

    fn rescan(&mut self) {
        self.max_cursor = argmax(&self.history);
        self.rescans += 1;
        log::trace!(
            "convergence monitor rescan #{}: max={} at slot {}",
            self.rescans,
            self.history[self.max_cursor],
            self.max_cursor
        );
    }

    /// Maximum number of differences stored
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn default_value(&self) -> Real {
        self.default_value
    }

    /// Number of differences currently stored
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.history.len() == self.capacity
    }

    pub fn state(&self) -> MonitorState {
        if self.is_full() {
            MonitorState::Full
        } else {
            MonitorState::Filling
        }
    }

    /// Differences currently in the window, oldest first
    pub fn window(&self) -> impl Iterator<Item = Real> + '_ {
        let (newer, older) = self.history.split_at(self.write_cursor);
        older.iter().chain(newer).copied()
    }

    /// Whether the reported maximum is below `tolerance`
    ///
    /// NaN never converges.
    pub fn converged(&self, tolerance: Real) -> bool {
        self.max_diff() < tolerance
    }

    /// Number of full-window rescans performed so far
    pub fn rescans(&self) -> u64 {
        self.rescans
    }
}

/// Serialized form of a [`ConvergenceMonitor`]
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Snapshot {
    capacity: usize,
    default_value: Real,
    history: Vec<Real>,
    #[serde(default)]
    write_cursor: usize,
}

impl From<ConvergenceMonitor> for Snapshot {
    fn from(monitor: ConvergenceMonitor) -> Self {
        Self {
            capacity: monitor.capacity,
            default_value: monitor.default_value,
            history: monitor.history,
            write_cursor: monitor.write_cursor,
        }
    }
}

impl TryFrom<Snapshot> for ConvergenceMonitor {
    type Error = DaiError;

    fn try_from(snapshot: Snapshot) -> DaiResult<Self> {
        let Snapshot {
            capacity,
            default_value,
            history,
            write_cursor,
        } = snapshot;

        if capacity == 0 {
            return Err(DaiError::InvalidArgument(
                "capacity must be >= 1, got 0".to_string(),
            ));
        }
        if history.len() > capacity {
            return Err(DaiError::InvalidArgument(format!(
                "history holds {} differences but capacity is {}",
                history.len(),
                capacity
            )));
        }
        if write_cursor >= capacity {
            return Err(DaiError::InvalidArgument(format!(
                "write cursor {write_cursor} out of range for capacity {capacity}"
            )));
        }
        if history.len() < capacity && write_cursor != 0 {
            return Err(DaiError::InvalidArgument(format!(
                "write cursor must be 0 while filling, got {write_cursor}"
            )));
        }

        let history = reserve_history(history, capacity)?;
        let max_cursor = argmax(&history);
        Ok(Self {
            capacity,
            default_value,
            history,
            write_cursor,
            max_cursor,
            rescans: 0,
        })
    }
}
