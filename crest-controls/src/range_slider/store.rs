//! The slider's value store.
//!
//! Every mutation, programmatic or drag-driven, lands here. The store
//! enforces `min <= low <= high <= max` before a write becomes visible and
//! is the single emitter of change notifications, so consumers cannot tell
//! user-driven updates from programmatic ones.

use crest_foundation::CallbackWith;
use thiserror::Error;

/// Errors reported by the range slider.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The configured bounds are inverted.
    #[error("invalid slider bounds: min {min} exceeds max {max}")]
    InvalidBounds {
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },
}

pub(super) struct RangeValues {
    min: i32,
    max: i32,
    low: i32,
    high: i32,
    on_change: CallbackWith<(i32, i32)>,
}

impl RangeValues {
    /// Creates a store over `[min, max]` with initial values clamped into
    /// the bounds. Construction publishes nothing.
    pub(super) fn new(
        min: i32,
        max: i32,
        initial_low: Option<i32>,
        initial_high: Option<i32>,
        on_change: CallbackWith<(i32, i32)>,
    ) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::InvalidBounds { min, max });
        }
        let low = initial_low.unwrap_or(min).clamp(min, max);
        let high = initial_high.unwrap_or(max).clamp(low, max);
        Ok(Self {
            min,
            max,
            low,
            high,
            on_change,
        })
    }

    pub(super) fn min(&self) -> i32 {
        self.min
    }

    pub(super) fn max(&self) -> i32 {
        self.max
    }

    pub(super) fn low(&self) -> i32 {
        self.low
    }

    pub(super) fn high(&self) -> i32 {
        self.high
    }

    /// Publishes a pair that already satisfies the ordering invariant.
    ///
    /// Emits one `(low, high)` notification, and only when the pair differs
    /// from the last published one. Returns whether anything changed.
    pub(super) fn commit(&mut self, low: i32, high: i32) -> bool {
        debug_assert!(
            self.min <= low && low <= high && high <= self.max,
            "commit outside invariant: [{}, {}] in [{}, {}]",
            low,
            high,
            self.min,
            self.max,
        );
        if (low, high) == (self.low, self.high) {
            return false;
        }
        self.low = low;
        self.high = high;
        self.on_change.call((low, high));
        true
    }

    /// Sets the low value, clamping silently.
    ///
    /// Out-of-range requests clamp to the nearest bound; requests at or
    /// above `high` clamp to `high - 1`. When even that falls below `min`
    /// the range is degenerate and both values pin to `min`.
    pub(super) fn set_low(&mut self, value: i32) -> bool {
        let low = value.min(self.high - 1);
        if low < self.min {
            if self.high - 1 < self.min {
                tracing::debug!(min = self.min, "degenerate range, pinning both values");
                return self.commit(self.min, self.min);
            }
            return self.commit(self.min, self.high);
        }
        self.commit(low, self.high)
    }

    /// Sets the high value, clamping silently. Mirror of [`Self::set_low`].
    pub(super) fn set_high(&mut self, value: i32) -> bool {
        let high = value.max(self.low + 1);
        if high > self.max {
            if self.low + 1 > self.max {
                tracing::debug!(max = self.max, "degenerate range, pinning both values");
                return self.commit(self.max, self.max);
            }
            return self.commit(self.low, self.max);
        }
        self.commit(self.low, high)
    }

    /// Sets both values at once.
    ///
    /// Each value clamps into the bounds; `high` is additionally lifted to
    /// at least `low`, so an inverted request collapses onto `low` rather
    /// than swapping.
    pub(super) fn set_range(&mut self, low: i32, high: i32) -> bool {
        let low = low.clamp(self.min, self.max);
        let high = high.clamp(low, self.max);
        self.commit(low, high)
    }

    /// Reconfigures the bounds, re-clamping the current values into them.
    pub(super) fn set_bounds(&mut self, min: i32, max: i32) -> Result<bool, RangeError> {
        if min > max {
            return Err(RangeError::InvalidBounds { min, max });
        }
        self.min = min;
        self.max = max;
        let low = self.low.clamp(min, max);
        let high = self.high.clamp(low, max);
        Ok(self.commit(low, high))
    }
}
