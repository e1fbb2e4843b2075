//! The drag session state machine.
//!
//! One pointer gesture maps to one session: a press opens it, moves update
//! the store through it, a release or a capture loss closes it. The
//! controller assumes the host delivers press, moves, and release in order
//! for a single captured pointer; events arriving while `Idle` are ignored
//! rather than trusted.

use crest_foundation::Px;

use super::hit::{HandleHit, classify};
use super::store::RangeValues;
use super::value_map::{SliderGeometry, value_from_pixel};

/// Current drag session, if any.
///
/// `DraggingRange` carries the domain value under the pointer when the
/// range was grabbed; each move re-anchors it so deltas stay incremental.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DragState {
    Idle,
    DraggingLow,
    DraggingHigh,
    DraggingRange { reference_value: i32 },
}

pub(super) struct DragController {
    state: DragState,
}

impl DragController {
    pub(super) fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub(super) fn is_active(&self) -> bool {
        self.state != DragState::Idle
    }

    /// Opens a session from a press position.
    ///
    /// A press on a handle starts dragging that handle; a press anywhere
    /// else grabs the whole range, anchored at the value under the pointer.
    /// The press itself publishes nothing. A press while a session is
    /// already open is dropped; the host should not let that happen under
    /// pointer capture.
    pub(super) fn press(&mut self, pos: Px, geometry: &SliderGeometry, store: &RangeValues) {
        if self.is_active() {
            return;
        }
        self.state = match classify(
            pos,
            store.low(),
            store.high(),
            geometry,
            store.min(),
            store.max(),
        ) {
            HandleHit::Low => DragState::DraggingLow,
            HandleHit::High => DragState::DraggingHigh,
            HandleHit::None => DragState::DraggingRange {
                reference_value: value_from_pixel(pos, geometry, store.min(), store.max()),
            },
        };
        tracing::trace!(state = ?self.state, "drag session opened");
    }

    /// Applies a pointer move to the open session.
    pub(super) fn drag_to(&mut self, pos: Px, geometry: &SliderGeometry, store: &mut RangeValues) {
        let candidate = value_from_pixel(pos, geometry, store.min(), store.max());
        match self.state {
            DragState::Idle => {}
            DragState::DraggingLow => {
                // The handles must not cross; the low handle stops one unit
                // short of the high one.
                let low = candidate.min(store.high() - 1);
                if low >= store.min() {
                    store.commit(low, store.high());
                }
            }
            DragState::DraggingHigh => {
                let high = candidate.max(store.low() + 1);
                if high <= store.max() {
                    store.commit(store.low(), high);
                }
            }
            DragState::DraggingRange { reference_value } => {
                let delta = candidate - reference_value;
                let mut low = store.low() + delta;
                let mut high = store.high() + delta;
                // Boundary corrections run low-first, then high. A span
                // wider than the bounds ends up touching both after the
                // final clamp instead of oscillating between corrections.
                if low < store.min() {
                    let back = store.min() - low;
                    low += back;
                    high += back;
                }
                if high > store.max() {
                    let back = high - store.max();
                    low -= back;
                    high -= back;
                }
                low = low.max(store.min());
                high = high.min(store.max());
                store.commit(low, high);
                self.state = DragState::DraggingRange {
                    reference_value: candidate,
                };
            }
        }
    }

    /// Closes the session on pointer release. The last published values
    /// stand; no further notification is emitted.
    pub(super) fn release(&mut self) {
        if self.is_active() {
            tracing::trace!(state = ?self.state, "drag session closed");
        }
        self.state = DragState::Idle;
    }

    /// Closes the session on loss of pointer capture (focus change, window
    /// hide). Identical to release: no rollback, no extra notification.
    pub(super) fn cancel(&mut self) {
        if self.is_active() {
            tracing::trace!(state = ?self.state, "drag session cancelled");
        }
        self.state = DragState::Idle;
    }
}
