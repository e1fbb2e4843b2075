//! A numeric field adjusted with the scroll wheel.
//!
//! ## Usage
//!
//! The host forwards wheel events and keeps the shift-modifier state
//! current; each wheel notch reports a step of `±1`, or `±10` while shift
//! is held. The field does not hold the number itself: the host owns it and
//! applies the emitted steps, which lets several fields share one backing
//! model.

use crest_foundation::CallbackWith;

/// Multiplier applied to a step while the shift modifier is held.
const COARSE_STEP_FACTOR: i32 = 10;

/// Arguments for [`ScrollField::new`].
#[derive(Clone, Default, PartialEq)]
pub struct ScrollFieldArgs {
    /// Callback fired with the signed step of each wheel notch.
    pub wheel_scrolled: CallbackWith<i32>,
}

impl ScrollFieldArgs {
    /// Sets the step callback.
    pub fn wheel_scrolled(mut self, wheel_scrolled: impl Into<CallbackWith<i32>>) -> Self {
        self.wheel_scrolled = wheel_scrolled.into();
        self
    }
}

/// Interaction core of the scroll-adjustable field.
pub struct ScrollField {
    shift_held: bool,
    wheel_scrolled: CallbackWith<i32>,
}

impl ScrollField {
    /// Builds the field with the shift modifier released.
    pub fn new(args: ScrollFieldArgs) -> Self {
        Self {
            shift_held: false,
            wheel_scrolled: args.wheel_scrolled,
        }
    }

    /// Tracks the shift modifier, which switches to coarse steps.
    pub fn set_shift_held(&mut self, held: bool) {
        self.shift_held = held;
    }

    /// Handles one wheel event. Scrolling up steps forward, anything else
    /// steps backward.
    pub fn wheel(&mut self, delta_y: f32) {
        let step = if delta_y > 0.0 { 1 } else { -1 };
        let step = if self.shift_held {
            step * COARSE_STEP_FACTOR
        } else {
            step
        };
        self.wheel_scrolled.call(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crest_foundation::State;

    fn recording_field() -> (ScrollField, State<Vec<i32>>) {
        let log: State<Vec<i32>> = State::default();
        let sink = log.clone();
        let field = ScrollField::new(
            ScrollFieldArgs::default()
                .wheel_scrolled(move |step| sink.with_mut(|events| events.push(step))),
        );
        (field, log)
    }

    #[test]
    fn test_fine_steps() {
        let (mut field, log) = recording_field();
        field.wheel(120.0);
        field.wheel(-120.0);
        assert_eq!(log.get(), vec![1, -1]);
    }

    #[test]
    fn test_shift_scales_steps() {
        let (mut field, log) = recording_field();
        field.set_shift_held(true);
        field.wheel(120.0);
        field.wheel(-120.0);
        field.set_shift_held(false);
        field.wheel(120.0);
        assert_eq!(log.get(), vec![10, -10, 1]);
    }

    #[test]
    fn test_zero_delta_steps_backward() {
        // Only a strictly positive delta counts as forward.
        let (mut field, log) = recording_field();
        field.wheel(0.0);
        assert_eq!(log.get(), vec![-1]);
    }
}
