//! An integer entry field with inline `-` and `+` affordances.
//!
//! ## Usage
//!
//! The two inline buttons step the value by one; typing commits through
//! [`PlusMinusBox::commit_text`]. A step that would leave the configured
//! range is rejected outright rather than clamped, matching how a stepper
//! feels at its end stops: the button goes dead instead of re-snapping.
//! Only actual steps fire `value_changed`; direct writes are silent.

use derive_setters::Setters;

use crest_foundation::CallbackWith;

/// Arguments for [`PlusMinusBox::new`].
#[derive(Clone, PartialEq, Setters)]
pub struct PlusMinusBoxArgs {
    /// Smallest accepted value; unbounded below when `None`.
    #[setters(strip_option)]
    pub minimum: Option<i32>,
    /// Largest accepted value; unbounded above when `None`.
    #[setters(strip_option)]
    pub maximum: Option<i32>,
    /// Starting value, used when no minimum is set.
    pub initial: i32,
    /// Callback fired after each accepted step.
    #[setters(skip)]
    pub value_changed: CallbackWith<i32>,
}

impl Default for PlusMinusBoxArgs {
    fn default() -> Self {
        Self {
            minimum: Some(0),
            maximum: None,
            initial: 0,
            value_changed: CallbackWith::default(),
        }
    }
}

impl PlusMinusBoxArgs {
    /// Sets the step callback.
    pub fn value_changed(mut self, value_changed: impl Into<CallbackWith<i32>>) -> Self {
        self.value_changed = value_changed.into();
        self
    }
}

/// Interaction core of the plus/minus stepper box.
pub struct PlusMinusBox {
    value: i32,
    bottom: i32,
    top: i32,
    value_changed: CallbackWith<i32>,
}

impl PlusMinusBox {
    /// Builds the box. With a minimum configured the value starts there,
    /// otherwise at the given initial value.
    pub fn new(args: PlusMinusBoxArgs) -> Self {
        Self {
            value: args.minimum.unwrap_or(args.initial),
            bottom: args.minimum.unwrap_or(i32::MIN),
            top: args.maximum.unwrap_or(i32::MAX),
            value_changed: args.value_changed,
        }
    }

    /// Current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    fn accepts(&self, candidate: i32) -> bool {
        (self.bottom..=self.top).contains(&candidate)
    }

    /// Steps the value down by one. Dead at the bottom stop.
    pub fn decrease(&mut self) {
        self.step(self.value.checked_sub(1));
    }

    /// Steps the value up by one. Dead at the top stop.
    pub fn increase(&mut self) {
        self.step(self.value.checked_add(1));
    }

    fn step(&mut self, candidate: Option<i32>) {
        if let Some(candidate) = candidate
            && self.accepts(candidate)
        {
            self.value = candidate;
            self.value_changed.call(candidate);
        }
    }

    /// Writes a value directly. Rejected silently when outside the range;
    /// accepted writes do not notify, mirroring a property assignment.
    pub fn set_value(&mut self, value: i32) {
        if self.accepts(value) {
            self.value = value;
        }
    }

    /// Commits typed text. Non-numeric or out-of-range text leaves the
    /// value untouched and reports `false`.
    pub fn commit_text(&mut self, text: &str) -> bool {
        match text.trim().parse::<i32>() {
            Ok(value) if self.accepts(value) => {
                self.value = value;
                true
            }
            _ => false,
        }
    }

    /// Reconfigures both stops. The current value is not revalidated until
    /// the next step or write.
    pub fn set_range(&mut self, bottom: Option<i32>, top: Option<i32>) {
        self.bottom = bottom.unwrap_or(i32::MIN);
        self.top = top.unwrap_or(i32::MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crest_foundation::State;

    fn recording_box(args: PlusMinusBoxArgs) -> (PlusMinusBox, State<Vec<i32>>) {
        let log: State<Vec<i32>> = State::default();
        let sink = log.clone();
        let stepper = PlusMinusBox::new(
            args.value_changed(move |v| sink.with_mut(|events| events.push(v))),
        );
        (stepper, log)
    }

    #[test]
    fn test_starts_at_minimum() {
        let (stepper, _) = recording_box(PlusMinusBoxArgs::default().minimum(5));
        assert_eq!(stepper.value(), 5);
    }

    #[test]
    fn test_starts_at_initial_without_minimum() {
        // The minimum wins over the initial value when both are set.
        let (stepper, _) = recording_box(PlusMinusBoxArgs::default().minimum(5).initial(7));
        assert_eq!(stepper.value(), 5);

        let stepper = PlusMinusBox::new(PlusMinusBoxArgs {
            minimum: None,
            ..PlusMinusBoxArgs::default().initial(7)
        });
        assert_eq!(stepper.value(), 7);
    }

    #[test]
    fn test_steps_notify() {
        let (mut stepper, log) = recording_box(PlusMinusBoxArgs::default());
        stepper.increase();
        stepper.increase();
        stepper.decrease();
        assert_eq!(stepper.value(), 1);
        assert_eq!(log.get(), vec![1, 2, 1]);
    }

    #[test]
    fn test_dead_at_stops() {
        let (mut stepper, log) =
            recording_box(PlusMinusBoxArgs::default().minimum(0).maximum(1));
        stepper.decrease();
        assert_eq!(stepper.value(), 0);
        stepper.increase();
        stepper.increase();
        assert_eq!(stepper.value(), 1);
        assert_eq!(log.get(), vec![1]);
    }

    #[test]
    fn test_direct_write_is_silent() {
        let (mut stepper, log) = recording_box(PlusMinusBoxArgs::default().maximum(10));
        stepper.set_value(7);
        assert_eq!(stepper.value(), 7);
        stepper.set_value(99);
        assert_eq!(stepper.value(), 7, "out-of-range write rejected");
        assert!(log.with(Vec::is_empty));
    }

    #[test]
    fn test_commit_text() {
        let (mut stepper, _) = recording_box(PlusMinusBoxArgs::default().maximum(100));
        assert!(stepper.commit_text(" 42 "));
        assert_eq!(stepper.value(), 42);
        assert!(!stepper.commit_text("421"));
        assert!(!stepper.commit_text("4x"));
        assert_eq!(stepper.value(), 42);
    }

    #[test]
    fn test_unbounded_without_maximum() {
        let (mut stepper, _) = recording_box(PlusMinusBoxArgs::default());
        stepper.set_value(i32::MAX - 1);
        stepper.increase();
        assert_eq!(stepper.value(), i32::MAX);
    }
}
