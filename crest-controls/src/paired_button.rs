//! A joined pair of push buttons, typically labeled `-` and `+`.
//!
//! ## Usage
//!
//! The pair shares one widget; the host hit-tests which half a pointer
//! event lands on and forwards presses and releases per side. A click fires
//! only when the press and the release land on the same enabled side, like
//! a native push button. Hover and pressed flags are exposed for the
//! renderer's state styling.

use crest_foundation::Callback;

use crate::event::PointerButton;

/// One half of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The decrease half (drawn first).
    Decrease,
    /// The increase half.
    Increase,
}

/// Arguments for [`PairedButton::new`].
#[derive(Clone, Default, PartialEq)]
pub struct PairedButtonArgs {
    /// Callback fired when the decrease half is clicked.
    pub on_decrease: Callback,
    /// Callback fired when the increase half is clicked.
    pub on_increase: Callback,
}

impl PairedButtonArgs {
    /// Sets the decrease-click callback.
    pub fn on_decrease(mut self, on_decrease: impl Into<Callback>) -> Self {
        self.on_decrease = on_decrease.into();
        self
    }

    /// Sets the increase-click callback.
    pub fn on_increase(mut self, on_increase: impl Into<Callback>) -> Self {
        self.on_increase = on_increase.into();
        self
    }
}

/// Interaction core of the paired button.
pub struct PairedButton {
    decrease_enabled: bool,
    increase_enabled: bool,
    pressed: Option<Side>,
    hovered: Option<Side>,
    on_decrease: Callback,
    on_increase: Callback,
}

impl PairedButton {
    /// Builds the pair with both halves enabled.
    pub fn new(args: PairedButtonArgs) -> Self {
        Self {
            decrease_enabled: true,
            increase_enabled: true,
            pressed: None,
            hovered: None,
            on_decrease: args.on_decrease,
            on_increase: args.on_increase,
        }
    }

    fn enabled(&self, side: Side) -> bool {
        match side {
            Side::Decrease => self.decrease_enabled,
            Side::Increase => self.increase_enabled,
        }
    }

    /// Enables or disables one half.
    pub fn set_enabled(&mut self, side: Side, enabled: bool) {
        match side {
            Side::Decrease => self.decrease_enabled = enabled,
            Side::Increase => self.increase_enabled = enabled,
        }
        if !enabled && self.pressed == Some(side) {
            self.pressed = None;
        }
    }

    /// Which half is held down, for sunken styling.
    pub fn pressed(&self) -> Option<Side> {
        self.pressed
    }

    /// Which half the pointer rests on, for highlight styling.
    pub fn hovered(&self) -> Option<Side> {
        self.hovered
    }

    /// Tracks the pointer entering a half (or leaving both with `None`).
    pub fn pointer_hover(&mut self, side: Option<Side>) {
        self.hovered = side;
    }

    /// Handles a press on one half.
    pub fn pointer_pressed(&mut self, side: Side, button: PointerButton) {
        if button == PointerButton::Primary && self.enabled(side) {
            self.pressed = Some(side);
        }
    }

    /// Handles a release over one half. Fires the click when it closes a
    /// press on the same side.
    pub fn pointer_released(&mut self, side: Side, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }
        let was_pressed = self.pressed.take();
        if was_pressed == Some(side) && self.enabled(side) {
            match side {
                Side::Decrease => self.on_decrease.call(),
                Side::Increase => self.on_increase.call(),
            }
        }
    }

    /// Handles the pointer leaving the control mid-press.
    pub fn pointer_left(&mut self) {
        self.hovered = None;
        self.pressed = None;
    }
}
