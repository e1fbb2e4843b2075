//! An animated on/off switch with a round thumb on a rounded track.
//!
//! ## Usage
//!
//! The core owns the checked state and the thumb offset geometry; the host
//! draws the track and thumb at the offset this module reports and, if it
//! animates, interpolates the offset between the endpoints itself (timing
//! curves are the host's business). Toggling happens on primary-button
//! release or space-key release, like a native checkable button.

use derive_setters::Setters;

use crest_foundation::{CallbackWith, Px, PxSize};

use crate::event::{Key, PointerButton};

/// Arguments for [`ToggleSwitch::new`].
#[derive(Clone, PartialEq, Setters)]
pub struct ToggleSwitchArgs {
    /// Corner radius of the track capsule.
    pub track_radius: Px,
    /// Radius of the thumb circle. May exceed the track radius; the extra
    /// becomes outer margin.
    pub thumb_radius: Px,
    /// Initial checked state.
    pub checked: bool,
    /// Callback fired with the new state after each toggle.
    #[setters(skip)]
    pub on_toggle: CallbackWith<bool>,
}

impl Default for ToggleSwitchArgs {
    fn default() -> Self {
        Self {
            track_radius: Px(8),
            thumb_radius: Px(11),
            checked: false,
            on_toggle: CallbackWith::default(),
        }
    }
}

impl ToggleSwitchArgs {
    /// Sets the toggle callback.
    pub fn on_toggle(mut self, on_toggle: impl Into<CallbackWith<bool>>) -> Self {
        self.on_toggle = on_toggle.into();
        self
    }
}

/// Interaction core of the toggle switch.
pub struct ToggleSwitch {
    track_radius: Px,
    thumb_radius: Px,
    checked: bool,
    width: Px,
    offset: Px,
    on_toggle: CallbackWith<bool>,
}

impl ToggleSwitch {
    /// Builds the switch with its thumb resting at the endpoint matching
    /// the initial state.
    pub fn new(args: ToggleSwitchArgs) -> Self {
        let mut switch = Self {
            track_radius: args.track_radius,
            thumb_radius: args.thumb_radius,
            checked: args.checked,
            width: Px::ZERO,
            offset: Px::ZERO,
            on_toggle: args.on_toggle,
        };
        switch.width = switch.size_hint().width;
        switch.offset = switch.end_offset(switch.checked);
        switch
    }

    /// Current checked state.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Current thumb center offset along the track.
    pub fn offset(&self) -> Px {
        self.offset
    }

    /// Host-driven thumb offset, for animating between the endpoints.
    pub fn set_offset(&mut self, offset: Px) {
        self.offset = offset;
    }

    /// Outer margin left around the track when the thumb is larger.
    pub fn margin(&self) -> Px {
        Px((self.thumb_radius.raw() - self.track_radius.raw()).max(0))
    }

    /// Thumb center offset shared by both endpoints' geometry.
    pub fn base_offset(&self) -> Px {
        Px(self.thumb_radius.raw().max(self.track_radius.raw()))
    }

    /// Thumb center offset for a given state at the current width.
    pub fn end_offset(&self, checked: bool) -> Px {
        if checked {
            self.width - self.base_offset()
        } else {
            self.base_offset()
        }
    }

    /// Preferred size: a track two corner-radii tall and four wide, plus
    /// the thumb margin all around.
    pub fn size_hint(&self) -> PxSize {
        let margin = self.margin();
        PxSize::new(
            self.track_radius * 4 + margin * 2,
            self.track_radius * 2 + margin * 2,
        )
    }

    /// Re-pins the thumb to the active endpoint after the host resized the
    /// control.
    pub fn resized(&mut self, width: Px) {
        self.width = width;
        self.offset = self.end_offset(self.checked);
    }

    /// Programmatically sets the state, snapping the thumb to the matching
    /// endpoint.
    ///
    /// Does not notify, even when the state flips. This differs from a
    /// toolkit checkable button, where a programmatic write emits the same
    /// toggled signal as a click; hosts that want the notification should
    /// call [`Self::toggle`] instead.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
        self.offset = self.end_offset(checked);
    }

    /// Flips the state and notifies.
    ///
    /// The thumb offset is left where it is so the host can animate it
    /// toward [`Self::end_offset`] of the new state.
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
        tracing::trace!(checked = self.checked, "switch toggled");
        self.on_toggle.call(self.checked);
    }

    /// Handles a pointer release over the control.
    pub fn pointer_released(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            self.toggle();
        }
    }

    /// Handles a key release while the control has focus.
    pub fn key_released(&mut self, key: Key) {
        if key == Key::Space {
            self.toggle();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crest_foundation::State;

    fn recording_switch(args: ToggleSwitchArgs) -> (ToggleSwitch, State<Vec<bool>>) {
        let log: State<Vec<bool>> = State::default();
        let sink = log.clone();
        let switch = ToggleSwitch::new(
            args.on_toggle(move |checked| sink.with_mut(|events| events.push(checked))),
        );
        (switch, log)
    }

    #[test]
    fn test_geometry_with_large_thumb() {
        // track 8, thumb 11: margin 3, base offset 11, hint 38x22.
        let switch = ToggleSwitch::new(ToggleSwitchArgs::default());
        assert_eq!(switch.margin(), Px(3));
        assert_eq!(switch.base_offset(), Px(11));
        assert_eq!(switch.size_hint(), PxSize::new(Px(38), Px(22)));
    }

    #[test]
    fn test_geometry_with_large_track() {
        let switch = ToggleSwitch::new(
            ToggleSwitchArgs::default()
                .track_radius(Px(11))
                .thumb_radius(Px(8)),
        );
        assert_eq!(switch.margin(), Px(0));
        assert_eq!(switch.base_offset(), Px(11));
        assert_eq!(switch.size_hint(), PxSize::new(Px(44), Px(22)));
    }

    #[test]
    fn test_thumb_rests_at_state_endpoint() {
        let (switch, _) = recording_switch(ToggleSwitchArgs::default());
        assert_eq!(switch.offset(), Px(11));

        let (switch, _) = recording_switch(ToggleSwitchArgs::default().checked(true));
        assert_eq!(switch.offset(), switch.end_offset(true));
        assert_eq!(switch.offset(), Px(38 - 11));
    }

    #[test]
    fn test_release_toggles_and_notifies() {
        let (mut switch, log) = recording_switch(ToggleSwitchArgs::default());

        switch.pointer_released(PointerButton::Primary);
        assert!(switch.is_checked());
        switch.pointer_released(PointerButton::Secondary);
        assert!(switch.is_checked(), "secondary button must not toggle");
        switch.key_released(Key::Space);
        assert!(!switch.is_checked());
        assert_eq!(log.get(), vec![true, false]);
    }

    #[test]
    fn test_toggle_leaves_offset_for_animation() {
        let (mut switch, _) = recording_switch(ToggleSwitchArgs::default());
        let resting = switch.offset();

        switch.toggle();
        assert_eq!(switch.offset(), resting, "host animates toward the end");
        assert_eq!(switch.end_offset(true), Px(27));
    }

    #[test]
    fn test_resize_repins_thumb() {
        let (mut switch, _) = recording_switch(ToggleSwitchArgs::default().checked(true));
        switch.resized(Px(100));
        assert_eq!(switch.offset(), Px(100 - 11));
    }

    #[test]
    fn test_set_checked_snaps_without_notifying() {
        let (mut switch, log) = recording_switch(ToggleSwitchArgs::default());
        switch.set_checked(true);
        assert_eq!(switch.offset(), switch.end_offset(true));
        assert!(log.with(Vec::is_empty));
    }
}
