//! A dual-handle slider for selecting a `(low, high)` range.
//!
//! ## Usage
//!
//! Unlike a single-value slider there are two ordered values on one track.
//! A press on a handle drags that handle; a press anywhere else slides the
//! whole range. The host toolkit forwards raw pointer events together with
//! the track geometry it resolved for the current bounds; this core owns
//! the values, the drag session, and the change notification, and never
//! draws anything.
//!
//! ```
//! use crest_controls::event::PointerButton;
//! use crest_controls::range_slider::{RangeSlider, RangeSliderArgs, SliderGeometry};
//! use crest_foundation::{Px, PxPosition};
//!
//! let args = RangeSliderArgs::default()
//!     .min(0)
//!     .max(86_400)
//!     .on_change(|(low, high)| println!("{low}..{high}"));
//! let mut slider = RangeSlider::new(args).expect("bounds are valid");
//!
//! let geometry = SliderGeometry {
//!     track_start: Px(0),
//!     track_length: Px(300),
//!     handle_length: Px(12),
//!     upside_down: false,
//! };
//! slider.pointer_pressed(
//!     PxPosition::new(Px(150), Px(8)),
//!     PointerButton::Primary,
//!     &geometry,
//! );
//! ```

use derive_setters::Setters;

use crest_foundation::{CallbackWith, Px, PxPosition};

use crate::event::{Orientation, PointerButton};

use drag::DragController;
use store::RangeValues;

mod drag;
mod hit;
mod store;
mod value_map;

pub use hit::HandleHit;
pub use store::RangeError;
pub use value_map::SliderGeometry;

/// Arguments for [`RangeSlider::new`].
#[derive(Clone, PartialEq, Setters)]
pub struct RangeSliderArgs {
    /// Lower bound of the value domain.
    pub min: i32,
    /// Upper bound of the value domain. Must not be below `min`.
    pub max: i32,
    /// Initial low value; defaults to `min`.
    #[setters(strip_option)]
    pub low: Option<i32>,
    /// Initial high value; defaults to `max`.
    #[setters(strip_option)]
    pub high: Option<i32>,
    /// Axis the track runs along.
    pub orientation: Orientation,
    /// Tick spacing hint for the renderer. Not consumed by the interaction
    /// core.
    #[setters(strip_option)]
    pub tick_interval: Option<i32>,
    /// Callback fired once per published `(low, high)` change.
    #[setters(skip)]
    pub on_change: CallbackWith<(i32, i32)>,
}

impl Default for RangeSliderArgs {
    fn default() -> Self {
        Self {
            min: 0,
            max: 99,
            low: None,
            high: None,
            orientation: Orientation::Horizontal,
            tick_interval: None,
            on_change: CallbackWith::default(),
        }
    }
}

impl RangeSliderArgs {
    /// Sets the change callback.
    pub fn on_change(mut self, on_change: impl Into<CallbackWith<(i32, i32)>>) -> Self {
        self.on_change = on_change.into();
        self
    }
}

/// Interaction core of the dual-handle range slider.
pub struct RangeSlider {
    values: RangeValues,
    drag: DragController,
    orientation: Orientation,
    tick_interval: Option<i32>,
}

impl RangeSlider {
    /// Builds the slider, rejecting inverted bounds.
    pub fn new(args: RangeSliderArgs) -> Result<Self, RangeError> {
        let values = RangeValues::new(args.min, args.max, args.low, args.high, args.on_change)?;
        Ok(Self {
            values,
            drag: DragController::new(),
            orientation: args.orientation,
            tick_interval: args.tick_interval,
        })
    }

    /// Current low value.
    pub fn low(&self) -> i32 {
        self.values.low()
    }

    /// Current high value.
    pub fn high(&self) -> i32 {
        self.values.high()
    }

    /// Current `(low, high)` pair.
    pub fn values(&self) -> (i32, i32) {
        (self.values.low(), self.values.high())
    }

    /// Lower bound of the value domain.
    pub fn min(&self) -> i32 {
        self.values.min()
    }

    /// Upper bound of the value domain.
    pub fn max(&self) -> i32 {
        self.values.max()
    }

    /// Axis the track runs along.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Tick spacing hint for the renderer.
    pub fn tick_interval(&self) -> Option<i32> {
        self.tick_interval
    }

    /// Whether a drag session is open.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Programmatically sets the low value. Clamps silently; see the module
    /// docs of the store for the exact policy. Not for use mid-drag.
    pub fn set_low(&mut self, value: i32) -> bool {
        self.values.set_low(value)
    }

    /// Programmatically sets the high value. Mirror of [`Self::set_low`].
    pub fn set_high(&mut self, value: i32) -> bool {
        self.values.set_high(value)
    }

    /// Programmatically sets both values at once.
    pub fn set_range(&mut self, low: i32, high: i32) -> bool {
        self.values.set_range(low, high)
    }

    /// Reconfigures the bounds between drag sessions.
    ///
    /// An open session is cancelled first; the bounds are part of what the
    /// session captured and must not change underneath it.
    pub fn set_bounds(&mut self, min: i32, max: i32) -> Result<bool, RangeError> {
        self.drag.cancel();
        self.values.set_bounds(min, max)
    }

    /// Classifies a pointer position against the handle hit-regions, for
    /// hosts that want hover feedback. Presses do this internally.
    pub fn classify(&self, pos: PxPosition, geometry: &SliderGeometry) -> HandleHit {
        hit::classify(
            self.pick(pos),
            self.values.low(),
            self.values.high(),
            geometry,
            self.values.min(),
            self.values.max(),
        )
    }

    /// Maps an axis pixel position onto a domain value.
    pub fn value_from_pixel(&self, pos: PxPosition, geometry: &SliderGeometry) -> i32 {
        value_map::value_from_pixel(self.pick(pos), geometry, self.values.min(), self.values.max())
    }

    /// Maps a domain value onto the axis pixel of the handle's leading
    /// edge. Renderers use this so drawing agrees with hit-testing.
    pub fn pixel_from_value(&self, value: i32, geometry: &SliderGeometry) -> Px {
        value_map::pixel_from_value(value, geometry, self.values.min(), self.values.max())
    }

    /// Handles a pointer press. Only the primary button opens a session.
    pub fn pointer_pressed(
        &mut self,
        pos: PxPosition,
        button: PointerButton,
        geometry: &SliderGeometry,
    ) {
        if button != PointerButton::Primary {
            return;
        }
        self.drag.press(self.pick(pos), geometry, &self.values);
    }

    /// Handles a pointer move for the captured pointer.
    pub fn pointer_moved(&mut self, pos: PxPosition, geometry: &SliderGeometry) {
        self.drag.drag_to(self.pick(pos), geometry, &mut self.values);
    }

    /// Handles the pointer release that ends the gesture.
    pub fn pointer_released(&mut self, _pos: PxPosition) {
        self.drag.release();
    }

    /// Handles loss of pointer capture. The last published values stand.
    pub fn cancel(&mut self) {
        self.drag.cancel();
    }

    fn pick(&self, pos: PxPosition) -> Px {
        match self.orientation {
            Orientation::Horizontal => pos.x,
            Orientation::Vertical => pos.y,
        }
    }
}
