//! Pixel/value mapping along the slider track.
//!
//! The handle has a physical length, so the usable travel of its leading
//! edge is `track_length - handle_length`. Both directions of the mapping
//! interpolate over that span; rounding is to the nearest value so the two
//! directions stay algebraic inverses within one unit.

use crest_foundation::Px;

/// Track geometry resolved by the host for one input event.
///
/// The host recomputes this from the widget bounds whenever it forwards an
/// event; the core never caches it across resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderGeometry {
    /// Pixel coordinate of the start of the track along the slider axis.
    pub track_start: Px,
    /// Length of the track along the slider axis.
    pub track_length: Px,
    /// Length of a handle along the slider axis.
    pub handle_length: Px,
    /// Reversed axis: the maximum value sits at the track start.
    ///
    /// Hosts set this for bottom-to-top vertical sliders and right-to-left
    /// layouts.
    pub upside_down: bool,
}

impl SliderGeometry {
    /// Usable travel of the handle's leading edge, in pixels.
    pub fn usable_span(&self) -> i32 {
        self.track_length.raw() - self.handle_length.raw()
    }
}

/// Maps an axis pixel position onto a value in `[min, max]`.
///
/// Positions before the track start or past the usable span clamp to the
/// respective end. A track too short to move the handle maps every position
/// to the value at the track start.
pub(super) fn value_from_pixel(pos: Px, geometry: &SliderGeometry, min: i32, max: i32) -> i32 {
    let span = geometry.usable_span();
    if span <= 0 {
        // Degenerate track: the handle cannot travel at all. Explicit guard
        // so the interpolation below never divides by zero or a negative.
        return if geometry.upside_down { max } else { min };
    }

    let offset = (pos.raw().saturating_sub(geometry.track_start.raw())).clamp(0, span) as i64;
    let range = max as i64 - min as i64;
    let span = span as i64;
    // Round to nearest: (offset / span) * range, biased by half a span.
    let scaled = (2 * offset * range + span) / (2 * span);
    let value = (min as i64 + scaled).clamp(min as i64, max as i64);

    let value = if geometry.upside_down {
        max as i64 + min as i64 - value
    } else {
        value
    };
    value as i32
}

/// Maps a value in `[min, max]` onto the axis pixel of the handle's leading
/// edge.
///
/// Exact inverse of [`value_from_pixel`] up to one unit of rounding, so
/// hit-testing and rendering agree on handle placement.
pub(super) fn pixel_from_value(value: i32, geometry: &SliderGeometry, min: i32, max: i32) -> Px {
    let span = geometry.usable_span();
    if span <= 0 || max <= min {
        return geometry.track_start;
    }

    let value = value.clamp(min, max) as i64;
    let value = if geometry.upside_down {
        max as i64 + min as i64 - value
    } else {
        value
    };
    let range = max as i64 - min as i64;
    let offset = (2 * (value - min as i64) * span as i64 + range) / (2 * range);

    Px(geometry.track_start.raw() + offset as i32)
}
