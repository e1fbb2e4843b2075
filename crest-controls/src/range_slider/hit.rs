//! Hit-testing of the two handles.

use crest_foundation::Px;

use super::value_map::{SliderGeometry, pixel_from_value};

/// Which logical element a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleHit {
    /// The low handle.
    Low,
    /// The high handle.
    High,
    /// Neither handle; the press starts a whole-range drag.
    None,
}

/// Classifies an axis pixel position against the rendered handle regions.
///
/// Candidates are tested in a fixed order, low then high, and the first
/// region containing the position wins. When the handles coincide because
/// `low == high`, the low handle therefore takes priority; the tie-break is
/// deliberate, not incidental.
pub(super) fn classify(
    pos: Px,
    low: i32,
    high: i32,
    geometry: &SliderGeometry,
    min: i32,
    max: i32,
) -> HandleHit {
    let candidates = [(HandleHit::Low, low), (HandleHit::High, high)];
    for (hit, value) in candidates {
        let start = pixel_from_value(value, geometry, min, max).raw();
        let end = start + geometry.handle_length.raw();
        if (start..end).contains(&pos.raw()) {
            return hit;
        }
    }
    HandleHit::None
}

#[cfg(test)]
mod tests {
    use super::*;

    // 100 usable pixels over 0..=100: pixel == value for the leading edge.
    fn geometry() -> SliderGeometry {
        SliderGeometry {
            track_start: Px(0),
            track_length: Px(115),
            handle_length: Px(15),
            upside_down: false,
        }
    }

    #[test]
    fn test_each_handle_hit() {
        let geo = geometry();
        // low = 20 occupies [20, 35), high = 70 occupies [70, 85)
        assert_eq!(classify(Px(20), 20, 70, &geo, 0, 100), HandleHit::Low);
        assert_eq!(classify(Px(34), 20, 70, &geo, 0, 100), HandleHit::Low);
        assert_eq!(classify(Px(70), 20, 70, &geo, 0, 100), HandleHit::High);
        assert_eq!(classify(Px(84), 20, 70, &geo, 0, 100), HandleHit::High);
    }

    #[test]
    fn test_miss_is_none() {
        let geo = geometry();
        assert_eq!(classify(Px(50), 20, 70, &geo, 0, 100), HandleHit::None);
        assert_eq!(classify(Px(19), 20, 70, &geo, 0, 100), HandleHit::None);
        assert_eq!(classify(Px(85), 20, 70, &geo, 0, 100), HandleHit::None);
    }

    #[test]
    fn test_coincident_handles_prefer_low() {
        let geo = geometry();
        assert_eq!(classify(Px(55), 50, 50, &geo, 0, 100), HandleHit::Low);
    }

    #[test]
    fn test_overlapping_regions_prefer_low() {
        let geo = geometry();
        // low = 50 occupies [50, 65), high = 55 occupies [55, 70): the
        // overlap [55, 65) belongs to the low handle.
        assert_eq!(classify(Px(60), 50, 55, &geo, 0, 100), HandleHit::Low);
        assert_eq!(classify(Px(66), 50, 55, &geo, 0, 100), HandleHit::High);
    }
}
