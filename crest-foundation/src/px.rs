//! Physical pixel coordinate types.
//!
//! Positions delivered by a host toolkit arrive in physical pixels. The
//! coordinate system has its origin at the top-left corner, with the x-axis
//! increasing to the right and the y-axis increasing downward. Negative
//! coordinates are valid; a pointer captured during a drag can leave the
//! widget bounds.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A single physical pixel coordinate value.
///
/// # Examples
///
/// ```
/// use crest_foundation::Px;
///
/// let a = Px(10);
/// let b = Px(-4);
/// assert_eq!(a + b, Px(6));
/// assert_eq!(a * 2, Px(20));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a `Px` from an i32 value.
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts to an f32, for hosts that track sub-pixel cursor positions.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32, rounding to the nearest pixel.
    pub fn from_f32(value: f32) -> Self {
        Self(value.round() as i32)
    }

    /// Clamps this value into `[min, max]`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(self.0.clamp(min.0, max.0))
    }

    /// Adds without overflowing.
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Subtracts without overflowing.
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<i32> for Px {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<i32> for Px {
    type Output = Self;

    fn div(self, rhs: i32) -> Self {
        Self(self.0 / rhs)
    }
}

impl Neg for Px {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// Horizontal coordinate.
    pub x: Px,
    /// Vertical coordinate.
    pub y: Px,
}

impl PxPosition {
    /// Origin position.
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
    };

    /// Creates a position from coordinates.
    pub fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by the given deltas.
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxSize {
    /// Horizontal extent.
    pub width: Px,
    /// Vertical extent.
    pub height: Px,
}

impl PxSize {
    /// Creates a size from extents.
    pub fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}
