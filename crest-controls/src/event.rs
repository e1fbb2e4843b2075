//! Input event vocabulary shared by the controls.
//!
//! The host toolkit translates its native events into these types and
//! forwards them to the owning control together with that control's current
//! geometry. Nothing here is queued; delivery is synchronous.

/// Pointer button reported with a press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// The primary button (usually left).
    Primary,
    /// The secondary button (usually right).
    Secondary,
    /// Any other button.
    Auxiliary,
}

/// Keys the controls react to.
///
/// Text input itself stays with the host; only navigation and activation
/// keys reach the interaction cores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The space bar, used to activate checkable controls.
    Space,
    /// Forward field navigation.
    Tab,
    /// Backward field navigation (shift-tab).
    Backtab,
}

/// Axis along which a linear control is laid out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Track runs left to right.
    #[default]
    Horizontal,
    /// Track runs top to bottom.
    Vertical,
}
