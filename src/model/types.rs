//! Per-frame list geometry

/// Logical index of an item in the full (non-virtualized) list. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(usize);

impl Position {
    /// Create a new Position from a raw 0-based value.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// The position before this one, or `None` at position 0.
    pub fn prev(&self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl From<usize> for Position {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// One on-screen list entry, as seen by the host list during a single frame.
///
/// Snapshots are borrowed per frame and never retained by the decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleItem {
    /// Logical position, or `None` while the item is unresolved (removed from
    /// the adapter but still animating out).
    pub position: Option<Position>,
    /// Left edge of the item, used as the overlay's horizontal offset.
    pub left: i32,
    /// Laid-out top of the item content (below any reserved inset).
    pub top: i32,
    /// In-flight vertical translation applied on top of `top`.
    pub translation_y: i32,
    /// Height of the item content.
    pub height: i32,
}

impl VisibleItem {
    /// Create a resolved item at rest.
    pub fn new(position: impl Into<Position>, top: i32, height: i32) -> Self {
        Self {
            position: Some(position.into()),
            left: 0,
            top,
            translation_y: 0,
            height,
        }
    }

    /// Create an item whose logical position cannot currently be resolved.
    pub fn unresolved(top: i32, height: i32) -> Self {
        Self {
            position: None,
            left: 0,
            top,
            translation_y: 0,
            height,
        }
    }

    /// Builder: set a vertical translation.
    pub fn with_translation(mut self, translation_y: i32) -> Self {
        self.translation_y = translation_y;
        self
    }

    /// Builder: set the left edge.
    pub fn with_left(mut self, left: i32) -> Self {
        self.left = left;
        self
    }

    /// On-screen top including any in-flight translation.
    pub fn animated_top(&self) -> i32 {
        self.top + self.translation_y
    }

    /// True when at least one row of the item is below the top edge.
    pub fn is_on_screen(&self) -> bool {
        self.animated_top() > -self.height
    }
}

/// Size and padding of the list viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Full width of the list.
    pub width: i32,
    /// Full height of the list.
    pub height: i32,
    /// Left padding.
    pub padding_left: i32,
    /// Right padding.
    pub padding_right: i32,
    /// Top padding.
    pub padding_top: i32,
    /// Bottom padding.
    pub padding_bottom: i32,
}

impl Viewport {
    /// Create an unpadded viewport.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Constraints an overlay is measured against.
    ///
    /// Width is exact, height is an upper-bound hint.
    pub fn overlay_constraints(&self) -> OverlayConstraints {
        OverlayConstraints {
            width: (self.width - self.padding_left - self.padding_right).max(0),
            max_height: (self.height - self.padding_top - self.padding_bottom).max(0),
        }
    }
}

/// Measurement constraints handed to the adapter for a freshly bound overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayConstraints {
    /// Exact width the overlay will be drawn at.
    pub width: i32,
    /// Available height; overlays may report less.
    pub max_height: i32,
}
