//! Group identity newtypes

/// Opaque identifier of the group (or sub-group) a list item belongs to.
///
/// `GroupKey::NONE` is a sentinel meaning "this item has no group at this
/// level". Equality is by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey(i64);

impl GroupKey {
    /// Sentinel for items without a group.
    pub const NONE: Self = Self(-1);

    /// Create a key from a raw identifier.
    ///
    /// Passing `-1` yields [`GroupKey::NONE`].
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    pub fn get(&self) -> i64 {
        self.0
    }

    /// Check if this is the `NONE` sentinel.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Check if this key names a real group.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// `None` for the sentinel, `Some(self)` otherwise.
    pub fn into_option(self) -> Option<Self> {
        if self.is_none() {
            None
        } else {
            Some(self)
        }
    }
}

impl From<i64> for GroupKey {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Option<i64>> for GroupKey {
    fn from(id: Option<i64>) -> Self {
        id.map_or(Self::NONE, Self)
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "none")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

/// Which overlay band a value refers to.
///
/// Headers stack above sub-headers. The two levels never share overlay
/// instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Primary group band.
    Header,
    /// Secondary band pinned directly below the header.
    SubHeader,
}

impl Level {
    /// Both levels in paint order (sub-headers first).
    pub const PAINT_ORDER: [Level; 2] = [Level::SubHeader, Level::Header];
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Header => write!(f, "header"),
            Level::SubHeader => write!(f, "sub-header"),
        }
    }
}
