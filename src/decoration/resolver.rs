//! Group identity resolution

use super::adapter::HeaderAdapter;
use crate::model::{GroupKey, Level, Position};

/// Read-only view of an adapter's group identities at both levels.
///
/// A level the adapter does not provide always resolves to `GroupKey::NONE`
/// without calling into the adapter.
#[derive(Debug)]
pub struct GroupResolver<'a, A: ?Sized> {
    adapter: &'a A,
}

impl<A: ?Sized> Clone for GroupResolver<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ?Sized> Copy for GroupResolver<'_, A> {}

impl<'a, A: HeaderAdapter + ?Sized> GroupResolver<'a, A> {
    /// Wrap an adapter.
    pub fn new(adapter: &'a A) -> Self {
        Self { adapter }
    }

    /// Group id of `position` at `level`.
    pub fn group_id(&self, level: Level, position: Position) -> GroupKey {
        match level {
            Level::Header => self.adapter.header_id(position),
            Level::SubHeader if self.adapter.has_sub_headers() => {
                self.adapter.sub_header_id(position)
            }
            Level::SubHeader => GroupKey::NONE,
        }
    }

    /// Whether the item at `position` begins a new band at `level`.
    ///
    /// True iff the item has a group and it is either the first item or its
    /// predecessor's group differs.
    pub fn starts_group(&self, level: Level, position: Position) -> bool {
        let id = self.group_id(level, position);
        if id.is_none() {
            return false;
        }
        match position.prev() {
            None => true,
            Some(previous) => id != self.group_id(level, previous),
        }
    }
}
