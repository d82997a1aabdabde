//! Caller-supplied adapter contract

use crate::model::{GroupKey, Level, OverlayConstraints, Position};

/// Source of group identities and overlay instances for a list.
///
/// # Preconditions
///
/// `header_id` and `sub_header_id` must be pure: the same position must map to
/// the same key on every call for as long as the list contents are unchanged.
/// They are called for any valid logical position, including positions that
/// are currently off-screen. Violations are not detected and only produce
/// wrong visuals.
///
/// After the list contents change, the host calls
/// [`HeaderDecoration::clear_cache`](super::HeaderDecoration::clear_cache) so
/// overlays are rebuilt.
pub trait HeaderAdapter {
    /// Renderable handle created for a group band.
    type Overlay;

    /// Group id of the item at `position`, or [`GroupKey::NONE`].
    fn header_id(&self, position: Position) -> GroupKey;

    /// Sub-group id of the item at `position`, or [`GroupKey::NONE`].
    ///
    /// Only consulted when [`has_sub_headers`](Self::has_sub_headers) is true.
    fn sub_header_id(&self, _position: Position) -> GroupKey {
        GroupKey::NONE
    }

    /// Whether this adapter provides a second band level.
    fn has_sub_headers(&self) -> bool {
        false
    }

    /// Create an unbound overlay for the given level.
    fn create_overlay(&mut self, level: Level) -> Self::Overlay;

    /// Bind `overlay` to the group of the item at `position`.
    fn bind_overlay(&mut self, level: Level, overlay: &mut Self::Overlay, position: Position);

    /// Height a freshly bound overlay occupies when laid out within `constraints`.
    fn measure_overlay(
        &self,
        level: Level,
        overlay: &Self::Overlay,
        constraints: OverlayConstraints,
    ) -> i32;
}
