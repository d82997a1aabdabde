//! Layout state of the demo list.
//!
//! The decoration only sees per-frame [`VisibleItem`](crate::model::VisibleItem)
//! snapshots; this module is the host side that produces them.
//!
//! - `height_index`: [`HeightIndex`] - prefix sums for offset lookups
//! - `list`: [`ListState`] - insets, scroll offset and the visible window

pub mod height_index;
pub mod list;

pub use height_index::HeightIndex;
pub use list::ListState;
