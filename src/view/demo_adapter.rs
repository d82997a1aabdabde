//! Sample adapter for the terminal demo.
//!
//! Items 0..5 have no header, then a header every 18 items. With two levels
//! enabled, items from 18 on also get a sub-header every 3 items.

use crate::decoration::HeaderAdapter;
use crate::model::{GroupKey, Level, OverlayConstraints, Position};

/// Items before this position have no header.
pub const FIRST_HEADER_POSITION: usize = 5;
/// Items per header group.
pub const HEADER_GROUP_SIZE: usize = 18;
/// Items before this position have no sub-header.
pub const FIRST_SUB_HEADER_POSITION: usize = 18;
/// Items per sub-header group.
pub const SUB_HEADER_GROUP_SIZE: usize = 3;

/// A one-row band label, bound to the position that first produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOverlay {
    /// Level this overlay was created for.
    pub level: Level,
    /// Text drawn in the band.
    pub label: String,
    /// Position it was last bound to.
    pub bound_to: Option<Position>,
}

/// Adapter producing the demo's header and sub-header bands.
#[derive(Debug, Clone, Default)]
pub struct DemoAdapter {
    double_headers: bool,
    created: usize,
    bound: usize,
}

impl DemoAdapter {
    /// Create the adapter; `double_headers` enables the sub-header level.
    pub fn new(double_headers: bool) -> Self {
        Self {
            double_headers,
            ..Self::default()
        }
    }

    /// Overlays created so far.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Bind calls so far.
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Text shown for an item row.
    pub fn item_label(position: Position) -> String {
        format!("Item {}", position.get())
    }

    fn label(&self, level: Level, position: Position) -> String {
        match level {
            Level::Header => format!("Header {}", self.header_id(position).get()),
            Level::SubHeader => format!("Sub-header {}", self.sub_header_id(position).get()),
        }
    }
}

impl HeaderAdapter for DemoAdapter {
    type Overlay = DemoOverlay;

    fn header_id(&self, position: Position) -> GroupKey {
        let p = position.get();
        if p < FIRST_HEADER_POSITION {
            GroupKey::NONE
        } else {
            GroupKey::new((p / HEADER_GROUP_SIZE) as i64)
        }
    }

    fn sub_header_id(&self, position: Position) -> GroupKey {
        let p = position.get();
        if p < FIRST_SUB_HEADER_POSITION {
            GroupKey::NONE
        } else {
            GroupKey::new((p / SUB_HEADER_GROUP_SIZE) as i64)
        }
    }

    fn has_sub_headers(&self) -> bool {
        self.double_headers
    }

    fn create_overlay(&mut self, level: Level) -> DemoOverlay {
        self.created += 1;
        DemoOverlay {
            level,
            label: String::new(),
            bound_to: None,
        }
    }

    fn bind_overlay(&mut self, level: Level, overlay: &mut DemoOverlay, position: Position) {
        self.bound += 1;
        overlay.label = self.label(level, position);
        overlay.bound_to = Some(position);
    }

    fn measure_overlay(
        &self,
        _level: Level,
        _overlay: &DemoOverlay,
        constraints: OverlayConstraints,
    ) -> i32 {
        constraints.max_height.min(1)
    }
}
