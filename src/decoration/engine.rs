//! Overlay positioning: inset reservation, pinning and push-off
//!
//! All offsets are in the list's coordinate space. Scans are linear over the
//! visible items, which are bounded by what fits on screen.

use super::adapter::HeaderAdapter;
use super::cache::{Overlay, OverlayStore};
use super::resolver::GroupResolver;
use super::DecorationConfig;
use crate::model::{GroupKey, Level, Position, Viewport, VisibleItem};
use tracing::{debug, trace};

/// Where one overlay is drawn during a paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Band level.
    pub level: Level,
    /// Group whose overlay is drawn.
    pub key: GroupKey,
    /// Horizontal offset.
    pub left: i32,
    /// Vertical offset; negative when pushed partly off-screen.
    pub top: i32,
}

/// Per-pass positioning engine.
///
/// Borrows the decoration's adapter, caches and config for the duration of
/// one layout or paint pass. Overlays missing from the cache are created,
/// bound and measured on first use.
pub struct PositionEngine<'a, A: HeaderAdapter> {
    adapter: &'a mut A,
    store: &'a mut OverlayStore<A::Overlay>,
    config: &'a DecorationConfig,
    viewport: Viewport,
}

impl<'a, A: HeaderAdapter> PositionEngine<'a, A> {
    /// Borrow the pieces of a decoration for one pass.
    pub fn new(
        adapter: &'a mut A,
        store: &'a mut OverlayStore<A::Overlay>,
        config: &'a DecorationConfig,
        viewport: Viewport,
    ) -> Self {
        Self {
            adapter,
            store,
            config,
            viewport,
        }
    }

    fn resolver(&self) -> GroupResolver<'_, A> {
        GroupResolver::new(&*self.adapter)
    }

    fn group_id(&self, level: Level, position: Position) -> GroupKey {
        self.resolver().group_id(level, position)
    }

    fn starts_group(&self, level: Level, position: Position) -> bool {
        self.resolver().starts_group(level, position)
    }

    /// Height of the overlay for `position` at `level`; 0 without a group.
    ///
    /// Creates, binds and measures the overlay on a cache miss.
    pub fn overlay_height(&mut self, level: Level, position: Position) -> i32 {
        let key = self.group_id(level, position);
        if key.is_none() {
            return 0;
        }
        if let Some(overlay) = self.store.get(level, key) {
            return overlay.height();
        }

        let mut instance = self.adapter.create_overlay(level);
        self.adapter.bind_overlay(level, &mut instance, position);
        let height = self
            .adapter
            .measure_overlay(level, &instance, self.viewport.overlay_constraints())
            .max(0);
        debug!(%level, %key, position = position.get(), height, "Created overlay");
        self.store.put(level, key, Overlay::new(instance, height));
        height
    }

    /// Space an overlay takes out of item layout; 0 when rendering inline.
    fn reserved(&self, height: i32) -> i32 {
        if self.config.render_inline {
            0
        } else {
            height
        }
    }

    /// Extra top spacing the item needs so the bands above it don't cover it.
    pub fn reserve_inset(&mut self, item: &VisibleItem) -> i32 {
        let Some(position) = item.position else {
            return 0;
        };
        let mut inset = 0;
        if self.starts_group(Level::Header, position) {
            inset += self.overlay_height(Level::Header, position);
        }
        if self.starts_group(Level::SubHeader, position) {
            inset += self.overlay_height(Level::SubHeader, position);
        }
        self.reserved(inset)
    }

    /// True when no earlier resolved item is still on screen.
    fn is_first_valid(&self, items: &[VisibleItem], index: usize) -> bool {
        !items[..index].iter().rev().any(|other| {
            other.position.is_some() && other.animated_top() > -self.reserved(other.height)
        })
    }

    /// Offset of the overlay drawn for `items[index]` at `level`.
    ///
    /// `None` when the item is unresolved or has no group at that level.
    pub fn overlay_top(&mut self, level: Level, items: &[VisibleItem], index: usize) -> Option<i32> {
        let position = items.get(index)?.position?;
        if self.group_id(level, position).is_none() {
            return None;
        }
        Some(match level {
            Level::Header => self.header_top(items, index, position),
            Level::SubHeader => self.sub_header_top(items, index, position),
        })
    }

    fn header_top(&mut self, items: &[VisibleItem], index: usize, position: Position) -> i32 {
        let header = self.overlay_height(Level::Header, position);
        let sub_header = self.overlay_height(Level::SubHeader, position);
        let top = items[index].animated_top() - header - sub_header;
        let margin_top = self.config.margin_top_px();

        if self.is_first_valid(items, index) {
            let current = self.group_id(Level::Header, position);
            for next in &items[index + 1..] {
                let Some(next_position) = next.position else {
                    continue;
                };
                if self.group_id(Level::Header, next_position) == current {
                    continue;
                }
                let next_header = self.overlay_height(Level::Header, next_position);
                let bands = self.reserved(header)
                    + self.reserved(next_header)
                    + self.overlay_height(Level::SubHeader, next_position);
                let offset = next.animated_top() - bands;
                if offset < margin_top {
                    trace!(offset, next = next_position.get(), "Header pushed off");
                    return offset;
                }
                break;
            }
        }

        top.max(margin_top)
    }

    fn sub_header_top(&mut self, items: &[VisibleItem], index: usize, position: Position) -> i32 {
        let header = self.overlay_height(Level::Header, position);
        let sub_header = self.overlay_height(Level::SubHeader, position);
        let top = items[index].animated_top() - sub_header;
        let floor = self.config.margin_top_px() + header;

        if self.is_first_valid(items, index) {
            let current_header = self.group_id(Level::Header, position);
            let current_sub = self.group_id(Level::SubHeader, position);
            for next in &items[index + 1..] {
                let Some(next_position) = next.position else {
                    continue;
                };
                if self.group_id(Level::SubHeader, next_position) == current_sub {
                    continue;
                }
                let mut bands = sub_header + self.overlay_height(Level::SubHeader, next_position);
                if self.group_id(Level::Header, next_position) != current_header {
                    bands += self.overlay_height(Level::Header, next_position);
                }
                let offset = next.animated_top() - bands;
                if offset < floor {
                    trace!(offset, next = next_position.get(), "Sub-header pushed off");
                    return offset;
                }
                break;
            }
        }

        top.max(floor)
    }

    /// Every overlay to draw this frame, sub-headers first.
    ///
    /// Per level, the first eligible item draws its band and later items only
    /// draw when they start a new group. Sub-headers are only drawn for items
    /// still on screen.
    pub fn placements(&mut self, items: &[VisibleItem]) -> Vec<Placement> {
        let mut plan = Vec::new();
        for level in Level::PAINT_ORDER {
            let mut drawn = false;
            for (index, item) in items.iter().enumerate() {
                let Some(position) = item.position else {
                    continue;
                };
                if level == Level::SubHeader && !item.is_on_screen() {
                    continue;
                }
                if drawn && !self.starts_group(level, position) {
                    continue;
                }
                let key = self.group_id(level, position);
                let Some(top) = self.overlay_top(level, items, index) else {
                    continue;
                };
                plan.push(Placement {
                    level,
                    key,
                    left: item.left,
                    top,
                });
                drawn = true;
            }
        }
        plan
    }
}
