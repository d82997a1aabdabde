//! Sticky header decoration for virtualized lists
//!
//! The host list calls into [`HeaderDecoration`] twice per frame: once per
//! visible item during layout ([`HeaderDecoration::measure_inset`]) and once
//! for the whole visible set during paint ([`HeaderDecoration::paint`]).
//!
//! # Module Structure
//!
//! - `adapter`: [`HeaderAdapter`] - caller-supplied ids and overlay factory
//! - `resolver`: [`GroupResolver`] - group ids and band starts
//! - `cache`: [`OverlayCache`] / [`OverlayStore`] - overlays keyed by group id
//! - `engine`: [`PositionEngine`] - insets and per-frame overlay offsets

pub mod adapter;
pub mod cache;
pub mod engine;
pub mod resolver;

pub use adapter::HeaderAdapter;
pub use cache::{Overlay, OverlayCache, OverlayStore};
pub use engine::{Placement, PositionEngine};
pub use resolver::GroupResolver;

use crate::model::{Level, Position, Viewport, VisibleItem};
use tracing::debug;

/// Geometry settings of a decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecorationConfig {
    /// Inset from the top edge that pinned overlays stop at. `None` pins to 0.
    pub margin_top: Option<i32>,
    /// Draw overlays over item content instead of reserving space for them.
    pub render_inline: bool,
}

impl DecorationConfig {
    /// Margin in pixels, 0 when unset.
    pub fn margin_top_px(&self) -> i32 {
        self.margin_top.unwrap_or(0)
    }
}

/// Paint target for overlays.
pub trait Surface<O> {
    /// Draw `overlay` with its top-left corner at (`left`, `top`).
    fn draw_overlay(&mut self, level: Level, overlay: &O, left: i32, top: i32);
}

/// Sticky header decoration: owns the adapter, both overlay caches and the
/// geometry config.
///
/// One type serves single- and two-level lists; the sub-header level is
/// active only when [`HeaderAdapter::has_sub_headers`] returns true.
pub struct HeaderDecoration<A: HeaderAdapter> {
    adapter: A,
    store: OverlayStore<A::Overlay>,
    config: DecorationConfig,
}

impl<A: HeaderAdapter> HeaderDecoration<A> {
    /// Create a decoration with default config (no margin, reserving space).
    pub fn new(adapter: A) -> Self {
        Self::with_config(adapter, DecorationConfig::default())
    }

    /// Create a decoration with the given config.
    pub fn with_config(adapter: A, config: DecorationConfig) -> Self {
        Self {
            adapter,
            store: OverlayStore::new(),
            config,
        }
    }

    /// The adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable adapter access. Call [`clear_cache`](Self::clear_cache) after
    /// changing what it binds.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Current geometry config.
    pub fn config(&self) -> &DecorationConfig {
        &self.config
    }

    /// Engine over this decoration's state for one pass.
    pub fn engine(&mut self, viewport: Viewport) -> PositionEngine<'_, A> {
        PositionEngine::new(&mut self.adapter, &mut self.store, &self.config, viewport)
    }

    /// Extra top inset to reserve for `item` during layout.
    pub fn measure_inset(&mut self, item: &VisibleItem, viewport: Viewport) -> i32 {
        self.engine(viewport).reserve_inset(item)
    }

    /// Overlay offsets for one frame without drawing.
    pub fn placements(&mut self, items: &[VisibleItem], viewport: Viewport) -> Vec<Placement> {
        self.engine(viewport).placements(items)
    }

    /// Draw the active overlays for the visible items, sub-headers first.
    pub fn paint<S>(&mut self, surface: &mut S, items: &[VisibleItem], viewport: Viewport)
    where
        S: Surface<A::Overlay> + ?Sized,
    {
        for placement in self.placements(items, viewport) {
            if let Some(overlay) = self.store.get(placement.level, placement.key) {
                surface.draw_overlay(
                    placement.level,
                    overlay.instance(),
                    placement.left,
                    placement.top,
                );
            }
        }
    }

    /// Height of the header for `position`, 0 without a group.
    pub fn header_height(&mut self, position: Position, viewport: Viewport) -> i32 {
        self.engine(viewport).overlay_height(Level::Header, position)
    }

    /// Height of the sub-header for `position`, 0 without a sub-group.
    pub fn sub_header_height(&mut self, position: Position, viewport: Viewport) -> i32 {
        self.engine(viewport)
            .overlay_height(Level::SubHeader, position)
    }

    /// Number of overlays cached at `level`.
    pub fn cache_len(&self, level: Level) -> usize {
        self.store.level(level).len()
    }

    /// Drop both caches; overlays are recreated and rebound on the next pass.
    pub fn clear_cache(&mut self) {
        debug!("Clearing overlay caches");
        self.store.clear_all();
    }

    /// Drop the header cache.
    pub fn clear_group_cache(&mut self) {
        debug!("Clearing header cache");
        self.store.clear(Level::Header);
    }

    /// Drop the sub-header cache.
    pub fn clear_sub_group_cache(&mut self) {
        debug!("Clearing sub-header cache");
        self.store.clear(Level::SubHeader);
    }

    /// Stop pinned overlays `margin_top` below the top edge.
    pub fn set_margin_top(&mut self, margin_top: i32) {
        self.config.margin_top = Some(margin_top);
    }

    /// Pin overlays to the top edge again.
    pub fn clear_margin_top(&mut self) {
        self.config.margin_top = None;
    }

    /// Whether a top margin is set.
    pub fn has_margin_top(&self) -> bool {
        self.config.margin_top.is_some()
    }

    /// Top margin in pixels, 0 when unset.
    pub fn margin_top(&self) -> i32 {
        self.config.margin_top_px()
    }

    /// Whether overlays draw over content instead of reserving space.
    pub fn render_inline(&self) -> bool {
        self.config.render_inline
    }

    /// Switch inline rendering. Cached overlays stay valid.
    pub fn set_render_inline(&mut self, render_inline: bool) {
        self.config.render_inline = render_inline;
    }
}

#[cfg(test)]
#[path = "decoration_tests.rs"]
mod tests;
