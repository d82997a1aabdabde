//! Scroll state of the demo's virtualized list

use super::height_index::HeightIndex;
use crate::decoration::{HeaderAdapter, HeaderDecoration};
use crate::model::{Viewport, VisibleItem};
use tracing::debug;

/// A list of fixed-height rows with decoration insets, scrolled by row.
///
/// Each item occupies its inset followed by its content. Offsets are rows
/// from the top of the whole list.
#[derive(Debug, Clone)]
pub struct ListState {
    item_count: usize,
    item_height: i32,
    insets: Vec<i32>,
    heights: HeightIndex,
    scroll_offset: i64,
}

impl ListState {
    /// List of `item_count` items, each `item_height` rows tall, before layout.
    pub fn new(item_count: usize, item_height: i32) -> Self {
        let item_height = item_height.max(1);
        let insets = vec![0; item_count];
        let heights = HeightIndex::from_heights(&vec![i64::from(item_height); item_count]);
        Self {
            item_count,
            item_height,
            insets,
            heights,
            scroll_offset: 0,
        }
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Recompute every item's inset from the decoration.
    ///
    /// Call after anything that changes reserved space: creation, inline
    /// toggles, cache clears after data changes.
    pub fn relayout<A: HeaderAdapter>(
        &mut self,
        decoration: &mut HeaderDecoration<A>,
        viewport: Viewport,
    ) {
        for position in 0..self.item_count {
            let item = VisibleItem::new(position, 0, self.item_height);
            let inset = decoration.measure_inset(&item, viewport);
            self.insets[position] = inset;
            self.heights
                .set(position, i64::from(inset) + i64::from(self.item_height));
        }
        self.scroll_offset = self.scroll_offset.min(self.max_offset(viewport.height));
        debug!(
            items = self.item_count,
            total = self.total_height(),
            "List relayout"
        );
    }

    /// Reserved inset of the item at `position`.
    pub fn inset(&self, position: usize) -> i32 {
        self.insets.get(position).copied().unwrap_or(0)
    }

    /// Height of the whole list including insets.
    pub fn total_height(&self) -> i64 {
        self.heights.total()
    }

    /// Current scroll offset.
    pub fn offset(&self) -> i64 {
        self.scroll_offset
    }

    fn max_offset(&self, viewport_height: i32) -> i64 {
        (self.total_height() - i64::from(viewport_height)).max(0)
    }

    /// Scroll by `delta` rows, clamped to the list bounds.
    pub fn scroll_by(&mut self, delta: i64, viewport_height: i32) {
        self.scroll_offset = (self.scroll_offset + delta).clamp(0, self.max_offset(viewport_height));
    }

    /// Scroll to the first row.
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll so the last row sits at the bottom of the viewport.
    pub fn scroll_to_bottom(&mut self, viewport_height: i32) {
        self.scroll_offset = self.max_offset(viewport_height);
    }

    /// Items overlapping the viewport, in layout order.
    ///
    /// `top` is the item's content top relative to the viewport, below its
    /// inset; the first item may start above the viewport.
    pub fn visible_items(&self, viewport_height: i32) -> Vec<VisibleItem> {
        let Some(first) = self.heights.lower_bound(self.scroll_offset) else {
            return Vec::new();
        };
        let bottom = self.scroll_offset + i64::from(viewport_height);

        (first..self.item_count)
            .map(|position| (position, self.heights.start_of(position)))
            .take_while(|&(_, start)| start < bottom)
            .map(|(position, start)| {
                let top = start + i64::from(self.insets[position]) - self.scroll_offset;
                VisibleItem::new(position, top as i32, self.item_height)
            })
            .collect()
    }
}
