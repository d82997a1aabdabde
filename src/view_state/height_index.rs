//! HeightIndex - O(log n) prefix sums over item heights via Fenwick tree
//!
//! Maps between item indices and vertical offsets in a virtualized list:
//! where an item starts, and which item covers a given offset.
//!
//! # Complexity
//!
//! - `set`: O(log n)
//! - `start_of` / `end_of`: O(log n)
//! - `lower_bound`: O(log² n)
//! - `from_heights`: O(n log n)

/// Cumulative heights of a fixed-length sequence of items.
#[derive(Debug, Clone, Default)]
pub struct HeightIndex {
    /// Fenwick tree storage, same length as `heights`.
    tree: Vec<i64>,
    /// Current height of each item, kept to compute deltas in `set`.
    heights: Vec<i64>,
}

impl HeightIndex {
    /// Build an index over the given heights.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stickyband::view_state::height_index::HeightIndex;
    /// let index = HeightIndex::from_heights(&[3, 4, 5]);
    /// assert_eq!(index.len(), 3);
    /// assert_eq!(index.total(), 12);
    /// ```
    pub fn from_heights(heights: &[i64]) -> Self {
        let mut tree = vec![0; heights.len()];
        for (index, &height) in heights.iter().enumerate() {
            fenwick::array::update(&mut tree, index, height);
        }
        Self {
            tree,
            heights: heights.to_vec(),
        }
    }

    /// Replace the height at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize, height: i64) {
        let delta = height - self.heights[index];
        if delta != 0 {
            fenwick::array::update(&mut self.tree, index, delta);
            self.heights[index] = height;
        }
    }

    /// Height of the item at `index`.
    pub fn height(&self, index: usize) -> Option<i64> {
        self.heights.get(index).copied()
    }

    /// Offset where the item at `index` starts (sum of all earlier heights).
    ///
    /// # Examples
    ///
    /// ```
    /// # use stickyband::view_state::height_index::HeightIndex;
    /// let index = HeightIndex::from_heights(&[3, 4, 5]);
    /// assert_eq!(index.start_of(0), 0);
    /// assert_eq!(index.start_of(2), 7);
    /// ```
    pub fn start_of(&self, index: usize) -> i64 {
        if index == 0 || self.is_empty() {
            0
        } else {
            fenwick::array::prefix_sum(&self.tree, (index - 1).min(self.len() - 1))
        }
    }

    /// Offset just past the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn end_of(&self, index: usize) -> i64 {
        assert!(
            index < self.len(),
            "index {} out of bounds (len: {})",
            index,
            self.len()
        );
        fenwick::array::prefix_sum(&self.tree, index)
    }

    /// First index whose item extends past `offset`.
    ///
    /// `None` when `offset` is at or beyond the total height.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stickyband::view_state::height_index::HeightIndex;
    /// let index = HeightIndex::from_heights(&[10, 20, 15]);
    /// assert_eq!(index.lower_bound(0), Some(0));
    /// assert_eq!(index.lower_bound(10), Some(1));
    /// assert_eq!(index.lower_bound(44), Some(2));
    /// assert_eq!(index.lower_bound(45), None);
    /// ```
    pub fn lower_bound(&self, offset: i64) -> Option<usize> {
        let (mut left, mut right) = (0, self.len());
        while left < right {
            let mid = left + (right - left) / 2;
            if self.end_of(mid) > offset {
                right = mid;
            } else {
                left = mid + 1;
            }
        }
        (left < self.len()).then_some(left)
    }

    /// Sum of all heights.
    pub fn total(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.end_of(self.len() - 1)
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Returns true if the index contains no items.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}
