//! Overlay instance caches, one per band level

use crate::model::{GroupKey, Level};
use std::collections::HashMap;

/// A bound overlay together with the height it measured at bind time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay<O> {
    instance: O,
    height: i32,
}

impl<O> Overlay<O> {
    /// Pair a bound instance with its measured height.
    pub fn new(instance: O, height: i32) -> Self {
        Self { instance, height }
    }

    /// The adapter's overlay instance.
    pub fn instance(&self) -> &O {
        &self.instance
    }

    /// Measured height.
    pub fn height(&self) -> i32 {
        self.height
    }
}

/// Mapping from group id to its overlay for a single level.
///
/// Holds at most one overlay per key. Entries stay until [`clear`](Self::clear);
/// `get` never creates.
#[derive(Debug)]
pub struct OverlayCache<O> {
    entries: HashMap<GroupKey, Overlay<O>>,
}

impl<O> OverlayCache<O> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Overlay cached for `key`, if any.
    pub fn get(&self, key: GroupKey) -> Option<&Overlay<O>> {
        self.entries.get(&key)
    }

    /// Store the overlay for `key`, replacing any previous one.
    pub fn put(&mut self, key: GroupKey, overlay: Overlay<O>) {
        self.entries.insert(key, overlay);
    }

    /// Drop every cached overlay.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached overlays.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<O> Default for OverlayCache<O> {
    fn default() -> Self {
        Self::new()
    }
}

/// The header and sub-header caches, addressed by level.
#[derive(Debug)]
pub struct OverlayStore<O> {
    headers: OverlayCache<O>,
    sub_headers: OverlayCache<O>,
}

impl<O> OverlayStore<O> {
    /// Create a store with both levels empty.
    pub fn new() -> Self {
        Self {
            headers: OverlayCache::new(),
            sub_headers: OverlayCache::new(),
        }
    }

    /// Cache for one level.
    pub fn level(&self, level: Level) -> &OverlayCache<O> {
        match level {
            Level::Header => &self.headers,
            Level::SubHeader => &self.sub_headers,
        }
    }

    fn level_mut(&mut self, level: Level) -> &mut OverlayCache<O> {
        match level {
            Level::Header => &mut self.headers,
            Level::SubHeader => &mut self.sub_headers,
        }
    }

    /// Overlay cached for `key` at `level`, if any.
    pub fn get(&self, level: Level, key: GroupKey) -> Option<&Overlay<O>> {
        self.level(level).get(key)
    }

    /// Store the overlay for `key` at `level`.
    pub fn put(&mut self, level: Level, key: GroupKey, overlay: Overlay<O>) {
        self.level_mut(level).put(key, overlay);
    }

    /// Empty one level.
    pub fn clear(&mut self, level: Level) {
        self.level_mut(level).clear();
    }

    /// Empty both levels.
    pub fn clear_all(&mut self) {
        self.headers.clear();
        self.sub_headers.clear();
    }
}

impl<O> Default for OverlayStore<O> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(id: i64) -> GroupKey {
        GroupKey::new(id)
    }

    #[test]
    fn new_cache_is_empty() {
        let cache: OverlayCache<&str> = OverlayCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn get_misses_before_put() {
        let cache: OverlayCache<&str> = OverlayCache::new();
        assert!(cache.get(key(1)).is_none());
    }

    #[test]
    fn put_then_get_returns_same_instance() {
        let mut cache = OverlayCache::new();
        cache.put(key(1), Overlay::new(String::from("a"), 3));

        let first = cache.get(key(1)).map(|o| o.instance() as *const String);
        let second = cache.get(key(1)).map(|o| o.instance() as *const String);
        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(cache.get(key(1)).map(Overlay::height), Some(3));
    }

    #[test]
    fn put_replaces_existing_key() {
        let mut cache = OverlayCache::new();
        cache.put(key(1), Overlay::new("a", 3));
        cache.put(key(1), Overlay::new("b", 4));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(key(1)).map(|o| *o.instance()), Some("b"));
    }

    #[test]
    fn clear_empties_cache() {
        let mut cache = OverlayCache::new();
        cache.put(key(1), Overlay::new("a", 1));
        cache.put(key(2), Overlay::new("b", 1));
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get(key(1)).is_none());
    }

    #[test]
    fn levels_are_independent() {
        let mut store = OverlayStore::new();
        store.put(Level::Header, key(1), Overlay::new("header", 2));
        assert!(store.get(Level::SubHeader, key(1)).is_none());

        store.put(Level::SubHeader, key(1), Overlay::new("sub", 1));
        store.clear(Level::Header);
        assert!(store.get(Level::Header, key(1)).is_none());
        assert_eq!(
            store.get(Level::SubHeader, key(1)).map(|o| *o.instance()),
            Some("sub")
        );
    }

    #[test]
    fn clear_all_empties_both_levels() {
        let mut store = OverlayStore::new();
        store.put(Level::Header, key(1), Overlay::new("h", 2));
        store.put(Level::SubHeader, key(2), Overlay::new("s", 1));
        store.clear_all();
        assert!(store.level(Level::Header).is_empty());
        assert!(store.level(Level::SubHeader).is_empty());
    }
}
