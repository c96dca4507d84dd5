//! Insertion-ordered associative container.
//!
//! # Responsibility
//! - Map keys to values with O(1) point lookup.
//! - Enumerate present keys in first-insertion order.
//!
//! # Invariants
//! - The live slots of `order` and the key set of `entries` are identical.
//! - Every entry's `slot` points at the `order` position holding its key.
//! - Overwriting an existing key never moves it; delete + set moves it last.
//! - Single-threaded by contract: mutation needs `&mut self`.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;

/// Tombstones tolerated before compaction is considered at all.
const COMPACT_MIN_TOMBSTONES: usize = 32;

#[derive(Clone)]
struct Entry<V> {
    slot: usize,
    value: V,
}

/// Hash map that remembers the order keys were first inserted.
///
/// Deletion leaves a tombstone in the order vector and the vector is
/// compacted once tombstones outnumber live keys, so `delete` stays
/// amortized O(1) instead of shifting the whole sequence.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    entries: HashMap<K, Entry<V>>,
    order: Vec<Option<K>>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `key` at the end of the order, or overwrites its value in place.
    pub fn set(&mut self, key: K, value: V) {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            return;
        }

        let slot = self.order.len();
        self.order.push(Some(key.clone()));
        self.entries.insert(key, Entry { slot, value });
    }

    /// Returns the value stored for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Returns whether `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key` from both the index and the order.
    ///
    /// Returns `false` and leaves the map untouched when `key` is absent.
    pub fn delete(&mut self, key: &K) -> bool {
        let Some(entry) = self.entries.remove(key) else {
            return false;
        };

        self.order[entry.slot] = None;
        self.compact_if_sparse();
        true
    }

    /// Returns an independent copy of the present keys in insertion order.
    pub fn keys(&self) -> Vec<K> {
        self.order.iter().flatten().cloned().collect()
    }

    /// Iterates `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.order
            .iter()
            .flatten()
            .filter_map(|key| self.entries.get(key).map(|entry| (key, &entry.value)))
    }

    /// Number of present keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn compact_if_sparse(&mut self) {
        if self.entries.is_empty() {
            self.order.clear();
            return;
        }

        let tombstones = self.order.len() - self.entries.len();
        if tombstones < COMPACT_MIN_TOMBSTONES || tombstones <= self.entries.len() {
            return;
        }

        self.order.retain(Option::is_some);
        for (slot, key) in self.order.iter().enumerate() {
            let Some(key) = key else {
                continue;
            };
            if let Some(entry) = self.entries.get_mut(key) {
                entry.slot = slot;
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

impl<K, V> Debug for OrderedMap<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{OrderedMap, COMPACT_MIN_TOMBSTONES};

    fn assert_slots_consistent(map: &OrderedMap<u32, u32>) {
        for (key, entry) in &map.entries {
            assert_eq!(map.order[entry.slot], Some(*key), "slot mismatch for {key}");
        }
        assert_eq!(map.order.iter().flatten().count(), map.entries.len());
    }

    #[test]
    fn delete_leaves_tombstone_until_sparse() {
        let mut map: OrderedMap<u32, u32> = (0..10).map(|key| (key, key)).collect();
        assert!(map.delete(&3));

        assert_eq!(map.order.len(), 10);
        assert_eq!(map.order[3], None);
        assert_slots_consistent(&map);
    }

    #[test]
    fn compaction_preserves_order_and_slots() {
        let total = (COMPACT_MIN_TOMBSTONES * 3) as u32;
        let mut map: OrderedMap<u32, u32> = (0..total).map(|key| (key, key * 10)).collect();

        for key in (0..total).filter(|key| key % 3 != 0) {
            assert!(map.delete(&key));
            assert_slots_consistent(&map);
        }

        assert!(map.order.len() < total as usize);
        let expected: Vec<u32> = (0..total).filter(|key| key % 3 == 0).collect();
        assert_eq!(map.keys(), expected);
        assert_eq!(map.get(&9), Some(&90));

        map.set(1, 11);
        assert_eq!(map.keys().last(), Some(&1));
        assert_slots_consistent(&map);
    }

    #[test]
    fn deleting_last_key_resets_order() {
        let mut map = OrderedMap::new();
        map.set(7_u32, 1_u32);
        map.set(8, 2);
        map.delete(&7);
        map.delete(&8);

        assert!(map.order.is_empty());
        assert!(map.is_empty());
    }

    #[test]
    fn debug_renders_in_insertion_order() {
        let map: OrderedMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(format!("{map:?}"), r#"{"b": 2, "a": 1}"#);
    }
}
