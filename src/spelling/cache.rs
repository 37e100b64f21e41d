//! Bounded least-recently-used cache for lookup results.

use std::collections::BTreeMap;
use std::hash::Hash;

use ahash::AHashMap;

/// A fixed-capacity LRU cache.
///
/// Every access stamps the entry with a monotonically increasing tick; the
/// entry with the smallest tick is evicted when an insert pushes the cache
/// over capacity. A hit re-stamps the entry, moving it to the
/// most-recently-used position. A capacity of zero disables caching.
#[derive(Debug)]
pub struct LruCache<K, V> {
    capacity: usize,
    tick: u64,
    entries: AHashMap<K, (V, u64)>,
    recency: BTreeMap<u64, K>,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        LruCache {
            capacity,
            tick: 0,
            entries: AHashMap::new(),
            recency: BTreeMap::new(),
        }
    }

    /// Look up a key, promoting it to most-recently-used on a hit.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let next = self.tick + 1;
        let (value, stamp) = self.entries.get_mut(key)?;
        self.recency.remove(&*stamp);
        *stamp = next;
        self.recency.insert(next, key.clone());
        self.tick = next;
        Some(value.clone())
    }

    /// Insert or replace an entry, evicting the least-recently-used one when
    /// the cache is over capacity.
    pub fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }

        self.tick += 1;
        if let Some((_, old_stamp)) = self.entries.insert(key.clone(), (value, self.tick)) {
            self.recency.remove(&old_stamp);
        }
        self.recency.insert(self.tick, key);

        while self.entries.len() > self.capacity {
            let Some((_, oldest)) = self.recency.pop_first() else {
                break;
            };
            self.entries.remove(&oldest);
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
