//! Occurrence counting with first-seen ordering.

use core::hash::Hash;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Counts keys while remembering the order each key first appeared.
///
/// Ranking sorts stably by descending count over that order, so ties come
/// out in first-seen order.
#[derive(Debug, Clone)]
pub(crate) struct CountTable<K> {
    counts: IndexMap<K, u32, FxBuildHasher>,
}

impl<K: Hash + Eq + Copy> CountTable<K> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: IndexMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    #[inline]
    pub fn add(&mut self, key: K) {
        let count = self.counts.entry(key).or_insert(0);
        *count = count.saturating_add(1);
    }

    #[inline]
    pub fn get(&self, key: &K) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (K, u32)> + '_ {
        self.counts.iter().map(|(k, c)| (*k, *c))
    }

    /// The `n` highest counts, ties in first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(K, u32)> {
        let mut ranked: Vec<(K, u32)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table<'a>(keys: &[&'a str]) -> CountTable<&'a str> {
        let mut t = CountTable::with_capacity(keys.len());
        for k in keys {
            t.add(*k);
        }
        t
    }

    #[test]
    fn counts_and_len() {
        let t = table(&["a", "b", "a", "c", "a"]);
        assert_eq!(t.get(&"a"), 3);
        assert_eq!(t.get(&"b"), 1);
        assert_eq!(t.get(&"z"), 0);
        assert_eq!(t.len(), 3);
        assert_eq!(t.total(), 5);
    }

    #[test]
    fn iteration_is_first_seen_order() {
        let t = table(&["z", "y", "z", "x"]);
        let keys: Vec<&str> = t.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "y", "x"]);
    }

    #[test]
    fn most_common_breaks_ties_by_first_seen() {
        let t = table(&["dog", "cat", "cat", "emu", "dog", "ant"]);
        assert_eq!(
            t.most_common(10),
            vec![("dog", 2), ("cat", 2), ("emu", 1), ("ant", 1)]
        );
        assert_eq!(t.most_common(1), vec![("dog", 2)]);
        assert!(t.most_common(0).is_empty());
    }

    #[test]
    fn pair_keys() {
        let mut t = CountTable::with_capacity(4);
        t.add(("of", "the"));
        t.add(("the", "cat"));
        t.add(("of", "the"));
        assert_eq!(t.most_common(1), vec![(("of", "the"), 2)]);
    }
}
