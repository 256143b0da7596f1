//! Bucket hash map for dskit.
//!
//! String keys are digested by a per-instance [`SeededHash`] into one of
//! `span` buckets; each bucket is a `dskit-list` linked list of entries.
//! `set` appends, so rereading a key returns the most recently written
//! value. Lookup of an absent key is an expected `None`, never an error.

use dskit_hash::{HashError, SeededHash};
use dskit_list::LinkedList;

#[derive(Debug, Clone)]
struct Entry<V> {
    key: String,
    value: V,
}

/// A separate-chaining hash map over string keys.
#[derive(Debug, Clone)]
pub struct BucketMap<V> {
    buckets: Vec<LinkedList<Entry<V>>>,
    hasher: SeededHash,
}

impl<V> BucketMap<V> {
    /// Create a map with `span` buckets. Zero buckets is an invalid argument.
    pub fn with_span(span: usize) -> Result<Self, HashError> {
        let hasher = SeededHash::new(span)?;
        let mut buckets = Vec::with_capacity(span);
        for _ in 0..span {
            buckets.push(LinkedList::new());
        }
        Ok(Self { buckets, hasher })
    }

    /// Store `value` under `key`. Earlier writes to the same key stay in the
    /// bucket but are shadowed on read.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let index = self.hasher.digest(&key);
        self.buckets[index].push(Entry { key, value });
    }

    /// The most recently written value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.hasher.digest(key);
        self.buckets[index]
            .iter()
            .filter(|entry| entry.key == key)
            .last()
            .map(|entry| &entry.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of buckets.
    pub fn span(&self) -> usize {
        self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut map = BucketMap::with_span(16).expect("nonzero span");
        map.set("alpha", 1);
        map.set("beta", 2);

        assert_eq!(map.get("alpha"), Some(&1));
        assert_eq!(map.get("beta"), Some(&2));
        assert_eq!(map.get("gamma"), None);
    }

    #[test]
    fn test_contains_key() {
        let mut map = BucketMap::with_span(8).expect("nonzero span");
        map.set("present", ());
        assert!(map.contains_key("present"));
        assert!(!map.contains_key("absent"));
    }

    #[test]
    fn test_last_write_wins() {
        let mut map = BucketMap::with_span(4).expect("nonzero span");
        map.set("key", "old");
        map.set("key", "new");
        assert_eq!(map.get("key"), Some(&"new"));
    }

    #[test]
    fn test_zero_span_is_invalid() {
        assert!(matches!(
            BucketMap::<i32>::with_span(0),
            Err(HashError::ZeroSpan)
        ));
    }

    #[test]
    fn test_colliding_keys_coexist() {
        // One bucket forces every key into the same chain.
        let mut map = BucketMap::with_span(1).expect("nonzero span");
        for i in 0..20 {
            map.set(format!("key-{i}"), i);
        }
        for i in 0..20 {
            assert_eq!(map.get(&format!("key-{i}")), Some(&i));
        }
        assert_eq!(map.span(), 1);
    }
}
