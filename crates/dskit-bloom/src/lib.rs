//! Bloom filter for dskit.
//!
//! Probabilistic set membership over string keys: three independently
//! seeded hash functions each raise one bit on insert, and membership is
//! the conjunction of those bits. No false negatives for inserted keys;
//! false positives are possible by design and shrink with a wider span.

use dskit_hash::{HashError, SeededHash};

/// A Bloom filter over string keys.
#[derive(Debug, Clone)]
pub struct BloomFilter {
    bits: Vec<bool>,
    hashers: [SeededHash; 3],
}

impl BloomFilter {
    /// Create a filter with `span` bits. Zero bits is an invalid argument.
    pub fn with_span(span: usize) -> Result<Self, HashError> {
        Ok(Self {
            bits: vec![false; span],
            hashers: [
                SeededHash::new(span)?,
                SeededHash::new(span)?,
                SeededHash::new(span)?,
            ],
        })
    }

    /// Record `key` in the filter.
    pub fn set(&mut self, key: &str) {
        for hasher in &self.hashers {
            let index = hasher.digest(key);
            self.bits[index] = true;
        }
    }

    /// Whether `key` might be in the set. `false` is definitive; `true` may
    /// be a false positive.
    pub fn contains(&self, key: &str) -> bool {
        self.hashers
            .iter()
            .all(|hasher| self.bits[hasher.digest(key)])
    }

    /// Number of bits in the filter.
    pub fn span(&self) -> usize {
        self.bits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserted_keys_are_reported() {
        let mut filter = BloomFilter::with_span(1000).expect("nonzero span");
        for key in ["alpha", "beta", "gamma"] {
            filter.set(key);
        }
        for key in ["alpha", "beta", "gamma"] {
            assert!(filter.contains(key), "no false negatives for {key}");
        }
    }

    #[test]
    fn test_fresh_filter_contains_nothing() {
        let filter = BloomFilter::with_span(100).expect("nonzero span");
        assert!(!filter.contains("anything"));
    }

    #[test]
    fn test_zero_span_is_invalid() {
        assert!(matches!(BloomFilter::with_span(0), Err(HashError::ZeroSpan)));
    }

    #[test]
    fn test_mostly_rejects_absent_keys() {
        // With a wide span and few insertions, false positives should be
        // rare; require a clear majority of absent probes to miss.
        let mut filter = BloomFilter::with_span(10_000).expect("nonzero span");
        for i in 0..50 {
            filter.set(&format!("member-{i}"));
        }

        let misses = (0..200)
            .filter(|i| !filter.contains(&format!("absent-{i}")))
            .count();
        assert!(misses > 150, "only {misses} of 200 absent probes missed");
    }

    #[test]
    fn test_saturated_single_bit_filter_reports_everything() {
        // Degenerate span: every digest lands on bit 0, so one insertion
        // makes every probe a (false) positive.
        let mut filter = BloomFilter::with_span(1).expect("nonzero span");
        filter.set("anything");
        assert!(filter.contains("something else"));
    }
}
