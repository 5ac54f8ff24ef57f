use std::collections::BTreeSet;

use super::FrequencyIndex;

/// Balanced ordered set of `(count, symbol)` pairs, O(log 256) per operation.
pub struct OrderedIndex {
    pairs: BTreeSet<(u32, u8)>,
}

impl FrequencyIndex for OrderedIndex {
    fn from_counts(counts: &[u32; 256]) -> Self {
        let pairs = counts
            .iter()
            .enumerate()
            .map(|(symbol, &count)| (count, crate::cast!(u8, symbol)))
            .collect();
        Self { pairs }
    }

    fn insert(&mut self, count: u32, symbol: u8) {
        let fresh = self.pairs.insert((count, symbol));
        debug_assert!(fresh, "({count}, {symbol}) already indexed");
    }

    fn remove(&mut self, count: u32, symbol: u8) {
        let found = self.pairs.remove(&(count, symbol));
        debug_assert!(found, "({count}, {symbol}) not indexed");
    }

    fn max(&mut self) -> (u32, u8) {
        self.pairs.last().copied().unwrap_or_default()
    }
}
