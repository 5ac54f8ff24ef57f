use super::FrequencyIndex;

/// 256-bit membership set, bit `s` set when symbol `s` is in the bucket
type SymbolSet = [u64; 4];

/// Symbols bucketed by their count.
///
/// `buckets[c]` holds every symbol whose count is `c`. The greatest non-empty
/// bucket is cached in `top` and only lowered when queried, so the +1/-1
/// updates of a sliding window cost O(1) amortized.
pub struct BucketIndex {
    buckets: Vec<SymbolSet>,
    top: usize,
}

impl BucketIndex {
    fn bucket_mut(&mut self, count: u32) -> &mut SymbolSet {
        let count = crate::cast!(usize, count);
        if count >= self.buckets.len() {
            self.buckets.resize(count + 1, [0; 4]);
        }
        &mut self.buckets[count]
    }
}

impl FrequencyIndex for BucketIndex {
    fn from_counts(counts: &[u32; 256]) -> Self {
        let mut index = Self { buckets: Vec::new(), top: 0 };
        for (symbol, &count) in counts.iter().enumerate() {
            index.insert(count, crate::cast!(u8, symbol));
        }
        index
    }

    fn insert(&mut self, count: u32, symbol: u8) {
        let (word, bit) = locate(symbol);
        let bucket = self.bucket_mut(count);
        debug_assert!(bucket[word] & bit == 0, "({count}, {symbol}) already indexed");
        bucket[word] |= bit;
        self.top = self.top.max(crate::cast!(usize, count));
    }

    fn remove(&mut self, count: u32, symbol: u8) {
        let (word, bit) = locate(symbol);
        let bucket = &mut self.buckets[crate::cast!(usize, count)];
        debug_assert!(bucket[word] & bit != 0, "({count}, {symbol}) not indexed");
        bucket[word] &= !bit;
    }

    fn max(&mut self) -> (u32, u8) {
        while self.top > 0 && self.buckets[self.top] == [0; 4] {
            self.top -= 1;
        }
        let top = self.buckets.get(self.top).copied().unwrap_or_default();
        (crate::cast!(u32, self.top), highest(&top))
    }
}

#[inline(always)]
fn locate(symbol: u8) -> (usize, u64) {
    (usize::from(symbol >> 6), 1 << (symbol & 63))
}

fn highest(set: &SymbolSet) -> u8 {
    (0..4)
        .rev()
        .find(|&word| set[word] != 0)
        .map_or(0, |word| crate::cast!(u8, 64 * word + 63 - crate::cast!(usize, set[word].leading_zeros())))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::{highest, BucketIndex};
    use crate::frequency::{FrequencyIndex, OrderedIndex};

    #[test]
    fn all_zero_counts() {
        let mut index = BucketIndex::from_counts(&[0; 256]);
        assert_eq!(index.max(), (0, 255));
    }

    #[test]
    fn highest_symbol_in_set() {
        assert_eq!(highest(&[1, 0, 0, 0]), 0);
        assert_eq!(highest(&[u64::MAX, 1 << 5, 0, 0]), 69);
        assert_eq!(highest(&[0, 0, 0, 1 << 63]), 255);
        assert_eq!(highest(&[0; 4]), 0);
    }

    #[test]
    fn top_drops_after_removal() {
        let mut counts = [0; 256];
        counts[b'a' as usize] = 5;
        counts[b'b' as usize] = 2;
        let mut index = BucketIndex::from_counts(&counts);
        assert_eq!(index.max(), (5, b'a'));

        // 5 -> 1 one step at a time, passing 'b' on the way
        for count in (1..=5).rev() {
            index.remove(count, b'a');
            index.insert(count - 1, b'a');
        }
        assert_eq!(index.max(), (2, b'b'));
    }

    #[test]
    fn ties_break_on_symbol() {
        let mut counts = [0; 256];
        counts[3] = 7;
        counts[200] = 7;
        let mut index = BucketIndex::from_counts(&counts);
        assert_eq!(index.max(), (7, 200));
        index.remove(7, 200);
        index.insert(6, 200);
        assert_eq!(index.max(), (7, 3));
    }

    #[test]
    fn agrees_with_ordered_index() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut counts = [0u32; 256];
        for count in counts.iter_mut() {
            *count = rng.gen_range(0..8);
        }
        let mut buckets = BucketIndex::from_counts(&counts);
        let mut ordered = OrderedIndex::from_counts(&counts);

        for _ in 0..20_000 {
            // skew towards a few symbols so the maximum actually moves
            let symbol: u8 = if rng.gen_bool(0.5) { rng.gen_range(0..4) } else { rng.gen() };
            let old = counts[usize::from(symbol)];
            let new = if old > 0 && rng.gen_bool(0.5) { old - 1 } else { old + 1 };
            buckets.remove(old, symbol);
            ordered.remove(old, symbol);
            counts[usize::from(symbol)] = new;
            buckets.insert(new, symbol);
            ordered.insert(new, symbol);
            assert_eq!(buckets.max(), ordered.max());
        }
    }
}
