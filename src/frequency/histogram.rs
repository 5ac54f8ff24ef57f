use super::{BucketIndex, FrequencyIndex};

/// Byte histogram over a sliding window, with its maximum kept indexed.
pub struct SlidingHistogram<I: FrequencyIndex = BucketIndex> {
    counts: [u32; 256],
    in_window: u32,
    index: I,
}

impl<I: FrequencyIndex> SlidingHistogram<I> {
    /// Builds the histogram of the first window
    pub fn bootstrap(bytes: impl IntoIterator<Item = u8>) -> Self {
        let mut counts = [0; 256];
        let mut in_window = 0;
        for byte in bytes {
            counts[usize::from(byte)] += 1;
            in_window += 1;
        }
        let index = I::from_counts(&counts);
        Self { counts, in_window, index }
    }

    pub fn add(&mut self, byte: u8) {
        let count = &mut self.counts[usize::from(byte)];
        self.index.remove(*count, byte);
        *count += 1;
        self.in_window += 1;
        self.index.insert(*count, byte);
    }

    pub fn remove(&mut self, byte: u8) {
        let count = &mut self.counts[usize::from(byte)];
        debug_assert!(*count > 0, "{byte} is not in the window");
        self.index.remove(*count, byte);
        *count -= 1;
        self.in_window -= 1;
        self.index.insert(*count, byte);
    }

    #[inline(always)]
    pub fn count(&self, byte: u8) -> u32 {
        self.counts[usize::from(byte)]
    }

    /// Number of bytes in the window, the sum of all counts
    #[inline(always)]
    pub fn in_window(&self) -> u32 {
        self.in_window
    }

    pub fn max_count(&mut self) -> u32 {
        self.index.max().0
    }
}

#[cfg(test)]
mod tests {
    use super::SlidingHistogram;
    use crate::frequency::OrderedIndex;

    #[test]
    fn bootstrap_counts() {
        let mut histogram: SlidingHistogram = SlidingHistogram::bootstrap(*b"abracadabra");
        assert_eq!(histogram.in_window(), 11);
        assert_eq!(histogram.count(b'a'), 5);
        assert_eq!(histogram.count(b'r'), 2);
        assert_eq!(histogram.count(b'z'), 0);
        assert_eq!(histogram.max_count(), 5);
    }

    #[test]
    fn empty_window() {
        let mut histogram: SlidingHistogram<OrderedIndex> = SlidingHistogram::bootstrap([]);
        assert_eq!(histogram.in_window(), 0);
        assert_eq!(histogram.max_count(), 0);
    }

    #[test]
    fn slide_moves_the_maximum() {
        let mut histogram: SlidingHistogram = SlidingHistogram::bootstrap(*b"aaab");
        histogram.remove(b'a');
        histogram.remove(b'a');
        histogram.add(b'b');
        histogram.add(b'b');
        assert_eq!(histogram.in_window(), 4);
        assert_eq!(histogram.count(b'a'), 1);
        assert_eq!(histogram.max_count(), 3);

        histogram.remove(b'b');
        histogram.remove(b'b');
        histogram.remove(b'b');
        assert_eq!(histogram.in_window(), 1);
        assert_eq!(histogram.max_count(), 1);
    }
}
