mod buckets;
mod histogram;
mod ordered;

pub use self::{buckets::*, histogram::*, ordered::*};

/// Tracks one `(count, symbol)` pair per byte value and reports the greatest.
///
/// Pairs are ordered by count, then by symbol. Callers keep exactly one pair
/// per symbol in the index: a count change is a `remove` of the old pair
/// followed by an `insert` of the new one.
pub trait FrequencyIndex {
    fn from_counts(counts: &[u32; 256]) -> Self;
    fn insert(&mut self, count: u32, symbol: u8);
    fn remove(&mut self, count: u32, symbol: u8);
    /// Greatest pair currently held
    fn max(&mut self) -> (u32, u8);
}
