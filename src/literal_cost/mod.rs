//! Per-byte literal costs under a sliding-window order-0 model.
//!
//! Every position is priced against the byte histogram of the positions
//! around it, so the estimate adapts to local statistics. The match finder
//! sums these costs over a range and compares them with the cost of a
//! backward reference.


use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::LiteralCostError;
use crate::frequency::{BucketIndex, FrequencyIndex, SlidingHistogram};
use crate::ring::{self, Ring};

/// Radius of the sliding window
pub const WINDOW_HALF: usize = 2000;

/// Empirical correction added to the cost of non-dominated windows
pub const ENTROPY_CORRECTION: f64 = 0.029;

/// Writes the estimated bit cost of every byte in `[pos, pos + len)` to `cost`.
///
/// Both `data` and `cost` are addressed through `(pos + i) & mask`, where
/// `mask` is the physical buffer size minus one. Slots outside the range are
/// left untouched. The caller guarantees that the buffers cover every index
/// the range maps to; see [`try_estimate_bit_costs_for_literals`] for a
/// checked variant.
pub fn estimate_bit_costs_for_literals(pos: usize, len: usize, mask: usize, data: &[u8], cost: &mut [f32]) {
    estimate_bit_costs_with::<BucketIndex>(pos, len, mask, data, cost);
}

/// Same as [`estimate_bit_costs_for_literals`], with a chosen frequency index
pub fn estimate_bit_costs_with<I: FrequencyIndex>(pos: usize, len: usize, mask: usize, data: &[u8], cost: &mut [f32]) {
    estimate::<I>(WINDOW_HALF, Ring::new(data, pos, mask), len, cost);
}

/// Validates the buffer contract, then estimates like [`estimate_bit_costs_for_literals`]
pub fn try_estimate_bit_costs_for_literals(
    pos: usize,
    len: usize,
    mask: usize,
    data: &[u8],
    cost: &mut [f32],
) -> Result<(), LiteralCostError> {
    let needed = ring::extent(pos, len, mask).map_err(|err| {
        debug!(pos, len, mask, %err, "rejected literal cost range");
        err
    })?;
    if data.len() < needed {
        debug!(needed, actual = data.len(), "input does not cover range");
        return Err(LiteralCostError::InputTooShort { needed, actual: data.len() });
    }
    if cost.len() < needed {
        debug!(needed, actual = cost.len(), "cost array does not cover range");
        return Err(LiteralCostError::OutputTooShort { needed, actual: cost.len() });
    }

    estimate_bit_costs_for_literals(pos, len, mask, data, cost);
    Ok(())
}

/// Estimates costs for consecutive blocks of a linear buffer in parallel.
///
/// Each block gets its own window, as if estimated by a separate call, so the
/// result does not depend on the thread count. A `block_size` of 0 estimates
/// the whole buffer as one block.
pub fn par_estimate_bit_costs(data: &[u8], block_size: usize) -> Vec<f32> {
    let block_size = if block_size == 0 { data.len().max(1) } else { block_size };
    let mut cost = vec![0.0; data.len()];
    debug!(len = data.len(), blocks = data.len().div_ceil(block_size), "estimating blocks");

    cost.par_chunks_mut(block_size)
        .zip(data.par_chunks(block_size))
        .for_each(|(cost, block)| {
            estimate_bit_costs_for_literals(0, block.len(), usize::MAX, block, cost);
        });
    cost
}

fn estimate<I: FrequencyIndex>(window_half: usize, ring: Ring<u8>, len: usize, cost: &mut [f32]) {
    trace!(len, window_half, "estimating literal costs");
    let mut window: SlidingHistogram<I> = SlidingHistogram::bootstrap((0..len.min(window_half)).map(|i| ring.get(i)));

    for i in 0..len {
        center(&mut window, ring, window_half, len, i);
        let byte = ring.get(i);
        let histo = window.count(byte).max(1);
        cost[ring.physical(i)] = literal_cost(histo, window.max_count(), window.in_window());
    }
}

/// Moves the window from `i - 1` to `i`: drops `i - window_half` and takes in
/// `i + window_half`, whichever of them lie in the stream.
fn center<I: FrequencyIndex>(window: &mut SlidingHistogram<I>, ring: Ring<u8>, window_half: usize, len: usize, i: usize) {
    if i >= window_half {
        window.remove(ring.get(i - window_half));
    }
    if i + window_half < len {
        window.add(ring.get(i + window_half));
    }
}

/// Bit cost of a byte seen `histo` times in a window of `in_window` bytes
/// whose most frequent byte was seen `max_count` times.
///
/// A window dominated by one byte prices that byte at a flat bit and the
/// others against the remainder of the window.
pub fn literal_cost(histo: u32, max_count: u32, in_window: u32) -> f32 {
    let half = in_window / 2;
    if max_count > half {
        let mut cost = 1.0;
        if histo < half {
            cost += (f64::from(in_window - max_count) / f64::from(histo)).log2();
        }
        cost as f32
    } else {
        // rounded to f32 before the correction is applied
        let cost = (f64::from(in_window) / f64::from(histo)).log2() as f32;
        (f64::from(cost) + ENTROPY_CORRECTION) as f32
    }
}
