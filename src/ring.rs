use crate::error::LiteralCostError;

/// A logical stream laid over a power-of-two physical buffer.
///
/// Logical index `i` lives at physical index `(pos + i) & mask`. A mask of
/// `usize::MAX` addresses the buffer linearly.
pub struct Ring<'a, T> {
    buf: &'a [T],
    pos: usize,
    mask: usize,
}

impl<T> Clone for Ring<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Ring<'_, T> {}

impl<'a, T: Copy> Ring<'a, T> {
    pub fn new(buf: &'a [T], pos: usize, mask: usize) -> Self {
        Self { buf, pos, mask }
    }

    #[inline(always)]
    pub fn physical(&self, i: usize) -> usize {
        self.pos.wrapping_add(i) & self.mask
    }

    #[inline(always)]
    pub fn get(&self, i: usize) -> T {
        self.buf[self.physical(i)]
    }
}

/// Checks that `mask` is `2^k - 1` and returns how many leading physical slots
/// a call over `[pos, pos + len)` touches.
///
/// Wrapping ranges touch the whole buffer, others end at `(pos & mask) + len`.
pub fn extent(pos: usize, len: usize, mask: usize) -> Result<usize, LiteralCostError> {
    // 2^k - 1 has no gaps: adding one clears every set bit
    if mask & mask.wrapping_add(1) != 0 {
        return Err(LiteralCostError::InvalidMask { mask });
    }
    if len == 0 {
        return Ok(0);
    }

    let start = pos & mask;
    let end = start.checked_add(len);
    match mask.checked_add(1) {
        // linear addressing, the range must not run off the address space
        None => end.ok_or(LiteralCostError::LengthExceedsBuffer { len, capacity: usize::MAX }),
        Some(capacity) if len > capacity => Err(LiteralCostError::LengthExceedsBuffer { len, capacity }),
        Some(capacity) => Ok(end.map_or(capacity, |end| end.min(capacity))),
    }
}
