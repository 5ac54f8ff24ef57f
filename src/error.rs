//! Errors reported by the checked entry points.

use thiserror::Error;

/// A caller contract violation detected before estimating costs.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LiteralCostError {
    /// The mask is not one less than a power of two.
    #[error("Invalid mask {mask:#x}: must be 2^k - 1")]
    InvalidMask {
        /// The rejected mask.
        mask: usize,
    },

    /// The logical range is longer than the physical buffer.
    #[error("Length {len} exceeds buffer capacity {capacity}")]
    LengthExceedsBuffer {
        /// Requested logical length.
        len: usize,
        /// Physical buffer size implied by the mask.
        capacity: usize,
    },

    /// The input does not cover every physical index the range touches.
    #[error("Input too short: need {needed} bytes, got {actual}")]
    InputTooShort {
        /// Required input length.
        needed: usize,
        /// Actual input length.
        actual: usize,
    },

    /// The cost array does not cover every physical index the range touches.
    #[error("Cost array too short: need {needed} slots, got {actual}")]
    OutputTooShort {
        /// Required cost array length.
        needed: usize,
        /// Actual cost array length.
        actual: usize,
    },
}
