//! Adaptive-width offset code.
//!
//! The field width follows the buffer-fill marker: a marker with `n`
//! significant bits gives width `n`, or `n - 1` when the marker is an exact
//! power of two. The offset is zero-padded to that width. An offset wider
//! than the field is written at its natural length instead of being
//! truncated, so the code length can exceed [`offset_width`].

use crate::bits::{bit_length, BitCode};

/// Field width selected by the buffer-fill marker
pub fn offset_width(marker: usize) -> u8 {
    let n = bit_length(marker);
    // zero counts as a power of two here, giving width 0
    if marker == 0 || marker.is_power_of_two() {
        n - 1
    } else {
        n
    }
}

/// Encode `offset` in a field sized by `marker`
pub fn encode_offset(marker: usize, offset: usize) -> BitCode {
    let width = offset_width(marker).max(bit_length(offset));
    BitCode::fixed(offset as u128, width)
}

/// Whether `offset` needs more bits than the marker-derived width
pub fn is_overflow(marker: usize, offset: usize) -> bool {
    bit_length(offset) > offset_width(marker)
}
