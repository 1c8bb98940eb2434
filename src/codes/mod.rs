pub mod length;
pub mod offset;

pub use length::{decode_length, encode_length, length_code_len};
pub use offset::{encode_offset, is_overflow, offset_width};

use crate::bits::BitCode;

/// Bits spent on the match/literal flag of every step
pub const FLAG_BITS: usize = 1;

/// Fixed width of a literal symbol code
pub const LITERAL_BITS: u8 = 8;

/// Fixed-width code for a literal symbol
#[inline]
pub fn encode_literal(symbol: u8) -> BitCode {
    BitCode::fixed(u128::from(symbol), LITERAL_BITS)
}
