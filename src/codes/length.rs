//! Self-delimiting match length code.
//!
//! A length `L` with `n` significant bits is written as `n - 1` one bits, a
//! zero terminator, then the low `n - 1` bits of `L`. The unary prefix tells
//! a reader how many suffix bits follow; the leading one bit of `L` is
//! implied.
//!
//! | L | code    |
//! |---|---------|
//! | 1 | `0`     |
//! | 2 | `100`   |
//! | 3 | `101`   |
//! | 5 | `11001` |

use crate::bits::{bit_length, BitCode};

/// Encode a match length. Returns `None` for zero, which has no code.
pub fn encode_length(length: usize) -> Option<BitCode> {
    if length == 0 {
        return None;
    }

    let n = bit_length(length);
    let suffix_bits = n - 1;
    let suffix_mask = (1u128 << suffix_bits) - 1;

    // ones sit above the terminator, which sits above the suffix
    let prefix = suffix_mask << n;
    let suffix = length as u128 & suffix_mask;

    Some(BitCode::new(prefix | suffix, 2 * n - 1))
}

/// Decode a complete length code back into its length.
///
/// Returns `None` if `code` is not exactly one well-formed length code.
pub fn decode_length(code: &BitCode) -> Option<usize> {
    let k = code.leading_ones();
    if code.len() != 2 * k + 1 || code.bit(k) != Some(false) {
        return None;
    }
    if k >= usize::BITS as usize {
        return None;
    }

    let suffix = (code.value() & ((1u128 << k) - 1)) as usize;
    Some((1usize << k) | suffix)
}

/// Number of bits `encode_length(length)` produces
pub fn length_code_len(length: usize) -> usize {
    2 * bit_length(length) as usize - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_str(length: usize) -> String {
        encode_length(length).unwrap().to_string()
    }

    #[test]
    fn test_golden_codes() {
        assert_eq!(code_str(1), "0");
        assert_eq!(code_str(2), "100");
        assert_eq!(code_str(3), "101");
        assert_eq!(code_str(4), "11000");
        assert_eq!(code_str(5), "11001");
        assert_eq!(code_str(9), "1110001");
    }

    #[test]
    fn test_zero_has_no_code() {
        assert_eq!(encode_length(0), None);
    }

    #[test]
    fn test_decode_inverts_encode() {
        for length in (1..2000).chain([usize::MAX / 2, usize::MAX]) {
            let code = encode_length(length).unwrap();
            assert_eq!(code.len(), length_code_len(length));
            assert_eq!(decode_length(&code), Some(length), "length {length}");
        }
    }

    #[test]
    fn test_largest_length_fits() {
        let code = encode_length(usize::MAX).unwrap();
        assert_eq!(code.len(), 2 * usize::BITS as usize - 1);
        assert_eq!(code.leading_ones(), usize::BITS as usize - 1);
    }

    #[test]
    fn test_decode_rejects_malformed() {
        // unary run of 2 needs 5 bits total
        assert_eq!(decode_length(&BitCode::new(0b110, 3)), None);
        // no terminator
        assert_eq!(decode_length(&BitCode::new(0b111, 3)), None);
        assert_eq!(decode_length(&BitCode::EMPTY), None);
    }
}
