use std::fmt;

/// Widest code a [`BitCode`] can hold
pub const MAX_CODE_BITS: u8 = 128;

/// A right-aligned bit string of up to 128 bits, read MSB-first.
///
/// `value` holds the bits in its low `len` positions; the first bit of the
/// code is bit `len - 1`. Leading zero bits are significant, so `"0010"`
/// and `"10"` are different codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitCode {
    value: u128,
    len: u8,
}

impl BitCode {
    /// The zero-length code
    pub const EMPTY: Self = Self { value: 0, len: 0 };

    pub fn new(value: u128, len: u8) -> Self {
        debug_assert!(len <= MAX_CODE_BITS);
        debug_assert!(len == MAX_CODE_BITS || value >> len == 0, "value wider than {len} bits");
        Self { value, len }
    }

    /// Code for `value` zero-padded on the left to `width` bits
    pub fn fixed(value: u128, width: u8) -> Self {
        Self::new(value, width)
    }

    /// Number of bits in the code
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw right-aligned value
    pub fn value(&self) -> u128 {
        self.value
    }

    /// Bit at position `index`, counting from the first (most significant) bit
    pub fn bit(&self, index: usize) -> Option<bool> {
        if index >= self.len() {
            return None;
        }
        let shift = self.len() - 1 - index;
        Some((self.value >> shift) & 1 == 1)
    }

    /// Iterate bits in emission order
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).rev().map(move |shift| (self.value >> shift) & 1 == 1)
    }

    /// Length of the run of one bits at the start of the code
    pub fn leading_ones(&self) -> usize {
        self.bits().take_while(|&bit| bit).count()
    }
}

impl fmt::Display for BitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Number of binary digits needed to write `value`, with `bit_length(0) == 1`
#[inline]
pub fn bit_length(value: usize) -> u8 {
    (usize::BITS - value.leading_zeros()).max(1) as u8
}
