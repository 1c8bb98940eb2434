use super::BitCode;

/// Bit-level writer for packed step output
///
/// Writes bits MSB-first: the first bit written lands in the high bit of
/// the first byte.
pub struct BitWriter {
    /// Accumulated output bytes
    output: Vec<u8>,
    /// Current byte being built
    current_byte: u8,
    /// Bits written to current byte (0-7)
    bits_in_byte: u8,
    /// Total bits written, excluding padding
    bit_len: u64,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { output: Vec::with_capacity(capacity), current_byte: 0, bits_in_byte: 0, bit_len: 0 }
    }

    /// Write the low `n` bits (0-128) of `value`, most significant first
    pub fn write_bits(&mut self, value: u128, n: u8) {
        debug_assert!(n <= 128);

        let mut remaining = n;
        while remaining > 0 {
            let space = 8 - self.bits_in_byte;
            let to_write = remaining.min(space);
            let shift = remaining - to_write;

            let mask = (1u128 << to_write) - 1;
            let chunk = ((value >> shift) & mask) as u8;
            self.current_byte |= chunk << (space - to_write);

            self.bits_in_byte += to_write;
            remaining -= to_write;

            if self.bits_in_byte == 8 {
                self.output.push(self.current_byte);
                self.current_byte = 0;
                self.bits_in_byte = 0;
            }
        }
        self.bit_len += u64::from(n);
    }

    /// Write a single bit
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.write_bits(u128::from(bit), 1);
    }

    /// Write every bit of `code` in emission order
    pub fn write_code(&mut self, code: &BitCode) {
        self.write_bits(code.value(), code.len() as u8);
    }

    /// Pad to byte boundary with zero bits
    pub fn align_to_byte(&mut self) {
        if self.bits_in_byte > 0 {
            self.output.push(self.current_byte);
            self.current_byte = 0;
            self.bits_in_byte = 0;
        }
    }

    /// Finish and return the output bytes
    pub fn finish(mut self) -> Vec<u8> {
        self.align_to_byte();
        self.output
    }

    /// Get current output length in bytes (including partial byte)
    pub fn len(&self) -> usize {
        self.output.len() + usize::from(self.bits_in_byte > 0)
    }

    /// Number of meaningful bits written so far
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Peek at the completed bytes without consuming
    pub fn as_bytes(&self) -> &[u8] {
        &self.output
    }

    /// Clear the writer for reuse
    pub fn clear(&mut self) {
        self.output.clear();
        self.current_byte = 0;
        self.bits_in_byte = 0;
        self.bit_len = 0;
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}
