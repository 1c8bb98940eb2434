use crate::bits::{BitCode, BitWriter};
use crate::codes::{self, FLAG_BITS};
use crate::EncodeStats;

/// Represents a single token in the encoded stream
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A literal symbol
    Literal(u8),
    /// A back-reference into the window
    Match {
        /// Number of symbols covered
        length: usize,
        /// Backward distance written to the offset field
        offset: usize,
        /// Post-insertion position of the match in the window; selects the
        /// offset field width
        marker: usize,
    },
}

impl Token {
    /// Returns the number of source symbols this token represents
    pub fn uncompressed_size(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Match { length, .. } => *length,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Token::Match { .. })
    }
}

/// One emitted step: the token plus the exact bits it costs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    index: usize,
    token: Token,
    text: Vec<u8>,
    offset_code: BitCode,
    length_code: BitCode,
    window_len: usize,
}

impl Step {
    pub(crate) fn literal(index: usize, symbol: u8) -> Self {
        Self {
            index,
            token: Token::Literal(symbol),
            text: vec![symbol],
            offset_code: BitCode::EMPTY,
            length_code: codes::encode_literal(symbol),
            window_len: 0,
        }
    }

    pub(crate) fn matched(
        index: usize,
        text: &[u8],
        offset: usize,
        marker: usize,
        length_code: BitCode,
    ) -> Self {
        Self {
            index,
            token: Token::Match { length: text.len(), offset, marker },
            text: text.to_vec(),
            offset_code: codes::encode_offset(marker, offset),
            length_code,
            window_len: 0,
        }
    }

    pub(crate) fn with_window_len(mut self, window_len: usize) -> Self {
        self.window_len = window_len;
        self
    }

    /// Zero-based position of this step in the stream
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// `true` for a back-reference, `false` for a literal
    pub fn flag(&self) -> bool {
        self.token.is_match()
    }

    pub fn flag_bit(&self) -> u8 {
        u8::from(self.flag())
    }

    /// Literal symbol or matched symbols
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Text with each symbol mapped to the character of the same code point
    pub fn text_lossy(&self) -> String {
        self.text.iter().map(|&b| char::from(b)).collect()
    }

    /// Match length, 0 for a literal
    pub fn match_length(&self) -> usize {
        match self.token {
            Token::Literal(_) => 0,
            Token::Match { length, .. } => length,
        }
    }

    pub fn offset(&self) -> Option<usize> {
        match self.token {
            Token::Literal(_) => None,
            Token::Match { offset, .. } => Some(offset),
        }
    }

    pub fn marker(&self) -> Option<usize> {
        match self.token {
            Token::Literal(_) => None,
            Token::Match { marker, .. } => Some(marker),
        }
    }

    /// Offset field; empty for a literal
    pub fn offset_code(&self) -> &BitCode {
        &self.offset_code
    }

    /// Length code for a match, or the 8-bit symbol code for a literal
    pub fn length_code(&self) -> &BitCode {
        &self.length_code
    }

    /// Window length once this step was appended and the window trimmed
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// Flag bit plus offset and length/literal bits
    pub fn bit_count(&self) -> usize {
        FLAG_BITS + self.offset_code.len() + self.length_code.len()
    }

    /// Whether the offset was written wider than its marker allows
    pub fn is_offset_overflow(&self) -> bool {
        match self.token {
            Token::Literal(_) => false,
            Token::Match { offset, marker, .. } => codes::is_overflow(marker, offset),
        }
    }

    /// Emit flag, offset and length bits in stream order
    pub fn write_to(&self, writer: &mut BitWriter) {
        writer.write_bit(self.flag());
        writer.write_code(&self.offset_code);
        writer.write_code(&self.length_code);
    }
}

/// Complete output of one encoding run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodedStream {
    steps: Vec<Step>,
    total_bits: u64,
    source_len: usize,
}

impl EncodedStream {
    pub(crate) fn new(steps: Vec<Step>, total_bits: u64, source_len: usize) -> Self {
        Self { steps, total_bits, source_len }
    }

    /// Steps in emission order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    /// Cumulative bit count of every step
    pub fn total_bits(&self) -> u64 {
        self.total_bits
    }

    /// Number of symbols in the encoded source
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Summary counters for the run
    pub fn stats(&self) -> EncodeStats {
        let mut stats = EncodeStats {
            steps: self.steps.len() as u64,
            input_bits: self.source_len as u64 * u64::from(codes::LITERAL_BITS),
            total_bits: self.total_bits,
            ..Default::default()
        };
        for step in &self.steps {
            if step.flag() {
                stats.matches += 1;
                stats.matched_symbols += step.match_length() as u64;
                if step.is_offset_overflow() {
                    stats.offset_overflows += 1;
                }
            } else {
                stats.literals += 1;
            }
        }
        stats
    }

    /// Pack every step MSB-first, zero-padding the final byte
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = BitWriter::with_capacity(self.total_bits.div_ceil(8) as usize);
        for step in &self.steps {
            step.write_to(&mut writer);
        }
        writer.finish()
    }

    /// The whole stream as a string of `0` and `1`
    pub fn bit_string(&self) -> String {
        let mut out = String::with_capacity(self.total_bits as usize);
        for step in &self.steps {
            out.push(if step.flag() { '1' } else { '0' });
            out.push_str(&step.offset_code.to_string());
            out.push_str(&step.length_code.to_string());
        }
        out
    }
}
