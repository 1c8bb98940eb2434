pub mod bits;
pub mod codes;
pub mod error;
pub mod lz;
pub mod trace;

pub use error::{Error, Result};
pub use lz::{EncodedStream, GreedyMatchFinder, Lz77Encoder, MatchFinder, Step, Token, Window};
pub use trace::{render_trace, TraceRenderer};

/// Window size used when none is configured
pub const DEFAULT_WINDOW_SIZE: usize = 100;

/// Configuration for encoding
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeConfig {
    /// Maximum number of trailing symbols kept in the window (at least 1)
    pub window_size: usize,
}

impl EncodeConfig {
    pub fn with_window_size(window_size: usize) -> Self {
        Self { window_size }
    }

    /// Check the configuration before a run
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(Error::InvalidWindowSize(self.window_size));
        }
        Ok(())
    }
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self { window_size: DEFAULT_WINDOW_SIZE }
    }
}

/// Statistics from an encoding run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeStats {
    pub steps: u64,
    pub literals: u64,
    pub matches: u64,
    /// Source symbols covered by back-references
    pub matched_symbols: u64,
    /// Matches whose offset needed more bits than the marker-derived width
    pub offset_overflows: u64,
    /// Size of the source at 8 bits per symbol
    pub input_bits: u64,
    pub total_bits: u64,
}

impl EncodeStats {
    /// Encoded size relative to the 8-bit input, or `None` for empty input
    pub fn ratio(&self) -> Option<f64> {
        (self.input_bits > 0).then(|| self.total_bits as f64 / self.input_bits as f64)
    }
}

/// Trait for the complete encoding operation
pub trait Encoder {
    /// Encode a sequence of 8-bit symbols
    fn encode(&mut self, source: &[u8]) -> Result<EncodedStream>;

    /// Encode text whose characters all fit in 8 bits
    fn encode_text(&mut self, text: &str) -> Result<EncodedStream> {
        let symbols = lz::symbols_from_text(text)?;
        self.encode(&symbols)
    }
}
