use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Input errors
    #[error("Symbol {symbol:?} at position {position} does not fit in an 8-bit literal")]
    SymbolOutOfRange { symbol: char, position: usize },

    #[error("Invalid window size: {0} (must be at least 1)")]
    InvalidWindowSize(usize),

    // Internal errors
    #[error("Step {step}: matched substring of {pattern_len} symbols not found in window")]
    WindowLookup { pattern_len: usize, step: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
