use tracing::{debug, trace};

use super::matcher::{GreedyMatchFinder, MatchFinder};
use super::tokens::{EncodedStream, Step};
use super::window::Window;
use crate::codes;
use crate::error::{Error, Result};
use crate::{EncodeConfig, Encoder};

/// Sliding-window encoder.
///
/// Each step asks the match finder for the longest prefix of the remaining
/// source present in the window. A match becomes a back-reference (flag 1,
/// offset field, length code); anything else becomes a literal (flag 0,
/// 8-bit symbol). The window is trimmed to the configured size after every
/// step.
pub struct Lz77Encoder<F: MatchFinder = GreedyMatchFinder> {
    config: EncodeConfig,
    finder: F,
}

impl Lz77Encoder {
    pub fn new(config: EncodeConfig) -> Self {
        Self { config, finder: GreedyMatchFinder }
    }
}

impl<F: MatchFinder> Lz77Encoder<F> {
    /// Create an encoder that searches with a custom match finder
    pub fn with_match_finder(config: EncodeConfig, finder: F) -> Self {
        Self { config, finder }
    }

    pub fn config(&self) -> &EncodeConfig {
        &self.config
    }
}

impl<F: MatchFinder> Encoder for Lz77Encoder<F> {
    fn encode(&mut self, source: &[u8]) -> Result<EncodedStream> {
        self.config.validate()?;
        let window_size = self.config.window_size;

        let mut window = Window::with_capacity(window_size.min(source.len()).saturating_mul(2));
        let mut steps: Vec<Step> = Vec::new();
        let mut total_bits: u64 = 0;
        let mut cursor = 0;

        while cursor < source.len() {
            let index = steps.len();

            let step = match self.finder.find_match(source, cursor, &window) {
                Some(found) => {
                    let aligned = found.start == cursor
                        && found.start <= found.last
                        && found.last < source.len();
                    if !aligned {
                        return Err(Error::Internal(format!(
                            "step {index}: match {}..={} is not a run starting at cursor {cursor}",
                            found.start, found.last
                        )));
                    }
                    let step = match_step(&mut window, index, found.text(source), found.last)?;
                    if step.is_offset_overflow() {
                        debug!(
                            step = index,
                            offset = ?step.offset(),
                            marker = ?step.marker(),
                            bits = step.offset_code().len(),
                            "offset wider than marker-derived field"
                        );
                    }
                    cursor = found.end();
                    step
                }
                None => {
                    let symbol = source[cursor];
                    window.append(&[symbol]);
                    cursor += 1;
                    Step::literal(index, symbol)
                }
            };

            debug!(
                step = index,
                flag = step.flag_bit(),
                length = step.match_length(),
                offset = ?step.offset(),
                marker = ?step.marker(),
                bits = step.bit_count(),
                "encoded step"
            );

            window.trim(window_size);
            trace!(window_len = window.len(), cursor, "window trimmed");

            total_bits += step.bit_count() as u64;
            steps.push(step.with_window_len(window.len()));
        }

        debug!(steps = steps.len(), total_bits, source_len = source.len(), "encoding complete");
        Ok(EncodedStream::new(steps, total_bits, source.len()))
    }
}

/// Build the back-reference step for `text`, updating the window.
///
/// The distance is taken against the leftmost occurrence before
/// insertion; the width marker is the rightmost occurrence after it.
fn match_step(window: &mut Window, index: usize, text: &[u8], last: usize) -> Result<Step> {
    let lookup_failed = || Error::WindowLookup { pattern_len: text.len(), step: index };

    let first = window.first_index_of(text).ok_or_else(lookup_failed)?;
    let offset = last
        .checked_sub(text.len())
        .and_then(|base| base.checked_sub(first))
        .ok_or_else(|| {
            Error::Internal(format!(
                "step {index}: negative offset (last={last}, len={}, first={first})",
                text.len()
            ))
        })?;

    window.append(text);
    let marker = window.last_index_of(text).ok_or_else(lookup_failed)?;

    let length_code = codes::encode_length(text.len())
        .ok_or_else(|| Error::Internal(format!("step {index}: empty match")))?;

    Ok(Step::matched(index, text, offset, marker, length_code))
}

/// Map text onto 8-bit symbols, one per character.
///
/// Fails on the first character whose code point does not fit in a byte.
pub fn symbols_from_text(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(position, symbol)| {
            u8::try_from(symbol).map_err(|_| Error::SymbolOutOfRange { symbol, position })
        })
        .collect()
}
