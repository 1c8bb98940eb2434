//! Human-readable step table.
//!
//! Everything here is a projection of [`Step`] records; nothing is
//! recomputed from the source or the window.

use std::fmt::Write as _;
use std::io;

use crate::lz::{EncodedStream, Step};

const RULE_WIDTH: usize = 90;

/// Placeholder shown in the offset column of a literal
const NO_OFFSET: &str = "-";

/// Renders an [`EncodedStream`] as a fixed-width table
#[derive(Clone, Debug)]
pub struct TraceRenderer {
    header: bool,
    summary: bool,
}

impl TraceRenderer {
    pub fn new() -> Self {
        Self { header: true, summary: true }
    }

    /// Include the column header and rule lines
    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Include the trailing total-bits line
    pub fn summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    pub fn render(&self, stream: &EncodedStream) -> String {
        let mut out = String::new();
        let rule = "-".repeat(RULE_WIDTH);

        if self.header {
            out.push_str(&format_columns("Step", "Flag", "Sequence", "d", "l", "Code", "Bits"));
            out.push('\n');
            out.push_str(&rule);
            out.push('\n');
        }
        for step in stream.steps() {
            out.push_str(&format_row(step));
            out.push('\n');
        }
        if self.summary {
            if self.header {
                out.push_str(&rule);
                out.push('\n');
            }
            let _ = writeln!(out, "Total bits: {}", stream.total_bits());
        }
        out
    }

    pub fn write_to<W: io::Write>(&self, stream: &EncodedStream, mut output: W) -> io::Result<()> {
        output.write_all(self.render(stream).as_bytes())?;
        output.flush()
    }
}

impl Default for TraceRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render with header, rows and total line
pub fn render_trace(stream: &EncodedStream) -> String {
    TraceRenderer::new().render(stream)
}

/// One table row for `step`
pub fn format_row(step: &Step) -> String {
    format_columns(
        &step.index().to_string(),
        &step.flag_bit().to_string(),
        &step.text_lossy(),
        &format_offset(step),
        &step.match_length().to_string(),
        &format_code(step),
        &step.bit_count().to_string(),
    )
}

/// `offset(marker)` for a match, a dash for a literal
pub fn format_offset(step: &Step) -> String {
    match (step.offset(), step.marker()) {
        (Some(offset), Some(marker)) => format!("{offset}({marker})"),
        _ => NO_OFFSET.to_string(),
    }
}

/// Flag, offset and length bits separated by spaces; empty fields are skipped
pub fn format_code(step: &Step) -> String {
    let mut code = step.flag_bit().to_string();
    for field in [step.offset_code(), step.length_code()] {
        if !field.is_empty() {
            code.push(' ');
            code.push_str(&field.to_string());
        }
    }
    code
}

fn format_columns(
    step: &str,
    flag: &str,
    text: &str,
    offset: &str,
    length: &str,
    code: &str,
    bits: &str,
) -> String {
    format!("{step:<5} | {flag:<4} | {text:<20} | {offset:<10} | {length:<5} | {code:<25} | {bits}")
}
