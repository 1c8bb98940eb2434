pub mod code;
pub mod writer;

pub use code::{bit_length, BitCode, MAX_CODE_BITS};
pub use writer::BitWriter;
