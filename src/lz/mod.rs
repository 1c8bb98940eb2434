pub mod encoder;
pub mod matcher;
pub mod tokens;
pub mod window;

pub use encoder::{symbols_from_text, Lz77Encoder};
pub use matcher::{GreedyMatchFinder, Match, MatchFinder};
pub use tokens::{EncodedStream, Step, Token};
pub use window::Window;
