use super::window::Window;

/// A run of source symbols that also occurs in the window.
///
/// `start` and `last` are inclusive source indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    /// Source index of the first matched symbol
    pub start: usize,
    /// Source index of the last matched symbol
    pub last: usize,
}

impl Match {
    /// Number of symbols covered, always at least 1
    pub fn len(&self) -> usize {
        self.last - self.start + 1
    }

    /// Source index just past the match
    pub fn end(&self) -> usize {
        self.last + 1
    }

    /// The matched symbols
    pub fn text<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        &source[self.start..=self.last]
    }
}

/// Trait for locating back-reference candidates.
///
/// Implementations may index the window however they like, but must return
/// the same match a plain substring search would: the longest prefix of
/// `source[cursor..]` that occurs contiguously somewhere in `window`.
pub trait MatchFinder {
    /// Find the longest prefix of `source[cursor..]` present in `window`.
    /// Returns `None` when not even the symbol at `cursor` occurs.
    fn find_match(&mut self, source: &[u8], cursor: usize, window: &Window) -> Option<Match>;
}

/// Greedy extension search.
///
/// Starts from the single symbol at the cursor and extends one symbol at a
/// time for as long as the longer candidate still occurs in the window.
/// Each step rescans the window, so the cost grows with window size times
/// match length.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyMatchFinder;

impl MatchFinder for GreedyMatchFinder {
    fn find_match(&mut self, source: &[u8], cursor: usize, window: &Window) -> Option<Match> {
        let first = *source.get(cursor)?;
        memchr::memchr(first, window.as_bytes())?;

        let mut last = cursor;
        while last + 1 < source.len() && window.contains(&source[cursor..=last + 1]) {
            last += 1;
        }

        Some(Match { start: cursor, last })
    }
}
