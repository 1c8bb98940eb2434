use memchr::memmem;

/// Trailing buffer of already-encoded symbols used as the match dictionary.
///
/// Positions are indices into the current content, so they shift down
/// whenever [`Window::trim`] drops symbols from the front.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Window {
    buffer: Vec<u8>,
}

impl Window {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { buffer: Vec::with_capacity(capacity) }
    }

    /// Add symbols to the end of the window
    pub fn append(&mut self, symbols: &[u8]) {
        self.buffer.extend_from_slice(symbols);
    }

    /// Keep only the most recent `max_size` symbols
    pub fn trim(&mut self, max_size: usize) {
        if self.buffer.len() > max_size {
            let excess = self.buffer.len() - max_size;
            self.buffer.drain(..excess);
        }
    }

    /// Whether `pattern` occurs contiguously anywhere in the window
    #[inline]
    pub fn contains(&self, pattern: &[u8]) -> bool {
        self.first_index_of(pattern).is_some()
    }

    /// Position of the leftmost occurrence of `pattern`
    #[inline]
    pub fn first_index_of(&self, pattern: &[u8]) -> Option<usize> {
        memmem::find(&self.buffer, pattern)
    }

    /// Position of the rightmost occurrence of `pattern`
    #[inline]
    pub fn last_index_of(&self, pattern: &[u8]) -> Option<usize> {
        memmem::rfind(&self.buffer, pattern)
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Current window content, oldest symbol first
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Reset the window
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
