/// Mutable cursor over a character buffer.
///
/// A cursor owns the input (split into symbols once, by [`Cursor::load`]), the
/// current read position, and the result of the most recent successful match.
/// One cursor serves one parse session: the motion primitives and match
/// combinators in the rest of the crate mutate it in place, and exclusive
/// `&mut` access keeps a session single-threaded by construction.
///
/// The position invariant is `0 <= position <= buffer.len()`: a position equal
/// to the buffer length means end-of-input, zero means beginning-of-input.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    buffer: Vec<char>,
    position: usize,
    last_result: Option<String>,
}

impl Cursor {
    /// Creates a cursor positioned at the start of `source`.
    pub fn new(source: &str) -> Self {
        let mut cursor = Cursor::default();
        cursor.load(source);
        cursor
    }

    /// Splits `source` into symbols and resets the cursor to the start.
    ///
    /// Any prior buffer, position and match result are discarded.
    pub fn load(&mut self, source: &str) {
        self.buffer = source.chars().collect();
        self.position = 0;
        self.last_result = None;

        #[cfg(feature = "tracing")]
        tracing::trace!(symbols = self.buffer.len(), "loaded input");
    }

    /// The current position in the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True once all of the input has been consumed.
    pub fn end_of_input(&self) -> bool {
        self.position == self.buffer.len()
    }

    /// True while none of the input has been consumed.
    pub fn beginning_of_input(&self) -> bool {
        self.position == 0
    }

    /// The symbol at the current position, or `None` at end of input.
    ///
    /// Never mutates the cursor.
    pub fn peek(&self) -> Option<char> {
        self.buffer.get(self.position).copied()
    }

    /// All of the input consumed so far, `buffer[0..position]`.
    pub fn consumed(&self) -> &[char] {
        &self.buffer[..self.position]
    }

    /// Reassembles the buffer into the string it was loaded from.
    pub fn full_input(&self) -> String {
        self.buffer.iter().collect()
    }

    /// The value recorded by the most recent successful match, if any.
    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    /// Calls `f` with the last match result.
    pub fn with_last_result<T>(&self, f: impl FnOnce(Option<&str>) -> T) -> T {
        f(self.last_result.as_deref())
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        debug_assert!(position <= self.buffer.len());
        self.position = position;
    }

    pub(crate) fn set_last_result(&mut self, result: Option<String>) {
        self.last_result = result;
    }

    /// The symbol at `index`. Callers guarantee `index < buffer.len()`.
    pub(crate) fn symbol_at(&self, index: usize) -> char {
        self.buffer[index]
    }

    /// The symbols in `[start, end)`.
    pub(crate) fn span(&self, start: usize, end: usize) -> &[char] {
        &self.buffer[start..end]
    }
}
