use crate::cursor::Cursor;
use crate::error::ScanError;

/// Literal match combinators.
///
/// Unlike the motion primitives these are transactional: a failing match
/// restores the position to its value at the call's entry before the error
/// surfaces. Each strict form has a continuation form (`_with`) that hands
/// the matched value to a caller-supplied closure, and a mismatch-safe form
/// (`maybe_`) that converts failure into an explicit absent value.
impl Cursor {
    /// Matches a single symbol against the input.
    ///
    /// On success records the symbol as the last result and returns the
    /// cursor for further chaining. On mismatch the consumed step is undone
    /// and the error carries the position together with both symbols: what
    /// the input holds there and what was requested. At end of input nothing
    /// is consumed and `EndOfInput` propagates.
    pub fn match_char(&mut self, requested: char) -> Result<&mut Self, ScanError> {
        let found = self.step_forward()?;
        if found == requested {
            self.set_last_result(Some(requested.to_string()));
            Ok(self)
        } else {
            self.step_backward()?;
            Err(ScanError::Mismatch {
                position: self.position(),
                found,
                requested,
            })
        }
    }

    /// Matches `requested` and hands it to `continuation`.
    pub fn match_char_with<T>(
        &mut self,
        requested: char,
        continuation: impl FnOnce(char) -> T,
    ) -> Result<T, ScanError> {
        self.match_char(requested)?;
        Ok(continuation(requested))
    }

    /// Matches every symbol of `requested` in order.
    ///
    /// Fully transactional: whether a symbol mismatches or the input ends
    /// partway through, the position is restored to the call's entry and the
    /// inner error is re-raised, so the cursor never sits in the middle of a
    /// half-matched literal. Matching the empty string succeeds anywhere,
    /// including at end of input.
    pub fn match_string(&mut self, requested: &str) -> Result<&mut Self, ScanError> {
        let entry = self.position();
        for symbol in requested.chars() {
            if let Err(error) = self.match_char(symbol) {
                self.set_position(entry);
                return Err(error);
            }
        }
        self.set_last_result(Some(requested.to_string()));
        Ok(self)
    }

    /// Matches `requested` and hands it to `continuation`.
    pub fn match_string_with<T>(
        &mut self,
        requested: &str,
        continuation: impl FnOnce(&str) -> T,
    ) -> Result<T, ScanError> {
        self.match_string(requested)?;
        Ok(continuation(requested))
    }

    /// Like [`Cursor::match_char`], but converts failure into an absent
    /// value: the position is restored to the call's entry, the last result
    /// is cleared and `None` is returned.
    pub fn maybe_match_char(&mut self, requested: char) -> Option<char> {
        let entry = self.position();
        match self.match_char(requested) {
            Ok(_) => Some(requested),
            Err(_) => {
                self.set_position(entry);
                self.set_last_result(None);
                None
            }
        }
    }

    /// Calls `continuation` with `Some(symbol)` on a match, `None` otherwise.
    pub fn maybe_match_char_with<T>(
        &mut self,
        requested: char,
        continuation: impl FnOnce(Option<char>) -> T,
    ) -> T {
        continuation(self.maybe_match_char(requested))
    }

    /// Like [`Cursor::match_string`], but converts failure into an absent
    /// value.
    pub fn maybe_match_string(&mut self, requested: &str) -> Option<String> {
        let entry = self.position();
        match self.match_string(requested) {
            Ok(_) => Some(requested.to_string()),
            Err(_) => {
                self.set_position(entry);
                self.set_last_result(None);
                None
            }
        }
    }

    /// Calls `continuation` with `Some(string)` on a match, `None` otherwise.
    pub fn maybe_match_string_with<T>(
        &mut self,
        requested: &str,
        continuation: impl FnOnce(Option<String>) -> T,
    ) -> T {
        continuation(self.maybe_match_string(requested))
    }
}
