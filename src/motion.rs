use crate::cursor::Cursor;
use crate::error::ScanError;

/// Motion primitives: single-step and multi-step movement over the buffer.
///
/// None of these are transactional. In a multi-step call every step taken
/// before a failure stays taken and the position is left at the point of
/// exhaustion; the match combinators in [`crate::literal`] and
/// [`crate::choice`] layer rollback on top. The boundary-catching variants
/// live in [`crate::clamped`].
///
/// The scans come in two explicitly named predicate shapes:
///
/// - symbol-driven (`scan_forward_while`, ...): the predicate is consulted
///   with `peek()` before every step, so it sees `None` once the cursor
///   stands at the relevant boundary. Demanding continuation there makes the
///   following step fail with the boundary error.
/// - caller-driven (`scan_forward_while_polled`, ...): a zero-argument
///   predicate polled before every step, never shown the input. Useful when
///   continuation depends on external caller-maintained state, such as a
///   queue of expected outcomes.
impl Cursor {
    /// Advances the position by one and returns the symbol that was consumed.
    pub fn step_forward(&mut self) -> Result<char, ScanError> {
        match self.peek() {
            Some(symbol) => {
                self.set_position(self.position() + 1);
                Ok(symbol)
            }
            None => Err(ScanError::EndOfInput {
                position: self.position(),
            }),
        }
    }

    /// Moves the position back by one and returns the symbol now under the
    /// cursor.
    pub fn step_backward(&mut self) -> Result<char, ScanError> {
        if self.beginning_of_input() {
            return Err(ScanError::BeginningOfInput {
                position: self.position(),
            });
        }

        let position = self.position() - 1;
        self.set_position(position);
        Ok(self.symbol_at(position))
    }

    /// Performs [`Cursor::step_forward`] exactly `count` times, collecting
    /// the consumed symbols in order.
    ///
    /// On `EndOfInput` partway through, the error propagates immediately and
    /// the steps already taken stay consumed.
    pub fn advance(&mut self, count: usize) -> Result<Vec<char>, ScanError> {
        let mut symbols = Vec::with_capacity(count);
        for _ in 0..count {
            symbols.push(self.step_forward()?);
        }
        Ok(symbols)
    }

    /// Performs [`Cursor::step_backward`] exactly `count` times, collecting
    /// the consumed symbols in order.
    pub fn retreat(&mut self, count: usize) -> Result<Vec<char>, ScanError> {
        let mut symbols = Vec::with_capacity(count);
        for _ in 0..count {
            symbols.push(self.step_backward()?);
        }
        Ok(symbols)
    }

    /// Steps forward while `keep_going` holds for the current symbol.
    pub fn scan_forward_while(
        &mut self,
        mut keep_going: impl FnMut(Option<char>) -> bool,
    ) -> Result<Vec<char>, ScanError> {
        let mut symbols = Vec::new();
        while keep_going(self.peek()) {
            symbols.push(self.step_forward()?);
        }
        Ok(symbols)
    }

    /// Steps forward until `stop` holds for the current symbol.
    pub fn scan_forward_until(
        &mut self,
        mut stop: impl FnMut(Option<char>) -> bool,
    ) -> Result<Vec<char>, ScanError> {
        let mut symbols = Vec::new();
        while !stop(self.peek()) {
            symbols.push(self.step_forward()?);
        }
        Ok(symbols)
    }

    /// Steps backward while `keep_going` holds for the current symbol.
    pub fn scan_backward_while(
        &mut self,
        mut keep_going: impl FnMut(Option<char>) -> bool,
    ) -> Result<Vec<char>, ScanError> {
        let mut symbols = Vec::new();
        while keep_going(self.peek()) {
            symbols.push(self.step_backward()?);
        }
        Ok(symbols)
    }

    /// Steps backward until `stop` holds for the current symbol.
    pub fn scan_backward_until(
        &mut self,
        mut stop: impl FnMut(Option<char>) -> bool,
    ) -> Result<Vec<char>, ScanError> {
        let mut symbols = Vec::new();
        while !stop(self.peek()) {
            symbols.push(self.step_backward()?);
        }
        Ok(symbols)
    }

    /// Steps forward while the caller's zero-argument predicate says so.
    pub fn scan_forward_while_polled(
        &mut self,
        mut keep_going: impl FnMut() -> bool,
    ) -> Result<Vec<char>, ScanError> {
        let mut symbols = Vec::new();
        while keep_going() {
            symbols.push(self.step_forward()?);
        }
        Ok(symbols)
    }

    /// Steps forward until the caller's zero-argument predicate says to stop.
    pub fn scan_forward_until_polled(
        &mut self,
        mut stop: impl FnMut() -> bool,
    ) -> Result<Vec<char>, ScanError> {
        let mut symbols = Vec::new();
        while !stop() {
            symbols.push(self.step_forward()?);
        }
        Ok(symbols)
    }

    /// Steps backward while the caller's zero-argument predicate says so.
    pub fn scan_backward_while_polled(
        &mut self,
        mut keep_going: impl FnMut() -> bool,
    ) -> Result<Vec<char>, ScanError> {
        let mut symbols = Vec::new();
        while keep_going() {
            symbols.push(self.step_backward()?);
        }
        Ok(symbols)
    }

    /// Steps backward until the caller's zero-argument predicate says to stop.
    pub fn scan_backward_until_polled(
        &mut self,
        mut stop: impl FnMut() -> bool,
    ) -> Result<Vec<char>, ScanError> {
        let mut symbols = Vec::new();
        while !stop() {
            symbols.push(self.step_backward()?);
        }
        Ok(symbols)
    }
}
