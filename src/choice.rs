use crate::cursor::Cursor;
use crate::error::ScanError;

/// One alternative handed to [`Cursor::choice`]: a deferred sequence of
/// combinator calls evaluated against the cursor.
pub type Alternative<'a, T> = &'a mut dyn FnMut(&mut Cursor) -> Result<T, ScanError>;

/// Ordered alternation with per-alternative rollback.
impl Cursor {
    /// Tries each alternative in order and returns the first success.
    ///
    /// Before an alternative runs, the entry position is noted; if the
    /// alternative fails with any recoverable error the position is restored
    /// and the next one is tried. The first success wins outright, even when
    /// a later alternative would have consumed more, and its value is
    /// returned as-is. An empty list of alternatives fails; so does
    /// exhausting the list, with `NoAlternative` at the entry position.
    pub fn choice<T>(&mut self, alternatives: &mut [Alternative<'_, T>]) -> Result<T, ScanError> {
        let entry = self.position();
        for alternative in alternatives.iter_mut() {
            match alternative(self) {
                Ok(value) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(entry, position = self.position(), "alternative matched");
                    return Ok(value);
                }
                Err(_error) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(entry, error = %_error, "alternative failed, rewinding");
                    self.set_position(entry);
                }
            }
        }
        Err(ScanError::NoAlternative { position: entry })
    }

    /// Tries the alternatives and hands the winning value to `continuation`.
    pub fn choice_with<T, U>(
        &mut self,
        alternatives: &mut [Alternative<'_, T>],
        continuation: impl FnOnce(T) -> U,
    ) -> Result<U, ScanError> {
        self.choice(alternatives).map(continuation)
    }
}
