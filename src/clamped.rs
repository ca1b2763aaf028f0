use crate::cursor::Cursor;
use crate::error::ScanError;

/// Conversion from a motion primitive's success value to the symbols it
/// consumed.
///
/// This is what lets [`Cursor::clamped`] adapt every motion primitive with
/// one generic wrapper: single-step primitives succeed with a `char`,
/// multi-step primitives with a `Vec<char>`, and both normalize to the same
/// consumed-symbol sequence.
pub trait Consumed {
    fn into_symbols(self) -> Vec<char>;
}

impl Consumed for char {
    fn into_symbols(self) -> Vec<char> {
        vec![self]
    }
}

impl Consumed for Vec<char> {
    fn into_symbols(self) -> Vec<char> {
        self
    }
}

/// Boundary-safe ("clamped") motion.
///
/// Each wrapper behaves exactly like its strict counterpart on success. On
/// hitting the input boundary it catches the error and returns the symbols
/// consumed during that specific call instead: for forward motion the span
/// from the call's starting position to the true end of input, in traversal
/// order; for backward motion the span from the true beginning to the
/// starting position, most-recently-consumed symbol first. An empty sequence
/// means the boundary was hit before anything was consumed. Position is left
/// wherever motion stopped.
impl Cursor {
    /// Runs a motion primitive, clamping it to the input boundaries.
    ///
    /// This is the single adapter behind all of the `_clamped` wrappers
    /// below; it derives the consumed span from the entry and stop positions,
    /// so it works for any primitive regardless of direction or step count.
    ///
    /// # Panics
    ///
    /// `operation` must be a motion primitive. Panics if it fails with a
    /// non-boundary error, which means a match combinator was handed in.
    pub fn clamped<R: Consumed>(
        &mut self,
        operation: impl FnOnce(&mut Self) -> Result<R, ScanError>,
    ) -> Vec<char> {
        let entry = self.position();
        match operation(self) {
            Ok(consumed) => consumed.into_symbols(),
            Err(error) if error.is_boundary() => {
                let stop = self.position();
                if stop >= entry {
                    self.span(entry, stop).to_vec()
                } else {
                    let mut symbols = self.span(stop, entry).to_vec();
                    symbols.reverse();
                    symbols
                }
            }
            Err(error) => {
                panic!("clamped() adapts motion primitives, got non-boundary failure: {error}")
            }
        }
    }

    pub fn step_forward_clamped(&mut self) -> Vec<char> {
        self.clamped(Self::step_forward)
    }

    pub fn step_backward_clamped(&mut self) -> Vec<char> {
        self.clamped(Self::step_backward)
    }

    pub fn advance_clamped(&mut self, count: usize) -> Vec<char> {
        self.clamped(|cursor| cursor.advance(count))
    }

    pub fn retreat_clamped(&mut self, count: usize) -> Vec<char> {
        self.clamped(|cursor| cursor.retreat(count))
    }

    pub fn scan_forward_while_clamped(
        &mut self,
        keep_going: impl FnMut(Option<char>) -> bool,
    ) -> Vec<char> {
        self.clamped(|cursor| cursor.scan_forward_while(keep_going))
    }

    pub fn scan_forward_until_clamped(
        &mut self,
        stop: impl FnMut(Option<char>) -> bool,
    ) -> Vec<char> {
        self.clamped(|cursor| cursor.scan_forward_until(stop))
    }

    pub fn scan_backward_while_clamped(
        &mut self,
        keep_going: impl FnMut(Option<char>) -> bool,
    ) -> Vec<char> {
        self.clamped(|cursor| cursor.scan_backward_while(keep_going))
    }

    pub fn scan_backward_until_clamped(
        &mut self,
        stop: impl FnMut(Option<char>) -> bool,
    ) -> Vec<char> {
        self.clamped(|cursor| cursor.scan_backward_until(stop))
    }

    pub fn scan_forward_while_polled_clamped(
        &mut self,
        keep_going: impl FnMut() -> bool,
    ) -> Vec<char> {
        self.clamped(|cursor| cursor.scan_forward_while_polled(keep_going))
    }

    pub fn scan_forward_until_polled_clamped(&mut self, stop: impl FnMut() -> bool) -> Vec<char> {
        self.clamped(|cursor| cursor.scan_forward_until_polled(stop))
    }

    pub fn scan_backward_while_polled_clamped(
        &mut self,
        keep_going: impl FnMut() -> bool,
    ) -> Vec<char> {
        self.clamped(|cursor| cursor.scan_backward_while_polled(keep_going))
    }

    pub fn scan_backward_until_polled_clamped(&mut self, stop: impl FnMut() -> bool) -> Vec<char> {
        self.clamped(|cursor| cursor.scan_backward_until_polled(stop))
    }
}
