use thiserror::Error;

/// Errors produced while moving over or matching against the input.
///
/// Every variant is a recoverable parse-time condition: the boundary variants
/// come from motion primitives, the mismatch variants from match combinators.
/// Misuse of the API itself (for example handing [`crate::Cursor::clamped`] a
/// match combinator) is a programmer error and panics rather than showing up
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A forward motion primitive was attempted at the end-of-input boundary.
    #[error("end of input at position {position}")]
    EndOfInput { position: usize },

    /// A backward motion primitive was attempted at the beginning-of-input
    /// boundary.
    #[error("beginning of input at position {position}")]
    BeginningOfInput { position: usize },

    /// A literal match failed.
    ///
    /// `found` is the symbol actually present in the input at `position`;
    /// `requested` is the symbol the caller asked to match. Both are carried
    /// so diagnostics never have to guess which side "expected" refers to.
    #[error("mismatch at position {position}: input holds '{found}', caller requested '{requested}'")]
    Mismatch {
        position: usize,
        found: char,
        requested: char,
    },

    /// Every alternative of an ordered choice failed.
    #[error("no alternative matched at position {position}")]
    NoAlternative { position: usize },
}

impl ScanError {
    /// Returns the position where this error occurred.
    pub fn position(&self) -> usize {
        match self {
            ScanError::EndOfInput { position }
            | ScanError::BeginningOfInput { position }
            | ScanError::Mismatch { position, .. }
            | ScanError::NoAlternative { position } => *position,
        }
    }

    /// True for the boundary errors, the class the clamped motion adapters
    /// catch and convert into partial-consumption results.
    pub(crate) fn is_boundary(&self) -> bool {
        matches!(
            self,
            ScanError::EndOfInput { .. } | ScanError::BeginningOfInput { .. }
        )
    }
}
