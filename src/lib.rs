//! # ScanComb - Scanner Combinators
//!
//! A character-level scanner with backtracking match combinators, for
//! building small recursive-descent parsers on top of a single mutable
//! cursor instead of a hand-rolled state machine.
//!
//! Three layers, each built only on the one below it:
//!
//! - **Cursor**: owns the input buffer, the read position and the last match
//!   result; exposes read-only queries and input loading
//! - **Motion**: single- and multi-step directional movement plus
//!   predicate-driven scans, with boundary-safe ("clamped") variants that
//!   convert running off either end of the input into a partial-consumption
//!   result
//! - **Match combinators**: literal character, literal string and ordered
//!   alternation, each transactional - on failure the position rolls back to
//!   the call's entry - with mismatch-safe ("maybe") variants that yield an
//!   absent value instead of an error
//!
//! ```
//! use scancomb::Cursor;
//!
//! let mut cursor = Cursor::new("the walrus");
//! cursor.match_string("the")?;
//! cursor.scan_forward_while(|c| c == Some(' '))?;
//! let noun = cursor.choice(&mut [
//!     &mut |c: &mut Cursor| c.match_string("carpenter").map(|_| "carpenter"),
//!     &mut |c: &mut Cursor| c.match_string("walrus").map(|_| "walrus"),
//! ])?;
//! assert_eq!(noun, "walrus");
//! assert!(cursor.end_of_input());
//! # Ok::<(), scancomb::ScanError>(())
//! ```

pub mod choice;
pub mod clamped;
pub mod cursor;
pub mod error;
pub mod literal;
pub mod motion;

pub use choice::Alternative;
pub use clamped::Consumed;
pub use cursor::Cursor;
pub use error::ScanError;
