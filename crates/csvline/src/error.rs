use thiserror::Error;

/// Failures raised by [`next_token`](crate::next_token).
///
/// [`UnterminatedQuote`](ScanError::UnterminatedQuote) reports malformed
/// input; the remaining variants are precondition checks at the call
/// boundary. All of them are deterministic for a given `(line, cursor,
/// config)` triple, so retrying never helps; callers decide whether to skip
/// the line or abort.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// A quoted field's closing quote was not found before the end of the
    /// line. Typically truncated or corrupt CSV data.
    #[error("unterminated quoted field opened at byte {start}")]
    UnterminatedQuote {
        /// Byte offset of the opening quote.
        start: usize,
    },

    /// The cursor was already at or past the end of the line on entry.
    #[error("cursor at byte {cursor} is out of range for a line of {len} bytes")]
    CursorOutOfRange {
        /// Cursor position on entry.
        cursor: usize,
        /// Line length in bytes.
        len: usize,
    },

    /// The cursor points into the middle of a multi-byte character.
    #[error("cursor at byte {cursor} is not on a character boundary")]
    CursorNotCharBoundary {
        /// Cursor position on entry.
        cursor: usize,
    },

    /// The configuration uses the same character as separator and quote.
    #[error("separator and quote are both {ch:?}")]
    DelimitersEqual {
        /// The character supplied for both roles.
        ch: char,
    },

    /// A configured delimiter falls outside the ASCII range.
    #[error("delimiter {ch:?} is not an ASCII character")]
    DelimiterNotAscii {
        /// The offending character.
        ch: char,
    },
}
