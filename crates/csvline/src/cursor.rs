/// Byte offset of the next unread field within a line.
///
/// The cursor is owned by the caller and passed `&mut` into
/// [`next_token`](crate::next_token), which advances it past the returned
/// field and its trailing separator. On entry it must sit on a character
/// boundary before the end of the line; violations are reported as
/// [`ScanError`](crate::ScanError) values rather than left undefined.
///
/// After a call the cursor points either at the first byte of the next field
/// or past the end of the line. There is no in-band sentinel: exhaustion is
/// the explicit [`is_exhausted`](Cursor::is_exhausted) predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(usize);

impl Cursor {
    /// A cursor at the start of a line.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// A cursor at an arbitrary byte offset, for resuming mid-line.
    #[must_use]
    pub const fn at(position: usize) -> Self {
        Self(position)
    }

    /// Current byte offset into the line.
    #[must_use]
    pub const fn position(self) -> usize {
        self.0
    }

    /// Whether every field of `line` has been consumed.
    ///
    /// True for any position at or past the end of the line; a quoted field
    /// at the very end of a line legitimately parks the cursor more than one
    /// byte past it.
    #[must_use]
    pub const fn is_exhausted(self, line: &str) -> bool {
        self.0 >= line.len()
    }

    pub(crate) const fn set(&mut self, position: usize) {
        self.0 = position;
    }
}
