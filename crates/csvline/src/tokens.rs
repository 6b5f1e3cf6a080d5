use core::iter::FusedIterator;

use crate::{config::FieldConfig, cursor::Cursor, error::ScanError, scan::next_token, token::Token};

/// Iterator over the fields of one line.
///
/// Packages the caller loop: start with a cursor at zero and call
/// [`next_token`] until the cursor is exhausted. The iterator is fused and
/// stops permanently after yielding an `Err` — a malformed quote cannot
/// become well-formed by scanning further.
///
/// This drives exactly one line; splitting input into lines and collecting
/// tokens into records stays with the caller.
///
/// # Examples
///
/// ```
/// use csvline::{FieldConfig, Tokens};
///
/// let fields: Result<Vec<_>, _> = Tokens::new("a,,b", FieldConfig::default())
///     .map(|token| token.map(|t| t.as_str()))
///     .collect();
/// assert_eq!(fields.unwrap(), ["a", "", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'line> {
    line: &'line str,
    cursor: Cursor,
    config: FieldConfig,
    failed: bool,
}

impl<'line> Tokens<'line> {
    /// Tokenizes `line` from its first byte.
    #[must_use]
    pub const fn new(line: &'line str, config: FieldConfig) -> Self {
        Self {
            line,
            cursor: Cursor::new(),
            config,
            failed: false,
        }
    }

    /// The cursor position after the most recently yielded token.
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }
}

impl<'line> Iterator for Tokens<'line> {
    type Item = Result<Token<'line>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor.is_exhausted(self.line) {
            return None;
        }
        let next = next_token(self.line, &mut self.cursor, &self.config);
        self.failed = next.is_err();
        Some(next)
    }
}

impl FusedIterator for Tokens<'_> {}
