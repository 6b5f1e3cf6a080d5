//! The cursor-advancing field scanner: plain/quoted dispatch, escape-aware
//! closing-quote search, and the boundary math between them.
//!
//! Everything here works on the line's bytes. Delimiters are validated to be
//! ASCII before any scanning happens, so a delimiter byte can never occur
//! inside a multi-byte character and every computed boundary is a valid
//! `&str` slice point.

use bstr::ByteSlice;

use crate::{config::FieldConfig, cursor::Cursor, error::ScanError, token::Token};

/// Escape character recognized inside quoted fields.
const ESCAPE: u8 = b'\\';

/// Offset of the first occurrence of `target` in `haystack` that is not
/// immediately preceded by `escape`.
///
/// A match at offset 0 is always accepted: there is no preceding byte to
/// escape it. A rejected match resumes the scan one byte later, not after the
/// escape/target pair, so runs of escapes are crossed byte by byte.
fn find_unescaped(haystack: &[u8], target: u8, escape: u8) -> Option<usize> {
    let mut from = 0;
    while from < haystack.len() {
        let found = from + haystack[from..].find_byte(target)?;
        if found > 0 && haystack[found - 1] == escape {
            from = found + 1;
            continue;
        }
        return Some(found);
    }
    None
}

/// First separator or quote byte in `haystack`, whichever comes sooner.
fn first_delimiter(haystack: &[u8], separator: u8, quote: u8) -> Option<usize> {
    match (haystack.find_byte(separator), haystack.find_byte(quote)) {
        (Some(sep), Some(quo)) => Some(sep.min(quo)),
        (sep, quo) => sep.or(quo),
    }
}

/// Scans the next field of `line` at `cursor`, advancing the cursor past the
/// field and its trailing separator.
///
/// The character at the cursor decides the field kind:
///
/// - the quote character opens a quoted field, which runs to the next
///   closing quote not preceded by a backslash; the token excludes the outer
///   quotes and keeps interior escapes verbatim;
/// - the separator is an empty field (the middle of `a,,b`);
/// - anything else starts a plain field running to the next separator or
///   quote, or to the end of the line. The first character always belongs to
///   the field, so a plain field is never empty.
///
/// After a quoted field the cursor skips two bytes past the closing quote:
/// the quote itself and the separator presumed to follow it. A quoted field
/// at the end of the line therefore parks the cursor past `line.len()`,
/// which [`Cursor::is_exhausted`] reports as normal end-of-line. If the byte
/// after the closing quote is not actually a separator it is skipped all the
/// same, and a multi-byte character in that position surfaces as
/// [`ScanError::CursorNotCharBoundary`] on the next call.
///
/// # Errors
///
/// - [`ScanError::UnterminatedQuote`] when a quoted field has no closing
///   quote before the end of the line.
/// - [`ScanError::CursorOutOfRange`] when the cursor is at or past the end
///   of the line on entry — check [`Cursor::is_exhausted`] before calling.
/// - [`ScanError::CursorNotCharBoundary`] when the cursor points into the
///   middle of a multi-byte character.
/// - [`ScanError::DelimitersEqual`] / [`ScanError::DelimiterNotAscii`] when
///   `config` is invalid.
///
/// # Examples
///
/// ```
/// use csvline::{Cursor, FieldConfig, next_token};
///
/// let line = r#""a\"b",x"#;
/// let config = FieldConfig::default();
/// let mut cursor = Cursor::new();
///
/// let token = next_token(line, &mut cursor, &config)?;
/// assert_eq!(token.as_str(), r#"a\"b"#);
/// assert!(token.was_quoted());
///
/// let token = next_token(line, &mut cursor, &config)?;
/// assert_eq!(token.as_str(), "x");
/// assert!(cursor.is_exhausted(line));
/// # Ok::<(), csvline::ScanError>(())
/// ```
pub fn next_token<'line>(
    line: &'line str,
    cursor: &mut Cursor,
    config: &FieldConfig,
) -> Result<Token<'line>, ScanError> {
    config.validate()?;
    let start = cursor.position();
    if start >= line.len() {
        return Err(ScanError::CursorOutOfRange {
            cursor: start,
            len: line.len(),
        });
    }
    if !line.is_char_boundary(start) {
        return Err(ScanError::CursorNotCharBoundary { cursor: start });
    }

    let bytes = line.as_bytes();
    let separator = config.separator_byte();
    let quote = config.quote_byte();

    if bytes[start] == quote {
        return quoted_token(line, cursor, quote);
    }
    if bytes[start] == separator {
        // An empty field sitting right at the cursor.
        cursor.set(start + 1);
        return Ok(Token::new(&line[start..start], false));
    }

    // Plain field. The search starts one past the cursor: the first
    // character belongs to the field even if it matches a delimiter.
    match first_delimiter(&bytes[start + 1..], separator, quote) {
        Some(rel) => {
            let end = start + 1 + rel;
            cursor.set(end + 1);
            Ok(Token::new(&line[start..end], false))
        }
        None => {
            cursor.set(line.len() + 1);
            Ok(Token::new(&line[start..], false))
        }
    }
}

/// Scans a quoted field. The byte at the cursor is the opening quote.
fn quoted_token<'line>(
    line: &'line str,
    cursor: &mut Cursor,
    quote: u8,
) -> Result<Token<'line>, ScanError> {
    let open = cursor.position();
    let interior = &line.as_bytes()[open + 1..];
    let Some(found) = find_unescaped(interior, quote, ESCAPE) else {
        return Err(ScanError::UnterminatedQuote { start: open });
    };
    let close = open + 1 + found;
    // Two past the closing quote: the quote itself and the separator
    // presumed to follow it.
    cursor.set(close + 2);
    Ok(Token::new(&line[open + 1..close], true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan<'line>(line: &'line str, cursor: &mut Cursor) -> Result<Token<'line>, ScanError> {
        next_token(line, cursor, &FieldConfig::default())
    }

    #[test]
    fn unescaped_match_at_start_is_accepted() {
        assert_eq!(find_unescaped(b"\"abc", b'"', ESCAPE), Some(0));
    }

    #[test]
    fn unescaped_search_skips_escaped_matches() {
        assert_eq!(find_unescaped(b"a\\\"b\"", b'"', ESCAPE), Some(4));
    }

    #[test]
    fn unescaped_search_resumes_after_rejected_match() {
        // Escape at offset 0 cancels the quote at offset 1; the scan resumes
        // at offset 2 and accepts the quote at offset 3.
        assert_eq!(find_unescaped(b"\\\"x\"", b'"', ESCAPE), Some(3));
    }

    #[test]
    fn unescaped_search_misses() {
        assert_eq!(find_unescaped(b"abc", b'"', ESCAPE), None);
        assert_eq!(find_unescaped(b"ab\\\"", b'"', ESCAPE), None);
        assert_eq!(find_unescaped(b"", b'"', ESCAPE), None);
    }

    #[test]
    fn plain_field_runs_to_line_end() {
        let mut cursor = Cursor::new();
        let token = scan("abc", &mut cursor).unwrap();
        assert_eq!(token.as_str(), "abc");
        assert!(!token.was_quoted());
        assert_eq!(cursor.position(), 4);
        assert!(cursor.is_exhausted("abc"));
    }

    #[test]
    fn plain_field_stops_at_separator() {
        let mut cursor = Cursor::new();
        let token = scan("left,right", &mut cursor).unwrap();
        assert_eq!(token.as_str(), "left");
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn plain_field_stops_at_quote() {
        // A quote inside a plain field ends it like a separator would, and
        // the quote byte itself is skipped.
        let mut cursor = Cursor::new();
        let token = scan("ab\"cd", &mut cursor).unwrap();
        assert_eq!(token.as_str(), "ab");
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn separator_at_cursor_is_an_empty_field() {
        let mut cursor = Cursor::at(1);
        let token = scan("a,,b", &mut cursor).unwrap();
        assert!(token.is_empty());
        assert!(!token.was_quoted());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn quoted_field_strips_outer_quotes() {
        let mut cursor = Cursor::new();
        let token = scan("\"hello\",x", &mut cursor).unwrap();
        assert_eq!(token.as_str(), "hello");
        assert!(token.was_quoted());
        assert_eq!(cursor.position(), 8);
    }

    #[test]
    fn quoted_field_keeps_interior_escapes() {
        let line = r#""a\"b",x"#;
        let mut cursor = Cursor::new();
        let token = scan(line, &mut cursor).unwrap();
        assert_eq!(token.as_str(), r#"a\"b"#);
        assert_eq!(cursor.position(), 7);
    }

    #[test]
    fn quoted_field_at_line_end_exhausts_the_cursor() {
        let line = "\"abc\"";
        let mut cursor = Cursor::new();
        let token = scan(line, &mut cursor).unwrap();
        assert_eq!(token.as_str(), "abc");
        assert_eq!(cursor.position(), 6);
        assert!(cursor.is_exhausted(line));
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        let mut cursor = Cursor::new();
        assert_eq!(
            scan("\"abc", &mut cursor),
            Err(ScanError::UnterminatedQuote { start: 0 })
        );
    }

    #[test]
    fn unterminated_quote_reports_the_opening_offset() {
        let mut cursor = Cursor::at(2);
        assert_eq!(
            scan("a,\"bc", &mut cursor),
            Err(ScanError::UnterminatedQuote { start: 2 })
        );
    }

    #[test]
    fn exhausted_cursor_is_rejected() {
        let mut cursor = Cursor::at(3);
        assert_eq!(
            scan("abc", &mut cursor),
            Err(ScanError::CursorOutOfRange { cursor: 3, len: 3 })
        );
    }

    #[test]
    fn empty_line_is_rejected() {
        let mut cursor = Cursor::new();
        assert_eq!(
            scan("", &mut cursor),
            Err(ScanError::CursorOutOfRange { cursor: 0, len: 0 })
        );
    }

    #[test]
    fn mid_character_cursor_is_rejected() {
        let mut cursor = Cursor::at(1);
        assert_eq!(
            scan("é,x", &mut cursor),
            Err(ScanError::CursorNotCharBoundary { cursor: 1 })
        );
    }

    #[test]
    fn equal_delimiters_are_rejected() {
        let mut cursor = Cursor::new();
        let config = FieldConfig::new(',', ',');
        assert_eq!(
            next_token("a,b", &mut cursor, &config),
            Err(ScanError::DelimitersEqual { ch: ',' })
        );
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        let mut cursor = Cursor::new();
        let config = FieldConfig::new('·', '"');
        assert_eq!(
            next_token("a·b", &mut cursor, &config),
            Err(ScanError::DelimiterNotAscii { ch: '·' })
        );
    }

    #[test]
    fn multibyte_field_content_scans_cleanly() {
        let line = "héllo,wörld";
        let mut cursor = Cursor::new();
        let token = scan(line, &mut cursor).unwrap();
        assert_eq!(token.as_str(), "héllo");
        let token = scan(line, &mut cursor).unwrap();
        assert_eq!(token.as_str(), "wörld");
        assert!(cursor.is_exhausted(line));
    }

    #[test]
    fn rescanning_from_the_same_position_is_deterministic() {
        let line = "a,\"b\",c";
        let mut first = Cursor::at(2);
        let mut second = Cursor::at(2);
        assert_eq!(scan(line, &mut first), scan(line, &mut second));
        assert_eq!(first, second);
    }
}
