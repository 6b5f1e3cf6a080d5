use crate::error::ScanError;

/// Delimiter configuration for the token scanner.
///
/// Two named characters instead of a packed positional pair: the field
/// separator and the quote marker that opens and closes quoted fields. The
/// configuration is supplied per call and re-validated on every call; it is
/// never persisted by the scanner.
///
/// Both characters must be ASCII and distinct. ASCII delimiters guarantee
/// that every field boundary the scanner computes is a UTF-8 character
/// boundary, so field *content* may be arbitrary Unicode.
///
/// # Default
///
/// `,` and `"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldConfig {
    /// Field separator.
    ///
    /// # Default
    ///
    /// `,`
    pub separator: char,

    /// Quote marker opening and closing quoted fields.
    ///
    /// Inside a quoted field, a backslash immediately before this character
    /// keeps it from closing the field.
    ///
    /// # Default
    ///
    /// `"`
    pub quote: char,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            separator: ',',
            quote: '"',
        }
    }
}

impl FieldConfig {
    /// Builds a configuration from a separator and a quote character.
    ///
    /// Validation happens when the configuration is used, not here.
    #[must_use]
    pub const fn new(separator: char, quote: char) -> Self {
        Self { separator, quote }
    }

    /// Re-run on every scanner call: ASCII-only delimiters, separator and
    /// quote distinct.
    pub(crate) fn validate(&self) -> Result<(), ScanError> {
        for ch in [self.separator, self.quote] {
            if !ch.is_ascii() {
                return Err(ScanError::DelimiterNotAscii { ch });
            }
        }
        if self.separator == self.quote {
            return Err(ScanError::DelimitersEqual { ch: self.quote });
        }
        Ok(())
    }

    /// The separator as a byte. Only meaningful after [`validate`](Self::validate).
    pub(crate) const fn separator_byte(&self) -> u8 {
        self.separator as u8
    }

    /// The quote as a byte. Only meaningful after [`validate`](Self::validate).
    pub(crate) const fn quote_byte(&self) -> u8 {
        self.quote as u8
    }
}
