//! Cursor-driven, zero-copy field tokenizer for single CSV lines.
//!
//! The caller owns a line and a [`Cursor`]; [`next_token`] returns one field
//! per call as a [`Token`] borrowed from the line (outer quotes stripped),
//! advancing the cursor past the field and its trailing separator. Quoted
//! fields may contain the separator and backslash-escaped quote characters.
//! Splitting input into lines and assembling tokens into records is the
//! caller's business; [`Tokens`] packages the per-line loop as an iterator.
//!
//! ```
//! use csvline::{Cursor, FieldConfig, next_token};
//!
//! let line = "name,\"quoted,value\",42";
//! let config = FieldConfig::default();
//! let mut cursor = Cursor::new();
//! let mut fields = Vec::new();
//! while !cursor.is_exhausted(line) {
//!     let token = next_token(line, &mut cursor, &config)?;
//!     fields.push(token.as_str());
//! }
//! assert_eq!(fields, ["name", "quoted,value", "42"]);
//! # Ok::<(), csvline::ScanError>(())
//! ```
//!
//! The core allocates nothing: tokens are views into the line and cannot
//! outlive it. Unterminated quoted fields surface as a recoverable
//! [`ScanError`] rather than a truncated token.

#![no_std]

#[cfg(test)]
extern crate std;

mod config;
mod cursor;
mod error;
mod scan;
mod token;
mod tokens;

pub use config::FieldConfig;
pub use cursor::Cursor;
pub use error::ScanError;
pub use scan::next_token;
pub use token::Token;
pub use tokens::Tokens;
