//! A byte-stream formatted-input scanner in the spirit of C's `scanf`.
//!
//! A format string of directives is applied to a byte stream. Each conversion
//! directive consumes bytes under its own grammar and writes a typed value
//! into the next destination slot. The result is the number of conversions
//! that succeeded.
//!
//! # Directives
//!
//! - `%c` - One byte. Does not skip whitespace.
//! - `%d` - Signed decimal integer: optional `+`/`-`, then digits.
//! - `%s` - Run of non-whitespace bytes.
//! - `%f` - Real number: optional sign, digits, optional `.` and digits,
//!   optional `e`/`E` exponent with optional sign.
//! - `%x` - Unsigned hexadecimal integer with optional `0x`/`0X` prefix.
//! - `%b` - Unsigned binary integer with optional `0b`/`0B` prefix.
//! - `%r` - Roman numeral in uppercase `IVXLCDM`.
//! - `%w` - Word: ASCII letters, digits and underscores.
//! - `%%` - Literal percent sign, after optional whitespace.
//!
//! Any other letter after `%` stops processing. All conversions but `%c` skip
//! leading whitespace.
//!
//! Whitespace in the format matches any run of input whitespace, including
//! none. Every other byte must match the input exactly.
//!
//! # Example
//!
//! ```
//! use mini_scanf::{scan_str, Slot};
//!
//! let mut id = 0i64;
//! let mut ratio = 0.0f64;
//! let count = scan_str(
//!     "id=7 ratio=2.5e-1",
//!     "id=%d ratio=%f",
//!     &mut [Slot::from(&mut id), Slot::from(&mut ratio)],
//! )
//! .unwrap();
//! assert_eq!(count, 2);
//! assert_eq!(id, 7);
//! assert_eq!(ratio, 0.25);
//! ```
//!
//! # Failure
//!
//! The first directive that fails ends the scan. Nothing after it is
//! attempted and its slot and all later slots are left untouched. The count
//! is the only required signal. [`Scanner::scan_report`] also says which
//! directive stopped and why (see [`Failure`]).
//!
//! Failed readers push back only the last byte they examined. Bytes consumed
//! before it are not restored: a sign followed by a letter loses the sign.
//!
//! # Safety
//!
//! Destinations are typed [`Slot`]s checked against the format before any
//! input is read. Too few, too many, or wrongly typed slots give a
//! [`ScanError`]. Text destinations grow as needed up to a byte limit. A
//! longer token fails with [`Failure::DestinationTooSmall`].

pub mod classify;
pub mod config;
pub mod cursor;
mod error;
pub mod format;
pub mod readers;
mod scanner;
pub mod slot;

pub use config::ScanConfig;
pub use cursor::ByteCursor;
pub use error::Failure;
pub use error::ScanError;
pub use error::ScanResult;
pub use format::Directive;
pub use format::DirectiveKind;
pub use format::parse_format;
pub use scanner::Halt;
pub use scanner::ScanReport;
pub use scanner::Scanner;
pub use slot::ScanValue;
pub use slot::Slot;
pub use slot::SlotKind;

/// Scans an in-memory byte slice with default configuration.
///
/// # Example
///
/// ```
/// use mini_scanf::{scan_bytes, Slot};
///
/// let mut word: Vec<u8> = Vec::new();
/// let mut n = 0u64;
/// let count = scan_bytes(b"snake_case-ff", "%w-%x", &mut [Slot::from(&mut word), Slot::from(&mut n)]);
/// assert_eq!(count, Ok(2));
/// assert_eq!(word, b"snake_case");
/// assert_eq!(n, 255);
/// ```
pub fn scan_bytes(input: &[u8], format: &str, slots: &mut [Slot<'_>]) -> ScanResult<usize> {
    Scanner::new(input).scan(format, slots)
}

/// Scans a string with default configuration. See [`scan_bytes`].
pub fn scan_str(input: &str, format: &str, slots: &mut [Slot<'_>]) -> ScanResult<usize> {
    scan_bytes(input.as_bytes(), format, slots)
}
