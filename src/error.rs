//! Failure taxonomy for directives and contract violations for slot binding.

use thiserror::Error;

use crate::slot::SlotKind;

/// Why a single directive stopped the scan.
///
/// The dispatcher does not distinguish these when counting conversions: any
/// failure ends processing and the count of prior successes is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Failure {
    /// End of input reached before any byte matching the directive's grammar.
    #[error("no data: input ended before the directive matched")]
    NoData,
    /// The grammar matched partially and then broke (a bare exponent marker,
    /// a lone `.`, a prefix with no digits, an overflowing accumulator).
    #[error("malformed token")]
    Malformed,
    /// A literal byte in the format did not match the input.
    #[error("literal mismatch: expected {:?}, found {}", as_char(.expected), describe(.found))]
    LiteralMismatch {
        expected: u8,
        found: Option<u8>,
    },
    /// `%` followed by a letter outside the directive vocabulary, or by nothing.
    #[error("unsupported directive {}", describe(.0))]
    UnsupportedDirective(Option<u8>),
    /// A text token was longer than its destination allows.
    #[error("destination too small: token exceeds {limit} bytes")]
    DestinationTooSmall { limit: usize },
}

fn as_char(byte: &u8) -> char {
    char::from(*byte)
}

fn describe(byte: &Option<u8>) -> String {
    match byte {
        Some(b) => format!("{:?}", char::from(*b)),
        None => "end of input".to_string(),
    }
}

/// The destination list does not fit the format string.
///
/// Raised before any input is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("format has {directives} conversion(s) but {slots} destination(s) were supplied")]
    SlotCountMismatch { directives: usize, slots: usize },
    #[error("destination {index} has kind `{found}` but the directive needs `{expected}`")]
    SlotKindMismatch {
        index: usize,
        expected: SlotKind,
        found: SlotKind,
    },
}

/// A type alias for Results with [`ScanError`].
pub type ScanResult<T> = Result<T, ScanError>;
