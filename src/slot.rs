//! Destination slots: where converted values are written.
//!
//! Each conversion directive writes the next slot in order. `%%`, whitespace
//! and literals consume none. The slot list is checked against the format
//! before any input is read.
//!
//! # Example
//!
//! ```
//! use mini_scanf::{scan, Scanner};
//!
//! let mut scanner = Scanner::new(&b"7 XIV name"[..]);
//! let mut n: i64 = 0;
//! let mut year: i64 = 0;
//! let mut name: Vec<u8> = Vec::new();
//! let count = scan!(scanner, "%d %r %w", &mut n, &mut year, &mut name).unwrap();
//! assert_eq!(count, 3);
//! assert_eq!((n, year), (7, 14));
//! assert_eq!(name, b"name");
//! ```

use std::fmt;

use crate::format::DirectiveKind;

/// Tag for the kind of value a [`Slot`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Char,
    Int,
    Unsigned,
    Real,
    Text,
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SlotKind::Char => "char",
            SlotKind::Int => "integer",
            SlotKind::Unsigned => "unsigned",
            SlotKind::Real => "real",
            SlotKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// A caller-owned location a conversion writes into.
#[derive(Debug)]
pub enum Slot<'a> {
    /// `%c`
    Char(&'a mut u8),
    /// `%d`, `%r`
    Int(&'a mut i64),
    /// `%x`, `%b`
    Unsigned(&'a mut u64),
    /// `%f`
    Real(&'a mut f64),
    /// `%s`, `%w`. Without a limit, the scanner's configured text limit applies.
    Text {
        buf: &'a mut Vec<u8>,
        limit: Option<usize>,
    },
}

impl<'a> Slot<'a> {
    /// A text slot that accepts tokens of at most `limit` bytes.
    pub fn bounded_text(buf: &'a mut Vec<u8>, limit: usize) -> Self {
        Slot::Text {
            buf,
            limit: Some(limit),
        }
    }

    pub fn kind(&self) -> SlotKind {
        match self {
            Slot::Char(_) => SlotKind::Char,
            Slot::Int(_) => SlotKind::Int,
            Slot::Unsigned(_) => SlotKind::Unsigned,
            Slot::Real(_) => SlotKind::Real,
            Slot::Text { .. } => SlotKind::Text,
        }
    }

    /// The slot's own byte limit, for text slots that carry one.
    pub fn text_limit(&self) -> Option<usize> {
        match self {
            Slot::Text { limit, .. } => *limit,
            _ => None,
        }
    }

    /// Store a converted value into this slot.
    ///
    /// Returns `true` if the value was stored (kinds matched), `false` otherwise.
    pub fn store(&mut self, value: ScanValue) -> bool {
        match (self, value) {
            (Slot::Char(dst), ScanValue::Char(v)) => **dst = v,
            (Slot::Int(dst), ScanValue::Int(v)) => **dst = v,
            (Slot::Unsigned(dst), ScanValue::Unsigned(v)) => **dst = v,
            (Slot::Real(dst), ScanValue::Real(v)) => **dst = v,
            (Slot::Text { buf, .. }, ScanValue::Text(v)) => **buf = v,
            _ => return false,
        }
        true
    }
}

impl<'a> From<&'a mut u8> for Slot<'a> {
    fn from(dst: &'a mut u8) -> Self {
        Slot::Char(dst)
    }
}

impl<'a> From<&'a mut i64> for Slot<'a> {
    fn from(dst: &'a mut i64) -> Self {
        Slot::Int(dst)
    }
}

impl<'a> From<&'a mut u64> for Slot<'a> {
    fn from(dst: &'a mut u64) -> Self {
        Slot::Unsigned(dst)
    }
}

impl<'a> From<&'a mut f64> for Slot<'a> {
    fn from(dst: &'a mut f64) -> Self {
        Slot::Real(dst)
    }
}

impl<'a> From<&'a mut Vec<u8>> for Slot<'a> {
    fn from(buf: &'a mut Vec<u8>) -> Self {
        Slot::Text { buf, limit: None }
    }
}

/// An owned converted value, as returned by
/// [`Scanner::scan_values`](crate::Scanner::scan_values).
#[derive(Debug, Clone, PartialEq)]
pub enum ScanValue {
    /// From `%c`.
    Char(u8),
    /// From `%d` and `%r`.
    Int(i64),
    /// From `%x` and `%b`.
    Unsigned(u64),
    /// From `%f`.
    Real(f64),
    /// From `%s` and `%w`.
    Text(Vec<u8>),
}

impl ScanValue {
    /// A zero value of the kind `directive` produces.
    pub fn zero_for(directive: DirectiveKind) -> Self {
        match directive.slot_kind() {
            SlotKind::Char => ScanValue::Char(0),
            SlotKind::Int => ScanValue::Int(0),
            SlotKind::Unsigned => ScanValue::Unsigned(0),
            SlotKind::Real => ScanValue::Real(0.0),
            SlotKind::Text => ScanValue::Text(Vec::new()),
        }
    }

    /// Borrows this value as a destination slot.
    pub fn as_slot(&mut self) -> Slot<'_> {
        match self {
            ScanValue::Char(v) => Slot::Char(v),
            ScanValue::Int(v) => Slot::Int(v),
            ScanValue::Unsigned(v) => Slot::Unsigned(v),
            ScanValue::Real(v) => Slot::Real(v),
            ScanValue::Text(v) => Slot::from(v),
        }
    }
}

impl fmt::Display for ScanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanValue::Char(c) => write!(f, "{:?}", char::from(*c)),
            ScanValue::Int(v) => write!(f, "{v}"),
            ScanValue::Unsigned(v) => write!(f, "{v}"),
            ScanValue::Real(v) => write!(f, "{v}"),
            ScanValue::Text(bytes) => write!(f, "{:?}", String::from_utf8_lossy(bytes)),
        }
    }
}

/// Scans with a variadic list of destinations, converting each with
/// [`Slot::from`].
///
/// ```
/// use mini_scanf::{scan, Scanner};
///
/// let mut scanner = Scanner::new(&b"0x1f 0b11"[..]);
/// let mut a: u64 = 0;
/// let mut b: u64 = 0;
/// assert_eq!(scan!(scanner, "%x %b", &mut a, &mut b), Ok(2));
/// assert_eq!((a, b), (31, 3));
/// ```
#[macro_export]
macro_rules! scan {
    ($scanner:expr, $fmt:expr $(,)?) => {{
        $scanner.scan($fmt, &mut [])
    }};
    ($scanner:expr, $fmt:expr, $($arg:expr),+ $(,)?) => {{
        $scanner.scan($fmt, &mut [$($crate::Slot::from($arg)),+])
    }};
}
