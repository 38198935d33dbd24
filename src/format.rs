//! Format string parsing.

use std::fmt;

use crate::classify::is_space;
use crate::slot::SlotKind;

/// The conversion selected by a `%`-letter directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `%c` - One byte, whitespace included.
    Char,
    /// `%d` - Signed decimal integer.
    SignedInt,
    /// `%s` - Run of non-whitespace bytes.
    String,
    /// `%f` - Real number with optional fraction and exponent.
    Real,
    /// `%x` - Unsigned hexadecimal integer, optional `0x` prefix.
    Hex,
    /// `%b` - Unsigned binary integer, optional `0b` prefix.
    Binary,
    /// `%r` - Roman numeral.
    Roman,
    /// `%w` - Run of ASCII letters, digits and underscores.
    Word,
}

impl DirectiveKind {
    /// Maps a directive letter to its kind. Letters are case-sensitive.
    pub fn from_letter(letter: u8) -> Option<Self> {
        match letter {
            b'c' => Some(DirectiveKind::Char),
            b'd' => Some(DirectiveKind::SignedInt),
            b's' => Some(DirectiveKind::String),
            b'f' => Some(DirectiveKind::Real),
            b'x' => Some(DirectiveKind::Hex),
            b'b' => Some(DirectiveKind::Binary),
            b'r' => Some(DirectiveKind::Roman),
            b'w' => Some(DirectiveKind::Word),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            DirectiveKind::Char => 'c',
            DirectiveKind::SignedInt => 'd',
            DirectiveKind::String => 's',
            DirectiveKind::Real => 'f',
            DirectiveKind::Hex => 'x',
            DirectiveKind::Binary => 'b',
            DirectiveKind::Roman => 'r',
            DirectiveKind::Word => 'w',
        }
    }

    /// The destination kind this directive writes into.
    pub fn slot_kind(self) -> SlotKind {
        match self {
            DirectiveKind::Char => SlotKind::Char,
            DirectiveKind::SignedInt | DirectiveKind::Roman => SlotKind::Int,
            DirectiveKind::Hex | DirectiveKind::Binary => SlotKind::Unsigned,
            DirectiveKind::Real => SlotKind::Real,
            DirectiveKind::String | DirectiveKind::Word => SlotKind::Text,
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.letter())
    }
}

/// One position of a parsed format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// A conversion that writes the next destination slot.
    Convert(DirectiveKind),
    /// `%%` - Matches a literal percent sign after optional whitespace. No slot.
    Percent,
    /// A whitespace byte: matches any run of input whitespace, including none.
    Whitespace,
    /// A byte that must match the next input byte exactly.
    Literal(u8),
    /// `%` followed by an unknown letter, or by the end of the format.
    /// Processing stops here.
    Unrecognized(Option<u8>),
}

/// Parses a format string into directives, left to right.
///
/// Parsing never fails: unknown directives become [`Directive::Unrecognized`]
/// and halt the scan when reached.
///
/// # Example
///
/// ```
/// use mini_scanf::{parse_format, Directive, DirectiveKind};
///
/// let directives = parse_format("id=%d %%");
/// assert_eq!(directives, vec![
///     Directive::Literal(b'i'),
///     Directive::Literal(b'd'),
///     Directive::Literal(b'='),
///     Directive::Convert(DirectiveKind::SignedInt),
///     Directive::Whitespace,
///     Directive::Percent,
/// ]);
/// ```
pub fn parse_format(format: &str) -> Vec<Directive> {
    let mut directives = Vec::new();
    let mut bytes = format.bytes();

    while let Some(b) = bytes.next() {
        let directive = if b == b'%' {
            match bytes.next() {
                Some(b'%') => Directive::Percent,
                Some(letter) => match DirectiveKind::from_letter(letter) {
                    Some(kind) => Directive::Convert(kind),
                    None => Directive::Unrecognized(Some(letter)),
                },
                None => Directive::Unrecognized(None),
            }
        } else if is_space(b) {
            Directive::Whitespace
        } else {
            Directive::Literal(b)
        };
        directives.push(directive);
    }

    directives
}

/// The conversions that can run, in order: everything before the first
/// unrecognized directive.
pub fn reachable_conversions(directives: &[Directive]) -> impl Iterator<Item = DirectiveKind> + '_ {
    directives
        .iter()
        .take_while(|d| !matches!(d, Directive::Unrecognized(_)))
        .filter_map(|d| match d {
            Directive::Convert(kind) => Some(*kind),
            _ => None,
        })
}
