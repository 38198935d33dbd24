//! Character classification for the directive grammars. C locale only.

/// Returns `true` for space, tab, newline, vertical tab, form feed and carriage return.
#[inline]
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Returns `true` if `c` is a decimal digit (`[0-9]`).
#[inline]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Returns `true` if `c` is a hexadecimal digit (`[0-9A-Fa-f]`).
#[inline]
pub fn is_xdigit(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

#[inline]
pub fn is_bdigit(c: u8) -> bool {
    matches!(c, b'0' | b'1')
}

/// Returns `true` for the uppercase Roman numeral letters `IVXLCDM`.
#[inline]
pub fn is_roman(c: u8) -> bool {
    roman_value(c).is_some()
}

/// Returns `true` for ASCII letters, digits and underscore.
#[inline]
pub fn is_word(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Numeric value of a hex digit, case-insensitive.
pub fn hex_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(u32::from(c - b'0')),
        b'a'..=b'f' => Some(u32::from(c - b'a') + 10),
        b'A'..=b'F' => Some(u32::from(c - b'A') + 10),
        _ => None,
    }
}

/// Value of a single Roman numeral letter.
pub fn roman_value(c: u8) -> Option<u32> {
    match c {
        b'I' => Some(1),
        b'V' => Some(5),
        b'X' => Some(10),
        b'L' => Some(50),
        b'C' => Some(100),
        b'D' => Some(500),
        b'M' => Some(1000),
        _ => None,
    }
}
