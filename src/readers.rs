//! Typed readers, one per directive grammar.
//!
//! Every reader except [`read_char`] skips leading whitespace first. A reader
//! either produces a complete value and leaves the cursor just past its token,
//! or fails. On failure only the last byte examined is pushed back; anything
//! consumed before it stays consumed.

use std::io::BufRead;

use crate::classify::hex_value;
use crate::classify::is_bdigit;
use crate::classify::is_digit;
use crate::classify::is_space;
use crate::classify::is_word;
use crate::classify::roman_value;
use crate::cursor::ByteCursor;
use crate::error::Failure;

/// Result of a single reader.
pub type Reading<T> = Result<T, Failure>;

fn dec_value(c: u8) -> Option<u32> {
    is_digit(c).then(|| u32::from(c - b'0'))
}

fn bin_value(c: u8) -> Option<u32> {
    is_bdigit(c).then(|| u32::from(c - b'0'))
}

/// Reads the first byte after leading whitespace, failing with
/// [`Failure::NoData`] at end of input.
fn first_byte<R: BufRead>(cur: &mut ByteCursor<R>) -> Reading<u8> {
    cur.skip_whitespace();
    cur.next().ok_or(Failure::NoData)
}

/// Consumes an optional `+`/`-`. Returns whether it was `-` and the byte after the sign.
fn sign<R: BufRead>(cur: &mut ByteCursor<R>, first: u8) -> (bool, Option<u8>) {
    match first {
        b'-' => (true, cur.next()),
        b'+' => (false, cur.next()),
        other => (false, Some(other)),
    }
}

/// Consumes a digit run starting at `c`, accumulating `acc * base + digit`.
///
/// Returns the number of digits and the value, `None` if it overflowed. The
/// byte that ended the run is pushed back.
fn digit_run<R: BufRead>(
    cur: &mut ByteCursor<R>,
    mut c: Option<u8>,
    base: u64,
    value: fn(u8) -> Option<u32>,
) -> (usize, Option<u64>) {
    let mut count = 0;
    let mut acc = Some(0u64);
    while let Some(d) = c.and_then(value) {
        acc = acc.and_then(|a| a.checked_mul(base)?.checked_add(u64::from(d)));
        count += 1;
        c = cur.next();
    }
    cur.unread(c);
    (count, acc)
}

/// `%c`: exactly one byte, whitespace included.
pub fn read_char<R: BufRead>(cur: &mut ByteCursor<R>) -> Reading<u8> {
    cur.next().ok_or(Failure::NoData)
}

/// `%d`: optional sign, then one or more decimal digits.
pub fn read_int<R: BufRead>(cur: &mut ByteCursor<R>) -> Reading<i64> {
    let first = first_byte(cur)?;
    let (negative, c) = sign(cur, first);
    let (count, magnitude) = digit_run(cur, c, 10, dec_value);
    if count == 0 {
        return Err(Failure::Malformed);
    }
    let magnitude = magnitude.ok_or(Failure::Malformed)?;
    if negative {
        // The magnitude of i64::MIN is one past i64::MAX.
        match magnitude {
            m if m <= i64::MAX as u64 => Ok(-(m as i64)),
            m if m == i64::MIN.unsigned_abs() => Ok(i64::MIN),
            _ => Err(Failure::Malformed),
        }
    } else {
        i64::try_from(magnitude).map_err(|_| Failure::Malformed)
    }
}

/// Shared body of `%x` and `%b`: an optional `0x`/`0b` style prefix, then
/// one or more digits of `base`.
///
/// A `0` not followed by the prefix letter is a digit in its own right, and
/// the byte after it is examined as part of the digit run.
fn read_prefixed<R: BufRead>(
    cur: &mut ByteCursor<R>,
    base: u64,
    prefix: u8,
    value: fn(u8) -> Option<u32>,
) -> Reading<u64> {
    let first = first_byte(cur)?;
    let mut leading_zero = 0;
    let start = if first == b'0' {
        let c = cur.next();
        if c.is_some_and(|b| b.eq_ignore_ascii_case(&prefix)) {
            let c = cur.next();
            let (count, acc) = digit_run(cur, c, base, value);
            if count == 0 {
                return Err(Failure::Malformed);
            }
            return acc.ok_or(Failure::Malformed);
        }
        leading_zero = 1;
        c
    } else {
        Some(first)
    };
    let (count, acc) = digit_run(cur, start, base, value);
    if count + leading_zero == 0 {
        return Err(Failure::Malformed);
    }
    acc.ok_or(Failure::Malformed)
}

/// `%x`: optional `0x`/`0X`, then hex digits of either case.
pub fn read_hex<R: BufRead>(cur: &mut ByteCursor<R>) -> Reading<u64> {
    read_prefixed(cur, 16, b'x', hex_value)
}

/// `%b`: optional `0b`/`0B`, then binary digits.
pub fn read_binary<R: BufRead>(cur: &mut ByteCursor<R>) -> Reading<u64> {
    read_prefixed(cur, 2, b'b', bin_value)
}

/// `%f`: `[+-]digits[.digits][(e|E)[+-]digits]`.
///
/// At least one digit is required before or after the `.`. An exponent
/// marker must be followed by digits. An exponent larger than `max_exponent`
/// in magnitude, or a result that is not finite, is malformed.
pub fn read_real<R: BufRead>(cur: &mut ByteCursor<R>, max_exponent: u32) -> Reading<f64> {
    let first = first_byte(cur)?;
    let (negative, mut c) = sign(cur, first);

    let mut value = 0.0f64;
    let mut found_digit = false;
    while let Some(d) = c.and_then(dec_value) {
        value = value * 10.0 + f64::from(d);
        found_digit = true;
        c = cur.next();
    }
    if c == Some(b'.') {
        c = cur.next();
        let mut position = 1;
        while let Some(d) = c.and_then(dec_value) {
            value += f64::from(d) * 10f64.powi(-position);
            position = position.saturating_add(1);
            found_digit = true;
            c = cur.next();
        }
    }
    if !found_digit {
        cur.unread(c);
        return Err(Failure::Malformed);
    }

    if matches!(c, Some(b'e' | b'E')) {
        let Some(after_marker) = cur.next() else {
            return Err(Failure::Malformed);
        };
        let (exp_negative, c) = sign(cur, after_marker);
        let (count, exponent) = digit_run(cur, c, 10, dec_value);
        if count == 0 {
            return Err(Failure::Malformed);
        }
        let exponent = exponent
            .filter(|e| *e <= u64::from(max_exponent))
            .ok_or(Failure::Malformed)?;
        for _ in 0..exponent {
            if exp_negative {
                value /= 10.0;
            } else {
                value *= 10.0;
            }
            if value == 0.0 || value.is_infinite() {
                break;
            }
        }
    } else {
        cur.unread(c);
    }

    if !value.is_finite() {
        return Err(Failure::Malformed);
    }
    Ok(if negative { -value } else { value })
}

/// `%r`: one or more uppercase Roman letters.
///
/// Letters combine left to right. A letter smaller than its successor forms a
/// pair worth `next - current` and both letters are consumed. Non-canonical
/// sequences are accepted: `IIII` is 4, `IC` is 99. A total that overflows
/// `i64` is malformed, and the rest of the run is still consumed.
pub fn read_roman<R: BufRead>(cur: &mut ByteCursor<R>) -> Reading<i64> {
    let mut c = Some(first_byte(cur)?);
    let mut total = Some(0i64);
    let mut held: Option<u32> = None;
    let mut found_letter = false;
    while let Some(v) = c.and_then(roman_value) {
        found_letter = true;
        held = match held {
            Some(prev) if prev < v => {
                total = total.and_then(|t| t.checked_add(i64::from(v - prev)));
                None
            }
            Some(prev) => {
                total = total.and_then(|t| t.checked_add(i64::from(prev)));
                Some(v)
            }
            None => Some(v),
        };
        c = cur.next();
    }
    cur.unread(c);
    if !found_letter {
        return Err(Failure::Malformed);
    }
    if let Some(last) = held {
        total = total.and_then(|t| t.checked_add(i64::from(last)));
    }
    total.ok_or(Failure::Malformed)
}

/// Copies a run of bytes accepted by `accept`, at most `limit` of them.
///
/// A byte that would exceed the limit is pushed back and the read fails with
/// [`Failure::DestinationTooSmall`].
fn read_token<R: BufRead>(
    cur: &mut ByteCursor<R>,
    limit: usize,
    accept: fn(u8) -> bool,
) -> Reading<Vec<u8>> {
    let mut c = Some(first_byte(cur)?);
    let mut token = Vec::new();
    while let Some(b) = c.filter(|b| accept(*b)) {
        if token.len() == limit {
            cur.pushback(b);
            return Err(Failure::DestinationTooSmall { limit });
        }
        token.push(b);
        c = cur.next();
    }
    cur.unread(c);
    if token.is_empty() {
        return Err(Failure::Malformed);
    }
    Ok(token)
}

/// `%s`: one or more non-whitespace bytes.
pub fn read_string<R: BufRead>(cur: &mut ByteCursor<R>, limit: usize) -> Reading<Vec<u8>> {
    read_token(cur, limit, |b| !is_space(b))
}

/// `%w`: one or more ASCII letters, digits or underscores.
pub fn read_word<R: BufRead>(cur: &mut ByteCursor<R>, limit: usize) -> Reading<Vec<u8>> {
    read_token(cur, limit, is_word)
}

/// Requires the next input byte to be `expected`. A mismatching byte is pushed back.
pub fn match_literal<R: BufRead>(cur: &mut ByteCursor<R>, expected: u8) -> Reading<()> {
    match cur.next() {
        Some(b) if b == expected => Ok(()),
        found => {
            cur.unread(found);
            Err(Failure::LiteralMismatch { expected, found })
        }
    }
}

/// `%%`: skips whitespace, then requires a literal `%`.
pub fn match_percent<R: BufRead>(cur: &mut ByteCursor<R>) -> Reading<()> {
    cur.skip_whitespace();
    match_literal(cur, b'%')
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use rstest::rstest;

    use super::*;

    fn cursor(input: &str) -> ByteCursor<&[u8]> {
        ByteCursor::new(input.as_bytes())
    }

    fn rest(mut cur: ByteCursor<&[u8]>) -> String {
        let mut out = Vec::new();
        while let Some(b) = cur.next() {
            out.push(b);
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn char_reads_whitespace() {
        let mut c = cursor(" x");
        assert_eq!(read_char(&mut c), Ok(b' '));
        assert_eq!(read_char(&mut c), Ok(b'x'));
        assert_eq!(read_char(&mut c), Err(Failure::NoData));
    }

    #[rstest]
    #[case("42", 42, "")]
    #[case("  -17 rest", -17, " rest")]
    #[case("+8x", 8, "x")]
    #[case("007", 7, "")]
    #[case("9223372036854775807", i64::MAX, "")]
    #[case("-9223372036854775808", i64::MIN, "")]
    fn int_ok(#[case] input: &str, #[case] expected: i64, #[case] left: &str) {
        let mut c = cursor(input);
        assert_eq!(read_int(&mut c), Ok(expected));
        assert_eq!(rest(c), left);
    }

    #[rstest]
    #[case("", Failure::NoData)]
    #[case("   ", Failure::NoData)]
    #[case("x", Failure::Malformed)]
    #[case("-", Failure::Malformed)]
    #[case("+ 1", Failure::Malformed)]
    #[case("9223372036854775808", Failure::Malformed)]
    fn int_fails(#[case] input: &str, #[case] failure: Failure) {
        let mut c = cursor(input);
        assert_eq!(read_int(&mut c), Err(failure));
    }

    #[test]
    fn int_failure_pushes_back_offender() {
        let mut c = cursor("  xx");
        assert_eq!(read_int(&mut c), Err(Failure::Malformed));
        assert_eq!(c.position(), 2);
        assert_eq!(rest(c), "xx");
    }

    #[rstest]
    #[case("0x1A", 26, "")]
    #[case("0X1a ", 26, " ")]
    #[case("07", 7, "")]
    #[case("0", 0, "")]
    #[case("0g", 0, "g")]
    #[case("ff", 255, "")]
    #[case("DEADbeef!", 0xDEAD_BEEF, "!")]
    fn hex_ok(#[case] input: &str, #[case] expected: u64, #[case] left: &str) {
        let mut c = cursor(input);
        assert_eq!(read_hex(&mut c), Ok(expected));
        assert_eq!(rest(c), left);
    }

    #[rstest]
    #[case("", Failure::NoData)]
    #[case("g", Failure::Malformed)]
    #[case("0x", Failure::Malformed)]
    #[case("0xg", Failure::Malformed)]
    #[case("10000000000000000", Failure::Malformed)]
    fn hex_fails(#[case] input: &str, #[case] failure: Failure) {
        let mut c = cursor(input);
        assert_eq!(read_hex(&mut c), Err(failure));
    }

    #[rstest]
    #[case("0b101", 5, "")]
    #[case("0B11 ", 3, " ")]
    #[case("0101", 5, "")]
    #[case("1102", 6, "2")]
    #[case("0", 0, "")]
    fn binary_ok(#[case] input: &str, #[case] expected: u64, #[case] left: &str) {
        let mut c = cursor(input);
        assert_eq!(read_binary(&mut c), Ok(expected));
        assert_eq!(rest(c), left);
    }

    #[test]
    fn binary_prefix_without_digits() {
        let mut c = cursor("0b2");
        assert_eq!(read_binary(&mut c), Err(Failure::Malformed));
        assert_eq!(rest(c), "2");
        assert_eq!(read_binary(&mut cursor("2")), Err(Failure::Malformed));
    }

    #[rstest]
    #[case("3.14e2", 314.0)]
    #[case("-2.5E-1", -0.25)]
    #[case("5.", 5.0)]
    #[case(".5", 0.5)]
    #[case("+.3", 0.3)]
    #[case("  42", 42.0)]
    #[case("1e+3", 1000.0)]
    #[case("1e-400", 0.0)]
    fn real_ok(#[case] input: &str, #[case] expected: f64) {
        let value = read_real(&mut cursor(input), 1024).unwrap();
        assert!(approx_eq!(f64, value, expected, epsilon = 1e-9), "{value} != {expected}");
    }

    #[rstest]
    #[case("", Failure::NoData)]
    #[case(".", Failure::Malformed)]
    #[case("e5", Failure::Malformed)]
    #[case("5e", Failure::Malformed)]
    #[case("5e+", Failure::Malformed)]
    #[case("5ex", Failure::Malformed)]
    #[case("-", Failure::Malformed)]
    #[case("1e2000", Failure::Malformed)]
    #[case("1e400", Failure::Malformed)]
    fn real_fails(#[case] input: &str, #[case] failure: Failure) {
        assert_eq!(read_real(&mut cursor(input), 1024), Err(failure));
    }

    #[test]
    fn real_respects_exponent_cap() {
        assert_eq!(read_real(&mut cursor("1e9"), 8), Err(Failure::Malformed));
        assert!(read_real(&mut cursor("1e8"), 8).is_ok());
    }

    #[test]
    fn real_leaves_terminator() {
        let mut c = cursor("1.5e1,");
        assert!(approx_eq!(f64, read_real(&mut c, 1024).unwrap(), 15.0, epsilon = 1e-9));
        assert_eq!(rest(c), ",");
    }

    #[rstest]
    #[case("IV", 4)]
    #[case("IX", 9)]
    #[case("LVIII", 58)]
    #[case("MCMXCIV", 1994)]
    #[case("MMMCMXCIX", 3999)]
    #[case("IIII", 4)]
    #[case("IC", 99)]
    #[case("XCIX", 99)]
    #[case("I", 1)]
    fn roman_ok(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(read_roman(&mut cursor(input)), Ok(expected));
    }

    #[test]
    fn roman_stops_at_lowercase() {
        let mut c = cursor(" XIIi");
        assert_eq!(read_roman(&mut c), Ok(12));
        assert_eq!(rest(c), "i");
        assert_eq!(read_roman(&mut cursor("iv")), Err(Failure::Malformed));
    }

    #[test]
    fn roman_long_run_totals_while_reading() {
        let input = format!("{} ", "M".repeat(10_000));
        let mut c = cursor(&input);
        assert_eq!(read_roman(&mut c), Ok(10_000_000));
        assert_eq!(rest(c), " ");
    }

    #[test]
    fn real_long_fraction() {
        let input = format!("0.{}1x", "0".repeat(5_000));
        let mut c = cursor(&input);
        assert_eq!(read_real(&mut c, 1024), Ok(0.0));
        assert_eq!(rest(c), "x");
    }

    #[test]
    fn word_and_string_boundaries() {
        let mut c = cursor("  foo_1-bar baz");
        assert_eq!(read_word(&mut c, 64), Ok(b"foo_1".to_vec()));
        assert_eq!(read_string(&mut c, 64), Ok(b"-bar".to_vec()));
        assert_eq!(read_string(&mut c, 64), Ok(b"baz".to_vec()));
        assert_eq!(read_string(&mut c, 64), Err(Failure::NoData));
        assert_eq!(read_word(&mut cursor("-"), 64), Err(Failure::Malformed));
    }

    #[test]
    fn token_longer_than_limit() {
        let mut c = cursor("abcdef");
        assert_eq!(
            read_string(&mut c, 4),
            Err(Failure::DestinationTooSmall { limit: 4 })
        );
        assert_eq!(rest(c), "ef");
        assert_eq!(read_word(&mut cursor("abcd"), 4), Ok(b"abcd".to_vec()));
    }

    #[test]
    fn percent_and_literal() {
        let mut c = cursor("  %=");
        assert_eq!(match_percent(&mut c), Ok(()));
        assert_eq!(match_literal(&mut c, b'='), Ok(()));
        let mut c = cursor(":");
        assert_eq!(
            match_literal(&mut c, b'='),
            Err(Failure::LiteralMismatch {
                expected: b'=',
                found: Some(b':')
            })
        );
        assert_eq!(rest(c), ":");
    }
}
