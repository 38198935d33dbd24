//! The directive dispatcher.

use std::io::BufRead;

use crate::config::ScanConfig;
use crate::cursor::ByteCursor;
use crate::error::Failure;
use crate::error::ScanError;
use crate::error::ScanResult;
use crate::format::Directive;
use crate::format::DirectiveKind;
use crate::format::parse_format;
use crate::format::reachable_conversions;
use crate::readers;
use crate::slot::ScanValue;
use crate::slot::Slot;

/// Where and why a scan stopped before the end of the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halt {
    /// Index of the failing directive in [`parse_format`] order.
    pub directive: usize,
    pub failure: Failure,
}

/// Outcome of one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    /// Conversions that succeeded. Equal to what [`Scanner::scan`] returns.
    pub count: usize,
    /// `None` when the whole format was processed.
    pub halt: Option<Halt>,
}

/// Applies format strings to one input stream.
///
/// The stream position carries over between calls. A scanner is meant to be
/// the only reader of its stream.
///
/// # Example
///
/// ```
/// use mini_scanf::{Scanner, Slot};
///
/// let mut scanner = Scanner::new(&b"a 42 b"[..]);
/// let (mut first, mut n, mut last) = (0u8, 0i64, 0u8);
/// let count = scanner
///     .scan("%c %d %c", &mut [Slot::from(&mut first), Slot::from(&mut n), Slot::from(&mut last)])
///     .unwrap();
/// assert_eq!(count, 3);
/// assert_eq!((first, n, last), (b'a', 42, b'b'));
/// ```
#[derive(Debug)]
pub struct Scanner<R> {
    cursor: ByteCursor<R>,
    config: ScanConfig,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ScanConfig::default())
    }

    pub fn with_config(reader: R, config: ScanConfig) -> Self {
        Scanner {
            cursor: ByteCursor::new(reader),
            config,
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Bytes consumed from the stream so far.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the reader. A byte pushed back by the last directive is dropped.
    pub fn into_inner(self) -> R {
        self.cursor.into_inner()
    }

    /// Scans the input against `format`, writing conversions into `slots` in order.
    ///
    /// Returns the number of successful conversions. Processing stops at the
    /// first failing directive; later directives are never attempted and their
    /// slots are left untouched.
    ///
    /// # Errors
    ///
    /// [`ScanError`] if `slots` does not match the conversions in `format` in
    /// number or kind. Nothing is read in that case.
    pub fn scan(&mut self, format: &str, slots: &mut [Slot<'_>]) -> ScanResult<usize> {
        self.scan_report(format, slots).map(|report| report.count)
    }

    /// Like [`scan`](Self::scan), but also reports which directive halted the
    /// scan and why.
    #[tracing::instrument(level = "trace", skip(self, slots))]
    pub fn scan_report(&mut self, format: &str, slots: &mut [Slot<'_>]) -> ScanResult<ScanReport> {
        let directives = parse_format(format);
        bind(&directives, slots)?;
        Ok(self.dispatch(&directives, slots))
    }

    /// Scans with destinations allocated by the scanner and returns the
    /// values converted before processing stopped.
    ///
    /// ```
    /// use mini_scanf::{Scanner, ScanValue};
    ///
    /// let mut scanner = Scanner::new(&b"MCMXCIV 0b101 x"[..]);
    /// let values = scanner.scan_values("%r %b %d").unwrap();
    /// assert_eq!(values, vec![ScanValue::Int(1994), ScanValue::Unsigned(5)]);
    /// ```
    pub fn scan_values(&mut self, format: &str) -> ScanResult<Vec<ScanValue>> {
        let directives = parse_format(format);
        let mut values: Vec<ScanValue> = reachable_conversions(&directives)
            .map(ScanValue::zero_for)
            .collect();
        let report = {
            let mut slots: Vec<Slot<'_>> = values.iter_mut().map(ScanValue::as_slot).collect();
            bind(&directives, &slots)?;
            self.dispatch(&directives, &mut slots)
        };
        values.truncate(report.count);
        Ok(values)
    }

    fn dispatch(&mut self, directives: &[Directive], slots: &mut [Slot<'_>]) -> ScanReport {
        let mut count = 0;
        let mut slots = slots.iter_mut();

        for (index, directive) in directives.iter().enumerate() {
            let step = match *directive {
                Directive::Convert(kind) => match slots.next() {
                    Some(slot) => self.convert(kind, slot),
                    None => Err(Failure::NoData),
                },
                Directive::Percent => readers::match_percent(&mut self.cursor),
                Directive::Whitespace => {
                    self.cursor.skip_whitespace();
                    Ok(())
                }
                Directive::Literal(b) => readers::match_literal(&mut self.cursor, b),
                Directive::Unrecognized(letter) => Err(Failure::UnsupportedDirective(letter)),
            };

            match step {
                Ok(()) if matches!(directive, Directive::Convert(_)) => count += 1,
                Ok(()) => {}
                Err(failure) => {
                    tracing::debug!(
                        directive = index,
                        position = self.cursor.position(),
                        count,
                        %failure,
                        "scan halted"
                    );
                    return ScanReport {
                        count,
                        halt: Some(Halt {
                            directive: index,
                            failure,
                        }),
                    };
                }
            }
        }

        ScanReport { count, halt: None }
    }

    fn convert(&mut self, kind: DirectiveKind, slot: &mut Slot<'_>) -> Result<(), Failure> {
        let cur = &mut self.cursor;
        let text_limit = slot.text_limit().unwrap_or(self.config.text_limit);
        let value = match kind {
            DirectiveKind::Char => ScanValue::Char(readers::read_char(cur)?),
            DirectiveKind::SignedInt => ScanValue::Int(readers::read_int(cur)?),
            DirectiveKind::Roman => ScanValue::Int(readers::read_roman(cur)?),
            DirectiveKind::Hex => ScanValue::Unsigned(readers::read_hex(cur)?),
            DirectiveKind::Binary => ScanValue::Unsigned(readers::read_binary(cur)?),
            DirectiveKind::Real => {
                ScanValue::Real(readers::read_real(cur, self.config.max_exponent)?)
            }
            DirectiveKind::String => ScanValue::Text(readers::read_string(cur, text_limit)?),
            DirectiveKind::Word => ScanValue::Text(readers::read_word(cur, text_limit)?),
        };
        tracing::trace!(directive = %kind, %value, "converted");
        let stored = slot.store(value);
        debug_assert!(stored, "slot kind is checked before dispatch");
        Ok(())
    }
}

/// Checks the slot list against the conversions that can run.
fn bind(directives: &[Directive], slots: &[Slot<'_>]) -> ScanResult<()> {
    let kinds: Vec<DirectiveKind> = reachable_conversions(directives).collect();
    if kinds.len() != slots.len() {
        return Err(ScanError::SlotCountMismatch {
            directives: kinds.len(),
            slots: slots.len(),
        });
    }
    for (index, (kind, slot)) in kinds.iter().zip(slots).enumerate() {
        if kind.slot_kind() != slot.kind() {
            return Err(ScanError::SlotKindMismatch {
                index,
                expected: kind.slot_kind(),
                found: slot.kind(),
            });
        }
    }
    Ok(())
}
