//! # Receiver Facade
//!
//! [`Gps`] owns a [`LineAssembler`], a [`SentenceParser`] and the
//! [`FixState`] they feed, and keeps running counts of what happened to
//! every line.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    ChecksumStatus, Error, FixState, LineAssembler, MAX_LINE_LENGTH, Parsed, ParserConfig,
    SentenceParser,
};

/// Where bytes come from: a serial port, a file, a test vector.
///
/// Any `Iterator<Item = u8>` is a source already.
pub trait ByteSource {
    /// Returns the next byte, or `None` if none is available right now.
    fn read_byte(&mut self) -> Option<u8>;
}

impl<T> ByteSource for T
where
    T: Iterator<Item = u8>,
{
    fn read_byte(&mut self) -> Option<u8> {
        self.next()
    }
}

/// Running counts kept by a [`Gps`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    /// Lines handed to the parser, truncated ones included
    pub lines: u32,
    /// Lines decoded and committed
    pub parsed: u32,
    /// Lines rejected for any reason
    pub failed: u32,
    /// Checksum mismatches, rejected or advisory
    pub checksum_mismatches: u32,
    /// Lines the assembler cut short
    pub truncated: u32,
    /// Lines replaced before anyone took them
    pub overwritten: u32,
}

impl Statistics {
    fn record<I>(&mut self, result: &Result<Parsed, Error<I>>) {
        self.lines = self.lines.wrapping_add(1);

        match result {
            Ok(parsed) => {
                self.parsed = self.parsed.wrapping_add(1);
                if let ChecksumStatus::Mismatch { .. } = parsed.checksum {
                    self.checksum_mismatches = self.checksum_mismatches.wrapping_add(1);
                }
            }
            Err(e) => {
                self.failed = self.failed.wrapping_add(1);
                if let Error::ChecksumMismatch { .. } = e {
                    self.checksum_mismatches = self.checksum_mismatches.wrapping_add(1);
                }
            }
        }
    }
}

/// A GPS receiver fed one byte at a time.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{Gps, ParserConfig};
///
/// let mut gps: Gps = Gps::new(ParserConfig::default());
/// let mut source = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n"
///     .iter()
///     .copied();
///
/// while gps.read(&mut source).is_some() {}
///
/// assert!(gps.has_new_line());
/// assert!(gps.update().unwrap().is_ok());
/// assert!(gps.fix().has_fix());
/// assert_eq!(gps.fix().speed, 22.4);
/// ```
#[derive(Debug, Clone)]
pub struct Gps<const N: usize = MAX_LINE_LENGTH> {
    assembler: LineAssembler<N>,
    parser: SentenceParser,
    fix: FixState,
    stats: Statistics,
}

impl<const N: usize> Default for Gps<N> {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl<const N: usize> Gps<N> {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            assembler: LineAssembler::new(),
            parser: SentenceParser::new(config),
            fix: FixState::new(),
            stats: Statistics::default(),
        }
    }

    /// Reads at most one byte from `source` and ingests it.
    ///
    /// Returns the byte read. While paused nothing is read, so the byte
    /// stays in the source.
    pub fn read(&mut self, source: &mut impl ByteSource) -> Option<u8> {
        if self.assembler.is_paused() {
            return None;
        }

        let byte = source.read_byte()?;
        self.assembler.ingest(byte);
        Some(byte)
    }

    /// Feeds one byte to the line assembler.
    pub fn ingest(&mut self, byte: u8) {
        self.assembler.ingest(byte);
    }

    pub fn pause(&mut self, paused: bool) {
        self.assembler.pause(paused);
    }

    pub fn is_paused(&self) -> bool {
        self.assembler.is_paused()
    }

    pub fn has_new_line(&self) -> bool {
        self.assembler.has_new_line()
    }

    /// Takes the last complete line without parsing it.
    pub fn take_last_line(&mut self) -> &[u8] {
        self.assembler.take_last_line()
    }

    /// Takes the ready line, if any, and parses it into the fix.
    ///
    /// A line that lost bytes to truncation is reported as
    /// [`Error::Truncated`] and not parsed.
    pub fn update(&mut self) -> Option<Result<Parsed, Error<&str>>> {
        if !self.assembler.has_new_line() {
            return None;
        }

        let truncated = self.assembler.last_line_truncated();
        let line = self.assembler.take_last_line();

        let result = if truncated {
            Err(Error::Truncated)
        } else {
            self.parser.parse(line, &mut self.fix)
        };

        self.stats.record(&result);
        if let Err(e) = &result {
            log::debug!("line dropped: {e}");
        }

        Some(result)
    }

    /// Parses a line obtained elsewhere into the fix, counting it like
    /// [`update`](Self::update) does.
    pub fn parse_line<'a>(&mut self, line: &'a [u8]) -> Result<Parsed, Error<&'a str>> {
        let result = self.parser.parse(line, &mut self.fix);
        self.stats.record(&result);
        result
    }

    pub fn fix(&self) -> &FixState {
        &self.fix
    }

    /// The running counts, including the assembler's truncation and
    /// overwrite counters.
    pub fn statistics(&self) -> Statistics {
        Statistics {
            truncated: self.assembler.truncated_lines(),
            overwritten: self.assembler.overwritten_lines(),
            ..self.stats
        }
    }

    pub fn config(&self) -> &ParserConfig {
        self.parser.config()
    }
}
