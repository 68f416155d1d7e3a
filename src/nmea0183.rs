//! # NMEA 0183 Framing
//!
//! This module handles the outer structure of an NMEA 0183 line:
//! `$HHHHH,D1,D2,...,Dn*CC\r\n`
//!
//! Framing strips the line ending, splits off the `*CC` checksum and checks it
//! according to [`ChecksumMode`], then hands the content between `$` and `*`
//! to a content parser.

use nom::{
    AsBytes, Input, Parser,
    branch::alt,
    bytes::complete::{is_a, take, take_till, take_until},
    character::complete::{char, hex_digit0},
    combinator::{opt, rest},
    error::ErrorKind,
    number::complete::hex_u32,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, IResult, parsing::consumed};

/// Defines how the parser should handle NMEA message checksums.
///
/// NMEA 0183 messages can include a checksum in the format `*CC` where
/// CC is a two-digit hexadecimal value representing the XOR of all bytes in the
/// message content (excluding the '$' prefix and '*' delimiter).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    /// Checksum is required and must be present.
    ///
    /// The parser will fail if no `*CC` checksum is found at the end of the message.
    /// If a checksum is present, it will be validated against the calculated checksum.
    Required,

    #[default]
    /// Checksum is optional but will be validated if present.
    ///
    /// The parser will accept messages both with and without checksums:
    /// - If no checksum is present (`*CC` missing), parsing continues normally
    /// - If a checksum is present, it must be valid or parsing will fail
    Optional,

    /// Checksum is computed and reported but never rejects a sentence.
    ///
    /// A mismatch shows up as [`ChecksumStatus::Mismatch`] in the parse
    /// result and the sentence is still decoded and committed. A checksum
    /// that is not two hex digits is still an error.
    Advisory,
}

/// Outcome of the checksum check for a framed sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumStatus {
    /// The sentence carried no `*CC` suffix.
    Absent,
    /// The embedded checksum matched the content.
    Valid(u8),
    /// The embedded checksum did not match; only returned in
    /// [`ChecksumMode::Advisory`].
    Mismatch {
        /// The checksum calculated from the message content
        expected: u8,
        /// The checksum found in the message
        found: u8,
    },
}

impl ChecksumStatus {
    /// Returns `true` unless the embedded checksum disagreed with the content.
    pub fn is_consistent(&self) -> bool {
        !matches!(self, ChecksumStatus::Mismatch { .. })
    }
}

/// Wraps a content parser with NMEA 0183 framing.
///
/// The returned parser:
/// 1. Validates that input is ASCII-only
/// 2. Expects the message to start with '$'
/// 3. Strips a trailing `\r`, `\n` or `\r\n`
/// 4. Extracts the message content (everything before '*')
/// 5. Parses and validates the checksum according to `cc`
/// 6. Calls `f` on the message content
///
/// The output pairs the content parser's output with the [`ChecksumStatus`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{ChecksumMode, ChecksumStatus, IResult, nmea0183};
/// use nom::Parser;
///
/// fn content(i: &str) -> IResult<&str, usize> {
///     Ok(("", i.len()))
/// }
///
/// let mut strict = nmea0183(ChecksumMode::Required, content);
/// assert!(strict.parse("$GPGGA,data*6A\r\n").is_ok());
/// assert!(strict.parse("$GPGGA,data\r\n").is_err()); // (missing checksum)
/// assert!(strict.parse("$GPGGA,data*99").is_err()); // (wrong checksum)
///
/// let mut advisory = nmea0183(ChecksumMode::Advisory, content);
/// let (_, (_, status)) = advisory.parse("$GPGGA,data*99").unwrap();
/// assert_eq!(status, ChecksumStatus::Mismatch { expected: 0x6A, found: 0x99 });
/// ```
pub fn nmea0183<'a, O, F>(
    cc: ChecksumMode,
    mut f: F,
) -> impl FnMut(&'a str) -> IResult<&'a str, (O, ChecksumStatus)>
where
    F: Parser<&'a str, Output = O, Error = Error<&'a str>>,
{
    move |line: &'a str| {
        if !line.is_ascii() {
            return Err(nom::Err::Error(Error::NonAscii));
        }

        let (i, _) = char::<_, Error<&str>>('$')
            .parse(line)
            .map_err(|_| nom::Err::Error(Error::UnrecognizedSentence(line)))?;
        let (i, _) = line_ending(i)?;

        let (cc_text, data) = alt((take_until("*"), rest)).parse(i)?;
        let (_, found) = checksum_field(cc).parse(cc_text)?;

        let (data, calculated) = checksum(data);

        let status = match found {
            None => ChecksumStatus::Absent,
            Some(found) if found == calculated => ChecksumStatus::Valid(found),
            Some(found) => ChecksumStatus::Mismatch {
                expected: calculated,
                found,
            },
        };

        if let ChecksumStatus::Mismatch { expected, found } = status {
            if cc != ChecksumMode::Advisory {
                return Err(nom::Err::Error(Error::ChecksumMismatch { expected, found }));
            }
            log::debug!("advisory checksum mismatch: calculated {expected:02X}, found {found:02X}");
        }

        let (i, o) = f.parse(data)?;
        Ok((i, (o, status)))
    }
}

/// Parses the `*CC` suffix based on configuration.
///
/// The input is everything from the `*` delimiter onward (or the empty string
/// when the sentence has no delimiter).
///
/// # Returns
///
/// A parser that extracts the checksum value ([`None`] if no checksum present).
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{ChecksumMode, Error, IResult, checksum_field};
/// use nom::Parser;
///
/// let mut parser = checksum_field(ChecksumMode::Required);
/// let result: IResult<_, _> = parser.parse("*51");
/// assert_eq!(result, Ok(("", Some(0x51))));
///
/// let mut parser = checksum_field(ChecksumMode::Optional);
/// assert_eq!(parser.parse(""), Ok(("", None)));
/// assert_eq!(parser.parse("*5G"), Err(nom::Err::Error(Error::InvalidChecksum("5G"))));
/// ```
pub fn checksum_field<'a>(cc: ChecksumMode) -> impl FnMut(&'a str) -> IResult<&'a str, Option<u8>> {
    move |i: &'a str| {
        let (text, has_cc) = match cc {
            ChecksumMode::Required => char('*')
                .map(|_| true)
                .parse(i)
                .map_err(|_: nom::Err<Error<&str>>| nom::Err::Error(Error::InvalidChecksum(i)))?,
            ChecksumMode::Optional | ChecksumMode::Advisory => {
                opt(char('*')).map(|star| star.is_some()).parse(i)?
            }
        };

        if !has_cc {
            return Ok((text, None));
        }

        hex_byte
            .map(Some)
            .parse(text)
            .map_err(|_| nom::Err::Error(Error::InvalidChecksum(text)))
    }
}

/// Strips the line ending from a line.
///
/// A line may end with `\r`, `\n`, `\r\n` or nothing at all: lines handed
/// over by the [`LineAssembler`](crate::LineAssembler) keep their `\r` but
/// lose the `\n`. Anything following the first CR/LF character other than
/// more CR/LF characters is an error.
///
/// # Returns
///
/// The line without its ending, as the *remaining* input.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{IResult, line_ending};
///
/// let result: IResult<_, _> = line_ending("data\r\n");
/// assert_eq!(result, Ok(("data", ())));
///
/// let result: IResult<_, _> = line_ending("data\r");
/// assert_eq!(result, Ok(("data", ())));
///
/// let result: IResult<_, _> = line_ending("data");
/// assert_eq!(result, Ok(("data", ())));
/// ```
pub fn line_ending(i: &str) -> IResult<&str, ()> {
    let (ending, data) = take_till(|c| c == '\r' || c == '\n').parse(i)?;
    let (_, _) = consumed(opt(is_a("\r\n")), ErrorKind::CrLf).parse(ending)?;

    Ok((data, ()))
}

/// Calculates the NMEA 0183 checksum for the given message content.
///
/// The checksum is the XOR of every byte between the '$' prefix and the '*'
/// delimiter, both excluded.
///
/// # Returns
///
/// A tuple of (input, checksum) where:
/// - `input` is returned unchanged (zero-copy)
/// - `checksum` is the calculated XOR value as a u8
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::checksum;
///
/// let (_, cc) = checksum("GPGGA,123456,data");
/// assert_eq!(cc, 0x41);
/// ```
pub fn checksum<I>(input: I) -> (I, u8)
where
    I: Input + AsBytes,
{
    let calculated_checksum = input
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte);

    (input, calculated_checksum)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Decodes exactly two hexadecimal digits, either case.
fn hex_byte(i: &str) -> IResult<&str, u8> {
    let (rest, cc) = consumed(take(2u8), ErrorKind::Count).parse(i)?;
    let (_, cc) = consumed(hex_digit0, ErrorKind::IsA).parse(cc)?;
    let (_, cc) = hex_u32(cc)?;

    Ok((rest, cc as u8))
}
