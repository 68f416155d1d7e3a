//! # Error Types
//!
//! This module defines the error types used throughout the sentence decoder.

use nom::error::{ErrorKind, FromExternalError, ParseError};
use std::fmt::{self, Debug};

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Represents all possible errors that can occur while decoding a line.
///
/// None of these are fatal: the caller gets the error back, may drop the
/// line, and keeps feeding bytes. The [`FixState`](crate::FixState) is left
/// untouched whenever a parse fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Error<I, E = nom::error::Error<I>> {
    /// The line contains non-ASCII bytes.
    ///
    /// NMEA sentences are ASCII-only; anything else is line noise.
    NonAscii,

    /// The checksum of the sentence did not match its content.
    ///
    /// Contains both the expected checksum (calculated from the message content)
    /// and the actual checksum found in the message.
    ChecksumMismatch {
        /// The checksum calculated from the message content
        expected: u8,
        /// The checksum found in the message
        found: u8,
    },

    /// The text after `*` is not exactly two hexadecimal digits.
    ///
    /// Contains the offending checksum text.
    InvalidChecksum(I),

    /// A field held an unexpected value.
    ///
    /// Raised for a hemisphere or status marker outside its allowed set, or
    /// for a numeric field that does not decode. Contains the field text.
    MalformedField(I),

    /// The line does not carry a recognized sentence.
    ///
    /// Contains the talker and sentence identifier that was found, or the
    /// whole line when it does not start with `$`.
    UnrecognizedSentence(I),

    /// The line was longer than the assembler capacity and lost its tail.
    Truncated,

    /// The sentence could not be parsed because its format was invalid.
    ///
    /// This wraps nom's standard parsing errors, for instance when a comma
    /// separating two fields is missing.
    ParsingError(E),
}

impl<I, E> Error<I, E> {
    /// Returns a short, stable name for the error kind, handy for counters
    /// and log lines.
    pub fn kind_str(&self) -> &'static str {
        match self {
            Error::NonAscii => "non-ascii",
            Error::ChecksumMismatch { .. } => "checksum-mismatch",
            Error::InvalidChecksum(_) => "invalid-checksum",
            Error::MalformedField(_) => "malformed-field",
            Error::UnrecognizedSentence(_) => "unrecognized-sentence",
            Error::Truncated => "truncated",
            Error::ParsingError(_) => "parsing-error",
        }
    }
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}

impl<I, E> fmt::Display for Error<I, E>
where
    I: fmt::Display,
    E: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NonAscii => write!(f, "line contains non-ASCII bytes"),
            Error::ChecksumMismatch { expected, found } => write!(
                f,
                "checksum mismatch: calculated {expected:02X}, found {found:02X}"
            ),
            Error::InvalidChecksum(i) => write!(f, "invalid checksum field \"{i}\""),
            Error::MalformedField(i) => write!(f, "malformed field \"{i}\""),
            Error::UnrecognizedSentence(i) => write!(f, "unrecognized sentence \"{i}\""),
            Error::Truncated => write!(f, "line exceeded the buffer capacity"),
            Error::ParsingError(e) => write!(f, "parsing error: {e:?}"),
        }
    }
}

impl<I, E> std::error::Error for Error<I, E>
where
    I: fmt::Debug + fmt::Display,
    E: Debug,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e: Error<&str> = Error::ChecksumMismatch {
            expected: 0x0A,
            found: 0x47,
        };
        assert_eq!(e.to_string(), "checksum mismatch: calculated 0A, found 47");

        let e: Error<&str> = Error::MalformedField("X");
        assert_eq!(e.to_string(), "malformed field \"X\"");
        assert_eq!(e.kind_str(), "malformed-field");
    }

    #[test]
    fn test_nom_errors_are_wrapped() {
        let e: Error<&str> = Error::from_error_kind(",", ErrorKind::Char);
        assert_eq!(
            e,
            Error::ParsingError(nom::error::Error::new(",", ErrorKind::Char))
        );
    }
}
