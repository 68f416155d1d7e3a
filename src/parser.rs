//! # Sentence Parser
//!
//! Ties framing, dispatch and field decoding together and commits the
//! result to a [`FixState`].

use nom::error::{ErrorKind, ParseError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    ChecksumStatus, Error, FixState, ParserConfig,
    nmea0183,
    sentences::{Sentence, Talker, sentence},
};

/// A successfully decoded line.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// The talker the sentence came from, e.g. `GP`
    pub talker: Talker,
    /// The decoded sentence
    pub sentence: Sentence,
    /// What the checksum check found
    pub checksum: ChecksumStatus,
}

/// Decodes GGA and RMC lines.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{FixState, ParserConfig, SentenceParser};
///
/// let parser = SentenceParser::new(ParserConfig::default());
/// let mut fix = FixState::new();
///
/// let line = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r";
/// parser.parse(line, &mut fix).unwrap();
///
/// assert_eq!(fix.hour, 12);
/// assert_eq!(fix.latitude, "4807.038");
/// assert_eq!(fix.satellites, 8);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceParser {
    config: ParserConfig,
}

impl SentenceParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Decodes `line` and, on success, commits it to `fix`.
    ///
    /// On failure `fix` is left exactly as it was.
    pub fn parse<'a>(&self, line: &'a [u8], fix: &mut FixState) -> Result<Parsed, Error<&'a str>> {
        let parsed = self.decode(line)?;
        fix.apply(&parsed.sentence);
        Ok(parsed)
    }

    /// Like [`parse`](Self::parse), for text input.
    pub fn parse_str<'a>(&self, line: &'a str, fix: &mut FixState) -> Result<Parsed, Error<&'a str>> {
        let parsed = self.decode_str(line)?;
        fix.apply(&parsed.sentence);
        Ok(parsed)
    }

    /// Decodes `line` without committing it anywhere.
    pub fn decode<'a>(&self, line: &'a [u8]) -> Result<Parsed, Error<&'a str>> {
        if !line.is_ascii() {
            return Err(Error::NonAscii);
        }

        let line = core::str::from_utf8(line).map_err(|_| Error::NonAscii)?;
        self.decode_str(line)
    }

    /// Like [`decode`](Self::decode), for text input.
    pub fn decode_str<'a>(&self, line: &'a str) -> Result<Parsed, Error<&'a str>> {
        let mut parser = nmea0183(self.config.checksum, sentence(self.config.talker));

        match parser(line) {
            Ok((_, ((talker, sentence), checksum))) => {
                log::trace!("decoded {:?} from {}", sentence.id(), talker.as_str());
                Ok(Parsed {
                    talker,
                    sentence,
                    checksum,
                })
            }
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(e),
            Err(nom::Err::Incomplete(_)) => Err(Error::from_error_kind(line, ErrorKind::Complete)),
        }
    }
}
