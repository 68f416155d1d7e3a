//! # Parser Configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ChecksumMode;

/// Which talker identifiers are accepted in front of `GGA` and `RMC`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TalkerMode {
    #[default]
    /// Only `GP` (GPS) sentences, i.e. `GPGGA` and `GPRMC`.
    GpsOnly,
    /// Any two-letter talker, e.g. `GN` from multi-constellation receivers.
    Any,
}

impl TalkerMode {
    /// Returns `true` if a sentence from `talker` should be decoded.
    pub fn accepts(&self, talker: &str) -> bool {
        match self {
            TalkerMode::GpsOnly => talker == "GP",
            TalkerMode::Any => talker.len() == 2 && talker.bytes().all(|b| b.is_ascii_uppercase()),
        }
    }
}

/// Settings for a [`SentenceParser`](crate::SentenceParser).
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{ChecksumMode, ParserConfig, TalkerMode};
///
/// let config = ParserConfig::default()
///     .with_checksum(ChecksumMode::Required)
///     .with_talker(TalkerMode::Any);
///
/// assert_eq!(config.checksum, ChecksumMode::Required);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// How the `*CC` suffix is checked
    pub checksum: ChecksumMode,
    /// Which talkers are decoded
    pub talker: TalkerMode,
}

impl ParserConfig {
    pub fn with_checksum(mut self, checksum: ChecksumMode) -> Self {
        self.checksum = checksum;
        self
    }

    pub fn with_talker(mut self, talker: TalkerMode) -> Self {
        self.talker = talker;
        self
    }
}
