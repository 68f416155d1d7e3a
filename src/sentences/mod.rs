mod gga;
pub mod parse;
mod rmc;

pub use gga::Gga;
pub use rmc::Rmc;

use nom::{Parser, bytes::complete::take_till};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, IResult, TalkerMode};

/// A trait for types that can be parsed from a string input.
///
/// This trait defines a single method `parser` that takes a string slice
/// and returns an `IResult` containing the remaining input and the parsed value.
///
/// It is implemented by the sentence structs and by the single-character
/// marker enums used inside them.
pub trait Parsable: Sized {
    /// Parses the input and returns a result.
    ///
    /// # Returns
    ///
    /// Returns an [`IResult`] containing:
    /// - On success: A tuple of `(remaining_input, parsed_value)`, where `remaining_input`
    ///   is the unparsed portion of the input and `parsed_value` is the successfully parsed
    ///   instance of `Self`.
    /// - On failure: An [`Error`] indicating the parsing error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nmea0183_fix::sentences::{Gga, Parsable};
    ///
    /// // GGA fields, starting at the comma after the sentence identifier
    /// let content = ",123456.00,4916.29,N,12311.76,W,1,08,0.9,545.4,M,46.9,M,,";
    /// let result = Gga::parser(content);
    /// assert!(result.is_ok());
    /// ```
    fn parser(input: &str) -> IResult<&str, Self>;
}

/// The sentence kinds this crate decodes.
///
/// The identifier is decoded from the three letters following the talker,
/// by exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceId {
    /// Global Positioning System Fix Data
    Gga,
    /// Recommended Minimum Navigation Information
    Rmc,
    /// Any other sentence
    Unsupported,
}

impl From<&str> for SentenceId {
    fn from(kind: &str) -> Self {
        match kind {
            "GGA" => SentenceId::Gga,
            "RMC" => SentenceId::Rmc,
            _ => SentenceId::Unsupported,
        }
    }
}

/// The two-letter talker identifier in front of the sentence kind, e.g. `GP`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Talker(heapless::String<2>);

impl Talker {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A decoded GGA or RMC sentence.
///
/// Decoding is staged: a `Sentence` only exists once every field it carries
/// has been decoded, and [`FixState::apply`](crate::FixState::apply) commits
/// it in one go.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Sentence {
    /// Global Positioning System Fix Data
    Gga(Gga),
    /// Recommended Minimum Navigation Information
    Rmc(Rmc),
}

impl Sentence {
    pub fn id(&self) -> SentenceId {
        match self {
            Sentence::Gga(_) => SentenceId::Gga,
            Sentence::Rmc(_) => SentenceId::Rmc,
        }
    }
}

/// Returns a content parser that dispatches on the sentence identifier.
///
/// The input is the sentence content between `$` and `*`. The first field
/// must be exactly a talker (accepted by `talkers`) followed by `GGA` or `RMC`;
/// anything else is [`Error::UnrecognizedSentence`] holding that field.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{Error, TalkerMode, sentences::{Sentence, sentence}};
/// use nom::Parser;
///
/// let mut parser = sentence(TalkerMode::GpsOnly);
///
/// let (_, (talker, parsed)) = parser
///     .parse("GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W")
///     .unwrap();
/// assert_eq!(talker.as_str(), "GP");
/// assert!(matches!(parsed, Sentence::Rmc(_)));
///
/// let result = parser.parse("GPGSV,3,1,11");
/// assert_eq!(result.unwrap_err(), nom::Err::Error(Error::UnrecognizedSentence("GPGSV")));
///
/// // The identifier must match exactly, not just contain `GPGGA`.
/// let result = parser.parse("XGPGGA,123519");
/// assert!(result.is_err());
/// ```
pub fn sentence<'a>(talkers: TalkerMode) -> impl FnMut(&'a str) -> IResult<&'a str, (Talker, Sentence)> {
    move |i: &'a str| {
        let (i, identifier) = take_till(|c| c == ',').parse(i)?;
        let unrecognized = || nom::Err::Error(Error::UnrecognizedSentence(identifier));

        if identifier.len() != 5 || !identifier.is_ascii() {
            return Err(unrecognized());
        }

        let (talker, kind) = identifier.split_at(2);
        if !talkers.accepts(talker) {
            return Err(unrecognized());
        }

        log::trace!("dispatching {identifier} sentence");

        let (i, sentence) = match SentenceId::from(kind) {
            SentenceId::Gga => Gga::parser.map(Sentence::Gga).parse(i)?,
            SentenceId::Rmc => Rmc::parser.map(Sentence::Rmc).parse(i)?,
            SentenceId::Unsupported => return Err(unrecognized()),
        };

        let mut id = heapless::String::new();
        id.push_str(talker).map_err(|_| unrecognized())?;

        Ok((i, (Talker(id), sentence)))
    }
}

macro_rules! parsable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// The character this value is encoded as.
            pub fn as_char(&self) -> char {
                match self {
                    $(Self::$variant => $char,)*
                }
            }
        }

        impl Parsable for $name {
            fn parser(i: &str) -> IResult<&str, Self> {
                nom::branch::alt(($(
                    nom::character::complete::char($char).map(|_| Self::$variant),
                )*)).parse(i)
            }
        }
    };
}

parsable_enum! {
    /// Status Mode Indicator
    pub enum Status {
        /// A - Valid
        'A' => Valid,
        /// V - Invalid
        'V' => Invalid,
    }
}

parsable_enum! {
    /// Latitude hemisphere
    pub enum NorthSouth {
        /// N - North
        'N' => North,
        /// S - South
        'S' => South,
    }
}

parsable_enum! {
    /// Longitude hemisphere, also used for magnetic variation
    pub enum EastWest {
        /// E - East
        'E' => East,
        /// W - West
        'W' => West,
    }
}

/// Quality of the GPS fix, as reported in the GGA fix quality field
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    /// 0 - Fix not available
    NoFix,
    /// 1 - GPS fix
    GPSFix,
    /// 2 - Differential GPS fix
    DGPSFix,
    /// 3 - PPS fix
    PPSFix,
    /// 4 - Real Time Kinematic
    RTK,
    /// 5 - Float RTK
    FloatRTK,
    /// 6 - estimated (dead reckoning)
    Estimated,
    /// 7 - Manual input mode
    Manual,
    /// 8 - Simulation mode
    Simulation,
}

impl TryFrom<u8> for Quality {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Quality::NoFix,
            1 => Quality::GPSFix,
            2 => Quality::DGPSFix,
            3 => Quality::PPSFix,
            4 => Quality::RTK,
            5 => Quality::FloatRTK,
            6 => Quality::Estimated,
            7 => Quality::Manual,
            8 => Quality::Simulation,
            _ => return Err(code),
        })
    }
}
