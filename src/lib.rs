//! # NMEA 0183 Fix Decoder
//!
//! This library turns a raw NMEA 0183 byte stream from a GPS receiver into a
//! navigation fix:
//! `$HHHHH,D1,D2,...,Dn*CC\r\n`
//!
//! It is built from small pieces that can be used on their own:
//! - [`LineAssembler`] collects single bytes into complete lines using two
//!   fixed buffers
//! - [`nmea0183`] handles the framing: line ending, `$` and the `*CC`
//!   checksum, checked according to [`ChecksumMode`]
//! - [`sentences`] decodes `GGA` and `RMC` sentences, field by field
//! - [`FixState`] holds the latest fix and is only updated by sentences that
//!   decoded completely
//! - [`SentenceParser`] and [`Gps`] tie these together
//! - [`parse_response`] splits receiver command acknowledgements into
//!   numeric fields
//!
//! Nothing allocates on the heap while decoding.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_fix::{ChecksumMode, Gps, ParserConfig};
//!
//! let config = ParserConfig::default().with_checksum(ChecksumMode::Required);
//! let mut gps: Gps = Gps::new(config);
//!
//! let stream = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";
//! for &byte in stream {
//!     gps.ingest(byte);
//!
//!     if let Some(result) = gps.update() {
//!         // Handle result...
//!         assert!(result.is_ok());
//!     }
//! }
//!
//! let fix = gps.fix();
//! assert_eq!((fix.hour, fix.minute, fix.seconds), (12, 35, 19));
//! assert_eq!(fix.altitude, 545.4);
//! ```

mod assembler;
mod config;
pub mod error;
mod fix;
mod gps;
mod nmea0183;
mod parser;
pub mod parsing;
mod response;
pub mod sentences;

pub use assembler::{LineAssembler, MAX_LINE_LENGTH};
pub use config::{ParserConfig, TalkerMode};
pub use error::{Error, IResult};
pub use fix::{COORDINATE_CAPACITY, Coordinate, FixDate, FixState, UtcTime};
pub use gps::{ByteSource, Gps, Statistics};
pub use nmea0183::*;
pub use parser::{Parsed, SentenceParser};
pub use response::{MAX_RESPONSE_FIELDS, ResponseFields, parse_response};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
