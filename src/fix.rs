//! # Fix State
//!
//! The record holding the most recent navigation data decoded from GGA and
//! RMC sentences.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sentences::{EastWest, Gga, NorthSouth, Quality, Rmc, Sentence, Status};

/// Maximum length of a raw latitude or longitude field.
pub const COORDINATE_CAPACITY: usize = 16;

/// A latitude or longitude kept in its native `ddmm.mmmm` / `dddmm.mmmm`
/// text form.
///
/// No conversion to decimal degrees takes place.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Coordinate(heapless::String<COORDINATE_CAPACITY>);

impl Coordinate {
    /// Wraps the raw field text, or returns `None` if it does not fit.
    pub fn new(text: &str) -> Option<Self> {
        let mut raw = heapless::String::new();
        raw.push_str(text).ok()?;
        Some(Self(raw))
    }

    /// The raw field text, empty if no value has been decoded.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw `ddmm.mmmm` number, `0.0` when empty.
    pub fn value(&self) -> f64 {
        self.0.parse().unwrap_or(0.0)
    }
}

impl PartialEq<str> for Coordinate {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Coordinate {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Time of day decoded from a `hhmmss.sss` field.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UtcTime {
    pub hour: u8,
    pub minute: u8,
    pub seconds: u8,
    pub milliseconds: u16,
}

/// Date decoded from a `ddmmyy` field; the year keeps its two digits.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixDate {
    pub day: u8,
    pub month: u8,
    pub year: u8,
}

/// The latest navigation fix.
///
/// Every numeric field starts at zero, coordinates start empty and `fix`
/// starts `false`. Only [`FixState::apply`] writes it, and only with a
/// sentence that decoded completely, so a failed parse never leaves it
/// half-updated.
///
/// Fields that a sentence leaves empty are written as zero (or an empty
/// coordinate, or no hemisphere).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FixState {
    /// UTC hour
    pub hour: u8,
    /// UTC minute
    pub minute: u8,
    /// UTC second
    pub seconds: u8,
    /// Milliseconds within the UTC second
    pub milliseconds: u16,
    /// Day of month
    pub day: u8,
    /// Month
    pub month: u8,
    /// Two-digit year
    pub year: u8,
    /// Latitude, `ddmm.mmmm`
    pub latitude: Coordinate,
    /// Latitude hemisphere
    pub lat: Option<NorthSouth>,
    /// Longitude, `dddmm.mmmm`
    pub longitude: Coordinate,
    /// Longitude hemisphere
    pub lon: Option<EastWest>,
    /// RMC status: `true` for `A`, `false` for `V`
    pub fix: bool,
    /// GGA fix quality code
    pub fix_quality: u8,
    /// Number of satellites in use
    pub satellites: u8,
    /// Horizontal Dilution of Precision
    pub hdop: f32,
    /// Altitude above mean sea level in meters
    pub altitude: f32,
    /// Height of the geoid above the WGS-84 ellipsoid in meters
    pub geoid_height: f32,
    /// Speed over ground in knots
    pub speed: f32,
    /// Course over ground in degrees
    pub course: f32,
    /// Magnetic variation in degrees; RMC decoding stops before this field,
    /// so it keeps its initial value.
    pub magnetic_variation: f32,
    /// Direction of the magnetic variation
    pub mag: Option<EastWest>,
}

impl FixState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a fully decoded sentence.
    pub fn apply(&mut self, sentence: &Sentence) {
        match sentence {
            Sentence::Gga(gga) => self.apply_gga(gga),
            Sentence::Rmc(rmc) => self.apply_rmc(rmc),
        }
    }

    fn apply_gga(&mut self, gga: &Gga) {
        self.set_time(gga.time);
        self.latitude = gga.latitude.clone().unwrap_or_default();
        self.lat = gga.lat;
        self.longitude = gga.longitude.clone().unwrap_or_default();
        self.lon = gga.lon;
        self.fix_quality = gga.fix_quality.unwrap_or_default();
        self.satellites = gga.satellites.unwrap_or_default();
        self.hdop = gga.hdop.unwrap_or_default();
        self.altitude = gga.altitude.unwrap_or_default();
        self.geoid_height = gga.geoid_height.unwrap_or_default();
    }

    fn apply_rmc(&mut self, rmc: &Rmc) {
        self.set_time(rmc.time);
        self.fix = rmc.status == Status::Valid;
        self.latitude = rmc.latitude.clone().unwrap_or_default();
        self.lat = rmc.lat;
        self.longitude = rmc.longitude.clone().unwrap_or_default();
        self.lon = rmc.lon;
        self.speed = rmc.speed.unwrap_or_default();
        self.course = rmc.course.unwrap_or_default();

        let date = rmc.date.unwrap_or_default();
        self.day = date.day;
        self.month = date.month;
        self.year = date.year;
    }

    fn set_time(&mut self, time: Option<UtcTime>) {
        let time = time.unwrap_or_default();
        self.hour = time.hour;
        self.minute = time.minute;
        self.seconds = time.seconds;
        self.milliseconds = time.milliseconds;
    }

    /// Returns `true` when the last RMC sentence reported a valid fix.
    pub fn has_fix(&self) -> bool {
        self.fix
    }

    /// The GGA fix quality code as a [`Quality`], if the code is known.
    pub fn quality(&self) -> Option<Quality> {
        Quality::try_from(self.fix_quality).ok()
    }

    /// The UTC time of day.
    #[cfg(feature = "time")]
    pub fn time(&self) -> Option<time::Time> {
        time::Time::from_hms_milli(self.hour, self.minute, self.seconds, self.milliseconds).ok()
    }

    /// The UTC date, `None` until an RMC sentence carried a valid date.
    ///
    /// Two-digit years from 83 onward are read as 19xx, the rest as 20xx.
    #[cfg(feature = "time")]
    pub fn date(&self) -> Option<time::Date> {
        let month = time::Month::try_from(self.month).ok()?;
        let year = match self.year {
            83..=99 => 1900 + i32::from(self.year),
            _ => 2000 + i32::from(self.year),
        };

        time::Date::from_calendar_date(year, month, self.day).ok()
    }
}
