use nom::{Parser, character::complete::u8};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Coordinate, IResult, UtcTime,
    parsing::{next_field, skip_field},
    sentences::{
        EastWest, NorthSouth, Parsable,
        parse::{coordinate, decimal, utc_time},
    },
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// Fields 1 to 9 and 11 are decoded; the altitude unit (10) is skipped and
/// anything after the geoid height is ignored.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Gga {
    /// Fix time in UTC
    pub time: Option<UtcTime>,
    /// Latitude, `ddmm.mmmm`
    pub latitude: Option<Coordinate>,
    /// Latitude hemisphere
    pub lat: Option<NorthSouth>,
    /// Longitude, `dddmm.mmmm`
    pub longitude: Option<Coordinate>,
    /// Longitude hemisphere
    pub lon: Option<EastWest>,
    /// GPS Quality Indicator
    pub fix_quality: Option<u8>,
    /// Number of satellites in use
    pub satellites: Option<u8>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: Option<f32>,
    /// Geoidal separation in meters
    pub geoid_height: Option<f32>,
}

impl Parsable for Gga {
    fn parser(i: &str) -> IResult<&str, Self> {
        let (i, time) = next_field(utc_time).parse(i)?;
        let (i, latitude) = next_field(coordinate).parse(i)?;
        let (i, lat) = next_field(NorthSouth::parser).parse(i)?;
        let (i, longitude) = next_field(coordinate).parse(i)?;
        let (i, lon) = next_field(EastWest::parser).parse(i)?;
        let (i, fix_quality) = next_field(u8).parse(i)?;
        let (i, satellites) = next_field(u8).parse(i)?;
        let (i, hdop) = next_field(decimal).parse(i)?;
        let (i, altitude) = next_field(decimal).parse(i)?;
        let (i, _) = skip_field(i)?;
        let (i, geoid_height) = next_field(decimal).parse(i)?;

        Ok((
            i,
            Self {
                time,
                latitude,
                lat,
                longitude,
                lon,
                fix_quality,
                satellites,
                hdop,
                altitude,
                geoid_height,
            },
        ))
    }
}
