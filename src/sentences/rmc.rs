use nom::Parser;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Coordinate, Error, FixDate, IResult, UtcTime,
    parsing::next_field,
    sentences::{
        EastWest, NorthSouth, Parsable, Status,
        parse::{coordinate, date, decimal, utc_time},
    },
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// Fields 1 to 9 are decoded. The status (2) is mandatory; magnetic
/// variation and later fields are not decoded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Rmc {
    /// Fix time in UTC
    pub time: Option<UtcTime>,
    /// Status Mode Indicator
    pub status: Status,
    /// Latitude, `ddmm.mmmm`
    pub latitude: Option<Coordinate>,
    /// Latitude hemisphere
    pub lat: Option<NorthSouth>,
    /// Longitude, `dddmm.mmmm`
    pub longitude: Option<Coordinate>,
    /// Longitude hemisphere
    pub lon: Option<EastWest>,
    /// Speed over ground in knots
    pub speed: Option<f32>,
    /// Course over ground in degrees
    pub course: Option<f32>,
    /// Fix date in UTC
    pub date: Option<FixDate>,
}

impl Parsable for Rmc {
    fn parser(i: &str) -> IResult<&str, Self> {
        let (i, time) = next_field(utc_time).parse(i)?;
        let (i, status) = next_field(Status::parser).parse(i)?;
        let Some(status) = status else {
            return Err(nom::Err::Error(Error::MalformedField("")));
        };
        let (i, latitude) = next_field(coordinate).parse(i)?;
        let (i, lat) = next_field(NorthSouth::parser).parse(i)?;
        let (i, longitude) = next_field(coordinate).parse(i)?;
        let (i, lon) = next_field(EastWest::parser).parse(i)?;
        let (i, speed) = next_field(decimal).parse(i)?;
        let (i, course) = next_field(decimal).parse(i)?;
        let (i, date) = next_field(date).parse(i)?;

        Ok((
            i,
            Self {
                time,
                status,
                latitude,
                lat,
                longitude,
                lon,
                speed,
                course,
                date,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rmc_parsing() {
        let (rest, rmc) =
            Rmc::parser(",123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W").unwrap();

        assert_eq!(rest, ",003.1,W");
        assert_eq!(
            rmc,
            Rmc {
                time: Some(UtcTime {
                    hour: 12,
                    minute: 35,
                    seconds: 19,
                    milliseconds: 0
                }),
                status: Status::Valid,
                latitude: Coordinate::new("4807.038"),
                lat: Some(NorthSouth::North),
                longitude: Coordinate::new("01131.000"),
                lon: Some(EastWest::East),
                speed: Some(22.4),
                course: Some(84.4),
                date: Some(FixDate {
                    day: 23,
                    month: 3,
                    year: 94
                }),
            }
        );
    }

    #[test]
    fn test_rmc_void_without_position() {
        let (_, rmc) = Rmc::parser(",235959,V,,,,,,,311299,,,N").unwrap();
        assert_eq!(rmc.status, Status::Invalid);
        assert_eq!(rmc.latitude, None);
        assert_eq!(rmc.lon, None);
        assert_eq!(rmc.speed, None);
        assert_eq!(
            rmc.date,
            Some(FixDate {
                day: 31,
                month: 12,
                year: 99
            })
        );
    }

    #[test]
    fn test_rmc_invalid() {
        let cases = [
            (",123519,X,4807.038,N,01131.000,E,022.4,084.4,230394", "X"),
            (",123519,,4807.038,N,01131.000,E,022.4,084.4,230394", ""),
            (",123519,A,4807.038,E,01131.000,E,022.4,084.4,230394", "E"),
            (",123519,A,4807.038,N,01131.000,S,022.4,084.4,230394", "S"),
            (",123519,A,4807.038,N,01131.000,E,abc,084.4,230394", "abc"),
            (",123519,A,4807.038,N,01131.000,E,Infinity,084.4,230394", "Infinity"),
            (",123519,A,4807.038,N,01131.000,E,022.4,NaN,230394", "NaN"),
            (",123519,A,4807.038,N,01131.000,E,2e2,084.4,230394", "2e2"),
            (",123519,A,4807.038,N,01131.000,E,022.4,084.4,2303941", "2303941"),
        ];

        for (input, field) in cases {
            assert_eq!(
                Rmc::parser(input).unwrap_err(),
                nom::Err::Error(Error::MalformedField(field)),
                "{input:?}"
            );
        }
    }
}
