//! Decoders for the individual field types found in GGA and RMC sentences.
//!
//! Each decoder is meant to run over exactly one field through
//! [`field`](crate::parsing::field), which turns a rejected or partially
//! consumed field into [`Error::MalformedField`](crate::Error::MalformedField).

use nom::{
    Parser,
    bytes::complete::take_while1,
    character::complete::{char, digit0, digit1},
    combinator::{map_res, opt, verify},
    sequence::preceded,
};

use crate::{Coordinate, Error, FixDate, IResult, UtcTime};

/// Decodes `hhmmss` with an optional fraction of a second.
///
/// The integer part is split positionally: hours are `t / 10000`, minutes
/// `(t % 10000) / 100` and seconds `t % 100`. Milliseconds come from the
/// first three fraction digits, so `.5` is 500 ms and `.1234` is 123 ms.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{IResult, UtcTime, sentences::parse::utc_time};
///
/// let result: IResult<_, _> = utc_time("123519.25");
/// assert_eq!(
///     result,
///     Ok(("", UtcTime { hour: 12, minute: 35, seconds: 19, milliseconds: 250 }))
/// );
/// ```
pub fn utc_time(i: &str) -> IResult<&str, UtcTime> {
    let (i, (t, fraction)) = (six_digits, opt(preceded(char('.'), digit0))).parse(i)?;

    let fraction = fraction.unwrap_or_default();
    let digits = &fraction[..fraction.len().min(3)];
    let milliseconds = match digits {
        "" => 0,
        _ => {
            let (_, value) = nom::character::complete::u16(digits)?;
            value * 10u16.pow(3 - digits.len() as u32)
        }
    };

    Ok((
        i,
        UtcTime {
            hour: (t / 10000) as u8,
            minute: ((t % 10000) / 100) as u8,
            seconds: (t % 100) as u8,
            milliseconds,
        },
    ))
}

/// Decodes a `ddmmyy` date, split positionally like [`utc_time`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{FixDate, IResult, sentences::parse::date};
///
/// let result: IResult<_, _> = date("230394");
/// assert_eq!(result, Ok(("", FixDate { day: 23, month: 3, year: 94 })));
/// ```
pub fn date(i: &str) -> IResult<&str, FixDate> {
    let (i, d) = six_digits(i)?;

    Ok((
        i,
        FixDate {
            day: (d / 10000) as u8,
            month: ((d % 10000) / 100) as u8,
            year: (d % 100) as u8,
        },
    ))
}

/// Takes a `ddmm.mmmm` or `dddmm.mmmm` field verbatim.
///
/// The field must look like a non-negative decimal number and fit in a
/// [`Coordinate`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{IResult, sentences::parse::coordinate};
///
/// let result: IResult<_, _> = coordinate("4807.038");
/// let (rest, latitude) = result.unwrap();
/// assert_eq!(rest, "");
/// assert_eq!(latitude, "4807.038");
/// ```
pub fn coordinate(i: &str) -> IResult<&str, Coordinate> {
    let (rest, raw) = verify(
        take_while1(|c: char| c.is_ascii_digit() || c == '.'),
        |raw: &str| is_unsigned_decimal(raw),
    )
    .parse(i)?;

    match Coordinate::new(raw) {
        Some(coordinate) => Ok((rest, coordinate)),
        None => Err(nom::Err::Error(Error::MalformedField(raw))),
    }
}

/// Decodes a plain decimal number, `[-]digits[.digits]`.
///
/// Exponents, `nan` and `inf` are not NMEA numbers and are rejected.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{IResult, sentences::parse::decimal};
///
/// let result: IResult<_, _> = decimal("-12.5,M");
/// assert_eq!(result, Ok((",M", -12.5)));
///
/// assert!(decimal("nan").is_err());
/// ```
pub fn decimal(i: &str) -> IResult<&str, f32> {
    map_res(
        verify(
            take_while1(|c: char| c.is_ascii_digit() || c == '.' || c == '-'),
            |text: &str| is_unsigned_decimal(text.strip_prefix('-').unwrap_or(text)),
        ),
        |text: &str| text.parse::<f32>(),
    )
    .parse(i)
}

/// `digits[.digits]`, the fraction possibly empty.
fn is_unsigned_decimal(text: &str) -> bool {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));

    !whole.is_empty()
        && whole.bytes().all(|c| c.is_ascii_digit())
        && fraction.bytes().all(|c| c.is_ascii_digit())
}

/// One to six decimal digits, as a number.
fn six_digits(i: &str) -> IResult<&str, u32> {
    verify(digit1, |digits: &str| digits.len() <= 6)
        .and_then(nom::character::complete::u32)
        .parse(i)
}
