//! # Command Responses
//!
//! Splits acknowledgement-style replies (e.g. `$PMTK001,314,3*36`) into
//! numeric fields.

use nom::{Parser, bytes::complete::take_till, character::complete::char, sequence::preceded};

use crate::IResult;

/// Maximum number of fields decoded from one response.
pub const MAX_RESPONSE_FIELDS: usize = 25;

/// The decoded fields of a command response.
pub type ResponseFields = heapless::Vec<u16, MAX_RESPONSE_FIELDS>;

/// Splits a command response into numeric fields.
///
/// Everything up to the first comma (the sentence identifier) is skipped.
/// Each following comma-separated field is folded into a `u16`: every
/// character first multiplies the running value by ten, then a digit is
/// added to it while any other character replaces it with its character code.
/// Splitting stops at `*`, at a NUL, at the end of input, or after
/// [`MAX_RESPONSE_FIELDS`] fields. The number of fields processed is the
/// length of the result.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::parse_response;
///
/// let fields = parse_response("$PMTK001,314,3*36");
/// assert_eq!(fields.as_slice(), &[314, 3]);
///
/// let fields = parse_response("$PMTK705,AXN_3.8");
/// assert_eq!(fields.len(), 1);
///
/// assert!(parse_response("$PMTK000*32").is_empty());
/// ```
pub fn parse_response(response: &str) -> ResponseFields {
    let mut fields = ResponseFields::new();

    let Some(start) = response.find(',') else {
        return fields;
    };

    let mut i = &response[start..];
    while !fields.is_full() {
        let Ok((rest, token)) = response_field(i) else {
            break;
        };

        if fields.push(field_value(token)).is_err() {
            break;
        }
        i = rest;
    }

    fields
}

fn response_field(i: &str) -> IResult<&str, &str> {
    preceded(char(','), take_till(|c| matches!(c, ',' | '*' | '\0'))).parse(i)
}

fn field_value(token: &str) -> u16 {
    token.bytes().fold(0u16, |value, c| {
        let value = value.wrapping_mul(10);
        if c.is_ascii_digit() {
            value.wrapping_add(u16::from(c - b'0'))
        } else {
            u16::from(c)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value() {
        assert_eq!(field_value(""), 0);
        assert_eq!(field_value("314"), 314);
        assert_eq!(field_value("A"), u16::from(b'A'));
        assert_eq!(field_value("1A"), u16::from(b'A'));
        assert_eq!(field_value("A5"), u16::from(b'A') * 10 + 5);
        assert_eq!(field_value("65536"), 0);
    }

    #[test]
    fn test_parse_response() {
        assert_eq!(parse_response("$PMTK001,314,3*36").as_slice(), &[314, 3]);
        assert_eq!(parse_response("$PMTK001,,7").as_slice(), &[0, 7]);
        assert_eq!(parse_response("$PMTK001,1\02,3").as_slice(), &[1]);
        assert!(parse_response("no fields here").is_empty());
        assert!(parse_response("").is_empty());
        assert_eq!(parse_response("$X,").as_slice(), &[0]);
    }

    #[test]
    fn test_parse_response_caps_fields() {
        let response = format!("$PMTK{}", ",1".repeat(MAX_RESPONSE_FIELDS + 5));
        let fields = parse_response(&response);
        assert_eq!(fields.len(), MAX_RESPONSE_FIELDS);
        assert!(fields.iter().all(|&value| value == 1));
    }
}
