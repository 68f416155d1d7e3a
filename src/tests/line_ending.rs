use nom::{Err, Parser, error::ErrorKind};

use crate::{ChecksumMode, Error, IResult, line_ending, nmea0183};

#[test]
fn test_line_ending() {
    for i in ["12345\r\n", "12345\r", "12345\n", "12345", "12345\n\r"] {
        let res: IResult<_, _> = line_ending(i);
        assert_eq!(res, Ok(("12345", ())), "{i:?}");
    }

    let res: IResult<_, _> = line_ending("");
    assert_eq!(res, Ok(("", ())));
}

#[test]
fn test_line_ending_trailing_data() {
    let res: IResult<_, _> = line_ending("12345\r\n6");
    assert!(res.is_err());
    let err = res.unwrap_err();
    if let Err::Error(Error::ParsingError(e)) = err {
        assert_eq!(e.code, ErrorKind::CrLf);
    } else {
        panic!("Unexpected error")
    }

    let res: IResult<_, _> = line_ending("123\r45");
    assert!(matches!(res, Err(Err::Error(Error::ParsingError(_)))));
}

#[test]
fn test_framing_line_endings() {
    fn content(i: &str) -> IResult<&str, &str> {
        Ok(("", i))
    }

    let mut parser = nmea0183(ChecksumMode::Required, content);

    for line in [
        "$GPGGA,data*6A\r\n",
        "$GPGGA,data*6A\r",
        "$GPGGA,data*6A\n",
        "$GPGGA,data*6A",
    ] {
        let res = parser.parse(line);
        assert!(res.is_ok(), "{line:?} => {res:?}");
    }

    // A checksum cannot follow the line ending
    let res = parser.parse("$GPGGA,data\r\n*6A");
    assert!(res.is_err());
}
