use nom::{Err, Parser};

use crate::{ChecksumMode, ChecksumStatus, Error, IResult, checksum_field, nmea0183};

fn content(i: &str) -> IResult<&str, &str> {
    Ok(("", i))
}

#[test]
fn test_checksum_field_ok() {
    for cc in [
        ChecksumMode::Required,
        ChecksumMode::Optional,
        ChecksumMode::Advisory,
    ] {
        let res: IResult<_, _> = checksum_field(cc).parse("*1F");
        assert_eq!(res, Ok(("", Some(0x1F))), "{cc:?}");

        let res: IResult<_, _> = checksum_field(cc).parse("*1f");
        assert_eq!(res, Ok(("", Some(0x1F))), "{cc:?}");
    }
}

#[test]
fn test_checksum_field_bad_hex() {
    let cases = ["1F43", "1Fzz", "1", "1z", ""];

    for text in cases {
        let i = format!("*{text}");
        for cc in [
            ChecksumMode::Required,
            ChecksumMode::Optional,
            ChecksumMode::Advisory,
        ] {
            let res: IResult<_, _> = checksum_field(cc).parse(i.as_str());
            assert_eq!(
                res,
                Err(Err::Error(Error::InvalidChecksum(text))),
                "{i:?} {cc:?}"
            );
        }
    }
}

#[test]
fn test_checksum_field_missing() {
    let res: IResult<_, _> = checksum_field(ChecksumMode::Required).parse("");
    assert_eq!(res, Err(Err::Error(Error::InvalidChecksum(""))));

    let res: IResult<_, _> = checksum_field(ChecksumMode::Optional).parse("");
    assert_eq!(res, Ok(("", None)));

    let res: IResult<_, _> = checksum_field(ChecksumMode::Advisory).parse("");
    assert_eq!(res, Ok(("", None)));
}

#[test]
fn test_framing_checksum_status() {
    let mut parser = nmea0183(ChecksumMode::Optional, content);

    let res = parser.parse("$GPGGA,data*6A\r\n");
    assert_eq!(res, Ok(("", ("GPGGA,data", ChecksumStatus::Valid(0x6A)))));

    let res = parser.parse("$GPGGA,data*6a");
    assert_eq!(res, Ok(("", ("GPGGA,data", ChecksumStatus::Valid(0x6A)))));

    let res = parser.parse("$GPGGA,data\r");
    assert_eq!(res, Ok(("", ("GPGGA,data", ChecksumStatus::Absent))));

    let res = parser.parse("$GPGGA,data*6B\r\n");
    assert_eq!(
        res,
        Err(Err::Error(Error::ChecksumMismatch {
            expected: 0x6A,
            found: 0x6B
        }))
    );
}

#[test]
fn test_framing_advisory() {
    let mut parser = nmea0183(ChecksumMode::Advisory, content);

    let res = parser.parse("$GPGGA,data*6B\r\n");
    assert_eq!(
        res,
        Ok((
            "",
            (
                "GPGGA,data",
                ChecksumStatus::Mismatch {
                    expected: 0x6A,
                    found: 0x6B
                }
            )
        ))
    );
    assert!(!res.unwrap().1.1.is_consistent());

    let res = parser.parse("$GPGGA,data*6Z\r\n");
    assert_eq!(res, Err(Err::Error(Error::InvalidChecksum("6Z"))));
}
