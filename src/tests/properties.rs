use nom::Parser;
use proptest::prelude::*;

use crate::{
    ChecksumMode, Error, FixState, LineAssembler, SentenceParser, checksum, format_checksum,
    nmea0183, parse_response,
};

fn content(i: &str) -> crate::IResult<&str, &str> {
    Ok(("", i))
}

fn with_checksum(body: &str) -> String {
    format!("${body}*{}\r\n", format_checksum(checksum(body).1))
}

proptest! {
    #[test]
    fn test_assembler_stays_within_capacity(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut assembler = LineAssembler::<16>::new();

        for byte in bytes {
            assembler.ingest(byte);
            prop_assert!(assembler.last_line().len() < 16);
        }
    }

    #[test]
    fn test_paused_assembler_ignores_input(
        prefix in prop::collection::vec(any::<u8>(), 0..200),
        noise in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let mut assembler = LineAssembler::<32>::new();
        for byte in prefix {
            assembler.ingest(byte);
        }

        let before = assembler.clone();
        assembler.pause(true);
        for byte in noise {
            assembler.ingest(byte);
        }
        assembler.pause(false);

        prop_assert_eq!(assembler, before);
    }

    #[test]
    fn test_one_bit_corruption_changes_checksum(
        body in "[A-Z0-9,.]{1,60}",
        index in any::<prop::sample::Index>(),
        bit in 0u8..7,
    ) {
        let line = with_checksum(&body);
        let embedded = checksum(body.as_str()).1;

        prop_assert!(nmea0183(ChecksumMode::Required, content).parse(line.as_str()).is_ok());

        let mut corrupted = body.clone().into_bytes();
        let at = index.index(corrupted.len());
        corrupted[at] ^= 1 << bit;
        prop_assert_ne!(checksum(corrupted.as_slice()).1, embedded);

        prop_assume!(!matches!(corrupted[at], b'*' | b'$' | b'\r' | b'\n' | b'\0'));
        let corrupted = String::from_utf8(corrupted).unwrap();
        let line = format!("${corrupted}*{}\r\n", format_checksum(embedded));
        let result = nmea0183(ChecksumMode::Required, content).parse(line.as_str());
        prop_assert!(
            matches!(result, Err(nom::Err::Error(Error::ChecksumMismatch { .. }))),
            "{:?}",
            result
        );
    }

    #[test]
    fn test_bad_hemisphere_is_rejected(marker in "[A-Z]".prop_filter("valid hemisphere", |c| c != "N" && c != "S")) {
        let body = format!("GPGGA,123519,4807.038,{marker},01131.000,E,1,08,0.9,545.4,M,46.9,M,,");
        let line = with_checksum(&body);

        let mut fix = FixState::new();
        let result = SentenceParser::default().parse_str(&line, &mut fix);

        prop_assert_eq!(result.unwrap_err(), Error::MalformedField(marker.as_str()));
        prop_assert_eq!(fix, FixState::new());
    }

    #[test]
    fn test_decoding_noise_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
        let mut fix = FixState::new();
        let _ = SentenceParser::default().parse(&bytes, &mut fix);
    }

    #[test]
    fn test_responses_never_overflow(response in "[ -~]{0,200}") {
        prop_assert!(parse_response(&response).len() <= crate::MAX_RESPONSE_FIELDS);
    }
}
