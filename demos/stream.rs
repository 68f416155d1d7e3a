//! Reads NMEA 0183 from stdin and prints the fix after every sentence.
//!
//! ```text
//! cat capture.nmea | cargo run --example stream
//! ```

use std::io::{self, Read};

use nmea0183_fix::{ChecksumMode, Gps, ParserConfig, TalkerMode};

fn main() {
    let config = ParserConfig::default()
        .with_checksum(ChecksumMode::Optional)
        .with_talker(TalkerMode::Any);
    let mut gps: Gps = Gps::new(config);

    let mut source = io::stdin().lock().bytes().map_while(Result::ok);

    while gps.read(&mut source).is_some() {
        let parsed = match gps.update() {
            Some(Ok(parsed)) => parsed,
            Some(Err(e)) => {
                println!("Parsing error occurred: {e}");
                continue;
            }
            None => continue,
        };

        let fix = gps.fix();
        println!(
            "{}{:?} {:02}:{:02}:{:02}.{:03} {} {} fix={} sats={} alt={}m speed={}kn",
            parsed.talker.as_str(),
            parsed.sentence.id(),
            fix.hour,
            fix.minute,
            fix.seconds,
            fix.milliseconds,
            fix.latitude.as_str(),
            fix.longitude.as_str(),
            fix.has_fix(),
            fix.satellites,
            fix.altitude,
            fix.speed,
        );
    }

    println!("{:?}", gps.statistics());
}
