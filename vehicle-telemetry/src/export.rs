//! CSV export of a session log
//!
//! One header row followed by one row per sample, in log order. Floats use their
//! shortest round-trip form but always keep a decimal point (`12.0`, `0.5`), so
//! the same log always exports to the same bytes.

use crate::session::SessionLog;
use crate::types::{Result, Sample};
use std::io::Write;

/// Suggested file name for downloaded exports
pub const EXPORT_FILE_NAME: &str = "vehicle_logs.csv";

/// MIME type of the export payload
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// Column headers, in field order
pub const EXPORT_HEADERS: [&str; 9] = [
    "Time",
    "Speed",
    "RPM",
    "Fuel",
    "Battery",
    "Temperature",
    "Gear",
    "Distance",
    "Alert",
];

/// Serialize the full log as CSV bytes
///
/// # Example
/// ```
/// use vehicle_telemetry::{export, SessionLog};
///
/// let bytes = export(&SessionLog::new()).unwrap();
/// assert_eq!(bytes, b"Time,Speed,RPM,Fuel,Battery,Temperature,Gear,Distance,Alert\n");
/// ```
pub fn export(log: &SessionLog) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    export_to_writer(log, &mut buffer)?;
    Ok(buffer)
}

/// Stream the log as CSV into any writer
pub fn export_to_writer<W: Write>(log: &SessionLog, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(EXPORT_HEADERS)?;
    for sample in log {
        csv_writer.write_record(sample_record(sample))?;
    }
    csv_writer.flush()?;

    log::debug!("Exported {} samples", log.len());
    Ok(())
}

fn sample_record(sample: &Sample) -> [String; 9] {
    [
        sample.time_label(),
        sample.speed().to_string(),
        sample.rpm().to_string(),
        sample.fuel().to_string(),
        format_decimal(sample.battery()),
        sample.temperature().to_string(),
        sample.gear().to_string(),
        format_decimal(sample.distance()),
        sample.alert().to_string(),
    ]
}

/// Shortest round-trip decimal that always carries a decimal point
pub fn format_decimal(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{FixedClock, Generator};
    use crate::session::Session;
    use crate::GeneratorConfig;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(12.0), "12.0");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(12.35), "12.35");
        assert_eq!(format_decimal(1.19), "1.19");
        assert_eq!(format_decimal(0.5), "0.5");
    }

    #[test]
    fn test_export_rows() {
        struct Scripted(Vec<Sample>);
        impl crate::SampleSource for Scripted {
            fn next_sample(&mut self) -> Sample {
                self.0.remove(0)
            }
        }

        let t = |s| Local.with_ymd_and_hms(2024, 6, 1, 14, 5, s).unwrap();
        let mut source = Scripted(vec![
            Sample::new(t(1), 0, 1000, 10, 11.0, 115),
            Sample::new(t(2), 55, 2750, 64, 12.5, 90),
        ]);
        let session = Session::new().start().tick(&mut source).tick(&mut source);

        let text = String::from_utf8(export(session.log()).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Time,Speed,RPM,Fuel,Battery,Temperature,Gear,Distance,Alert");
        assert_eq!(lines[1], "14:05:01,0,1000,10,11.0,115,P,0.0,Overheat | Battery Low");
        assert_eq!(lines[2], "14:05:02,55,2750,64,12.5,90,4,0.55,OK");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_export_is_idempotent() {
        let clock = FixedClock(Local.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap());
        let mut generator =
            Generator::with_clock(GeneratorConfig::new().with_seed(11), clock).unwrap();
        let mut session = Session::new().start();
        for _ in 0..30 {
            session = session.tick(&mut generator);
        }

        let first = export(session.log()).unwrap();
        let second = export(session.log()).unwrap();
        assert_eq!(first, second);
        assert_eq!(String::from_utf8(first).unwrap().lines().count(), 31);
    }

    #[test]
    fn test_export_constants() {
        assert_eq!(EXPORT_FILE_NAME, "vehicle_logs.csv");
        assert_eq!(EXPORT_MIME_TYPE, "text/csv");
        assert_eq!(EXPORT_HEADERS.join(","), "Time,Speed,RPM,Fuel,Battery,Temperature,Gear,Distance,Alert");
    }
}
