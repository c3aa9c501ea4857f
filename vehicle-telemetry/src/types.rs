//! Core types for the vehicle telemetry library
//!
//! This module defines the sample value emitted by the generator and the error
//! type shared by the fallible parts of the library (configuration and export).
//! Samples are immutable: the derived gear and alert are computed from the stored
//! readings on access and are never stored alongside them.

use crate::rules::{self, Alert, Gear};
use chrono::{DateTime, Local};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// Timestamp type used throughout the library
pub type Timestamp = DateTime<Local>;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Display format for sample timestamps (hour:minute:second)
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Errors that can occur while configuring the generator or exporting a log
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("Invalid range for {field}: {reason}")]
    InvalidRange { field: &'static str, reason: String },

    #[error("Failed to export session log: {0}")]
    Export(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One synthetic telemetry reading
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    timestamp: Timestamp,
    speed: u32,
    rpm: u32,
    fuel: u32,
    battery: f64,
    temperature: u32,
    distance: f64,
}

impl Sample {
    /// Build a sample from raw readings.
    ///
    /// Battery voltage is rounded to 2 decimals and the per-tick distance is
    /// derived from the speed, so both always agree with the stored readings.
    pub fn new(
        timestamp: Timestamp,
        speed: u32,
        rpm: u32,
        fuel: u32,
        battery: f64,
        temperature: u32,
    ) -> Self {
        Self {
            timestamp,
            speed,
            rpm,
            fuel,
            battery: round_hundredths(battery),
            temperature,
            distance: distance_for_speed(speed),
        }
    }

    /// Wall-clock time of generation
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Timestamp rendered as `HH:MM:SS`
    pub fn time_label(&self) -> String {
        self.timestamp.format(TIME_FORMAT).to_string()
    }

    /// Vehicle speed in km/h
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Engine speed in revolutions per minute
    pub fn rpm(&self) -> u32 {
        self.rpm
    }

    /// Fuel level in percent
    pub fn fuel(&self) -> u32 {
        self.fuel
    }

    /// Battery voltage, rounded to 2 decimals
    pub fn battery(&self) -> f64 {
        self.battery
    }

    /// Engine temperature in °C
    pub fn temperature(&self) -> u32 {
        self.temperature
    }

    /// Distance covered during this tick (not a cumulative odometer)
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Gear label derived from the speed
    pub fn gear(&self) -> Gear {
        rules::gear(i64::from(self.speed))
    }

    /// Alert derived from the temperature and battery voltage
    pub fn alert(&self) -> Alert {
        rules::alert(f64::from(self.temperature), self.battery)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] speed={} rpm={} fuel={}% battery={}V temp={}°C gear={} distance={}km alert={}",
            self.time_label(),
            self.speed,
            self.rpm,
            self.fuel,
            self.battery,
            self.temperature,
            self.gear(),
            self.distance,
            self.alert()
        )
    }
}

impl Serialize for Sample {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Sample", 9)?;
        state.serialize_field("timestamp", &self.timestamp)?;
        state.serialize_field("speed", &self.speed)?;
        state.serialize_field("rpm", &self.rpm)?;
        state.serialize_field("fuel", &self.fuel)?;
        state.serialize_field("battery", &self.battery)?;
        state.serialize_field("temperature", &self.temperature)?;
        state.serialize_field("gear", &self.gear().to_string())?;
        state.serialize_field("distance", &self.distance)?;
        state.serialize_field("alert", &self.alert().to_string())?;
        state.end()
    }
}

/// Round a value to 2 decimal places
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Per-tick distance for an instantaneous speed: `round(speed * 0.01, 2)`
pub fn distance_for_speed(speed: u32) -> f64 {
    round_hundredths(f64::from(speed) * 0.01)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> Timestamp {
        Local.with_ymd_and_hms(2024, 5, 17, h, m, s).unwrap()
    }

    #[test]
    fn test_sample_derives_distance_and_rounds_battery() {
        let sample = Sample::new(at(8, 30, 5), 87, 3200, 55, 12.3456, 95);
        assert_eq!(sample.distance(), 0.87);
        assert_eq!(sample.battery(), 12.35);
        assert_eq!(sample.time_label(), "08:30:05");
    }

    #[test]
    fn test_derived_fields_follow_inputs() {
        let hot = Sample::new(at(12, 0, 0), 0, 1000, 10, 11.2, 115);
        assert_eq!(hot.gear().to_string(), "P");
        assert_eq!(hot.alert().to_string(), "Overheat | Battery Low");

        let cruising = Sample::new(at(12, 0, 1), 65, 2500, 80, 13.1, 90);
        assert_eq!(cruising.gear().to_string(), "4");
        assert!(cruising.alert().is_ok());
    }

    #[test]
    fn test_round_hundredths() {
        assert_eq!(round_hundredths(14.799), 14.8);
        assert_eq!(round_hundredths(11.0), 11.0);
        assert_eq!(distance_for_speed(0), 0.0);
        assert_eq!(distance_for_speed(119), 1.19);
    }

    #[test]
    fn test_display_contains_labels() {
        let sample = Sample::new(at(23, 59, 59), 45, 4100, 12, 14.0, 70);
        let text = sample.to_string();
        assert!(text.starts_with("[23:59:59]"));
        assert!(text.contains("gear=3"));
        assert!(text.contains("alert=OK"));
    }
}
