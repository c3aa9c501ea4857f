//! Generator configuration types
//!
//! This module defines the minimal configuration needed by the generator: the
//! ranges each reading is drawn from and an optional RNG seed. Everything about
//! presentation (tick interval, chart window, export location) belongs to the
//! application layer.

use crate::types::{Result, TelemetryError};
use serde::{Deserialize, Serialize};

/// Half-open integer range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
}

impl IntRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Check if a value lies within `[min, max)`
    pub fn contains(&self, value: u32) -> bool {
        (self.min..self.max).contains(&value)
    }

    fn validate(&self, field: &'static str) -> Result<()> {
        if self.min >= self.max {
            return Err(TelemetryError::InvalidRange {
                field,
                reason: format!("empty range [{}, {})", self.min, self.max),
            });
        }
        Ok(())
    }
}

/// Closed floating-point range `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
}

impl FloatRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if a value lies within `[min, max]`
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, field: &'static str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(TelemetryError::InvalidRange {
                field,
                reason: "bounds must be finite".to_string(),
            });
        }
        if self.min > self.max {
            return Err(TelemetryError::InvalidRange {
                field,
                reason: format!("min {} is greater than max {}", self.min, self.max),
            });
        }
        // Sampling needs a representable span
        if !(self.max - self.min).is_finite() {
            return Err(TelemetryError::InvalidRange {
                field,
                reason: format!("span from {} to {} overflows", self.min, self.max),
            });
        }
        Ok(())
    }
}

/// Ranges each reading is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleRanges {
    /// Vehicle speed, km/h
    pub speed: IntRange,
    /// Engine speed, RPM
    pub rpm: IntRange,
    /// Fuel level, percent
    pub fuel: IntRange,
    /// Battery voltage, volts (rounded to 2 decimals after drawing)
    pub battery: FloatRange,
    /// Engine temperature, °C
    pub temperature: IntRange,
}

impl Default for SampleRanges {
    fn default() -> Self {
        Self {
            speed: IntRange::new(0, 120),
            rpm: IntRange::new(1000, 5000),
            fuel: IntRange::new(10, 100),
            battery: FloatRange::new(11.0, 14.8),
            temperature: IntRange::new(70, 120),
        }
    }
}

impl SampleRanges {
    /// Validate every range
    pub fn validate(&self) -> Result<()> {
        self.speed.validate("speed")?;
        self.rpm.validate("rpm")?;
        self.fuel.validate("fuel")?;
        self.battery.validate("battery")?;
        self.temperature.validate("temperature")?;
        Ok(())
    }
}

/// Configuration for the sample generator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Optional RNG seed for reproducible runs (None = seed from OS entropy)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Reading ranges (defaults to the stock vehicle profile)
    #[serde(default)]
    pub ranges: SampleRanges,
}

impl GeneratorConfig {
    /// Create a new generator configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: fix the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set the speed range `[min, max)`
    pub fn with_speed_range(mut self, min: u32, max: u32) -> Self {
        self.ranges.speed = IntRange::new(min, max);
        self
    }

    /// Builder method: set the RPM range `[min, max)`
    pub fn with_rpm_range(mut self, min: u32, max: u32) -> Self {
        self.ranges.rpm = IntRange::new(min, max);
        self
    }

    /// Builder method: set the fuel range `[min, max)`
    pub fn with_fuel_range(mut self, min: u32, max: u32) -> Self {
        self.ranges.fuel = IntRange::new(min, max);
        self
    }

    /// Builder method: set the battery range `[min, max]`
    pub fn with_battery_range(mut self, min: f64, max: f64) -> Self {
        self.ranges.battery = FloatRange::new(min, max);
        self
    }

    /// Builder method: set the temperature range `[min, max)`
    pub fn with_temperature_range(mut self, min: u32, max: u32) -> Self {
        self.ranges.temperature = IntRange::new(min, max);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.ranges.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_config_builder() {
        let config = GeneratorConfig::new()
            .with_seed(7)
            .with_speed_range(0, 60)
            .with_battery_range(12.0, 12.5);

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.ranges.speed, IntRange::new(0, 60));
        assert_eq!(config.ranges.battery, FloatRange::new(12.0, 12.5));
        assert_eq!(config.ranges.rpm, IntRange::new(1000, 5000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_ranges() {
        let ranges = SampleRanges::default();
        assert!(ranges.speed.contains(0));
        assert!(!ranges.speed.contains(120));
        assert!(ranges.battery.contains(14.8));
        assert!(!ranges.battery.contains(10.99));
        assert!(ranges.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_and_inverted_ranges() {
        let empty = GeneratorConfig::new().with_fuel_range(50, 50);
        match empty.validate() {
            Err(TelemetryError::InvalidRange { field, .. }) => assert_eq!(field, "fuel"),
            other => panic!("expected InvalidRange, got {:?}", other),
        }

        let inverted = GeneratorConfig::new().with_battery_range(14.8, 11.0);
        assert!(inverted.validate().is_err());

        let non_finite = GeneratorConfig::new().with_battery_range(f64::NAN, 12.0);
        assert!(non_finite.validate().is_err());
    }

    #[test]
    fn test_rejects_overflowing_span() {
        let config = GeneratorConfig::new().with_battery_range(-1.0e308, 1.0e308);
        match config.validate() {
            Err(TelemetryError::InvalidRange { field, .. }) => assert_eq!(field, "battery"),
            other => panic!("expected InvalidRange, got {:?}", other),
        }

        // Wide but representable spans are still accepted
        let wide = GeneratorConfig::new().with_battery_range(-1.0e300, 1.0e300);
        assert!(wide.validate().is_ok());
    }

    #[test]
    fn test_degenerate_battery_range_is_valid() {
        let config = GeneratorConfig::new().with_battery_range(12.0, 12.0);
        assert!(config.validate().is_ok());
    }
}
