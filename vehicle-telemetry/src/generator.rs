//! Synthetic sample generator
//!
//! This module provides the only source of telemetry in the system. Each call to
//! [`Generator::generate`] reads the clock once and draws five independent
//! readings from the configured ranges. Draws are in range by construction, so
//! generation never fails; only building a generator from a config can.

use crate::config::{GeneratorConfig, SampleRanges};
use crate::types::{round_hundredths, Result, Sample, Timestamp};
use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of wall-clock time for sample timestamps
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now()
    }
}

/// Clock frozen at a single instant (useful for reproducible exports)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// Anything that can produce one sample per tick
///
/// The session controller only depends on this trait, so tests can drive it
/// with scripted samples.
pub trait SampleSource {
    fn next_sample(&mut self) -> Sample;
}

/// Random telemetry generator
#[derive(Debug)]
pub struct Generator<C: Clock = SystemClock> {
    rng: StdRng,
    ranges: SampleRanges,
    clock: C,
    generated: u64,
}

impl Generator<SystemClock> {
    /// Create a generator using the system clock
    ///
    /// # Arguments
    /// * `config` - Reading ranges and optional seed
    ///
    /// # Returns
    /// * `Result<Generator>` - Err if any configured range is empty, inverted or unrepresentable
    ///
    /// # Example
    /// ```
    /// use vehicle_telemetry::{Generator, GeneratorConfig};
    ///
    /// let mut generator = Generator::new(GeneratorConfig::new().with_seed(42)).unwrap();
    /// let sample = generator.generate();
    /// assert!(sample.speed() < 120);
    /// ```
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }

    /// Create an entropy-seeded generator with the default ranges
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            ranges: SampleRanges::default(),
            clock: SystemClock,
            generated: 0,
        }
    }
}

impl<C: Clock> Generator<C> {
    /// Create a generator reading timestamps from a custom clock
    pub fn with_clock(config: GeneratorConfig, clock: C) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => {
                log::debug!("Seeding generator with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            rng,
            ranges: config.ranges,
            clock,
            generated: 0,
        })
    }

    /// Produce one synthetic sample
    pub fn generate(&mut self) -> Sample {
        let timestamp = self.clock.now();
        let ranges = &self.ranges;

        let speed = self.rng.gen_range(ranges.speed.min..ranges.speed.max);
        let rpm = self.rng.gen_range(ranges.rpm.min..ranges.rpm.max);
        let fuel = self.rng.gen_range(ranges.fuel.min..ranges.fuel.max);
        let battery = round_hundredths(self.rng.gen_range(ranges.battery.min..=ranges.battery.max));
        let temperature = self.rng.gen_range(ranges.temperature.min..ranges.temperature.max);

        self.generated += 1;
        let sample = Sample::new(timestamp, speed, rpm, fuel, battery, temperature);
        log::trace!("Generated sample #{}: {}", self.generated, sample);
        sample
    }

    /// Number of samples generated so far
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Ranges this generator draws from
    pub fn ranges(&self) -> &SampleRanges {
        &self.ranges
    }
}

impl<C: Clock> SampleSource for Generator<C> {
    fn next_sample(&mut self) -> Sample {
        self.generate()
    }
}

/// Generate a single sample from an entropy-seeded generator and the system clock
pub fn generate() -> Sample {
    Generator::from_entropy().generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::distance_for_speed;
    use chrono::TimeZone;

    fn fixed_clock() -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
    }

    #[test]
    fn test_samples_stay_in_range() {
        let mut generator =
            Generator::with_clock(GeneratorConfig::new().with_seed(1), fixed_clock()).unwrap();

        for _ in 0..10_000 {
            let sample = generator.generate();
            assert!(sample.speed() < 120);
            assert!((1000..5000).contains(&sample.rpm()));
            assert!((10..100).contains(&sample.fuel()));
            assert!((11.0..=14.8).contains(&sample.battery()));
            assert!((70..120).contains(&sample.temperature()));
            assert_eq!(sample.distance(), distance_for_speed(sample.speed()));
            assert_eq!(sample.battery(), round_hundredths(sample.battery()));
        }
        assert_eq!(generator.generated(), 10_000);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let config = GeneratorConfig::new().with_seed(99);
        let mut a = Generator::with_clock(config.clone(), fixed_clock()).unwrap();
        let mut b = Generator::with_clock(config, fixed_clock()).unwrap();

        for _ in 0..50 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_timestamp_comes_from_clock() {
        let mut generator =
            Generator::with_clock(GeneratorConfig::new().with_seed(3), fixed_clock()).unwrap();
        assert_eq!(generator.generate().time_label(), "03:04:05");
    }

    #[test]
    fn test_custom_ranges() {
        let config = GeneratorConfig::new()
            .with_seed(5)
            .with_speed_range(0, 1)
            .with_battery_range(12.0, 12.0)
            .with_temperature_range(115, 116);
        let mut generator = Generator::with_clock(config, fixed_clock()).unwrap();

        let sample = generator.generate();
        assert_eq!(sample.speed(), 0);
        assert_eq!(sample.battery(), 12.0);
        assert_eq!(sample.temperature(), 115);
        assert_eq!(sample.gear().to_string(), "P");
        assert_eq!(sample.alert().to_string(), "Overheat");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GeneratorConfig::new().with_rpm_range(5000, 1000);
        assert!(Generator::new(config).is_err());

        let overflowing = GeneratorConfig::new().with_battery_range(-1.0e308, 1.0e308);
        assert!(Generator::new(overflowing).is_err());
    }

    #[test]
    fn test_free_generate_function() {
        let sample = generate();
        assert!(sample.speed() < 120);
        assert!((11.0..=14.8).contains(&sample.battery()));
    }
}
