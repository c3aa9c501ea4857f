//! Vehicle Telemetry Library
//!
//! A small, reusable core for simulating vehicle telemetry: speed, RPM, fuel,
//! battery voltage and engine temperature, plus the gear and alert labels
//! derived from them.
//!
//! # Architecture
//!
//! This library is intentionally minimal:
//! - Generates synthetic samples from configurable ranges
//! - Derives gear and alert labels from the readings
//! - Keeps an append-only session log gated by a run/stop state
//! - Exports a session log as CSV
//!
//! The library does NOT:
//! - Own a timer or tick source
//! - Render metrics, charts or tables
//! - Write files or read configuration files
//!
//! All presentation is in the application layer (vehicle-telemetry-cli).
//!
//! # Example Usage
//!
//! ```
//! use vehicle_telemetry::{export, Generator, GeneratorConfig, Session};
//!
//! // Create a reproducible generator
//! let mut generator = Generator::new(GeneratorConfig::new().with_seed(42)).unwrap();
//!
//! // Start monitoring and feed it three ticks
//! let mut session = Session::new().start();
//! for _ in 0..3 {
//!     session = session.tick(&mut generator);
//! }
//!
//! let latest = session.log().latest().unwrap();
//! println!("gear {} / alert {}", latest.gear(), latest.alert());
//!
//! // Export the log
//! let csv = export(session.log()).unwrap();
//! assert_eq!(String::from_utf8(csv).unwrap().lines().count(), 4);
//! ```

// Public modules
pub mod config;
pub mod export;
pub mod generator;
pub mod rules;
pub mod session;
pub mod types;

// Re-export main types for convenience
pub use config::{FloatRange, GeneratorConfig, IntRange, SampleRanges};
pub use export::{export, export_to_writer, EXPORT_FILE_NAME, EXPORT_HEADERS, EXPORT_MIME_TYPE};
pub use generator::{generate, Clock, FixedClock, Generator, SampleSource, SystemClock};
pub use rules::{alert, gear, Alert, Gear};
pub use session::{RunState, Session, SessionLog};
pub use types::{Result, Sample, TelemetryError, Timestamp};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
