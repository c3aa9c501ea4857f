//! Derived telemetry rules
//!
//! Pure functions that turn raw readings into the labels shown on the dashboard:
//! the gear classifier (from speed) and the alert evaluator (from temperature and
//! battery voltage).

pub mod alert;
pub mod gear;

// Re-export key types for convenience
pub use alert::{alert, Alert, BATTERY_LOW_VOLTS, OVERHEAT_CELSIUS};
pub use gear::{gear, Gear};
