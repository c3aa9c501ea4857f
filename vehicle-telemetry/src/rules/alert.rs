//! Alert evaluator
//!
//! Two independent threshold checks, always evaluated in the same order:
//! overheat first, then low battery.

use std::fmt;

/// Engine temperature (°C) above which an overheat alert is raised
pub const OVERHEAT_CELSIUS: f64 = 110.0;

/// Battery voltage below which a low-battery alert is raised
pub const BATTERY_LOW_VOLTS: f64 = 11.5;

const OVERHEAT: &str = "Overheat";
const BATTERY_LOW: &str = "Battery Low";
const OK: &str = "OK";
const SEPARATOR: &str = " | ";

/// Result of evaluating the alert thresholds for one reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alert {
    pub overheat: bool,
    pub battery_low: bool,
}

impl Alert {
    /// True if no threshold was crossed
    pub fn is_ok(&self) -> bool {
        !self.overheat && !self.battery_low
    }

    /// Triggered alert messages in evaluation order
    pub fn messages(&self) -> Vec<&'static str> {
        let mut messages = Vec::with_capacity(2);
        if self.overheat {
            messages.push(OVERHEAT);
        }
        if self.battery_low {
            messages.push(BATTERY_LOW);
        }
        messages
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            f.write_str(OK)
        } else {
            f.write_str(&self.messages().join(SEPARATOR))
        }
    }
}

/// Evaluate the alert thresholds for a temperature and battery voltage
pub fn alert(temperature: f64, battery: f64) -> Alert {
    Alert {
        overheat: temperature > OVERHEAT_CELSIUS,
        battery_low: battery < BATTERY_LOW_VOLTS,
    }
}
