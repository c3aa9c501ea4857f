//! Gear classifier
//!
//! Maps an instantaneous speed onto a gear label. The first matching rule wins:
//!
//! | speed        | gear |
//! |--------------|------|
//! | `== 0`       | P    |
//! | `< 10`       | 1    |
//! | `< 30`       | 2    |
//! | `< 50`       | 3    |
//! | `< 70`       | 4    |
//! | otherwise    | 5    |

use std::fmt;

/// Gear label, ordered `P < 1 < 2 < 3 < 4 < 5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gear {
    Park,
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Gear {
    /// All gears in ascending order
    pub const ALL: [Gear; 6] = [
        Gear::Park,
        Gear::First,
        Gear::Second,
        Gear::Third,
        Gear::Fourth,
        Gear::Fifth,
    ];

    /// Dashboard label for this gear
    pub fn label(&self) -> &'static str {
        match self {
            Gear::Park => "P",
            Gear::First => "1",
            Gear::Second => "2",
            Gear::Third => "3",
            Gear::Fourth => "4",
            Gear::Fifth => "5",
        }
    }
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a speed into a gear.
///
/// Total over every integer: only the `== 0` and `<` comparisons matter, so
/// negative speeds land in first gear.
pub fn gear(speed: i64) -> Gear {
    if speed == 0 {
        Gear::Park
    } else if speed < 10 {
        Gear::First
    } else if speed < 30 {
        Gear::Second
    } else if speed < 50 {
        Gear::Third
    } else if speed < 70 {
        Gear::Fourth
    } else {
        Gear::Fifth
    }
}
