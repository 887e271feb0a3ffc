//! Oxygen classification
//!
//! Derived from the current pressure on every read, never stored.

use crate::consts::*;

/// Severity band for a cylinder pressure reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OxygenBand {
    /// 200 bar and above
    Safe,
    /// 100 to 199 bar
    Warning,
    /// Below 100 bar
    Danger,
}

impl OxygenBand {
    /// Classify a pressure reading in bar
    pub fn classify(level: u32) -> Self {
        if level >= OXYGEN_SAFE_MIN_BAR {
            OxygenBand::Safe
        } else if level >= OXYGEN_WARNING_MIN_BAR {
            OxygenBand::Warning
        } else {
            OxygenBand::Danger
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OxygenBand::Safe => "safe",
            OxygenBand::Warning => "warning",
            OxygenBand::Danger => "danger",
        }
    }

    /// Severity rank, higher is worse
    pub fn severity(&self) -> u8 {
        match self {
            OxygenBand::Safe => 0,
            OxygenBand::Warning => 1,
            OxygenBand::Danger => 2,
        }
    }
}

impl std::fmt::Display for OxygenBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fraction of a full cylinder, clamped to [0, 1] for gauge rendering
pub fn fill_fraction(level: u32) -> f32 {
    (level as f32 / OXYGEN_FULL_BAR as f32).min(1.0)
}
