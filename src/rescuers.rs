//! Available rescuers roster
//!
//! Rescuers on scene but not assigned to a team slot. Read-only; shown in the
//! sidebar and the rescuers dialog.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::model::OxygenBand;

/// An unassigned rescuer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rescuer {
    pub id: String,
    pub name: String,
    pub serial_number: String,
    /// Cylinder pressure in bar
    pub oxygen_level: u32,
    /// Minutes
    pub exit_time: u32,
}

impl Rescuer {
    pub fn oxygen_band(&self) -> OxygenBand {
        OxygenBand::classify(self.oxygen_level)
    }
}

const ROSTER: [(&str, &str, &str); 8] = [
    ("r1", "Kowalski Jan", "1A"),
    ("r2", "Nowak Piotr", "1B"),
    ("r3", "Wiśniewski Adam", "1C"),
    ("r4", "Wójcik Tomasz", "1D"),
    ("r5", "Kamiński Marcin", "1E"),
    ("r6", "Lewandowski Paweł", "1F"),
    ("r7", "Zieliński Krzysztof", "1G"),
    ("r8", "Szymański Michał", "2A"),
];

/// Default roster, all on full cylinders
pub fn available_rescuers() -> Vec<Rescuer> {
    ROSTER
        .iter()
        .map(|(id, name, serial)| Rescuer {
            id: id.to_string(),
            name: name.to_string(),
            serial_number: serial.to_string(),
            oxygen_level: OXYGEN_FULL_BAR,
            exit_time: DEFAULT_EXIT_TIME_MIN,
        })
        .collect()
}

/// Look up a rescuer by serial number (case-insensitive)
pub fn find_by_serial<'a>(rescuers: &'a [Rescuer], serial: &str) -> Option<&'a Rescuer> {
    rescuers
        .iter()
        .find(|r| r.serial_number.eq_ignore_ascii_case(serial.trim()))
}
