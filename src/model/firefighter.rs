//! Firefighters and the two fixed team slots

use serde::{Deserialize, Serialize};

use super::oxygen::OxygenBand;
use crate::consts::*;

/// Fixed position within a team's firefighter pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::A, Slot::B];

    /// Array index of this slot (A = 0, B = 1)
    pub fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
        }
    }

    /// Slot for a route index; anything but 0 or 1 is a miss
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Slot::A),
            1 => Some(Slot::B),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::A => "A",
            Slot::B => "B",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Slot::A),
            "B" => Some(Slot::B),
            _ => None,
        }
    }

    /// The other slot of the pair
    pub fn sibling(self) -> Self {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A firefighter assigned to a team slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Firefighter {
    /// Stable identity, `{team}-a` / `{team}-b` for seeded records
    pub id: String,
    pub name: String,
    pub serial_number: String,
    /// Cylinder pressure in bar (nominal 0-300)
    pub oxygen_level: u32,
    /// Exit-time estimate in minutes
    pub exit_time: u32,
    /// PM identification signal raised for this firefighter
    #[serde(default)]
    pub pm_identification_active: bool,
}

/// What the A/B slot box shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotIndicator {
    /// PM identification is on; overrides the oxygen colour
    PmIdentification,
    Oxygen(OxygenBand),
}

impl Firefighter {
    /// Default occupant of `slot` in team `team_id`: unnamed, full cylinder
    pub fn new(team_id: u32, slot: Slot) -> Self {
        Self {
            id: format!("{}-{}", team_id, slot.label().to_ascii_lowercase()),
            name: String::new(),
            serial_number: format!("{}{}", team_id, slot.label()),
            oxygen_level: OXYGEN_FULL_BAR,
            exit_time: DEFAULT_EXIT_TIME_MIN,
            pm_identification_active: false,
        }
    }

    pub fn oxygen_band(&self) -> OxygenBand {
        OxygenBand::classify(self.oxygen_level)
    }

    pub fn indicator(&self) -> SlotIndicator {
        if self.pm_identification_active {
            SlotIndicator::PmIdentification
        } else {
            SlotIndicator::Oxygen(self.oxygen_band())
        }
    }

    /// Patch that flips PM identification
    pub fn pm_identification_toggle(&self) -> FirefighterPatch {
        FirefighterPatch::new().pm_identification_active(!self.pm_identification_active)
    }

    /// Shallow merge: fields present in `patch` win, the rest are kept
    pub fn merged(&self, patch: &FirefighterPatch) -> Self {
        Self {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            serial_number: patch
                .serial_number
                .clone()
                .unwrap_or_else(|| self.serial_number.clone()),
            oxygen_level: patch.oxygen_level.unwrap_or(self.oxygen_level),
            exit_time: patch.exit_time.unwrap_or(self.exit_time),
            pm_identification_active: patch
                .pm_identification_active
                .unwrap_or(self.pm_identification_active),
        }
    }
}

/// Partial set of firefighter field changes
///
/// Has no `id`: identity never changes through an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirefighterPatch {
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub oxygen_level: Option<u32>,
    pub exit_time: Option<u32>,
    pub pm_identification_active: Option<bool>,
}

impl FirefighterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = Some(serial_number.into());
        self
    }

    pub fn oxygen_level(mut self, level: u32) -> Self {
        self.oxygen_level = Some(level);
        self
    }

    pub fn exit_time(mut self, minutes: u32) -> Self {
        self.exit_time = Some(minutes);
        self
    }

    pub fn pm_identification_active(mut self, active: bool) -> Self {
        self.pm_identification_active = Some(active);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.serial_number.is_none()
            && self.oxygen_level.is_none()
            && self.exit_time.is_none()
            && self.pm_identification_active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_index_round_trip() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_index(slot.index()), Some(slot));
        }
        assert_eq!(Slot::from_index(2), None);
    }

    #[test]
    fn test_slot_labels() {
        assert_eq!(Slot::A.label(), "A");
        assert_eq!(Slot::from_label(" b "), Some(Slot::B));
        assert_eq!(Slot::from_label("C"), None);
        assert_eq!(Slot::A.sibling(), Slot::B);
    }

    #[test]
    fn test_default_firefighter() {
        let ff = Firefighter::new(3, Slot::B);
        assert_eq!(ff.id, "3-b");
        assert_eq!(ff.serial_number, "3B");
        assert_eq!(ff.oxygen_level, 300);
        assert_eq!(ff.exit_time, 40);
        assert!(ff.name.is_empty());
        assert_eq!(ff.oxygen_band(), OxygenBand::Safe);
    }

    #[test]
    fn test_merge_overwrites_only_present_fields() {
        let ff = Firefighter::new(1, Slot::A);
        let patch = FirefighterPatch::new().oxygen_level(150).name("Nowak P.");
        let merged = ff.merged(&patch);

        assert_eq!(merged.oxygen_level, 150);
        assert_eq!(merged.name, "Nowak P.");
        assert_eq!(merged.serial_number, ff.serial_number);
        assert_eq!(merged.exit_time, ff.exit_time);
        assert_eq!(merged.id, ff.id);
        // Input untouched
        assert_eq!(ff.oxygen_level, 300);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let ff = Firefighter::new(2, Slot::A);
        assert!(FirefighterPatch::new().is_empty());
        assert_eq!(ff.merged(&FirefighterPatch::new()), ff);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(Firefighter::new(1, Slot::A)).unwrap();
        assert_eq!(json["serialNumber"], "1A");
        assert_eq!(json["oxygenLevel"], 300);
        assert_eq!(json["exitTime"], 40);
        assert_eq!(json["pmIdentificationActive"], false);
    }

    #[test]
    fn test_pm_identification_toggle() {
        let ff = Firefighter::new(4, Slot::A).merged(&FirefighterPatch::new().oxygen_level(80));
        assert_eq!(ff.indicator(), SlotIndicator::Oxygen(OxygenBand::Danger));

        let on = ff.merged(&ff.pm_identification_toggle());
        assert!(on.pm_identification_active);
        assert_eq!(on.indicator(), SlotIndicator::PmIdentification);
        assert_eq!(on.oxygen_level, 80);

        let off = on.merged(&on.pm_identification_toggle());
        assert_eq!(off, ff);
    }

    #[test]
    fn test_pm_identification_survives_round_trip() {
        let json = r#"{"id":"1-a","name":"","serialNumber":"1A","oxygenLevel":300,"exitTime":40,"pmIdentificationActive":true}"#;
        let ff: Firefighter = serde_json::from_str(json).unwrap();
        assert!(ff.pm_identification_active);

        let written = serde_json::to_value(&ff).unwrap();
        assert_eq!(written["pmIdentificationActive"], true);
    }

    #[test]
    fn test_missing_pm_identification_defaults_off() {
        let json = r#"{"id":"1-a","name":"","serialNumber":"1A","oxygenLevel":300,"exitTime":40}"#;
        let ff: Firefighter = serde_json::from_str(json).unwrap();
        assert!(!ff.pm_identification_active);
    }
}
