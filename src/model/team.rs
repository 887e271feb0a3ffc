//! Rescue teams
//!
//! A team always holds exactly two firefighters (slots A and B). Its `id` is
//! fixed at creation and is the only key used to find it in the store.

use serde::{Deserialize, Serialize};

use super::firefighter::{Firefighter, FirefighterPatch, Slot};
use super::oxygen::OxygenBand;
use crate::consts::*;

/// Operational state of a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TeamStatus {
    /// Ready at the entry point
    #[default]
    Standby,
    /// Inside the structure
    Active,
    Warning,
    Danger,
}

impl TeamStatus {
    /// Legend order
    pub const ALL: [TeamStatus; 4] = [
        TeamStatus::Standby,
        TeamStatus::Active,
        TeamStatus::Warning,
        TeamStatus::Danger,
    ];

    /// Wire value as persisted
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamStatus::Standby => "standby",
            TeamStatus::Active => "active",
            TeamStatus::Warning => "warning",
            TeamStatus::Danger => "danger",
        }
    }

    /// Operator-facing label
    pub fn label(&self) -> &'static str {
        match self {
            TeamStatus::Standby => "Gotowy",
            TeamStatus::Active => "W środku",
            TeamStatus::Warning => "Ostrzeżenie",
            TeamStatus::Danger => "Krytyczny",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "standby" => Some(TeamStatus::Standby),
            "active" => Some(TeamStatus::Active),
            "warning" => Some(TeamStatus::Warning),
            "danger" => Some(TeamStatus::Danger),
            _ => None,
        }
    }
}

impl std::fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rescue team and its firefighter pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    id: u32,
    pub name: String,
    /// Free-text type label ("ROTA", "RIT", ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Exit-time estimate in minutes
    pub exit_time: u32,
    pub status: TeamStatus,
    pub firefighters: [Firefighter; 2],
}

impl Team {
    /// Default team: standby, untyped, two full-cylinder firefighters
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: format!("Zespół {}", id),
            kind: String::new(),
            exit_time: DEFAULT_EXIT_TIME_MIN,
            status: TeamStatus::Standby,
            firefighters: [Firefighter::new(id, Slot::A), Firefighter::new(id, Slot::B)],
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn firefighter(&self, slot: Slot) -> &Firefighter {
        &self.firefighters[slot.index()]
    }

    /// Shallow merge of team-level fields
    pub fn merged(&self, patch: &TeamPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            kind: patch.kind.clone().unwrap_or_else(|| self.kind.clone()),
            exit_time: patch.exit_time.unwrap_or(self.exit_time),
            status: patch.status.unwrap_or(self.status),
            firefighters: patch
                .firefighters
                .clone()
                .unwrap_or_else(|| self.firefighters.clone()),
        }
    }

    /// New team with only `slot` merged; sibling and team fields are kept
    pub fn with_firefighter(&self, slot: Slot, patch: &FirefighterPatch) -> Self {
        let mut firefighters = self.firefighters.clone();
        firefighters[slot.index()] = firefighters[slot.index()].merged(patch);
        Self {
            firefighters,
            ..self.clone()
        }
    }

    /// Worst oxygen band across both slots
    pub fn worst_oxygen_band(&self) -> OxygenBand {
        self.firefighters
            .iter()
            .map(Firefighter::oxygen_band)
            .max_by_key(OxygenBand::severity)
            .unwrap_or(OxygenBand::Safe)
    }
}

/// Partial set of team field changes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub exit_time: Option<u32>,
    pub status: Option<TeamStatus>,
    pub firefighters: Option<[Firefighter; 2]>,
}

impl TeamPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn exit_time(mut self, minutes: u32) -> Self {
        self.exit_time = Some(minutes);
        self
    }

    pub fn status(mut self, status: TeamStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn firefighters(mut self, firefighters: [Firefighter; 2]) -> Self {
        self.firefighters = Some(firefighters);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.kind.is_none()
            && self.exit_time.is_none()
            && self.status.is_none()
            && self.firefighters.is_none()
    }
}
