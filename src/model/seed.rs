//! Default team collection seeded when storage holds nothing usable

use super::firefighter::{FirefighterPatch, Slot};
use super::team::{Team, TeamPatch, TeamStatus};
use crate::consts::TEAM_COUNT;

/// (name, oxygen bar, exit minutes) for slots A and B
type Crew = [(&'static str, u32, u32); 2];

/// Per-team overrides on top of `Team::new`
const PRESETS: [(u32, &str, TeamStatus, Option<Crew>); 5] = [
    (1, "ROTA", TeamStatus::Standby, None),
    (
        2,
        "Drabina",
        TeamStatus::Active,
        Some([("Kowalski J.", 280, 40), ("Nowak P.", 260, 40)]),
    ),
    (
        3,
        "Wsparcie",
        TeamStatus::Active,
        Some([("Wiśniewski A.", 180, 35), ("Wójcik T.", 220, 38)]),
    ),
    (
        4,
        "Rezerwa",
        TeamStatus::Warning,
        Some([("Kamiński M.", 120, 25), ("Lewandowski P.", 150, 28)]),
    ),
    (
        6,
        "RIT",
        TeamStatus::Danger,
        Some([("Zieliński K.", 80, 15), ("Szymański M.", 95, 18)]),
    ),
];

/// The eight teams shown on first start (4x2 grid)
pub fn initial_teams() -> Vec<Team> {
    (1..=TEAM_COUNT)
        .map(|id| {
            let team = Team::new(id);
            let Some((_, kind, status, crew)) = PRESETS.iter().find(|p| p.0 == id) else {
                return team;
            };

            let mut team = team.merged(&TeamPatch::new().kind(*kind).status(*status));
            if let Some(crew) = crew {
                for (slot, (name, oxygen, exit)) in Slot::ALL.into_iter().zip(crew.iter()) {
                    let patch = FirefighterPatch::new()
                        .name(*name)
                        .oxygen_level(*oxygen)
                        .exit_time(*exit);
                    team = team.with_firefighter(slot, &patch);
                }
            }
            team
        })
        .collect()
}
