//! Dashboard session
//!
//! Owns the in-memory team collection and the store behind it. Every edit
//! produces a new team value, swaps it in by id and persists before
//! returning, so a detail screen opened afterwards reads the change back
//! from storage.

use crate::model::{FirefighterPatch, Slot, Team, TeamPatch, initial_teams};
use crate::persistence::{Storage, TeamStore, find_by_id};
use crate::rescuers::{Rescuer, available_rescuers};
use crate::settings::DashboardConfig;
use crate::view::{Route, Screen, ViewMode};

pub struct Dashboard<S: Storage> {
    config: DashboardConfig,
    store: TeamStore<S>,
    teams: Vec<Team>,
    rescuers: Vec<Rescuer>,
    view_mode: ViewMode,
}

impl<S: Storage> Dashboard<S> {
    /// Initialize the session: restore stored teams or seed the defaults
    pub fn open(backend: S, config: DashboardConfig) -> Self {
        let mut store = TeamStore::new(backend, config.storage_key.clone());
        let defaults = if config.seed_on_empty {
            initial_teams()
        } else {
            Vec::new()
        };
        let teams = store.init(defaults);

        Self {
            view_mode: config.initial_view,
            config,
            store,
            teams,
            rescuers: available_rescuers(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: u32) -> Option<&Team> {
        find_by_id(&self.teams, id)
    }

    pub fn rescuers(&self) -> &[Rescuer] {
        &self.rescuers
    }

    pub fn store(&self) -> &TeamStore<S> {
        &self.store
    }

    pub fn into_store(self) -> TeamStore<S> {
        self.store
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.view_mode
    }

    /// Merge `patch` into team `id` and persist; `None` if no such team
    pub fn update_team(&mut self, id: u32, patch: &TeamPatch) -> Option<&Team> {
        let updated = self.team(id)?.merged(patch);
        self.commit(updated)
    }

    /// Merge `patch` into one firefighter slot of team `id` and persist
    pub fn update_firefighter(
        &mut self,
        id: u32,
        slot: Slot,
        patch: &FirefighterPatch,
    ) -> Option<&Team> {
        let updated = self.team(id)?.with_firefighter(slot, patch);
        self.commit(updated)
    }

    /// Flip PM identification for one firefighter and persist
    pub fn toggle_pm_identification(&mut self, id: u32, slot: Slot) -> Option<&Team> {
        let patch = self.team(id)?.firefighter(slot).pm_identification_toggle();
        self.update_firefighter(id, slot, &patch)
    }

    /// Swap `team` in by id, then write it through to storage
    fn commit(&mut self, team: Team) -> Option<&Team> {
        let index = self.teams.iter().position(|t| t.id() == team.id())?;
        self.teams[index] = team;
        let team = &self.teams[index];

        // Stored copy may be gone (cleared, corrupted); rewrite it whole
        let persisted = match self.store.replace(team) {
            Ok(true) => Ok(()),
            Ok(false) => {
                log::warn!("Team {} missing from storage, rewriting collection", team.id());
                self.store.save(&self.teams)
            }
            Err(e) => Err(e),
        };
        if let Err(e) = persisted {
            log::error!("Failed to persist team {}: {}", team.id(), e);
        }

        Some(&self.teams[index])
    }

    /// Team detail screen, read back from storage
    pub fn team_detail(&self, id: u32) -> Screen {
        match self.stored_team(id) {
            Some(team) => Screen::TeamDetail(team),
            None => {
                log::info!("Team not found, id: {}", id);
                Screen::NotFound
            }
        }
    }

    /// Firefighter detail screen for slot index 0 (A) or 1 (B)
    pub fn firefighter_detail(&self, id: u32, slot_index: usize) -> Screen {
        let Some(slot) = Slot::from_index(slot_index) else {
            log::info!("Firefighter slot {} not found in team {}", slot_index, id);
            return Screen::NotFound;
        };
        match self.stored_team(id) {
            Some(team) => Screen::FirefighterDetail { team, slot },
            None => {
                log::info!("Team not found, id: {}", id);
                Screen::NotFound
            }
        }
    }

    pub fn resolve(&self, route: &Route) -> Screen {
        match *route {
            Route::Overview => Screen::Overview,
            Route::Team(id) => self.team_detail(id),
            Route::Firefighter { team_id, slot } => self.firefighter_detail(team_id, slot.index()),
            Route::NotFound => Screen::NotFound,
        }
    }

    fn stored_team(&self, id: u32) -> Option<Team> {
        let teams = self.store.load()?;
        find_by_id(&teams, id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OxygenBand, SlotIndicator, TeamStatus};
    use crate::platform::MemoryStorage;

    fn dashboard() -> Dashboard<MemoryStorage> {
        Dashboard::open(MemoryStorage::new(), DashboardConfig::default())
    }

    #[test]
    fn test_open_seeds_and_persists() {
        let dash = dashboard();
        assert_eq!(dash.teams().len(), 8);
        assert_eq!(dash.store().load().as_deref(), Some(dash.teams()));
        assert_eq!(dash.rescuers().len(), 8);
    }

    #[test]
    fn test_open_without_seeding() {
        let config = DashboardConfig {
            seed_on_empty: false,
            ..Default::default()
        };
        let dash = Dashboard::open(MemoryStorage::new(), config);
        assert!(dash.teams().is_empty());
        assert!(dash.team_detail(1).is_not_found());
    }

    #[test]
    fn test_reopen_restores_edits() {
        let mut backend = MemoryStorage::new();
        {
            let mut dash = Dashboard::open(&mut backend, DashboardConfig::default());
            dash.update_team(4, &TeamPatch::new().status(TeamStatus::Danger))
                .unwrap();
        }
        let dash = Dashboard::open(backend, DashboardConfig::default());
        assert_eq!(dash.team(4).map(|t| t.status), Some(TeamStatus::Danger));
    }

    #[test]
    fn test_firefighter_update_scenario() {
        let mut backend = MemoryStorage::new();
        let teams = vec![Team::new(1)];
        TeamStore::new(&mut backend, "teams").save(&teams).unwrap();

        let mut dash = Dashboard::open(backend, DashboardConfig::default());
        let updated = dash
            .update_firefighter(1, Slot::A, &FirefighterPatch::new().oxygen_level(150))
            .unwrap()
            .clone();

        assert_eq!(updated.firefighter(Slot::A).oxygen_band(), OxygenBand::Warning);
        assert_eq!(updated.firefighter(Slot::B).oxygen_band(), OxygenBand::Safe);
        assert_eq!(updated.id(), 1);
        assert_eq!(updated.status, TeamStatus::Standby);

        // Detail view reads the write back from storage
        assert_eq!(dash.team_detail(1), Screen::TeamDetail(updated));
    }

    #[test]
    fn test_toggle_pm_identification() {
        let mut dash = dashboard();
        let team = dash.toggle_pm_identification(6, Slot::B).unwrap().clone();
        assert_eq!(team.firefighter(Slot::B).indicator(), SlotIndicator::PmIdentification);
        assert!(!team.firefighter(Slot::A).pm_identification_active);

        let screen = dash.firefighter_detail(6, 1);
        assert_eq!(screen.firefighter().map(|f| f.pm_identification_active), Some(true));

        let team = dash.toggle_pm_identification(6, Slot::B).unwrap();
        assert_eq!(
            team.firefighter(Slot::B).indicator(),
            SlotIndicator::Oxygen(OxygenBand::Danger)
        );
        assert!(dash.toggle_pm_identification(99, Slot::A).is_none());
    }

    #[test]
    fn test_update_unknown_team() {
        let mut dash = dashboard();
        let before = dash.store().load();
        assert!(dash.update_team(99, &TeamPatch::new().kind("RIT")).is_none());
        assert!(dash
            .update_firefighter(99, Slot::B, &FirefighterPatch::new().exit_time(5))
            .is_none());
        assert_eq!(dash.store().load(), before);
    }

    #[test]
    fn test_update_rewrites_cleared_storage() {
        let mut dash = dashboard();
        dash.store.clear().unwrap();
        dash.update_team(2, &TeamPatch::new().exit_time(12)).unwrap();

        let stored = dash.store().load().unwrap();
        assert_eq!(stored.len(), 8);
        assert_eq!(find_by_id(&stored, 2).map(|t| t.exit_time), Some(12));
    }

    #[test]
    fn test_detail_not_found() {
        let dash = dashboard();
        assert_eq!(dash.team_detail(99), Screen::NotFound);
        assert_eq!(dash.firefighter_detail(99, 0), Screen::NotFound);
        assert_eq!(dash.firefighter_detail(1, 2), Screen::NotFound);
        assert_eq!(dash.team_detail(99).back_route(), Route::Overview);
    }

    #[test]
    fn test_resolve_routes() {
        let dash = dashboard();
        assert_eq!(dash.resolve(&Route::parse("/")), Screen::Overview);

        let screen = dash.resolve(&Route::parse("/team/6/firefighter/1"));
        assert_eq!(screen.firefighter().map(|f| f.name.as_str()), Some("Szymański M."));
        assert_eq!(screen.team().map(Team::id), Some(6));

        assert!(dash.resolve(&Route::parse("/team/99")).is_not_found());
        assert!(dash.resolve(&Route::parse("/nope")).is_not_found());
    }

    #[test]
    fn test_corrupt_storage_detail_degrades() {
        let mut dash = dashboard();
        dash.store = TeamStore::new(
            {
                let mut backend = MemoryStorage::new();
                backend.set_item("teams", "{").unwrap();
                backend
            },
            "teams",
        );
        assert!(dash.team_detail(1).is_not_found());
    }

    #[test]
    fn test_view_mode_not_persisted() {
        let mut backend = MemoryStorage::new();
        {
            let mut dash = Dashboard::open(&mut backend, DashboardConfig::default());
            assert_eq!(dash.toggle_view_mode(), ViewMode::List);
        }
        let dash = Dashboard::open(backend, DashboardConfig::default());
        assert_eq!(dash.view_mode(), ViewMode::Grid);
    }
}
