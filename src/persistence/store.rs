//! Team collection store
//!
//! Owns a storage backend and the key the team array lives under. There are
//! no transactions: the last `save` wins.

use super::error::StoreResult;
use super::storage::Storage;
use crate::model::Team;

/// Find the team whose `id` matches
pub fn find_by_id(teams: &[Team], id: u32) -> Option<&Team> {
    teams.iter().find(|t| t.id() == id)
}

/// Serialized team collection over a key/value backend
#[derive(Debug)]
pub struct TeamStore<S: Storage> {
    backend: S,
    key: String,
}

impl<S: Storage> TeamStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Read the stored collection
    ///
    /// Returns `None` when nothing is stored or the stored value does not
    /// parse; the failure is logged, never returned.
    pub fn load(&self) -> Option<Vec<Team>> {
        let json = match self.backend.get_item(&self.key) {
            Ok(Some(json)) => json,
            Ok(None) => {
                log::info!("No teams stored under '{}'", self.key);
                return None;
            }
            Err(e) => {
                log::warn!("Failed to read teams from storage: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<Vec<Team>>(&json) {
            Ok(teams) => {
                log::debug!("Loaded {} teams", teams.len());
                Some(teams)
            }
            Err(e) => {
                log::warn!("Failed to parse teams from storage: {}", e);
                None
            }
        }
    }

    /// Serialize the full collection, overwriting any previous value
    pub fn save(&mut self, teams: &[Team]) -> StoreResult<()> {
        let json = serde_json::to_string(teams)?;
        self.backend.set_item(&self.key, &json)?;
        log::debug!("Teams saved ({} entries)", teams.len());
        Ok(())
    }

    /// Load the stored collection, seeding `defaults` when nothing usable is
    /// stored
    pub fn init(&mut self, defaults: Vec<Team>) -> Vec<Team> {
        if let Some(teams) = self.load() {
            log::info!("Restored {} teams", teams.len());
            return teams;
        }

        if !defaults.is_empty() {
            match self.save(&defaults) {
                Ok(()) => log::info!("Seeded {} default teams", defaults.len()),
                Err(e) => log::error!("Failed to seed default teams: {}", e),
            }
        }
        defaults
    }

    /// Replace the stored team with the same id
    ///
    /// Returns `Ok(false)` without writing when the stored collection is
    /// absent or has no team with that id.
    pub fn replace(&mut self, team: &Team) -> StoreResult<bool> {
        let Some(mut teams) = self.load() else {
            return Ok(false);
        };
        let Some(slot) = teams.iter_mut().find(|t| t.id() == team.id()) else {
            return Ok(false);
        };
        *slot = team.clone();
        self.save(&teams)?;
        Ok(true)
    }

    /// Remove the stored collection
    pub fn clear(&mut self) -> StoreResult<()> {
        self.backend.remove_item(&self.key)?;
        log::info!("Stored teams cleared");
        Ok(())
    }
}
