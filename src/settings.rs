//! Dashboard configuration
//!
//! Persisted separately from the team collection. Missing fields fall back to
//! defaults so older stored configs keep loading.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::{Storage, StoreResult};
use crate::view::ViewMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Shown in the header and on detail screens
    pub station_name: String,
    pub unit_name: String,
    /// Key the team array is stored under
    pub storage_key: String,
    /// Seed the default teams when nothing usable is stored
    pub seed_on_empty: bool,
    /// Layout at start-up; toggles are not written back
    pub initial_view: ViewMode,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            station_name: DEFAULT_STATION_NAME.to_string(),
            unit_name: DEFAULT_UNIT_NAME.to_string(),
            storage_key: TEAMS_STORAGE_KEY.to_string(),
            seed_on_empty: true,
            initial_view: ViewMode::Grid,
        }
    }
}

impl DashboardConfig {
    const STORAGE_KEY: &'static str = CONFIG_STORAGE_KEY;

    /// Load config from storage, falling back to defaults
    pub fn load<S: Storage + ?Sized>(storage: &S) -> Self {
        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded dashboard config");
                    return config;
                }
                Err(e) => log::warn!("Ignoring malformed dashboard config: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Failed to read dashboard config: {}", e),
        }

        log::info!("Using default dashboard config");
        Self::default()
    }

    pub fn save<S: Storage + ?Sized>(&self, storage: &mut S) -> StoreResult<()> {
        let json = serde_json::to_string(self)?;
        storage.set_item(Self::STORAGE_KEY, &json)?;
        log::info!("Dashboard config saved");
        Ok(())
    }
}
