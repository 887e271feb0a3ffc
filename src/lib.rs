//! Rescue Board - incident-scene dashboard for firefighter rescue teams
//!
//! Core modules:
//! - `model`: Teams, firefighters, patches and oxygen classification
//! - `persistence`: Team collection store over a key/value backend
//! - `platform`: Browser/native platform abstraction (storage, input, clock)
//! - `dashboard`: Session owning the team collection and its store
//! - `view`: View mode, routes and screens
//! - `settings`: Dashboard configuration
//! - `rescuers`: Roster of rescuers not assigned to a team

pub mod dashboard;
pub mod model;
pub mod persistence;
pub mod platform;
pub mod rescuers;
pub mod settings;
pub mod view;

pub use dashboard::Dashboard;
pub use model::{
    Firefighter, FirefighterPatch, OxygenBand, Slot, SlotIndicator, Team, TeamPatch, TeamStatus,
};
pub use persistence::{Storage, StoreError, StoreResult, TeamStore};
pub use settings::DashboardConfig;
pub use view::{Route, Screen, ViewMode};

/// Dashboard constants
pub mod consts {
    /// LocalStorage key holding the serialized team array
    pub const TEAMS_STORAGE_KEY: &str = "teams";
    /// LocalStorage key holding the dashboard configuration
    pub const CONFIG_STORAGE_KEY: &str = "rescue_board_config";

    /// Number of teams seeded at start-up
    pub const TEAM_COUNT: u32 = 8;

    /// Full cylinder pressure (bar), top of the nominal range
    pub const OXYGEN_FULL_BAR: u32 = 300;
    /// Lowest pressure still classified as safe (bar)
    pub const OXYGEN_SAFE_MIN_BAR: u32 = 200;
    /// Lowest pressure still classified as warning (bar)
    pub const OXYGEN_WARNING_MIN_BAR: u32 = 100;

    /// Default exit-time estimate for new teams and firefighters (minutes)
    pub const DEFAULT_EXIT_TIME_MIN: u32 = 40;

    pub const DEFAULT_STATION_NAME: &str = "Stacja Bazowa A4T";
    pub const DEFAULT_UNIT_NAME: &str = "JRG 3 Kraków";
}
