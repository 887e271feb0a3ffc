//! Team and firefighter data model
//!
//! Plain records plus patch structures. Every update is a pure shallow merge
//! that returns a new value; nothing here touches storage.

pub mod firefighter;
pub mod oxygen;
pub mod seed;
pub mod team;

pub use firefighter::{Firefighter, FirefighterPatch, Slot, SlotIndicator};
pub use oxygen::OxygenBand;
pub use seed::initial_teams;
pub use team::{Team, TeamPatch, TeamStatus};
