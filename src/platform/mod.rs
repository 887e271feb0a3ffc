//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, memory natively)
//! - Numeric text input from form fields
//! - Wall-clock display

pub mod input;
pub mod storage;
pub mod time;

pub use input::parse_numeric_input;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::MemoryStorage;
pub use time::{clock_string, format_clock};
