//! Team collection persistence
//!
//! Features:
//! - Flat JSON array of teams under one storage key
//! - Pluggable key/value backend (LocalStorage on web, memory natively)
//! - Missing or corrupt data degrades to "absent", never to an error
//! - Explicit initialization step that seeds defaults once

pub mod error;
pub mod storage;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use storage::Storage;
pub use store::{TeamStore, find_by_id};
