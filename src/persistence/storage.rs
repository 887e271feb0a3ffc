//! Key/value storage seam
//!
//! Mirrors the browser `Storage` interface closely enough that LocalStorage
//! is a thin adapter, while tests and the native build use memory.

use super::error::StoreResult;

pub trait Storage {
    /// Value stored under `key`, `None` when unset
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;

    fn remove_item(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove_item(key)
    }
}
