use std::error::Error;

use crate::item::ItemId;

/// A synchronous key-value storage, where every journal collection is stored as a JSON string.
///
/// This is typically the browser `localStorage`, a folder on disk, or a map in memory.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if nothing has been stored yet
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error>>;
    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>>;
}

/// Items that have a unique ID, and can thus be updated or removed from a collection
pub trait Identified {
    fn id(&self) -> &ItemId;
}
