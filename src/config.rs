//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Prefix of every key this crate writes into a [`KeyValueStore`](crate::traits::KeyValueStore) (e.g. `journal_lists`).
/// Feel free to override it when initing this library.
pub static KEY_PREFIX: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("journal_".to_string())));

/// How many days the wellness statistics look back by default
pub const DEFAULT_WELLNESS_WINDOW_DAYS: i64 = 30;

/// Options of a [`Journal`](crate::journal::Journal)
#[derive(Clone, Debug, PartialEq)]
pub struct JournalConfig {
    /// Prefix of the storage keys. Defaults to [`KEY_PREFIX`]
    pub key_prefix: String,
    /// Whether the tasks of the calendar planner are saved to the store.
    /// When this is off, calendar tasks only live as long as their [`Planner`](crate::planner::Planner)
    pub persist_calendar_tasks: bool,
    /// How many days [`Journal::recent_wellness`](crate::journal::Journal::recent_wellness) looks back
    pub wellness_window_days: i64,
}

impl Default for JournalConfig {
    fn default() -> Self {
        let key_prefix = match KEY_PREFIX.lock() {
            Ok(prefix) => prefix.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };

        Self {
            key_prefix,
            persist_calendar_tasks: false,
            wellness_window_days: DEFAULT_WELLNESS_WINDOW_DAYS,
        }
    }
}

impl JournalConfig {
    pub fn with_calendar_persistence(mut self, persist: bool) -> Self {
        self.persist_calendar_tasks = persist;
        self
    }

    pub fn with_key_prefix<S: ToString>(mut self, prefix: S) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }
}
