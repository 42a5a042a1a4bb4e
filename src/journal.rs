//! The journal: typed access to every collection kept in a [`KeyValueStore`]
//!
//! Stored data may be corrupted or hand-edited. Reading a collection therefore comes in two flavours:
//! * `try_load` returns a [`LoadError`] describing what went wrong
//! * the collection getters (`lists()`, `logs()`...) never fail: they reset to an empty collection, and log a warning
//!
//! The getters are meant for display. Every write (`save_list()`, `delete_log()`...) reads the collection through
//! `try_load`, and stops with the error when it cannot be read, so that unreadable data is never overwritten.

use std::error::Error;

use serde::de::DeserializeOwned;
use serde::Serialize;
use chrono::NaiveDate;

use crate::config::JournalConfig;
use crate::traits::KeyValueStore;
use crate::item::ItemId;
use crate::lists::List;
use crate::trackers::Tracker;
use crate::wellness::{self, WellnessEntry};
use crate::logs::LogEntry;
use crate::letter::Letter;
use crate::task::Task;
use crate::planner::Planner;
use crate::utils::{remove_by_id, upsert};


/// The collections a journal stores
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Lists,
    Trackers,
    Wellness,
    Logs,
    Letter,
    CalendarTasks,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Lists => "lists",
            Collection::Trackers => "trackers",
            Collection::Wellness => "wellness",
            Collection::Logs => "logs",
            Collection::Letter => "letter",
            Collection::CalendarTasks => "calendar_tasks",
        }
    }
}


/// Why a collection could not be read
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("unable to read {key:?} from the store: {message}")]
    Store { key: String, message: String },
    #[error("malformed data under {key:?}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}


/// A bullet journal, backed by a key-value store
pub struct Journal<S: KeyValueStore> {
    store: S,
    config: JournalConfig,
}

impl<S: KeyValueStore> Journal<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, JournalConfig::default())
    }

    pub fn with_config(store: S, config: JournalConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S { &self.store }
    pub fn config(&self) -> &JournalConfig { &self.config }

    /// The store key of a collection, e.g. `journal_lists`
    pub fn key(&self, collection: Collection) -> String {
        format!("{}{}", self.config.key_prefix, collection.name())
    }

    /// Read a collection. A collection that has never been saved is not an error, and is returned as `None`
    pub fn try_load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Option<T>, LoadError> {
        let key = self.key(collection);
        let raw = match self.store.get(&key) {
            Err(err) => return Err(LoadError::Store { key, message: err.to_string() }),
            Ok(None) => return Ok(None),
            Ok(Some(raw)) => raw,
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(source) => Err(LoadError::Malformed { key, source }),
        }
    }

    /// Read a collection, falling back to its default (empty) value if it is missing or unreadable
    fn load_or_reset<T: DeserializeOwned + Default>(&self, collection: Collection) -> T {
        match self.try_load(collection) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(err) => {
                log::warn!("Invalid {} data: {}. Using an empty collection", collection.name(), err);
                T::default()
            }
        }
    }

    /// Read a collection that is about to be modified. Unlike [`Self::load_or_reset`], a read error is returned.
    fn load_for_update<T: DeserializeOwned + Default>(&self, collection: Collection) -> Result<T, Box<dyn Error>> {
        match self.try_load(collection) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Ok(T::default()),
            Err(err) => {
                log::error!("Not updating {}: {}", collection.name(), err);
                Err(Box::new(err))
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&mut self, collection: Collection, value: &T) -> Result<(), Box<dyn Error>> {
        let key = self.key(collection);
        let raw = serde_json::to_string(value)?;
        self.store.set(&key, &raw)
    }


    pub fn lists(&self) -> Vec<List> {
        self.load_or_reset(Collection::Lists)
    }

    /// Insert a new list, or replace the list with the same ID
    pub fn save_list(&mut self, list: List) -> Result<(), Box<dyn Error>> {
        let mut lists: Vec<List> = self.load_for_update(Collection::Lists)?;
        upsert(&mut lists, list);
        self.save(Collection::Lists, &lists)
    }

    /// Returns whether a list with this ID existed
    pub fn delete_list(&mut self, id: &ItemId) -> Result<bool, Box<dyn Error>> {
        let mut lists: Vec<List> = self.load_for_update(Collection::Lists)?;
        let deleted = remove_by_id(&mut lists, id);
        self.save(Collection::Lists, &lists)?;
        Ok(deleted)
    }


    pub fn trackers(&self) -> Vec<Tracker> {
        self.load_or_reset(Collection::Trackers)
    }

    /// Insert a new tracker, or replace the tracker with the same ID
    pub fn save_tracker(&mut self, tracker: Tracker) -> Result<(), Box<dyn Error>> {
        let mut trackers: Vec<Tracker> = self.load_for_update(Collection::Trackers)?;
        upsert(&mut trackers, tracker);
        self.save(Collection::Trackers, &trackers)
    }

    /// Returns whether a tracker with this ID existed
    pub fn delete_tracker(&mut self, id: &ItemId) -> Result<bool, Box<dyn Error>> {
        let mut trackers: Vec<Tracker> = self.load_for_update(Collection::Trackers)?;
        let deleted = remove_by_id(&mut trackers, id);
        self.save(Collection::Trackers, &trackers)?;
        Ok(deleted)
    }


    pub fn wellness(&self) -> Vec<WellnessEntry> {
        self.load_or_reset(Collection::Wellness)
    }

    /// Insert the entry of a day, or replace the existing entry of that day
    pub fn save_wellness_entry(&mut self, entry: WellnessEntry) -> Result<(), Box<dyn Error>> {
        let mut entries: Vec<WellnessEntry> = self.load_for_update(Collection::Wellness)?;
        wellness::upsert(&mut entries, entry);
        self.save(Collection::Wellness, &entries)
    }

    /// The entries of the configured window before `today`, sorted by date
    pub fn recent_wellness(&self, today: NaiveDate) -> Vec<WellnessEntry> {
        let entries = self.wellness();
        wellness::recent(&entries, today, self.config.wellness_window_days)
            .into_iter()
            .cloned()
            .collect()
    }


    pub fn logs(&self) -> Vec<LogEntry> {
        self.load_or_reset(Collection::Logs)
    }

    /// Insert a new log, or replace the log with the same ID
    pub fn save_log(&mut self, log: LogEntry) -> Result<(), Box<dyn Error>> {
        let mut logs: Vec<LogEntry> = self.load_for_update(Collection::Logs)?;
        upsert(&mut logs, log);
        self.save(Collection::Logs, &logs)
    }

    /// Returns whether a log with this ID existed
    pub fn delete_log(&mut self, id: &ItemId) -> Result<bool, Box<dyn Error>> {
        let mut logs: Vec<LogEntry> = self.load_for_update(Collection::Logs)?;
        let deleted = remove_by_id(&mut logs, id);
        self.save(Collection::Logs, &logs)?;
        Ok(deleted)
    }


    /// The letter, if one has been written yet
    pub fn letter(&self) -> Option<Letter> {
        self.load_or_reset(Collection::Letter)
    }

    /// The content of the letter, or an empty string
    pub fn letter_content(&self) -> String {
        self.letter()
            .map(|l| l.content().to_string())
            .unwrap_or_default()
    }

    /// Write the letter. This fails on the unlock day, when the letter is read-only
    pub fn save_letter(&mut self, content: String, today: NaiveDate) -> Result<Letter, Box<dyn Error>> {
        let mut letter = self.load_for_update::<Option<Letter>>(Collection::Letter)?
            .unwrap_or_else(|| Letter::new(String::new()));
        letter.write(content, today)?;
        self.save(Collection::Letter, &letter)?;
        Ok(letter)
    }


    /// The calendar planner.
    ///
    /// Unless [`JournalConfig::persist_calendar_tasks`] is set, calendar tasks are not kept in the store, and this
    /// always returns an empty planner.
    pub fn planner(&self) -> Planner {
        if self.config.persist_calendar_tasks == false {
            return Planner::new();
        }
        Planner::from_tasks(self.load_or_reset::<Vec<Task>>(Collection::CalendarTasks))
    }

    /// Save the calendar tasks. This does nothing unless [`JournalConfig::persist_calendar_tasks`] is set
    pub fn save_planner(&mut self, planner: &Planner) -> Result<(), Box<dyn Error>> {
        if self.config.persist_calendar_tasks == false {
            log::debug!("Calendar tasks are not persisted, not saving {} tasks", planner.tasks().len());
            return Ok(());
        }
        self.save(Collection::CalendarTasks, planner.tasks())
    }
}
