//! Journal collections stored in a folder, including data written by the browser version of the journal

use std::convert::TryFrom;

use chrono::NaiveDate;

use pocket_journal::calendar::DateKey;
use pocket_journal::journal::{Collection, LoadError};
use pocket_journal::lists::List;
use pocket_journal::logs::{logs_of_kind, LogEntry, LogKind};
use pocket_journal::store::FolderStore;
use pocket_journal::trackers::{Tracker, TrackerKind, TrackerValue};
use pocket_journal::traits::KeyValueStore;
use pocket_journal::wellness::{self, Metric, Scale, WellnessEntry};
use pocket_journal::Journal;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn open(dir: &tempfile::TempDir) -> Journal<FolderStore> {
    Journal::new(FolderStore::from_folder(dir.path()).unwrap())
}

#[test]
fn test_collections_survive_a_reload() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    let today = ymd(2026, 10, 17);

    {
        let mut journal = open(&dir);

        let mut books = List::new("Books".to_string());
        books.add_item("Dune");
        journal.save_list(books).unwrap();

        let mut gym = Tracker::new("Gym", TrackerKind::Table, &["Duration"]).unwrap();
        gym.set_value(DateKey::from(today), "Duration", 45.0);
        journal.save_tracker(gym).unwrap();

        let mut entry = WellnessEntry::new(DateKey::from(today));
        entry.rate(Metric::Mood, 4).unwrap();
        journal.save_wellness_entry(entry).unwrap();

        journal.save_log(LogEntry::new(LogKind::Weekly, "Week 42", today).unwrap()).unwrap();
        journal.save_log(LogEntry::new(LogKind::Daily, "Saturday", today).unwrap()).unwrap();
        journal.save_letter("Dear me".to_string(), today).unwrap();
    }

    let journal = open(&dir);
    assert_eq!(journal.lists()[0].items()[0].text(), "Dune");
    assert_eq!(journal.trackers()[0].value(&DateKey::from(today), "Duration"), Some(&TrackerValue::Number(45.0)));
    assert_eq!(journal.wellness()[0].get(Metric::Mood), Some(Scale::try_from(4).unwrap()));
    let logs = journal.logs();
    assert_eq!(logs_of_kind(&logs, LogKind::Weekly)[0].week().map(|w| w.as_str()), Some("2026-10-11"));
    assert_eq!(journal.letter_content(), "Dear me");
}

#[test]
fn test_browser_data_is_readable() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FolderStore::from_folder(dir.path()).unwrap();
    store.set("journal_wellness", r#"[{"date":"2026-10-15","mood":3,"sleep":5},{"date":"2026-10-16","stress":2}]"#).unwrap();
    store.set("journal_letter", r#"{"content":"Hello","updatedAt":1760000000000}"#).unwrap();

    let journal = Journal::new(store);
    let recent = journal.recent_wellness(ymd(2026, 10, 17));
    assert_eq!(recent.len(), 2);
    let refs: Vec<&WellnessEntry> = recent.iter().collect();
    assert_eq!(wellness::average(&refs, Metric::Sleep), Some(5.0));
    assert_eq!(journal.letter_content(), "Hello");
}

#[test]
fn test_corrupted_collections_reset_to_empty() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    let mut store = FolderStore::from_folder(dir.path()).unwrap();
    store.set("journal_trackers", "[{\"id\": 12").unwrap();
    store.set("journal_wellness", r#"[{"date":"2026-10-15","mood":42}]"#).unwrap();

    let journal = Journal::new(store);
    assert!(matches!(journal.try_load::<Vec<Tracker>>(Collection::Trackers), Err(LoadError::Malformed { .. })));
    assert!(journal.trackers().is_empty());
    assert!(journal.wellness().is_empty());
}

#[test]
fn test_corrupted_collections_are_not_overwritten() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    let mut store = FolderStore::from_folder(dir.path()).unwrap();
    let stored_trackers = "[{\"id\": 12";
    let stored_wellness = r#"[{"date":"2026-10-01","mood":3},{"date":"2026-10-02","mood":4},{"date":"2026-10-03","mood":6}]"#;
    store.set("journal_trackers", stored_trackers).unwrap();
    store.set("journal_wellness", stored_wellness).unwrap();

    let mut journal = Journal::new(store);
    let water = Tracker::new("Water", TrackerKind::Calendar, &["Glasses"]).unwrap();
    assert!(journal.save_tracker(water).is_err());

    let mut entry = WellnessEntry::new(DateKey::from(ymd(2026, 10, 17)));
    entry.rate(Metric::Mood, 5).unwrap();
    assert!(journal.save_wellness_entry(entry).is_err());

    // The files are left untouched, even after a reload
    let journal = open(&dir);
    assert_eq!(journal.store().get("journal_trackers").unwrap().as_deref(), Some(stored_trackers));
    assert_eq!(journal.store().get("journal_wellness").unwrap().as_deref(), Some(stored_wellness));

    // Once the bad day is fixed, the whole history is readable again
    let mut store = FolderStore::from_folder(dir.path()).unwrap();
    store.set("journal_wellness", &stored_wellness.replace("\"mood\":6", "\"mood\":5")).unwrap();
    assert_eq!(Journal::new(store).wellness().len(), 3);
}
