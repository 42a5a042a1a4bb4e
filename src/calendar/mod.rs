//! The calendar engine: date keys, task buckets, and the grids shown by the month, week and year views.
//!
//! Everything in here is a pure function over an explicit task slice and an explicit "today" date. \
//! Functions whose name ends in `_now` are conveniences that read "today" from the local clock.

pub mod grid;
pub mod view;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::task::Task;

pub use grid::{CalendarCell, GridDay, MonthGrid, YearHalf};
pub use view::{CalendarView, Highlight, ViewContent, ViewKind};

/// The literal stored in place of a date for tasks that are not scheduled yet
pub const FUTURE_SENTINEL: &str = "future";

/// The canonical `YYYY-MM-DD` format of a date key
const DATE_KEY_FORMAT: &str = "%Y-%m-%d";


/// The canonical `YYYY-MM-DD` identity of a calendar day.
///
/// Keys built with [`date_key`] are always well-formed. Keys read from storage or typed by the user are kept verbatim,
/// even when they do not describe a valid date: such keys never match any cell of a grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey {
    key: String,
}

impl DateKey {
    /// Keep a key as-is, without checking it is a valid date
    pub fn verbatim<S: Into<String>>(key: S) -> Self {
        Self { key: key.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// The calendar day this key describes, if it is well-formed
    pub fn to_date(&self) -> Option<NaiveDate> {
        let date = NaiveDate::parse_from_str(&self.key, DATE_KEY_FORMAT).ok()?;
        // chrono also accepts non-padded fields (e.g. "2026-3-1"), that would not be canonical
        if date_key(date).key == self.key {
            Some(date)
        } else {
            None
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.to_date().is_some()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        date_key(date)
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.key)
    }
}


/// The bucket a task is assigned to: a given day, or the "future" log for tasks with no date yet
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bucket {
    Future,
    Day(DateKey),
}

impl Bucket {
    pub fn is_future(&self) -> bool {
        match self {
            Bucket::Future => true,
            _ => false,
        }
    }

    /// The date key of this bucket, or `None` for the future log
    pub fn date_key(&self) -> Option<&DateKey> {
        match self {
            Bucket::Future => None,
            Bucket::Day(key) => Some(key),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Bucket::Future => FUTURE_SENTINEL,
            Bucket::Day(key) => key.as_str(),
        }
    }
}

impl From<NaiveDate> for Bucket {
    fn from(date: NaiveDate) -> Self {
        Bucket::Day(date_key(date))
    }
}
impl From<DateKey> for Bucket {
    fn from(key: DateKey) -> Self {
        Bucket::Day(key)
    }
}
impl From<&str> for Bucket {
    /// Any string other than the sentinel is taken as a date key, verbatim
    fn from(s: &str) -> Self {
        if s == FUTURE_SENTINEL {
            Bucket::Future
        } else {
            Bucket::Day(DateKey::verbatim(s))
        }
    }
}
impl FromStr for Bucket {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Display for Bucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

/// Used to support serde
impl Serialize for Bucket {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for Bucket {
    fn deserialize<D>(deserializer: D) -> Result<Bucket, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Bucket::from(s.as_str()))
    }
}


/// The canonical key of a calendar day.
///
/// This only depends on the calendar date, never on a time of day or a timezone.
pub fn date_key(date: NaiveDate) -> DateKey {
    DateKey { key: date.format(DATE_KEY_FORMAT).to_string() }
}

/// Today, according to the local clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The Sunday on or before `date`. Weeks always start on Sunday.
///
/// In the very first week chrono can represent, that Sunday does not exist, and this returns [`NaiveDate::MIN`].
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.checked_sub_signed(Duration::days(date.weekday().num_days_from_sunday() as i64))
        .unwrap_or(NaiveDate::MIN)
}

/// The first day of the month of `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

/// Tasks assigned to `key`, in insertion order
pub fn tasks_for_date<'a>(tasks: &'a [Task], key: &DateKey) -> Vec<&'a Task> {
    tasks.iter()
        .filter(|t| t.date().date_key() == Some(key))
        .collect()
}

/// Tasks that have no date yet, in insertion order
pub fn tasks_for_future(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter()
        .filter(|t| t.date().is_future())
        .collect()
}

/// Dated tasks that fall in the given month (`month` is 1-based), in insertion order.
///
/// Future tasks and tasks with a malformed date key are never part of a month.
pub fn tasks_for_month(tasks: &[Task], year: i32, month: u32) -> Vec<&Task> {
    tasks.iter()
        .filter(|t| {
            match t.date().date_key().and_then(|k| k.to_date()) {
                Some(d) => d.year() == year && d.month() == month,
                None => false,
            }
        })
        .collect()
}

/// Move a task to another bucket.
///
/// The task keeps its identity. The new date key is not validated: a malformed key is accepted, and the task will
/// then not show up in any calendar cell.
pub fn postpone(mut task: Task, bucket: Bucket) -> Task {
    task.set_date(bucket);
    task
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_keys_are_canonical() {
        assert_eq!(date_key(ymd(2026, 3, 1)).as_str(), "2026-03-01");
        assert_eq!(date_key(ymd(2026, 12, 31)).as_str(), "2026-12-31");
        assert_eq!(date_key(ymd(2026, 3, 1)), DateKey::from(ymd(2026, 3, 1)));
    }

    #[test]
    fn date_key_does_not_depend_on_the_time_of_day() {
        let morning = ymd(2026, 6, 1).and_hms_opt(0, 0, 1).unwrap();
        let night = ymd(2026, 6, 1).and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(date_key(morning.date()), date_key(night.date()));
    }

    #[test]
    fn malformed_keys_are_kept() {
        let key = DateKey::verbatim("next tuesday");
        assert!(key.is_well_formed() == false);
        assert!(DateKey::verbatim("2026-3-1").is_well_formed() == false);
        assert!(DateKey::verbatim("2026-02-30").is_well_formed() == false);
        assert_eq!(DateKey::verbatim("2026-03-01").to_date(), Some(ymd(2026, 3, 1)));
    }

    #[test]
    fn buckets_parse_the_sentinel() {
        assert_eq!(Bucket::from("future"), Bucket::Future);
        assert_eq!(Bucket::from("2026-03-01"), Bucket::Day(DateKey::verbatim("2026-03-01")));
        assert_eq!(serde_json::to_string(&Bucket::Future).unwrap(), "\"future\"");
        let b: Bucket = serde_json::from_str("\"2026-03-01\"").unwrap();
        assert_eq!(b, Bucket::from(ymd(2026, 3, 1)));
    }

    #[test]
    fn weeks_start_on_sunday() {
        // 2026-03-04 is a Wednesday
        assert_eq!(week_start(ymd(2026, 3, 4)), ymd(2026, 3, 1));
        assert_eq!(week_start(ymd(2026, 3, 1)), ymd(2026, 3, 1));
        assert_eq!(week_start(ymd(2026, 1, 1)), ymd(2025, 12, 28));
        assert_eq!(first_of_month(ymd(2024, 2, 29)), ymd(2024, 2, 1));
    }

    #[test]
    fn bucketing() {
        let tasks = vec![
            Task::new("a".to_string(), Bucket::from("2026-03-01")),
            Task::new("b".to_string(), Bucket::Future),
            Task::new("c".to_string(), Bucket::from("2026-03-01")),
            Task::new("d".to_string(), Bucket::from("2026-04-01")),
            Task::new("e".to_string(), Bucket::from("garbage")),
        ];

        let names: Vec<&str> = tasks_for_date(&tasks, &DateKey::verbatim("2026-03-01")).iter().map(|t| t.text()).collect();
        assert_eq!(names, vec!["a", "c"]);
        let names: Vec<&str> = tasks_for_future(&tasks).iter().map(|t| t.text()).collect();
        assert_eq!(names, vec!["b"]);
        assert!(tasks_for_date(&tasks, &DateKey::verbatim("2026-03-02")).is_empty());

        let names: Vec<&str> = tasks_for_month(&tasks, 2026, 3).iter().map(|t| t.text()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn postponing_keeps_the_identity() {
        let task = Task::new("Draft report".to_string(), Bucket::Future);
        let id = task.id().clone();
        let task = postpone(task, Bucket::from("2026-06-01"));
        assert_eq!(task.id(), &id);
        assert_eq!(task.date(), &Bucket::from("2026-06-01"));
    }
}
