//! A letter to yourself, that can be written all year long and is only revealed on December 31st

use std::error::Error;

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Datelike, NaiveDate, Utc};


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    content: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    updated_at: DateTime<Utc>,
}

impl Letter {
    pub fn new(content: String) -> Self {
        Self { content, updated_at: crate::item::now() }
    }

    pub fn content(&self) -> &str { &self.content }
    pub fn updated_at(&self) -> &DateTime<Utc> { &self.updated_at }

    /// Replace the content of the letter.
    ///
    /// On the unlock day, the letter is read-only and this fails.
    pub fn write(&mut self, content: String, today: NaiveDate) -> Result<(), Box<dyn Error>> {
        if is_unlocked(today) {
            return Err("The letter is read-only once it has been unlocked".into());
        }
        self.content = content;
        self.updated_at = crate::item::now();
        Ok(())
    }
}

/// The letter can be read on December 31st only
pub fn is_unlocked(today: NaiveDate) -> bool {
    today.month() == 12 && today.day() == 31
}

/// Number of days until the next unlock day (`0` on the unlock day itself)
pub fn days_until_unlock(today: NaiveDate) -> i64 {
    match NaiveDate::from_ymd_opt(today.year(), 12, 31) {
        Some(unlock_day) => (unlock_day - today).num_days(),
        None => 0,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn unlock_day() {
        assert!(is_unlocked(ymd(2026, 12, 31)));
        assert!(is_unlocked(ymd(2026, 12, 30)) == false);
        assert!(is_unlocked(ymd(2027, 1, 1)) == false);

        assert_eq!(days_until_unlock(ymd(2026, 12, 31)), 0);
        assert_eq!(days_until_unlock(ymd(2026, 12, 30)), 1);
        assert_eq!(days_until_unlock(ymd(2026, 10, 17)), 75);
        assert_eq!(days_until_unlock(ymd(2024, 1, 1)), 365);
    }

    #[test]
    fn read_only_once_unlocked() {
        let mut letter = Letter::new("Dear me".to_string());
        letter.write("Dear future me".to_string(), ymd(2026, 3, 1)).unwrap();
        assert_eq!(letter.content(), "Dear future me");

        assert!(letter.write("too late".to_string(), ymd(2026, 12, 31)).is_err());
        assert_eq!(letter.content(), "Dear future me");
    }

    #[test]
    fn wire_format() {
        let letter: Letter = serde_json::from_str(r#"{"content":"hello","updatedAt":1700000000000}"#).unwrap();
        assert_eq!(letter.content(), "hello");
        assert_eq!(letter.updated_at().timestamp_millis(), 1700000000000);
    }
}
