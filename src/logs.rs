//! Journal logs: free-text pages attached to a day, a week, a month, or to the future

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};

use crate::item::ItemId;
use crate::traits::Identified;
use crate::calendar::{date_key, week_start, DateKey};


/// The timeframe a log is about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Future,
    Monthly,
    Weekly,
    Daily,
}

impl LogKind {
    pub fn all() -> [LogKind; 4] {
        [LogKind::Future, LogKind::Monthly, LogKind::Weekly, LogKind::Daily]
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogKind::Future => "Future Log",
            LogKind::Monthly => "Monthly Log",
            LogKind::Weekly => "Weekly Log",
            LogKind::Daily => "Daily Log",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LogKind::Future => "High-level goals and plans",
            LogKind::Monthly => "Goals for a month",
            LogKind::Weekly => "Weekly plans and tasks",
            LogKind::Daily => "Today's tasks and reflections",
        }
    }
}


/// A log page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    id: ItemId,
    #[serde(rename = "type")]
    kind: LogKind,
    title: String,
    content: String,
    /// The day of a daily log
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<DateKey>,
    /// The `YYYY-MM` month of a monthly log
    #[serde(default, skip_serializing_if = "Option::is_none")]
    month: Option<String>,
    /// The first day (a Sunday) of a weekly log
    #[serde(default, skip_serializing_if = "Option::is_none")]
    week: Option<DateKey>,
    /// An optional free-form category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
}

impl LogEntry {
    /// Create an empty log of the given kind, for the timeframe `today` is in.
    ///
    /// Returns `None` if the title is blank.
    pub fn new(kind: LogKind, title: &str, today: NaiveDate) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let (date, month, week) = match kind {
            LogKind::Daily => (Some(date_key(today)), None, None),
            LogKind::Monthly => (None, Some(today.format("%Y-%m").to_string()), None),
            LogKind::Weekly => (None, None, Some(date_key(week_start(today)))),
            LogKind::Future => (None, None, None),
        };

        Some(Self {
            id: ItemId::random(),
            kind,
            title: title.to_string(),
            content: String::new(),
            date,
            month,
            week,
            domain: None,
            created_at: crate::item::now(),
        })
    }

    pub fn id(&self) -> &ItemId               { &self.id      }
    pub fn kind(&self) -> LogKind             { self.kind     }
    pub fn title(&self) -> &str               { &self.title   }
    pub fn content(&self) -> &str             { &self.content }
    pub fn date(&self) -> Option<&DateKey>    { self.date.as_ref()   }
    pub fn month(&self) -> Option<&str>       { self.month.as_deref() }
    pub fn week(&self) -> Option<&DateKey>    { self.week.as_ref()   }
    pub fn domain(&self) -> Option<&str>      { self.domain.as_deref() }
    pub fn created_at(&self) -> &DateTime<Utc> { &self.created_at }

    pub fn set_title(&mut self, new_title: String) {
        self.title = new_title;
    }

    pub fn set_content(&mut self, new_content: String) {
        self.content = new_content;
    }

    pub fn set_domain(&mut self, domain: Option<String>) {
        self.domain = domain;
    }
}

impl Identified for LogEntry {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// The logs of a given kind, in insertion order
pub fn logs_of_kind(logs: &[LogEntry], kind: LogKind) -> Vec<&LogEntry> {
    logs.iter()
        .filter(|l| l.kind == kind)
        .collect()
}
