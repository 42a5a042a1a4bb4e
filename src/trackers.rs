//! Custom habit trackers: the user picks a few metrics, then fills in a value per day and per metric

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::item::ItemId;
use crate::traits::Identified;
use crate::calendar::{date_key, first_of_month, DateKey};


/// How a tracker is displayed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerKind {
    /// A spreadsheet: one row per day of the month, one column per metric
    Table,
    /// A month calendar
    Calendar,
}

/// A value entered in a tracker
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackerValue {
    Number(f64),
    Text(String),
}

impl Display for TrackerValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            TrackerValue::Number(n) => write!(f, "{}", n),
            TrackerValue::Text(t) => write!(f, "{}", t),
        }
    }
}

impl From<f64> for TrackerValue {
    fn from(n: f64) -> Self { TrackerValue::Number(n) }
}
impl From<&str> for TrackerValue {
    fn from(t: &str) -> Self { TrackerValue::Text(t.to_string()) }
}
impl From<String> for TrackerValue {
    fn from(t: String) -> Self { TrackerValue::Text(t) }
}


/// A habit tracker
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracker {
    id: ItemId,
    name: String,
    #[serde(rename = "type")]
    kind: TrackerKind,
    metrics: Vec<String>,
    /// date key -> metric -> value
    data: BTreeMap<DateKey, BTreeMap<String, TrackerValue>>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
}

impl Tracker {
    /// Create a new tracker.
    ///
    /// Names and metrics are trimmed, and blank metrics are dropped. This fails if the name is blank, or if no metric is left.
    pub fn new(name: &str, kind: TrackerKind, metrics: &[&str]) -> Result<Self, Box<dyn Error>> {
        let name = name.trim();
        if name.is_empty() {
            return Err("A tracker needs a name".into());
        }

        let metrics: Vec<String> = metrics.iter()
            .map(|m| m.trim())
            .filter(|m| m.is_empty() == false)
            .map(|m| m.to_string())
            .collect();
        if metrics.is_empty() {
            return Err(format!("Tracker {:?} needs at least one metric", name).into());
        }

        Ok(Self {
            id: ItemId::random(),
            name: name.to_string(),
            kind,
            metrics,
            data: BTreeMap::new(),
            created_at: crate::item::now(),
        })
    }

    pub fn id(&self) -> &ItemId         { &self.id      }
    pub fn name(&self) -> &str          { &self.name    }
    pub fn kind(&self) -> TrackerKind   { self.kind     }
    pub fn metrics(&self) -> &[String]  { &self.metrics }
    pub fn created_at(&self) -> &DateTime<Utc> { &self.created_at }

    /// The values entered for a day, by metric
    pub fn day(&self, date: &DateKey) -> Option<&BTreeMap<String, TrackerValue>> {
        self.data.get(date)
    }

    pub fn value(&self, date: &DateKey, metric: &str) -> Option<&TrackerValue> {
        self.data.get(date).and_then(|day| day.get(metric))
    }

    /// Set the value of a metric for a day. Other metrics of that day are kept
    pub fn set_value<V: Into<TrackerValue>>(&mut self, date: DateKey, metric: &str, value: V) {
        if self.metrics.iter().any(|m| m == metric) == false {
            log::debug!("Tracker {}: storing a value for {:?}, which is not one of its metrics", self.id, metric);
        }
        self.data.entry(date)
            .or_insert_with(BTreeMap::new)
            .insert(metric.to_string(), value.into());
    }

    /// Every day of the month `reference` is in. These are the rows of a [`TrackerKind::Table`] tracker
    pub fn month_days(reference: NaiveDate) -> Vec<DateKey> {
        let first = first_of_month(reference);
        (0..31)
            .map_while(|offset| first.checked_add_signed(Duration::days(offset)))
            .take_while(|d| d.month() == first.month())
            .map(date_key)
            .collect()
    }

    /// The layout of a [`TrackerKind::Calendar`] tracker: one blank per weekday before the 1st (weeks start on Sunday),
    /// then the day numbers of the month
    pub fn calendar_layout(reference: NaiveDate) -> Vec<Option<u32>> {
        let first = first_of_month(reference);
        let blanks = first.weekday().num_days_from_sunday() as usize;
        let days = Self::month_days(reference).len() as u32;

        std::iter::repeat(None).take(blanks)
            .chain((1..=days).map(Some))
            .collect()
    }
}

impl Identified for Tracker {
    fn id(&self) -> &ItemId {
        &self.id
    }
}
