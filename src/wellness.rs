//! Daily mood, stress and sleep ratings

use std::convert::TryFrom;
use std::error::Error;

use serde::{Deserialize, Serialize};
use chrono::{Duration, NaiveDate};

use crate::calendar::{date_key, DateKey};


/// A rating on a 1 to 5 scale
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Scale(u8);

impl Scale {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Scale {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Scale(value))
        } else {
            Err(format!("{} is not on a {}-{} scale", value, Self::MIN, Self::MAX))
        }
    }
}

impl From<Scale> for u8 {
    fn from(scale: Scale) -> u8 {
        scale.0
    }
}


/// What is being rated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Mood,
    Stress,
    Sleep,
}

impl Metric {
    pub fn all() -> [Metric; 3] {
        [Metric::Mood, Metric::Stress, Metric::Sleep]
    }

    /// The labels of the 1 to 5 ratings
    fn labels(&self) -> [&'static str; 5] {
        match self {
            Metric::Mood => ["Terrible", "Bad", "Neutral", "Good", "Excellent"],
            Metric::Stress => ["Minimal", "Light", "Moderate", "High", "Severe"],
            Metric::Sleep => ["Terrible", "Poor", "Fair", "Good", "Excellent"],
        }
    }

    pub fn label(&self, rating: Scale) -> &'static str {
        self.labels()[(rating.value() - Scale::MIN) as usize]
    }

    /// The label of an averaged rating, which is rounded to the nearest rating
    pub fn average_label(&self, average: f64) -> Option<&'static str> {
        let rounded = average.round();
        if rounded < Scale::MIN as f64 || rounded > Scale::MAX as f64 {
            return None;
        }
        Scale::try_from(rounded as u8).ok().map(|s| self.label(s))
    }
}


/// The ratings of a day. Every rating is optional
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WellnessEntry {
    date: DateKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mood: Option<Scale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stress: Option<Scale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sleep: Option<Scale>,
}

impl WellnessEntry {
    /// An entry with no rating yet
    pub fn new(date: DateKey) -> Self {
        Self { date, mood: None, stress: None, sleep: None }
    }

    pub fn date(&self) -> &DateKey {
        &self.date
    }

    pub fn get(&self, metric: Metric) -> Option<Scale> {
        match metric {
            Metric::Mood => self.mood,
            Metric::Stress => self.stress,
            Metric::Sleep => self.sleep,
        }
    }

    /// Set or clear a rating
    pub fn set(&mut self, metric: Metric, rating: Option<Scale>) {
        match metric {
            Metric::Mood => self.mood = rating,
            Metric::Stress => self.stress = rating,
            Metric::Sleep => self.sleep = rating,
        }
    }

    /// Set a rating from a raw number, checking it is on the 1-5 scale
    pub fn rate(&mut self, metric: Metric, rating: u8) -> Result<(), Box<dyn Error>> {
        let rating = Scale::try_from(rating)?;
        self.set(metric, Some(rating));
        Ok(())
    }
}


/// Replace the entry of the same day, or append it
pub fn upsert(entries: &mut Vec<WellnessEntry>, entry: WellnessEntry) {
    match entries.iter().position(|e| e.date == entry.date) {
        Some(index) => entries[index] = entry,
        None => entries.push(entry),
    }
}

/// The entry of a day, or a blank one if that day has not been rated yet
pub fn entry_for(entries: &[WellnessEntry], date: &DateKey) -> WellnessEntry {
    entries.iter()
        .find(|e| &e.date == date)
        .cloned()
        .unwrap_or_else(|| WellnessEntry::new(date.clone()))
}

/// The entries of the last `days` days (and any later one), sorted by date
pub fn recent(entries: &[WellnessEntry], today: NaiveDate, days: i64) -> Vec<&WellnessEntry> {
    let since = date_key(today.checked_sub_signed(Duration::days(days)).unwrap_or(NaiveDate::MIN));
    let mut recent: Vec<&WellnessEntry> = entries.iter()
        .filter(|e| e.date >= since)
        .collect();
    recent.sort_by(|a, b| a.date.cmp(&b.date));
    recent
}

/// The average rating of a metric, among the entries that have one
pub fn average(entries: &[&WellnessEntry], metric: Metric) -> Option<f64> {
    let values: Vec<f64> = entries.iter()
        .filter_map(|e| e.get(metric))
        .map(|s| s.value() as f64)
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
