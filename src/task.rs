//! Calendar tasks

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::item::ItemId;
use crate::calendar::Bucket;

/// A task of the calendar planner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// The task ID, that never changes
    id: ItemId,

    /// The description of the task
    text: String,

    /// Whether the user has ticked this task
    completed: bool,

    /// The day this task is planned for, or the future log
    date: Bucket,

    /// The time this task was created.
    /// This is only used to order tasks that have nothing else to be sorted by
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
}


impl Task {
    /// Create a brand new Task.
    /// This will pick a new (random) task ID.
    pub fn new(text: String, date: Bucket) -> Self {
        Self::new_with_parameters(ItemId::random(), text, false, date, crate::item::now())
    }

    /// Create a new Task instance, e.g. when it has been read from a storage
    pub fn new_with_parameters(id: ItemId, text: String, completed: bool, date: Bucket, created_at: DateTime<Utc>) -> Self {
        Self { id, text, completed, date, created_at }
    }

    pub fn id(&self) -> &ItemId       { &self.id         }
    pub fn text(&self) -> &str        { &self.text       }
    pub fn completed(&self) -> bool   { self.completed   }
    pub fn date(&self) -> &Bucket     { &self.date       }
    pub fn created_at(&self) -> &DateTime<Utc> { &self.created_at }

    pub fn set_text(&mut self, new_text: String) {
        self.text = new_text;
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Move this task to another bucket
    pub fn set_date(&mut self, new_date: Bucket) {
        if let Bucket::Day(key) = &new_date {
            if key.is_well_formed() == false {
                log::warn!("Task {} is postponed to {:?}, which is not a valid date. It will not show up in any calendar view", self.id, key.as_str());
            }
        }
        self.date = new_date;
    }
}

impl crate::traits::Identified for Task {
    fn id(&self) -> &ItemId {
        &self.id
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format() {
        let json = r#"{"id":"1761000000000","text":"Buy milk","completed":false,"date":"future","createdAt":1761000000000}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id().as_str(), "1761000000000");
        assert_eq!(task.date(), &Bucket::Future);
        assert_eq!(task.created_at().timestamp_millis(), 1761000000000);

        assert_eq!(serde_json::to_string(&task).unwrap(), json);
    }

    #[test]
    fn toggling() {
        let mut task = Task::new("Buy milk".to_string(), Bucket::Future);
        assert!(task.completed() == false);
        task.toggle();
        assert!(task.completed());
        task.toggle();
        assert!(task.completed() == false);
    }
}
