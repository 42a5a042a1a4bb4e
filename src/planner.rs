//! The calendar planner: the task collection behind the month, week, year and future views

use chrono::NaiveDate;

use crate::task::Task;
use crate::item::ItemId;
use crate::calendar::{self, Bucket, CalendarView, DateKey, ViewContent};
use crate::utils::{find_by_id, find_by_id_mut, remove_by_id};


/// Owns the calendar tasks, in the order they have been created
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Planner {
    tasks: Vec<Task>,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    pub fn task(&self, id: &ItemId) -> Option<&Task> {
        find_by_id(&self.tasks, id)
    }

    /// Create a task in the given bucket.
    /// Surrounding whitespace is trimmed, and blank tasks are ignored (`None` is returned then)
    pub fn add_task(&mut self, text: &str, bucket: Bucket) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let task = Task::new(text.to_string(), bucket);
        log::debug!("New task {} in bucket {}", task.id(), task.date());
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Tick or untick a task. Returns whether a task with this ID exists
    pub fn toggle(&mut self, id: &ItemId) -> bool {
        self.update(id, |t| t.toggle())
    }

    /// Returns whether a task with this ID exists
    pub fn set_text(&mut self, id: &ItemId, new_text: String) -> bool {
        self.update(id, |t| t.set_text(new_text))
    }

    /// Move a task to another bucket. Returns whether the task has been moved.
    ///
    /// A blank date is not a bucket: it is ignored and the task stays where it is.
    pub fn postpone(&mut self, id: &ItemId, bucket: Bucket) -> bool {
        if let Bucket::Day(key) = &bucket {
            if key.as_str().trim().is_empty() {
                log::warn!("Not postponing task {} to a blank date", id);
                return false;
            }
        }
        self.update(id, |t| t.set_date(bucket))
    }

    /// Returns whether a task with this ID existed
    pub fn delete(&mut self, id: &ItemId) -> bool {
        remove_by_id(&mut self.tasks, id)
    }

    fn update<F: FnOnce(&mut Task)>(&mut self, id: &ItemId, f: F) -> bool {
        match find_by_id_mut(&mut self.tasks, id) {
            None => {
                log::warn!("No task with ID {}", id);
                false
            },
            Some(task) => {
                f(task);
                true
            }
        }
    }

    pub fn tasks_for_date(&self, key: &DateKey) -> Vec<&Task> {
        calendar::tasks_for_date(&self.tasks, key)
    }

    pub fn tasks_for_future(&self) -> Vec<&Task> {
        calendar::tasks_for_future(&self.tasks)
    }

    /// What `view` shows, with `today` marked
    pub fn view(&self, view: &CalendarView, today: NaiveDate) -> ViewContent<'_> {
        view.content(&self.tasks, today)
    }

    /// What `view` shows, according to the local clock
    pub fn view_now(&self, view: &CalendarView) -> ViewContent<'_> {
        self.view(view, calendar::today())
    }
}
