//! Utilities to compare custom types
//!
//! These can be used to sort results, e.g. with `slice::sort_by`

use crate::task::Task;
use crate::lists::List;

/// Compare tasks by creation date, oldest first
pub fn compare_tasks_by_creation(left: &&Task, right: &&Task) -> std::cmp::Ordering {
    Ord::cmp(left.created_at(), right.created_at())
}

/// Compare alphabetically lists returned e.g. by [`crate::journal::Journal::lists`]
pub fn compare_lists_alpha(left: &List, right: &List) -> std::cmp::Ordering {
    Ord::cmp(&left.name().to_lowercase(), &right.name().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::calendar::Bucket;
    use crate::item::ItemId;

    #[test]
    fn sort_by_creation() {
        let older = Task::new_with_parameters(ItemId::from("b"), "b".to_string(), false, Bucket::Future, Utc.timestamp_millis_opt(1_000).unwrap());
        let newer = Task::new_with_parameters(ItemId::from("a"), "a".to_string(), false, Bucket::Future, Utc.timestamp_millis_opt(2_000).unwrap());
        let mut tasks = vec![&newer, &older];
        tasks.sort_by(compare_tasks_by_creation);
        assert_eq!(tasks[0].text(), "b");
    }

    #[test]
    fn sort_lists() {
        let mut lists = vec![List::new("groceries".to_string()), List::new("Books".to_string())];
        lists.sort_by(compare_lists_alpha);
        assert_eq!(lists[0].name(), "Books");
    }
}
