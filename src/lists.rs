//! Free-form checklists (shopping lists, books to read...)

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::item::ItemId;
use crate::traits::Identified;
use crate::utils::{find_by_id_mut, remove_by_id};


/// An entry of a [`List`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    id: ItemId,
    text: String,
    completed: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
}

impl ListItem {
    pub fn new(text: String) -> Self {
        Self {
            id: ItemId::random(),
            text,
            completed: false,
            created_at: crate::item::now(),
        }
    }

    pub fn id(&self) -> &ItemId     { &self.id        }
    pub fn text(&self) -> &str      { &self.text      }
    pub fn completed(&self) -> bool { self.completed  }
    pub fn created_at(&self) -> &DateTime<Utc> { &self.created_at }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

impl Identified for ListItem {
    fn id(&self) -> &ItemId {
        &self.id
    }
}


/// A named list of items
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    id: ItemId,
    name: String,
    items: Vec<ListItem>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
}

impl List {
    /// Create a new, empty list.
    /// This will pick a new (random) list ID.
    pub fn new(name: String) -> Self {
        Self {
            id: ItemId::random(),
            name,
            items: Vec::new(),
            created_at: crate::item::now(),
        }
    }

    pub fn id(&self) -> &ItemId       { &self.id    }
    pub fn name(&self) -> &str        { &self.name  }
    pub fn items(&self) -> &[ListItem] { &self.items }
    pub fn created_at(&self) -> &DateTime<Utc> { &self.created_at }

    pub fn rename(&mut self, new_name: String) {
        self.name = new_name;
    }

    /// Append an item to this list.
    /// Surrounding whitespace is trimmed, and blank items are ignored (`None` is returned then)
    pub fn add_item(&mut self, text: &str) -> Option<&ListItem> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.items.push(ListItem::new(text.to_string()));
        self.items.last()
    }

    /// Returns whether an item with this ID exists
    pub fn toggle_item(&mut self, item_id: &ItemId) -> bool {
        match find_by_id_mut(&mut self.items, item_id) {
            None => false,
            Some(item) => {
                item.toggle();
                true
            }
        }
    }

    /// Returns whether an item with this ID existed
    pub fn delete_item(&mut self, item_id: &ItemId) -> bool {
        remove_by_id(&mut self.items, item_id)
    }

    /// How many items are ticked, out of how many
    pub fn progress(&self) -> (usize, usize) {
        let done = self.items.iter().filter(|i| i.completed()).count();
        (done, self.items.len())
    }
}

impl Identified for List {
    fn id(&self) -> &ItemId {
        &self.id
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items() {
        let mut list = List::new("Groceries".to_string());
        assert!(list.add_item("   ").is_none());
        let milk = list.add_item("  milk ").unwrap().id().clone();
        let eggs = list.add_item("eggs").unwrap().id().clone();
        assert_eq!(list.items()[0].text(), "milk");

        assert!(list.toggle_item(&milk));
        assert_eq!(list.progress(), (1, 2));
        assert!(list.toggle_item(&ItemId::from("nope")) == false);

        assert!(list.delete_item(&eggs));
        assert!(list.delete_item(&eggs) == false);
        assert_eq!(list.progress(), (1, 1));
    }

    #[test]
    fn reads_browser_data() {
        let json = r#"[{"id":"1","name":"Books","items":[{"id":"2","text":"Dune","completed":true,"createdAt":1700000000001}],"createdAt":1700000000000}]"#;
        let lists: Vec<List> = serde_json::from_str(json).unwrap();
        assert_eq!(lists[0].name(), "Books");
        assert!(lists[0].items()[0].completed());
        assert_eq!(serde_json::to_string(&lists).unwrap(), json);
    }
}
