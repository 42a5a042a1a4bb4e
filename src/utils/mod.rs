//! Some utility functions

pub mod comparison;

use chrono::Datelike;

use crate::traits::Identified;
use crate::item::ItemId;
use crate::task::Task;
use crate::calendar::{GridDay, MonthGrid};
use crate::calendar::view::{highlight, Highlight};
use crate::calendar::{tasks_for_date, DateKey};

/// Replace the item that has the same ID as `item`, or append it to the collection
pub fn upsert<T: Identified>(items: &mut Vec<T>, item: T) {
    match items.iter().position(|i| i.id() == item.id()) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}

/// Remove the item with the given ID. Returns whether something has been removed
pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &ItemId) -> bool {
    let len_before = items.len();
    items.retain(|i| i.id() != id);
    items.len() != len_before
}

/// Find an item by its ID
pub fn find_by_id<'a, T: Identified>(items: &'a [T], id: &ItemId) -> Option<&'a T> {
    items.iter().find(|i| i.id() == id)
}

/// Find an item by its ID
pub fn find_by_id_mut<'a, T: Identified>(items: &'a mut [T], id: &ItemId) -> Option<&'a mut T> {
    items.iter_mut().find(|i| i.id() == id)
}


/// A debug utility that pretty-prints a month grid, with the number of tasks of every day
pub fn print_month_grid(grid: &MonthGrid, tasks: &[Task], selected: Option<&DateKey>) {
    println!("{}", grid.days()[0].date().format("grid starting on %A %Y-%m-%d"));
    println!(" Sun  Mon  Tue  Wed  Thu  Fri  Sat");
    for week in grid.weeks() {
        let line: Vec<String> = week.iter()
            .map(|day| format_day(day, tasks_for_date(tasks, day.key()).len(), selected))
            .collect();
        println!("{}", line.join(""));
    }
}

fn format_day(day: &GridDay, n_tasks: usize, selected: Option<&DateKey>) -> String {
    let (open, close) = match highlight(day, selected) {
        Highlight::Selected => ('[', ']'),
        Highlight::Today => ('(', ')'),
        Highlight::CurrentPeriod => (' ', ' '),
        Highlight::Outside => return "   . ".to_string(),
    };
    let marker = if n_tasks > 0 { '*' } else { ' ' };
    format!("{}{:>2}{}{}", open, day.date().day(), close, marker)
}

pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    println!("    {} {}\t{}\t{}", completion, task.text(), task.date(), task.id());
}
