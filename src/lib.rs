//! This crate provides the data layer of a bullet journal.
//!
//! Its core is the calendar planner: tasks are assigned to a day, or to the "future" log, and the [`calendar`] module
//! computes the month, week and year grids that display them. Tasks can be moved (postponed) from a bucket to another.
//!
//! Besides the planner, a journal holds checklists ([`lists`]), habit trackers ([`trackers`]), daily
//! mood/stress/sleep ratings ([`wellness`]), free-text logs ([`logs`]) and a letter to yourself ([`letter`]). \
//! Everything is stored as JSON in a [`KeyValueStore`](traits::KeyValueStore), through a [`Journal`](journal::Journal).

pub mod traits;

pub mod calendar;
mod item;
pub use item::ItemId;
mod task;
pub use task::Task;
pub mod planner;
pub use planner::Planner;

pub mod lists;
pub mod trackers;
pub mod wellness;
pub mod logs;
pub mod letter;

pub mod store;
pub mod journal;
pub use journal::Journal;

pub mod config;
pub mod utils;
