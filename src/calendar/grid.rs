//! Month, week and year grids

use chrono::{Datelike, Duration, NaiveDate};

use crate::task::Task;
use super::{date_key, first_of_month, tasks_for_date, week_start, DateKey};

/// Number of cells of a month grid: 6 full weeks, which is enough to fit any month whatever its first weekday
pub const MONTH_GRID_LEN: usize = 42;
/// Number of cells of a week grid
pub const WEEK_GRID_LEN: usize = 7;
/// Number of months shown at once by the year view
pub const MONTHS_PER_YEAR_SLICE: u32 = 6;


/// A day of a grid
#[derive(Clone, Debug, PartialEq)]
pub struct GridDay {
    date: NaiveDate,
    key: DateKey,
    /// Whether this day belongs to the month (or week) the grid is built for.
    /// Month grids also show a few days of the previous and next months.
    is_in_current_period: bool,
    is_today: bool,
}

impl GridDay {
    fn new(date: NaiveDate, is_in_current_period: bool, today: NaiveDate) -> Self {
        Self {
            date,
            key: date_key(date),
            is_in_current_period,
            is_today: date == today,
        }
    }

    pub fn date(&self) -> NaiveDate           { self.date }
    pub fn key(&self) -> &DateKey             { &self.key }
    pub fn is_in_current_period(&self) -> bool { self.is_in_current_period }
    pub fn is_today(&self) -> bool            { self.is_today }
}


/// A day of a grid, along with the tasks planned for it
#[derive(Clone, Debug)]
pub struct CalendarCell<'a> {
    day: GridDay,
    tasks: Vec<&'a Task>,
}

impl<'a> CalendarCell<'a> {
    pub fn day(&self) -> &GridDay      { &self.day }
    pub fn tasks(&self) -> &[&'a Task] { &self.tasks }

    /// How many tasks are not shown when only the first `shown` ones are displayed
    pub fn overflow(&self, shown: usize) -> usize {
        self.tasks.len().saturating_sub(shown)
    }
}

/// Attach to every day the tasks that are planned for it
pub fn annotate<'a>(days: &[GridDay], tasks: &'a [Task]) -> Vec<CalendarCell<'a>> {
    days.iter()
        .map(|day| CalendarCell {
            day: day.clone(),
            tasks: tasks_for_date(tasks, day.key()),
        })
        .collect()
}


/// The 42-day grid shown for a month
#[derive(Clone, Debug, PartialEq)]
pub struct MonthGrid {
    year: i32,
    /// 1-based month
    month: u32,
    days: Vec<GridDay>,
}

impl MonthGrid {
    pub fn year(&self) -> i32        { self.year }
    pub fn month(&self) -> u32       { self.month }
    pub fn days(&self) -> &[GridDay] { &self.days }

    /// The grid, split in rows of 7 days (Sunday first)
    pub fn weeks(&self) -> std::slice::Chunks<'_, GridDay> {
        self.days.chunks(WEEK_GRID_LEN)
    }

    /// Only the days of this month
    pub fn current_month_days(&self) -> impl Iterator<Item = &GridDay> {
        self.days.iter().filter(|d| d.is_in_current_period())
    }
}

/// Build the grid of the month `reference` is in.
///
/// The grid starts on the Sunday on or before the first day of the month and spans 42 consecutive days. The day of
/// month of `reference` does not matter.
/// The grid is cut short at [`NaiveDate::MAX`], and starts no earlier than [`NaiveDate::MIN`].
pub fn month_grid(reference: NaiveDate, today: NaiveDate) -> MonthGrid {
    let start = week_start(first_of_month(reference));
    let days = consecutive_days(start, MONTH_GRID_LEN)
        .map(|date| {
            let in_month = date.year() == reference.year() && date.month() == reference.month();
            GridDay::new(date, in_month, today)
        })
        .collect();

    MonthGrid {
        year: reference.year(),
        month: reference.month(),
        days,
    }
}

/// Build the 7 days of the week `reference` is in, starting on Sunday
pub fn week_grid(reference: NaiveDate, today: NaiveDate) -> Vec<GridDay> {
    consecutive_days(week_start(reference), WEEK_GRID_LEN)
        .map(|date| GridDay::new(date, true, today))
        .collect()
}

/// Same as [`month_grid`], with today read from the local clock
pub fn month_grid_now(reference: NaiveDate) -> MonthGrid {
    month_grid(reference, super::today())
}

/// Same as [`week_grid`], with today read from the local clock
pub fn week_grid_now(reference: NaiveDate) -> Vec<GridDay> {
    week_grid(reference, super::today())
}

/// Up to `count` days from `start`. Fewer when the end of chrono's calendar is reached
fn consecutive_days(start: NaiveDate, count: usize) -> impl Iterator<Item = NaiveDate> {
    (0..count as i64).map_while(move |offset| start.checked_add_signed(Duration::days(offset)))
}


/// Which half of the year the year view shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YearHalf {
    /// January to June
    First,
    /// July to December
    Second,
}

impl Default for YearHalf {
    fn default() -> Self {
        YearHalf::First
    }
}

impl YearHalf {
    /// `0` is the first half, anything else is the second half
    pub fn from_offset(offset: u32) -> Self {
        if offset == 0 { YearHalf::First } else { YearHalf::Second }
    }

    pub fn offset(&self) -> u32 {
        match self {
            YearHalf::First => 0,
            YearHalf::Second => 1,
        }
    }

    /// The previous half. There is nothing before the first half, so this stays put.
    pub fn previous(&self) -> Self {
        YearHalf::First
    }

    /// The next half. There is nothing after the second half, so this stays put.
    pub fn next(&self) -> Self {
        YearHalf::Second
    }

    pub fn has_previous(&self) -> bool { *self == YearHalf::Second }
    pub fn has_next(&self) -> bool     { *self == YearHalf::First }

    /// The 1-based months of this half
    pub fn months(&self) -> impl Iterator<Item = u32> {
        let first = self.offset() * MONTHS_PER_YEAR_SLICE + 1;
        (first..first + MONTHS_PER_YEAR_SLICE).filter(|m| *m <= 12)
    }
}

/// The month grids of one half of `year`
pub fn year_slice(year: i32, half: YearHalf, today: NaiveDate) -> Vec<MonthGrid> {
    half.months()
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .map(|first| month_grid(first, today))
        .collect()
}
