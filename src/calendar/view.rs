//! The view model of the calendar: which view is displayed, how to navigate it, and what it contains

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::task::Task;
use super::grid::{annotate, month_grid, week_grid, year_slice, CalendarCell, GridDay, MonthGrid, YearHalf};
use super::{first_of_month, tasks_for_future, tasks_for_month, week_start, DateKey};


/// The kinds of views the calendar can show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Month,
    Week,
    Year,
    Future,
}

impl ViewKind {
    pub fn all() -> [ViewKind; 4] {
        [ViewKind::Month, ViewKind::Week, ViewKind::Year, ViewKind::Future]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewKind::Month => "month",
            ViewKind::Week => "week",
            ViewKind::Year => "year",
            ViewKind::Future => "future",
        }
    }
}


/// The view currently displayed, along with the fields this view needs
#[derive(Clone, Debug, PartialEq)]
pub enum CalendarView {
    /// The month `reference` is in
    Month { reference: NaiveDate },
    /// The week (Sunday to Saturday) `reference` is in
    Week { reference: NaiveDate },
    /// Six months of a year
    Year { year: i32, half: YearHalf },
    /// The tasks that have no date yet
    Future,
}

impl CalendarView {
    /// Open a view of the given kind around `reference`
    pub fn new(kind: ViewKind, reference: NaiveDate) -> Self {
        match kind {
            ViewKind::Month => CalendarView::Month { reference },
            ViewKind::Week => CalendarView::Week { reference },
            ViewKind::Year => CalendarView::Year { year: reference.year(), half: YearHalf::default() },
            ViewKind::Future => CalendarView::Future,
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            CalendarView::Month { .. } => ViewKind::Month,
            CalendarView::Week { .. } => ViewKind::Week,
            CalendarView::Year { .. } => ViewKind::Year,
            CalendarView::Future => ViewKind::Future,
        }
    }

    /// Go back one period (previous month, previous week, first half of the year).
    /// This is a no-op when there is nothing before.
    pub fn previous(&self) -> Self {
        match self {
            CalendarView::Month { reference } => {
                let first = first_of_month(*reference);
                CalendarView::Month { reference: first.checked_sub_months(Months::new(1)).unwrap_or(first) }
            },
            CalendarView::Week { reference } => {
                CalendarView::Week { reference: reference.checked_sub_signed(Duration::days(7)).unwrap_or(*reference) }
            },
            CalendarView::Year { year, half } => CalendarView::Year { year: *year, half: half.previous() },
            CalendarView::Future => CalendarView::Future,
        }
    }

    /// Go forward one period (next month, next week, second half of the year).
    /// This is a no-op when there is nothing after.
    pub fn next(&self) -> Self {
        match self {
            CalendarView::Month { reference } => {
                let first = first_of_month(*reference);
                CalendarView::Month { reference: first.checked_add_months(Months::new(1)).unwrap_or(first) }
            },
            CalendarView::Week { reference } => {
                CalendarView::Week { reference: reference.checked_add_signed(Duration::days(7)).unwrap_or(*reference) }
            },
            CalendarView::Year { year, half } => CalendarView::Year { year: *year, half: half.next() },
            CalendarView::Future => CalendarView::Future,
        }
    }

    /// A human-readable title for this view, e.g. "October 2026"
    pub fn title(&self) -> String {
        match self {
            CalendarView::Month { reference } => reference.format("%B %Y").to_string(),
            CalendarView::Week { reference } => {
                let start = week_start(*reference);
                let end = start.checked_add_signed(Duration::days(6)).unwrap_or(NaiveDate::MAX);
                format!("{} - {}", start.format("%B %-d"), end.format("%B %-d, %Y"))
            },
            CalendarView::Year { year, half } => match half {
                YearHalf::First => format!("{} (January - June)", year),
                YearHalf::Second => format!("{} (July - December)", year),
            },
            CalendarView::Future => String::from("Future Log"),
        }
    }

    /// Compute what this view shows
    pub fn content<'a>(&self, tasks: &'a [Task], today: NaiveDate) -> ViewContent<'a> {
        match self {
            CalendarView::Month { reference } => {
                let grid = month_grid(*reference, today);
                ViewContent::Month(annotate(grid.days(), tasks))
            },
            CalendarView::Week { reference } => {
                ViewContent::Week(annotate(&week_grid(*reference, today), tasks))
            },
            CalendarView::Year { year, half } => {
                ViewContent::Year(year_slice(*year, *half, today)
                    .into_iter()
                    .map(|grid| {
                        let month_tasks = tasks_for_month(tasks, grid.year(), grid.month());
                        (grid, month_tasks)
                    })
                    .collect()
                )
            },
            CalendarView::Future => ViewContent::Future(tasks_for_future(tasks)),
        }
    }
}


/// What a [`CalendarView`] displays
#[derive(Clone, Debug)]
pub enum ViewContent<'a> {
    /// 42 cells
    Month(Vec<CalendarCell<'a>>),
    /// 7 cells
    Week(Vec<CalendarCell<'a>>),
    /// Up to 6 month grids, each with the tasks of that month
    Year(Vec<(MonthGrid, Vec<&'a Task>)>),
    Future(Vec<&'a Task>),
}


/// How a day should be highlighted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    /// The day the user clicked on
    Selected,
    Today,
    /// A regular day of the displayed month or week
    CurrentPeriod,
    /// A day of the previous or next month, that only pads the grid
    Outside,
}

/// Selection takes precedence over the today-marker
pub fn highlight(day: &GridDay, selected: Option<&DateKey>) -> Highlight {
    if selected == Some(day.key()) {
        Highlight::Selected
    } else if day.is_today() {
        Highlight::Today
    } else if day.is_in_current_period() {
        Highlight::CurrentPeriod
    } else {
        Highlight::Outside
    }
}
