//! Month arithmetic and the date-to-grid-cell mapping.
//!
//! Weeks start on Sunday. Rows are 0-indexed from the week holding the first
//! of the month; columns are weekday numbers with Sunday = 0.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{CalError, Result};
use crate::types::{CellSpec, DAYS_PER_WEEK, MAX_CELLS, Membership};

/// First day of the given month.
pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(CalError::InvalidInput(format!(
            "month {} out of range (must be 1-12)",
            month
        )));
    }
    if year < 0 {
        return Err(CalError::InvalidInput(format!(
            "year {} out of range (must not be negative)",
            year
        )));
    }
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CalError::InvalidInput(format!("year {} is not supported", year)))
}

/// Last day of the given month: the day before the first of the following month.
pub fn last_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    first_of_month(year, month)?;
    let next = if month == 12 {
        let next_year = year
            .checked_add(1)
            .ok_or_else(|| CalError::InvalidInput(format!("year {} is not supported", year)))?;
        first_of_month(next_year, 1)?
    } else {
        first_of_month(year, month + 1)?
    };
    next.pred_opt()
        .ok_or_else(|| CalError::InvalidInput(format!("no day before {}", next)))
}

/// Weekday number, Sunday = 0 through Saturday = 6.
pub fn weekday_of(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Week row of `date` in the grid of the month starting at `first`.
///
/// Dates outside the month are clamped to its first or last day, so leading
/// fillers share row 0 and trailing fillers share the last row. `first` must
/// be the first day of a month.
pub fn week_row(date: NaiveDate, first: NaiveDate) -> Result<u32> {
    if first.day() != 1 {
        return Err(CalError::InvalidInput(format!(
            "{} is not the first day of a month",
            first
        )));
    }
    let last = last_of_month(first.year(), first.month())?;
    Ok(row_within(date.clamp(first, last), first))
}

pub fn number_of_weeks(year: i32, month: u32) -> Result<u32> {
    Ok(CalendarMonth::new(year, month)?.number_of_weeks())
}

fn row_within(date: NaiveDate, first: NaiveDate) -> u32 {
    (date.day() + weekday_of(first) - 1) / DAYS_PER_WEEK
}

/// A validated year/month pair with its boundary dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
    first: NaiveDate,
    last: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let first = first_of_month(year, month)?;
        let last = last_of_month(year, month)?;
        Ok(CalendarMonth {
            year,
            month,
            first,
            last,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_of_month(&self) -> NaiveDate {
        self.first
    }

    pub fn last_of_month(&self) -> NaiveDate {
        self.last
    }

    /// Row of `date`, clamped into this month.
    pub fn week_row(&self, date: NaiveDate) -> u32 {
        row_within(date.clamp(self.first, self.last), self.first)
    }

    pub fn number_of_weeks(&self) -> u32 {
        self.week_row(self.last) + 1
    }

    pub fn membership_of(&self, date: NaiveDate) -> Membership {
        if date < self.first {
            Membership::LeadingFiller
        } else if date > self.last {
            Membership::TrailingFiller
        } else {
            Membership::CurrentMonth
        }
    }

    /// The Sunday on or before the first of the month.
    pub fn grid_start(&self) -> Result<NaiveDate> {
        self.first
            .checked_sub_days(Days::new(weekday_of(self.first) as u64))
            .ok_or_else(|| CalError::InvalidInput(format!("no grid start for {}", self.first)))
    }

    /// The Saturday on or after the last of the month.
    pub fn grid_end(&self) -> Result<NaiveDate> {
        self.last
            .checked_add_days(Days::new((6 - weekday_of(self.last)) as u64))
            .ok_or_else(|| CalError::InvalidInput(format!("no grid end for {}", self.last)))
    }
}

/// Every cell needed to show one month in complete weeks, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    month: CalendarMonth,
    number_of_weeks: u32,
    cells: Vec<CellSpec>,
}

impl MonthGrid {
    pub fn new(month: CalendarMonth) -> Result<Self> {
        let end = month.grid_end()?;
        let mut cells = Vec::with_capacity(MAX_CELLS);

        for date in month.grid_start()?.iter_days().take_while(|d| *d <= end) {
            cells.push(CellSpec {
                date,
                column: weekday_of(date),
                row: month.week_row(date),
                membership: month.membership_of(date),
            });
        }

        let number_of_weeks = month.number_of_weeks();
        debug_assert_eq!(cells.len(), (number_of_weeks * DAYS_PER_WEEK) as usize);
        log::debug!(
            "{}-{:02}: {} weeks, {} cells",
            month.year(),
            month.month(),
            number_of_weeks,
            cells.len()
        );

        Ok(MonthGrid {
            month,
            number_of_weeks,
            cells,
        })
    }

    pub fn month(&self) -> &CalendarMonth {
        &self.month
    }

    pub fn number_of_weeks(&self) -> u32 {
        self.number_of_weeks
    }

    pub fn cells(&self) -> &[CellSpec] {
        &self.cells
    }

    pub fn count(&self, membership: Membership) -> usize {
        self.cells
            .iter()
            .filter(|c| c.membership == membership)
            .count()
    }
}
