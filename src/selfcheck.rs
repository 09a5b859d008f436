//! Built-in self-checks run by `--test`.
//!
//! Each check sweeps the month math and grid builder over a range of years and
//! reports the first violation it finds.

use chrono::{Datelike, NaiveDate};

use crate::calendar::{CalendarMonth, MonthGrid, first_of_month, last_of_month};
use crate::error::Result;
use crate::types::{DAYS_PER_WEEK, Membership};

const FIRST_YEAR: i32 = 1900;
const LAST_YEAR: i32 = 2100;

/// Outcome of one named check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: &'static str,
    pub failure: Option<String>,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

type Outcome = std::result::Result<(), String>;
type Check = fn() -> Outcome;

const CHECKS: [(&str, Check); 8] = [
    ("first_of_month_is_day_one", check_first_day),
    ("last_of_month_precedes_next_first", check_last_day),
    ("number_of_weeks_in_range", check_week_count),
    ("grid_positions_unique", check_positions),
    ("current_month_cells_cover_month", check_current_month),
    ("november_2014_layout", check_november_2014),
    ("february_leap_years", check_february),
    ("current_month_dates_round_trip", check_round_trip),
];

pub fn run_self_checks() -> Vec<CheckResult> {
    CHECKS
        .iter()
        .map(|&(name, check)| CheckResult {
            name,
            failure: check().err(),
        })
        .collect()
}

/// Print results in `test <name> ... ok` form; returns true when all passed.
pub fn print_report(results: &[CheckResult]) -> bool {
    for result in results {
        match &result.failure {
            None => println!("test {} ... ok", result.name),
            Some(reason) => println!("test {} ... FAILED ({})", result.name, reason),
        }
    }
    let failed = results.iter().filter(|r| !r.passed()).count();
    let status = if failed == 0 { "ok" } else { "FAILED" };
    println!(
        "\ntest result: {}. {} passed; {} failed",
        status,
        results.len() - failed,
        failed
    );
    failed == 0
}

fn each_month(mut f: impl FnMut(i32, u32) -> Outcome) -> Outcome {
    for year in FIRST_YEAR..=LAST_YEAR {
        for month in 1..=12 {
            f(year, month)?;
        }
    }
    Ok(())
}

fn grid(year: i32, month: u32) -> std::result::Result<MonthGrid, String> {
    let built: Result<MonthGrid> = CalendarMonth::new(year, month).and_then(MonthGrid::new);
    built.map_err(|e| format!("{}-{:02}: {}", year, month, e))
}

fn check_first_day() -> Outcome {
    each_month(|year, month| {
        let first = first_of_month(year, month).map_err(|e| e.to_string())?;
        if first.day() != 1 {
            return Err(format!("{}-{:02} starts on day {}", year, month, first.day()));
        }
        Ok(())
    })
}

fn check_last_day() -> Outcome {
    each_month(|year, month| {
        let last = last_of_month(year, month).map_err(|e| e.to_string())?;
        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        let next = first_of_month(next_year, next_month).map_err(|e| e.to_string())?;
        if last.succ_opt() != Some(next) {
            return Err(format!("{} is not followed by {}", last, next));
        }
        Ok(())
    })
}

fn check_week_count() -> Outcome {
    each_month(|year, month| {
        let weeks = grid(year, month)?.number_of_weeks();
        if !(4..=6).contains(&weeks) {
            return Err(format!("{}-{:02} has {} weeks", year, month, weeks));
        }
        Ok(())
    })
}

fn check_positions() -> Outcome {
    each_month(|year, month| {
        let grid = grid(year, month)?;
        let weeks = grid.number_of_weeks();
        if grid.cells().len() != (weeks * DAYS_PER_WEEK) as usize {
            return Err(format!("{}-{:02} has {} cells", year, month, grid.cells().len()));
        }
        let mut seen = [[false; 7]; 6];
        for cell in grid.cells() {
            let slot = &mut seen[cell.row as usize][cell.column as usize];
            if *slot {
                return Err(format!("{} repeats ({}, {})", cell.date, cell.row, cell.column));
            }
            *slot = true;
        }
        if seen.iter().take(weeks as usize).any(|row| row.contains(&false)) {
            return Err(format!("{}-{:02} leaves a gap", year, month));
        }
        Ok(())
    })
}

fn check_current_month() -> Outcome {
    each_month(|year, month| {
        let grid = grid(year, month)?;
        let expected = grid.month().last_of_month().day() as usize;
        let found = grid.count(Membership::CurrentMonth);
        if found != expected {
            return Err(format!("{}-{:02}: {} current cells, expected {}", year, month, found, expected));
        }
        Ok(())
    })
}

fn check_november_2014() -> Outcome {
    let grid = grid(2014, 11)?;
    let month = grid.month();
    let actual = (
        month.first_of_month(),
        month.last_of_month(),
        grid.number_of_weeks(),
        grid.cells().len(),
        grid.count(Membership::LeadingFiller),
        grid.count(Membership::TrailingFiller),
    );
    let expected = (
        NaiveDate::from_ymd_opt(2014, 11, 1).ok_or("bad date")?,
        NaiveDate::from_ymd_opt(2014, 11, 30).ok_or("bad date")?,
        6,
        42,
        6,
        6,
    );
    if actual != expected {
        return Err(format!("unexpected layout {:?}", actual));
    }
    Ok(())
}

fn check_february() -> Outcome {
    for (year, day) in [(2014, 28), (2016, 29), (1900, 28), (2000, 29)] {
        let last = last_of_month(year, 2).map_err(|e| e.to_string())?;
        if last.day() != day {
            return Err(format!("February {} ends on {}", year, last.day()));
        }
    }
    Ok(())
}

fn check_round_trip() -> Outcome {
    each_month(|year, month| {
        let grid = grid(year, month)?;
        let stray = grid
            .cells()
            .iter()
            .filter(|c| c.membership == Membership::CurrentMonth)
            .find(|c| (c.date.year(), c.date.month()) != (year, month));
        match stray {
            Some(cell) => Err(format!("{} marked as {}-{:02}", cell.date, year, month)),
            None => Ok(()),
        }
    })
}
