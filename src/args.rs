//! Command-line argument parsing using clap.
//!
//! Arguments: `YEAR MONTH [LETTER|LEGAL|TABLOID]`

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueHint, value_parser};

use crate::calendar::CalendarMonth;
use crate::error::{CalError, Result};
use crate::types::{PageGeometry, PageSize};

/// Environment variable naming the directory the PDF is written to.
pub const OUTPUT_DIR_ENV: &str = "CALENDAR_PDF_DIR";

#[derive(Parser, Debug)]
#[command(name = "calendar-pdf")]
#[command(about = "Renders a one-month calendar as a printable PDF page", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Run the built-in self-checks and exit.
    #[arg(long = "test")]
    pub run_tests: bool,

    /// Year (0 or later).
    #[arg(
        index = 1,
        value_name = "YEAR",
        required_unless_present = "run_tests",
        value_parser = value_parser!(i32).range(0..),
        value_hint = ValueHint::Other
    )]
    pub year: Option<i32>,

    /// Month (1-12).
    #[arg(
        index = 2,
        value_name = "MONTH",
        required_unless_present = "run_tests",
        value_parser = value_parser!(u32).range(1..=12),
        value_hint = ValueHint::Other
    )]
    pub month: Option<u32>,

    /// Page size, printed in landscape orientation.
    #[arg(index = 3, value_name = "PAGE_SIZE", default_value = "LETTER", ignore_case = true)]
    pub page_size: PageSize,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Writes YYYY-MM-pagesize.pdf to the current directory,
or to $CALENDAR_PDF_DIR when it is set.

Examples:
  calendar-pdf 2014 11           November 2014 on a Letter page
  calendar-pdf 2016 2 tabloid    February 2016 on a Tabloid page
  calendar-pdf --test            Run the self-checks";

/// Usage text printed for --help and for any invalid input.
pub fn usage() -> String {
    Args::command().render_help().to_string()
}

/// Everything one invocation needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub month: CalendarMonth,
    pub page: PageGeometry,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn new(args: &Args) -> Result<Self> {
        let year = args
            .year
            .ok_or_else(|| CalError::InvalidInput("missing YEAR".to_string()))?;
        let month = args
            .month
            .ok_or_else(|| CalError::InvalidInput("missing MONTH".to_string()))?;

        Ok(Config {
            month: CalendarMonth::new(year, month)?,
            page: PageGeometry::landscape(args.page_size),
            output_dir: get_output_dir(),
        })
    }

    pub fn page_size(&self) -> PageSize {
        self.page.page_size
    }
}

/// Output directory, respecting the CALENDAR_PDF_DIR environment variable.
pub fn get_output_dir() -> PathBuf {
    match std::env::var_os(OUTPUT_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("."),
    }
}
