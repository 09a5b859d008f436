//! Calendar PDF application.
//!
//! # Usage
//! ```ignore
//! calendar-pdf 2014 11          // November 2014, Letter
//! calendar-pdf 2016 2 legal     // February 2016, Legal
//! calendar-pdf --test           // Self-checks
//! ```

use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

use calendar_pdf::args::{Args, Config, usage};
use calendar_pdf::calendar::MonthGrid;
use calendar_pdf::error::CalError;
use calendar_pdf::formatter::{draw_month, format_title, output_path};
use calendar_pdf::layout::GridGeometry;
use calendar_pdf::render::{PdfRenderer, Renderer};
use calendar_pdf::selfcheck::{print_report, run_self_checks};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                log::debug!("falling back to usage: {:?}", e.kind());
                println!("{}", usage());
                return;
            }
        },
    };

    if args.run_tests {
        let passed = print_report(&run_self_checks());
        std::process::exit(if passed { 0 } else { 1 });
    }

    match run(&args) {
        Ok(path) => println!("{}", path.display()),
        Err(CalError::InvalidInput(msg)) => {
            log::warn!("{}", msg);
            println!("{}", usage());
        }
        Err(e) => {
            eprintln!("calendar-pdf: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<PathBuf, CalError> {
    let config = Config::new(args)?;
    let grid = MonthGrid::new(config.month)?;
    let geometry = GridGeometry::new(config.page, grid.number_of_weeks());
    log::debug!(
        "{} page: cell {:.1}x{:.1} pt",
        config.page_size().name(),
        geometry.cell_width(),
        geometry.cell_height()
    );

    let mut renderer = PdfRenderer::new(&config.page, &format_title(&config.month))?;
    draw_month(&mut renderer, &grid, &geometry);

    let path = output_path(&config.output_dir, &config.month, config.page_size());
    renderer.render_file(&path)?;
    Ok(path)
}
