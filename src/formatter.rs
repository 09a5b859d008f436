//! Calendar page drawing: turns a `MonthGrid` into renderer calls.

use std::path::{Path, PathBuf};

use chrono::Datelike;

use crate::calendar::{CalendarMonth, MonthGrid};
use crate::layout::GridGeometry;
use crate::render::Renderer;
use crate::types::{
    Align, COLOR_DATE, COLOR_FILLER_BACKGROUND, COLOR_TITLE, COLOR_WEEKDAY_NAME, COLOR_WHITE,
    CellSpec, CellStyle, Membership, NUMERAL_OFFSET_DOWN, NUMERAL_SIZE_RATIO, PageSize,
    TITLE_SIZE_RATIO, TextStyle, WEEKDAY_FONT_SIZE,
};

/// Output file name, e.g. `2014-11-letter.pdf`.
pub fn output_file_name(month: &CalendarMonth, page_size: PageSize) -> String {
    format!(
        "{}-{}.pdf",
        month.first_of_month().format("%Y-%m"),
        page_size.name().to_lowercase()
    )
}

pub fn output_path(dir: &Path, month: &CalendarMonth, page_size: PageSize) -> PathBuf {
    dir.join(output_file_name(month, page_size))
}

/// Page title, e.g. `November 2014`.
pub fn format_title(month: &CalendarMonth) -> String {
    month.first_of_month().format("%B %Y").to_string()
}

/// Short English weekday name of a cell's date, e.g. `Sun`.
pub fn weekday_name(cell: &CellSpec) -> String {
    cell.date.format("%a").to_string()
}

/// Colors for a cell. Filler days get a gray background with white numerals.
pub fn cell_style(membership: Membership) -> CellStyle {
    if membership.is_filler() {
        CellStyle {
            background: Some(COLOR_FILLER_BACKGROUND),
            numeral: COLOR_WHITE,
        }
    } else {
        CellStyle {
            background: None,
            numeral: COLOR_DATE,
        }
    }
}

/// Draw the title, the weekday header and every cell of `grid`.
pub fn draw_month<R: Renderer>(renderer: &mut R, grid: &MonthGrid, geometry: &GridGeometry) {
    let row_height = geometry.cell_height();

    renderer.draw_text(
        &format_title(grid.month()),
        geometry.title_rect(),
        TextStyle {
            size: row_height * TITLE_SIZE_RATIO,
            color: COLOR_TITLE,
            align: Align::Left,
            offset_down: 0.0,
        },
    );

    for cell in grid.cells() {
        if cell.row == 0 {
            renderer.draw_text(
                &weekday_name(cell),
                geometry.weekday_header_rect(cell.column),
                TextStyle {
                    size: WEEKDAY_FONT_SIZE,
                    color: COLOR_WEEKDAY_NAME,
                    align: Align::Right,
                    offset_down: 0.0,
                },
            );
        }
        draw_cell(renderer, cell, geometry, row_height * NUMERAL_SIZE_RATIO);
    }
}

fn draw_cell<R: Renderer>(renderer: &mut R, cell: &CellSpec, geometry: &GridGeometry, size: f32) {
    let rect = geometry.rect_of(cell.row, cell.column);
    let style = cell_style(cell.membership);

    if let Some(background) = style.background {
        renderer.fill_rect(rect, background);
    }
    renderer.stroke_bounds(rect);
    renderer.draw_text(
        &cell.date.day().to_string(),
        rect,
        TextStyle {
            size,
            color: style.numeral,
            align: Align::Right,
            offset_down: NUMERAL_OFFSET_DOWN,
        },
    );
}
