//! Cell geometry: where each grid cell lands on the page.
//!
//! Coordinates are points relative to the page content box, with the origin
//! in its bottom-left corner. The title band takes one grid row above the
//! week rows.

use crate::types::{DAYS_PER_WEEK, PageGeometry, Rect, WEEKDAY_FONT_SIZE, WEEKDAY_RAISE};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    page: PageGeometry,
    cell_width: f32,
    cell_height: f32,
    title_band_height: f32,
}

impl GridGeometry {
    /// `number_of_weeks` comes from a built `MonthGrid` and is at least 4.
    pub fn new(page: PageGeometry, number_of_weeks: u32) -> Self {
        let content_height = page.content_height();
        let title_band_height = content_height / (number_of_weeks + 1) as f32;
        GridGeometry {
            page,
            cell_width: page.content_width() / DAYS_PER_WEEK as f32,
            cell_height: (content_height - title_band_height) / number_of_weeks as f32,
            title_band_height,
        }
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    pub fn title_band_height(&self) -> f32 {
        self.title_band_height
    }

    fn content_top(&self) -> f32 {
        self.page.content_height()
    }

    pub fn rect_of(&self, row: u32, column: u32) -> Rect {
        Rect {
            x: self.cell_width * column as f32,
            y: self.content_top() - self.title_band_height - self.cell_height * row as f32,
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Band above the first week row, spanning all seven columns.
    pub fn title_rect(&self) -> Rect {
        Rect {
            x: 0.0,
            y: self.content_top(),
            width: self.page.content_width(),
            height: self.title_band_height,
        }
    }

    /// Strip just above row 0 of `column`, tall enough for a weekday name.
    pub fn weekday_header_rect(&self, column: u32) -> Rect {
        let cell = self.rect_of(0, column);
        Rect {
            y: cell.y + WEEKDAY_RAISE,
            height: WEEKDAY_FONT_SIZE,
            ..cell
        }
    }
}
