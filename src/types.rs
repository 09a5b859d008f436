//! Type definitions and constants for calendar page layout.

use chrono::NaiveDate;
use clap::ValueEnum;

/// Physical page size of the printed calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageSize {
    /// US Letter, 8.5 x 11 in.
    Letter,
    /// US Legal, 8.5 x 14 in.
    Legal,
    /// Tabloid, 11 x 17 in.
    Tabloid,
}

impl PageSize {
    /// Portrait (width, height) in points.
    pub fn portrait_points(self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Tabloid => (792.0, 1224.0),
        }
    }

    /// Upper-case name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            PageSize::Letter => "LETTER",
            PageSize::Legal => "LEGAL",
            PageSize::Tabloid => "TABLOID",
        }
    }
}

/// Where a cell's date sits relative to the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    CurrentMonth,
    /// Days of the previous month filling the first week row.
    LeadingFiller,
    /// Days of the next month filling the last week row.
    TrailingFiller,
}

impl Membership {
    pub fn is_filler(self) -> bool {
        !matches!(self, Membership::CurrentMonth)
    }
}

/// One day cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpec {
    pub date: NaiveDate,
    /// 0..=6, Sunday = 0.
    pub column: u32,
    /// 0..number_of_weeks.
    pub row: u32,
    pub membership: Membership,
}

/// Page dimensions in points, always landscape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_size: PageSize,
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    pub fn landscape(page_size: PageSize) -> Self {
        let (short, long) = page_size.portrait_points();
        PageGeometry {
            page_size,
            width: long,
            height: short,
            margin: PAGE_MARGIN,
        }
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn content_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }
}

/// Rectangle in content-box coordinates. `y` is the top edge; y grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y - self.height
    }
}

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

/// Horizontal text alignment inside a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// How a piece of text is placed inside its bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub align: Align,
    /// Distance moved down from the top of the box before the first line.
    pub offset_down: f32,
}

/// Fill and numeral colors of a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub background: Option<Color>,
    pub numeral: Color,
}

// Uniform page margin in points (half an inch)
pub const PAGE_MARGIN: f32 = 36.0;

pub const DAYS_PER_WEEK: u32 = 7;
pub const MAX_CELLS: usize = 42; // 6 weeks × 7 days

// Text sizing relative to a grid row
pub const TITLE_SIZE_RATIO: f32 = 0.75;
pub const NUMERAL_SIZE_RATIO: f32 = 0.75;
pub const NUMERAL_OFFSET_DOWN: f32 = 5.0;
pub const WEEKDAY_FONT_SIZE: f32 = 20.0;
pub const WEEKDAY_RAISE: f32 = 20.0;

// Courier metrics, per point of font size
pub const GLYPH_ADVANCE: f32 = 0.6;
pub const GLYPH_ASCENT: f32 = 0.63;

pub const COLOR_BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
pub const COLOR_WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
pub const COLOR_DATE: Color = Color::rgb(0xd9, 0xd9, 0xd9);
pub const COLOR_WEEKDAY_NAME: Color = COLOR_BLACK;
pub const COLOR_TITLE: Color = COLOR_BLACK;
pub const COLOR_FILLER_BACKGROUND: Color = Color::rgb(0xa6, 0xa6, 0xa6);
pub const COLOR_STROKE: Color = COLOR_BLACK;
