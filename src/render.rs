//! Drawing backend: the `Renderer` trait and its PDF implementation.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color as PdfColor, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Polygon, Pt, Rgb,
};

use crate::error::{CalError, Result};
use crate::types::{
    Align, COLOR_STROKE, Color, GLYPH_ADVANCE, GLYPH_ASCENT, PageGeometry, Rect, TextStyle,
};

const STROKE_WIDTH: f32 = 1.0;

/// Operations the calendar page needs from a drawing backend.
///
/// Rectangles are in content-box coordinates; the backend maps them onto the
/// page.
pub trait Renderer {
    /// Stroke the outline of `rect`.
    fn stroke_bounds(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw one line of text, top-aligned inside `rect`.
    fn draw_text(&mut self, text: &str, rect: Rect, style: TextStyle);

    /// Serialize everything drawn so far to `path`.
    fn render_file(self, path: &Path) -> Result<()>
    where
        Self: Sized;
}

/// Width of `text` set in a monospace font at `size` points.
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * GLYPH_ADVANCE * size
}

/// Bottom-left text origin for `text` inside `rect`, in content coordinates.
pub fn text_origin(text: &str, rect: Rect, style: &TextStyle) -> (f32, f32) {
    let width = text_width(text, style.size);
    let x = match style.align {
        Align::Left => rect.x,
        Align::Center => rect.x + (rect.width - width) / 2.0,
        Align::Right => rect.right() - width,
    };
    let baseline = rect.y - style.offset_down - style.size * GLYPH_ASCENT;
    (x, baseline)
}

/// Single-page landscape PDF drawn with the built-in Courier font.
pub struct PdfRenderer {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    margin: f32,
}

impl PdfRenderer {
    pub fn new(page: &PageGeometry, title: &str) -> Result<Self> {
        let (doc, page_index, layer_index) = PdfDocument::new(
            title,
            Mm::from(Pt(page.width)),
            Mm::from(Pt(page.height)),
            "Calendar",
        );
        let layer = doc.get_page(page_index).get_layer(layer_index);
        let font = doc
            .add_builtin_font(BuiltinFont::Courier)
            .map_err(|e| CalError::Render(e.to_string()))?;

        layer.set_outline_color(pdf_color(COLOR_STROKE));
        layer.set_outline_thickness(STROKE_WIDTH);

        Ok(PdfRenderer {
            doc,
            layer,
            font,
            margin: page.margin,
        })
    }

    fn point(&self, x: f32, y: f32) -> Point {
        Point::new(
            Mm::from(Pt(x + self.margin)),
            Mm::from(Pt(y + self.margin)),
        )
    }

    fn corners(&self, rect: Rect) -> Vec<(Point, bool)> {
        vec![
            (self.point(rect.x, rect.y), false),
            (self.point(rect.right(), rect.y), false),
            (self.point(rect.right(), rect.bottom()), false),
            (self.point(rect.x, rect.bottom()), false),
        ]
    }
}

impl Renderer for PdfRenderer {
    fn stroke_bounds(&mut self, rect: Rect) {
        self.layer.add_line(Line {
            points: self.corners(rect),
            is_closed: true,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.layer.set_fill_color(pdf_color(color));
        self.layer.add_polygon(Polygon {
            rings: vec![self.corners(rect)],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn draw_text(&mut self, text: &str, rect: Rect, style: TextStyle) {
        let (x, y) = text_origin(text, rect, &style);
        self.layer.set_fill_color(pdf_color(style.color));
        self.layer.use_text(
            text,
            style.size,
            Mm::from(Pt(x + self.margin)),
            Mm::from(Pt(y + self.margin)),
            &self.font,
        );
    }

    fn render_file(self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.doc
            .save(&mut writer)
            .map_err(|e| CalError::Render(e.to_string()))?;
        log::info!("wrote {}", path.display());
        Ok(())
    }
}

fn pdf_color(color: Color) -> PdfColor {
    PdfColor::Rgb(Rgb::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        None,
    ))
}
