use crate::{
    document::model::{Font, ImageRef},
    foundation::core::{Color, Point, Rect, Size},
    render::surface::{DrawSurface, TextBounds},
};

/// One recorded draw call.
///
/// The engine guarantees that interpreting the same document twice produces
/// the same ordered op list; recording ops is how that guarantee is tested
/// without a retained framebuffer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum DrawOp {
    /// A [`DrawSurface::fill_rect`] call.
    FillRect {
        /// Filled area.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// A [`DrawSurface::draw_rect`] call.
    DrawRect {
        /// Outlined area.
        rect: Rect,
        /// Outline color.
        color: Color,
    },
    /// A [`DrawSurface::draw_line`] call.
    DrawLine {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
        /// Line color.
        color: Color,
    },
    /// A [`DrawSurface::draw_image`] call.
    DrawImage {
        /// Top-left corner.
        at: Point,
        /// Encoded image reference.
        image: ImageRef,
    },
    /// A [`DrawSurface::set_font`] call.
    SetFont {
        /// Selected font.
        font: Font,
    },
    /// A [`DrawSurface::set_text_color`] call.
    SetTextColor {
        /// Selected color.
        color: Color,
    },
    /// A [`DrawSurface::set_cursor`] call.
    SetCursor {
        /// New cursor position.
        at: Point,
    },
    /// A [`DrawSurface::print`] call.
    Print {
        /// Printed text.
        text: String,
    },
}

/// A [`DrawSurface`] that records every call instead of driving hardware.
///
/// Text metrics use a fixed glyph cell per font, so measurement is
/// deterministic by construction. Useful for tests and headless runs.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    font: Font,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// A recording surface of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            font: Font::Builtin,
            ops: Vec::new(),
        }
    }

    /// All recorded ops, in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drain the recorded ops, leaving the surface empty.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

/// Fixed glyph cell (advance, height) per font.
fn glyph_cell(font: Font) -> (u32, u32) {
    match font {
        Font::Builtin => (6, 8),
        Font::Picopixel => (4, 6),
        Font::Square => (8, 8),
        Font::Big => (11, 16),
        Font::Medium => (9, 14),
        Font::Carto => (4, 6),
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.size.width
    }

    fn height(&self) -> u32 {
        self.size.height
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::DrawRect { rect, color });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.ops.push(DrawOp::DrawLine { from, to, color });
    }

    fn draw_image(&mut self, at: Point, image: &ImageRef) {
        self.ops.push(DrawOp::DrawImage {
            at,
            image: image.clone(),
        });
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
        self.ops.push(DrawOp::SetFont { font });
    }

    fn set_text_color(&mut self, color: Color) {
        self.ops.push(DrawOp::SetTextColor { color });
    }

    fn set_cursor(&mut self, at: Point) {
        self.ops.push(DrawOp::SetCursor { at });
    }

    fn print(&mut self, text: &str) {
        self.ops.push(DrawOp::Print {
            text: text.to_string(),
        });
    }

    fn measure_text(&mut self, text: &str) -> TextBounds {
        let (advance, height) = glyph_cell(self.font);
        let width = advance * text.chars().count() as u32;
        // Custom fonts render from a baseline; the built-in font from the
        // cursor's top-left corner.
        let offset = if self.font == Font::Builtin {
            Point::new(0, 0)
        } else {
            Point::new(0, -(height as i32 - 1))
        };
        TextBounds {
            offset,
            size: Size::new(width, height),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;
