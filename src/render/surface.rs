use crate::{
    document::model::{Font, ImageRef},
    foundation::core::{Color, Point, Rect, Size},
};

/// Pixel bounding box of a piece of text, relative to its cursor origin.
///
/// Variable-width fonts draw from a baseline, so the offset is typically
/// negative in y; background erase fills add it to the cursor position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextBounds {
    /// Offset from the cursor origin to the box's top-left corner.
    pub offset: Point,
    /// Box dimensions.
    pub size: Size,
}

/// Display collaborator contract: the primitive drawing operations of a
/// pixel-matrix driver.
///
/// Implementations are single-buffer — there is no retained framebuffer to
/// diff against, which is why callers erase before redrawing. Text state
/// (font, color, cursor) is sticky, matching how matrix display drivers work.
pub trait DrawSurface {
    /// Display width in pixels.
    fn width(&self) -> u32;

    /// Display height in pixels.
    fn height(&self) -> u32;

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline a rectangle.
    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// Draw a straight line segment.
    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    /// Draw an encoded image with its top-left corner at `at`.
    fn draw_image(&mut self, at: Point, image: &ImageRef);

    /// Select the font subsequent text calls use.
    fn set_font(&mut self, font: Font);

    /// Select the color subsequent [`DrawSurface::print`] calls use.
    fn set_text_color(&mut self, color: Color);

    /// Move the text cursor.
    fn set_cursor(&mut self, at: Point);

    /// Draw text at the current cursor with the current font and color.
    fn print(&mut self, text: &str);

    /// Measure `text` in the current font, relative to a cursor at origin.
    fn measure_text(&mut self, text: &str) -> TextBounds;
}
