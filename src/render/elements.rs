use crate::{
    clock::source::Clock,
    document::model::{Element, Font, SceneDocument},
    foundation::core::{Color, Point, Rect},
    render::surface::DrawSurface,
};

/// Horizontal pad added to a text background fill. Variable-width fonts
/// leave ghost pixels past the measured box when a wide glyph is replaced by
/// a narrow one (a "0" rolling over to a "1"); the pad erases them.
const TEXT_CLEAR_PAD_PX: u32 = 4;

/// Interval between datetime element refreshes.
pub(crate) const DATETIME_REFRESH_MS: u32 = 1000;

/// Draw the document's static setup elements, in declaration order.
///
/// Datetime elements are not drawn here — they follow the wall clock and are
/// rendered by [`refresh_datetime`]. Rendering the same document twice
/// produces an identical sequence of draw calls.
pub fn render_setup<S: DrawSurface>(doc: &SceneDocument, surface: &mut S) {
    for element in &doc.setup {
        match element {
            Element::Text {
                x,
                y,
                font,
                fg_color,
                bg_color,
                content,
            } => {
                render_text(surface, Point::new(*x, *y), *font, *fg_color, *bg_color, content);
            }
            Element::Datetime { .. } => {}
            Element::Fillrect {
                x,
                y,
                width,
                height,
                color,
            } => {
                surface.fill_rect(Rect::new(*x, *y, *width, *height), *color);
            }
            Element::Rect {
                x,
                y,
                width,
                height,
                color,
            } => {
                surface.draw_rect(Rect::new(*x, *y, *width, *height), *color);
            }
            Element::Line { x, y, x1, y1, color } => {
                surface.draw_line(Point::new(*x, *y), Point::new(*x1, *y1), *color);
            }
            Element::Image { x, y, image } => {
                surface.draw_image(Point::new(*x, *y), image);
            }
            Element::Unknown => {
                tracing::debug!("skipping unknown setup element");
            }
        }
    }
}

/// Re-render every datetime element against the current wall clock.
///
/// Each element's backing box is erased and redrawn individually; the rest of
/// the display is untouched.
pub fn refresh_datetime<S: DrawSurface, C: Clock>(doc: &SceneDocument, surface: &mut S, clock: &C) {
    for element in &doc.setup {
        if let Element::Datetime {
            x,
            y,
            font,
            fg_color,
            bg_color,
            content,
        } = element
        {
            let text = clock.wall().format(content);
            render_text(surface, Point::new(*x, *y), *font, *fg_color, *bg_color, &text);
        }
    }
}

/// Measure, erase the backing box, then print.
fn render_text<S: DrawSurface>(
    surface: &mut S,
    origin: Point,
    font: Font,
    fg: Color,
    bg: Color,
    text: &str,
) {
    surface.set_font(font);
    let bounds = surface.measure_text(text);
    surface.fill_rect(
        Rect::new(
            origin.x + bounds.offset.x,
            origin.y + bounds.offset.y,
            bounds.size.width + TEXT_CLEAR_PAD_PX,
            bounds.size.height,
        ),
        bg,
    );
    surface.set_text_color(fg);
    surface.set_cursor(origin);
    surface.print(text);
}

#[cfg(test)]
#[path = "../../tests/unit/render/elements.rs"]
mod tests;
