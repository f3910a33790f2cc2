use crate::{
    foundation::core::{Color, Point},
    foundation::error::{PixfaceError, PixfaceResult},
};

/// A complete canvas scene document.
///
/// A scene document is a pure data model deserialized from the canvas JSON a
/// caller retrieved out-of-band. It describes a clockface once: static setup
/// elements, sprite frame sets, and the loop entries that animate them.
///
/// Interpreting a document is performed by [`crate::CanvasEngine`]; the
/// document itself never changes after [`crate::parse_document`] returns it.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    /// Canvas name, metadata only.
    #[serde(default)]
    pub name: String,
    /// Canvas author, metadata only.
    #[serde(default)]
    pub author: String,
    /// Document format version, metadata only.
    #[serde(default)]
    pub version: u16,
    /// Background color the display is cleared to; erase fills reuse it.
    #[serde(default)]
    pub bg_color: Color,
    /// Default delay in milliseconds, backing `frameDelay`/`loopDelay`
    /// fallbacks for every sprite loop entry.
    #[serde(default)]
    pub delay: u32,
    /// Static elements drawn once at setup, in declaration order.
    #[serde(default)]
    pub setup: Vec<Element>,
    /// Sprite frame sets; each inner sequence is one sprite's ordered frames.
    #[serde(default)]
    pub sprites: Vec<FrameSet>,
    /// Animated instances evaluated every tick, in declaration order.
    #[serde(default, rename = "loop")]
    pub loop_entries: Vec<LoopEntry>,
}

/// The ordered frame images belonging to one sprite.
pub type FrameSet = Vec<FrameImage>;

/// One frame image of a sprite frame set.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FrameImage {
    /// Encoded image data (base64 PNG in the documents seen in the wild).
    pub image: ImageRef,
    /// Optional authoring identifier, never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Reference to an encoded image, resolved by an [`crate::ImageDecoder`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

/// Display font identifiers, resolved from document font names once at parse
/// time so the per-tick path never compares strings.
///
/// Unknown names resolve to [`Font::Builtin`], the surface's default font.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum Font {
    /// The draw surface's built-in font.
    #[default]
    Builtin,
    /// Tiny 3x5 pixel font.
    Picopixel,
    /// Blocky 8-bit style font.
    Square,
    /// Large hour-digit font.
    Big,
    /// Medium minute-digit font.
    Medium,
    /// Condensed cartographer font.
    Carto,
}

impl From<String> for Font {
    fn from(name: String) -> Self {
        match name.as_str() {
            "picopixel" => Font::Picopixel,
            "square" => Font::Square,
            "big" => Font::Big,
            "medium" => Font::Medium,
            "carto" => Font::Carto,
            _ => Font::Builtin,
        }
    }
}

impl From<Font> for String {
    fn from(font: Font) -> Self {
        match font {
            Font::Builtin => "",
            Font::Picopixel => "picopixel",
            Font::Square => "square",
            Font::Big => "big",
            Font::Medium => "medium",
            Font::Carto => "carto",
        }
        .to_string()
    }
}

/// A static element of the setup list.
///
/// The `type` tag is resolved to this closed enum at parse time; tags this
/// crate does not know deserialize to [`Element::Unknown`] and are skipped at
/// render time, so newer documents still display their supported parts.
///
/// Missing per-element fields resolve to documented defaults: coordinates and
/// colors to 0, the font to [`Font::Builtin`], text content to empty.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// Static text drawn over a solid background box.
    #[serde(rename_all = "camelCase")]
    Text {
        /// Text origin x (cursor position, not bounding-box corner).
        #[serde(default)]
        x: i32,
        /// Text origin y.
        #[serde(default)]
        y: i32,
        /// Display font.
        #[serde(default)]
        font: Font,
        /// Foreground (glyph) color.
        #[serde(default)]
        fg_color: Color,
        /// Background box color.
        #[serde(default)]
        bg_color: Color,
        /// Text to draw.
        #[serde(default)]
        content: String,
    },
    /// Wall-clock text re-rendered once per second.
    #[serde(rename_all = "camelCase")]
    Datetime {
        /// Text origin x.
        #[serde(default)]
        x: i32,
        /// Text origin y.
        #[serde(default)]
        y: i32,
        /// Display font.
        #[serde(default)]
        font: Font,
        /// Foreground (glyph) color.
        #[serde(default)]
        fg_color: Color,
        /// Background box color.
        #[serde(default)]
        bg_color: Color,
        /// Time format pattern (see [`crate::WallTime::format`]), carried in
        /// the same `content` field static text uses.
        #[serde(default)]
        content: String,
    },
    /// Filled rectangle.
    Fillrect {
        /// Left edge.
        #[serde(default)]
        x: i32,
        /// Top edge.
        #[serde(default)]
        y: i32,
        /// Width in pixels.
        #[serde(default)]
        width: u32,
        /// Height in pixels.
        #[serde(default)]
        height: u32,
        /// Fill color.
        #[serde(default)]
        color: Color,
    },
    /// Outlined rectangle.
    Rect {
        /// Left edge.
        #[serde(default)]
        x: i32,
        /// Top edge.
        #[serde(default)]
        y: i32,
        /// Width in pixels.
        #[serde(default)]
        width: u32,
        /// Height in pixels.
        #[serde(default)]
        height: u32,
        /// Outline color.
        #[serde(default)]
        color: Color,
    },
    /// Straight line segment.
    Line {
        /// Start x.
        #[serde(default)]
        x: i32,
        /// Start y.
        #[serde(default)]
        y: i32,
        /// End x.
        #[serde(default)]
        x1: i32,
        /// End y.
        #[serde(default)]
        y1: i32,
        /// Line color.
        #[serde(default)]
        color: Color,
    },
    /// Static image.
    Image {
        /// Left edge.
        #[serde(default)]
        x: i32,
        /// Top edge.
        #[serde(default)]
        y: i32,
        /// Encoded image data.
        image: ImageRef,
    },
    /// Any element type this crate does not know. Skipped at render time.
    #[serde(other)]
    Unknown,
}

/// One entry of the document's `loop` list.
///
/// Unknown entry types are tolerated the same way unknown elements are: they
/// deserialize to [`LoopEntry::Unknown`] and construct no sprite.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LoopEntry {
    /// An animated sprite instance.
    Sprite(SpriteEntry),
    /// Any loop entry type this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Declaration of one animated sprite instance.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteEntry {
    /// Initial x position.
    #[serde(default)]
    pub x: i32,
    /// Initial y position.
    #[serde(default)]
    pub y: i32,
    /// Index into [`SceneDocument::sprites`].
    #[serde(default)]
    pub sprite: usize,
    /// Milliseconds between frames; 0/absent falls back to the document
    /// `delay`.
    #[serde(default)]
    pub frame_delay: u32,
    /// Milliseconds between loop restarts; 0/absent falls back to the
    /// document `delay`.
    #[serde(default)]
    pub loop_delay: u32,
    /// Milliseconds between movement triggers; 0/absent falls back to 1 ms,
    /// which triggers on the first eligible tick.
    #[serde(default)]
    pub move_start_time: u32,
    /// Movement target x; negative means "axis not set".
    #[serde(default = "unset_target")]
    pub move_target_x: i32,
    /// Movement target y; negative means "axis not set".
    #[serde(default = "unset_target")]
    pub move_target_y: i32,
    /// Movement duration in milliseconds; 0 disables movement.
    #[serde(default)]
    pub move_duration: u32,
    /// Whether a completed movement reverses back to its origin.
    #[serde(default)]
    pub should_return_to_origin: bool,
}

fn unset_target() -> i32 {
    -1
}

/// Resolved movement parameters of a sprite entry.
///
/// Built once per sprite at setup; an unset target axis resolves to the
/// entry's initial coordinate so only the set axis moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovementSpec {
    /// Milliseconds between movement triggers (always >= 1).
    pub start_offset_ms: u32,
    /// Movement duration in milliseconds (always > 0).
    pub duration_ms: u32,
    /// Absolute target position.
    pub target: Point,
    /// Whether a completed movement reverses back to its origin.
    pub return_to_origin: bool,
}

impl SpriteEntry {
    /// Resolved movement spec, or `None` when this entry does not move.
    ///
    /// Movement is active only when `moveDuration > 0` and at least one
    /// target axis is set (non-negative).
    pub fn movement(&self) -> Option<MovementSpec> {
        if self.move_duration == 0 || (self.move_target_x < 0 && self.move_target_y < 0) {
            return None;
        }
        let target = Point::new(
            if self.move_target_x >= 0 {
                self.move_target_x
            } else {
                self.x
            },
            if self.move_target_y >= 0 {
                self.move_target_y
            } else {
                self.y
            },
        );
        Some(MovementSpec {
            start_offset_ms: self.move_start_time.max(1),
            duration_ms: self.move_duration,
            target,
            return_to_origin: self.should_return_to_origin,
        })
    }
}

impl SceneDocument {
    /// Resolve per-entry delay fallbacks against the document `delay`.
    ///
    /// Called once by [`crate::parse_document`] so the per-tick path never
    /// re-derives defaults.
    pub(crate) fn resolve_defaults(&mut self) {
        for entry in &mut self.loop_entries {
            if let LoopEntry::Sprite(sprite) = entry {
                if sprite.frame_delay == 0 {
                    sprite.frame_delay = self.delay;
                }
                if sprite.loop_delay == 0 {
                    sprite.loop_delay = self.delay;
                }
            }
        }
    }

    /// Validate document invariants and sprite references.
    pub fn validate(&self) -> PixfaceResult<()> {
        for (index, entry) in self.loop_entries.iter().enumerate() {
            let LoopEntry::Sprite(sprite) = entry else {
                continue;
            };
            match self.sprites.get(sprite.sprite) {
                None => {
                    return Err(PixfaceError::malformed(format!(
                        "loop entry {index} references missing sprite set {}",
                        sprite.sprite
                    )));
                }
                Some(frames) if frames.is_empty() => {
                    return Err(PixfaceError::malformed(format!(
                        "loop entry {index} references empty sprite set {}",
                        sprite.sprite
                    )));
                }
                Some(_) => {}
            }
            if sprite.frame_delay == 0 && self.delay == 0 {
                return Err(PixfaceError::malformed(format!(
                    "loop entry {index} has no frame delay and the document delay is 0"
                )));
            }
            if sprite.loop_delay == 0 && self.delay == 0 {
                return Err(PixfaceError::malformed(format!(
                    "loop entry {index} has no loop delay and the document delay is 0"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/model.rs"]
mod tests;
