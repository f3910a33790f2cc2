//! Pixface is a canvas-driven pixel-matrix clockface engine.
//!
//! A clockface is described once, declaratively, in a JSON "canvas" document:
//! static layout elements, wall-clock text, sprite frame sets, and the loop
//! entries that animate them. Pixface interprets that document against a
//! 64×64-class matrix display, advancing sprite animation and movement state
//! on every display tick.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: canvas JSON bytes -> [`SceneDocument`] (validated, defaults
//!    resolved once)
//! 2. **Setup**: clear to the background color, draw static elements and
//!    datetime text, build one [`SpriteController`] per sprite loop entry
//! 3. **Tick**: re-evaluate every sprite controller (frame advance, loop
//!    reset, movement tween) and refresh datetime text once per second
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: interpreting the same document twice
//!   issues the same ordered draw calls, testable via [`RecordingSurface`].
//! - **Collaborators stay outside**: the display ([`DrawSurface`]), the time
//!   source ([`Clock`]) and the image decoder ([`ImageDecoder`]) are traits
//!   the caller provides; the engine owns only interpreter state. Document
//!   retrieval and error-splash rendering are caller responsibilities.
//! - **Single-buffer model**: there is no retained framebuffer, so moving
//!   sprites erase the union of their old and new rects before redrawing.
//! - **Rollover-safe time**: monotonic milliseconds wrap like a 32-bit
//!   display counter; all elapsed math uses wrapping subtraction.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod clock;
mod document;
mod engine;
mod foundation;
mod render;
mod sprite;

pub use assets::decode::{DecodedImage, ImageDecoder, PngImageDecoder};
pub use clock::source::{Clock, ManualClock, WallTime};
pub use clock::system::SystemClock;
pub use document::model::{
    Element, Font, FrameImage, FrameSet, ImageRef, LoopEntry, MovementSpec, SceneDocument,
    SpriteEntry,
};
pub use document::parse::parse_document;
pub use engine::canvas::CanvasEngine;
pub use foundation::core::{Color, Millis, Point, Rect, Size};
pub use foundation::error::{PixfaceError, PixfaceResult};
pub use render::elements::{refresh_datetime, render_setup};
pub use render::recording::{DrawOp, RecordingSurface};
pub use render::surface::{DrawSurface, TextBounds};
pub use sprite::controller::SpriteController;
pub use sprite::motion::lerp;
