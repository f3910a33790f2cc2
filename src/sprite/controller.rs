use crate::{
    document::model::{MovementSpec, SceneDocument, SpriteEntry},
    foundation::core::{Millis, Point, Size},
    render::surface::DrawSurface,
    sprite::motion::MoveState,
};

/// Animation state of one sprite instance.
///
/// Controllers live in a fixed arena, one slot per loop entry, created at
/// setup and never destroyed individually. A controller references its frame
/// set by index into the scene document, never by pointer.
#[derive(Clone, Debug)]
pub struct SpriteController {
    entry_index: usize,
    frame_set: usize,
    home: Point,
    size: Size,
    total_frames: usize,
    frame_delay_ms: u32,
    loop_delay_ms: u32,
    movement: Option<MovementSpec>,

    current_frame: usize,
    frames_shown: usize,
    position: Point,
    last_frame_advance: Millis,
    last_loop_reset: Millis,
    motion: MoveState,
    dead: bool,
}

impl SpriteController {
    pub(crate) fn new(
        entry_index: usize,
        entry: &SpriteEntry,
        total_frames: usize,
        size: Size,
        now: Millis,
    ) -> Self {
        let home = Point::new(entry.x, entry.y);
        Self {
            entry_index,
            frame_set: entry.sprite,
            home,
            size,
            total_frames,
            frame_delay_ms: entry.frame_delay,
            loop_delay_ms: entry.loop_delay,
            movement: entry.movement(),
            current_frame: 0,
            frames_shown: 0,
            position: home,
            last_frame_advance: now,
            last_loop_reset: now,
            motion: MoveState::new(now),
            dead: false,
        }
    }

    /// Index of this controller's loop entry in the document.
    pub fn entry_index(&self) -> usize {
        self.entry_index
    }

    /// Frame currently shown, always `< total_frames`.
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Frames drawn since the last loop reset, always `<= total_frames`.
    pub fn frames_shown(&self) -> usize {
        self.frames_shown
    }

    /// Number of frames in this sprite's frame set.
    pub fn total_frames(&self) -> usize {
        self.total_frames
    }

    /// Current sprite position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether a movement tween is in flight.
    pub fn is_moving(&self) -> bool {
        self.motion.is_moving()
    }

    /// Whether the in-flight tween is the return leg.
    pub fn is_reversing(&self) -> bool {
        self.motion.is_reversing()
    }

    /// Whether this sprite hit a fatal fault and is skipped for the session.
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// One tick of frame-advance and loop-reset evaluation.
    ///
    /// Frame advance: when the frame delay elapsed and the loop still has
    /// frames to show, advance the frame index (wrapping), bring the position
    /// up to date through the movement machine, then draw.
    ///
    /// Loop reset: when the loop delay elapsed and the wall-clock second
    /// aligns to it (`(second * 1000) % loop_delay == 0`), restart the frame
    /// counter. The alignment gate restarts every sprite's loop on the same
    /// real-time boundary; a loop delay that does not divide 1000 evenly can
    /// miss its aligned second and slip by up to one tick.
    pub(crate) fn tick<S: DrawSurface>(
        &mut self,
        doc: &SceneDocument,
        surface: &mut S,
        now: Millis,
        second: u8,
    ) {
        if self.dead {
            return;
        }

        if now.since(self.last_frame_advance) >= self.frame_delay_ms
            && self.frames_shown < self.total_frames
        {
            self.current_frame = (self.current_frame + 1) % self.total_frames;

            if let Some(spec) = self.movement {
                self.position = self.motion.evaluate(
                    &spec,
                    self.home,
                    self.position,
                    self.size,
                    doc.bg_color,
                    now,
                    second,
                    surface,
                );
            }

            let Some(frame) = doc
                .sprites
                .get(self.frame_set)
                .and_then(|set| set.get(self.current_frame))
            else {
                // Should not happen after validation; contain the fault to
                // this sprite instead of taking the engine down.
                tracing::warn!(
                    entry = self.entry_index,
                    frame_set = self.frame_set,
                    "frame set index out of range, sprite disabled"
                );
                self.dead = true;
                return;
            };

            surface.draw_image(self.position, &frame.image);
            self.frames_shown += 1;
            self.last_frame_advance = now;
        }

        if self.loop_delay_ms > 0
            && now.since(self.last_loop_reset) >= self.loop_delay_ms
            && (u32::from(second) * 1000) % self.loop_delay_ms == 0
        {
            self.frames_shown = 0;
            self.last_loop_reset = now;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/controller.rs"]
mod tests;
