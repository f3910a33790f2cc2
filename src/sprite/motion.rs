use crate::{
    document::model::MovementSpec,
    foundation::core::{Color, Millis, Point, Rect, Size},
    render::surface::DrawSurface,
};

/// Linear interpolation between two pixel coordinates.
///
/// `t` is not clamped; callers decide what an overshoot means.
pub fn lerp(a: i32, b: i32, t: f32) -> i32 {
    (a as f32 + (b as f32 - a as f32) * t).round() as i32
}

/// Movement machine of one sprite: trigger timing, tween progress, and the
/// reverse leg.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MoveState {
    moving: bool,
    reversing: bool,
    started: Millis,
    initial: Point,
    target: Point,
    last_trigger: Millis,
}

impl MoveState {
    pub(crate) fn new(now: Millis) -> Self {
        Self {
            moving: false,
            reversing: false,
            started: now,
            initial: Point::default(),
            target: Point::default(),
            last_trigger: now,
        }
    }

    pub(crate) fn is_moving(&self) -> bool {
        self.moving
    }

    pub(crate) fn is_reversing(&self) -> bool {
        self.reversing
    }

    /// Advance the movement machine one step and return the sprite's new
    /// position.
    ///
    /// While a tween is in flight the union of the old and new sprite rects
    /// is erased with the background color before the caller redraws; with a
    /// single-buffer display that erase is what prevents trails. On
    /// completion the position snaps to the target exactly; a
    /// return-to-origin spec then swaps the endpoints and restarts the timer
    /// for the reverse leg, after which the machine stops.
    ///
    /// Triggering is gated the same way loop resets are: the start offset
    /// must have elapsed and `(second * 1000)` must align to it, keeping
    /// movement starts synchronized to the wall clock across sprites. An
    /// offset that does not divide 1000 evenly can miss its aligned second
    /// and slip by up to one trigger interval; documented behavior.
    pub(crate) fn evaluate<S: DrawSurface>(
        &mut self,
        spec: &MovementSpec,
        home: Point,
        position: Point,
        size: Size,
        bg: Color,
        now: Millis,
        second: u8,
        surface: &mut S,
    ) -> Point {
        let mut position = position;

        if self.moving {
            let elapsed = now.since(self.started);
            let progress = elapsed as f32 / spec.duration_ms as f32;
            let next = Point::new(
                lerp(self.initial.x, self.target.x, progress),
                lerp(self.initial.y, self.target.y, progress),
            );

            let old_rect = Rect::at(position, size);
            let new_rect = Rect::at(next, size);
            surface.fill_rect(old_rect.union(new_rect), bg);

            if progress <= 1.0 {
                position = next;
            } else {
                position = self.target;
                if spec.return_to_origin && !self.reversing {
                    self.initial = self.target;
                    self.target = home;
                    self.started = now;
                    self.reversing = true;
                } else {
                    self.moving = false;
                }
            }
        }

        if !self.moving
            && now.since(self.last_trigger) >= spec.start_offset_ms
            && (u32::from(second) * 1000) % spec.start_offset_ms == 0
        {
            self.last_trigger = now;
            self.moving = true;
            self.reversing = false;
            self.started = now;
            self.initial = position;
            self.target = spec.target;
        }

        position
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/motion.rs"]
mod tests;
