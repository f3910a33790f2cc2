use crate::{clock::format::format_wall_time, foundation::core::Millis};

/// Time collaborator contract: a monotonic millisecond counter plus the
/// wall-clock/calendar reading datetime elements and loop synchronization use.
pub trait Clock {
    /// Monotonic milliseconds since an arbitrary origin; wraps like a 32-bit
    /// display counter.
    fn now(&self) -> Millis;

    /// Current wall-clock/calendar time.
    fn wall(&self) -> WallTime;
}

/// A wall-clock/calendar instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WallTime {
    /// Full year (e.g. 2024).
    pub year: u16,
    /// Month, 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub day: u8,
    /// Day of week with Sunday = 0.
    pub weekday: u8,
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
}

impl WallTime {
    /// Render this instant through a date format pattern.
    ///
    /// Supports the PHP-date-style tokens canvas documents use (`H:i`,
    /// `m/d`, `D d M`, ...): `d j D l N w m n M F y Y H G h g i s A a`.
    /// A backslash escapes the next character; anything unrecognized passes
    /// through verbatim.
    pub fn format(&self, pattern: &str) -> String {
        format_wall_time(self, pattern)
    }
}

/// A hand-advanced clock for tests and headless drivers.
///
/// [`ManualClock::advance`] moves the monotonic counter and rolls the wall
/// clock forward second-by-second. Calendar rollover is simplified (the day
/// of month increments without month-length handling), which is all a
/// short-lived deterministic driver needs.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Millis,
    wall: WallTime,
    subsec_ms: u32,
}

impl ManualClock {
    /// Start at monotonic 0 with the given wall time.
    pub fn new(wall: WallTime) -> Self {
        Self {
            now: Millis(0),
            wall,
            subsec_ms: 0,
        }
    }

    /// Advance both clocks by `ms` milliseconds.
    pub fn advance(&mut self, ms: u32) {
        self.now = self.now.advanced_by(ms);
        let total = u64::from(self.subsec_ms) + u64::from(ms);
        self.subsec_ms = (total % 1000) as u32;
        for _ in 0..total / 1000 {
            self.roll_second();
        }
    }

    /// Replace the wall-clock reading without touching the monotonic counter.
    pub fn set_wall(&mut self, wall: WallTime) {
        self.wall = wall;
    }

    fn roll_second(&mut self) {
        self.wall.second += 1;
        if self.wall.second < 60 {
            return;
        }
        self.wall.second = 0;
        self.wall.minute += 1;
        if self.wall.minute < 60 {
            return;
        }
        self.wall.minute = 0;
        self.wall.hour += 1;
        if self.wall.hour < 24 {
            return;
        }
        self.wall.hour = 0;
        self.wall.day += 1;
        self.wall.weekday = (self.wall.weekday + 1) % 7;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        self.now
    }

    fn wall(&self) -> WallTime {
        self.wall
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/source.rs"]
mod tests;
