use chrono::{Datelike, Local, Timelike};

use crate::{
    clock::source::{Clock, WallTime},
    foundation::core::Millis,
};

/// Host-clock implementation of [`Clock`] backed by `chrono`.
///
/// The monotonic counter starts at construction and is truncated to 32 bits,
/// matching the rollover domain the elapsed math is written for.
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: std::time::Instant,
}

impl SystemClock {
    /// Start the monotonic counter now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        Millis(self.origin.elapsed().as_millis() as u32)
    }

    fn wall(&self) -> WallTime {
        let now = Local::now();
        WallTime {
            year: now.year() as u16,
            month: now.month() as u8,
            day: now.day() as u8,
            weekday: now.weekday().num_days_from_sunday() as u8,
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
        }
    }
}
