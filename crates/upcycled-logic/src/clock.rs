//! In-game clock - minutes of day, day counter, working window.
//!
//! Time is advanced by an external periodic timer. Each tick moves the clock
//! by a short step while the shop is open and by a full hour while it is
//! closed, so nights pass quickly.
//!
//! ```
//! use upcycled_logic::clock::GameClock;
//!
//! let mut clock = GameClock::new();
//! assert!(clock.is_working_hours());
//! assert_eq!(clock.current_time(), "09:00");
//! clock.tick();
//! assert_eq!(clock.current_time(), "09:06");
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::clock::*;

/// Wall-clock-like game time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    /// Minutes since midnight, always below [`MINUTES_PER_DAY`].
    pub total_minutes: u32,
    /// Current day, starting at 1.
    pub day: u32,
}

/// What changed during a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Minutes wrapped past midnight and `day` was incremented.
    pub day_advanced: bool,
    /// The clock landed exactly on opening time.
    pub shop_opened: bool,
    /// The clock landed exactly on closing time.
    pub shop_closed: bool,
}

/// Whether a minute-of-day value lies inside the working window.
pub fn is_working_minute(minutes: u32) -> bool {
    let current = minutes % MINUTES_PER_DAY;
    (OPENING_MINUTE..CLOSING_MINUTE).contains(&current)
}

/// Clock step for a given minute-of-day.
pub fn step_for(minutes: u32) -> u32 {
    if is_working_minute(minutes) {
        WORKING_STEP
    } else {
        CLOSED_STEP
    }
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            total_minutes: START_MINUTE,
            day: START_DAY,
        }
    }

    pub fn is_working_hours(&self) -> bool {
        is_working_minute(self.total_minutes)
    }

    /// Advance by one timer tick.
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        self.total_minutes += step_for(self.total_minutes);
        if self.total_minutes >= MINUTES_PER_DAY {
            self.day += 1;
            self.total_minutes %= MINUTES_PER_DAY;
            outcome.day_advanced = true;
        }
        outcome.shop_opened = self.total_minutes == OPENING_MINUTE;
        outcome.shop_closed = self.total_minutes == CLOSING_MINUTE;
        outcome
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// `HH:MM` display string.
    pub fn current_time(&self) -> String {
        format!("{:02}:{:02}", self.total_minutes / 60, self.total_minutes % 60)
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clock_starts_at_opening() {
        let clock = GameClock::new();
        assert_eq!(clock.total_minutes, 540);
        assert_eq!(clock.day, 1);
        assert!(clock.is_working_hours());
    }

    #[test]
    fn test_working_window_bounds() {
        assert!(!is_working_minute(539));
        assert!(is_working_minute(540));
        assert!(is_working_minute(1019));
        assert!(!is_working_minute(1020));
        assert!(!is_working_minute(0));
    }

    #[test]
    fn test_step_depends_on_window() {
        assert_eq!(step_for(600), 6);
        assert_eq!(step_for(1020), 60);
        assert_eq!(step_for(100), 60);
    }

    #[test]
    fn test_tick_working_step() {
        let mut clock = GameClock::new();
        let outcome = clock.tick();
        assert_eq!(clock.total_minutes, 546);
        assert_eq!(outcome, TickOutcome::default());
    }

    #[test]
    fn test_closing_lands_exactly() {
        let mut clock = GameClock::new();
        let mut closed = 0;
        for _ in 0..80 {
            if clock.tick().shop_closed {
                closed += 1;
            }
        }
        assert_eq!(clock.total_minutes, 1020);
        assert_eq!(closed, 1);
        assert!(!clock.is_working_hours());
    }

    #[test]
    fn test_day_wraps_once() {
        let mut clock = GameClock {
            total_minutes: 1380,
            day: 3,
        };
        let outcome = clock.tick();
        assert!(outcome.day_advanced);
        assert_eq!(clock.day, 4);
        assert_eq!(clock.total_minutes, 0);
    }

    #[test]
    fn test_full_day_cycle() {
        // 80 working ticks + 7 evening hours + 9 night hours
        let mut clock = GameClock::new();
        let mut opened = 0;
        let mut wraps = 0;
        for _ in 0..(80 + 7 + 9) {
            let outcome = clock.tick();
            if outcome.day_advanced {
                wraps += 1;
            }
            if outcome.shop_opened {
                opened += 1;
            }
        }
        assert_eq!(clock.total_minutes, 540);
        assert_eq!(clock.day, 2);
        assert_eq!(wraps, 1);
        assert_eq!(opened, 1);
    }

    #[test]
    fn test_reset() {
        let mut clock = GameClock {
            total_minutes: 77,
            day: 9,
        };
        clock.reset();
        assert_eq!(clock, GameClock::new());
    }

    #[test]
    fn test_current_time_format() {
        let clock = GameClock {
            total_minutes: 65,
            day: 1,
        };
        assert_eq!(clock.current_time(), "01:05");
    }
}
