//! Daily customer satisfaction.
//!
//! Sales are tallied through the day. At rollover the tally becomes a new
//! 1–5 star rating: up to three stars for volume and up to two for accuracy.

use serde::{Deserialize, Serialize};

use crate::constants::satisfaction::*;
use crate::pricing::satisfaction_bonus;

/// Counters for the current in-game day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStats {
    pub sold: u32,
    pub correct: u32,
    pub profit: u32,
    /// Material units bought from the landfill.
    pub materials_purchased: u32,
}

impl DailyStats {
    pub fn record_sale(&mut self, payout: u32, correct: bool) {
        self.sold += 1;
        if correct {
            self.correct += 1;
        }
        self.profit += payout;
    }

    /// Fraction of sales that were correct, 0.0 with no sales.
    pub fn accuracy(&self) -> f64 {
        if self.sold == 0 {
            0.0
        } else {
            self.correct as f64 / self.sold as f64
        }
    }
}

/// End-of-day summary shown before the next morning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    /// The day that just ended.
    pub day: u32,
    pub stats: DailyStats,
    /// Rating that applies from now on.
    pub rating: u32,
    /// Money per sale the new rating adds.
    pub bonus: u32,
    /// Correct sales as a whole percentage.
    pub accuracy_percent: u32,
}

pub fn volume_score(sold: u32) -> u32 {
    (sold / SALES_PER_VOLUME_POINT).min(MAX_VOLUME_SCORE)
}

pub fn accuracy_score(stats: &DailyStats) -> u32 {
    (stats.accuracy() * ACCURACY_WEIGHT).round() as u32
}

/// Rating earned by a day's sales, clamped to 1–5 stars.
pub fn compute_rating(stats: &DailyStats) -> u32 {
    (volume_score(stats.sold) + accuracy_score(stats)).clamp(MIN_RATING, MAX_RATING)
}

/// Turn a finished day's counters into a report.
pub fn close_day(day: u32, stats: DailyStats) -> DayReport {
    let rating = compute_rating(&stats);
    DayReport {
        day,
        stats,
        rating,
        bonus: satisfaction_bonus(rating),
        accuracy_percent: (stats.accuracy() * 100.0).round() as u32,
    }
}
