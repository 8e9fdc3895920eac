//! Game constants - clock windows, caps, costs, bonuses.
//!
//! Plain integer constants with no engine dependency. The session, the
//! pure rule modules and the headless harness all read from here.

pub mod clock {
    /// Minutes in one in-game day.
    pub const MINUTES_PER_DAY: u32 = 1440;
    /// Shop opens at 09:00.
    pub const OPENING_MINUTE: u32 = 540;
    /// Shop closes at 17:00 (exclusive end of the working window).
    pub const CLOSING_MINUTE: u32 = 1020;
    /// Clock step per tick while the shop is open.
    pub const WORKING_STEP: u32 = 6;
    /// Clock step per tick while the shop is closed.
    pub const CLOSED_STEP: u32 = 60;
    /// Time of day after a reset or a new game.
    pub const START_MINUTE: u32 = OPENING_MINUTE;
    pub const START_DAY: u32 = 1;
}

pub mod selection {
    /// Maximum material picks per fabrication attempt.
    pub const MAX_PICKS: u32 = 6;
    /// Maximum distinct materials per fabrication attempt.
    pub const MAX_DISTINCT: usize = 2;
    /// Supply consumed by the first (base) pick.
    pub const BASE_PICK_COST: u32 = 5;
    /// Supply consumed by every later pick.
    pub const FOLLOW_PICK_COST: u32 = 1;
    /// Catalyst consumed by each even-numbered pick.
    pub const CATALYST_PER_EVEN_PICK: u32 = 1;
}

pub mod resources {
    /// Upper bound for every material supply, energy and catalyst.
    pub const CAP: u32 = 100;
    /// Energy consumed per fabrication.
    pub const ENERGY_PER_FABRICATION: u32 = 1;
}

pub mod pricing {
    pub const BASE_COLOR_BONUS: u32 = 50;
    pub const ACCENT_COLOR_BONUS: u32 = 20;
    pub const INTENSITY_BONUS: u32 = 10;
    pub const CHAIR_BONUS: u32 = 50;
    pub const CABINET_BONUS: u32 = 100;
    pub const DESK_BONUS: u32 = 150;
    /// Money per satisfaction star added to every sale.
    pub const SATISFACTION_MULTIPLIER: u32 = 10;
}

pub mod satisfaction {
    pub const MIN_RATING: u32 = 1;
    pub const MAX_RATING: u32 = 5;
    /// Cap on the sales-volume component of the daily rating.
    pub const MAX_VOLUME_SCORE: u32 = 3;
    /// Sales needed per volume point.
    pub const SALES_PER_VOLUME_POINT: u32 = 2;
    /// Weight applied to the correct-sale ratio.
    pub const ACCURACY_WEIGHT: f64 = 2.0;
}

pub mod defaults {
    pub const MONEY: u32 = 0;
    pub const ENERGY: u32 = 10;
    pub const CATALYST: u32 = 50;
    pub const MATERIAL_SUPPLY: u32 = 10;
    pub const RATING: u32 = 5;
    pub const LANDFILL_MIN: u32 = 100_000;
    pub const LANDFILL_MAX: u32 = 500_000;
    pub const DAILY_LANDFILL_MIN: u32 = 1_000;
    pub const DAILY_LANDFILL_MAX: u32 = 5_000;
    pub const PURCHASE_BATCH: u32 = 10;
    pub const MATERIAL_PRICE: u32 = 10;
    pub const ENERGY_PRICE: u32 = 15;
    pub const CATALYST_PRICE: u32 = 20;
}
