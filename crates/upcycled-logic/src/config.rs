//! Game configuration - starting levels, prices and random seed.
//!
//! A new game (and every resign) starts from a [`GameConfig`]. The default
//! matches the shipped game; the harness can load alternatives from JSON.
//!
//! ```
//! use upcycled_logic::config::{validate_config, GameConfig};
//!
//! let mut config = GameConfig::default();
//! config.seed = Some(42);
//! let errors = validate_config(&config);
//! assert!(errors.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::defaults;
use crate::constants::resources::CAP;
use crate::constants::satisfaction::{MAX_RATING, MIN_RATING};

/// Tunable parameters for a play session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_money: u32,
    pub starting_energy: u32,
    pub starting_catalyst: u32,
    /// Units of each material at the start.
    pub starting_material_supply: u32,
    /// Satisfaction rating before the first rollover.
    pub starting_rating: u32,
    /// Inclusive range the global landfill is drawn from.
    pub landfill_min: u32,
    pub landfill_max: u32,
    /// Inclusive range added to the landfill every rollover.
    pub daily_landfill_min: u32,
    pub daily_landfill_max: u32,
    /// Units granted per purchase (before the cap).
    pub purchase_batch: u32,
    pub material_price: u32,
    pub energy_price: u32,
    pub catalyst_price: u32,
    /// Reject fabricating and selling while the shop is closed.
    pub enforce_shop_hours: bool,
    /// Random seed for orders and landfill draws (None = entropy).
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_money: defaults::MONEY,
            starting_energy: defaults::ENERGY,
            starting_catalyst: defaults::CATALYST,
            starting_material_supply: defaults::MATERIAL_SUPPLY,
            starting_rating: defaults::RATING,
            landfill_min: defaults::LANDFILL_MIN,
            landfill_max: defaults::LANDFILL_MAX,
            daily_landfill_min: defaults::DAILY_LANDFILL_MIN,
            daily_landfill_max: defaults::DAILY_LANDFILL_MAX,
            purchase_batch: defaults::PURCHASE_BATCH,
            material_price: defaults::MATERIAL_PRICE,
            energy_price: defaults::ENERGY_PRICE,
            catalyst_price: defaults::CATALYST_PRICE,
            enforce_shop_hours: false,
            seed: None,
        }
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A starting level exceeds the resource cap.
    StartingLevelAboveCap { field: &'static str, value: u32 },
    /// Starting rating outside 1–5 stars.
    InvalidRating(u32),
    /// A min/max range is inverted.
    InvertedRange { field: &'static str, min: u32, max: u32 },
    /// Purchases would never grant anything.
    ZeroBatch,
}

/// Validate a configuration, returning all errors found.
pub fn validate_config(config: &GameConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("starting_energy", config.starting_energy),
        ("starting_catalyst", config.starting_catalyst),
        ("starting_material_supply", config.starting_material_supply),
    ] {
        if value > CAP {
            errors.push(ConfigError::StartingLevelAboveCap { field, value });
        }
    }

    if !(MIN_RATING..=MAX_RATING).contains(&config.starting_rating) {
        errors.push(ConfigError::InvalidRating(config.starting_rating));
    }

    if config.landfill_min > config.landfill_max {
        errors.push(ConfigError::InvertedRange {
            field: "landfill",
            min: config.landfill_min,
            max: config.landfill_max,
        });
    }
    if config.daily_landfill_min > config.daily_landfill_max {
        errors.push(ConfigError::InvertedRange {
            field: "daily_landfill",
            min: config.daily_landfill_min,
            max: config.daily_landfill_max,
        });
    }

    if config.purchase_batch == 0 {
        errors.push(ConfigError::ZeroBatch);
    }

    errors
}
