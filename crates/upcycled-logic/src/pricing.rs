//! Order matching - how much a buyer pays and whether they got what they
//! asked for.
//!
//! The price and the "correct sale" verdict are computed from the same four
//! comparisons but are independent: a price can be partial while the sale
//! is still counted as incorrect.
//!
//! ```
//! use upcycled_logic::materials::{Color, Material};
//! use upcycled_logic::order::{Intensity, Order, ProductCategory};
//! use upcycled_logic::pricing::appraise;
//! use upcycled_logic::selection::Selection;
//!
//! let mut sel = Selection::new();
//! sel.record(Material::Cans);
//! sel.record(Material::Wrap);
//! sel.record(Material::Wrap);
//! let order = Order {
//!     base_color: Color::Green,
//!     intensity: Intensity::Touch,
//!     accent_color: Color::Yellow,
//!     category: ProductCategory::Desk,
//! };
//! let appraisal = appraise(&sel, ProductCategory::Chair, &order);
//! assert_eq!(appraisal.price.total(), 80);
//! assert!(!appraisal.matches.is_correct());
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::pricing::*;
use crate::order::{Intensity, Order, ProductCategory};
use crate::selection::Selection;

/// Which order attributes the object satisfies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub base_color: bool,
    pub accent_color: bool,
    pub intensity: bool,
    pub category: bool,
}

impl MatchReport {
    /// A sale is correct only when every attribute matches.
    pub fn is_correct(&self) -> bool {
        self.base_color && self.accent_color && self.intensity && self.category
    }

    pub fn matched_count(&self) -> u32 {
        [self.base_color, self.accent_color, self.intensity, self.category]
            .iter()
            .filter(|&&m| m)
            .count() as u32
    }
}

/// Per-attribute bonuses that make up the base sale price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_color: u32,
    pub accent_color: u32,
    pub intensity: u32,
    pub category: u32,
}

impl PriceBreakdown {
    pub fn total(&self) -> u32 {
        self.base_color + self.accent_color + self.intensity + self.category
    }
}

/// Price and verdict for one object against one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appraisal {
    pub price: PriceBreakdown,
    pub matches: MatchReport,
}

/// Compare a selection and its product category against an order.
pub fn appraise(selection: &Selection, category: ProductCategory, order: &Order) -> Appraisal {
    let base_color = selection
        .base()
        .is_some_and(|m| m.color() == order.base_color);
    let accent_color = selection
        .accent()
        .is_some_and(|m| m.color() == order.accent_color);
    let intensity = Intensity::from_speckles(selection.speckles()) == order.intensity;
    let category_match = category == order.category;

    let matches = MatchReport {
        base_color,
        accent_color,
        intensity,
        category: category_match,
    };
    let price = PriceBreakdown {
        base_color: if base_color { BASE_COLOR_BONUS } else { 0 },
        accent_color: if accent_color { ACCENT_COLOR_BONUS } else { 0 },
        intensity: if intensity { INTENSITY_BONUS } else { 0 },
        category: if category_match { category.bonus() } else { 0 },
    };
    Appraisal { price, matches }
}

/// Highest base price an object can earn. An object holds at most two
/// materials, so every match bonus plus the largest category bonus.
pub fn max_price() -> u32 {
    let category = ProductCategory::ALL
        .into_iter()
        .map(ProductCategory::bonus)
        .max()
        .unwrap_or(0);
    BASE_COLOR_BONUS + ACCENT_COLOR_BONUS + INTENSITY_BONUS + category
}

/// Money added on top of the base price for each satisfaction star.
pub fn satisfaction_bonus(rating: u32) -> u32 {
    rating * SATISFACTION_MULTIPLIER
}

/// Total paid at the counter.
pub fn payout(price: u32, rating: u32) -> u32 {
    price + satisfaction_bonus(rating)
}
