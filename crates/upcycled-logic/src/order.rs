//! Buyer orders - what the customer at the counter wants.
//!
//! An order names a base color, a speckle intensity, an accent color that
//! differs from the base, and a product category. It stays fixed until a
//! sale completes or a new game starts.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::pricing::{CABINET_BONUS, CHAIR_BONUS, DESK_BONUS};
use crate::materials::Color;

/// How strongly the accent color shows through, by speckle count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intensity {
    Hint,
    Touch,
    Moderate,
    Strong,
    Rich,
}

impl Intensity {
    pub const ALL: [Intensity; 5] = [
        Intensity::Hint,
        Intensity::Touch,
        Intensity::Moderate,
        Intensity::Strong,
        Intensity::Rich,
    ];

    /// Bucket a speckle (non-base pick) count. Anything outside 1–4,
    /// including a base-only object, reads as rich.
    pub fn from_speckles(speckles: u32) -> Intensity {
        match speckles {
            1 => Intensity::Hint,
            2 => Intensity::Touch,
            3 => Intensity::Moderate,
            4 => Intensity::Strong,
            _ => Intensity::Rich,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Intensity::Hint => "hint of",
            Intensity::Touch => "touch of",
            Intensity::Moderate => "moderate",
            Intensity::Strong => "strong",
            Intensity::Rich => "rich of",
        }
    }
}

/// Product shapes the machine can fabricate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProductCategory {
    #[default]
    Chair,
    Cabinet,
    Desk,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 3] = [
        ProductCategory::Chair,
        ProductCategory::Cabinet,
        ProductCategory::Desk,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProductCategory::Chair => "Chair",
            ProductCategory::Cabinet => "Cabinet",
            ProductCategory::Desk => "Desk",
        }
    }

    /// Bonus paid when the fabricated category is the one requested.
    pub fn bonus(self) -> u32 {
        match self {
            ProductCategory::Chair => CHAIR_BONUS,
            ProductCategory::Cabinet => CABINET_BONUS,
            ProductCategory::Desk => DESK_BONUS,
        }
    }

    /// Model asset the renderer loads for this category.
    pub fn model_asset(self) -> &'static str {
        match self {
            ProductCategory::Chair => "Chair.obj",
            ProductCategory::Cabinet => "Cabinet.obj",
            ProductCategory::Desk => "Desk.obj",
        }
    }
}

/// A buyer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub base_color: Color,
    pub intensity: Intensity,
    pub accent_color: Color,
    pub category: ProductCategory,
}

impl Order {
    /// Draw a fresh order. The accent color never equals the base color.
    pub fn random(rng: &mut impl Rng) -> Self {
        let base_color = Color::ALL[rng.gen_range(0..Color::ALL.len())];
        let remaining: Vec<Color> = Color::ALL
            .into_iter()
            .filter(|c| *c != base_color)
            .collect();
        let accent_color = *remaining.choose(rng).unwrap_or(&Color::Blue);
        let intensity = Intensity::ALL[rng.gen_range(0..Intensity::ALL.len())];
        let category = ProductCategory::ALL[rng.gen_range(0..ProductCategory::ALL.len())];
        Self {
            base_color,
            intensity,
            accent_color,
            category,
        }
    }

    /// What the buyer says while waiting for an object.
    pub fn request_line(&self) -> String {
        format!(
            "I'm interested in a {} with {} base, {} {} accent. Can you make this?",
            self.category.name(),
            self.base_color.name(),
            self.intensity.label(),
            self.accent_color.name()
        )
    }

    /// What the buyer says once an object is on the counter.
    pub fn offer_line(price: u32) -> String {
        format!("I would buy for ${}, deal?", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_intensity_buckets() {
        assert_eq!(Intensity::from_speckles(0), Intensity::Rich);
        assert_eq!(Intensity::from_speckles(1), Intensity::Hint);
        assert_eq!(Intensity::from_speckles(2), Intensity::Touch);
        assert_eq!(Intensity::from_speckles(3), Intensity::Moderate);
        assert_eq!(Intensity::from_speckles(4), Intensity::Strong);
        assert_eq!(Intensity::from_speckles(5), Intensity::Rich);
        assert_eq!(Intensity::from_speckles(9), Intensity::Rich);
    }

    #[test]
    fn test_category_bonuses() {
        assert_eq!(ProductCategory::Chair.bonus(), 50);
        assert_eq!(ProductCategory::Cabinet.bonus(), 100);
        assert_eq!(ProductCategory::Desk.bonus(), 150);
    }

    #[test]
    fn test_random_order_accent_differs_from_base() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let order = Order::random(&mut rng);
            assert_ne!(order.base_color, order.accent_color);
        }
    }

    #[test]
    fn test_random_order_covers_categories() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let order = Order::random(&mut rng);
            seen[order.category as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_order_is_seeded() {
        let a = Order::random(&mut StdRng::seed_from_u64(3));
        let b = Order::random(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_request_line() {
        let order = Order {
            base_color: Color::Green,
            intensity: Intensity::Touch,
            accent_color: Color::Yellow,
            category: ProductCategory::Desk,
        };
        assert_eq!(
            order.request_line(),
            "I'm interested in a Desk with green base, touch of yellow accent. Can you make this?"
        );
        assert_eq!(Order::offer_line(80), "I would buy for $80, deal?");
    }
}
