//! Material picks for one fabrication attempt.
//!
//! The first pick is the base material and sets the dominant color. Every
//! later pick adds speckles. At most six picks and two distinct materials
//! fit in one attempt, and every second pick burns a unit of catalyst.
//!
//! [`Selection::check_pick`] only validates; the session applies the
//! returned [`PickCost`] and then calls [`Selection::record`].

use serde::{Deserialize, Serialize};

use crate::constants::selection::*;
use crate::error::Rejected;
use crate::materials::{Material, MaterialSupply};

/// Resources a pick will consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickCost {
    pub material: Material,
    pub supply: u32,
    pub catalyst: u32,
}

/// Picks recorded so far in the current attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    counts: [u32; 5],
    base: Option<Material>,
    total: u32,
}

/// Cosmetic texture parameters derived from a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    pub base: Option<Material>,
    /// Display color of the base material.
    pub base_rgb: Option<(f32, f32, f32)>,
    /// Fraction of the maximum picks that went to non-base materials.
    pub noise_level: f64,
    /// Pick counts of non-base materials; speckle colors are drawn
    /// proportionally to these.
    pub speckle_weights: Vec<(Material, u32)>,
    /// Display colors matching `speckle_weights` entry for entry.
    pub speckle_rgb: Vec<(f32, f32, f32)>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn total_picks(&self) -> u32 {
        self.total
    }

    pub fn count(&self, material: Material) -> u32 {
        self.counts[material.index()]
    }

    pub fn base(&self) -> Option<Material> {
        self.base
    }

    pub fn distinct_materials(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Validate the next pick against the attempt limits and stock on hand.
    pub fn check_pick(
        &self,
        material: Material,
        supply: &MaterialSupply,
        catalyst: u32,
    ) -> Result<PickCost, Rejected> {
        if self.total >= MAX_PICKS {
            return Err(Rejected::PickLimitReached);
        }
        if self.count(material) == 0 && self.distinct_materials() >= MAX_DISTINCT {
            return Err(Rejected::TooManyMaterials);
        }
        let next = self.total + 1;
        let needs_catalyst = next % 2 == 0;
        if needs_catalyst && catalyst == 0 {
            return Err(Rejected::OutOfCatalyst);
        }
        let needed = if self.is_empty() {
            BASE_PICK_COST
        } else {
            FOLLOW_PICK_COST
        };
        let available = supply.get(material);
        if available < needed {
            return Err(Rejected::InsufficientSupply {
                material,
                needed,
                available,
            });
        }
        Ok(PickCost {
            material,
            supply: needed,
            catalyst: if needs_catalyst {
                CATALYST_PER_EVEN_PICK
            } else {
                0
            },
        })
    }

    /// Record a pick that has already been paid for.
    pub fn record(&mut self, material: Material) {
        if self.base.is_none() {
            self.base = Some(material);
        }
        self.counts[material.index()] += 1;
        self.total += 1;
    }

    /// Picks that went to materials other than the base.
    pub fn speckles(&self) -> u32 {
        match self.base {
            Some(base) => self.total - self.count(base),
            None => 0,
        }
    }

    /// Most-picked non-base material. Ties go to the earliest material in
    /// [`Material::ALL`].
    pub fn accent(&self) -> Option<Material> {
        let base = self.base?;
        let mut best: Option<(Material, u32)> = None;
        for material in Material::ALL {
            if material == base {
                continue;
            }
            let count = self.count(material);
            if count == 0 {
                continue;
            }
            match best {
                Some((_, best_count)) if best_count >= count => {}
                _ => best = Some((material, count)),
            }
        }
        best.map(|(m, _)| m)
    }

    pub fn noise_level(&self) -> f64 {
        self.speckles() as f64 / MAX_PICKS as f64
    }

    pub fn preview(&self) -> Preview {
        let speckle_weights = Material::ALL
            .into_iter()
            .filter(|m| Some(*m) != self.base)
            .map(|m| (m, self.count(m)))
            .filter(|&(_, n)| n > 0)
            .collect::<Vec<_>>();
        let speckle_rgb = speckle_weights.iter().map(|(m, _)| m.rgb()).collect();
        Preview {
            base: self.base,
            base_rgb: self.base.map(Material::rgb),
            noise_level: self.noise_level(),
            speckle_weights,
            speckle_rgb,
        }
    }
}
