//! Trash materials, their colors, and per-material supply counts.

use serde::{Deserialize, Serialize};

use crate::constants::resources::CAP;

/// Colors a buyer can ask for. Each material has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Green,
    Yellow,
    Pink,
    Blue,
    Purple,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Green,
        Color::Yellow,
        Color::Pink,
        Color::Blue,
        Color::Purple,
    ];

    /// Lowercase name used in buyer dialogue.
    pub fn name(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Pink => "pink",
            Color::Blue => "blue",
            Color::Purple => "purple",
        }
    }
}

/// The five collectable materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Material {
    Cans,
    Wrap,
    Cups,
    Mask,
    Sack,
}

impl Material {
    /// All materials in display order. The order doubles as the accent
    /// tie-break: earlier materials win ties.
    pub const ALL: [Material; 5] = [
        Material::Cans,
        Material::Wrap,
        Material::Cups,
        Material::Mask,
        Material::Sack,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Material::Cans => "Cans",
            Material::Wrap => "Wrap",
            Material::Cups => "Cups",
            Material::Mask => "Mask",
            Material::Sack => "Sack",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Material::Cans => Color::Green,
            Material::Wrap => Color::Yellow,
            Material::Cups => Color::Pink,
            Material::Mask => Color::Blue,
            Material::Sack => Color::Purple,
        }
    }

    /// Display RGB in 0.0–1.0, handed to the texture renderer.
    pub fn rgb(self) -> (f32, f32, f32) {
        match self {
            Material::Cans => (0.47, 0.85, 0.47),
            Material::Wrap => (0.95, 0.95, 0.45),
            Material::Cups => (0.95, 0.47, 0.95),
            Material::Mask => (0.47, 0.85, 0.95),
            Material::Sack => (0.47, 0.47, 0.95),
        }
    }
}

/// Units on hand for each material, each in `0..=CAP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSupply {
    counts: [u32; 5],
}

impl MaterialSupply {
    /// Every material starts at the same count (clamped to the cap).
    pub fn uniform(count: u32) -> Self {
        Self {
            counts: [count.min(CAP); 5],
        }
    }

    pub fn get(&self, material: Material) -> u32 {
        self.counts[material.index()]
    }

    /// Free space below the cap.
    pub fn headroom(&self, material: Material) -> u32 {
        CAP.saturating_sub(self.get(material))
    }

    /// Remove `units`; returns false and leaves the count alone if short.
    pub fn take(&mut self, material: Material, units: u32) -> bool {
        let slot = &mut self.counts[material.index()];
        if *slot < units {
            return false;
        }
        *slot -= units;
        true
    }

    /// Add `units`, clamped to the cap. Returns the units actually added.
    pub fn add(&mut self, material: Material, units: u32) -> u32 {
        let added = units.min(self.headroom(material));
        self.counts[material.index()] += added;
        added
    }

    pub fn iter(&self) -> impl Iterator<Item = (Material, u32)> + '_ {
        Material::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}

impl Default for MaterialSupply {
    fn default() -> Self {
        Self::uniform(crate::constants::defaults::MATERIAL_SUPPLY)
    }
}
