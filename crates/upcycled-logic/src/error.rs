//! Guard failures for player actions.
//!
//! A rejected action never changes game state. Callers that only care about
//! the state can ignore the error entirely.

use crate::materials::Material;

/// Why an action had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    /// The attempt already holds the maximum number of picks.
    PickLimitReached,
    /// An object is fabricated and waiting to be sold or reset.
    AlreadyFabricated,
    /// Two distinct materials are already in the attempt.
    TooManyMaterials,
    /// The next pick needs catalyst and none is left.
    OutOfCatalyst,
    /// Not enough of a material for this pick.
    InsufficientSupply {
        material: Material,
        needed: u32,
        available: u32,
    },
    /// Fabrication needs at least one pick.
    NothingSelected,
    /// Fabrication needs energy.
    OutOfEnergy,
    /// The action is only available during working hours.
    ShopClosed,
    /// There is no fabricated object to sell.
    NothingToSell,
    /// The purchase costs more than the player has.
    InsufficientFunds { price: u32, money: u32 },
    /// The resource is already at its cap.
    StorageFull,
    /// The global landfill cannot cover the batch.
    LandfillExhausted { needed: u32, available: u32 },
}

impl std::fmt::Display for Rejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejected::PickLimitReached => write!(f, "pick limit reached"),
            Rejected::AlreadyFabricated => write!(f, "an object is already fabricated"),
            Rejected::TooManyMaterials => write!(f, "two materials already selected"),
            Rejected::OutOfCatalyst => write!(f, "no catalyst left"),
            Rejected::InsufficientSupply {
                material,
                needed,
                available,
            } => write!(
                f,
                "not enough {}: need {}, have {}",
                material.name(),
                needed,
                available
            ),
            Rejected::NothingSelected => write!(f, "no materials selected"),
            Rejected::OutOfEnergy => write!(f, "no energy left"),
            Rejected::ShopClosed => write!(f, "shop is closed"),
            Rejected::NothingToSell => write!(f, "nothing fabricated to sell"),
            Rejected::InsufficientFunds { price, money } => {
                write!(f, "costs {}, only {} available", price, money)
            }
            Rejected::StorageFull => write!(f, "storage is full"),
            Rejected::LandfillExhausted { needed, available } => write!(
                f,
                "landfill has {} units, batch needs {}",
                available, needed
            ),
        }
    }
}

impl std::error::Error for Rejected {}
