//! Supply shop - buying materials, energy and catalyst.
//!
//! Quotes are pure: they check the wallet, the cap and (for materials) the
//! landfill, and say how many units a batch would grant. The session applies
//! an accepted quote.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::constants::resources::CAP;
use crate::error::Rejected;
use crate::materials::Material;

/// Something the shop sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseKind {
    Material(Material),
    Energy,
    Catalyst,
}

impl PurchaseKind {
    /// Fixed price of one batch under the given config.
    pub fn price(self, config: &GameConfig) -> u32 {
        match self {
            PurchaseKind::Material(_) => config.material_price,
            PurchaseKind::Energy => config.energy_price,
            PurchaseKind::Catalyst => config.catalyst_price,
        }
    }
}

/// An accepted purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub kind: PurchaseKind,
    pub units: u32,
    pub cost: u32,
}

/// Quote a batch of `kind`.
///
/// * `money` - the player's wallet
/// * `current` - units of this resource on hand
/// * `landfill` - global landfill supply (only checked for materials)
pub fn quote(
    kind: PurchaseKind,
    config: &GameConfig,
    money: u32,
    current: u32,
    landfill: u32,
) -> Result<Purchase, Rejected> {
    let price = kind.price(config);
    if money < price {
        return Err(Rejected::InsufficientFunds { price, money });
    }
    let units = config.purchase_batch.min(CAP.saturating_sub(current));
    if units == 0 {
        return Err(Rejected::StorageFull);
    }
    if matches!(kind, PurchaseKind::Material(_)) && landfill < units {
        return Err(Rejected::LandfillExhausted {
            needed: units,
            available: landfill,
        });
    }
    Ok(Purchase {
        kind,
        units,
        cost: price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn test_material_batch() {
        let p = quote(PurchaseKind::Material(Material::Cans), &config(), 10, 10, 1000).unwrap();
        assert_eq!(p.units, 10);
        assert_eq!(p.cost, 10);
    }

    #[test]
    fn test_prices() {
        let cfg = config();
        assert_eq!(PurchaseKind::Material(Material::Sack).price(&cfg), 10);
        assert_eq!(PurchaseKind::Energy.price(&cfg), 15);
        assert_eq!(PurchaseKind::Catalyst.price(&cfg), 20);
    }

    #[test]
    fn test_partial_batch_near_cap() {
        let p = quote(PurchaseKind::Energy, &config(), 100, 96, 0).unwrap();
        assert_eq!(p.units, 4);
        assert_eq!(p.cost, 15);
    }

    #[test]
    fn test_full_storage_rejected() {
        assert_eq!(
            quote(PurchaseKind::Catalyst, &config(), 100, 100, 0).unwrap_err(),
            Rejected::StorageFull
        );
    }

    #[test]
    fn test_insufficient_funds() {
        assert_eq!(
            quote(PurchaseKind::Catalyst, &config(), 19, 0, 0).unwrap_err(),
            Rejected::InsufficientFunds {
                price: 20,
                money: 19
            }
        );
    }

    #[test]
    fn test_landfill_checked_for_materials_only() {
        assert!(matches!(
            quote(PurchaseKind::Material(Material::Cups), &config(), 50, 0, 9),
            Err(Rejected::LandfillExhausted {
                needed: 10,
                available: 9
            })
        ));
        assert!(quote(PurchaseKind::Energy, &config(), 50, 0, 0).is_ok());
    }
}
