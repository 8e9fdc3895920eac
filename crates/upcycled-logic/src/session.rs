//! A single play session - the state behind the shop counter.
//!
//! [`GameSession`] is the explicit context object every UI event is routed
//! through: material taps, fabricate/sell/reset buttons, shop purchases and
//! the periodic clock timer. Nothing is global; two sessions never share
//! state.
//!
//! Every action either succeeds and pushes [`GameEvent`]s, or returns a
//! [`Rejected`] reason and leaves the session untouched.
//!
//! ```
//! use upcycled_logic::config::GameConfig;
//! use upcycled_logic::materials::Material;
//! use upcycled_logic::session::GameSession;
//!
//! let mut game = GameSession::new(GameConfig { seed: Some(1), ..GameConfig::default() });
//! game.select_material(Material::Cans).unwrap();
//! game.select_material(Material::Wrap).unwrap();
//! let price = game.fabricate().unwrap();
//! let receipt = game.sell().unwrap();
//! assert_eq!(receipt.payout, price + 50);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::clock::GameClock;
use crate::config::{validate_config, GameConfig};
use crate::constants::resources::{CAP, ENERGY_PER_FABRICATION};
use crate::constants::satisfaction::{MAX_RATING, MIN_RATING};
use crate::error::Rejected;
use crate::events::GameEvent;
use crate::materials::{Material, MaterialSupply};
use crate::order::{Order, ProductCategory};
use crate::pricing::{appraise, satisfaction_bonus, Appraisal, MatchReport};
use crate::satisfaction::{close_day, DailyStats, DayReport};
use crate::selection::{Preview, Selection};
use crate::shop::{quote, Purchase, PurchaseKind};

/// Levels restored by a reset: taken at fabrication, moved forward by
/// purchases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub supply: MaterialSupply,
    pub energy: u32,
    pub catalyst: u32,
}

/// An object on the counter, frozen at fabrication time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FabricatedObject {
    pub selection: Selection,
    pub category: ProductCategory,
    pub appraisal: Appraisal,
}

impl FabricatedObject {
    pub fn price(&self) -> u32 {
        self.appraisal.price.total()
    }

    /// Model the renderer loads for this object.
    pub fn model_asset(&self) -> &'static str {
        self.category.model_asset()
    }

    /// Texture parameters the object was fabricated with.
    pub fn preview(&self) -> Preview {
        self.selection.preview()
    }
}

/// Result of a completed sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleReceipt {
    /// Base price from order matching.
    pub price: u32,
    /// Satisfaction bonus at the time of sale.
    pub bonus: u32,
    pub payout: u32,
    pub correct: bool,
    pub matches: MatchReport,
}

/// Serializable view of the whole session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub clock: GameClock,
    pub current_time: String,
    pub working_hours: bool,
    pub money: u32,
    pub landfill: u32,
    pub supply: MaterialSupply,
    pub energy: u32,
    pub catalyst: u32,
    pub checkpoint: Checkpoint,
    pub selection: Selection,
    pub category: ProductCategory,
    pub fabricated: Option<FabricatedObject>,
    pub order: Order,
    pub rating: u32,
    pub today: DailyStats,
    pub last_report: Option<DayReport>,
}

fn reject(action: &'static str, err: Rejected) -> Rejected {
    log::debug!("{} rejected: {}", action, err);
    err
}

/// Game state for one player.
pub struct GameSession {
    config: GameConfig,
    rng: StdRng,
    clock: GameClock,
    money: u32,
    landfill: u32,
    supply: MaterialSupply,
    energy: u32,
    catalyst: u32,
    checkpoint: Checkpoint,
    selection: Selection,
    category: ProductCategory,
    fabricated: Option<FabricatedObject>,
    order: Order,
    rating: u32,
    today: DailyStats,
    last_report: Option<DayReport>,
    last_processed_day: u32,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Start a new game. A seeded config replays the same orders and
    /// landfill draws.
    pub fn new(config: GameConfig) -> Self {
        for problem in validate_config(&config) {
            log::warn!("questionable game config: {:?}", problem);
        }
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let order = Order::random(&mut rng);
        let supply = MaterialSupply::uniform(config.starting_material_supply);
        let energy = config.starting_energy.min(CAP);
        let catalyst = config.starting_catalyst.min(CAP);
        let clock = GameClock::new();
        let mut session = Self {
            money: config.starting_money,
            landfill: 0,
            supply,
            energy,
            catalyst,
            checkpoint: Checkpoint {
                supply,
                energy,
                catalyst,
            },
            selection: Selection::new(),
            category: ProductCategory::default(),
            fabricated: None,
            order,
            rating: config.starting_rating.clamp(MIN_RATING, MAX_RATING),
            today: DailyStats::default(),
            last_report: None,
            last_processed_day: clock.day,
            events: Vec::new(),
            clock,
            rng,
            config,
        };
        session.landfill = session.draw_landfill();
        session
    }

    fn draw_landfill(&mut self) -> u32 {
        let (lo, hi) = (self.config.landfill_min, self.config.landfill_max);
        self.rng.gen_range(lo.min(hi)..=hi.max(lo))
    }

    fn draw_daily_landfill(&mut self) -> u32 {
        let (lo, hi) = (self.config.daily_landfill_min, self.config.daily_landfill_max);
        self.rng.gen_range(lo.min(hi)..=hi.max(lo))
    }

    fn capture_checkpoint(&mut self) {
        self.checkpoint = Checkpoint {
            supply: self.supply,
            energy: self.energy,
            catalyst: self.catalyst,
        };
    }

    fn shop_hours_guard(&self, action: &'static str) -> Result<(), Rejected> {
        if self.config.enforce_shop_hours && !self.clock.is_working_hours() {
            return Err(reject(action, Rejected::ShopClosed));
        }
        Ok(())
    }

    // ── Selection & fabrication ─────────────────────────────────────────

    /// Add a material to the current attempt and recompute the preview.
    pub fn select_material(&mut self, material: Material) -> Result<Preview, Rejected> {
        if self.fabricated.is_some() {
            return Err(reject("pick", Rejected::AlreadyFabricated));
        }
        let cost = self
            .selection
            .check_pick(material, &self.supply, self.catalyst)
            .map_err(|e| reject("pick", e))?;

        let taken = self.supply.take(cost.material, cost.supply);
        debug_assert!(taken, "check_pick verified the supply");
        self.catalyst = self.catalyst.saturating_sub(cost.catalyst);
        self.selection.record(material);

        let preview = self.selection.preview();
        self.events.push(GameEvent::MaterialPicked(material));
        self.events.push(GameEvent::PreviewChanged(preview.clone()));
        Ok(preview)
    }

    /// Choose the product the next fabrication produces.
    pub fn choose_category(&mut self, category: ProductCategory) -> Result<(), Rejected> {
        if self.fabricated.is_some() {
            return Err(reject("choose category", Rejected::AlreadyFabricated));
        }
        self.category = category;
        self.events.push(GameEvent::CategoryChosen(category));
        Ok(())
    }

    /// Freeze the current picks into an object. Returns its base price.
    pub fn fabricate(&mut self) -> Result<u32, Rejected> {
        if self.fabricated.is_some() {
            return Err(reject("fabricate", Rejected::AlreadyFabricated));
        }
        self.shop_hours_guard("fabricate")?;
        if self.selection.is_empty() {
            return Err(reject("fabricate", Rejected::NothingSelected));
        }
        if self.energy < ENERGY_PER_FABRICATION {
            return Err(reject("fabricate", Rejected::OutOfEnergy));
        }

        self.energy -= ENERGY_PER_FABRICATION;
        let appraisal = appraise(&self.selection, self.category, &self.order);
        let object = FabricatedObject {
            selection: self.selection.clone(),
            category: self.category,
            appraisal,
        };
        let price = object.price();
        let model = object.model_asset();
        self.fabricated = Some(object);
        self.capture_checkpoint();
        self.events.push(GameEvent::Fabricated { price, model });
        Ok(price)
    }

    /// Drop the current picks (and any unsold object) and restore levels
    /// to the last checkpoint.
    pub fn reset_selection(&mut self) {
        self.selection = Selection::new();
        self.fabricated = None;
        self.supply = self.checkpoint.supply;
        self.energy = self.checkpoint.energy;
        self.catalyst = self.checkpoint.catalyst;
        self.events.push(GameEvent::SelectionReset);
        self.events
            .push(GameEvent::PreviewChanged(self.selection.preview()));
    }

    // ── Selling ─────────────────────────────────────────────────────────

    /// Hand the fabricated object to the buyer.
    pub fn sell(&mut self) -> Result<SaleReceipt, Rejected> {
        let object = match &self.fabricated {
            Some(object) => object,
            None => return Err(reject("sell", Rejected::NothingToSell)),
        };
        self.shop_hours_guard("sell")?;

        let price = object.price();
        let matches = object.appraisal.matches;
        let correct = matches.is_correct();
        let bonus = satisfaction_bonus(self.rating);
        let receipt = SaleReceipt {
            price,
            bonus,
            payout: price + bonus,
            correct,
            matches,
        };

        self.money += receipt.payout;
        self.today.record_sale(receipt.payout, correct);
        self.fabricated = None;
        self.selection = Selection::new();
        self.order = Order::random(&mut self.rng);

        log::info!(
            "Day {} sale: price={} bonus={} matched={}/4 correct={}",
            self.clock.day,
            price,
            bonus,
            matches.matched_count(),
            correct
        );
        self.events.push(GameEvent::Sold(receipt));
        self.events.push(GameEvent::NewOrder(self.order));
        self.events
            .push(GameEvent::PreviewChanged(self.selection.preview()));
        Ok(receipt)
    }

    /// Whether the object on the counter satisfies every part of the order.
    pub fn is_correct_sale(&self) -> bool {
        self.fabricated
            .as_ref()
            .is_some_and(|o| o.appraisal.matches.is_correct())
    }

    // ── Shop ────────────────────────────────────────────────────────────

    /// Open the supply shop screen.
    pub fn visit_shop(&mut self) {
        self.events.push(GameEvent::ShopVisited);
    }

    /// Buy one batch. Bought units also move the checkpoint forward so a
    /// reset never takes them back.
    pub fn buy(&mut self, kind: PurchaseKind) -> Result<Purchase, Rejected> {
        let current = match kind {
            PurchaseKind::Material(m) => self.supply.get(m),
            PurchaseKind::Energy => self.energy,
            PurchaseKind::Catalyst => self.catalyst,
        };
        let purchase = quote(kind, &self.config, self.money, current, self.landfill)
            .map_err(|e| reject("purchase", e))?;

        self.money -= purchase.cost;
        match kind {
            PurchaseKind::Material(m) => {
                self.supply.add(m, purchase.units);
                self.checkpoint.supply.add(m, purchase.units);
                self.landfill -= purchase.units;
                self.today.materials_purchased += purchase.units;
            }
            PurchaseKind::Energy => {
                self.energy += purchase.units;
                self.checkpoint.energy = (self.checkpoint.energy + purchase.units).min(CAP);
            }
            PurchaseKind::Catalyst => {
                self.catalyst += purchase.units;
                self.checkpoint.catalyst = (self.checkpoint.catalyst + purchase.units).min(CAP);
            }
        }
        self.events.push(GameEvent::Purchased(purchase));
        Ok(purchase)
    }

    pub fn buy_material(&mut self, material: Material) -> Result<Purchase, Rejected> {
        self.buy(PurchaseKind::Material(material))
    }

    pub fn buy_energy(&mut self) -> Result<Purchase, Rejected> {
        self.buy(PurchaseKind::Energy)
    }

    pub fn buy_catalyst(&mut self) -> Result<Purchase, Rejected> {
        self.buy(PurchaseKind::Catalyst)
    }

    // ── Time ────────────────────────────────────────────────────────────

    /// Advance the clock by one timer tick. Returns the report of the day
    /// that ended, if the tick crossed midnight.
    pub fn tick(&mut self) -> Option<DayReport> {
        let outcome = self.clock.tick();
        if outcome.shop_opened {
            self.events.push(GameEvent::ShopOpened);
        }
        if outcome.shop_closed {
            self.events.push(GameEvent::ShopClosed);
        }
        self.rollover_day()
    }

    /// Close the finished day's tally once the clock has moved past it:
    /// compute the new rating, reset the counters and replenish the
    /// landfill.
    fn rollover_day(&mut self) -> Option<DayReport> {
        if self.clock.day <= self.last_processed_day {
            return None;
        }
        let report = close_day(self.last_processed_day, self.today);
        self.rating = report.rating;
        self.today = DailyStats::default();
        self.last_processed_day = self.clock.day;
        let delivered = self.draw_daily_landfill();
        self.landfill = self.landfill.saturating_add(delivered);
        self.last_report = Some(report);

        log::info!(
            "Day {} closed: sold={} correct={} profit={} rating={}",
            report.day,
            report.stats.sold,
            report.stats.correct,
            report.stats.profit,
            report.rating
        );
        self.events.push(GameEvent::DayEnded(report));
        Some(report)
    }

    /// Give up and start over with the same config. The random stream
    /// continues, so the new game gets fresh orders.
    pub fn resign(&mut self) {
        let supply = MaterialSupply::uniform(self.config.starting_material_supply);
        self.clock.reset();
        self.money = self.config.starting_money;
        self.landfill = self.draw_landfill();
        self.supply = supply;
        self.energy = self.config.starting_energy.min(CAP);
        self.catalyst = self.config.starting_catalyst.min(CAP);
        self.capture_checkpoint();
        self.selection = Selection::new();
        self.category = ProductCategory::default();
        self.fabricated = None;
        self.order = Order::random(&mut self.rng);
        self.rating = self.config.starting_rating.clamp(MIN_RATING, MAX_RATING);
        self.today = DailyStats::default();
        self.last_report = None;
        self.last_processed_day = self.clock.day;

        log::info!("New game started, landfill={}", self.landfill);
        self.events.push(GameEvent::NewGame);
        self.events.push(GameEvent::NewOrder(self.order));
    }

    // ── Events ──────────────────────────────────────────────────────────

    /// Take every event raised since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn landfill(&self) -> u32 {
        self.landfill
    }

    pub fn supply(&self) -> &MaterialSupply {
        &self.supply
    }

    pub fn energy(&self) -> u32 {
        self.energy
    }

    pub fn catalyst(&self) -> u32 {
        self.catalyst
    }

    pub fn checkpoint(&self) -> &Checkpoint {
        &self.checkpoint
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn preview(&self) -> Preview {
        self.selection.preview()
    }

    pub fn category(&self) -> ProductCategory {
        self.category
    }

    pub fn fabricated(&self) -> Option<&FabricatedObject> {
        self.fabricated.as_ref()
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn rating(&self) -> u32 {
        self.rating
    }

    pub fn today(&self) -> &DailyStats {
        &self.today
    }

    pub fn last_report(&self) -> Option<&DayReport> {
        self.last_report.as_ref()
    }

    /// What the buyer is currently saying. Empty while the shop is closed.
    pub fn buyer_line(&self) -> String {
        if !self.clock.is_working_hours() {
            return String::new();
        }
        match &self.fabricated {
            Some(object) => Order::offer_line(object.price()),
            None => self.order.request_line(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            clock: self.clock,
            current_time: self.clock.current_time(),
            working_hours: self.clock.is_working_hours(),
            money: self.money,
            landfill: self.landfill,
            supply: self.supply,
            energy: self.energy,
            catalyst: self.catalyst,
            checkpoint: self.checkpoint,
            selection: self.selection.clone(),
            category: self.category,
            fabricated: self.fabricated.clone(),
            order: self.order,
            rating: self.rating,
            today: self.today,
            last_report: self.last_report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Color;
    use crate::order::Intensity;

    fn session() -> GameSession {
        GameSession::new(GameConfig {
            seed: Some(42),
            ..GameConfig::default()
        })
    }

    fn rich_session(money: u32) -> GameSession {
        GameSession::new(GameConfig {
            seed: Some(42),
            starting_money: money,
            ..GameConfig::default()
        })
    }

    #[test]
    fn test_new_game_defaults() {
        let game = session();
        assert_eq!(game.clock().day, 1);
        assert_eq!(game.clock().total_minutes, 540);
        assert_eq!(game.money(), 0);
        assert_eq!(game.rating(), 5);
        assert_eq!(game.energy(), 10);
        assert_eq!(game.catalyst(), 50);
        assert!(game.supply().iter().all(|(_, n)| n == 10));
        assert!((100_000..=500_000).contains(&game.landfill()));
        assert_eq!(game.category(), ProductCategory::Chair);
    }

    #[test]
    fn test_seeded_sessions_agree() {
        let a = session();
        let b = session();
        assert_eq!(a.order(), b.order());
        assert_eq!(a.landfill(), b.landfill());
    }

    #[test]
    fn test_pick_costs() {
        let mut game = session();
        game.select_material(Material::Cans).unwrap();
        assert_eq!(game.supply().get(Material::Cans), 5);
        assert_eq!(game.catalyst(), 50);
        game.select_material(Material::Cans).unwrap();
        assert_eq!(game.supply().get(Material::Cans), 4);
        assert_eq!(game.catalyst(), 49);
    }

    #[test]
    fn test_pick_after_fabrication_rejected() {
        let mut game = session();
        game.select_material(Material::Cans).unwrap();
        game.fabricate().unwrap();
        assert_eq!(
            game.select_material(Material::Cans).unwrap_err(),
            Rejected::AlreadyFabricated
        );
    }

    #[test]
    fn test_catalyst_exhausted_mid_attempt() {
        let mut game = GameSession::new(GameConfig {
            seed: Some(1),
            starting_catalyst: 1,
            ..GameConfig::default()
        });
        game.select_material(Material::Mask).unwrap();
        // second pick spends the last unit
        game.select_material(Material::Mask).unwrap();
        assert_eq!(game.catalyst(), 0);
        // third pick is odd and needs none
        game.select_material(Material::Mask).unwrap();
        // fourth pick is blocked by the guard, nothing changes
        let before = game.snapshot();
        assert_eq!(
            game.select_material(Material::Mask).unwrap_err(),
            Rejected::OutOfCatalyst
        );
        assert_eq!(game.selection().total_picks(), 3);
        assert_eq!(game.supply().get(Material::Mask), before.supply.get(Material::Mask));
    }

    #[test]
    fn test_fabricate_requires_pick() {
        let mut game = session();
        assert_eq!(game.fabricate().unwrap_err(), Rejected::NothingSelected);
        assert_eq!(game.energy(), 10);
    }

    #[test]
    fn test_fabricate_consumes_one_energy() {
        let mut game = session();
        game.select_material(Material::Cups).unwrap();
        game.fabricate().unwrap();
        assert_eq!(game.energy(), 9);
        assert!(game.fabricated().is_some());
    }

    #[test]
    fn test_fabricate_without_energy() {
        let mut game = GameSession::new(GameConfig {
            seed: Some(5),
            starting_energy: 0,
            ..GameConfig::default()
        });
        game.select_material(Material::Cups).unwrap();
        assert_eq!(game.fabricate().unwrap_err(), Rejected::OutOfEnergy);
        assert!(game.fabricated().is_none());
    }

    #[test]
    fn test_documented_partial_match() {
        let mut game = session();
        game.order = Order {
            base_color: Color::Green,
            intensity: Intensity::Touch,
            accent_color: Color::Yellow,
            category: ProductCategory::Desk,
        };
        game.select_material(Material::Cans).unwrap();
        game.select_material(Material::Wrap).unwrap();
        game.select_material(Material::Cans).unwrap();
        game.select_material(Material::Wrap).unwrap();
        assert_eq!(game.fabricate().unwrap(), 80);
        assert!(!game.is_correct_sale());

        let receipt = game.sell().unwrap();
        assert_eq!(receipt.price, 80);
        assert_eq!(receipt.bonus, 50);
        assert_eq!(receipt.payout, 130);
        assert!(!receipt.correct);
        assert_eq!(game.money(), 130);
        assert_eq!(game.today().sold, 1);
        assert_eq!(game.today().correct, 0);
    }

    #[test]
    fn test_correct_sale_counts() {
        let mut game = session();
        game.order = Order {
            base_color: Color::Blue,
            intensity: Intensity::Hint,
            accent_color: Color::Pink,
            category: ProductCategory::Cabinet,
        };
        game.choose_category(ProductCategory::Cabinet).unwrap();
        game.select_material(Material::Mask).unwrap();
        game.select_material(Material::Cups).unwrap();
        assert_eq!(game.fabricate().unwrap(), 50 + 20 + 10 + 100);
        assert!(game.is_correct_sale());
        let receipt = game.sell().unwrap();
        assert!(receipt.correct);
        assert_eq!(game.today().correct, 1);
    }

    #[test]
    fn test_sell_clears_attempt() {
        let mut game = session();
        game.select_material(Material::Sack).unwrap();
        game.fabricate().unwrap();
        game.sell().unwrap();
        assert!(game.fabricated().is_none());
        assert!(game.selection().is_empty());
        assert_eq!(game.sell().unwrap_err(), Rejected::NothingToSell);
    }

    #[test]
    fn test_category_frozen_while_fabricated() {
        let mut game = session();
        game.select_material(Material::Sack).unwrap();
        game.fabricate().unwrap();
        assert_eq!(
            game.choose_category(ProductCategory::Desk).unwrap_err(),
            Rejected::AlreadyFabricated
        );
        assert_eq!(game.category(), ProductCategory::Chair);
    }

    #[test]
    fn test_reset_restores_checkpoint() {
        let mut game = session();
        game.select_material(Material::Cans).unwrap();
        game.select_material(Material::Cans).unwrap();
        game.reset_selection();
        // nothing fabricated yet: back to starting levels
        assert_eq!(game.supply().get(Material::Cans), 10);
        assert_eq!(game.catalyst(), 50);
        assert!(game.selection().is_empty());
    }

    #[test]
    fn test_reset_after_fabrication_keeps_fabrication_costs() {
        let mut game = session();
        game.select_material(Material::Cans).unwrap();
        game.select_material(Material::Cans).unwrap();
        game.fabricate().unwrap();
        game.sell().unwrap();
        game.select_material(Material::Wrap).unwrap();
        game.reset_selection();
        assert_eq!(game.supply().get(Material::Cans), 4);
        assert_eq!(game.supply().get(Material::Wrap), 10);
        assert_eq!(game.energy(), 9);
        assert_eq!(game.catalyst(), 49);
    }

    #[test]
    fn test_reset_scraps_unsold_object() {
        let mut game = session();
        game.select_material(Material::Cans).unwrap();
        game.fabricate().unwrap();
        game.reset_selection();
        assert!(game.fabricated().is_none());
        // energy spent on the scrapped object stays spent
        assert_eq!(game.energy(), 9);
    }

    #[test]
    fn test_purchase_survives_reset() {
        let mut game = rich_session(100);
        game.select_material(Material::Cans).unwrap();
        game.buy_material(Material::Wrap).unwrap();
        game.buy_energy().unwrap();
        game.buy_catalyst().unwrap();
        game.reset_selection();
        assert_eq!(game.supply().get(Material::Cans), 10);
        assert_eq!(game.supply().get(Material::Wrap), 20);
        assert_eq!(game.energy(), 20);
        assert_eq!(game.catalyst(), 60);
        assert_eq!(game.money(), 100 - 10 - 15 - 20);
    }

    #[test]
    fn test_purchase_debits_landfill() {
        let mut game = rich_session(10);
        let landfill = game.landfill();
        let purchase = game.buy_material(Material::Mask).unwrap();
        assert_eq!(purchase.units, 10);
        assert_eq!(game.landfill(), landfill - 10);
        assert_eq!(game.today().materials_purchased, 10);
        assert_eq!(game.money(), 0);
    }

    #[test]
    fn test_purchase_without_money_is_noop() {
        let mut game = session();
        let before = game.snapshot();
        assert!(game.buy_energy().is_err());
        assert_eq!(game.energy(), before.energy);
        assert_eq!(game.money(), before.money);
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_tick_rolls_over_day() {
        let mut game = session();
        let mut reports = Vec::new();
        for _ in 0..96 {
            if let Some(report) = game.tick() {
                reports.push(report);
            }
        }
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].day, 1);
        assert_eq!(game.clock().day, 2);
        // an idle day drops the rating to one star
        assert_eq!(game.rating(), 1);
    }

    #[test]
    fn test_rollover_replenishes_landfill() {
        let mut game = session();
        let before = game.landfill();
        while game.tick().is_none() {}
        let gained = game.landfill() - before;
        assert!((1_000..=5_000).contains(&gained));
    }

    #[test]
    fn test_rollover_needs_a_new_day() {
        let mut game = session();
        let before = game.landfill();
        assert_eq!(game.rollover_day(), None);
        assert_eq!(game.rollover_day(), None);
        assert_eq!(game.landfill(), before);
        assert!(game.last_report().is_none());

        while game.tick().is_none() {}
        let landfill = game.landfill();
        // the day was already closed by the tick
        assert_eq!(game.rollover_day(), None);
        assert_eq!(game.landfill(), landfill);
    }

    #[test]
    fn test_out_of_range_rating_is_clamped() {
        for (configured, expected) in [(9, 5), (0, 1)] {
            let mut game = GameSession::new(GameConfig {
                seed: Some(3),
                starting_rating: configured,
                ..GameConfig::default()
            });
            assert_eq!(game.rating(), expected);
            game.select_material(Material::Cans).unwrap();
            game.fabricate().unwrap();
            let receipt = game.sell().unwrap();
            assert_eq!(receipt.bonus, expected * 10);

            game.resign();
            assert_eq!(game.rating(), expected);
        }
    }

    #[test]
    fn test_fabricated_object_exposes_model() {
        let mut game = session();
        game.choose_category(ProductCategory::Desk).unwrap();
        game.select_material(Material::Sack).unwrap();
        game.drain_events();
        game.fabricate().unwrap();
        let object = game.fabricated().unwrap();
        assert_eq!(object.model_asset(), "Desk.obj");
        assert_eq!(object.preview().base, Some(Material::Sack));
        assert!(game
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::Fabricated { model: "Desk.obj", .. })));
    }

    #[test]
    fn test_shop_hours_enforced_when_configured() {
        let mut game = GameSession::new(GameConfig {
            seed: Some(9),
            enforce_shop_hours: true,
            ..GameConfig::default()
        });
        for _ in 0..80 {
            game.tick();
        }
        assert!(!game.clock().is_working_hours());
        game.select_material(Material::Cans).unwrap();
        assert_eq!(game.fabricate().unwrap_err(), Rejected::ShopClosed);
        assert_eq!(game.energy(), 10);
    }

    #[test]
    fn test_resign_restores_defaults() {
        let mut game = rich_session(0);
        game.select_material(Material::Cans).unwrap();
        game.fabricate().unwrap();
        game.sell().unwrap();
        for _ in 0..100 {
            game.tick();
        }
        game.resign();
        assert_eq!(game.clock().day, 1);
        assert_eq!(game.clock().total_minutes, 540);
        assert_eq!(game.money(), 0);
        assert_eq!(game.rating(), 5);
        assert_eq!(game.energy(), 10);
        assert_eq!(game.catalyst(), 50);
        assert_eq!(game.today(), &DailyStats::default());
        assert!(game.last_report().is_none());
        assert!(game.supply().iter().all(|(_, n)| n == 10));
    }

    #[test]
    fn test_events_emitted_in_order() {
        let mut game = session();
        game.select_material(Material::Cans).unwrap();
        game.fabricate().unwrap();
        let events = game.drain_events();
        assert!(matches!(events[0], GameEvent::MaterialPicked(Material::Cans)));
        assert!(matches!(events[1], GameEvent::PreviewChanged(_)));
        assert!(matches!(events[2], GameEvent::Fabricated { .. }));
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_buyer_line_switches_to_offer() {
        let mut game = session();
        assert!(game.buyer_line().starts_with("I'm interested in a"));
        game.select_material(Material::Cans).unwrap();
        let price = game.fabricate().unwrap();
        assert_eq!(game.buyer_line(), format!("I would buy for ${}, deal?", price));
    }
}
