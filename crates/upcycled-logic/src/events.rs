//! Game events and the audio boundary.
//!
//! Every accepted action pushes a [`GameEvent`] onto the session's queue.
//! The UI drains the queue after each call to refresh views, show banners
//! and trigger sounds. Sound playback is fire-and-forget: an [`AudioSink`]
//! failure is logged and otherwise ignored.

use crate::materials::Material;
use crate::order::{Order, ProductCategory};
use crate::satisfaction::DayReport;
use crate::selection::Preview;
use crate::session::SaleReceipt;
use crate::shop::Purchase;

/// Something that happened in the session.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    MaterialPicked(Material),
    /// Preview texture parameters were recomputed.
    PreviewChanged(Preview),
    CategoryChosen(ProductCategory),
    /// An object was fabricated; the UI shows a short "Fabricated!" banner
    /// and loads `model`.
    Fabricated { price: u32, model: &'static str },
    SelectionReset,
    /// An object was sold; the UI shows a short "Sold!" banner.
    Sold(SaleReceipt),
    /// The supply shop was opened.
    ShopVisited,
    Purchased(Purchase),
    /// A new buyer walked in.
    NewOrder(Order),
    ShopOpened,
    ShopClosed,
    DayEnded(DayReport),
    NewGame,
}

/// Named sound effects bundled with the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    MaterialClick,
    ModelClick,
    FabricateClick,
    ResetClick,
    SellClick,
    ShopClick,
    StoreOpen,
    StoreClose,
    DailyReport,
}

impl SoundEffect {
    /// Asset name without extension.
    pub fn asset_name(self) -> &'static str {
        match self {
            SoundEffect::MaterialClick => "materialClick",
            SoundEffect::ModelClick => "modelClick",
            SoundEffect::FabricateClick => "fabricateClick",
            SoundEffect::ResetClick => "resetClick",
            SoundEffect::SellClick => "sellClick",
            SoundEffect::ShopClick => "shopClick",
            SoundEffect::StoreOpen => "storeOpen",
            SoundEffect::StoreClose => "storeClose",
            SoundEffect::DailyReport => "dailyReport",
        }
    }
}

impl GameEvent {
    /// Sound that accompanies this event, if any.
    pub fn sound(&self) -> Option<SoundEffect> {
        match self {
            GameEvent::MaterialPicked(_) => Some(SoundEffect::MaterialClick),
            GameEvent::CategoryChosen(_) => Some(SoundEffect::ModelClick),
            GameEvent::Fabricated { .. } => Some(SoundEffect::FabricateClick),
            GameEvent::SelectionReset => Some(SoundEffect::ResetClick),
            GameEvent::Sold(_) => Some(SoundEffect::SellClick),
            GameEvent::ShopVisited => Some(SoundEffect::ShopClick),
            // purchases share the reset click
            GameEvent::Purchased(_) => Some(SoundEffect::ResetClick),
            GameEvent::ShopOpened => Some(SoundEffect::StoreOpen),
            GameEvent::ShopClosed => Some(SoundEffect::StoreClose),
            GameEvent::DayEnded(_) => Some(SoundEffect::DailyReport),
            GameEvent::PreviewChanged(_) | GameEvent::NewOrder(_) | GameEvent::NewGame => None,
        }
    }
}

/// Failure reported by an audio backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioError {
    pub effect: SoundEffect,
    pub reason: String,
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sound effect '{}' failed: {}",
            self.effect.asset_name(),
            self.reason
        )
    }
}

impl std::error::Error for AudioError {}

/// Audio backend supplied by the presentation layer.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect) -> Result<(), AudioError>;
}

/// Play the sound for each event. Returns how many effects played.
pub fn dispatch_sounds(events: &[GameEvent], sink: &mut impl AudioSink) -> usize {
    let mut played = 0;
    for effect in events.iter().filter_map(GameEvent::sound) {
        match sink.play(effect) {
            Ok(()) => played += 1,
            Err(e) => log::warn!("{}", e),
        }
    }
    played
}
