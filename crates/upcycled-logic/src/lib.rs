//! Pure game logic for Upcycled.
//!
//! A single-player shop sim: buyers walk in with an order for a piece of
//! furniture in certain colors, the player combines recycled materials into
//! an object, fabricates it and sells it. Everything here is independent of
//! any renderer or audio engine. The presentation layer drives a
//! [`session::GameSession`], drains its [`events::GameEvent`]s and hands
//! sounds to an [`events::AudioSink`].
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`clock`] | Game time, shop hours, day rollover |
//! | [`config`] | Starting levels, prices, seed; validation |
//! | [`constants`] | Tuning numbers grouped by subsystem |
//! | [`error`] | Reasons an action is rejected |
//! | [`events`] | Event queue payloads, sound effects, audio boundary |
//! | [`materials`] | The five materials, their colors, per-material supply |
//! | [`order`] | Random buyer orders, intensity buckets, product categories |
//! | [`pricing`] | Matching an object against an order, sale price |
//! | [`satisfaction`] | Daily tally and the 1–5 star rating |
//! | [`selection`] | Picking materials, costs, accent and preview |
//! | [`session`] | The game session context object |
//! | [`shop`] | Supply purchases |

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod materials;
pub mod order;
pub mod pricing;
pub mod satisfaction;
pub mod selection;
pub mod session;
pub mod shop;
