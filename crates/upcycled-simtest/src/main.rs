//! Upcycled Headless Simulation Harness
//!
//! Validates pure game logic and shipped data without any UI.
//! Runs entirely in-process - no rendering, no audio device.
//!
//! Usage:
//!   cargo run -p upcycled-simtest
//!   cargo run -p upcycled-simtest -- --verbose
//!   cargo run -p upcycled-simtest -- --config my_config.json --days 5 --dump

use upcycled_logic::clock::{self, GameClock};
use upcycled_logic::config::{validate_config, GameConfig};
use upcycled_logic::constants::{resources, selection as picks};
use upcycled_logic::error::Rejected;
use upcycled_logic::events::{dispatch_sounds, AudioError, AudioSink, SoundEffect};
use upcycled_logic::materials::{Color, Material, MaterialSupply};
use upcycled_logic::order::{Intensity, Order, ProductCategory};
use upcycled_logic::pricing;
use upcycled_logic::satisfaction::{self, DailyStats};
use upcycled_logic::selection::Selection;
use upcycled_logic::session::GameSession;
use upcycled_logic::shop::{self, PurchaseKind};

// ── Shipped game config (same JSON the app bundles) ─────────────────────
const CONFIG_JSON: &str = include_str!("../../../data/game_config.json");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

struct Options {
    verbose: bool,
    dump: bool,
    days: u32,
    config_path: Option<String>,
}

fn parse_args() -> Options {
    let mut options = Options {
        verbose: false,
        dump: false,
        days: 3,
        config_path: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" => options.verbose = true,
            "--dump" => options.dump = true,
            "--config" => options.config_path = args.next(),
            "--days" => {
                if let Some(days) = args.next().and_then(|d| d.parse().ok()) {
                    options.days = days;
                }
            }
            other => eprintln!("ignoring unknown argument '{}'", other),
        }
    }
    options
}

// ── Logging ─────────────────────────────────────────────────────────────

/// Warnings by default, everything down to debug with `--verbose`.
/// `RUST_LOG` still overrides either.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

fn main() {
    let options = parse_args();
    init_logging(options.verbose);
    println!("=== Upcycled Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Shipped config + optional override
    let (config_results, config) = validate_game_config(&options);
    results.extend(config_results);

    // 2. Clock & shop hours
    results.extend(validate_clock(options.verbose));

    // 3. Material picks
    results.extend(validate_selection(options.verbose));

    // 4. Order matching & pricing
    results.extend(validate_pricing(options.verbose));

    // 5. Satisfaction rating table
    results.extend(validate_satisfaction(options.verbose));

    // 6. Supply shop
    results.extend(validate_shop(&config));

    // 7. Scripted play through several days
    let (day_results, session) = validate_scripted_days(&config, options.days, options.verbose);
    results.extend(day_results);

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || options.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if options.dump {
        match serde_json::to_string_pretty(&session.snapshot()) {
            Ok(json) => println!("\n{}", json),
            Err(e) => eprintln!("snapshot serialization failed: {}", e),
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Config ───────────────────────────────────────────────────────────

fn validate_game_config(options: &Options) -> (Vec<TestResult>, GameConfig) {
    println!("--- Game Config ---");
    let mut results = Vec::new();

    let shipped: GameConfig = match serde_json::from_str(CONFIG_JSON) {
        Ok(c) => c,
        Err(e) => {
            results.push(TestResult {
                name: "config_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return (results, GameConfig::default());
        }
    };

    results.push(TestResult {
        name: "config_matches_defaults".into(),
        passed: shipped == GameConfig::default(),
        detail: "bundled JSON equals built-in defaults".into(),
    });

    let errors = validate_config(&shipped);
    results.push(TestResult {
        name: "config_valid".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            "no validation errors".into()
        } else {
            format!("{:?}", errors)
        },
    });

    let mut config = shipped;
    if let Some(path) = &options.config_path {
        let loaded = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| serde_json::from_str::<GameConfig>(&text).map_err(|e| e.to_string()));
        match loaded {
            Ok(c) => {
                let errors = validate_config(&c);
                results.push(TestResult {
                    name: "config_override_valid".into(),
                    passed: errors.is_empty(),
                    detail: format!("{}: {} errors {:?}", path, errors.len(), errors),
                });
                config = c;
            }
            Err(e) => results.push(TestResult {
                name: "config_override_load".into(),
                passed: false,
                detail: format!("{}: {}", path, e),
            }),
        }
    }
    if config.seed.is_none() {
        config.seed = Some(42);
    }

    (results, config)
}

// ── 2. Clock ────────────────────────────────────────────────────────────

fn validate_clock(verbose: bool) -> Vec<TestResult> {
    println!("--- Clock & Shop Hours ---");
    let mut results = Vec::new();

    let mut c = GameClock::new();
    results.push(TestResult {
        name: "clock_starts_at_opening".into(),
        passed: c.current_time() == "09:00" && c.day == 1 && c.is_working_hours(),
        detail: format!("day {} {}", c.day, c.current_time()),
    });

    let mut ticks = 0;
    let mut working_ticks = 0;
    let mut opened = 0;
    let mut closed = 0;
    loop {
        if c.is_working_hours() {
            working_ticks += 1;
        }
        let outcome = c.tick();
        ticks += 1;
        opened += outcome.shop_opened as u32;
        closed += outcome.shop_closed as u32;
        if verbose && (outcome.shop_closed || outcome.day_advanced || outcome.shop_opened) {
            println!("    tick {:3}: day {} {}", ticks, c.day, c.current_time());
        }
        if outcome.shop_opened || ticks > 1_000 {
            break;
        }
    }
    results.push(TestResult {
        name: "clock_full_cycle".into(),
        passed: ticks == 96 && working_ticks == 80 && c.day == 2,
        detail: format!("{} ticks ({} working) back to opening", ticks, working_ticks),
    });
    results.push(TestResult {
        name: "clock_transitions_once".into(),
        passed: opened == 1 && closed == 1,
        detail: format!("opened={} closed={}", opened, closed),
    });

    let boundaries_ok = clock::is_working_minute(540)
        && clock::is_working_minute(1014)
        && !clock::is_working_minute(1020)
        && !clock::is_working_minute(0)
        && clock::step_for(540) == 6
        && clock::step_for(1020) == 60;
    results.push(TestResult {
        name: "clock_boundaries".into(),
        passed: boundaries_ok,
        detail: "09:00 open, 17:00 closed, 6/60 minute steps".into(),
    });

    results
}

// ── 3. Selection ────────────────────────────────────────────────────────

fn validate_selection(verbose: bool) -> Vec<TestResult> {
    println!("--- Material Picks ---");
    let mut results = Vec::new();

    let mut supply = MaterialSupply::default();
    let mut catalyst = 50;
    let mut sel = Selection::new();
    let mut spent = Vec::new();
    for material in [
        Material::Cans,
        Material::Wrap,
        Material::Cans,
        Material::Wrap,
    ] {
        match sel.check_pick(material, &supply, catalyst) {
            Ok(cost) => {
                supply.take(cost.material, cost.supply);
                catalyst -= cost.catalyst;
                sel.record(material);
                spent.push((cost.supply, cost.catalyst));
            }
            Err(e) => {
                if verbose {
                    println!("    unexpected rejection: {}", e);
                }
                spent.push((0, 0));
            }
        }
    }
    results.push(TestResult {
        name: "selection_costs".into(),
        passed: spent == vec![(5, 0), (1, 1), (1, 0), (1, 1)],
        detail: format!("supply/catalyst per pick {:?}", spent),
    });
    results.push(TestResult {
        name: "selection_accent_speckles".into(),
        passed: sel.base() == Some(Material::Cans)
            && sel.accent() == Some(Material::Wrap)
            && sel.speckles() == 2,
        detail: format!(
            "base={:?} accent={:?} speckles={}",
            sel.base(),
            sel.accent(),
            sel.speckles()
        ),
    });

    let third = sel.check_pick(Material::Cups, &supply, catalyst);
    results.push(TestResult {
        name: "selection_two_materials".into(),
        passed: third == Err(Rejected::TooManyMaterials),
        detail: format!("third material → {:?}", third),
    });

    let mut full = Selection::new();
    for _ in 0..picks::MAX_PICKS {
        full.record(Material::Sack);
    }
    let seventh = full.check_pick(Material::Sack, &MaterialSupply::default(), 50);
    results.push(TestResult {
        name: "selection_pick_cap".into(),
        passed: seventh == Err(Rejected::PickLimitReached),
        detail: format!("seventh pick → {:?}", seventh),
    });

    let preview = sel.preview();
    results.push(TestResult {
        name: "selection_preview".into(),
        passed: (preview.noise_level - 2.0 / 6.0).abs() < 1e-9
            && preview.speckle_weights == vec![(Material::Wrap, 2)],
        detail: format!(
            "noise={:.3} weights={:?}",
            preview.noise_level, preview.speckle_weights
        ),
    });

    results
}

// ── 4. Pricing ──────────────────────────────────────────────────────────

fn validate_pricing(verbose: bool) -> Vec<TestResult> {
    println!("--- Order Matching & Pricing ---");
    let mut results = Vec::new();

    let order = Order {
        base_color: Color::Green,
        intensity: Intensity::Touch,
        accent_color: Color::Yellow,
        category: ProductCategory::Desk,
    };
    let mut sel = Selection::new();
    for m in [
        Material::Cans,
        Material::Wrap,
        Material::Cans,
        Material::Wrap,
    ] {
        sel.record(m);
    }

    let chair = pricing::appraise(&sel, ProductCategory::Chair, &order);
    results.push(TestResult {
        name: "pricing_partial_match".into(),
        passed: chair.price.total() == 80 && !chair.matches.is_correct(),
        detail: format!("chair for desk order → ${}", chair.price.total()),
    });

    let desk = pricing::appraise(&sel, ProductCategory::Desk, &order);
    results.push(TestResult {
        name: "pricing_full_match".into(),
        passed: desk.price.total() == 230 && desk.matches.is_correct(),
        detail: format!("desk for desk order → ${}", desk.price.total()),
    });

    results.push(TestResult {
        name: "pricing_payout".into(),
        passed: pricing::payout(80, 5) == 130 && pricing::payout(0, 1) == 10,
        detail: "price + rating × 10".into(),
    });

    let mut lone = Selection::new();
    lone.record(Material::Cans);
    let rich_order = Order {
        intensity: Intensity::Rich,
        category: ProductCategory::Chair,
        ..order
    };
    let lone_price = pricing::appraise(&lone, ProductCategory::Chair, &rich_order);
    results.push(TestResult {
        name: "pricing_no_speckles".into(),
        passed: lone_price.matches.intensity
            && !lone_price.matches.accent_color
            && lone_price.price.total() == 110,
        detail: format!(
            "single pick vs rich order → ${} ({}/4 matched)",
            lone_price.price.total(),
            lone_price.matches.matched_count()
        ),
    });

    let ceiling = pricing::max_price();
    results.push(TestResult {
        name: "pricing_ceiling".into(),
        passed: ceiling == 230,
        detail: format!("best reachable price ${}", ceiling),
    });

    if verbose {
        println!("  Category bonuses:");
        for category in ProductCategory::ALL {
            println!("    {:8}: +{}", category.name(), category.bonus());
        }
    }

    results
}

// ── 5. Satisfaction ─────────────────────────────────────────────────────

fn validate_satisfaction(verbose: bool) -> Vec<TestResult> {
    println!("--- Satisfaction ---");
    let mut results = Vec::new();

    let cases = [
        (0, 0, 1),
        (1, 0, 1),
        (1, 1, 2),
        (4, 4, 4),
        (4, 1, 3),
        (6, 6, 5),
        (20, 0, 3),
    ];
    for (sold, correct, expected) in cases {
        let stats = DailyStats {
            sold,
            correct,
            ..DailyStats::default()
        };
        let rating = satisfaction::compute_rating(&stats);
        if verbose {
            println!("    sold={:2} correct={:2} → {} stars", sold, correct, rating);
        }
        results.push(TestResult {
            name: format!("satisfaction_{}_of_{}", correct, sold),
            passed: rating == expected,
            detail: format!("expected {} got {}", expected, rating),
        });
    }

    results
}

// ── 6. Shop ─────────────────────────────────────────────────────────────

fn validate_shop(config: &GameConfig) -> Vec<TestResult> {
    println!("--- Supply Shop ---");
    let mut results = Vec::new();

    let near_cap = shop::quote(
        PurchaseKind::Catalyst,
        config,
        1_000,
        resources::CAP - 3,
        0,
    );
    results.push(TestResult {
        name: "shop_partial_batch".into(),
        passed: near_cap.map(|p| p.units) == Ok(3),
        detail: format!("{:?}", near_cap),
    });

    let broke = shop::quote(PurchaseKind::Energy, config, 0, 0, 0);
    results.push(TestResult {
        name: "shop_needs_money".into(),
        passed: matches!(broke, Err(Rejected::InsufficientFunds { .. })),
        detail: format!("{:?}", broke),
    });

    let empty = shop::quote(
        PurchaseKind::Material(Material::Mask),
        config,
        1_000,
        0,
        0,
    );
    results.push(TestResult {
        name: "shop_landfill_limits_materials".into(),
        passed: matches!(empty, Err(Rejected::LandfillExhausted { .. })),
        detail: format!("{:?}", empty),
    });

    results
}

// ── 7. Scripted days ────────────────────────────────────────────────────

#[derive(Default)]
struct CountingSink {
    played: Vec<SoundEffect>,
}

impl AudioSink for CountingSink {
    fn play(&mut self, effect: SoundEffect) -> Result<(), AudioError> {
        self.played.push(effect);
        Ok(())
    }
}

fn material_for(color: Color) -> Option<Material> {
    Material::ALL.into_iter().find(|m| m.color() == color)
}

/// Try to build exactly what the buyer wants. Buys stock when short.
fn serve_customer(game: &mut GameSession) -> Result<bool, Rejected> {
    let order = *game.order();
    let (base, accent) = match (material_for(order.base_color), material_for(order.accent_color)) {
        (Some(b), Some(a)) => (b, a),
        _ => return Ok(false),
    };
    let speckles = Intensity::ALL
        .iter()
        .position(|i| *i == order.intensity)
        .map_or(1, |p| p + 1);

    for (material, needed) in [(base, picks::BASE_PICK_COST), (accent, speckles as u32)] {
        while game.supply().get(material) < needed {
            game.buy_material(material)?;
        }
    }
    if game.energy() == 0 {
        game.buy_energy()?;
    }
    if game.catalyst() < 3 {
        game.buy_catalyst()?;
    }

    game.choose_category(order.category)?;
    game.select_material(base)?;
    for _ in 0..speckles {
        game.select_material(accent)?;
    }
    game.fabricate()?;
    Ok(game.sell()?.correct)
}

fn validate_scripted_days(
    config: &GameConfig,
    days: u32,
    verbose: bool,
) -> (Vec<TestResult>, GameSession) {
    println!("--- Scripted Days ---");
    let mut results = Vec::new();
    let mut game = GameSession::new(config.clone());
    let mut sink = CountingSink::default();
    let mut failures = Vec::new();
    let mut reports = Vec::new();

    // four customers per day, served at opening
    for _ in 0..days {
        for _ in 0..4 {
            match serve_customer(&mut game) {
                Ok(true) => {}
                Ok(false) => failures.push("order had no matching material".to_string()),
                Err(e) => {
                    failures.push(e.to_string());
                    game.reset_selection();
                }
            }
        }
        let mut report = None;
        for _ in 0..200 {
            if let Some(r) = game.tick() {
                report = Some(r);
            }
            if report.is_some() && game.clock().is_working_hours() {
                break;
            }
        }
        dispatch_sounds(&game.drain_events(), &mut sink);
        match report {
            Some(r) => {
                if verbose {
                    println!(
                        "    day {}: sold={} correct={} profit=${} → {} stars",
                        r.day, r.stats.sold, r.stats.correct, r.stats.profit, r.rating
                    );
                }
                reports.push(r);
            }
            None => failures.push("day never ended".to_string()),
        }
    }

    results.push(TestResult {
        name: "scripted_no_rejections".into(),
        passed: failures.is_empty(),
        detail: if failures.is_empty() {
            format!("{} customers served", days * 4)
        } else {
            failures.join("; ")
        },
    });
    results.push(TestResult {
        name: "scripted_daily_reports".into(),
        passed: reports.len() == days as usize,
        detail: format!("{} reports for {} days", reports.len(), days),
    });
    let steady = reports
        .iter()
        .all(|r| r.stats.sold == 4 && r.stats.correct == 4 && r.rating == 4);
    results.push(TestResult {
        name: "scripted_four_star_days".into(),
        passed: steady,
        detail: format!(
            "ratings {:?}",
            reports.iter().map(|r| r.rating).collect::<Vec<_>>()
        ),
    });
    let within_cap = game.energy() <= resources::CAP
        && game.catalyst() <= resources::CAP
        && game.supply().iter().all(|(_, n)| n <= resources::CAP);
    results.push(TestResult {
        name: "scripted_levels_capped".into(),
        passed: within_cap,
        detail: format!(
            "energy={} catalyst={} money=${}",
            game.energy(),
            game.catalyst(),
            game.money()
        ),
    });
    let sold_sounds = sink
        .played
        .iter()
        .filter(|e| **e == SoundEffect::SellClick)
        .count();
    results.push(TestResult {
        name: "scripted_sounds".into(),
        passed: sold_sounds == (days * 4) as usize
            && sink.played.iter().filter(|e| **e == SoundEffect::DailyReport).count()
                == days as usize,
        detail: format!("{} sounds played", sink.played.len()),
    });

    (results, game)
}
