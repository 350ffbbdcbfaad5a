//! Aquarium headless driver
//!
//! Runs the tank the way a render host would: one `update` and one `draw`
//! per frame, logging population stats as it goes.
//!
//! Usage: `aquarium [settings.json] [records.json]`

use aquarium::records::{FishRecord, load_records};
use aquarium::renderer::DrawList;
use aquarium::{Fish, Settings, Sprite, Tank};
use rand::Rng;

/// Simulated frame length (about 60 Hz)
const FRAME_MS: f32 = 16.0;
const FRAMES: u32 = 600;
const FEED_EVERY: u32 = 120;
const STATS_EVERY: u32 = 60;

/// Built-in population when no records file is given
const DEMO_FISH: [(&str, [u8; 4]); 5] = [
    ("Goldie", [255, 180, 0, 255]),
    ("Bluey", [30, 144, 255, 255]),
    ("Coral", [255, 127, 80, 255]),
    ("Minty", [152, 255, 152, 255]),
    ("Inky", [60, 60, 90, 255]),
];

fn seed_demo_population(tank: &mut Tank) {
    let bounds = *tank.bounds();
    for (i, (name, color)) in DEMO_FISH.iter().enumerate() {
        let sprite = match Sprite::filled(36 + i as u32 * 6, 18 + i as u32 * 2, *color) {
            Ok(sprite) => sprite,
            Err(e) => {
                log::error!("Demo sprite for '{}' failed: {}", name, e);
                continue;
            }
        };
        match Fish::new(*name, sprite, &bounds, tank.rng()) {
            Ok(fish) => {
                tank.add_fish(fish);
            }
            Err(e) => log::error!("Demo fish '{}' failed: {}", name, e),
        }
    }
}

fn seed_from_file(tank: &mut Tank, path: &str) -> bool {
    let records: Vec<FishRecord> = match load_records(path) {
        Ok(records) => records,
        Err(e) => {
            log::error!("Cannot load records from {}: {}", path, e);
            return false;
        }
    };
    let report = tank.seed_from_records(&records);
    for (name, e) in &report.failed {
        log::warn!("  {}: {}", name, e);
    }
    report.added > 0
}

fn main() {
    env_logger::init();
    log::info!("Aquarium (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };

    let mut tank = Tank::new(&settings);
    let seeded = match args.next() {
        Some(path) => seed_from_file(&mut tank, &path),
        None => false,
    };
    if !seeded {
        seed_demo_population(&mut tank);
    }

    let mut surface = DrawList::new();
    let mut rng = rand::rng();

    for frame in 1..=FRAMES {
        if frame % FEED_EVERY == 0 {
            let bounds = *tank.bounds();
            let x = rng.random_range(bounds.width * 0.2..bounds.width * 0.8);
            tank.spawn_food(x, bounds.top + 20.0, 6);
        }

        tank.update(FRAME_MS);

        surface.clear();
        tank.draw(&mut surface);

        if frame % STATS_EVERY == 0 {
            let stats = tank.stats();
            log::info!(
                "t={:>6.0}ms fish={} seeking={} food={} bubbles={} hunger={:.1} draw_calls={}",
                tank.clock_ms(),
                stats.fish,
                stats.seeking,
                stats.food,
                stats.bubbles,
                stats.mean_hunger,
                surface.len()
            );
        }
    }

    match serde_json::to_string(&tank.stats()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Cannot serialize stats: {}", e),
    }
}
