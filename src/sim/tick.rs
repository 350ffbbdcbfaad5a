//! Per-frame tank update
//!
//! Order within a tick:
//! 1. bubble batch if the spawn interval elapsed
//! 2. bubbles advance, expired ones pruned
//! 3. fish advance (seeking reads the live food list)
//! 4. food advances, each live pellet is matched against fish in insertion
//!    order (first match eats it), expired pellets pruned
//!
//! Fish move before food is matched so a fish arriving this tick eats this tick.

use super::tank::Tank;

impl Tank {
    /// Advance the simulation by one host frame
    pub fn update(&mut self, dt_ms: f32) {
        tick(self, dt_ms);
    }
}

/// Clamp a host frame delta to something the simulation can integrate
fn sanitize_delta(dt_ms: f32, max_frame_ms: f32) -> f32 {
    if dt_ms.is_finite() {
        dt_ms.clamp(0.0, max_frame_ms)
    } else {
        0.0
    }
}

/// Advance the tank by `dt_ms` of wall-clock time
fn tick(tank: &mut Tank, dt_ms: f32) {
    let dt = sanitize_delta(dt_ms, tank.settings.max_frame_ms);
    tank.clock_ms += dt as f64;

    // Bubbles
    if tank.clock_ms - tank.last_bubble_spawn_ms >= tank.settings.bubble_interval_ms as f64 {
        tank.spawn_bubbles();
        tank.last_bubble_spawn_ms = tank.clock_ms;
    }
    let top = tank.bounds.top;
    tank.bubbles.retain_mut(|bubble| !bubble.update(dt, top));

    // Fish
    let bounds = tank.bounds;
    for fish in &mut tank.fish {
        fish.update(dt, &tank.food, &bounds, &mut tank.rng);
    }

    // Food, then bites
    let fish = &mut tank.fish;
    let rng = &mut tank.rng;
    tank.food.retain_mut(|food| {
        let expired = food.update(dt, &bounds);
        if food.is_live() {
            if let Some(eater) = fish.iter_mut().find(|f| food.check_collision(f)) {
                if eater.eat_food(food, rng) {
                    log::debug!("'{}' ate food {:?}", eater.name(), food.id);
                }
            }
        }
        !expired
    });
}
