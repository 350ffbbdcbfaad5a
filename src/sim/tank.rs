//! The tank: sole owner of every fish, food pellet and bubble

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::TankBounds;
use super::bubble::Bubble;
use super::fish::Fish;
use super::food::{Food, FoodId};
use crate::consts::*;
use crate::renderer::surface::WATER_COLOR;
use crate::renderer::Surface;
use crate::settings::Settings;

/// Population summary for logging and host HUDs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankStats {
    pub fish: usize,
    pub seeking: usize,
    pub food: usize,
    pub bubbles: usize,
    pub mean_hunger: f32,
}

/// Aquarium state.
///
/// Fish names are unique: `add_fish` is the only way in and rejects duplicates.
#[derive(Debug, Clone)]
pub struct Tank {
    pub(super) settings: Settings,
    pub(super) bounds: TankBounds,
    pub(super) fish: Vec<Fish>,
    pub(super) food: Vec<Food>,
    pub(super) bubbles: Vec<Bubble>,
    /// Simulation clock (sum of sanitized frame deltas)
    pub(super) clock_ms: f64,
    pub(super) last_bubble_spawn_ms: f64,
    next_food_id: u32,
    pub(super) rng: Pcg32,
}

impl Tank {
    /// Create an empty tank with entropy-seeded randomness
    pub fn new(settings: &Settings) -> Self {
        Self::with_seed(settings, rand::random())
    }

    /// Create an empty tank with a fixed RNG seed
    pub fn with_seed(settings: &Settings, seed: u64) -> Self {
        let settings = settings.clone().sanitized();
        Self {
            bounds: settings.bounds(),
            settings,
            fish: Vec::new(),
            food: Vec::new(),
            bubbles: Vec::new(),
            clock_ms: 0.0,
            last_bubble_spawn_ms: 0.0,
            next_food_id: 1,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn bounds(&self) -> &TankBounds {
        &self.bounds
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn fish(&self) -> &[Fish] {
        &self.fish
    }

    pub fn food(&self) -> &[Food] {
        &self.food
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// Elapsed simulation time
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// RNG for building fish that will live in this tank
    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn has_fish(&self, name: &str) -> bool {
        self.fish.iter().any(|f| f.name() == name)
    }

    pub fn fish_named(&self, name: &str) -> Option<&Fish> {
        self.fish.iter().find(|f| f.name() == name)
    }

    /// Mutable access to one fish (its name stays read-only)
    pub fn fish_named_mut(&mut self, name: &str) -> Option<&mut Fish> {
        self.fish.iter_mut().find(|f| f.name() == name)
    }

    /// Add a fish unless one with the same name is already swimming
    pub fn add_fish(&mut self, mut fish: Fish) -> bool {
        if self.has_fish(fish.name()) {
            log::warn!("Fish '{}' already in the tank, skipping", fish.name());
            return false;
        }

        fish.confine(&self.bounds);
        log::info!("Added fish '{}' ({} total)", fish.name(), self.fish.len() + 1);
        self.fish.push(fish);
        true
    }

    /// Remove every fish called `name`, returning how many went
    pub fn remove_fish_by_name(&mut self, name: &str) -> usize {
        let before = self.fish.len();
        self.fish.retain(|f| f.name() != name);
        let removed = before - self.fish.len();
        if removed > 0 {
            log::info!("Removed fish '{}'", name);
        }
        removed
    }

    /// Allocate a new food ID
    fn next_food_id(&mut self) -> FoodId {
        let id = FoodId(self.next_food_id);
        self.next_food_id += 1;
        id
    }

    /// Drop `count` pellets scattered around (x, y)
    pub fn spawn_food(&mut self, x: f32, y: f32, count: usize) {
        if !x.is_finite() || !y.is_finite() {
            log::warn!("Ignoring food drop at non-finite ({}, {})", x, y);
            return;
        }
        let scatter = self.settings.food_scatter;
        for _ in 0..count {
            let offset = if scatter > 0.0 {
                Vec2::new(
                    self.rng.random_range(-scatter..=scatter),
                    self.rng.random_range(-scatter..=scatter),
                )
            } else {
                Vec2::ZERO
            };
            let id = self.next_food_id();
            self.food.push(Food::new(id, Vec2::new(x, y) + offset));
        }
        log::debug!("Spawned {} food around ({:.0}, {:.0})", count, x, y);
    }

    /// Release a batch of bubbles along the floor
    pub(super) fn spawn_bubbles(&mut self) {
        let count = self.settings.bubbles_per_spawn;
        let floor = self.bounds.height - BUBBLE_SPAWN_INSET;
        for _ in 0..count {
            let x = self.rng.random_range(0.0..=self.bounds.width);
            let y = (floor + self.rng.random_range(0.0..=BUBBLE_SPAWN_JITTER)).min(self.bounds.height);
            let bubble = Bubble::spawn(Vec2::new(x, y), &mut self.rng);
            self.bubbles.push(bubble);
        }
        log::trace!("Spawned {} bubbles", count);
    }

    /// Topmost fish under `point` (fish drawn last win)
    pub fn fish_at(&self, point: Vec2) -> Option<&Fish> {
        self.fish.iter().rev().find(|f| f.contains_point(point))
    }

    /// Change the viewport, pulling every fish back into the swimmable area
    pub fn resize(&mut self, width: f32, height: f32) {
        self.settings.width = width;
        self.settings.height = height;
        self.settings = self.settings.clone().sanitized();
        self.bounds = self.settings.bounds();
        for fish in &mut self.fish {
            fish.confine(&self.bounds);
        }
        log::info!("Tank resized to {}x{}", self.bounds.width, self.bounds.height);
    }

    /// Teardown: drop every entity
    pub fn clear(&mut self) {
        self.fish.clear();
        self.food.clear();
        self.bubbles.clear();
    }

    pub fn stats(&self) -> TankStats {
        let mean_hunger = if self.fish.is_empty() {
            0.0
        } else {
            self.fish.iter().map(|f| f.hunger).sum::<f32>() / self.fish.len() as f32
        };
        TankStats {
            fish: self.fish.len(),
            seeking: self.fish.iter().filter(|f| f.is_seeking()).count(),
            food: self.food.len(),
            bubbles: self.bubbles.len(),
            mean_hunger,
        }
    }

    /// Paint back to front: water, bubbles, food, fish
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_background(self.bounds.width, self.bounds.height, WATER_COLOR);
        for bubble in &self.bubbles {
            bubble.draw(surface);
        }
        for food in &self.food {
            food.draw(surface);
        }
        for fish in &self.fish {
            fish.draw(surface);
        }
    }
}
