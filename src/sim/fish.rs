//! Fish: the autonomous agents of the tank
//!
//! Each tick a fish gets hungrier, looks for the nearest live food within
//! range, steers toward it (faster when hungrier) or cruises idly, and
//! bounces off the tank walls. Consumption itself is resolved by the tank.

use glam::Vec2;
use rand::Rng;

use super::bounds::TankBounds;
use super::food::{Food, FoodId};
use super::sprite::{Sprite, SpriteError};
use crate::consts::*;
use crate::renderer::Surface;

/// Why a fish could not be built
#[derive(Debug, thiserror::Error)]
pub enum FishError {
    #[error("Fish name must not be empty")]
    EmptyName,
    #[error("Invalid sprite: {0}")]
    Sprite(#[from] SpriteError),
    #[error("Sprite {width}x{height} does not fit in the tank")]
    TooLarge { width: u32, height: u32 },
}

/// A fish in the tank
#[derive(Debug, Clone)]
pub struct Fish {
    /// Unique within a tank; changing it would bypass the tank's gatekeeping
    name: String,
    sprite: Sprite,
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing: 1.0 right, -1.0 left
    pub direction: f32,
    /// Base cruise speed per reference frame
    pub speed: f32,
    pub wiggle_phase: f32,
    pub wiggle_amplitude: f32,
    pub elapsed_ms: f32,
    /// Grows every tick, reduced by eating. Values past MAX_HUNGER steer like MAX_HUNGER.
    pub hunger: f32,
    /// Blocks seeking while positive
    pub eat_cooldown_ms: f32,
    pub target_food: Option<FoodId>,
    /// Arrived at the target this tick, waiting for the tank to resolve the bite
    pub is_eating: bool,
}

impl Fish {
    /// Create a fish at a random spot inside `bounds`
    pub fn new(
        name: impl Into<String>,
        sprite: Sprite,
        bounds: &TankBounds,
        rng: &mut impl Rng,
    ) -> Result<Self, FishError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FishError::EmptyName);
        }
        let (width, height) = (sprite.width() as f32, sprite.height() as f32);
        if !bounds.fits(width, height) {
            return Err(FishError::TooLarge {
                width: sprite.width(),
                height: sprite.height(),
            });
        }

        let direction: f32 = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let speed: f32 = rng.random_range(0.8..1.6);
        let pos = Vec2::new(
            rng.random_range(0.0..=bounds.max_x(width)),
            rng.random_range(bounds.top..=bounds.max_y(height)),
        );

        Ok(Self {
            name,
            sprite,
            pos,
            vel: Vec2::new(speed * direction, rng.random_range(-0.3..=0.3)),
            direction,
            speed,
            wiggle_phase: rng.random_range(0.0..std::f32::consts::TAU),
            wiggle_amplitude: rng.random_range(1.5..3.0),
            elapsed_ms: 0.0,
            hunger: rng.random_range(0.0..50.0),
            eat_cooldown_ms: 0.0,
            target_food: None,
            is_eating: false,
        })
    }

    /// Build a fish from a hand-drawn RGBA buffer
    pub fn from_drawing(
        name: impl Into<String>,
        width: u32,
        height: u32,
        rgba: Vec<u8>,
        bounds: &TankBounds,
        rng: &mut impl Rng,
    ) -> Result<Self, FishError> {
        let sprite = Sprite::from_rgba(width, height, rgba)?;
        Self::new(name, sprite, bounds, rng)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.sprite.width() as f32
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.sprite.height() as f32
    }

    /// Center of the bounding box
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width(), self.height()) / 2.0
    }

    /// Axis-aligned hit test against the bounding box
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.pos.x + self.width()
            && point.y >= self.pos.y
            && point.y <= self.pos.y + self.height()
    }

    /// Seeking speed multiplier, 1.2x when full up to 2.2x when starving
    pub fn hunger_factor(&self) -> f32 {
        HUNGER_BOOST_BASE + (self.hunger.clamp(0.0, MAX_HUNGER) / MAX_HUNGER) * HUNGER_BOOST_RANGE
    }

    /// Currently chasing a food target
    pub fn is_seeking(&self) -> bool {
        self.target_food.is_some()
    }

    /// Nearest live food within detection range (first found wins ties)
    pub fn nearest_food<'a>(&self, foods: &'a [Food]) -> Option<&'a Food> {
        let center = self.center();
        let mut best: Option<(&Food, f32)> = None;
        for food in foods.iter().filter(|f| f.is_live()) {
            let dist = food.pos.distance(center);
            if !dist.is_finite() || dist >= FOOD_DETECTION_RANGE {
                continue;
            }
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((food, dist));
            }
        }
        best.map(|(food, _)| food)
    }

    /// Advance one tick
    pub fn update(&mut self, dt_ms: f32, foods: &[Food], bounds: &TankBounds, rng: &mut impl Rng) {
        let frames = dt_ms / REFERENCE_FRAME_MS;
        self.elapsed_ms += dt_ms;
        self.hunger += HUNGER_PER_FRAME * frames;

        if self.eat_cooldown_ms > 0.0 {
            self.eat_cooldown_ms = (self.eat_cooldown_ms - dt_ms).max(0.0);
        } else {
            // The target may have been eaten by another fish or pruned
            if let Some(id) = self.target_food {
                if !foods.iter().any(|f| f.id == id && f.is_live()) {
                    self.target_food = None;
                    self.is_eating = false;
                }
            }
            if !self.is_eating {
                self.target_food = self.nearest_food(foods).map(|f| f.id);
            }
        }

        let target = self
            .target_food
            .and_then(|id| foods.iter().find(|f| f.id == id && f.is_live()))
            .map(|f| f.pos)
            .filter(|pos| pos.is_finite());

        let seeking = match target {
            Some(food_pos) => {
                self.steer_toward(food_pos, frames);
                true
            }
            None => {
                self.cruise(frames);
                false
            }
        };

        self.reflect(bounds);

        if !seeking && rng.random_bool(IDLE_WANDER_CHANCE) {
            self.vel.y += rng.random_range(-IDLE_WANDER_DELTA..=IDLE_WANDER_DELTA);
        }

        self.clamp_velocity();
    }

    fn steer_toward(&mut self, food_pos: Vec2, frames: f32) {
        let to_food = food_pos - self.center();
        let dist = to_food.length();
        if dist < EAT_DISTANCE {
            self.is_eating = true;
            return;
        }

        self.vel = to_food / dist * self.speed * self.hunger_factor();
        self.clamp_velocity();
        if self.vel.x != 0.0 {
            self.direction = self.vel.x.signum();
        }
        self.pos += self.vel * frames;
    }

    fn cruise(&mut self, frames: f32) {
        let cruise_vx = self.speed * self.direction;
        self.vel.x += (cruise_vx - self.vel.x) * (CRUISE_EASING * frames).min(1.0);

        let bob = (self.elapsed_ms * BOB_RATE + self.wiggle_phase).sin()
            * self.wiggle_amplitude
            * BOB_SCALE;
        self.pos += self.vel * frames + Vec2::new(0.0, bob * frames);
    }

    /// Clamp into the swimmable area, pushing velocity back inward.
    /// Vertical bounces lose half their speed.
    pub fn reflect(&mut self, bounds: &TankBounds) {
        let max_x = bounds.max_x(self.width());
        let max_y = bounds.max_y(self.height());

        if self.pos.x <= 0.0 {
            self.pos.x = 0.0;
            self.vel.x = self.vel.x.abs();
            self.direction = 1.0;
        } else if self.pos.x >= max_x {
            self.pos.x = max_x;
            self.vel.x = -self.vel.x.abs();
            self.direction = -1.0;
        }

        if self.pos.y < bounds.top {
            self.pos.y = bounds.top;
            self.vel.y = self.vel.y.abs() * BOUNCE_DAMPING;
        } else if self.pos.y > max_y {
            self.pos.y = max_y;
            self.vel.y = -self.vel.y.abs() * BOUNCE_DAMPING;
        }
    }

    /// Move into the swimmable area without touching velocity
    pub fn confine(&mut self, bounds: &TankBounds) {
        self.pos.x = self.pos.x.clamp(0.0, bounds.max_x(self.width()));
        self.pos.y = self.pos.y.clamp(bounds.top, bounds.max_y(self.height()));
    }

    fn clamp_velocity(&mut self) {
        self.vel.x = self.vel.x.clamp(-MAX_VX, MAX_VX);
        self.vel.y = self.vel.y.clamp(-MAX_VY, MAX_VY);
    }

    /// Consume `food` after the tank matched it against this fish.
    ///
    /// Only the fish's own live target is eaten: no-op (false) when the fish
    /// has no target, `food` is some other pellet, or it is already eaten.
    pub fn eat_food(&mut self, food: &mut Food, rng: &mut impl Rng) -> bool {
        if self.target_food != Some(food.id) || food.eaten {
            return false;
        }

        food.eaten = true;
        self.hunger = (self.hunger - HUNGER_RELIEF).max(0.0);
        self.is_eating = false;
        self.target_food = None;
        self.eat_cooldown_ms = EAT_COOLDOWN_MS;
        self.vel += Vec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-0.5..=0.5));
        self.clamp_velocity();
        true
    }

    /// Paint the sprite column by column with a travelling sine wave
    pub fn draw(&self, surface: &mut impl Surface) {
        let flip = self.direction < 0.0;
        let width = self.sprite.width();
        let t = self.elapsed_ms * 0.005;

        for col in 0..width {
            if self.sprite.is_blank_column(col) {
                continue;
            }
            // Mirrored fish draw source column `col` at the opposite edge
            let dest_col = if flip { width - 1 - col } else { col };
            let wave = (self.wiggle_phase + t + col as f32 * 0.15).sin() * self.wiggle_amplitude;
            let dest = Vec2::new(self.pos.x + dest_col as f32, self.pos.y + wave);
            surface.draw_sprite_column(&self.sprite, col, dest, flip);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn bounds() -> TankBounds {
        TankBounds::new(1000.0, 800.0, 50.0, 10.0)
    }

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    /// 40x20 fish whose center sits at (cx, cy)
    fn fish_centered(cx: f32, cy: f32) -> Fish {
        let sprite = Sprite::filled(40, 20, [255, 140, 0, 255]).unwrap();
        let mut fish = Fish::new("Nemo", sprite, &bounds(), &mut rng()).unwrap();
        fish.pos = Vec2::new(cx - 20.0, cy - 10.0);
        fish
    }

    #[test]
    fn test_factory_rejects_bad_input() {
        let sprite = Sprite::filled(4, 4, [1; 4]).unwrap();
        assert!(matches!(
            Fish::new("  ", sprite, &bounds(), &mut rng()),
            Err(FishError::EmptyName)
        ));

        assert!(matches!(
            Fish::from_drawing("Dory", 4, 4, vec![0; 10], &bounds(), &mut rng()),
            Err(FishError::Sprite(SpriteError::BufferSize { .. }))
        ));

        let huge = Sprite::filled(1001, 10, [1; 4]).unwrap();
        assert!(matches!(
            Fish::new("Whale", huge, &bounds(), &mut rng()),
            Err(FishError::TooLarge { width: 1001, .. })
        ));
    }

    #[test]
    fn test_new_fish_starts_in_bounds() {
        let b = bounds();
        let mut rng = rng();
        for i in 0..50 {
            let sprite = Sprite::filled(40, 20, [1; 4]).unwrap();
            let fish = Fish::new(format!("fish-{i}"), sprite, &b, &mut rng).unwrap();
            assert!(fish.pos.x >= 0.0 && fish.pos.x <= b.max_x(40.0));
            assert!(fish.pos.y >= b.top && fish.pos.y <= b.max_y(20.0));
            assert!(fish.hunger >= 0.0 && fish.hunger < 50.0);
            assert!(fish.direction == 1.0 || fish.direction == -1.0);
        }
    }

    #[test]
    fn test_detection_range() {
        let mut rng = rng();
        let mut fish = fish_centered(100.0, 300.0);

        let inside = [Food::new(FoodId(1), Vec2::new(499.0, 300.0))];
        fish.update(16.0, &inside, &bounds(), &mut rng);
        assert_eq!(fish.target_food, Some(FoodId(1)));

        let mut fish = fish_centered(100.0, 300.0);
        let outside = [Food::new(FoodId(2), Vec2::new(501.0, 300.0))];
        fish.update(16.0, &outside, &bounds(), &mut rng);
        assert_eq!(fish.target_food, None);
    }

    #[test]
    fn test_nearest_food_wins_and_ties_keep_first() {
        let fish = fish_centered(300.0, 300.0);
        let mut eaten = Food::new(FoodId(1), Vec2::new(301.0, 300.0));
        eaten.eaten = true;
        let foods = [
            eaten,
            Food::new(FoodId(2), Vec2::new(350.0, 300.0)),
            Food::new(FoodId(3), Vec2::new(250.0, 300.0)),
            Food::new(FoodId(4), Vec2::new(320.0, 300.0)),
        ];
        assert_eq!(fish.nearest_food(&foods).map(|f| f.id), Some(FoodId(4)));

        let tied = [
            Food::new(FoodId(5), Vec2::new(350.0, 300.0)),
            Food::new(FoodId(6), Vec2::new(250.0, 300.0)),
        ];
        assert_eq!(fish.nearest_food(&tied).map(|f| f.id), Some(FoodId(5)));
    }

    #[test]
    fn test_boundary_bounce() {
        let mut fish = fish_centered(300.0, 300.0);
        fish.pos.x = 0.0;
        fish.vel.x = -3.0;
        fish.direction = -1.0;

        fish.update(16.0, &[], &bounds(), &mut rng());
        assert_eq!(fish.pos.x, 0.0);
        assert!(fish.vel.x >= 0.0);
        assert_eq!(fish.direction, 1.0);
    }

    #[test]
    fn test_vertical_bounce_loses_half_speed() {
        let b = bounds();
        let mut fish = fish_centered(300.0, 300.0);
        fish.pos.y = b.max_y(fish.height()) + 5.0;
        fish.vel.y = 1.0;

        fish.reflect(&b);
        assert_eq!(fish.pos.y, b.max_y(fish.height()));
        assert_eq!(fish.vel.y, -0.5);

        fish.pos.y = b.top - 1.0;
        fish.vel.y = -1.0;
        fish.reflect(&b);
        assert_eq!(fish.pos.y, b.top);
        assert_eq!(fish.vel.y, 0.5);
    }

    #[test]
    fn test_seeking_steers_toward_food_faster_when_hungry() {
        let mut rng = rng();
        let foods = [Food::new(FoodId(1), Vec2::new(600.0, 300.0))];

        let mut calm = fish_centered(300.0, 300.0);
        calm.speed = 1.0;
        calm.hunger = 0.0;
        calm.update(16.0, &foods, &bounds(), &mut rng);

        let mut starving = fish_centered(300.0, 300.0);
        starving.speed = 1.0;
        starving.hunger = 250.0;
        starving.update(16.0, &foods, &bounds(), &mut rng);

        assert!(calm.vel.x > 0.0 && calm.direction == 1.0);
        assert!((calm.vel.x - 1.2).abs() < 1e-2);
        // Hunger above the maximum steers like the maximum
        assert!((starving.vel.x - 2.2).abs() < 1e-3);
        assert!(starving.pos.x > calm.pos.x);
    }

    #[test]
    fn test_arrival_marks_eating_without_consuming() {
        let mut fish = fish_centered(300.0, 300.0);
        let foods = [Food::new(FoodId(1), Vec2::new(305.0, 300.0))];
        let before = fish.pos;

        fish.update(16.0, &foods, &bounds(), &mut rng());
        assert!(fish.is_eating);
        assert_eq!(fish.target_food, Some(FoodId(1)));
        assert_eq!(fish.pos, before);
        assert!(!foods[0].eaten);
    }

    #[test]
    fn test_stale_target_is_dropped() {
        let mut fish = fish_centered(300.0, 300.0);
        fish.target_food = Some(FoodId(9));
        fish.is_eating = true;

        fish.update(16.0, &[], &bounds(), &mut rng());
        assert_eq!(fish.target_food, None);
        assert!(!fish.is_eating);
    }

    #[test]
    fn test_cooldown_blocks_seeking() {
        let mut fish = fish_centered(300.0, 300.0);
        fish.eat_cooldown_ms = 20.0;
        let foods = [Food::new(FoodId(1), Vec2::new(350.0, 300.0))];

        fish.update(16.0, &foods, &bounds(), &mut rng());
        assert_eq!(fish.target_food, None);
        assert!((fish.eat_cooldown_ms - 4.0).abs() < 1e-4);

        fish.update(16.0, &foods, &bounds(), &mut rng());
        assert_eq!(fish.eat_cooldown_ms, 0.0);
        assert_eq!(fish.target_food, None);

        fish.update(16.0, &foods, &bounds(), &mut rng());
        assert_eq!(fish.target_food, Some(FoodId(1)));
    }

    #[test]
    fn test_hunger_grows_without_food() {
        let mut fish = fish_centered(300.0, 300.0);
        fish.hunger = 10.0;
        let mut rng = rng();
        for _ in 0..100 {
            let before = fish.hunger;
            fish.update(16.0, &[], &bounds(), &mut rng);
            assert!(fish.hunger > before);
        }
        assert!((fish.hunger - 20.0).abs() < 1e-2);
    }

    #[test]
    fn test_eat_food_relieves_hunger() {
        let mut rng = rng();
        let mut fish = fish_centered(300.0, 300.0);
        let mut food = Food::new(FoodId(1), fish.center());
        fish.hunger = 70.0;
        fish.target_food = Some(food.id);
        fish.is_eating = true;

        assert!(fish.eat_food(&mut food, &mut rng));
        assert!(food.eaten);
        assert_eq!(fish.hunger, 40.0);
        assert_eq!(fish.eat_cooldown_ms, EAT_COOLDOWN_MS);
        assert_eq!(fish.target_food, None);
        assert!(!fish.is_eating);
        assert!(fish.vel.x.abs() <= MAX_VX && fish.vel.y.abs() <= MAX_VY);

        let mut snack = Food::new(FoodId(2), fish.center());
        fish.hunger = 12.0;
        fish.target_food = Some(snack.id);
        assert!(fish.eat_food(&mut snack, &mut rng));
        assert_eq!(fish.hunger, 0.0);
    }

    #[test]
    fn test_eat_food_is_idempotent() {
        let mut rng = rng();
        let mut fish = fish_centered(300.0, 300.0);
        fish.hunger = 50.0;

        // No target
        let mut food = Food::new(FoodId(1), fish.center());
        assert!(!fish.eat_food(&mut food, &mut rng));
        assert!(!food.eaten);

        // Target already eaten
        food.eaten = true;
        fish.target_food = Some(food.id);
        let vel = fish.vel;
        assert!(!fish.eat_food(&mut food, &mut rng));
        assert_eq!(fish.hunger, 50.0);
        assert_eq!(fish.eat_cooldown_ms, 0.0);
        assert_eq!(fish.target_food, Some(food.id));
        assert_eq!(fish.vel, vel);
    }

    #[test]
    fn test_eat_food_only_takes_own_target() {
        let mut rng = rng();
        let mut fish = fish_centered(300.0, 300.0);
        fish.hunger = 50.0;

        // Target was eaten by someone else; touching another pellet is not a meal
        fish.target_food = Some(FoodId(1));
        let mut other = Food::new(FoodId(2), fish.center());
        let vel = fish.vel;
        assert!(!fish.eat_food(&mut other, &mut rng));
        assert!(!other.eaten);
        assert_eq!(fish.hunger, 50.0);
        assert_eq!(fish.eat_cooldown_ms, 0.0);
        assert_eq!(fish.vel, vel);

        // Retargeted onto it, the same pellet is eaten
        fish.target_food = Some(other.id);
        assert!(fish.eat_food(&mut other, &mut rng));
        assert!(other.eaten);
        assert_eq!(fish.hunger, 20.0);
    }

    #[test]
    fn test_non_finite_food_is_ignored() {
        let mut rng = rng();
        let mut fish = fish_centered(300.0, 300.0);
        let foods = [
            Food::new(FoodId(1), Vec2::new(f32::NAN, 300.0)),
            Food::new(FoodId(2), Vec2::new(300.0, f32::INFINITY)),
        ];
        assert!(fish.nearest_food(&foods).is_none());

        // Even a target forced onto a bad pellet never poisons the fish
        fish.target_food = Some(FoodId(1));
        for _ in 0..100 {
            fish.update(16.0, &foods, &bounds(), &mut rng);
            assert!(fish.pos.is_finite() && fish.vel.is_finite());
        }
        assert_eq!(fish.target_food, None);
    }

    #[test]
    fn test_velocity_clamped_every_tick() {
        let mut rng = rng();
        let mut fish = fish_centered(500.0, 400.0);
        fish.vel = Vec2::new(-40.0, 25.0);
        fish.update(16.0, &[], &bounds(), &mut rng);
        assert!(fish.vel.x.abs() <= MAX_VX);
        assert!(fish.vel.y.abs() <= MAX_VY);
    }

    #[test]
    fn test_contains_point() {
        let fish = fish_centered(100.0, 100.0);
        assert!(fish.contains_point(Vec2::new(80.0, 90.0)));
        assert!(fish.contains_point(Vec2::new(120.0, 110.0)));
        assert!(!fish.contains_point(Vec2::new(121.0, 100.0)));
    }

    #[test]
    fn test_draw_mirrors_when_facing_left() {
        let mut fish = fish_centered(100.0, 100.0);
        fish.direction = -1.0;
        let mut list = DrawList::new();
        fish.draw(&mut list);

        assert_eq!(list.sprite_columns(), 40);
        match &list.commands[0] {
            DrawCommand::SpriteColumn {
                column,
                dest,
                flip_x,
                ..
            } => {
                assert_eq!(*column, 0);
                assert!(*flip_x);
                assert_eq!(dest.x, fish.pos.x + 39.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
