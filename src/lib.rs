//! Aquarium - an interactive fish tank simulation
//!
//! Core modules:
//! - `sim`: Simulation (fish behavior, food, bubbles, tank orchestration)
//! - `renderer`: Drawing boundary implemented by the host surface
//! - `settings`: Tank geometry and spawn configuration
//! - `records`: Fish records supplied by the persistence layer

pub mod records;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use records::{FishRecord, SeedReport};
pub use settings::Settings;
pub use sim::{Bubble, Fish, FishError, Food, FoodId, Sprite, Tank, TankBounds};

/// Simulation tuning constants
pub mod consts {
    /// Reference frame length; per-frame rates are expressed against it
    pub const REFERENCE_FRAME_MS: f32 = 16.0;

    /// Fish perception and steering
    pub const FOOD_DETECTION_RANGE: f32 = 400.0;
    pub const EAT_DISTANCE: f32 = 8.0;
    pub const MAX_VX: f32 = 3.0;
    pub const MAX_VY: f32 = 1.5;
    /// Seeking speed multiplier is HUNGER_BOOST_BASE + hunger/MAX_HUNGER * HUNGER_BOOST_RANGE
    pub const HUNGER_BOOST_BASE: f32 = 1.2;
    pub const HUNGER_BOOST_RANGE: f32 = 1.0;
    /// Vertical bounces keep this fraction of their speed
    pub const BOUNCE_DAMPING: f32 = 0.5;
    /// Fraction of the cruise-speed gap closed per reference frame while idle
    pub const CRUISE_EASING: f32 = 0.02;
    pub const BOB_RATE: f32 = 0.002;
    pub const BOB_SCALE: f32 = 0.05;
    /// Idle vertical wander (probability per tick, max delta)
    pub const IDLE_WANDER_CHANCE: f64 = 0.02;
    pub const IDLE_WANDER_DELTA: f32 = 0.5;

    /// Hunger
    pub const MAX_HUNGER: f32 = 100.0;
    pub const HUNGER_PER_FRAME: f32 = 0.1;
    pub const HUNGER_RELIEF: f32 = 30.0;
    pub const EAT_COOLDOWN_MS: f32 = 800.0;

    /// Food
    pub const FOOD_RADIUS: f32 = 4.0;
    pub const FOOD_FALL_SPEED: f32 = 0.8;
    pub const FOOD_FADE_RATE: f32 = 0.05;
    /// How far below the tank floor food may sink before it is dropped
    pub const FOOD_FLOOR_MARGIN: f32 = 10.0;

    /// Bubbles
    pub const BUBBLE_RADIUS_PER_SIZE: f32 = 2.5;
    pub const BUBBLE_WIGGLE_AMPLITUDE: f32 = 0.2;
    pub const BUBBLE_SPAWN_INSET: f32 = 10.0;
    pub const BUBBLE_SPAWN_JITTER: f32 = 20.0;

    /// Decoded record sprites wider than this are downscaled
    pub const MAX_SPRITE_WIDTH: u32 = 120;
}
