//! Aquarium simulation module
//!
//! All tank behavior lives here. This module has no rendering backend or
//! platform dependencies:
//! - Frame-delta driven (rates normalized to a 16 ms reference frame)
//! - Single-threaded, one `update` then one `draw` per host frame
//! - Entities are pruned by rebuilding their collection in the tick they expire

pub mod bounds;
pub mod bubble;
pub mod fish;
pub mod food;
pub mod sprite;
pub mod tank;
mod tick;

pub use bounds::TankBounds;
pub use bubble::Bubble;
pub use fish::{Fish, FishError};
pub use food::{Food, FoodId};
pub use sprite::{Sprite, SpriteError};
pub use tank::{Tank, TankStats};
