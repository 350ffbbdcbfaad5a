//! Food pellets dropped into the tank

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::TankBounds;
use super::fish::Fish;
use crate::consts::*;
use crate::renderer::surface::{FOOD_COLOR, with_alpha};
use crate::renderer::Surface;

/// Stable handle to a food pellet, allocated by the tank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodId(pub u32);

/// A food pellet: falls until eaten, then fades out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub pos: Vec2,
    pub radius: f32,
    pub eaten: bool,
    /// Opacity, 1 until eaten then fading to 0
    pub alpha: f32,
    pub fall_speed: f32,
    pub fade_rate: f32,
}

impl Food {
    pub fn new(id: FoodId, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            radius: FOOD_RADIUS,
            eaten: false,
            alpha: 1.0,
            fall_speed: FOOD_FALL_SPEED,
            fade_rate: FOOD_FADE_RATE,
        }
    }

    /// Still available to fish
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.eaten
    }

    /// Advance one tick. Returns true when the pellet should be removed.
    pub fn update(&mut self, dt_ms: f32, bounds: &TankBounds) -> bool {
        if self.eaten {
            self.alpha -= self.fade_rate;
            return self.alpha <= 0.0;
        }

        self.pos.y += self.fall_speed * (dt_ms / REFERENCE_FRAME_MS);
        self.pos.y > bounds.height + FOOD_FLOOR_MARGIN || self.pos.y < bounds.top
    }

    /// Coarse circle test against the fish's bounding-box center
    pub fn check_collision(&self, fish: &Fish) -> bool {
        !self.eaten && self.pos.distance(fish.center()) < fish.width() / 2.0 + self.radius
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_circle(self.pos, self.radius, with_alpha(FOOD_COLOR, self.alpha));
    }
}
