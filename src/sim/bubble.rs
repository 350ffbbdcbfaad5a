//! Decorative bubbles rising through the tank

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::surface::{BUBBLE_COLOR, with_alpha};
use crate::renderer::Surface;

/// A rising bubble particle (not gameplay-affecting)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bubble {
    pub pos: Vec2,
    /// Size class 1..=3
    pub size: u8,
    /// Rise speed per reference frame
    pub speed: f32,
    pub phase: f32,
    /// Radians per second
    pub wiggle_speed: f32,
    pub wiggle_amplitude: f32,
    pub alpha: f32,
}

impl Bubble {
    pub fn new(pos: Vec2, size: u8, speed: f32, wiggle_speed: f32, phase: f32) -> Self {
        Self {
            pos,
            size: size.clamp(1, 3),
            speed,
            phase,
            wiggle_speed,
            wiggle_amplitude: BUBBLE_WIGGLE_AMPLITUDE,
            alpha: 0.6,
        }
    }

    /// Random bubble at the given spawn point
    pub fn spawn(pos: Vec2, rng: &mut impl Rng) -> Self {
        Self::new(
            pos,
            rng.random_range(1..=3),
            rng.random_range(0.5..1.5),
            rng.random_range(1.0..3.0),
            rng.random_range(0.0..std::f32::consts::TAU),
        )
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size as f32 * BUBBLE_RADIUS_PER_SIZE
    }

    /// Advance one tick. Returns true once the bubble reached the top boundary.
    pub fn update(&mut self, dt_ms: f32, top: f32) -> bool {
        self.pos.y -= self.speed * (dt_ms / REFERENCE_FRAME_MS);
        self.pos.x += self.phase.sin() * self.wiggle_amplitude;
        self.phase += self.wiggle_speed * (dt_ms / 1000.0);
        self.pos.y <= top
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.stroke_circle(self.pos, self.radius(), with_alpha(BUBBLE_COLOR, self.alpha));
    }
}
