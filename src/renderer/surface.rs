//! Drawing primitives consumed by the simulation

use glam::Vec2;

use crate::sim::Sprite;

/// Linear RGBA colour, components in 0..=1
pub type Rgba = [f32; 4];

/// Water backdrop
pub const WATER_COLOR: Rgba = [0.05, 0.25, 0.45, 1.0];
/// Food pellet
pub const FOOD_COLOR: Rgba = [0.72, 0.45, 0.2, 1.0];
/// Bubble outline
pub const BUBBLE_COLOR: Rgba = [0.85, 0.95, 1.0, 1.0];

/// Apply an opacity multiplier to a colour
#[inline]
pub fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    [color[0], color[1], color[2], color[3] * alpha.clamp(0.0, 1.0)]
}

/// A 2D canvas the tank can paint onto.
///
/// Coordinates are in tank space: origin top-left, y grows downward.
pub trait Surface {
    /// Clear the whole viewport with the water backdrop
    fn fill_background(&mut self, width: f32, height: f32, color: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Blit one 1-pixel-wide column of `sprite` with its top at `dest`.
    ///
    /// `flip_x` mirrors the sprite horizontally; `column` is always the
    /// source column index.
    fn draw_sprite_column(&mut self, sprite: &Sprite, column: u32, dest: Vec2, flip_x: bool);
}
