//! Tank geometry shared by every entity

use serde::{Deserialize, Serialize};

/// Viewport dimensions plus the swimmable band inside them.
///
/// Entities never cross above `top`; fish also keep `bottom_padding` clear of the floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TankBounds {
    pub width: f32,
    pub height: f32,
    pub top: f32,
    pub bottom_padding: f32,
}

impl TankBounds {
    pub fn new(width: f32, height: f32, top: f32, bottom_padding: f32) -> Self {
        Self {
            width,
            height,
            top,
            bottom_padding,
        }
    }

    /// Largest x a body of `width` may occupy
    #[inline]
    pub fn max_x(&self, width: f32) -> f32 {
        (self.width - width).max(0.0)
    }

    /// Largest y a body of `height` may occupy
    #[inline]
    pub fn max_y(&self, height: f32) -> f32 {
        (self.height - height - self.bottom_padding).max(self.top)
    }

    /// Whether a body of the given size fits the swimmable area at all
    pub fn fits(&self, width: f32, height: f32) -> bool {
        width <= self.width && self.top + height + self.bottom_padding <= self.height
    }
}
