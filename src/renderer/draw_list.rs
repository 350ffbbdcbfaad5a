//! Recording surface for headless runs and tests

use glam::Vec2;

use super::surface::{Rgba, Surface};
use crate::sim::Sprite;

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background {
        width: f32,
        height: f32,
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        filled: bool,
    },
    SpriteColumn {
        /// Sprite size, enough to tell fish apart in a recording
        sprite_size: (u32, u32),
        column: u32,
        dest: Vec2,
        flip_x: bool,
    },
}

/// Surface that records every call in order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of sprite column blits (fish pixels drawn)
    pub fn sprite_columns(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::SpriteColumn { .. }))
            .count()
    }
}

impl Surface for DrawList {
    fn fill_background(&mut self, width: f32, height: f32, color: Rgba) {
        self.commands.push(DrawCommand::Background {
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            filled: true,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            filled: false,
        });
    }

    fn draw_sprite_column(&mut self, sprite: &Sprite, column: u32, dest: Vec2, flip_x: bool) {
        self.commands.push(DrawCommand::SpriteColumn {
            sprite_size: (sprite.width(), sprite.height()),
            column,
            dest,
            flip_x,
        });
    }
}
