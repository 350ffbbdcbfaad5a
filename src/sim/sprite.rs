//! Fish sprite: pixel data and the per-column slices drawn by the renderer

use std::fmt;

use image::imageops::FilterType;
use image::RgbaImage;

use crate::consts::MAX_SPRITE_WIDTH;

/// Errors raised while building a sprite from external input
#[derive(Debug, thiserror::Error)]
pub enum SpriteError {
    #[error("Sprite has no pixels")]
    Empty,
    #[error("RGBA buffer is {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// An RGBA fish image
#[derive(Clone)]
pub struct Sprite {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
    /// Columns with no visible pixel (skipped when drawing)
    blank_columns: Vec<bool>,
}

impl Sprite {
    /// Build a sprite from a raw RGBA buffer (hand-drawn input)
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, SpriteError> {
        if width == 0 || height == 0 {
            return Err(SpriteError::Empty);
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(SpriteError::BufferSize {
                expected,
                actual: rgba.len(),
            });
        }

        let (w, h) = (width as usize, height as usize);
        let blank_columns = (0..w)
            .map(|col| (0..h).all(|row| rgba[(row * w + col) * 4 + 3] == 0))
            .collect();

        Ok(Self {
            width,
            height,
            rgba,
            blank_columns,
        })
    }

    /// Decode an encoded image blob (PNG/JPEG), shrinking oversized images
    pub fn decode(bytes: &[u8]) -> Result<Self, SpriteError> {
        let mut img = image::load_from_memory(bytes)?.into_rgba8();
        if img.width() > MAX_SPRITE_WIDTH {
            let scale = MAX_SPRITE_WIDTH as f32 / img.width() as f32;
            let height = ((img.height() as f32 * scale).round() as u32).max(1);
            img = image::imageops::resize(&img, MAX_SPRITE_WIDTH, height, FilterType::Triangle);
        }
        Self::from_image(img)
    }

    fn from_image(img: RgbaImage) -> Result<Self, SpriteError> {
        let (width, height) = img.dimensions();
        Self::from_rgba(width, height, img.into_raw())
    }

    /// A solid single-colour rectangle
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Result<Self, SpriteError> {
        let rgba = color
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self::from_rgba(width, height, rgba)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.rgba
    }

    pub fn is_blank_column(&self, column: u32) -> bool {
        self.blank_columns
            .get(column as usize)
            .copied()
            .unwrap_or(true)
    }

    /// RGBA of a single pixel (None if out of range)
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]])
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
