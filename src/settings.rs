//! Tank settings
//!
//! Geometry and spawn parameters, persisted as JSON next to the driver.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::TankBounds;

/// Tank configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport ===
    /// Viewport width in tank units
    pub width: f32,
    /// Viewport height in tank units
    pub height: f32,
    /// Nothing may cross above this line (room for the host's toolbar)
    pub top_boundary: f32,
    /// Space fish keep clear of the floor
    pub bottom_padding: f32,

    // === Spawning ===
    /// Time between bubble batches
    pub bubble_interval_ms: f32,
    pub bubbles_per_spawn: u32,
    /// Max offset of each pellet from the drop point, per axis
    pub food_scatter: f32,

    // === Frame pacing ===
    /// Frame deltas above this are capped (e.g. after the host was backgrounded)
    pub max_frame_ms: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            top_boundary: 60.0,
            bottom_padding: 10.0,

            bubble_interval_ms: 5000.0,
            bubbles_per_spawn: 5,
            food_scatter: 20.0,

            max_frame_ms: 100.0,
        }
    }
}

impl Settings {
    /// Tank geometry for the simulation
    pub fn bounds(&self) -> TankBounds {
        TankBounds::new(self.width, self.height, self.top_boundary, self.bottom_padding)
    }

    /// Replace nonsensical values with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.width.is_finite() && self.width > 0.0) {
            log::warn!("Invalid width {}, using {}", self.width, defaults.width);
            self.width = defaults.width;
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            log::warn!("Invalid height {}, using {}", self.height, defaults.height);
            self.height = defaults.height;
        }
        if !(self.top_boundary.is_finite()
            && self.top_boundary >= 0.0
            && self.top_boundary < self.height)
        {
            log::warn!("top_boundary {} outside the viewport, using 0", self.top_boundary);
            self.top_boundary = 0.0;
        }
        if !(self.bottom_padding.is_finite() && self.bottom_padding >= 0.0) {
            log::warn!("Invalid bottom_padding {}, using 0", self.bottom_padding);
            self.bottom_padding = 0.0;
        }
        if !(self.bubble_interval_ms.is_finite() && self.bubble_interval_ms > 0.0) {
            log::warn!(
                "Invalid bubble_interval_ms {}, using {}",
                self.bubble_interval_ms,
                defaults.bubble_interval_ms
            );
            self.bubble_interval_ms = defaults.bubble_interval_ms;
        }
        if !(self.food_scatter.is_finite() && self.food_scatter >= 0.0) {
            log::warn!("Invalid food_scatter {}, using 0", self.food_scatter);
            self.food_scatter = 0.0;
        }
        if !(self.max_frame_ms.is_finite() && self.max_frame_ms > 0.0) {
            log::warn!(
                "Invalid max_frame_ms {}, using {}",
                self.max_frame_ms,
                defaults.max_frame_ms
            );
            self.max_frame_ms = defaults.max_frame_ms;
        }

        self
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Ignoring malformed settings {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Cannot read settings {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
