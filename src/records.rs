//! Fish records from the persistence layer
//!
//! The tank never fetches anything itself. Whoever talks to the document
//! store hands over a list of records and the tank is seeded from it.

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sim::{Fish, FishError, Sprite, Tank, TankBounds};

/// A stored fish: its unique name plus the encoded drawing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FishRecord {
    pub name: String,
    /// Encoded image blob (PNG or JPEG)
    pub image: Vec<u8>,
}

impl FishRecord {
    pub fn new(name: impl Into<String>, image: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    /// Decode the drawing and build a fish from it
    pub fn to_fish(&self, bounds: &TankBounds, rng: &mut impl Rng) -> Result<Fish, FishError> {
        if self.name.trim().is_empty() {
            return Err(FishError::EmptyName);
        }
        let sprite = Sprite::decode(&self.image)?;
        Fish::new(self.name.clone(), sprite, bounds, rng)
    }
}

/// Errors reading a records file
#[derive(Debug, thiserror::Error)]
pub enum RecordsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed records: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a JSON array of records
pub fn parse_records(json: &str) -> Result<Vec<FishRecord>, RecordsError> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of records from disk
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<FishRecord>, RecordsError> {
    let json = std::fs::read_to_string(path.as_ref())?;
    let records = parse_records(&json)?;
    log::info!("Loaded {} fish records from {}", records.len(), path.as_ref().display());
    Ok(records)
}

/// Outcome of seeding a tank from records
#[derive(Debug, Default)]
pub struct SeedReport {
    pub added: usize,
    /// Names already present in the tank (or repeated in the batch)
    pub duplicates: Vec<String>,
    /// Records whose fish could not be built
    pub failed: Vec<(String, FishError)>,
}

impl Tank {
    /// Build and add a fish for every record, in order
    pub fn seed_from_records(&mut self, records: &[FishRecord]) -> SeedReport {
        let mut report = SeedReport::default();
        let bounds = *self.bounds();

        for record in records {
            // Skip decoding for names we would reject anyway
            if self.has_fish(&record.name) {
                log::warn!("Fish '{}' already in the tank, skipping", record.name);
                report.duplicates.push(record.name.clone());
                continue;
            }
            match record.to_fish(&bounds, self.rng()) {
                Ok(fish) => {
                    if self.add_fish(fish) {
                        report.added += 1;
                    } else {
                        report.duplicates.push(record.name.clone());
                    }
                }
                Err(e) => {
                    log::warn!("Could not build fish '{}': {}", record.name, e);
                    report.failed.push((record.name.clone(), e));
                }
            }
        }

        log::info!(
            "Seeded tank: {} added, {} duplicates, {} failed",
            report.added,
            report.duplicates.len(),
            report.failed.len()
        );
        report
    }
}
