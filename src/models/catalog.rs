//! TV size catalog
//!
//! Fixed table of 16:9 reference sizes with physical dimensions in
//! centimetres. Entries are sorted ascending by width; closest-size
//! selection relies on that order for its first-minimal tie-break.

use crate::errors::PlannerError;
use serde::{Deserialize, Serialize};

/// Physical dimensions of one catalog entry (16:9 panel)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TvDimensions {
    /// Nominal diagonal size in inches
    pub size_in: u32,

    /// Panel width in centimetres
    pub width_cm: f64,

    /// Panel height in centimetres
    pub height_cm: f64,

    /// Panel diagonal in centimetres
    pub diagonal_cm: f64,
}

impl TvDimensions {
    /// Panel width in metres
    pub fn width_m(&self) -> f64 {
        self.width_cm / 100.0
    }

    /// Panel height in metres
    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }

    /// Width-to-height ratio (about 1.78 for every entry)
    pub fn aspect_ratio(&self) -> f64 {
        self.width_cm / self.height_cm
    }
}

/// The six reference sizes, ascending by width
pub const TV_SIZE_CATALOG: &[TvDimensions] = &[
    TvDimensions { size_in: 55, width_cm: 121.8, height_cm: 68.5, diagonal_cm: 139.7 },
    TvDimensions { size_in: 65, width_cm: 143.9, height_cm: 80.9, diagonal_cm: 165.1 },
    TvDimensions { size_in: 75, width_cm: 166.0, height_cm: 93.4, diagonal_cm: 190.5 },
    TvDimensions { size_in: 85, width_cm: 188.2, height_cm: 105.8, diagonal_cm: 215.9 },
    TvDimensions { size_in: 98, width_cm: 216.9, height_cm: 122.0, diagonal_cm: 248.9 },
    TvDimensions { size_in: 100, width_cm: 221.4, height_cm: 124.5, diagonal_cm: 254.0 },
];

/// Look up a catalog entry by nominal size
///
/// Unknown sizes are a configuration error and fail fast rather than
/// falling back to a default entry.
pub fn catalog_entry(size_in: u32) -> Result<&'static TvDimensions, PlannerError> {
    TV_SIZE_CATALOG
        .iter()
        .find(|tv| tv.size_in == size_in)
        .ok_or(PlannerError::UnknownSize(size_in))
}
