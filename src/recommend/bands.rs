//! Qualitative banding for computed metrics
//!
//! Each badged metric maps to a three-tier band with fixed thresholds.
//! The bands serialize lowercase so the rendering layer can apply them
//! directly as CSS classes.
//!
//! Note: the "good" occupancy band here (40–60) is intentionally wider than
//! the advisory text's balanced range (40–55); both literal thresholds are
//! kept. See DESIGN.md.

use crate::geometry::GeometryResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality tier for a single metric
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationBand {
    Good,
    Warning,
    Bad,
}

impl RecommendationBand {
    /// CSS class name used by the rendering layer
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationBand::Good => "good",
            RecommendationBand::Warning => "warning",
            RecommendationBand::Bad => "bad",
        }
    }
}

impl fmt::Display for RecommendationBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bands for the three badged metrics
///
/// The vertical angle is displayed but never badged.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct MetricBands {
    pub horizontal_angle: RecommendationBand,
    pub height_offset: RecommendationBand,
    pub wall_occupancy: RecommendationBand,
}

/// Band for the horizontal viewing angle in degrees
pub fn classify_horizontal_angle(angle_deg: f64) -> RecommendationBand {
    if (28.0..=40.0).contains(&angle_deg) {
        RecommendationBand::Good
    } else if (20.0..=50.0).contains(&angle_deg) {
        RecommendationBand::Warning
    } else {
        RecommendationBand::Bad
    }
}

/// Band for the signed height offset in centimetres
pub fn classify_height_offset(offset_cm: f64) -> RecommendationBand {
    let magnitude = offset_cm.abs();
    if magnitude <= 10.0 {
        RecommendationBand::Good
    } else if magnitude <= 25.0 {
        RecommendationBand::Warning
    } else {
        RecommendationBand::Bad
    }
}

/// Band for the wall occupancy in percent
pub fn classify_wall_occupancy(percent: f64) -> RecommendationBand {
    if (40.0..=60.0).contains(&percent) {
        RecommendationBand::Good
    } else if (30.0..=70.0).contains(&percent) {
        RecommendationBand::Warning
    } else {
        RecommendationBand::Bad
    }
}

/// Classify all badged metrics of a geometry result
pub fn classify_metrics(geometry: &GeometryResult) -> MetricBands {
    MetricBands {
        horizontal_angle: classify_horizontal_angle(geometry.horizontal_angle_deg),
        height_offset: classify_height_offset(geometry.height_offset_cm),
        wall_occupancy: classify_wall_occupancy(geometry.wall_occupancy_percent),
    }
}
