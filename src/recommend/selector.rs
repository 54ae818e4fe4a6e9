//! Recommended-size selection
//!
//! Sizes a panel for a target horizontal field of view and picks the
//! catalog entries nearest to that ideal width.

use crate::errors::PlannerError;
use crate::models::catalog::TV_SIZE_CATALOG;
use serde::{Deserialize, Serialize};

/// Target horizontal field of view, degrees
///
/// Midpoint of the commonly cited 28–36° "cinema-immersive" comfort band.
pub const TARGET_HORIZONTAL_FOV_DEG: f64 = 32.0;

/// Outcome of the size selection for one viewing distance
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SizeRecommendation {
    /// Panel width that would hit the target field of view exactly, cm
    pub ideal_width_cm: f64,

    /// Catalog size whose width is numerically closest to the ideal
    pub best_size_in: u32,

    /// Lower end of the suggested range, inches
    pub range_min_in: u32,

    /// Upper end of the suggested range, inches
    pub range_max_in: u32,
}

/// Panel width in centimetres that subtends the target field of view
pub fn ideal_width_cm(distance_m: f64) -> f64 {
    2.0 * distance_m * (TARGET_HORIZONTAL_FOV_DEG / 2.0).to_radians().tan() * 100.0
}

/// Select the catalog size closest to the ideal width for this distance
///
/// The catalog is sorted ascending by width and the strict comparison keeps
/// the first minimal entry, so ties resolve to the smaller size. The
/// suggested range spans the best match and the next size up, clamped to
/// the catalog bounds.
pub fn recommend_size(distance_m: f64) -> Result<SizeRecommendation, PlannerError> {
    if distance_m <= 0.0 {
        return Err(PlannerError::NonPositiveDimension {
            name: "distance_m",
            value: distance_m,
        });
    }

    let ideal = ideal_width_cm(distance_m);

    let mut best_idx = 0;
    let mut best_diff = f64::INFINITY;
    for (idx, tv) in TV_SIZE_CATALOG.iter().enumerate() {
        let diff = (tv.width_cm - ideal).abs();
        if diff < best_diff {
            best_diff = diff;
            best_idx = idx;
        }
    }

    let next_idx = (best_idx + 1).min(TV_SIZE_CATALOG.len() - 1);

    Ok(SizeRecommendation {
        ideal_width_cm: ideal,
        best_size_in: TV_SIZE_CATALOG[best_idx].size_in,
        range_min_in: TV_SIZE_CATALOG[best_idx].size_in,
        range_max_in: TV_SIZE_CATALOG[next_idx].size_in,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_metre_scenario() {
        let rec = recommend_size(2.0).unwrap();

        // 2 * 2 * tan(16°) * 100
        assert!((rec.ideal_width_cm - 114.7).abs() < 0.05);
        assert_eq!(rec.best_size_in, 55);
        assert_eq!(rec.range_min_in, 55);
        assert_eq!(rec.range_max_in, 65);
    }

    #[test]
    fn test_selection_is_idempotent() {
        let first = recommend_size(3.1).unwrap();
        let second = recommend_size(3.1).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_range_clamps_at_top_of_catalog() {
        // Far enough away that even 100" is smaller than the ideal width
        let rec = recommend_size(10.0).unwrap();
        assert_eq!(rec.best_size_in, 100);
        assert_eq!(rec.range_min_in, 100);
        assert_eq!(rec.range_max_in, 100);
    }

    #[test]
    fn test_non_positive_distance_rejected() {
        assert!(recommend_size(0.0).is_err());
        assert!(recommend_size(-1.0).is_err());
    }
}
