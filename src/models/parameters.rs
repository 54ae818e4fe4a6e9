//! Viewing parameters
//!
//! The single input bundle for every recompute. The JavaScript layer owns
//! the current values and passes a fresh copy with each call; the core
//! never stores parameters between calls.

use crate::errors::PlannerError;
use crate::models::catalog::{catalog_entry, TvDimensions};
use serde::{Deserialize, Serialize};

/// Room and TV parameters for one recompute
///
/// Invariant: all lengths are strictly positive and `selected_size` is a
/// valid catalog key. Enforced by [`ViewingParameters::validate`] at the
/// API boundary.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ViewingParameters {
    /// Nominal TV size in inches (catalog key)
    pub selected_size: u32,

    /// Eye-to-screen viewing distance in metres
    pub distance_m: f64,

    /// Height of the TV center above the floor in metres
    pub tv_mount_height_m: f64,

    /// Height of the viewer's eyes above the floor in metres
    pub eye_height_m: f64,

    /// Width of the TV wall in metres
    pub wall_width_m: f64,

    /// Height of the TV wall in metres
    pub wall_height_m: f64,
}

impl Default for ViewingParameters {
    fn default() -> Self {
        Self {
            selected_size: 75,
            distance_m: 3.1,
            tv_mount_height_m: 1.1,
            eye_height_m: 1.1,
            wall_width_m: 3.6,
            wall_height_m: 2.7,
        }
    }
}

impl ViewingParameters {
    /// Check the parameter invariants
    pub fn validate(&self) -> Result<(), PlannerError> {
        require_positive("distance_m", self.distance_m)?;
        require_positive("tv_mount_height_m", self.tv_mount_height_m)?;
        require_positive("eye_height_m", self.eye_height_m)?;
        require_positive("wall_width_m", self.wall_width_m)?;
        require_positive("wall_height_m", self.wall_height_m)?;
        catalog_entry(self.selected_size)?;
        Ok(())
    }

    /// Catalog entry for the selected size
    pub fn tv(&self) -> Result<&'static TvDimensions, PlannerError> {
        catalog_entry(self.selected_size)
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), PlannerError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(PlannerError::NonPositiveDimension { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ViewingParameters::default().validate().is_ok());
    }

    #[test]
    fn test_zero_distance_rejected() {
        let params = ViewingParameters { distance_m: 0.0, ..Default::default() };
        assert_eq!(
            params.validate(),
            Err(PlannerError::NonPositiveDimension { name: "distance_m", value: 0.0 })
        );
    }

    #[test]
    fn test_negative_wall_width_rejected() {
        let params = ViewingParameters { wall_width_m: -1.0, ..Default::default() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_unknown_size_rejected() {
        let params = ViewingParameters { selected_size: 60, ..Default::default() };
        assert_eq!(params.validate(), Err(PlannerError::UnknownSize(60)));
    }
}
