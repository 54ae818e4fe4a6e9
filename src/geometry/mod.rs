//! Geometry engine
//!
//! Converts a parameter set and its catalog entry into viewing angles,
//! height offset, and wall occupancy. Pure functions; every recompute is
//! complete, synchronous, and deterministic.

use crate::errors::PlannerError;
use crate::models::ViewingParameters;
use serde::{Deserialize, Serialize};

/// Derived viewing geometry for one parameter set
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GeometryResult {
    /// Angle subtended by the panel width at the eye, degrees
    pub horizontal_angle_deg: f64,

    /// Angle subtended by the panel height at the eye, degrees
    pub vertical_angle_deg: f64,

    /// TV center minus eye level, signed centimetres (positive = TV above)
    pub height_offset_cm: f64,

    /// Panel width as a percentage of wall width
    pub wall_occupancy_percent: f64,
}

/// Angle subtended by an extent seen face-on from `distance_m`, in degrees
pub fn subtended_angle_deg(extent_m: f64, distance_m: f64) -> f64 {
    (2.0 * (extent_m / (2.0 * distance_m)).atan()).to_degrees()
}

/// Compute the full geometry for one parameter set
pub fn compute_geometry(params: &ViewingParameters) -> Result<GeometryResult, PlannerError> {
    params.validate()?;
    let tv = params.tv()?;

    Ok(GeometryResult {
        horizontal_angle_deg: subtended_angle_deg(tv.width_m(), params.distance_m),
        vertical_angle_deg: subtended_angle_deg(tv.height_m(), params.distance_m),
        height_offset_cm: (params.tv_mount_height_m - params.eye_height_m) * 100.0,
        wall_occupancy_percent: tv.width_m() / params.wall_width_m * 100.0,
    })
}
