//! Info panel readings
//!
//! Formats the computed metrics exactly the way the side panel displays
//! them and attaches the badge band where the panel shows one. The
//! vertical angle is displayed without a badge.

use crate::errors::PlannerError;
use crate::geometry::GeometryResult;
use crate::models::ViewingParameters;
use crate::recommend::bands::{
    classify_height_offset, classify_horizontal_angle, classify_wall_occupancy, RecommendationBand,
};
use serde::{Deserialize, Serialize};

/// A formatted metric value plus its badge band, if the panel shows one
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MetricReading {
    pub text: String,
    pub band: Option<RecommendationBand>,
}

/// Formatted readings for the side panel
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InfoPanel {
    /// Selected size, e.g. `75 in`
    pub size: String,

    /// Panel dimensions, e.g. `166×93cm`
    pub dimensions: String,

    /// Viewing distance, e.g. `3.1 m`
    pub distance: String,

    pub horizontal_angle: MetricReading,
    pub vertical_angle: MetricReading,
    pub height_offset: MetricReading,
    pub wall_occupancy: MetricReading,
}

/// Build the info panel readings for one recompute
pub fn build_info_panel(
    params: &ViewingParameters,
    geometry: &GeometryResult,
) -> Result<InfoPanel, PlannerError> {
    let tv = params.tv()?;

    let offset = geometry.height_offset_cm;
    let sign = if offset >= 0.0 { "+" } else { "" };

    Ok(InfoPanel {
        size: format!("{} in", tv.size_in),
        dimensions: format!("{}×{}cm", tv.width_cm.round(), tv.height_cm.round()),
        distance: format!("{:.1} m", params.distance_m),
        horizontal_angle: MetricReading {
            text: format!("{:.1}°", geometry.horizontal_angle_deg),
            band: Some(classify_horizontal_angle(geometry.horizontal_angle_deg)),
        },
        vertical_angle: MetricReading {
            text: format!("{:.1}°", geometry.vertical_angle_deg),
            band: None,
        },
        height_offset: MetricReading {
            text: format!("{}{:.0}cm", sign, offset),
            band: Some(classify_height_offset(offset)),
        },
        wall_occupancy: MetricReading {
            text: format!("{:.0}%", geometry.wall_occupancy_percent),
            band: Some(classify_wall_occupancy(geometry.wall_occupancy_percent)),
        },
    })
}
