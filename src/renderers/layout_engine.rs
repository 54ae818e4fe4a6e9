//! POV layout engine
//!
//! Converts physical wall/TV dimensions into proportional rectangle
//! placements for the first-person mockup. This is not a true 3D
//! projection: the wall is sized by its angular width under a fixed
//! virtual-camera field of view, and everything else is placed by
//! physical proportion within it.

use crate::errors::PlannerError;
use crate::geometry::subtended_angle_deg;
use crate::models::ViewingParameters;
use crate::renderers::display_list::{LayoutRect, PovDisplayList};
use serde::{Deserialize, Serialize};

/// Rendering viewport in CSS pixels, measured by JavaScript
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Horizontal field of view assumed for the mockup's virtual camera, degrees
const POV_CAMERA_FOV_DEG: f64 = 70.0;

/// The wall never takes more than this fraction of the viewport width
const MAX_WALL_WIDTH_FRACTION: f64 = 0.9;

/// The wall never takes more than this fraction of the viewport height
const MAX_WALL_HEIGHT_FRACTION: f64 = 0.8;

/// Upward framing bias, as a fraction of viewport height
const VERTICAL_FRAMING_BIAS: f64 = 0.05;

/// Strength of the eye-height parallax nudge on the TV's vertical position
const EYE_PARALLAX_FACTOR: f64 = 0.2;

/// Reference human height for the silhouette, metres
const HUMAN_HEIGHT_M: f64 = 1.7;

/// Silhouette width-to-height ratio
const HUMAN_ASPECT: f64 = 0.4;

/// Compute the POV mockup placements for one parameter set and viewport
pub fn compute_pov_layout(
    params: &ViewingParameters,
    viewport: &Viewport,
) -> Result<PovDisplayList, PlannerError> {
    params.validate()?;
    let tv = params.tv()?;

    let view_w = viewport.width as f64;
    let view_h = viewport.height as f64;

    // Wall screen width from its angular width, capped so it never
    // overflows the frame at very close distances or very wide walls
    let wall_aspect = params.wall_width_m / params.wall_height_m;
    let wall_angle_deg = subtended_angle_deg(params.wall_width_m, params.distance_m);
    let wall_width_fraction = (wall_angle_deg / POV_CAMERA_FOV_DEG).min(MAX_WALL_WIDTH_FRACTION);
    let wall_w = view_w * wall_width_fraction;

    // Height is authoritative after clamping; width is re-derived from it
    // so the wall's real aspect ratio is never distorted
    let wall_h = (wall_w / wall_aspect).min(view_h * MAX_WALL_HEIGHT_FRACTION);
    let wall_w = wall_h * wall_aspect;

    let wall_left = (view_w - wall_w) / 2.0;
    let wall_top = (view_h - wall_h) / 2.0 - view_h * VERTICAL_FRAMING_BIAS;

    // TV scaled by its physical share of the wall width; height follows the
    // panel's own 16:9 ratio, not the wall's
    let tv_w = wall_w * (tv.width_m() / params.wall_width_m);
    let tv_h = tv_w / tv.aspect_ratio();
    let tv_left = wall_left + (wall_w - tv_w) / 2.0;

    // Mount height measured up from the floor, converted to a top-down
    // offset within the wall
    let center_ratio_from_bottom = params.tv_mount_height_m / params.wall_height_m;
    let tv_center_y_in_wall = wall_h * (1.0 - center_ratio_from_bottom);
    let tv_top = wall_top + tv_center_y_in_wall - tv_h / 2.0;

    // Eye-height parallax nudge, then clamp inside the wall (min before
    // max, so a TV taller than the wall pins to the wall top)
    let eye_center_ratio = params.eye_height_m / params.wall_height_m;
    let view_offset = (eye_center_ratio - 0.5) * wall_h * EYE_PARALLAX_FACTOR;
    let tv_top = (tv_top - view_offset)
        .min(wall_top + wall_h - tv_h)
        .max(wall_top);

    // Silhouette: bottom-aligned with the wall, flush with its left edge,
    // independent of TV placement
    let human_h = (HUMAN_HEIGHT_M / params.wall_height_m) * wall_h;
    let human_w = human_h * HUMAN_ASPECT;

    Ok(PovDisplayList {
        wall: LayoutRect::snapped(wall_left, wall_top, wall_w, wall_h),
        tv: LayoutRect::snapped(tv_left, tv_top, tv_w, tv_h),
        human: LayoutRect::snapped(wall_left, wall_top + wall_h - human_h, human_w, human_h),
        tv_label: format!("{}\" | {}×{}cm", tv.size_in, tv.width_cm.round(), tv.height_cm.round()),
        wall_width_label: format!("{:.1}m", params.wall_width_m),
        wall_height_label: format!("{:.1}m", params.wall_height_m),
        wall_size_label: format!("{:.1}×{:.1}m", params.wall_width_m, params.wall_height_m),
        occupancy_label: format!("{:.0}%", tv.width_m() / params.wall_width_m * 100.0),
    })
}
