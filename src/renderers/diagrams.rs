//! Diagram layouts for the top-down and side-elevation views
//!
//! Computes the scene coordinates the canvas renderer draws: eye position,
//! wall and TV strips, viewing wedges, grid lines, ticks, and captions.
//! Both diagrams plot up to 5.5 m of room depth across 70% of the canvas
//! width, with the eye at 15% from the left.

use crate::errors::PlannerError;
use crate::geometry::subtended_angle_deg;
use crate::models::ViewingParameters;
use crate::renderers::display_list::{
    HeightAnnotation, Label, LayoutRect, Point, SideViewLayout, Tick, TopViewLayout, ViewingWedge,
};
use crate::renderers::layout_engine::Viewport;

/// Room depth covered by the diagram plot area, metres
const DIAGRAM_SPAN_M: f64 = 5.5;

/// Fraction of the canvas width used for the plot area
const PLOT_WIDTH_FRACTION: f64 = 0.7;

/// Eye position as a fraction of the canvas width
const EYE_X_FRACTION: f64 = 0.15;

/// Inner and outer reference wedge full angles, degrees
const OPTIMAL_MIN_ANGLE_DEG: f32 = 30.0;
const OPTIMAL_MAX_ANGLE_DEG: f32 = 40.0;

/// Radius of the angle arc drawn at the eye, pixels
const ANGLE_ARC_RADIUS: f32 = 40.0;

/// Side view: floor line position as a fraction of the canvas height
const FLOOR_Y_FRACTION: f64 = 0.85;

/// Side view: fraction of the canvas height used for the wall height scale
const PLOT_HEIGHT_FRACTION: f64 = 0.65;

/// Side view: offsets below this magnitude get no height annotation, cm
const HEIGHT_ANNOTATION_MIN_CM: f64 = 5.0;

/// Compute the top-down diagram scene
pub fn compute_top_view_layout(
    params: &ViewingParameters,
    viewport: &Viewport,
) -> Result<TopViewLayout, PlannerError> {
    params.validate()?;
    let tv = params.tv()?;

    let w = viewport.width as f64;
    let h = viewport.height as f64;

    let eye_x = w * EYE_X_FRACTION;
    let eye_y = h * 0.5;
    let scale = w * PLOT_WIDTH_FRACTION / DIAGRAM_SPAN_M;

    let tv_x = eye_x + params.distance_m * scale;
    let tv_width_px = tv.width_m() * scale;
    let wall_width_px = params.wall_width_m * scale;

    let mut grid_line_xs = Vec::new();
    let mut metres = 0.0;
    while metres <= DIAGRAM_SPAN_M {
        grid_line_xs.push((eye_x + metres * scale) as f32);
        metres += 0.5;
    }

    let distance_ticks = (1..=5)
        .map(|m| Tick {
            pos: (eye_x + m as f64 * scale) as f32,
            label: format!("{}m", m),
        })
        .collect();

    let angle_deg = subtended_angle_deg(tv.width_m(), params.distance_m);

    Ok(TopViewLayout {
        eye: Point { x: eye_x as f32, y: eye_y as f32 },
        px_per_m: scale as f32,
        grid_line_xs,
        distance_ticks,
        wall: LayoutRect::snapped(tv_x - 5.0, eye_y - wall_width_px / 2.0, 10.0, wall_width_px),
        tv: LayoutRect::snapped(tv_x - 3.0, eye_y - tv_width_px / 2.0, 6.0, tv_width_px),
        viewing_wedge: ViewingWedge {
            apex: Point { x: eye_x as f32, y: eye_y as f32 },
            upper: Point { x: tv_x as f32, y: (eye_y - tv_width_px / 2.0) as f32 },
            lower: Point { x: tv_x as f32, y: (eye_y + tv_width_px / 2.0) as f32 },
        },
        optimal_min_angle_deg: OPTIMAL_MIN_ANGLE_DEG,
        optimal_max_angle_deg: OPTIMAL_MAX_ANGLE_DEG,
        angle_arc_radius: ANGLE_ARC_RADIUS,
        angle_label: Label {
            text: format!("{:.1}°", angle_deg),
            x: (eye_x + 55.0) as f32,
            y: (eye_y + 4.0) as f32,
        },
        seat_label: Label {
            text: "Seat".to_string(),
            x: (eye_x - 15.0) as f32,
            y: (eye_y + 30.0) as f32,
        },
        tv_label: Label {
            text: format!("TV {}\"", tv.size_in),
            x: tv_x as f32,
            y: (eye_y - tv_width_px / 2.0 - 10.0) as f32,
        },
        wall_label: Label {
            text: format!("Wall {:.1}m", params.wall_width_m),
            x: tv_x as f32,
            y: (eye_y + wall_width_px / 2.0 + 15.0) as f32,
        },
    })
}

/// Compute the side-elevation diagram scene
pub fn compute_side_view_layout(
    params: &ViewingParameters,
    viewport: &Viewport,
) -> Result<SideViewLayout, PlannerError> {
    params.validate()?;
    let tv = params.tv()?;

    let w = viewport.width as f64;
    let h = viewport.height as f64;

    let floor_y = h * FLOOR_Y_FRACTION;
    let scale_h = h * PLOT_HEIGHT_FRACTION / params.wall_height_m;
    let scale_d = w * PLOT_WIDTH_FRACTION / DIAGRAM_SPAN_M;

    let eye_x = w * EYE_X_FRACTION;
    let eye_y = floor_y - params.eye_height_m * scale_h;
    let tv_x = eye_x + params.distance_m * scale_d;
    let tv_center_y = floor_y - params.tv_mount_height_m * scale_h;
    let tv_height_px = tv.height_m() * scale_h;
    let wall_height_px = params.wall_height_m * scale_h;

    let distance_ticks = (1..=5)
        .map(|m| Tick {
            pos: (eye_x + m as f64 * scale_d) as f32,
            label: format!("{}m", m),
        })
        .collect();

    let mut height_ticks = Vec::new();
    let mut metres = 0.5;
    while metres <= params.wall_height_m {
        height_ticks.push(Tick {
            pos: (floor_y - metres * scale_h) as f32,
            label: format!("{}m", metres),
        });
        metres += 0.5;
    }

    let height_offset_cm = (params.tv_mount_height_m - params.eye_height_m) * 100.0;
    let height_annotation = if height_offset_cm.abs() > HEIGHT_ANNOTATION_MIN_CM {
        let arrow = if height_offset_cm > 0.0 { "↑" } else { "↓" };
        Some(HeightAnnotation {
            line_x: (tv_x + 25.0) as f32,
            from_y: eye_y as f32,
            to_y: tv_center_y as f32,
            label: Label {
                text: format!("{}{:.0}cm", arrow, height_offset_cm.abs()),
                x: (tv_x + 30.0) as f32,
                y: ((eye_y + tv_center_y) / 2.0) as f32,
            },
            above_eye: height_offset_cm > 0.0,
        })
    } else {
        None
    };

    Ok(SideViewLayout {
        floor_y: floor_y as f32,
        px_per_m_x: scale_d as f32,
        px_per_m_y: scale_h as f32,
        eye: Point { x: eye_x as f32, y: eye_y as f32 },
        wall: LayoutRect::snapped(tv_x - 15.0, floor_y - wall_height_px, 30.0, wall_height_px),
        tv: LayoutRect::snapped(tv_x - 4.0, tv_center_y - tv_height_px / 2.0, 8.0, tv_height_px),
        viewing_wedge: ViewingWedge {
            apex: Point { x: eye_x as f32, y: eye_y as f32 },
            upper: Point { x: tv_x as f32, y: (tv_center_y - tv_height_px / 2.0) as f32 },
            lower: Point { x: tv_x as f32, y: (tv_center_y + tv_height_px / 2.0) as f32 },
        },
        eye_level_line_end_x: (tv_x + 20.0) as f32,
        height_annotation,
        distance_ticks,
        height_ticks,
        eye_label: Label {
            text: format!("Eye {:.2}m", params.eye_height_m),
            x: eye_x as f32,
            y: (eye_y - 30.0) as f32,
        },
        tv_label: Label {
            text: format!("TV {:.2}m", params.tv_mount_height_m),
            x: tv_x as f32,
            y: (tv_center_y - tv_height_px / 2.0 - 10.0) as f32,
        },
        wall_label: Label {
            text: format!("Wall {:.1}m", params.wall_height_m),
            x: tv_x as f32,
            y: (floor_y - wall_height_px - 8.0) as f32,
        },
    })
}
