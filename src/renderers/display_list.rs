//! Display structures for the rendering layer
//!
//! This module defines the output structures returned from the layout
//! modules to JavaScript: positions, dimensions, and label text, all in
//! view-space pixels, ready to render without further calculation.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in view-space pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LayoutRect {
    /// X position of the left edge
    pub left: f32,

    /// Y position of the top edge
    pub top: f32,

    /// Width
    pub width: f32,

    /// Height
    pub height: f32,
}

impl LayoutRect {
    /// Build a rect snapped to 0.1 px precision
    pub fn snapped(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left: snap(left),
            top: snap(top),
            width: snap(width),
            height: snap(height),
        }
    }

    /// X position of the right edge
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Y position of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Round to 0.1 px precision
fn snap(v: f64) -> f32 {
    ((v * 10.0).round() / 10.0) as f32
}

/// A point in view-space pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// A positioned piece of text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// An axis tick with its label text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis (x for distance ticks, y for height ticks)
    pub pos: f32,
    pub label: String,
}

/// A triangular viewing wedge from the eye to the two screen edges
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ViewingWedge {
    pub apex: Point,
    pub upper: Point,
    pub lower: Point,
}

/// Placements for the first-person mockup
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PovDisplayList {
    /// Wall surface rectangle
    pub wall: LayoutRect,

    /// TV surface rectangle, always inside the wall's vertical bounds
    pub tv: LayoutRect,

    /// Human silhouette, bottom-aligned with the wall. Always computed;
    /// visibility is a CSS toggle in the rendering layer.
    pub human: LayoutRect,

    /// TV caption, e.g. `75" | 166×93cm`
    pub tv_label: String,

    /// Wall width caption, e.g. `3.6m`
    pub wall_width_label: String,

    /// Wall height caption, e.g. `2.7m`
    pub wall_height_label: String,

    /// Wall size stat shown in the corner, e.g. `3.6×2.7m`
    pub wall_size_label: String,

    /// Occupancy stat shown in the corner, e.g. `46%`
    pub occupancy_label: String,
}

/// Scene description for the top-down diagram
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TopViewLayout {
    /// Viewer eye position
    pub eye: Point,

    /// Horizontal scale in pixels per metre
    pub px_per_m: f32,

    /// X positions of the half-metre grid lines
    pub grid_line_xs: Vec<f32>,

    /// Whole-metre distance ticks along the bottom
    pub distance_ticks: Vec<Tick>,

    /// Wall strip seen from above
    pub wall: LayoutRect,

    /// TV strip seen from above
    pub tv: LayoutRect,

    /// Wedge from the eye to the TV edges
    pub viewing_wedge: ViewingWedge,

    /// Full angle of the inner reference wedge, degrees
    pub optimal_min_angle_deg: f32,

    /// Full angle of the outer reference wedge, degrees
    pub optimal_max_angle_deg: f32,

    /// Radius of the angle arc drawn at the eye
    pub angle_arc_radius: f32,

    /// Formatted horizontal angle next to the arc
    pub angle_label: Label,

    /// Seat caption near the eye
    pub seat_label: Label,

    /// TV caption above the wall strip
    pub tv_label: Label,

    /// Wall width caption below the wall strip
    pub wall_label: Label,
}

/// Height-difference annotation in the side diagram
///
/// Only present when the offset magnitude exceeds 5 cm.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HeightAnnotation {
    /// X position of the dashed indicator line
    pub line_x: f32,

    /// Y of the eye-level end of the line
    pub from_y: f32,

    /// Y of the TV-center end of the line
    pub to_y: f32,

    /// Arrow glyph plus magnitude, e.g. `↑20cm`
    pub label: Label,

    /// True when the TV center is above eye level (picks the color)
    pub above_eye: bool,
}

/// Scene description for the side-elevation diagram
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SideViewLayout {
    /// Y position of the floor line
    pub floor_y: f32,

    /// Horizontal scale in pixels per metre
    pub px_per_m_x: f32,

    /// Vertical scale in pixels per metre
    pub px_per_m_y: f32,

    /// Viewer eye position
    pub eye: Point,

    /// Wall cross-section
    pub wall: LayoutRect,

    /// TV cross-section, centered on the mount height
    pub tv: LayoutRect,

    /// Wedge from the eye to the TV edges
    pub viewing_wedge: ViewingWedge,

    /// X where the dashed eye-level line ends (past the TV plane)
    pub eye_level_line_end_x: f32,

    /// Height-difference annotation, when the offset is large enough
    pub height_annotation: Option<HeightAnnotation>,

    /// Whole-metre distance ticks along the floor
    pub distance_ticks: Vec<Tick>,

    /// Half-metre height ticks along the right edge
    pub height_ticks: Vec<Tick>,

    /// Eye height caption
    pub eye_label: Label,

    /// TV mount height caption
    pub tv_label: Label,

    /// Wall height caption
    pub wall_label: Label,
}
