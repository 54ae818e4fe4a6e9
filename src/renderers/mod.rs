//! Renderer-facing computation for the TV Viewing Planner
//!
//! These modules compute everything the JavaScript layer needs to draw the
//! three views: pre-calculated rectangles, points, tick marks, and label
//! text. The JS layer applies them to DOM elements and canvases without
//! doing any layout math of its own.

pub mod diagrams;
pub mod display_list;
pub mod info_panel;
pub mod layout_engine;

// Re-export commonly used types
pub use diagrams::{compute_side_view_layout, compute_top_view_layout};
pub use display_list::*;
pub use info_panel::{build_info_panel, InfoPanel, MetricReading};
pub use layout_engine::{compute_pov_layout, Viewport};
