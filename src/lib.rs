//! TV Viewing Planner WASM Module
//!
//! This is the calculation core for the TV viewing planner. It converts room
//! and TV parameters into viewing angles, proportional layout rectangles for
//! the three synchronized views, and recommendation text. The JavaScript
//! rendering layer calls into this module and does the actual drawing.

pub mod api;
pub mod errors;
pub mod geometry;
pub mod models;
pub mod recommend;
pub mod renderers;

// Re-export commonly used types
pub use errors::PlannerError;
pub use geometry::{compute_geometry, GeometryResult};
pub use models::catalog::{catalog_entry, TvDimensions, TV_SIZE_CATALOG};
pub use models::parameters::ViewingParameters;
pub use recommend::{
    classify_metrics, compose_advisory, recommend_size, AdvisoryContext, MetricBands,
    RecommendationBand, SizeRecommendation,
};
pub use renderers::display_list::{LayoutRect, PovDisplayList, SideViewLayout, TopViewLayout};
pub use renderers::layout_engine::{compute_pov_layout, Viewport};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("TV viewing planner WASM module initialized");
}
