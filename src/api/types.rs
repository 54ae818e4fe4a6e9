//! Shared types for the WASM API
//!
//! This module contains the composite result type returned by the
//! whole-frame recompute.

use crate::geometry::GeometryResult;
use crate::recommend::{MetricBands, SizeRecommendation};
use crate::renderers::display_list::{PovDisplayList, SideViewLayout, TopViewLayout};
use crate::renderers::info_panel::InfoPanel;
use serde::{Deserialize, Serialize};

/// Complete recompute result for one input event
///
/// Mirrors what the rendering layer consumes per update: raw geometry,
/// badge bands, the size recommendation with its advisory prose, formatted
/// panel readings, and the three view layouts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlannerFrame {
    pub geometry: GeometryResult,
    pub bands: MetricBands,
    pub recommendation: SizeRecommendation,
    pub advisory: String,
    pub info_panel: InfoPanel,
    pub pov: PovDisplayList,
    pub top_view: TopViewLayout,
    pub side_view: SideViewLayout,
}
